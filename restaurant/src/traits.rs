//! Trait definitions with mockall annotations for testing
//!
//! The application talks to the outside world only through these traits so
//! screens and the store can be driven deterministically in tests.

use shared::ItemId;

use crate::error::RestaurantResult;

/// Line-oriented terminal abstraction used by every screen
#[mockall::automock]
#[async_trait::async_trait]
pub trait Console: Send {
    /// Print a block of text followed by a newline
    async fn show(&mut self, text: &str) -> RestaurantResult<()>;

    /// Print `prompt` and read one line of input, without its line ending
    ///
    /// # Returns
    /// `None` once the input stream is exhausted
    async fn read_line(&mut self, prompt: &str) -> RestaurantResult<Option<String>>;

    /// Surface a blocking, titled message
    async fn alert(&mut self, title: &str, message: &str) -> RestaurantResult<()>;
}

/// Source of identifiers for dishes added by the owner
#[mockall::automock]
pub trait IdGenerator: Send {
    /// Produce an identifier never returned before by this generator
    fn next_id(&mut self) -> ItemId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_id_generator_sequence() {
        let mut ids = MockIdGenerator::new();
        let mut seq = mockall::Sequence::new();
        ids.expect_next_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| ItemId::from("a"));
        ids.expect_next_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| ItemId::from("b"));

        assert_eq!(ids.next_id().as_str(), "a");
        assert_eq!(ids.next_id().as_str(), "b");
    }

    #[tokio::test]
    async fn test_mock_console_alert() {
        let mut console = MockConsole::new();
        console
            .expect_alert()
            .withf(|title, message| title == "Removed" && message.contains("Tiramisu"))
            .times(1)
            .returning(|_, _| Ok(()));

        console.alert("Removed", "Tiramisu has been removed.").await.unwrap();
    }
}
