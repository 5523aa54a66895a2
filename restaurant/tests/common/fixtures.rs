//! Test fixtures and data for restaurant tests

use restaurant::OwnerCredentials;
use restaurant::core::AddItemForm;
use shared::{Course, ItemId, NewMenuItem, Price};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Seed identifiers from the first menu
    pub const STEAK_ID: &'static str = "4";
    pub const CREME_BRULEE_ID: &'static str = "7";
    pub const MARROW_BONES_ID: &'static str = "1";

    pub const OWNER_USERNAME: &'static str = "owner";
    pub const OWNER_PASSWORD: &'static str = "pass123";

    pub fn steak_id() -> ItemId {
        ItemId::from(Self::STEAK_ID)
    }

    pub fn creme_brulee_id() -> ItemId {
        ItemId::from(Self::CREME_BRULEE_ID)
    }

    pub fn owner() -> OwnerCredentials {
        OwnerCredentials {
            username: Self::OWNER_USERNAME.to_string(),
            password: Self::OWNER_PASSWORD.to_string(),
        }
    }

    /// A dish the owner might add
    pub fn bobotie() -> NewMenuItem {
        NewMenuItem {
            name: "Bobotie".to_string(),
            description: "Spiced mince bake with egg custard.".to_string(),
            price: Price::new(145.0).unwrap(),
            course: Course::Main,
            image: None,
        }
    }

    pub fn bobotie_form() -> AddItemForm {
        AddItemForm {
            name: "Bobotie".to_string(),
            description: "Spiced mince bake with egg custard.".to_string(),
            price: "145".to_string(),
            course: Course::Main,
            image_url: String::new(),
        }
    }

    /// Lines that log the owner in from the welcome screen
    pub fn owner_login() -> Vec<&'static str> {
        vec!["1", Self::OWNER_USERNAME, Self::OWNER_PASSWORD]
    }

    /// Lines that log a customer in from the welcome screen
    pub fn customer_login() -> Vec<&'static str> {
        vec!["1", "guest", "hungry"]
    }
}
