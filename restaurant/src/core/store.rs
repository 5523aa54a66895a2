//! Menu and order state
//!
//! Pure state management for the active catalog, its dishes and the
//! customer's current order. All operations are synchronous and run to
//! completion; removal of unknown identifiers is a silent no-op.

use shared::{CatalogId, Course, ItemId, MenuItem, NewMenuItem, Price, SharedResult};
use tracing::debug;

use crate::core::pricing;
use crate::traits::IdGenerator;

/// Single source of truth for the active menu and the current order
pub struct MenuStore<G: IdGenerator> {
    menu: Vec<MenuItem>,
    current_catalog: CatalogId,
    order: Vec<MenuItem>,
    ids: G,
}

impl<G: IdGenerator> MenuStore<G> {
    /// Create a store showing `catalog` with an empty order
    pub fn new(catalog: CatalogId, ids: G) -> Self {
        Self {
            menu: catalog.items(),
            current_catalog: catalog,
            order: Vec::new(),
            ids,
        }
    }

    /// Replace the menu with a seed catalog and empty the order
    pub fn switch_catalog(&mut self, catalog: CatalogId) {
        debug!(catalog = catalog.number(), discarded = self.order.len(), "Switching catalog");
        self.menu = catalog.items();
        self.current_catalog = catalog;
        self.order.clear();
    }

    /// Switch by raw catalog number
    ///
    /// Numbers outside 1..=3 are rejected and leave the menu, the catalog
    /// indicator and the order untouched.
    pub fn switch_catalog_number(&mut self, number: u8) -> SharedResult<()> {
        let catalog = CatalogId::try_from(number)?;
        self.switch_catalog(catalog);
        Ok(())
    }

    /// Append a new dish to the menu and return its assigned identifier
    pub fn add_menu_item(&mut self, item: NewMenuItem) -> ItemId {
        let id = self.ids.next_id();
        debug!(id = %id, name = %item.name, course = %item.course, "Adding menu item");
        self.menu.push(item.with_id(id.clone()));
        id
    }

    /// Remove a dish from the menu and every matching order entry
    ///
    /// # Returns
    /// The removed dish, or `None` if no dish had that identifier
    pub fn remove_menu_item(&mut self, id: &ItemId) -> Option<MenuItem> {
        let position = self.menu.iter().position(|item| &item.id == id);
        let removed = position.map(|index| self.menu.remove(index));
        let dropped_from_order = self.remove_from_order(id);
        debug!(
            id = %id,
            found = removed.is_some(),
            dropped_from_order,
            "Removing menu item"
        );
        removed
    }

    /// Append a dish to the order; duplicates are kept as separate entries
    pub fn add_to_order(&mut self, item: MenuItem) {
        debug!(id = %item.id, name = %item.name, "Adding to order");
        self.order.push(item);
    }

    /// Remove every order entry with the identifier
    ///
    /// # Returns
    /// Number of entries removed
    pub fn remove_from_order(&mut self, id: &ItemId) -> usize {
        let before = self.order.len();
        self.order.retain(|item| &item.id != id);
        let removed = before - self.order.len();
        debug!(id = %id, removed, "Removing from order");
        removed
    }

    pub fn clear_order(&mut self) {
        debug!(entries = self.order.len(), "Clearing order");
        self.order.clear();
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn order(&self) -> &[MenuItem] {
        &self.order
    }

    pub fn current_catalog(&self) -> CatalogId {
        self.current_catalog
    }

    pub fn find_item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.menu.iter().find(|item| &item.id == id)
    }

    /// Dishes of one course, in menu order
    pub fn items_for_course(&self, course: Course) -> impl Iterator<Item = &MenuItem> {
        self.menu.iter().filter(move |item| item.course == course)
    }

    pub fn dish_count(&self) -> usize {
        self.menu.len()
    }

    pub fn order_count(&self) -> usize {
        self.order.len()
    }

    /// Sum of prices over the current order
    pub fn order_total(&self) -> Price {
        pricing::order_total(&self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockIdGenerator;

    fn fixed_ids(ids: &'static [&'static str]) -> MockIdGenerator {
        let mut generator = MockIdGenerator::new();
        let mut remaining = ids.iter();
        generator
            .expect_next_id()
            .returning(move || ItemId::from(*remaining.next().expect("test ran out of ids")));
        generator
    }

    fn store() -> MenuStore<MockIdGenerator> {
        MenuStore::new(CatalogId::One, fixed_ids(&["1000", "1001"]))
    }

    fn new_dish(name: &str) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: "House special.".to_string(),
            price: Price::new(99.0).unwrap(),
            course: Course::Main,
            image: None,
        }
    }

    #[test]
    fn test_new_store_starts_on_catalog_with_empty_order() {
        let store = store();
        assert_eq!(store.current_catalog(), CatalogId::One);
        assert_eq!(store.dish_count(), 10);
        assert_eq!(store.order_count(), 0);
        assert_eq!(store.order_total(), Price::ZERO);
    }

    #[test]
    fn test_switch_catalog_replaces_menu_and_clears_order() {
        let mut store = store();
        let steak = store.find_item(&ItemId::from("4")).cloned().unwrap();
        store.add_to_order(steak);
        store.add_menu_item(new_dish("Bobotie"));

        store.switch_catalog(CatalogId::Three);

        assert_eq!(store.current_catalog(), CatalogId::Three);
        assert_eq!(store.menu(), CatalogId::Three.items().as_slice());
        assert!(store.order().is_empty());
    }

    #[test]
    fn test_switch_catalog_number_out_of_range_changes_nothing() {
        let mut store = store();
        let juice = store.find_item(&ItemId::from("10")).cloned().unwrap();
        store.add_to_order(juice);

        assert!(store.switch_catalog_number(7).is_err());
        assert_eq!(store.current_catalog(), CatalogId::One);
        assert_eq!(store.dish_count(), 10);
        assert_eq!(store.order_count(), 1);

        store.switch_catalog_number(2).unwrap();
        assert_eq!(store.current_catalog(), CatalogId::Two);
        assert_eq!(store.order_count(), 0);
    }

    #[test]
    fn test_add_menu_item_assigns_generated_id() {
        let mut store = store();
        let first = store.add_menu_item(new_dish("Bobotie"));
        let second = store.add_menu_item(new_dish("Bobotie"));

        assert_eq!(first.as_str(), "1000");
        assert_eq!(second.as_str(), "1001");
        assert_eq!(store.dish_count(), 12);
        assert_eq!(store.find_item(&first).unwrap(), &new_dish("Bobotie").with_id(first.clone()));
        assert_eq!(store.menu().last().unwrap().id, second);
    }

    #[test]
    fn test_remove_menu_item_drops_order_entries() {
        let mut store = store();
        let id = ItemId::from("7");
        let dessert = store.find_item(&id).cloned().unwrap();
        store.add_to_order(dessert.clone());
        store.add_to_order(dessert);

        let removed = store.remove_menu_item(&id).unwrap();
        assert_eq!(removed.name, "Crème Brûlée");
        assert!(store.find_item(&id).is_none());
        assert!(store.order().is_empty());

        // Second removal is a no-op
        assert!(store.remove_menu_item(&id).is_none());
        assert_eq!(store.dish_count(), 9);
    }

    #[test]
    fn test_remove_from_order_removes_all_matching_entries() {
        let mut store = store();
        let bones = store.find_item(&ItemId::from("1")).cloned().unwrap();
        let soup = store.find_item(&ItemId::from("2")).cloned().unwrap();
        store.add_to_order(bones.clone());
        store.add_to_order(soup.clone());
        store.add_to_order(bones.clone());

        assert_eq!(store.remove_from_order(&bones.id), 2);
        assert_eq!(store.order(), &[soup]);
        assert_eq!(store.remove_from_order(&ItemId::from("missing")), 0);
        // Menu untouched
        assert_eq!(store.dish_count(), 10);
    }

    #[test]
    fn test_items_for_course_keeps_menu_order() {
        let store = store();
        let drinks: Vec<&str> = store.items_for_course(Course::Drink).map(|i| i.name.as_str()).collect();
        assert_eq!(drinks, vec!["Mocktail Mojito", "Pineapple / Cranberry Juice"]);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_every_mutation_logs_at_debug() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut store = store();
            let steak = store.find_item(&ItemId::from("4")).cloned().unwrap();
            store.add_to_order(steak);
            store.remove_from_order(&ItemId::from("4"));
            let id = store.add_menu_item(new_dish("Bobotie"));
            store.remove_menu_item(&id);
            store.clear_order();
            store.switch_catalog(CatalogId::Two);
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        for message in [
            "Adding to order",
            "Removing from order",
            "Adding menu item",
            "Removing menu item",
            "Clearing order",
            "Switching catalog",
        ] {
            assert!(output.contains(message), "missing debug line: {message}\n{output}");
        }
        assert!(output.contains("removed=1"));
    }
}
