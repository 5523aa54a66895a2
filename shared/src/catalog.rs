//! The three seed menus compiled into the application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};
use crate::types::{Course, ImageRef, ItemId, MenuItem, Price};

/// Selects one of the three seed catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CatalogId {
    #[default]
    One,
    Two,
    Three,
}

impl CatalogId {
    pub const ALL: [CatalogId; 3] = [CatalogId::One, CatalogId::Two, CatalogId::Three];

    pub fn number(&self) -> u8 {
        match self {
            CatalogId::One => 1,
            CatalogId::Two => 2,
            CatalogId::Three => 3,
        }
    }

    /// Fresh copy of the catalog's dishes
    pub fn items(&self) -> Vec<MenuItem> {
        let rows = match self {
            CatalogId::One => MENU_ONE,
            CatalogId::Two => MENU_TWO,
            CatalogId::Three => MENU_THREE,
        };
        rows.iter().map(SeedRow::to_item).collect()
    }

    /// Plain-text listing grouped by course, one dish per entry with its
    /// description on the following line
    pub fn to_text(&self) -> String {
        let items = self.items();
        let mut out = format!("{self}\n");
        for course in Course::ALL {
            out.push_str(&format!("{}\n", course.plural_label()));
            for item in items.iter().filter(|item| item.course == course) {
                out.push_str(&format!("  [{:>2}] {}\n       {}\n", item.id.as_str(), item.label(), item.description));
            }
        }
        out
    }

    /// Catalog rendered as pretty-printed JSON
    pub fn to_json(&self) -> SharedResult<String> {
        serde_json::to_string_pretty(&self.items())
            .map_err(|e| SharedError::SerializationError { message: e.to_string() })
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Menu {}", self.number())
    }
}

impl TryFrom<u8> for CatalogId {
    type Error = SharedError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(CatalogId::One),
            2 => Ok(CatalogId::Two),
            3 => Ok(CatalogId::Three),
            other => Err(SharedError::InvalidCatalog { input: other.to_string() }),
        }
    }
}

impl FromStr for CatalogId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| SharedError::InvalidCatalog { input: s.to_string() })
            .and_then(CatalogId::try_from)
    }
}

struct SeedRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    course: Course,
    image: &'static str,
}

impl SeedRow {
    fn to_item(&self) -> MenuItem {
        MenuItem {
            id: ItemId::from(self.id),
            name: self.name.to_string(),
            description: self.description.to_string(),
            // Seed prices are literal non-negative constants
            price: Price::new(self.price).unwrap_or_default(),
            course: self.course,
            image: Some(ImageRef::LocalAsset(format!("assets/images/{}", self.image))),
        }
    }
}

const fn row(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    course: Course,
    image: &'static str,
) -> SeedRow {
    SeedRow { id, name, description, price, course, image }
}

const MENU_ONE: &[SeedRow] = &[
    row("1", "Marrow Bones", "Oven-roasted with croutes.", 110.0, Course::Starter, "marrow.jpg"),
    row("2", "Italian Tomato Soup", "Served with Parmesan croutons.", 110.0, Course::Starter, "Italian.jpg"),
    row("3", "Pork Belly Bites", "Served on a bed of Dijon mustard.", 100.0, Course::Starter, "Pork_bites.jpg"),
    row("4", "Bone Marrow Steak", "200g rump or sirloin topped with bone marrow butter.", 180.0, Course::Main, "steak_rump.jpg"),
    row("5", "Deboned Half Chicken", "Brushed with lemon & herb, peri-peri or BBQ basting.", 150.0, Course::Main, "chicken_deboned.jpg"),
    row("6", "Pork Belly 300g", "Served with a side of your choice.", 160.0, Course::Main, "pork_belly.jpg"),
    row("7", "Crème Brûlée", "Caramelised sugar encasing silky custard.", 80.0, Course::Dessert, "creme.jpg"),
    row("8", "Malva Pudding", "Sticky sponge with warm custard drizzle.", 90.0, Course::Dessert, "malva.jpg"),
    row("9", "Mocktail Mojito", "Mint, lime and soda.", 50.0, Course::Drink, "mocktail_mojito.jpg"),
    row("10", "Pineapple / Cranberry Juice", "Sweet and tropical.", 35.0, Course::Drink, "Juice.jpg"),
];

const MENU_TWO: &[SeedRow] = &[
    row("11", "Garlic Bread", "Toasted baguette with garlic butter.", 65.0, Course::Starter, "garlic_bread.jpg"),
    row("12", "Stuffed Mushrooms", "Filled with herbs and cream cheese.", 90.0, Course::Starter, "stuffed_mushrooms.jpg"),
    row("13", "Chicken Livers", "Spicy peri-peri chicken livers with toast.", 95.0, Course::Starter, "chicken_livers.jpg"),
    row("14", "Grilled Ribeye 300g", "Juicy ribeye grilled to perfection.", 220.0, Course::Main, "ribeye.jpg"),
    row("15", "Seafood Pasta", "Creamy pasta with prawns and calamari.", 180.0, Course::Main, "seafood_pasta.jpg"),
    row("16", "Lamb Curry", "Slow-cooked lamb in aromatic curry sauce.", 170.0, Course::Main, "lamb_curry.jpg"),
    row("17", "Chocolate Brownie", "Rich chocolate brownie with ice cream.", 85.0, Course::Dessert, "brownie.jpg"),
    row("18", "Apple Pie", "Classic pie served warm with cream.", 80.0, Course::Dessert, "apple_pie.jpg"),
    row("19", "Berry Smoothie", "Mixed berry and yoghurt smoothie.", 55.0, Course::Drink, "smoothie.jpg"),
    row("20", "Iced Tea", "Chilled lemon iced tea.", 40.0, Course::Drink, "iced_tea.jpg"),
];

const MENU_THREE: &[SeedRow] = &[
    row("21", "Caprese Salad", "Mozzarella, tomato & basil with olive oil.", 95.0, Course::Starter, "caprese.jpg"),
    row("22", "Spring Rolls", "Crispy rolls filled with veggies.", 85.0, Course::Starter, "spring_rolls.jpg"),
    row("23", "Butternut Soup", "Creamy roasted butternut soup.", 90.0, Course::Starter, "butternut_soup.jpg"),
    row("24", "Lamb Chops", "Grilled chops with rosemary and mint jelly.", 220.0, Course::Main, "lamb.jpg"),
    row("25", "Beef Burger Deluxe", "200g patty with cheese, bacon & fries.", 160.0, Course::Main, "burger.jpg"),
    row("26", "Chicken Alfredo", "Creamy pasta with grilled chicken.", 155.0, Course::Main, "alfredo.jpg"),
    row("27", "Cheesecake Slice", "Smooth vanilla cheesecake slice.", 90.0, Course::Dessert, "cheesecake.jpg"),
    row("28", "Tiramisu", "Classic Italian coffee dessert.", 95.0, Course::Dessert, "tiramisu.jpg"),
    row("29", "Iced Coffee", "Chilled espresso with milk and ice.", 45.0, Course::Drink, "iced_coffee.jpg"),
    row("30", "Lemonade", "Freshly squeezed homemade lemonade.", 35.0, Course::Drink, "lemonade.jpg"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_each_catalog_has_ten_unique_items() {
        let mut all_ids = HashSet::new();
        for catalog in CatalogId::ALL {
            let items = catalog.items();
            assert_eq!(items.len(), 10, "{catalog} should have 10 dishes");
            for item in items {
                assert!(all_ids.insert(item.id.clone()), "duplicate id {}", item.id);
            }
        }
        assert_eq!(all_ids.len(), 30);
    }

    #[test]
    fn test_catalog_course_split() {
        for catalog in CatalogId::ALL {
            let items = catalog.items();
            let count = |course: Course| items.iter().filter(|i| i.course == course).count();
            assert_eq!(count(Course::Starter), 3);
            assert_eq!(count(Course::Main), 3);
            assert_eq!(count(Course::Dessert), 2);
            assert_eq!(count(Course::Drink), 2);
        }
    }

    #[test]
    fn test_catalog_number_parsing() {
        assert_eq!(CatalogId::try_from(2).unwrap(), CatalogId::Two);
        assert_eq!("3".parse::<CatalogId>().unwrap(), CatalogId::Three);
        assert!(matches!(
            CatalogId::try_from(4),
            Err(SharedError::InvalidCatalog { .. })
        ));
        assert!("zero".parse::<CatalogId>().is_err());
        assert_eq!(CatalogId::default(), CatalogId::One);
    }

    #[test]
    fn test_seed_prices_and_images() {
        let items = CatalogId::One.items();
        assert_eq!(items[3].name, "Bone Marrow Steak");
        assert_eq!(items[3].price.amount(), 180.0);
        assert_eq!(
            items[0].image,
            Some(ImageRef::LocalAsset("assets/images/marrow.jpg".to_string()))
        );
    }

    #[test]
    fn test_catalog_text_listing() {
        let text = CatalogId::One.to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Menu 1");
        assert_eq!(lines[1], "Starters");
        assert_eq!(lines[2], "  [ 1] Marrow Bones - R110");
        assert_eq!(lines[3], "       Oven-roasted with croutes.");
        assert_eq!(lines.len(), 1 + 4 + 10 * 2);

        let mains = text.find("Mains").unwrap();
        let steak = text.find("[ 4] Bone Marrow Steak - R180").unwrap();
        let desserts = text.find("Desserts").unwrap();
        assert!(mains < steak && steak < desserts);
        assert!(text.ends_with("Sweet and tropical.\n"));
    }

    #[test]
    fn test_catalog_json_export() {
        let json = CatalogId::Two.to_json().unwrap();
        let items: Vec<MenuItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(items, CatalogId::Two.items());
        assert!(json.contains("\"Lamb Curry\""));
    }
}
