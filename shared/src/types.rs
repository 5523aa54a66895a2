//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Identifier of a menu item, unique within the active menu
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Course a dish is served in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Course {
    #[default]
    Starter,
    Main,
    Dessert,
    Drink,
}

impl Course {
    /// Courses in menu display order
    pub const ALL: [Course; 4] = [Course::Starter, Course::Main, Course::Dessert, Course::Drink];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
            Course::Drink => "Drink",
        }
    }

    /// Section heading used when listing a whole course
    pub fn plural_label(&self) -> &'static str {
        match self {
            Course::Starter => "Starters",
            Course::Main => "Mains",
            Course::Dessert => "Desserts",
            Course::Drink => "Drinks",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Course {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starter" | "starters" => Ok(Course::Starter),
            "main" | "mains" => Ok(Course::Main),
            "dessert" | "desserts" => Ok(Course::Dessert),
            "drink" | "drinks" => Ok(Course::Drink),
            _ => Err(SharedError::InvalidCourse { input: s.to_string() }),
        }
    }
}

/// Non-negative price in rand
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> SharedResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(SharedError::InvalidPrice { input: amount.to_string() });
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = SharedError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: f64 = s
            .trim()
            .parse()
            .map_err(|_| SharedError::InvalidPrice { input: s.to_string() })?;
        Price::new(amount).map_err(|_| SharedError::InvalidPrice { input: s.to_string() })
    }
}

/// Round an amount to whole cents
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Rounded to cents with trailing zeros dropped, e.g. `R24.3`, `R180`
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", round_to_cents(self.0))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Where a dish picture comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageRef {
    /// Asset bundled with the application
    LocalAsset(String),
    /// Picture hosted elsewhere, entered by the owner
    RemoteUrl(String),
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::LocalAsset(path) => write!(f, "asset:{path}"),
            ImageRef::RemoteUrl(url) => write!(f, "{url}"),
        }
    }
}

/// A dish on the active menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub course: Course,
    pub image: Option<ImageRef>,
}

impl MenuItem {
    /// Short listing form, e.g. `Lamb Curry - R170`
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.price)
    }
}

/// A dish before it has been assigned an identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub course: Course,
    pub image: Option<ImageRef>,
}

impl NewMenuItem {
    pub fn with_id(self, id: ItemId) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            course: self.course,
            image: self.image,
        }
    }
}
