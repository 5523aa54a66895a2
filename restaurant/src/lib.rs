//! Restaurant menu browsing and ordering
//!
//! A terminal rendition of a restaurant app: customers browse one of three
//! menus, filter by course and build an order; the owner adds and removes
//! dishes or loads a different menu. All state lives in a single in-memory
//! [`MenuStore`] owned by the [`App`] and lost when the session ends.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod navigation;
pub mod screens;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use app::App;
pub use config::AppConfig;
pub use core::{MenuStore, OwnerCredentials, Role};
pub use error::{RestaurantError, RestaurantResult};
pub use navigation::{Navigator, Route, Transition};
pub use traits::{Console, IdGenerator};
