//! Shared types for the restaurant menu and ordering system
//!
//! Contains the domain model, the seed catalogs, field validators and
//! logging utilities used by the terminal application and its tests.

pub mod catalog;
pub mod errors;
pub mod logging;
pub mod types;
pub mod validation;

pub use catalog::CatalogId;
pub use errors::*;
pub use types::*;
