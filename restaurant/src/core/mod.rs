//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies.

pub mod auth;
pub mod forms;
pub mod pricing;
pub mod store;

pub use auth::{OwnerCredentials, Role, authenticate};
pub use forms::{AddItemForm, FormError, HelpForm, HelpRequest};
pub use pricing::CourseAverage;
pub use store::MenuStore;
