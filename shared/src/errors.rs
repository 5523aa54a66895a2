//! Shared error types for the restaurant system

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid catalog: {input} (expected 1, 2 or 3)")]
    InvalidCatalog { input: String },

    #[error("Invalid price: {input}")]
    InvalidPrice { input: String },

    #[error("Invalid course: {input}")]
    InvalidCourse { input: String },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
