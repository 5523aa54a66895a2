//! Restaurant application error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestaurantError {
    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Input stream closed")]
    InputClosed,

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl RestaurantError {
    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }
}

pub type RestaurantResult<T> = Result<T, RestaurantError>;
