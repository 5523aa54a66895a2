//! Form buffers and their validation
//!
//! A rejected form never reaches the store: the screen shows the error as an
//! alert and aborts the action.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::validation::{is_valid_contact, is_valid_url};
use shared::{Course, ImageRef, NewMenuItem, Price};
use thiserror::Error;
use uuid::Uuid;

/// User-facing validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please enter both username and password.")]
    MissingCredentials,

    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Please complete all fields.")]
    IncompleteFields,

    #[error("Please enter a number for the price.")]
    InvalidPrice,

    #[error("Please enter a valid URL for the image.")]
    InvalidImageUrl,

    #[error("Please enter a valid phone number or email address.")]
    InvalidContact,

    #[error("{0}")]
    NoSelection(String),
}

impl FormError {
    /// Alert title shown above the message
    pub fn title(&self) -> &'static str {
        match self {
            FormError::MissingCredentials => "Login Failed",
            FormError::MissingFields => "Missing Info",
            FormError::IncompleteFields => "Please complete all fields",
            FormError::InvalidPrice => "Invalid Price",
            FormError::InvalidImageUrl => "Invalid Image URL",
            FormError::InvalidContact => "Invalid Contact",
            FormError::NoSelection(_) => "No Selection",
        }
    }

    /// Alert body; empty when the title already says everything
    pub fn alert_message(&self) -> String {
        match self {
            FormError::IncompleteFields => String::new(),
            other => other.to_string(),
        }
    }
}

/// Buffers of the owner's add-dish form
#[derive(Debug, Clone, Default)]
pub struct AddItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub course: Course,
    pub image_url: String,
}

impl AddItemForm {
    pub fn validate(&self) -> Result<NewMenuItem, FormError> {
        if self.name.is_empty() || self.description.is_empty() || self.price.is_empty() {
            return Err(FormError::MissingFields);
        }

        let price: Price = self.price.parse().map_err(|_| FormError::InvalidPrice)?;

        let image_url = self.image_url.trim();
        let image = if image_url.is_empty() {
            None
        } else if is_valid_url(image_url) {
            Some(ImageRef::RemoteUrl(image_url.to_string()))
        } else {
            return Err(FormError::InvalidImageUrl);
        };

        Ok(NewMenuItem {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            course: self.course,
            image,
        })
    }
}

/// Buffers of the customer help form
#[derive(Debug, Clone, Default)]
pub struct HelpForm {
    pub full_name: String,
    pub contact: String,
    pub message: String,
}

/// A validated help query, ready to be sent to the restaurant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelpRequest {
    pub reference: Uuid,
    pub full_name: String,
    pub contact: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl HelpForm {
    pub fn validate(&self) -> Result<HelpRequest, FormError> {
        let full_name = self.full_name.trim();
        let contact = self.contact.trim();
        let message = self.message.trim();
        if full_name.is_empty() || contact.is_empty() || message.is_empty() {
            return Err(FormError::IncompleteFields);
        }
        if !is_valid_contact(contact) {
            return Err(FormError::InvalidContact);
        }

        Ok(HelpRequest {
            reference: Uuid::new_v4(),
            full_name: full_name.to_string(),
            contact: contact.to_string(),
            message: message.to_string(),
            submitted_at: Utc::now(),
        })
    }
}
