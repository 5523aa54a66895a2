//! Owner/customer login check
//!
//! Plain string comparison against the configured owner credentials. This only
//! picks which screens a user sees; it is not access control.

use std::fmt;

use crate::core::forms::FormError;

pub const DEFAULT_OWNER_USERNAME: &str = "owner";
pub const DEFAULT_OWNER_PASSWORD: &str = "pass123";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerCredentials {
    pub username: String,
    pub password: String,
}

impl Default for OwnerCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_OWNER_USERNAME.to_string(),
            password: DEFAULT_OWNER_PASSWORD.to_string(),
        }
    }
}

/// Which flow a login leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Customer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::Customer => write!(f, "customer"),
        }
    }
}

/// Blank fields are rejected; the owner pair must match exactly, and any
/// other non-blank pair logs in as a customer
pub fn authenticate(username: &str, password: &str, owner: &OwnerCredentials) -> Result<Role, FormError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(FormError::MissingCredentials);
    }
    if username == owner.username && password == owner.password {
        Ok(Role::Owner)
    } else {
        Ok(Role::Customer)
    }
}
