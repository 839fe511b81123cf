//! Address query value object
//!
//! A free-text address used to anchor a route search. Can be as simple as
//! a city and state, or a full building address such as
//! `425 W Spring St Chicago IL`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated free-text address query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressQuery {
    value: String,
}

impl AddressQuery {
    /// Create an address query from free text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty or whitespace-only.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let value = text.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::InvalidAddress(
                "address must not be empty".to_string(),
            ));
        }
        Ok(Self { value })
    }

    /// Compose an address query from city/state parts and an optional
    /// street address
    ///
    /// The street address, when present, is prepended to the city and
    /// state.
    ///
    /// # Errors
    ///
    /// Returns an error if city or state is empty.
    pub fn from_parts(
        city: &str,
        state: &str,
        street_address: Option<&str>,
    ) -> Result<Self, DomainError> {
        if city.trim().is_empty() || state.trim().is_empty() {
            return Err(DomainError::InvalidAddress(
                "city and state must not be empty".to_string(),
            ));
        }
        let text = match street_address.map(str::trim) {
            Some(street) if !street.is_empty() => {
                format!("{street} {} {}", city.trim(), state.trim())
            }
            _ => format!("{} {}", city.trim(), state.trim()),
        };
        Self::new(text)
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for AddressQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
