//! Domain-level errors

use thiserror::Error;

/// Errors that can occur when constructing domain value objects
#[derive(Debug, Error)]
pub enum DomainError {
    /// Address text was empty or otherwise unusable
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Coordinates outside the valid latitude/longitude ranges
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_address_error_message() {
        let err = DomainError::InvalidAddress("must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid address: must not be empty");
    }

    #[test]
    fn invalid_coordinates_error_message() {
        let err = DomainError::InvalidCoordinates;
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("longitude"));
    }
}
