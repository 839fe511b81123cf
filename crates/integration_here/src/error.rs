//! Routing error types

use thiserror::Error;

/// Errors surfaced by the routing core to its caller (the web layer)
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The address did not geocode to any candidate
    ///
    /// Terminal for the given address; callers must not treat this as
    /// transient or retryable.
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// No transit boards near the coordinates
    ///
    /// An expected outcome (e.g. a rural address), not a system error.
    #[error("No departures near {latitude},{longitude}")]
    NoDepartures {
        /// Latitude of the queried origin
        latitude: f64,
        /// Longitude of the queried origin
        longitude: f64,
    },

    /// Provider response was missing the expected shape or fields
    #[error("Malformed provider payload: {0}")]
    MalformedPayload(String),

    /// A departure timestamp did not match the expected grammar
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Network or transport failure, including bounded-timeout expiry
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RoutingError {
    /// True for outcomes the web layer maps to its not-found page rather
    /// than an error page
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::AddressNotFound(_) | Self::NoDepartures { .. })
    }
}
