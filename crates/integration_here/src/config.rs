//! HERE service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the HERE geocoding and transit departures services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HereConfig {
    /// API key shared by both HERE services
    #[serde(default)]
    pub api_key: String,

    /// Base URL for the HERE geocoder API
    #[serde(default = "default_geocode_base_url")]
    pub geocode_base_url: String,

    /// Base URL for the HERE transit API
    #[serde(default = "default_departures_base_url")]
    pub departures_base_url: String,

    /// Request timeout in seconds, applied to both outbound calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocode_base_url() -> String {
    "https://geocoder.ls.hereapi.com".to_string()
}

fn default_departures_base_url() -> String {
    "https://transit.hereapi.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for HereConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            geocode_base_url: default_geocode_base_url(),
            departures_base_url: default_departures_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HereConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.geocode_base_url.is_empty() || self.departures_base_url.is_empty() {
            return Err("base URLs must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
