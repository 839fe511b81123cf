//! HERE geocoding client
//!
//! Converts free-form address strings to geographic coordinates using the
//! [HERE geocoder API](https://geocoder.ls.hereapi.com) (6.2).
//!
//! The provider expects whitespace-delimited tokens joined with a literal
//! `+` in the `searchtext` parameter, so the request URL is assembled by
//! hand instead of going through query-string encoding.

use std::time::Duration;

use async_trait::async_trait;
use domain::{AddressQuery, Coordinate};
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::HereConfig;
use crate::error::RoutingError;

/// Trait for geocoding clients
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form address to a coordinate pair
    ///
    /// Reads the provider's best (first) candidate only; an empty candidate
    /// list fails with `RoutingError::AddressNotFound`, which is terminal
    /// for the address, never retryable.
    async fn geocode(&self, address: &AddressQuery) -> Result<Coordinate, RoutingError>;
}

/// HERE geocoder 6.2 client
#[derive(Debug)]
pub struct HereGeocodingClient {
    client: Client,
    config: HereConfig,
}

impl HereGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &HereConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("RideFinder/1.0")
            .build()
            .map_err(|e| RoutingError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Join whitespace-delimited address tokens with the provider's literal
    /// `+` separator, lowercased
    fn search_text(address: &str) -> String {
        address
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Pull the first candidate's position out of the nested response
    fn first_candidate(raw: &RawGeocodeResponse) -> Option<(f64, f64)> {
        let position = raw
            .response
            .as_ref()?
            .view
            .first()?
            .result
            .first()?
            .location
            .as_ref()?
            .navigation_position
            .first()?;
        Some((position.latitude, position.longitude))
    }
}

#[async_trait]
impl GeocodingClient for HereGeocodingClient {
    #[instrument(skip(self), fields(address = %address))]
    async fn geocode(&self, address: &AddressQuery) -> Result<Coordinate, RoutingError> {
        let url = format!(
            "{}/6.2/geocode.json?apiKey={}&searchtext={}",
            self.config.geocode_base_url,
            self.config.api_key,
            Self::search_text(address.as_str())
        );

        debug!("Geocoding address");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RoutingError::ProviderUnavailable(format!(
                    "geocoding request timed out after {}s",
                    self.config.timeout_secs
                ))
            } else {
                RoutingError::ProviderUnavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RoutingError::ProviderUnavailable(format!("HTTP {status}")));
        }

        let raw: RawGeocodeResponse = response
            .json()
            .await
            .map_err(|e| RoutingError::MalformedPayload(e.to_string()))?;

        // No candidates and missing shape both mean the address cannot be
        // routed, not that the provider misbehaved.
        let (latitude, longitude) = Self::first_candidate(&raw)
            .ok_or_else(|| RoutingError::AddressNotFound(address.to_string()))?;

        let coordinate = Coordinate::new(latitude, longitude)
            .map_err(|e| RoutingError::MalformedPayload(e.to_string()))?;

        debug!(%coordinate, "Geocoded address");
        Ok(coordinate)
    }
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawGeocodeResponse {
    #[serde(rename = "Response")]
    response: Option<RawResponse>,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(rename = "View", default)]
    view: Vec<RawView>,
}

#[derive(Debug, Deserialize)]
struct RawView {
    #[serde(rename = "Result", default)]
    result: Vec<RawResult>,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    #[serde(rename = "Location")]
    location: Option<RawLocation>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    #[serde(rename = "NavigationPosition", default)]
    navigation_position: Vec<RawNavigationPosition>,
}

#[derive(Debug, Deserialize)]
struct RawNavigationPosition {
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_GEOCODE: &str = r#"{
        "Response": {
            "View": [{
                "Result": [{
                    "Location": {
                        "NavigationPosition": [
                            { "Latitude": 38.3, "Longitude": -77.4 },
                            { "Latitude": 38.4, "Longitude": -77.5 }
                        ]
                    }
                }]
            }]
        }
    }"#;

    #[test]
    fn test_search_text_joins_with_plus() {
        assert_eq!(
            HereGeocodingClient::search_text("Fredericksburg VA"),
            "fredericksburg+va"
        );
    }

    #[test]
    fn test_search_text_full_address() {
        assert_eq!(
            HereGeocodingClient::search_text("425 W Spring St Chicago IL"),
            "425+w+spring+st+chicago+il"
        );
    }

    #[test]
    fn test_search_text_collapses_whitespace() {
        assert_eq!(
            HereGeocodingClient::search_text("Fredericksburg \t VA"),
            "fredericksburg+va"
        );
    }

    #[test]
    fn test_first_candidate_takes_top_match() {
        let raw: RawGeocodeResponse = serde_json::from_str(SAMPLE_GEOCODE).unwrap();
        let (lat, lng) = HereGeocodingClient::first_candidate(&raw).unwrap();
        assert!((lat - 38.3).abs() < f64::EPSILON);
        assert!((lng - -77.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_candidate_empty_view() {
        let raw: RawGeocodeResponse =
            serde_json::from_str(r#"{ "Response": { "View": [] } }"#).unwrap();
        assert!(HereGeocodingClient::first_candidate(&raw).is_none());
    }

    #[test]
    fn test_first_candidate_missing_response() {
        let raw: RawGeocodeResponse = serde_json::from_str("{}").unwrap();
        assert!(HereGeocodingClient::first_candidate(&raw).is_none());
    }

    #[test]
    fn test_first_candidate_empty_positions() {
        let body = r#"{
            "Response": {
                "View": [{ "Result": [{ "Location": { "NavigationPosition": [] } }] }]
            }
        }"#;
        let raw: RawGeocodeResponse = serde_json::from_str(body).unwrap();
        assert!(HereGeocodingClient::first_candidate(&raw).is_none());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = HereConfig::default(); // no API key
        assert!(matches!(
            HereGeocodingClient::new(&config),
            Err(RoutingError::Configuration(_))
        ));
    }
}
