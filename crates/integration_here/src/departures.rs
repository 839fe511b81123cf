//! HERE transit departures client
//!
//! Fetches raw nearby-station departure boards from the
//! [HERE Public Transit API](https://transit.hereapi.com) (v8). One board
//! corresponds to one station; the coordinates act as a proximity filter
//! with the provider's default radius (~500 m), which this client assumes
//! but does not enforce.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::HereConfig;
use crate::error::RoutingError;

/// Trait for transit departure board clients
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DepartureClient: Send + Sync {
    /// Fetch the raw departure boards near a coordinate pair
    ///
    /// Returns at least one board on success; an empty or missing boards
    /// list fails with `RoutingError::NoDepartures`.
    async fn fetch_boards(&self, origin: Coordinate) -> Result<Vec<RawBoard>, RoutingError>;
}

/// One station's departure board, as returned by the provider
///
/// Read-only input to normalization; optional fields are validated there,
/// never here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBoard {
    /// Station the board belongs to
    pub place: Option<RawPlace>,
    /// Upcoming departures, in provider order
    #[serde(default)]
    pub departures: Vec<RawDeparture>,
}

/// Station name and position carried on a board
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    /// Station name
    pub name: Option<String>,
    /// Station position
    pub location: Option<RawPosition>,
}

/// A latitude/longitude pair in the provider payload
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawPosition {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// A single raw departure record
#[derive(Debug, Clone, Deserialize)]
pub struct RawDeparture {
    /// Departure timestamp (ISO-8601)
    pub time: Option<String>,
    /// Vehicle information
    pub transport: Option<RawTransport>,
    /// Operating agency
    pub agency: Option<RawAgency>,
}

/// Vehicle mode and headsign
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransport {
    /// Transport mode (e.g. "bus")
    pub mode: Option<String>,
    /// Rider-facing destination label
    pub headsign: Option<String>,
}

/// Operating agency details
#[derive(Debug, Clone, Deserialize)]
pub struct RawAgency {
    /// Agency name
    pub name: Option<String>,
    /// Agency website
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBoardsResponse {
    #[serde(default)]
    boards: Vec<RawBoard>,
}

/// HERE transit v8 departures client
#[derive(Debug)]
pub struct HereDepartureClient {
    client: Client,
    config: HereConfig,
}

impl HereDepartureClient {
    /// Create a new departures client
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

    /// Parse the raw boards response body
    fn parse_boards_response(body: &str) -> Result<Vec<RawBoard>, RoutingError> {
        let raw: RawBoardsResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::MalformedPayload(e.to_string()))?;
        Ok(raw.boards)
    }
}

#[async_trait]
impl DepartureClient for HereDepartureClient {
    #[instrument(skip(self), fields(origin = %origin))]
    async fn fetch_boards(&self, origin: Coordinate) -> Result<Vec<RawBoard>, RoutingError> {
        // The proximity parameter is "in=lat,lng"; the URL is built by hand
        // so the comma reaches the provider unencoded.
        let url = format!(
            "{}/v8/departures?apiKey={}&in={},{}",
            self.config.departures_base_url,
            self.config.api_key,
            origin.latitude(),
            origin.longitude()
        );

        debug!("Fetching departure boards");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RoutingError::ProviderUnavailable(format!(
                    "departures request timed out after {}s",
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

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ProviderUnavailable(e.to_string()))?;

        let boards = Self::parse_boards_response(&body)?;

        if boards.is_empty() {
            return Err(RoutingError::NoDepartures {
                latitude: origin.latitude(),
                longitude: origin.longitude(),
            });
        }

        debug!(count = boards.len(), "Retrieved departure boards");
        Ok(boards)
    }
}
