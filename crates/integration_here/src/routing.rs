//! Route planning facade
//!
//! Composes the geocoding and departures clients into the two call paths
//! the web layer consumes: address → station list and address →
//! per-station route tables. Every call is request-scoped and one-shot; the
//! planner holds no mutable state, so concurrent requests stay isolated.

use std::sync::Arc;

use domain::{AddressQuery, Coordinate};
use tracing::instrument;

use crate::config::HereConfig;
use crate::departures::{DepartureClient, HereDepartureClient};
use crate::error::RoutingError;
use crate::geocoding::{GeocodingClient, HereGeocodingClient};
use crate::models::{RouteEntry, StationEntry};
use crate::normalize::{extract_stations, normalize_board};

/// Facade over the geocode → departures → normalize pipeline
///
/// Station lists and route tables produced from the same address within one
/// call are positionally aligned: station `i` owns route table `i`.
#[derive(Clone)]
pub struct RoutePlanner {
    geocoder: Arc<dyn GeocodingClient>,
    departures: Arc<dyn DepartureClient>,
}

impl std::fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlanner").finish_non_exhaustive()
    }
}

impl RoutePlanner {
    /// Create a planner from existing clients
    #[must_use]
    pub fn new(geocoder: Arc<dyn GeocodingClient>, departures: Arc<dyn DepartureClient>) -> Self {
        Self {
            geocoder,
            departures,
        }
    }

    /// Create a planner backed by the HERE clients
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &HereConfig) -> Result<Self, RoutingError> {
        Ok(Self::new(
            Arc::new(HereGeocodingClient::new(config)?),
            Arc::new(HereDepartureClient::new(config)?),
        ))
    }

    /// Resolve an address to its origin coordinate
    ///
    /// # Errors
    ///
    /// Propagates `RoutingError::AddressNotFound` when the address does not
    /// geocode.
    #[instrument(skip(self), fields(address = %address))]
    pub async fn locate(&self, address: &AddressQuery) -> Result<Coordinate, RoutingError> {
        self.geocoder.geocode(address).await
    }

    /// Find transit stations near an address
    ///
    /// One entry per discovered board, in provider order.
    ///
    /// # Errors
    ///
    /// Propagates `AddressNotFound` and `NoDepartures` unchanged.
    #[instrument(skip(self), fields(address = %address))]
    pub async fn stations_near(
        &self,
        address: &AddressQuery,
    ) -> Result<Vec<StationEntry>, RoutingError> {
        let origin = self.geocoder.geocode(address).await?;
        let boards = self.departures.fetch_boards(origin).await?;
        extract_stations(&boards)
    }

    /// Build the per-station route tables near an address
    ///
    /// One table per discovered board, in provider order; each table is
    /// indexed 0..N-1 in departure order.
    ///
    /// # Errors
    ///
    /// Propagates `AddressNotFound` and `NoDepartures` unchanged.
    #[instrument(skip(self), fields(address = %address))]
    pub async fn routes_near(
        &self,
        address: &AddressQuery,
    ) -> Result<Vec<Vec<RouteEntry>>, RoutingError> {
        let origin = self.geocoder.geocode(address).await?;
        let boards = self.departures.fetch_boards(origin).await?;
        boards
            .iter()
            .map(|board| normalize_board(&board.departures))
            .collect()
    }
}
