//! HERE routing integration for Ride Finder
//!
//! Turns a free-text address into nearby transit stations and per-station
//! departure route tables using the HERE geocoder (6.2) and the HERE
//! Public Transit API (v8).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern: [`GeocodingClient`] resolves
//! addresses to coordinates (implemented by [`HereGeocodingClient`]) and
//! [`DepartureClient`] fetches raw station boards (implemented by
//! [`HereDepartureClient`]). [`RoutePlanner`] composes the two with the
//! normalization pipeline into the call paths the web layer consumes.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::AddressQuery;
//! use integration_here::{HereConfig, RoutePlanner};
//!
//! let config = HereConfig { api_key: "...".into(), ..HereConfig::default() };
//! let planner = RoutePlanner::from_config(&config)?;
//!
//! let address = AddressQuery::new("Fredericksburg VA")?;
//! let stations = planner.stations_near(&address).await?;
//! let routes = planner.routes_near(&address).await?;
//! ```

mod config;
mod departures;
mod error;
mod format;
mod geocoding;
mod models;
mod normalize;
mod routing;

pub use config::HereConfig;
pub use departures::{
    DepartureClient, HereDepartureClient, RawAgency, RawBoard, RawDeparture, RawPlace,
    RawPosition, RawTransport,
};
pub use error::RoutingError;
pub use format::format_departure_time;
pub use geocoding::{GeocodingClient, HereGeocodingClient};
pub use models::{RouteEntry, StationEntry};
pub use normalize::{extract_stations, normalize_board};
pub use routing::RoutePlanner;
