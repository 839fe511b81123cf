//! Domain layer for Ride Finder
//!
//! Value objects shared between the routing core and the web layer.
//! This layer has no knowledge of providers, transport, or persistence.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{AddressQuery, Coordinate};
