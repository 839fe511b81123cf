//! Value Objects - Immutable, identity-less domain primitives

mod address;
mod coordinate;

pub use address::AddressQuery;
pub use coordinate::Coordinate;
