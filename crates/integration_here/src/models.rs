//! Normalized routing models
//!
//! Typed, template-facing representations of stations and departure routes
//! produced from the raw HERE transit payload.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A transit station near the queried origin
///
/// One entry per board in the raw payload, in board order. Positions align
/// with the per-station route tables produced for the same payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationEntry {
    /// Station name as reported by the provider
    pub name: String,
    /// Latitude of the station
    pub latitude: f64,
    /// Longitude of the station
    pub longitude: f64,
}

impl fmt::Display for StationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One upcoming departure on a station board
///
/// Entries are held in a `Vec` whose position doubles as the user-facing
/// "Route #N" label, so insertion order is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEntry {
    /// Departure time rendered as `YYYY-M-D @HH:MM AM|PM`
    pub time: String,
    /// Transport mode (e.g. "bus", "lightRail")
    pub mode: String,
    /// Rider-facing destination label (headsign)
    pub destination: String,
    /// Operating agency name
    pub agency: String,
    /// Operating agency website
    pub website: String,
}

impl RouteEntry {
    /// Format as a compact one-line summary
    #[must_use]
    pub fn format_summary(&self) -> String {
        format!("{} {} → {}", self.time, self.mode, self.destination)
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_summary())
    }
}
