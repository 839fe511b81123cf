//! Raw payload normalization
//!
//! Flattens raw departure boards into typed route tables and station
//! lists. This is the validation boundary for the provider payload:
//! required fields missing from a record fail here with
//! `RoutingError::MalformedPayload`, never deeper in formatting logic.

use crate::departures::{RawBoard, RawDeparture};
use crate::error::RoutingError;
use crate::format::format_departure_time;
use crate::models::{RouteEntry, StationEntry};

/// Normalize one board's departure records into an ordered route table
///
/// Entries keep the provider's order; position 0..N-1 doubles as the
/// user-facing "Route #N" label, so the same input always yields the same
/// indices. Strictly all-or-nothing: a record missing any required field
/// fails the whole board.
///
/// An empty departure list is a valid, empty table.
///
/// # Errors
///
/// Returns `RoutingError::MalformedPayload` when a record lacks a required
/// field, or `RoutingError::InvalidTimestamp` when a departure time does
/// not parse.
pub fn normalize_board(departures: &[RawDeparture]) -> Result<Vec<RouteEntry>, RoutingError> {
    departures.iter().map(normalize_departure).collect()
}

fn normalize_departure(raw: &RawDeparture) -> Result<RouteEntry, RoutingError> {
    let time = raw
        .time
        .as_deref()
        .ok_or_else(|| missing_field("time"))?;
    let transport = raw
        .transport
        .as_ref()
        .ok_or_else(|| missing_field("transport"))?;
    let mode = transport
        .mode
        .as_deref()
        .ok_or_else(|| missing_field("transport.mode"))?;
    let headsign = transport
        .headsign
        .as_deref()
        .ok_or_else(|| missing_field("transport.headsign"))?;
    let agency = raw
        .agency
        .as_ref()
        .ok_or_else(|| missing_field("agency"))?;
    let name = agency
        .name
        .as_deref()
        .ok_or_else(|| missing_field("agency.name"))?;
    let website = agency
        .website
        .as_deref()
        .ok_or_else(|| missing_field("agency.website"))?;

    Ok(RouteEntry {
        time: format_departure_time(time)?,
        mode: mode.to_string(),
        destination: headsign.to_string(),
        agency: name.to_string(),
        website: website.to_string(),
    })
}

/// Derive the station list from the raw boards payload
///
/// One entry per board regardless of how many departures it has, in board
/// order, so positions line up with the per-board route tables. An empty
/// boards slice yields an empty list, not an error.
///
/// # Errors
///
/// Returns `RoutingError::MalformedPayload` when a board lacks its station
/// name or position; skipping a board would silently shift the positional
/// alignment downstream consumers rely on.
pub fn extract_stations(boards: &[RawBoard]) -> Result<Vec<StationEntry>, RoutingError> {
    boards.iter().map(extract_station).collect()
}

fn extract_station(board: &RawBoard) -> Result<StationEntry, RoutingError> {
    let place = board
        .place
        .as_ref()
        .ok_or_else(|| missing_field("place"))?;
    let name = place
        .name
        .as_deref()
        .ok_or_else(|| missing_field("place.name"))?;
    let location = place
        .location
        .ok_or_else(|| missing_field("place.location"))?;

    Ok(StationEntry {
        name: name.to_string(),
        latitude: location.lat,
        longitude: location.lng,
    })
}

fn missing_field(field: &str) -> RoutingError {
    RoutingError::MalformedPayload(format!("missing field: {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::departures::{RawAgency, RawPlace, RawPosition, RawTransport};

    fn sample_departure(minute: u32) -> RawDeparture {
        RawDeparture {
            time: Some(format!("2026-03-05T14:{minute:02}:00-05:00")),
            transport: Some(RawTransport {
                mode: Some("bus".to_string()),
                headsign: Some("Downtown".to_string()),
            }),
            agency: Some(RawAgency {
                name: Some("FRED Transit".to_string()),
                website: Some("https://example.org".to_string()),
            }),
        }
    }

    fn sample_board(name: &str, departures: Vec<RawDeparture>) -> RawBoard {
        RawBoard {
            place: Some(RawPlace {
                name: Some(name.to_string()),
                location: Some(RawPosition {
                    lat: 38.301,
                    lng: -77.459,
                }),
            }),
            departures,
        }
    }

    #[test]
    fn test_normalize_preserves_order_and_count() {
        let departures = vec![sample_departure(5), sample_departure(20), sample_departure(1)];
        let routes = normalize_board(&departures).unwrap();

        assert_eq!(routes.len(), 3);
        assert!(routes[0].time.ends_with("@02:05 PM"));
        assert!(routes[1].time.ends_with("@02:20 PM"));
        assert!(routes[2].time.ends_with("@02:01 PM"));
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let departures = vec![sample_departure(5), sample_departure(20)];
        let first = normalize_board(&departures).unwrap();
        let second = normalize_board(&departures).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_empty_is_empty() {
        assert!(normalize_board(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_fields() {
        let routes = normalize_board(&[sample_departure(5)]).unwrap();
        let route = &routes[0];
        assert_eq!(route.mode, "bus");
        assert_eq!(route.destination, "Downtown");
        assert_eq!(route.agency, "FRED Transit");
        assert_eq!(route.website, "https://example.org");
    }

    #[test]
    fn test_missing_mode_is_malformed() {
        let mut departure = sample_departure(5);
        departure.transport = Some(RawTransport {
            mode: None,
            headsign: Some("Downtown".to_string()),
        });

        let err = normalize_board(&[departure]).unwrap_err();
        match err {
            RoutingError::MalformedPayload(msg) => assert!(msg.contains("transport.mode")),
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_transport_is_malformed() {
        let mut departure = sample_departure(5);
        departure.transport = None;
        assert!(matches!(
            normalize_board(&[departure]),
            Err(RoutingError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_no_partial_entries_on_failure() {
        // One good record and one bad record fail the whole board
        let mut bad = sample_departure(20);
        bad.agency = None;
        let result = normalize_board(&[sample_departure(5), bad]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_timestamp_propagates() {
        let mut departure = sample_departure(5);
        departure.time = Some("soon".to_string());
        assert!(matches!(
            normalize_board(&[departure]),
            Err(RoutingError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_extract_stations_in_board_order() {
        let boards = vec![
            sample_board("Caroline St", vec![sample_departure(5)]),
            sample_board("Princess Anne St", vec![]),
        ];
        let stations = extract_stations(&boards).unwrap();

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "Caroline St");
        assert_eq!(stations[1].name, "Princess Anne St");
        assert!((stations[0].latitude - 38.301).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extract_stations_empty_is_empty() {
        assert!(extract_stations(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_extract_stations_board_with_zero_departures() {
        let boards = vec![sample_board("Princess Anne St", vec![])];
        let stations = extract_stations(&boards).unwrap();
        assert_eq!(stations.len(), 1);
    }

    #[test]
    fn test_extract_stations_missing_place_is_malformed() {
        let board = RawBoard {
            place: None,
            departures: vec![],
        };
        assert!(matches!(
            extract_stations(&[board]),
            Err(RoutingError::MalformedPayload(_))
        ));
    }
}
