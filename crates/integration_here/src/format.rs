//! Departure time formatting
//!
//! Normalizes provider timestamps into the fixed human-readable form
//! `YYYY-M-D @HH:MM AM|PM` used by templates and persisted route records.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

use crate::error::RoutingError;

/// Render a provider timestamp as `YYYY-M-D @HH:MM AM|PM`
///
/// Year, month, and day are unpadded; the clock hour is 12-hour and
/// zero-padded to two digits, as are the minutes. The AM/PM suffix is
/// chosen by a single hour-of-day < 12 comparison, so midnight renders as
/// `12:xx AM` and noon as `12:xx PM`.
///
/// Wall-clock components are taken as the provider gave them; offsets are
/// never applied to convert into UTC.
///
/// # Errors
///
/// Returns `RoutingError::InvalidTimestamp` if the input does not match
/// the expected timestamp grammar.
pub fn format_departure_time(raw: &str) -> Result<String, RoutingError> {
    let parsed = parse_timestamp(raw)?;

    let meridiem = if parsed.hour() < 12 { "AM" } else { "PM" };
    let clock_hour = match parsed.hour() % 12 {
        0 => 12,
        hour => hour,
    };

    Ok(format!(
        "{}-{}-{} @{:02}:{:02} {}",
        parsed.year(),
        parsed.month(),
        parsed.day(),
        clock_hour,
        parsed.minute(),
        meridiem
    ))
}

/// Parse an ISO-8601 timestamp, with or without a UTC offset
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, RoutingError> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.naive_local());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| RoutingError::InvalidTimestamp(raw.to_string()))
}
