//! Date/time handling shared by both transforms
//!
//! Source documents carry timestamps in several ISO-8601 shapes (plain date,
//! local date-time with optional fraction, or RFC 3339 with an offset). All of
//! them are read as wall-clock [`NaiveDateTime`] values; offsets are not applied.

use super::error::TransformError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// The date the ERP uses for "not set" (1900-01-01T00:00:00)
pub fn sentinel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1900, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Parse a timestamp field
///
/// Accepted forms:
/// - `2024-01-15T10:30:00` (optionally with fractional seconds)
/// - `2024-01-15T10:30:00Z` / `2024-01-15T10:30:00+02:00`
/// - `2024-01-15` (midnight)
///
/// # Errors
///
/// Returns `TransformError::InvalidField` naming `field` if none of the forms match.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<NaiveDateTime, TransformError> {
    let text = raw.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }

    Err(TransformError::invalid_field(field, raw))
}

/// Render the date part as `yyyy-MM-dd`
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}
