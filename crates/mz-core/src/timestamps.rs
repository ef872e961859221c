//! Lenient timestamp deserialization.
//!
//! Timestamps are written as RFC 3339 UTC. Memory files produced by earlier
//! versions of MZ store local ISO timestamps without an offset
//! (`2025-12-14T10:00:00.123456`); those are read back as UTC so existing
//! task lists survive an upgrade.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an RFC 3339 timestamp, or an offset-less ISO timestamp as UTC.
///
/// # Errors
///
/// Returns the RFC 3339 parse error when neither form matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
        Err(rfc_error) => NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc_error),
    }
}

/// `deserialize_with` adapter for `DateTime<Utc>` fields.
///
/// # Errors
///
/// Fails when the value is not a string or is not a recognized timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// `deserialize_with` adapter for `Option<DateTime<Utc>>` fields.
///
/// # Errors
///
/// Fails when a non-null value is not a recognized timestamp.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.map(|value| parse_timestamp(&value).map_err(serde::de::Error::custom))
        .transpose()
}
