//! Blank-tolerant deserialization for optional task fields.
//!
//! Older memory files store an omitted priority, category or due date as an
//! empty string rather than `null`. Those read back as `None`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// `deserialize_with` adapter: `null`, `""` and whitespace become `None`,
/// anything else is parsed with [`FromStr`].
///
/// # Errors
///
/// Fails when the value is not a string or null, or when a non-blank value
/// does not parse.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| value.parse().map_err(serde::de::Error::custom))
        .transpose()
}
