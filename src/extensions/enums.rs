use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::errors::{Error, Result};

/// Comma-separated list of every variant's string form, for error messages.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a strum enum, turning failure into a parse error that names the
/// accepted values.
pub fn parse_variant<T>(raw: &str, what: &str) -> Result<T>
where
    T: IntoEnumIterator + AsRef<str> + FromStr,
{
    T::from_str(raw.trim()).map_err(|_| {
        Error::Parse(format!(
            "Invalid {what}: '{}'. Valid values: {}",
            raw.trim(),
            valid_csv::<T>()
        ))
    })
}
