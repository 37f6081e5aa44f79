//! Shared serde helpers

use serde::{Deserialize, Deserializer};

/// Deserialize null as default value
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Parse a model year string. Blank or non-numeric input yields `None`.
pub fn parse_model_year(s: &str) -> Option<i32> {
    s.trim().parse().ok()
}
