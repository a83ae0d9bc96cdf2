//! Serde helpers for columns the server may send as `null`.

use serde::{Deserialize, Deserializer};

/// Deserialize a string that may be `null` or missing into an empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
