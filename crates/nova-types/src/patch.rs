//! Partial-update fields that can be cleared.
//!
//! A nullable patch field is `Option<Option<T>>`: an omitted key leaves the
//! stored value alone (`None`), `null` clears it (`Some(None)`), and a value
//! replaces it (`Some(Some(v))`). Pair with `#[serde(default)]`.

use serde::{Deserialize, Deserializer};

/// `deserialize_with` helper that keeps an explicit `null` distinct from a missing key.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Write a nullable patch field into `target` when the key was present.
pub fn apply_nullable<T>(field: Option<Option<T>>, target: &mut Option<T>) {
    if let Some(value) = field {
        *target = value;
    }
}
