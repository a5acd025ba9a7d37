// src/utils/lenient.rs

//! Field decoders for store exports, which may carry partial or placeholder values.
//! A value these decoders cannot use becomes "absent" instead of failing the whole snapshot.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a millisecond timestamp, mapping anything non-numeric to `0`.
///
/// The store writes a server-timestamp sentinel object that is only resolved
/// after the write lands; snapshots taken in between carry the sentinel.
/// Fractional values are truncated toward zero.
pub fn lenient_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(millis_from_value(&value))
}

pub fn millis_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Decodes an option key. Only integral numbers count; `null`, strings,
/// fractions and objects decode to `None`, which never matches any key.
pub fn lenient_key<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(key_from_value(&value))
}

pub fn key_from_value(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}
