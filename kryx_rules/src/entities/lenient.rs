//! Forgiving numeric deserializers for host-supplied records.
//!
//! Sheets are hand-edited, so numeric fields sometimes arrive as strings,
//! booleans or null. Numeric strings are parsed; anything else becomes 0.
//! Integer fields also become 0 when they lie outside [`SHEET_LIMIT`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

fn coerce(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null => return 0.0,
        _ => None,
    };
    match parsed.filter(|n| n.is_finite()) {
        Some(n) => n,
        None => {
            warn!(?value, "non-numeric value in actor record, using 0");
            0.0
        }
    }
}

/// Largest magnitude accepted for an integer sheet value.
pub(crate) const SHEET_LIMIT: f64 = 1_000_000.0;

fn bounded(value: f64) -> f64 {
    let value = value.trunc();
    if value.abs() > SHEET_LIMIT {
        warn!(value, "out of range value in actor record, using 0");
        return 0.0;
    }
    value
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce(&value))
}

/// Like [`number`], but negative values are clamped to 0.
pub(crate) fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(deserializer)?.max(0.0))
}

/// Truncating integer, matching how sheet bonuses are parsed.
pub(crate) fn integer<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(bounded(number(deserializer)?) as i32)
}

pub(crate) fn unsigned<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(bounded(number(deserializer)?).max(0.0) as u32)
}

pub(crate) fn unsigned_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(deserializer)?.trunc().max(0.0) as u64)
}
