//! Defensive field extraction from oracle JSON
//!
//! Oracle responses are untrusted: fields can be missing, mistyped, or out
//! of range. Every accessor here falls back to the most conservative value
//! instead of erroring, so a sloppy response degrades rather than aborts.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

/// Boolean field; missing or mistyped defaults to `false`
pub(crate) fn bool_field(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Non-negative decimal amount; missing, mistyped, or negative becomes zero
pub(crate) fn amount_field(value: &Value, key: &str) -> Decimal {
    let amount = match value.get(key) {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else {
                n.as_f64().and_then(Decimal::from_f64).unwrap_or(Decimal::ZERO)
            }
        }
        _ => Decimal::ZERO,
    };
    amount.max(Decimal::ZERO)
}

/// Confidence in [0, 1]; missing or mistyped defaults to zero
pub(crate) fn confidence_field(value: &Value, key: &str) -> f64 {
    value
        .get(key)
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .clamp(0.0, 1.0)
}

/// Optional string field; empty strings count as absent
pub(crate) fn opt_str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// String field with empty-string default
pub(crate) fn str_field(value: &Value, key: &str) -> String {
    opt_str_field(value, key).unwrap_or_default()
}
