//! Scalar coercion of JSON values.
//!
//! These rules back the [`Getter`](crate::Getter) implementation for
//! [`Fields`], the `to_*_array` conversions and aggregation. Every conversion is
//! total: a value that cannot be interpreted yields the target's zero value.

use crate::fields::Fields;
use serde_json::Value;

/// Integer view of `v`. Floats truncate toward zero, numeric strings are parsed,
/// bools are 1/0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_i64(v: &Value) -> i64 {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok()))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// `i32` view of `v`; values outside the `i32` range become 0.
#[must_use]
pub fn to_i32(v: &Value) -> i32 {
    i32::try_from(to_i64(v)).unwrap_or(0)
}

/// Numeric view of `v`, or `None` when it has none.
#[must_use]
pub fn try_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Floating-point view of `v`, 0.0 when there is none.
#[must_use]
pub fn to_f64(v: &Value) -> f64 {
    try_f64(v).unwrap_or(0.0)
}

/// `f32` view of `v`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_f32(v: &Value) -> f32 {
    to_f64(v) as f32
}

/// Truthiness of `v`: bools as-is, non-zero numbers, and the strings `"true"` / `"1"`.
#[must_use]
pub fn to_bool(v: &Value) -> bool {
    match v {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s == "1"
        }
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

/// String view of `v`. `null` is empty, containers render as compact JSON.
#[must_use]
pub fn to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => v.to_string(),
    }
}

/// Mapping view of `v`, `None` unless it is an object.
#[must_use]
pub fn to_fields(v: &Value) -> Option<Fields> {
    match v {
        Value::Object(map) => Some(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
        _ => None,
    }
}
