//! Operators and comparison rules for the `where_*` family.
//!
//! - Equality is structural, except that numbers compare by value regardless of
//!   representation (`18 == 18.0`).
//! - Ordering (`<`, `<=`, `>`, `>=`) is defined for number/number and string/string
//!   pairs only. Any other pairing fails the predicate.
//! - `in` / `not in` take an array operand; a non-array operand is treated as a
//!   one-element array.
//! - `like` matches strings against a SQL-style pattern (`%` any run, `_` one char).

use crate::resolver::Resolved;
use anyhow::{bail, Error, Result};
use regex::Regex;
use serde_json::{Number, Value};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A comparison operator accepted by [`Collection::where_op`](crate::Collection::where_op)
/// and, as a string token, by [`Collection::where_`](crate::Collection::where_).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    NotIn,
    Like,
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let normalized = token.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_lowercase();
        Ok(match normalized.as_str() {
            "=" | "==" => Self::Eq,
            "!=" | "<>" => Self::Ne,
            "<" => Self::Lt,
            "<=" => Self::Lte,
            ">" => Self::Gt,
            ">=" => Self::Gte,
            "in" => Self::In,
            "not in" => Self::NotIn,
            "like" => Self::Like,
            _ => bail!("unknown where operator `{token}`"),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Like => "like",
        })
    }
}

/// Equality with numeric normalization.
#[must_use]
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match compare_numbers(x, y) {
            Some(ordering) => ordering == Ordering::Equal,
            None => x == y,
        },
        _ => a == b,
    }
}

/// Ordering between two values, `None` when they are not comparable.
#[must_use]
pub fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

// Integers compare exactly; `f64` only when either side is a float.
fn compare_numbers(x: &Number, y: &Number) -> Option<Ordering> {
    match (as_integer(x), as_integer(y)) {
        (Some(x), Some(y)) => Some(x.cmp(&y)),
        _ => x.as_f64()?.partial_cmp(&y.as_f64()?),
    }
}

fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64().map(i128::from).or_else(|| n.as_u64().map(i128::from))
}

/// Translate a SQL `LIKE` pattern into an anchored regex.
pub fn like_regex(pattern: &str) -> Result<Regex> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push_str("(?s)^");
    for c in pattern.chars() {
        match c {
            '%' => source.push_str(".*"),
            '_' => source.push('.'),
            other => source.push_str(&regex::escape(other.encode_utf8(&mut [0u8; 4]))),
        }
    }
    source.push('$');
    Ok(Regex::new(&source)?)
}

/// An operator bound to its operand, ready to test resolved field values.
#[derive(Clone, Debug)]
pub(crate) struct Condition {
    op: Operator,
    operand: Value,
    pattern: Option<Regex>,
}

impl Condition {
    pub(crate) fn new(op: Operator, operand: Value) -> Self {
        let pattern = match (op, &operand) {
            (Operator::Like, Value::String(p)) => like_regex(p)
                .inspect_err(|err| log::warn!("invalid like pattern `{p}`: {err}"))
                .ok(),
            _ => None,
        };
        Self { op, operand, pattern }
    }

    fn contains(&self, value: &Value) -> bool {
        match &self.operand {
            Value::Array(candidates) => candidates.iter().any(|c| values_equal(value, c)),
            single => values_equal(value, single),
        }
    }

    pub(crate) fn matches(&self, resolved: &Resolved) -> bool {
        let Some(value) = resolved.as_value() else {
            return matches!(self.op, Operator::Ne | Operator::NotIn);
        };
        let ordering = || compare(value, &self.operand);
        match self.op {
            Operator::Eq => values_equal(value, &self.operand),
            Operator::Ne => !values_equal(value, &self.operand),
            Operator::Lt => ordering() == Some(Ordering::Less),
            Operator::Lte => matches!(ordering(), Some(Ordering::Less | Ordering::Equal)),
            Operator::Gt => ordering() == Some(Ordering::Greater),
            Operator::Gte => matches!(ordering(), Some(Ordering::Greater | Ordering::Equal)),
            Operator::In => self.contains(value),
            Operator::NotIn => !self.contains(value),
            Operator::Like => match (&self.pattern, value) {
                (Some(re), Value::String(s)) => re.is_match(s),
                _ => false,
            },
        }
    }
}
