//! Dynamic records and typed access to them.
//!
//! [`Fields`] is the string-keyed mapping used as a collection element for
//! dynamic data and as the result of projections. The [`Getter`] and
//! [`OptionalGetter`] traits describe typed reads by key, the same contract
//! configuration providers expose, and [`Context`] untyped get/set; all are implemented for `Fields` with exact,
//! case-sensitive key lookup and the coercion rules in [`convert`](crate::convert).
//!
//! ```
//! use fieldset::{Fields, Getter, OptionalGetter};
//! use serde_json::json;
//!
//! let f: Fields = serde_json::from_value(json!({
//!     "port": "8080",
//!     "debug": true,
//!     "db": { "host": "localhost" }
//! }))?;
//!
//! assert_eq!(f.get_int("port"), 8080);
//! assert!(f.get_bool("debug"));
//! assert_eq!(f.get_fields("db").get_string("host"), "localhost");
//! assert_eq!(f.int_option("timeout", 30), 30);
//! # anyhow::Result::<()>::Ok(())
//! ```

use crate::convert;
use serde_json::Value;
use std::collections::HashMap;

/// Unordered mapping from field name to an arbitrary JSON value.
pub type Fields = HashMap<String, Value>;

/// Types that render themselves as JSON text.
pub trait Json {
    fn to_json(&self) -> String;
}

/// Types that can hand out their contents as [`Fields`].
pub trait FieldsProvider {
    fn fields(&self) -> Fields;
}

/// Untyped string-keyed storage, such as a request or job context.
///
/// `value` is `Null` for an absent key; `set_value` inserts or replaces.
pub trait Context {
    fn value(&self, key: &str) -> Value;
    fn set_value(&mut self, key: &str, value: Value);
}

/// Typed reads by key. Absent keys and unconvertible values yield the zero value.
pub trait Getter {
    fn get_string(&self, key: &str) -> String;
    fn get_int64(&self, key: &str) -> i64;
    fn get_int(&self, key: &str) -> i32;
    fn get_float64(&self, key: &str) -> f64;
    fn get_float(&self, key: &str) -> f32;
    fn get_bool(&self, key: &str) -> bool;
    fn get_fields(&self, key: &str) -> Fields;
}

/// Typed reads by key with a caller default for absent (or `null`) keys.
pub trait OptionalGetter {
    fn string_option(&self, key: &str, default_value: &str) -> String;
    fn int64_option(&self, key: &str, default_value: i64) -> i64;
    fn int_option(&self, key: &str, default_value: i32) -> i32;
    fn float64_option(&self, key: &str, default_value: f64) -> f64;
    fn float_option(&self, key: &str, default_value: f32) -> f32;
    fn bool_option(&self, key: &str, default_value: bool) -> bool;
    fn fields_option(&self, key: &str, default_value: Fields) -> Fields;
}

fn lookup<'a>(fields: &'a Fields, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

macro_rules! fields_getters {
    ($($name:ident => $ty:ty, $conv:path;)*) => {
        paste::paste! {
            impl Getter for Fields {
                $(
                    fn [<get_ $name>](&self, key: &str) -> $ty {
                        lookup(self, key).map($conv).unwrap_or_default()
                    }
                )*

                fn get_string(&self, key: &str) -> String {
                    lookup(self, key).map(convert::to_string).unwrap_or_default()
                }

                fn get_fields(&self, key: &str) -> Fields {
                    lookup(self, key).and_then(convert::to_fields).unwrap_or_default()
                }
            }

            impl OptionalGetter for Fields {
                $(
                    fn [<$name _option>](&self, key: &str, default_value: $ty) -> $ty {
                        lookup(self, key).map_or(default_value, $conv)
                    }
                )*

                fn string_option(&self, key: &str, default_value: &str) -> String {
                    lookup(self, key).map_or_else(|| default_value.to_string(), convert::to_string)
                }

                fn fields_option(&self, key: &str, default_value: Fields) -> Fields {
                    lookup(self, key).and_then(convert::to_fields).unwrap_or(default_value)
                }
            }
        }
    };
}

fields_getters! {
    int64 => i64, convert::to_i64;
    int => i32, convert::to_i32;
    float64 => f64, convert::to_f64;
    float => f32, convert::to_f32;
    bool => bool, convert::to_bool;
}

impl Json for Fields {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            log::error!("failed to serialize fields to JSON: {err}");
            "{}".to_string()
        })
    }
}

impl Context for Fields {
    fn value(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or(Value::Null)
    }

    fn set_value(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }
}

impl FieldsProvider for Fields {
    fn fields(&self) -> Fields {
        self.clone()
    }
}
