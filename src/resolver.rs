//! Field resolution across element shapes.
//!
//! Elements come in three shapes:
//! - **Mapping** - the element is a [`Fields`]; fields are looked up by key directly
//!   (detected at runtime through an `Any` downcast, no serialization involved)
//! - **Record** - any other element that serializes to a JSON object, such as a
//!   struct deriving `Serialize`; fields are the serialized names, so
//!   `#[serde(rename = "...")]` plays the role of a field tag
//! - **Scalar** - everything else (numbers, strings, bools, sequences); these have no
//!   fields and the `where_*` family leaves such collections unchanged
//!
//! Whether a collection has fields at all is decided by its **first element**. For
//! element types whose values vary in shape, such as `serde_json::Value` or
//! `Option<Record>`, a scalar or `None` in front makes the whole collection count as
//! scalar: every `where_*` returns an unchanged copy and
//! [`pluck`](crate::Collection::pluck) returns an empty mapping. When the first
//! element does have fields, later scalar elements simply lack every field.
//!
//! Lookup is exact and case-sensitive.

use crate::fields::Fields;
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::Any;

/// Outcome of resolving a field on one element.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    /// The element has no such field (or no fields at all).
    Missing,
    /// The field exists; its value may be `Null`.
    Present(Value),
}

impl Resolved {
    /// True for a missing field and for a present `null`.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Missing | Self::Present(Value::Null))
    }

    /// Borrow the value when present.
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Missing => None,
            Self::Present(v) => Some(v),
        }
    }

    /// The value, with `Missing` mapped to `Null`.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Missing => Value::Null,
            Self::Present(v) => v,
        }
    }
}

/// The shape of a single element, borrowed when it is already a mapping.
pub(crate) enum Shape<'a> {
    Mapping(&'a Fields),
    Record(Map<String, Value>),
    Scalar(Value),
}

impl<'a> Shape<'a> {
    pub(crate) fn of<T: Serialize + 'static>(item: &'a T) -> Self {
        if let Some(fields) = (item as &dyn Any).downcast_ref::<Fields>() {
            return Shape::Mapping(fields);
        }
        match serde_json::to_value(item) {
            Ok(Value::Object(map)) => Shape::Record(map),
            Ok(other) => Shape::Scalar(other),
            Err(err) => {
                log::warn!("element could not be serialized, treating it as null: {err}");
                Shape::Scalar(Value::Null)
            }
        }
    }

    pub(crate) fn has_fields(&self) -> bool {
        !matches!(self, Shape::Scalar(_))
    }

    pub(crate) fn field(&self, name: &str) -> Resolved {
        let found = match self {
            Shape::Mapping(fields) => fields.get(name),
            Shape::Record(map) => map.get(name),
            Shape::Scalar(_) => None,
        };
        found.map_or(Resolved::Missing, |v| Resolved::Present(v.clone()))
    }

    /// The whole element as a JSON value.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Shape::Mapping(fields) => Value::Object(fields.clone().into_iter().collect()),
            Shape::Record(map) => Value::Object(map),
            Shape::Scalar(v) => v,
        }
    }

    /// The element's value when it has no fields; records and mappings yield `Null`.
    pub(crate) fn into_scalar(self) -> Value {
        match self {
            Shape::Scalar(v) => v,
            Shape::Mapping(_) | Shape::Record(_) => Value::Null,
        }
    }

    /// The element as a mapping, or `None` for scalars.
    pub(crate) fn into_fields(self) -> Option<Fields> {
        match self {
            Shape::Mapping(fields) => Some(fields.clone()),
            Shape::Record(map) => Some(map.into_iter().collect()),
            Shape::Scalar(_) => None,
        }
    }
}

/// Resolve `field` on `item`.
pub fn resolve<T: Serialize + 'static>(item: &T, field: &str) -> Resolved {
    Shape::of(item).field(field)
}

/// Whether the elements of `items` expose fields, judged by the first element.
///
/// An empty slice counts as supported; there is nothing to leave unchanged.
pub(crate) fn supports_fields<T: Serialize + 'static>(items: &[T]) -> bool {
    items.first().is_none_or(|item| Shape::of(item).has_fields())
}
