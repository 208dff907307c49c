//! The [`Collection`] type and its terminal accessors.
//!
//! Chainable operations live in the crate's helper modules, grouped by concern
//! (transforms, `where_*` queries, positional edits, projection, aggregation). This
//! module holds the container itself, construction, reads that return plain values,
//! JSON conversion and the sort interface (`len` / `less` / `swap`).

use crate::fields::{Fields, FieldsProvider, Json};
use crate::resolver::resolve;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Bound shared by every element type.
///
/// `Default` supplies the zero value returned by reads on an empty collection,
/// `Serialize` lets the field resolver see struct fields by name.
pub trait Item: Clone + Default + Serialize + 'static {}
impl<T> Item for T where T: Clone + Default + Serialize + 'static {}

/// Comparator installed by [`Collection::sort`]: `less(a, b)` is true when `a`
/// sorts before `b`.
pub type Less<T> = Arc<dyn Fn(&T, &T) -> bool>;

/// An ordered, owned sequence of `T` with a fluent API.
#[derive(Clone)]
pub struct Collection<T> {
    pub(crate) items: Vec<T>,
    pub(crate) less: Option<Less<T>>,
}

impl<T> Collection<T> {
    /// Wrap an existing vector.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items, less: None }
    }

    /// Borrow the backing sequence.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Unwrap into the backing vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// True when the collection holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of elements, the sort-interface spelling of [`count`](Self::count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether element `i` sorts before element `j` under the comparator installed by
    /// the last [`sort`](Self::sort).
    ///
    /// Returns `false` when no comparator is installed or either index is out of range.
    #[must_use]
    pub fn less(&self, i: usize, j: usize) -> bool {
        match (&self.less, self.items.get(i), self.items.get(j)) {
            (Some(less), Some(a), Some(b)) => less(a, b),
            _ => false,
        }
    }

    /// Swap two elements in place. Out-of-range indices leave the collection unchanged.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i < self.items.len() && j < self.items.len() {
            self.items.swap(i, j);
        }
    }
}

impl<T: Item> Collection<T> {
    /// First element, or `T::default()` when empty.
    #[must_use]
    pub fn first(&self) -> T {
        self.items.first().cloned().unwrap_or_default()
    }

    /// Last element, or `T::default()` when empty.
    #[must_use]
    pub fn last(&self) -> T {
        self.items.last().cloned().unwrap_or_default()
    }

    /// Value of `field` on the first element.
    ///
    /// `Value::Null` when the collection is empty, the field is absent, or the element
    /// has no fields.
    #[must_use]
    pub fn first_value(&self, field: &str) -> Value {
        self.items
            .first()
            .map(|item| resolve(item, field).into_value())
            .unwrap_or(Value::Null)
    }

    /// Value of `field` on the last element, see [`first_value`](Self::first_value).
    #[must_use]
    pub fn last_value(&self, field: &str) -> Value {
        self.items
            .last()
            .map(|item| resolve(item, field).into_value())
            .unwrap_or(Value::Null)
    }

    /// Serialize the elements as a JSON array.
    pub fn try_to_json(&self) -> Result<String> {
        serde_json::to_string(&self.items).context("failed to serialize collection to JSON")
    }
}

impl<T: DeserializeOwned> Collection<T> {
    /// Parse a JSON array into a collection.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<T> =
            serde_json::from_str(json).context("failed to parse collection from JSON")?;
        Ok(Self::new(items))
    }
}

impl<T: Item> Json for Collection<T> {
    /// JSON array of the elements; `"[]"` if serialization fails.
    fn to_json(&self) -> String {
        self.try_to_json().unwrap_or_else(|err| {
            log::error!("{err:#}");
            "[]".to_string()
        })
    }
}

impl<T: Item> FieldsProvider for Collection<T> {
    fn fields(&self) -> Fields {
        self.to_fields()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// The comparator is not part of a collection's value.
impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.items)
            .field("sorted", &self.less.is_some())
            .finish()
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}
