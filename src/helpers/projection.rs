//! Field projection for [`Collection`].
//!
//! - [`Collection::pluck`] -- one field from every element, keyed by index
//! - [`Collection::only`] -- every element narrowed to a set of fields
//! - [`Collection::to_fields`] -- the whole collection keyed by index
//! - [`Collection::to_array_fields`] -- every element as a [`Fields`]
//!
//! Index keys are the decimal position of the element (`"0"`, `"1"`, ...), so a
//! projection lines up with the collection it came from.

use crate::collection::{Collection, Item};
use crate::fields::Fields;
use crate::resolver::{supports_fields, Resolved, Shape};

impl<T: Item> Collection<T> {
    /// Map each element's index to its `key` value.
    ///
    /// Elements lacking the field contribute `null`. Collections of primitives
    /// produce an empty mapping.
    #[must_use]
    pub fn pluck(&self, key: &str) -> Fields {
        if !supports_fields(&self.items) {
            return Fields::new();
        }
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), Shape::of(item).field(key).into_value()))
            .collect()
    }

    /// Project every element onto the subset of `keys` it has.
    #[must_use]
    pub fn only<I, K>(&self, keys: I) -> Collection<Fields>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        self.items
            .iter()
            .map(|item| {
                let shape = Shape::of(item);
                keys.iter()
                    .filter_map(|key| match shape.field(key.as_ref()) {
                        Resolved::Present(v) => Some((key.as_ref().to_string(), v)),
                        Resolved::Missing => None,
                    })
                    .collect::<Fields>()
            })
            .collect()
    }

    /// The collection as one mapping from index to element value.
    #[must_use]
    pub fn to_fields(&self) -> Fields {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), Shape::of(item).into_value()))
            .collect()
    }

    /// Every element as a mapping; primitives become empty mappings.
    #[must_use]
    pub fn to_array_fields(&self) -> Vec<Fields> {
        self.items
            .iter()
            .map(|item| Shape::of(item).into_fields().unwrap_or_default())
            .collect()
    }
}
