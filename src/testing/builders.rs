//! Test data builders for records and element lists.

use crate::collection::Collection;
use crate::fields::Fields;
use serde_json::Value;
use std::ops::RangeInclusive;

/// A fluent builder for a single [`Fields`] record.
///
/// # Example
///
/// ```
/// use fieldset::testing::FieldsBuilder;
/// use serde_json::json;
///
/// let f = FieldsBuilder::new()
///     .set("name", "ann")
///     .set("age", 31)
///     .null("email")
///     .build();
///
/// assert_eq!(f["age"], json!(31));
/// assert!(f["email"].is_null());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldsBuilder {
    fields: Fields,
}

impl FieldsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any earlier value.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Set `key` to an explicit `null`.
    #[must_use]
    pub fn null(self, key: &str) -> Self {
        self.set(key, Value::Null)
    }

    #[must_use]
    pub fn build(self) -> Fields {
        self.fields
    }
}

/// A fluent builder for a list of elements.
///
/// # Example
///
/// ```
/// use fieldset::testing::TestDataBuilder;
///
/// let c = TestDataBuilder::new()
///     .add_range(1..=10)
///     .add_value(100)
///     .add_repeated(42, 5)
///     .build_collection();
///
/// assert_eq!(c.count(), 16); // 10 + 1 + 5
/// ```
#[derive(Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    #[must_use]
    pub fn add_values(mut self, values: Vec<T>) -> Self {
        self.data.extend(values);
        self
    }

    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }

    #[must_use]
    pub fn build_collection(self) -> Collection<T> {
        Collection::new(self.data)
    }
}

impl<T: From<i32>> TestDataBuilder<T> {
    /// Add every integer of `range`, converted into `T`.
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.data.extend(range.map(T::from));
        self
    }
}
