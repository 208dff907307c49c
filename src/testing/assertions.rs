//! Assertion functions for testing collection outputs.

use crate::collection::Collection;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that a collection holds exactly `expected`, in order.
///
/// # Panics
///
/// Panics if the lengths or any element differ.
///
/// # Example
///
/// ```
/// use fieldset::Collection;
/// use fieldset::testing::assert_collection_eq;
///
/// let c = Collection::new(vec![1, 2, 3]).reverse();
/// assert_collection_eq(&c, &[3, 2, 1]);
/// ```
pub fn assert_collection_eq<T: Debug + PartialEq>(actual: &Collection<T>, expected: &[T]) {
    let actual = actual.items();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}"
        );
    }
}

/// Assert that a collection holds the same multiset of elements as `expected`,
/// ignoring order.
///
/// # Panics
///
/// Panics if any element occurs a different number of times.
///
/// # Example
///
/// ```
/// use fieldset::Collection;
/// use fieldset::testing::assert_collection_unordered_eq;
///
/// let c = Collection::new(vec![1, 2, 2, 3]).random_seeded(10, 7);
/// assert_collection_unordered_eq(&c, &[2, 3, 1, 2]);
/// ```
pub fn assert_collection_unordered_eq<T: Debug + Eq + Hash>(actual: &Collection<T>, expected: &[T]) {
    fn tally<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
        let mut counts = HashMap::new();
        for item in items {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }

    let items = actual.items();
    assert_eq!(
        tally(items),
        tally(expected),
        "Collection content mismatch (ignoring order):\n  Expected: {expected:?}\n  Actual: {items:?}"
    );
}

/// Assert that every element satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first element that fails.
pub fn assert_all<T: Debug>(collection: &Collection<T>, predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.items().iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that at least one element satisfies `predicate`.
///
/// # Panics
///
/// Panics if none does.
pub fn assert_any<T: Debug>(collection: &Collection<T>, predicate: impl Fn(&T) -> bool) {
    assert!(
        collection.items().iter().any(&predicate),
        "No elements satisfied the predicate:\n  Collection: {collection:?}"
    );
}

/// Assert that no element satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first element that matches.
pub fn assert_none<T: Debug>(collection: &Collection<T>, predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.items().iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that a collection has `expected_size` elements.
///
/// # Panics
///
/// Panics if the size differs.
pub fn assert_collection_size<T: Debug>(collection: &Collection<T>, expected_size: usize) {
    assert_eq!(
        collection.count(),
        expected_size,
        "Collection size mismatch:\n  Expected: {expected_size}\n  Actual: {}\n  Collection: {collection:?}",
        collection.count()
    );
}

/// Assert that `actual` parses as JSON structurally equal to `expected`.
///
/// Object key order is irrelevant, which is what [`Fields`](crate::Fields) output needs.
///
/// # Panics
///
/// Panics if `actual` is not valid JSON or differs from `expected`.
///
/// # Example
///
/// ```
/// use fieldset::testing::assert_json_eq;
/// use serde_json::json;
///
/// assert_json_eq(r#"[{"b":2,"a":1}]"#, &json!([{"a": 1, "b": 2}]));
/// ```
pub fn assert_json_eq(actual: &str, expected: &Value) {
    let parsed: Value = match serde_json::from_str(actual) {
        Ok(v) => v,
        Err(err) => panic!("Invalid JSON: {err}\n  Text: {actual}"),
    };
    assert_eq!(
        &parsed, expected,
        "JSON mismatch:\n  Expected: {expected}\n  Actual: {parsed}"
    );
}
