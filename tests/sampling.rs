#![cfg(feature = "random")]

use fieldset::testing::*;
use fieldset::Collection;
use std::collections::HashSet;

#[test]
fn random_clamps_to_collection_size() {
    let c = Collection::new(vec![1, 2, 3]);
    let sample = c.random(5);
    assert_eq!(sample.count(), 3);
    assert_collection_unordered_eq(&sample, &[1, 2, 3]);
}

#[test]
fn random_draws_without_replacement() {
    let c = Collection::new((0..100).collect::<Vec<u32>>());
    let sample = c.random(10);
    assert_eq!(sample.count(), 10);
    let distinct: HashSet<u32> = sample.items().iter().copied().collect();
    assert_eq!(distinct.len(), 10);
    assert_all(&sample, |x| *x < 100);
}

#[test]
fn random_one_and_empty() {
    let c = Collection::new(vec!["only".to_string()]);
    assert_collection_eq(&c.random_one(), &["only".to_string()]);

    let empty: Collection<i32> = Collection::default();
    assert!(empty.random_one().is_empty());
    assert!(Collection::new(vec![1]).random(0).is_empty());
}

#[test]
fn seeded_sampling_is_deterministic() {
    let c = Collection::new((0..1000).collect::<Vec<u32>>());
    let a = c.random_seeded(25, 42);
    let b = c.random_seeded(25, 42);
    assert_eq!(a, b);
    assert_eq!(a.count(), 25);
}

// A full-size draw is a permutation; across many draws it should not always
// come back in source order.
#[mark_flaky_tests::flaky]
#[test]
fn full_draw_shuffles_order() {
    let c = Collection::new((0..8).collect::<Vec<u32>>());
    let reordered = (0..20).any(|_| c.random(8) != c);
    assert!(reordered);
}
