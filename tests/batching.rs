use anyhow::{bail, Result};
use fieldset::testing::*;
use fieldset::Collection;

#[test]
fn chunk_pages_cover_the_collection_in_order() -> Result<()> {
    let c = TestDataBuilder::<i32>::new().add_range(1..=10).build_collection();
    let mut pages = Vec::new();
    c.chunk(3, |chunk, page| {
        pages.push((page, chunk.into_vec()));
        Ok(())
    })?;
    assert_eq!(
        pages,
        vec![
            (1, vec![1, 2, 3]),
            (2, vec![4, 5, 6]),
            (3, vec![7, 8, 9]),
            (4, vec![10]),
        ]
    );
    Ok(())
}

#[test]
fn chunk_larger_than_collection_is_one_page() -> Result<()> {
    let c = Collection::new(vec!["x", "y"]);
    let mut calls = 0;
    c.chunk(100, |chunk, page| {
        calls += 1;
        assert_eq!(page, 1);
        assert_eq!(chunk.count(), 2);
        Ok(())
    })?;
    assert_eq!(calls, 1);
    Ok(())
}

#[test]
fn chunk_on_empty_collection_never_calls_handler() -> Result<()> {
    let c: Collection<i32> = Collection::default();
    c.chunk(5, |_, _| bail!("handler must not run"))?;
    Ok(())
}

#[test]
fn handler_error_stops_iteration_and_is_returned() {
    let c = Collection::new((0..20).collect::<Vec<i32>>());
    let mut visited = Vec::new();
    let result = c.chunk(5, |_, page| {
        visited.push(page);
        if page == 2 {
            bail!("disk full on page {page}");
        }
        Ok(())
    });
    let err = result.expect_err("handler error should propagate");
    assert_eq!(err.to_string(), "disk full on page 2");
    assert_eq!(visited, vec![1, 2]);
}

#[test]
fn zero_size_is_rejected() {
    let c = Collection::new(vec![1, 2, 3]);
    let mut called = false;
    let err = c
        .chunk(0, |_, _| {
            called = true;
            Ok(())
        })
        .expect_err("zero size must fail");
    assert!(err.to_string().contains("greater than zero"));
    assert!(!called);
}

#[test]
fn chunks_are_independent_collections() -> Result<()> {
    let people = Collection::new(sample_people());
    let mut cities = Vec::new();
    people.chunk(2, |chunk, _| {
        cities.push(chunk.where_eq("city", "oslo").count());
        Ok(())
    })?;
    assert_eq!(cities, vec![1, 1, 0]);
    assert_eq!(people.count(), 5);
    Ok(())
}
