use fieldset::testing::*;
use fieldset::Collection;

#[test]
fn push_and_prepend_derive_new_collections() {
    let c = Collection::new(vec![2, 3]);
    assert_collection_eq(&c.push([4, 5]), &[2, 3, 4, 5]);
    assert_collection_eq(&c.prepend([0, 1]), &[0, 1, 2, 3]);
    assert_collection_eq(&c, &[2, 3]);
}

#[test]
fn push_then_pull_restores_length() {
    let c = Collection::new(vec![1, 2, 3]);
    let mut pushed = c.push([9]);
    assert_eq!(pushed.pull(), 9);
    assert_eq!(pushed.count(), c.count());
    assert_eq!(pushed, c);
}

#[test]
fn pull_and_shift_mutate_the_receiver() {
    let mut c = Collection::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    assert_eq!(c.shift(), "a");
    assert_eq!(c.pull(), "c");
    assert_collection_eq(&c, &["b".to_string()]);
}

#[test]
fn pull_and_shift_on_empty_use_defaults() {
    let mut c: Collection<i32> = Collection::default();
    assert_eq!(c.pull(), 0);
    assert_eq!(c.shift(), 0);
    assert_eq!(c.pull_or(7), 7);
    assert_eq!(c.shift_or(-1), -1);
    assert!(c.is_empty());

    let mut people: Collection<Person> = Collection::default();
    assert_eq!(people.shift(), Person::default());
}

#[test]
fn defaults_are_ignored_when_elements_exist() {
    let mut c = Collection::new(vec![1, 2]);
    assert_eq!(c.pull_or(100), 2);
    assert_eq!(c.shift_or(100), 1);
}

#[test]
fn put_derives_while_offset_mutates() {
    let mut c = Collection::new(vec![1, 2, 3]);

    let replaced = c.put(1, 20);
    assert_collection_eq(&replaced, &[1, 20, 3]);
    assert_collection_eq(&c, &[1, 2, 3]);

    c.offset(1, 20);
    assert_collection_eq(&c, &[1, 20, 3]);
}

#[test]
fn out_of_range_index_appends() {
    let mut c = Collection::new(vec![1, 2, 3]);
    assert_collection_eq(&c.put(3, 4), &[1, 2, 3, 4]);
    assert_collection_eq(&c.put(99, 4), &[1, 2, 3, 4]);

    c.offset(10, 4).offset(0, 0);
    assert_collection_eq(&c, &[0, 2, 3, 4]);
}

#[test]
fn merge_concatenates_in_argument_order() {
    let a = Collection::new(vec![1, 2, 3]);
    let b = Collection::new(vec![4, 5, 6, 7]);
    let c = Collection::new(vec![8]);

    let merged = a.merge([&b]);
    assert_eq!(merged.count(), 7);

    assert_collection_eq(&a.merge([&c, &b]), &[1, 2, 3, 8, 4, 5, 6, 7]);
    assert_collection_eq(&a.merge(Vec::new()), &[1, 2, 3]);
}

#[test]
fn reverse_twice_is_identity() {
    let c = Collection::new(sample_people());
    let reversed = c.reverse();
    assert_eq!(reversed.first().name, "eve");
    assert_eq!(reversed.reverse(), c);
}
