use fieldset::testing::*;
use fieldset::{Collection, Fields, Operator};
use serde::Serialize;
use serde_json::json;
use std::sync::Once;

static LOGS: Once = Once::new();

fn init_logs() {
    LOGS.call_once(colog::init);
}

fn ages(ages: &[i64]) -> Collection<Fields> {
    ages.iter()
        .map(|a| FieldsBuilder::new().set("age", *a).build())
        .collect()
}

fn names(c: &Collection<Person>) -> Vec<&str> {
    c.items().iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn where_gte_on_fields_keeps_adults() {
    let c = ages(&[10, 25, 17]);
    let adults = c.where_gte("age", 18);
    assert_collection_eq(&adults, &[FieldsBuilder::new().set("age", 25).build()]);
    assert_eq!(c.count(), 3, "receiver untouched");
}

#[test]
fn relational_family_on_structs() {
    let people = Collection::new(sample_people());
    assert_eq!(names(&people.where_lt("age", 17)), vec!["dee"]);
    assert_eq!(names(&people.where_lte("age", 17)), vec!["bob", "dee"]);
    assert_eq!(names(&people.where_gt("age", 34)), vec!["cid"]);
    assert_eq!(names(&people.where_gte("age", 34)), vec!["ann", "cid"]);
    assert_eq!(names(&people.where_gt("Score", 80.0)), vec!["ann", "cid"]);
}

#[test]
fn integers_and_floats_compare_alike() {
    let people = Collection::new(sample_people());
    assert_eq!(names(&people.where_eq("age", 45.0)), vec!["cid"]);
    assert_eq!(names(&people.where_eq("Score", 64)), vec!["bob"]);
}

#[test]
fn strings_compare_lexicographically() {
    let people = Collection::new(sample_people());
    assert_eq!(names(&people.where_lt("city", "m")), vec!["dee"]);
    assert_eq!(names(&people.where_gte("name", "d")), vec!["dee", "eve"]);
}

#[test]
fn incomparable_values_fail_the_predicate() {
    let people = Collection::new(sample_people());
    assert!(people.where_lt("city", 100).is_empty());
    assert!(people.where_gt("age", "10").is_empty());
    // eve's null score is never ordered
    assert_eq!(people.where_lt("Score", 1000).count(), 4);
}

#[test]
fn in_and_not_in() {
    let people = Collection::new(sample_people());
    assert_eq!(names(&people.where_in("city", ["oslo", "lima"])), vec!["ann", "cid", "dee"]);
    assert_eq!(names(&people.where_not_in("city", ["oslo", "lima"])), vec!["bob", "eve"]);
    assert_eq!(names(&people.where_in("age", [17.0, 12.0])), vec!["bob", "dee"]);
    assert!(people.where_in("age", Vec::<i32>::new()).is_empty());
}

#[test]
fn not_in_and_ne_keep_missing_fields() {
    let c = Collection::new(vec![
        FieldsBuilder::new().set("k", 1).build(),
        FieldsBuilder::new().set("other", 1).build(),
    ]);
    assert_eq!(c.where_not_in("k", [1]).count(), 1);
    assert_eq!(c.where_ne("k", 1).first_value("other"), json!(1));
    assert_eq!(c.where_eq("k", 1).count(), 1);
}

#[test]
fn nil_treats_missing_and_null_alike() {
    let fields = Collection::new(sample_people_fields());
    let structs = Collection::new(sample_people());

    // Fields: eve has no Score key; structs: eve has Score = null
    assert_eq!(fields.where_nil("Score").first_value("name"), json!("eve"));
    assert_eq!(structs.where_nil("Score").first_value("name"), json!("eve"));
    assert_eq!(fields.where_not_nil("Score").count(), 4);
    assert_eq!(structs.where_not_nil("Score").count(), 4);

    assert_eq!(fields.where_nil("nope").count(), 5);
    assert!(fields.where_not_nil("nope").is_empty());
}

#[test]
fn like_patterns() {
    init_logs();
    let people = Collection::new(sample_people());
    assert_eq!(names(&people.where_like("name", "%e")), vec!["dee", "eve"]);
    assert_eq!(names(&people.where_like("city", "_o%")), vec!["bob", "eve"]);
    assert!(people.where_like("age", "%").is_empty(), "numbers never match like");
}

#[test]
fn generalized_where_dispatches_tokens() {
    let people = Collection::new(sample_people());
    assert_eq!(names(&people.where_("city", &[json!("rome")])), vec!["bob", "eve"]);
    assert_eq!(names(&people.where_("age", &[json!(">"), json!(40)])), vec!["cid"]);
    assert_eq!(names(&people.where_("age", &[json!("<="), json!(12)])), vec!["dee"]);
    assert_eq!(
        names(&people.where_("name", &[json!("not in"), json!(["ann", "bob", "cid"])])),
        vec!["dee", "eve"]
    );
    assert_eq!(
        names(&people.where_("name", &[json!("IN"), json!(["eve"])])),
        vec!["eve"]
    );
    assert_eq!(names(&people.where_("city", &[json!("!="), json!("oslo")])), vec!["bob", "dee", "eve"]);
}

#[test]
fn generalized_where_ignores_malformed_arguments() {
    init_logs();
    let people = Collection::new(sample_people());
    assert_eq!(people.where_("age", &[]).count(), 5);
    assert_eq!(people.where_("age", &[json!("~"), json!(1)]).count(), 5);
    assert_eq!(people.where_("age", &[json!(1), json!(2)]).count(), 5);
    assert_eq!(people.where_("age", &[json!("="), json!(1), json!(2)]).count(), 5);
}

#[test]
fn where_op_matches_named_methods() {
    let people = Collection::new(sample_people());
    assert_eq!(people.where_op("age", Operator::Gte, 18), people.where_gte("age", 18));
    assert_eq!(
        people.where_op("city", Operator::In, json!(["rome"])),
        people.where_in("city", ["rome"])
    );
}

#[test]
fn primitives_are_left_unchanged() {
    let c = Collection::new(vec![5, 20, 30]);
    assert_collection_eq(&c.where_gte("age", 18), &[5, 20, 30]);
    assert_collection_eq(&c.where_nil("age"), &[5, 20, 30]);
    assert_collection_eq(&c.where_("age", &[json!(1)]), &[5, 20, 30]);
}

#[test]
fn serde_renames_act_as_field_tags() {
    #[derive(Clone, Default, Serialize)]
    struct Row {
        #[serde(rename = "user_id")]
        id: u64,
        active: bool,
    }

    let rows = Collection::new(vec![
        Row { id: 1, active: true },
        Row { id: 2, active: false },
        Row { id: 3, active: true },
    ]);
    let active = rows.where_eq("active", true);
    assert_eq!(active.pluck("user_id").get("1"), Some(&json!(3)));
    assert!(rows.where_eq("id", 1).is_empty(), "only the serialized name resolves");
}

#[test]
fn empty_collection_queries_stay_empty() {
    let c: Collection<Fields> = Collection::default();
    assert!(c.where_gte("age", 1).is_empty());
    assert!(c.where_nil("age").is_empty());
}

#[test]
fn large_ids_are_not_conflated() {
    let ids = Collection::new(vec![
        FieldsBuilder::new().set("id", 9_007_199_254_740_992_u64).build(),
        FieldsBuilder::new().set("id", 9_007_199_254_740_993_u64).build(),
    ]);
    let hit = ids.where_eq("id", 9_007_199_254_740_993_u64);
    assert_eq!(hit.count(), 1);
    assert_eq!(hit.first_value("id"), json!(9_007_199_254_740_993_u64));
    assert_eq!(ids.where_lt("id", 9_007_199_254_740_993_u64).count(), 1);
    assert_eq!(ids.where_in("id", [9_007_199_254_740_992_u64]).count(), 1);
    assert_eq!(ids.where_ne("id", 9_007_199_254_740_992_u64).count(), 1);
}

#[test]
fn first_element_decides_whether_fields_apply() {
    let scalar_first = Collection::new(vec![json!(1), json!({"age": 30}), json!({"age": 5})]);
    assert_eq!(scalar_first.where_gte("age", 18), scalar_first);
    assert!(scalar_first.pluck("age").is_empty());

    let record_first = Collection::new(vec![json!({"age": 30}), json!(1), json!({"age": 5})]);
    assert_collection_eq(&record_first.where_gte("age", 18), &[json!({"age": 30})]);
    assert_eq!(record_first.where_nil("age").count(), 1);

    let optional = Collection::new(vec![None, Some(Person { age: 40, ..Person::default() })]);
    assert_eq!(optional.where_gte("age", 18).count(), 2);
}
