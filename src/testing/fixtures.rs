//! Pre-built datasets for common testing scenarios.

use crate::fields::Fields;
use serde::{Deserialize, Serialize};

/// A small person record with an optional field, usable as a collection element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub city: String,
    #[serde(rename = "Score")]
    pub score: Option<f64>,
}

/// Five people across three cities; `eve` has no score.
///
/// # Example
///
/// ```
/// use fieldset::testing::sample_people;
///
/// let people = sample_people();
/// assert_eq!(people.len(), 5);
/// ```
#[must_use]
pub fn sample_people() -> Vec<Person> {
    let person = |name: &str, age, city: &str, score| Person {
        name: name.to_string(),
        age,
        city: city.to_string(),
        score,
    };
    vec![
        person("ann", 34, "oslo", Some(81.5)),
        person("bob", 17, "rome", Some(64.0)),
        person("cid", 45, "oslo", Some(92.0)),
        person("dee", 12, "lima", Some(70.5)),
        person("eve", 29, "rome", None),
    ]
}

/// [`sample_people`] as [`Fields`] records; `eve` has no `Score` key at all.
#[must_use]
pub fn sample_people_fields() -> Vec<Fields> {
    sample_people()
        .into_iter()
        .map(|p| {
            let mut fields = Fields::new();
            fields.insert("name".into(), p.name.into());
            fields.insert("age".into(), p.age.into());
            fields.insert("city".into(), p.city.into());
            if let Some(score) = p.score {
                fields.insert("Score".into(), score.into());
            }
            fields
        })
        .collect()
}
