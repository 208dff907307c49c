//! Whole-collection aggregation.
//!
//! `sum`, `min`, `max` and `avg` take an optional field name:
//! - `None` aggregates the element values themselves (numeric collections)
//! - `Some(field)` resolves the field on every element (records and mappings)
//!
//! Values coerce to `f64` and anything non-numeric counts as `0.0`. An empty
//! collection aggregates to `0.0` for every function.
//!
//! ```
//! use fieldset::Collection;
//! use fieldset::testing::sample_people;
//!
//! let nums = Collection::new(vec![3, 1, 2]);
//! assert_eq!(nums.max(None), 3.0);
//! assert_eq!(nums.min(None), 1.0);
//!
//! let people = Collection::new(sample_people());
//! assert!(people.avg(Some("age")) > 0.0);
//! ```

use crate::collection::{Collection, Item};
use crate::combiners::{Average, CombineFn, Max, Min, Sum};
use crate::convert;
use crate::resolver::Shape;

impl<T: Item> Collection<T> {
    /// Run any combiner over the element values (or `key` values).
    pub fn aggregate<C, A>(&self, comb: C, key: Option<&str>) -> f64
    where
        C: CombineFn<f64, A, f64>,
    {
        let mut acc = comb.create();
        for v in self.numbers(key) {
            comb.add_input(&mut acc, v);
        }
        comb.finish(acc)
    }

    #[must_use]
    pub fn sum(&self, key: Option<&str>) -> f64 {
        self.aggregate(Sum, key)
    }

    #[must_use]
    pub fn max(&self, key: Option<&str>) -> f64 {
        self.aggregate(Max, key)
    }

    #[must_use]
    pub fn min(&self, key: Option<&str>) -> f64 {
        self.aggregate(Min, key)
    }

    /// Mean of the values; `0.0` for an empty collection.
    #[must_use]
    pub fn avg(&self, key: Option<&str>) -> f64 {
        self.aggregate(Average, key)
    }

    fn numbers(&self, key: Option<&str>) -> Vec<f64> {
        let mut warned = false;
        self.items
            .iter()
            .map(|item| {
                let shape = Shape::of(item);
                match key {
                    Some(field) => convert::to_f64(&shape.field(field).into_value()),
                    None if shape.has_fields() => {
                        if !warned {
                            log::warn!("aggregating records without a field name, counting them as 0");
                            warned = true;
                        }
                        0.0
                    }
                    None => convert::to_f64(&shape.into_scalar()),
                }
            })
            .collect()
    }
}
