//! Field-based querying for [`Collection`].
//!
//! The `where_*` methods resolve a named field on every element (struct field or
//! [`Fields`](crate::Fields) key) and keep the elements whose value satisfies the
//! condition, in their original order. Comparison rules live in [`crate::query`].
//!
//! Collections of primitives have no fields; on them every method here returns an
//! unchanged copy of the receiver rather than an empty result.
//!
//! ## Example
//! ```
//! use fieldset::{Collection, Operator};
//! use fieldset::testing::FieldsBuilder;
//! use serde_json::json;
//!
//! let people = Collection::new(vec![
//!     FieldsBuilder::new().set("name", "ann").set("age", 10).build(),
//!     FieldsBuilder::new().set("name", "bob").set("age", 25).build(),
//!     FieldsBuilder::new().set("name", "cid").set("age", 17).build(),
//! ]);
//!
//! assert_eq!(people.where_gte("age", 18).count(), 1);
//! assert_eq!(people.where_("age", &[json!("<"), json!(18)]).count(), 2);
//! assert_eq!(people.where_op("name", Operator::Like, "_i%").count(), 1);
//! assert_eq!(people.where_in("name", ["ann", "cid"]).count(), 2);
//! ```

use crate::collection::{Collection, Item};
use crate::query::{Condition, Operator};
use crate::resolver::{resolve, supports_fields, Resolved};
use serde_json::Value;

impl<T: Item> Collection<T> {
    fn retain_where<P>(&self, field: &str, pred: P) -> Self
    where
        P: Fn(&Resolved) -> bool,
    {
        if !supports_fields(&self.items) {
            return Self::new(self.items.clone());
        }
        self.items
            .iter()
            .filter(|item| pred(&resolve(*item, field)))
            .cloned()
            .collect()
    }

    /// Generalized entry point: `[value]` tests equality, `[operator, value]` applies
    /// the operator token (`"="`, `"!="`, `"<"`, `"<="`, `">"`, `">="`, `"in"`,
    /// `"not in"`, `"like"`).
    ///
    /// Any other argument list leaves the collection unchanged.
    #[must_use]
    pub fn where_(&self, field: &str, args: &[Value]) -> Self {
        match args {
            [value] => self.where_op(field, Operator::Eq, value.clone()),
            [Value::String(token), value] => match token.parse::<Operator>() {
                Ok(op) => self.where_op(field, op, value.clone()),
                Err(err) => {
                    log::warn!("where on `{field}` ignored: {err}");
                    Self::new(self.items.clone())
                }
            },
            _ => {
                log::warn!(
                    "where on `{field}` ignored: expected a value or an operator and a value, got {} arguments",
                    args.len()
                );
                Self::new(self.items.clone())
            }
        }
    }

    /// Keep elements whose `field` satisfies `op` against `value`.
    #[must_use]
    pub fn where_op(&self, field: &str, op: Operator, value: impl Into<Value>) -> Self {
        let condition = Condition::new(op, value.into());
        self.retain_where(field, |resolved| condition.matches(resolved))
    }

    #[must_use]
    pub fn where_eq(&self, field: &str, value: impl Into<Value>) -> Self {
        self.where_op(field, Operator::Eq, value)
    }

    /// Elements whose `field` differs from `value`, including those without the field.
    #[must_use]
    pub fn where_ne(&self, field: &str, value: impl Into<Value>) -> Self {
        self.where_op(field, Operator::Ne, value)
    }

    #[must_use]
    pub fn where_lt(&self, field: &str, value: impl Into<Value>) -> Self {
        self.where_op(field, Operator::Lt, value)
    }

    #[must_use]
    pub fn where_lte(&self, field: &str, value: impl Into<Value>) -> Self {
        self.where_op(field, Operator::Lte, value)
    }

    #[must_use]
    pub fn where_gt(&self, field: &str, value: impl Into<Value>) -> Self {
        self.where_op(field, Operator::Gt, value)
    }

    #[must_use]
    pub fn where_gte(&self, field: &str, value: impl Into<Value>) -> Self {
        self.where_op(field, Operator::Gte, value)
    }

    /// Elements whose `field` equals one of `values`.
    #[must_use]
    pub fn where_in<I, V>(&self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let list: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.where_op(field, Operator::In, list)
    }

    /// Elements whose `field` equals none of `values`; a missing field qualifies.
    #[must_use]
    pub fn where_not_in<I, V>(&self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let list: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.where_op(field, Operator::NotIn, list)
    }

    /// String fields matching a SQL `LIKE` pattern (`%` any run, `_` one character).
    #[must_use]
    pub fn where_like(&self, field: &str, pattern: &str) -> Self {
        self.where_op(field, Operator::Like, pattern)
    }

    /// Elements where `field` is missing or `null`.
    #[must_use]
    pub fn where_nil(&self, field: &str) -> Self {
        self.retain_where(field, Resolved::is_nil)
    }

    /// Elements where `field` is present and not `null`.
    #[must_use]
    pub fn where_not_nil(&self, field: &str) -> Self {
        self.retain_where(field, |resolved| !resolved.is_nil())
    }
}
