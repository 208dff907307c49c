//! # Fieldset
//!
//! A **chainable in-memory collection** for Rust. [`Collection<T>`] wraps an ordered
//! sequence of records, mappings or primitives and exposes functional transforms,
//! field-based queries, aggregation, positional mutation and typed extraction,
//! all without the caller writing field-access code.
//!
//! ## Key Features
//!
//! - **Fluent API** - chain `map`, `filter`, `skip`, `sort` and the `where_*` family
//! - **Field queries over any shape** - structs (through serde) and [`Fields`] mappings
//!   resolve fields by name the same way
//! - **Aggregation** - `sum`, `min`, `max`, `avg` and `count`, backed by [`combiners`]
//! - **Silent defaults** - out-of-range reads, missing fields and failed conversions
//!   resolve to zero values instead of failing the chain
//! - **Typed extraction** - `to_int_array`, `to_string_array`, `to_array_fields`, ...
//!
//! ## Quick Start
//!
//! ```
//! use fieldset::*;
//! use serde::Serialize;
//!
//! #[derive(Clone, Default, Serialize)]
//! struct User { name: String, age: u32 }
//!
//! let users = Collection::new(vec![
//!     User { name: "ann".into(), age: 31 },
//!     User { name: "bob".into(), age: 17 },
//!     User { name: "cid".into(), age: 45 },
//! ]);
//!
//! let adults = users.where_gte("age", 18);
//! assert_eq!(adults.count(), 2);
//! assert_eq!(adults.avg(Some("age")), 38.0);
//! assert_eq!(adults.pluck("name").get("1"), Some(&serde_json::json!("cid")));
//! ```
//!
//! ## Core Concepts
//!
//! ### Collection
//!
//! Operations come in two flavours:
//! - **Derived** - return a new [`Collection`] and leave the receiver untouched
//!   (`map`, `filter`, `where_*`, `push`, `put`, `reverse`, `merge`, `random`, ...)
//! - **In-place** - mutate the receiver (`each` only reads, `offset`, `pull`, `shift`, `swap`)
//!
//! ### Fields
//!
//! [`Fields`] is a `HashMap<String, serde_json::Value>`. It is both a valid element
//! type and the result of projections such as [`pluck`](Collection::pluck) and
//! [`to_array_fields`](Collection::to_array_fields). Typed access goes through the
//! [`Getter`] and [`OptionalGetter`] traits.
//!
//! ### Chunking
//!
//! [`chunk`](Collection::chunk) is the only operation that fails: the handler's
//! error stops the iteration and is handed back to the caller.
//!
//! ```
//! use fieldset::Collection;
//!
//! let c = Collection::new((1..=10).collect::<Vec<i32>>());
//! let mut pages = Vec::new();
//! c.chunk(4, |chunk, page| {
//!     pages.push((page, chunk.count()));
//!     Ok(())
//! })?;
//! assert_eq!(pages, vec![(1, 4), (2, 4), (3, 2)]);
//! # anyhow::Result::<()>::Ok(())
//! ```
//!
//! ## Feature Flags
//!
//! - `random` (default) - enables [`random`](Collection::random) and friends via `rand`
//!
//! ## Module Overview
//!
//! - [`collection`] - `Collection` type, accessors and the sort interface
//! - [`fields`] - `Fields` and the getter traits
//! - [`query`] - `where_*` operators and comparison rules
//! - [`combiners`] - aggregation functions (Sum, Min, Max, Average)
//! - [`convert`] - scalar coercion rules shared by getters, arrays and aggregation
//! - [`testing`] - assertions, builders and fixtures for tests

pub mod collection;
pub mod combiners;
pub mod convert;
pub mod fields;
pub mod query;
pub mod resolver;
pub mod testing;
pub(crate) mod helpers;

// General re-exports
pub use collection::{Collection, Item, Less};
pub use combiners::{Average, CombineFn, Max, Min, Sum};
pub use fields::{Context, Fields, FieldsProvider, Getter, Json, OptionalGetter};
pub use query::Operator;
pub use resolver::Resolved;
