//! Testing utilities for code built on [`Collection`](crate::Collection).
//!
//! - **Assertions**: compare collections, check predicates, compare JSON structurally
//! - **Builders**: assemble [`Fields`](crate::Fields) records and element lists fluently
//! - **Fixtures**: small record datasets in both struct and mapping form
//!
//! # Quick Start
//!
//! ```
//! use fieldset::Collection;
//! use fieldset::testing::*;
//!
//! let people = Collection::new(sample_people_fields());
//! let adults = people.where_gte("age", 18);
//!
//! assert_all(&adults, |p| p["age"].as_i64().unwrap_or(0) >= 18);
//! assert_collection_size(&adults, 3);
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
