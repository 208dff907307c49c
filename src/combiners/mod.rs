//! Aggregation functions behind [`Collection::sum`](crate::Collection::sum) and friends.
//!
//! Every combiner folds a stream of `f64` values (one per element, already coerced
//! by [`convert`](crate::convert)):
//!
//! - [`Sum`] -- sum of values.
//! - [`Min`] -- minimum value.
//! - [`Max`] -- maximum value.
//! - [`Average`] -- arithmetic mean.
//!
//! Each combiner specifies its accumulator type (`A`). All of them finish to `0.0`
//! on an empty input. Custom aggregations implement [`CombineFn`] and run through
//! [`Collection::aggregate`](crate::Collection::aggregate).
//!
//! # Examples
//! ```
//! use fieldset::{Collection, CombineFn};
//!
//! // Sum of squares as a custom combiner
//! struct SumSquares;
//! impl CombineFn<f64, f64, f64> for SumSquares {
//!     fn create(&self) -> f64 { 0.0 }
//!     fn add_input(&self, acc: &mut f64, v: f64) { *acc += v * v; }
//!     fn finish(&self, acc: f64) -> f64 { acc }
//! }
//!
//! let c = Collection::new(vec![1, 2, 3]);
//! assert_eq!(c.aggregate(SumSquares, None), 14.0);
//! ```

mod basic;
mod statistical;

pub use basic::{Max, Min, Sum};
pub use statistical::Average;

/// A fold over values of type `V` through an accumulator `A`, producing `O`.
pub trait CombineFn<V, A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;
}
