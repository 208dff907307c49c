//! Basic arithmetic combiners: Sum, Min, Max

use super::CombineFn;
use ordered_float::OrderedFloat;

/* ===================== Sum ===================== */

/// Sum of values.
///
/// - Accumulator: `f64`
/// - Output: `f64`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum;

impl CombineFn<f64, f64, f64> for Sum {
    fn create(&self) -> f64 {
        0.0
    }

    fn add_input(&self, acc: &mut f64, v: f64) {
        *acc += v;
    }

    fn finish(&self, acc: f64) -> f64 {
        acc
    }
}

/* ===================== Min ===================== */

/// Minimum value, `0.0` for an empty input.
///
/// - Accumulator: `Option<OrderedFloat<f64>>`
/// - Output: `f64`
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

impl CombineFn<f64, Option<OrderedFloat<f64>>, f64> for Min {
    fn create(&self) -> Option<OrderedFloat<f64>> {
        None
    }

    fn add_input(&self, acc: &mut Option<OrderedFloat<f64>>, v: f64) {
        let v = OrderedFloat(v);
        match acc {
            Some(cur) => {
                if v < *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<OrderedFloat<f64>>) -> f64 {
        acc.map_or(0.0, OrderedFloat::into_inner)
    }
}

/* ===================== Max ===================== */

/// Maximum value, `0.0` for an empty input.
///
/// - Accumulator: `Option<OrderedFloat<f64>>`
/// - Output: `f64`
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl CombineFn<f64, Option<OrderedFloat<f64>>, f64> for Max {
    fn create(&self) -> Option<OrderedFloat<f64>> {
        None
    }

    fn add_input(&self, acc: &mut Option<OrderedFloat<f64>>, v: f64) {
        let v = OrderedFloat(v);
        match acc {
            Some(cur) => {
                if v > *cur {
                    *cur = v;
                }
            }
            None => *acc = Some(v),
        }
    }

    fn finish(&self, acc: Option<OrderedFloat<f64>>) -> f64 {
        acc.map_or(0.0, OrderedFloat::into_inner)
    }
}
