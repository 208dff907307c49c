//! Typed bulk extraction for [`Collection`].
//!
//! Each `to_*_array` converts every element with the rules in
//! [`convert`](crate::convert). Elements that cannot be converted, including records
//! and mappings, are zero-filled, so index `i` of the output always corresponds to
//! element `i`.

use crate::collection::{Collection, Item};
use crate::convert;
use crate::resolver::Shape;
use serde_json::Value;

macro_rules! array_conversions {
    ($($name:ident => $ty:ty, $conv:path;)*) => {
        paste::paste! {
            impl<T: Item> Collection<T> {
                $(
                    #[doc = concat!("Every element as `", stringify!($ty), "`, zero-filling failures.")]
                    #[must_use]
                    pub fn [<to_ $name _array>](&self) -> Vec<$ty> {
                        self.items
                            .iter()
                            .map(|item| $conv(&Shape::of(item).into_scalar()))
                            .collect()
                    }
                )*
            }
        }
    };
}

array_conversions! {
    int => i32, convert::to_i32;
    int64 => i64, convert::to_i64;
    float64 => f64, convert::to_f64;
    float => f32, convert::to_f32;
    bool => bool, convert::to_bool;
    string => String, convert::to_string;
}

impl<T: Item> Collection<T> {
    /// Every element as a JSON value, records and mappings included.
    #[must_use]
    pub fn to_interface_array(&self) -> Vec<Value> {
        self.items
            .iter()
            .map(|item| Shape::of(item).into_value())
            .collect()
    }
}
