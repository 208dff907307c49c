//! Element-wise transforms for [`Collection`].
//!
//! ### Overview
//! - [`Collection::map`] -- transform each element, keeping the length
//! - [`Collection::each`] -- visit each element for side effects
//! - [`Collection::filter`] / [`Collection::skip`] -- keep / drop by predicate
//! - [`Collection::sort`] / [`Collection::sort_by_less`] -- stable sort by a "sorts before" comparator
//!
//! Every closure receives the element and its zero-based index. All transforms
//! except `each` return a new collection and leave the receiver unchanged.
//!
//! ### Example
//! ```
//! use fieldset::Collection;
//!
//! let c = Collection::new(vec![5, 3, 8, 1]);
//! let out = c
//!     .map(|x, _| x * 10)
//!     .skip(|x, _| *x > 60)
//!     .sort(|a, b| a < b);
//! assert_eq!(out.items(), &[10, 30, 50]);
//! assert_eq!(c.items(), &[5, 3, 8, 1]);
//! ```

use crate::collection::{Collection, Item, Less};
use std::sync::Arc;

impl<T: Item> Collection<T> {
    /// Apply `f(item, index)` to every element.
    #[must_use]
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&T, usize) -> T,
    {
        self.items.iter().enumerate().map(|(i, item)| f(item, i)).collect()
    }

    /// Call `f(item, index)` on every element in order and return the receiver.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T, usize),
    {
        for (i, item) in self.items.iter().enumerate() {
            f(item, i);
        }
        self
    }

    /// Keep the elements for which `pred(item, index)` is true.
    #[must_use]
    pub fn filter<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, item)| pred(*item, *i))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Drop the elements for which `pred(item, index)` is true.
    #[must_use]
    pub fn skip<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.filter(move |item, i| !pred(item, i))
    }

    /// Stable sort of a copy, where `less(a, b)` means `a` sorts before `b`.
    ///
    /// The comparator stays installed on the returned collection for
    /// [`less`](Collection::less), so it must be `'static`. To sort with a
    /// closure that borrows locals, use [`sort_by_less`](Self::sort_by_less).
    ///
    /// `less` need not be a strict weak order: an inconsistent comparator (`<=`,
    /// or `<` over floats holding NaN) yields some permutation of the elements.
    #[must_use]
    pub fn sort<F>(&self, less: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        let less: Less<T> = Arc::new(less);
        let items = merge_sort(self.items.clone(), &*less);
        Self {
            items,
            less: Some(less),
        }
    }

    /// Stable sort of a copy without installing the comparator, so `less` may
    /// borrow from its environment.
    #[must_use]
    pub fn sort_by_less<F>(&self, less: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        Self::new(merge_sort(self.items.clone(), &less))
    }
}

const INSERTION_RUN: usize = 16;

// Only ever asks `less(later, earlier)`; an element moves ahead of another only
// when it strictly sorts before it, which keeps equal elements in order.
fn merge_sort<T>(mut items: Vec<T>, less: &dyn Fn(&T, &T) -> bool) -> Vec<T> {
    if items.len() <= INSERTION_RUN {
        insertion_sort(&mut items, less);
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, less);
    let right = merge_sort(right, less);

    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => less(r, l),
            _ => break,
        };
        out.extend(if take_right { right.next() } else { left.next() });
    }
    out.extend(left);
    out.extend(right);
    out
}

fn insertion_sort<T>(items: &mut [T], less: &dyn Fn(&T, &T) -> bool) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && less(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
