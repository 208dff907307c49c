//! Positional edits and structural operations for [`Collection`].
//!
//! Derived (new collection): [`prepend`](Collection::prepend),
//! [`push`](Collection::push), [`put`](Collection::put),
//! [`merge`](Collection::merge), [`reverse`](Collection::reverse).
//!
//! In place (receiver mutated): [`pull`](Collection::pull),
//! [`shift`](Collection::shift), [`offset`](Collection::offset).
//!
//! `put` and `offset` share one rule: replace within range, append past the end.

use crate::collection::{Collection, Item};

impl<T: Item> Collection<T> {
    /// New collection with `items` inserted at the head, in the given order.
    #[must_use]
    pub fn prepend<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().chain(self.items.iter().cloned()).collect()
    }

    /// New collection with `items` appended at the tail.
    #[must_use]
    pub fn push<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.iter().cloned().chain(items).collect()
    }

    /// Remove and return the last element, or `T::default()` when empty.
    pub fn pull(&mut self) -> T {
        self.items.pop().unwrap_or_default()
    }

    /// Remove and return the last element, or `default` when empty.
    pub fn pull_or(&mut self, default: T) -> T {
        self.items.pop().unwrap_or(default)
    }

    /// Remove and return the first element, or `T::default()` when empty.
    pub fn shift(&mut self) -> T {
        self.shift_or(T::default())
    }

    /// Remove and return the first element, or `default` when empty.
    pub fn shift_or(&mut self, default: T) -> T {
        if self.items.is_empty() {
            default
        } else {
            self.items.remove(0)
        }
    }

    /// New collection with `item` at `index`, appended when `index` is past the end.
    #[must_use]
    pub fn put(&self, index: usize, item: T) -> Self {
        let mut out = Self::new(self.items.clone());
        out.offset(index, item);
        out
    }

    /// Replace the element at `index` in place, appending when `index` is past the end.
    pub fn offset(&mut self, index: usize, item: T) -> &mut Self {
        match self.items.get_mut(index) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
        self
    }

    /// Concatenate the receiver and `others`, in argument order.
    #[must_use]
    pub fn merge<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut items = self.items.clone();
        for other in others {
            items.extend(other.items.iter().cloned());
        }
        Self::new(items)
    }

    /// New collection in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }
}
