//! Paged iteration for [`Collection`].
//!
//! [`Collection::chunk`] hands consecutive slices of at most `size` elements to a
//! handler, one page at a time. It is the one operation in the crate that reports
//! failure: the first error returned by the handler stops the iteration and is
//! passed back unchanged.

use crate::collection::{Collection, Item};
use anyhow::{bail, Result};

impl<T: Item> Collection<T> {
    /// Call `handler(chunk, page)` for consecutive chunks of `size` elements, with pages
    /// numbered from 1. The last chunk may be shorter.
    ///
    /// # Errors
    /// Returns the first handler error, after which no further pages are visited, and
    /// fails without calling the handler when `size` is zero.
    ///
    /// # Example
    /// ```
    /// use fieldset::Collection;
    ///
    /// let c = Collection::new((0..7).collect::<Vec<i32>>());
    /// let mut seen = Vec::new();
    /// let err = c
    ///     .chunk(3, |chunk, page| {
    ///         if page == 2 {
    ///             anyhow::bail!("stop at page {page}");
    ///         }
    ///         seen.extend(chunk.into_vec());
    ///         Ok(())
    ///     })
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "stop at page 2");
    /// assert_eq!(seen, vec![0, 1, 2]);
    /// ```
    pub fn chunk<F>(&self, size: usize, mut handler: F) -> Result<()>
    where
        F: FnMut(Self, usize) -> Result<()>,
    {
        if size == 0 {
            bail!("chunk size must be greater than zero");
        }
        for (index, slice) in self.items.chunks(size).enumerate() {
            let page = index + 1;
            log::debug!("chunk page {page} with {} elements", slice.len());
            handler(Self::new(slice.to_vec()), page)
                .inspect_err(|err| log::debug!("chunk stopped at page {page}: {err}"))?;
        }
        Ok(())
    }
}
