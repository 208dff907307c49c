//! # Sampling helpers
//!
//! Uniform sampling without replacement, built on `rand`:
//! - [`Collection::random`] -- `size` elements from the thread RNG
//! - [`Collection::random_one`] -- a single element
//! - [`Collection::random_seeded`] -- deterministic for a given `seed`
//!
//! A `size` larger than the collection is clamped, returning every element in a
//! random order.

use crate::collection::{Collection, Item};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

impl<T: Item> Collection<T> {
    /// `size` distinct positions drawn uniformly at random.
    #[must_use]
    pub fn random(&self, size: usize) -> Self {
        self.sample_with(size, &mut rand::thread_rng())
    }

    /// One element drawn at random, or an empty collection when empty.
    #[must_use]
    pub fn random_one(&self) -> Self {
        self.random(1)
    }

    /// Like [`random`](Self::random), reproducible for the same `seed` and input.
    #[must_use]
    pub fn random_seeded(&self, size: usize, seed: u64) -> Self {
        self.sample_with(size, &mut StdRng::seed_from_u64(seed))
    }

    fn sample_with<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Self {
        let size = size.min(self.items.len());
        let mut picked: Vec<T> = self.items.choose_multiple(rng, size).cloned().collect();
        picked.shuffle(rng);
        Self::new(picked)
    }
}
