//! Randomized candidate order: the sequence of starting cells the placement
//! engine tries for each word.
//!
//! Randomness comes from a [`RandomIndex`] source passed in by the caller, so
//! generation can be seeded for reproducible puzzles and tests.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::grid::Grid;

/// A source of uniformly distributed indices.
pub trait RandomIndex {
    /// Returns an index chosen uniformly from `0..=upper`.
    fn index_up_to(&mut self, upper: usize) -> usize;
}

/// Unseeded source backed by the thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    #[must_use]
    pub fn new() -> Self {
        ThreadRandom(rand::thread_rng())
    }
}

impl RandomIndex for ThreadRandom {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..=upper)
    }
}

/// Deterministic source: the same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        SeededRandom(StdRng::seed_from_u64(seed))
    }
}

impl RandomIndex for SeededRandom {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..=upper)
    }
}

/// In-place Fisher–Yates shuffle.
///
/// Walks `i` from `len - 1` down to `1`, swapping element `i` with one chosen
/// uniformly from `0..=i`.
pub fn shuffle<T, R: RandomIndex + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index_up_to(i);
        items.swap(i, j);
    }
}

/// Every coordinate of `grid`, shuffled.
#[must_use]
pub fn candidate_order<R: RandomIndex + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<(usize, usize)> {
    let mut order: Vec<_> = grid.cells().iter().map(|c| c.coords()).collect();
    shuffle(&mut order, rng);
    order
}
