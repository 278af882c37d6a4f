//! Seeded random sources for reproducible stochastic choices
//!
//! Engines are generic over [`RandomSource`], so tests and callers can inject
//! their own generators. [`RandomSelector`] is the production source.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

/// Stream of random draws consumed by one layout run
///
/// Implementors supply the three primitive draws; categorical sampling,
/// coin flips, ranges and shuffles are built on top of them.
pub trait RandomSource {
    /// Uniform draw from `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Uniform index in `[0, bound)`; `bound` must be positive
    fn below(&mut self, bound: usize) -> usize;

    /// Normal draw with mean zero and the given standard deviation
    fn gaussian(&mut self, std_dev: f64) -> f64;

    /// Sample an index from a probability distribution
    ///
    /// Walks the cumulative distribution; rounding slack at the end falls to
    /// the last index. Returns 0 for an empty distribution.
    fn categorical(&mut self, probabilities: &[f64]) -> usize {
        let target = self.uniform();
        let mut cumulative = 0.0;
        for (index, &probability) in probabilities.iter().enumerate() {
            cumulative += probability;
            if target < cumulative {
                return index;
            }
        }
        probabilities.len().saturating_sub(1)
    }

    /// `true` with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Uniform integer in `[low, high]`
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        low + self.below(high.saturating_sub(low) + 1)
    }

    /// Shuffle `items` in place (Fisher–Yates)
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

/// Seeded random selector backed by [`StdRng`]
///
/// Reproducible for a given seed within one build of the crate.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for RandomSelector {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.random_range(0..bound)
    }

    fn gaussian(&mut self, std_dev: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * std_dev
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
