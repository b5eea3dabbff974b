//! Numeric helpers and the random index generator used by the samplers.

use std::collections::BTreeSet;

use rand::distributions::Uniform;
use rand::prelude::*;

use crate::errors::FitError;

/// Machine epsilon for `f64`, the unit used by the fitting tolerances.
pub const EPSILON: f64 = f64::EPSILON;

/// `true` if `a` and `b` differ by strictly less than `tolerance`.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Accumulator-based running mean. An empty slice has mean `0.0`.
pub fn running_mean(values: &[f64]) -> f64 {
    let mut mean = 0.0;
    for (count, &value) in values.iter().enumerate() {
        mean += (value - mean) / (count + 1) as f64;
    }
    mean
}

/// Uniform random generator of row indices.
///
/// By default this uses an entropy-seeded RNG, but test code can construct
/// it from a fixed seed for reproducible behavior.
pub struct UniformRandomGenerator {
    rng: StdRng,
}

impl Default for UniformRandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandomGenerator {
    /// Construct with a random seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Construct with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw `count` distinct indices from `[0, upper)` into `out`, sorted
    /// ascending.
    ///
    /// Draws are rejected until enough distinct values are collected, so the
    /// request is checked against the range first.
    pub fn gen_unique_sorted(
        &mut self,
        count: usize,
        upper: usize,
        out: &mut Vec<usize>,
    ) -> Result<(), FitError> {
        if count > upper {
            return Err(FitError::SampleSizeExceedsRows {
                sample_size: count,
                rows: upper,
            });
        }

        out.clear();
        if count == 0 {
            return Ok(());
        }

        let dist = Uniform::new(0, upper);
        let mut picked = BTreeSet::new();
        while picked.len() < count {
            picked.insert(self.rng.sample(dist));
        }
        out.extend(picked);
        Ok(())
    }
}
