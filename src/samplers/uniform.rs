//! Uniform random sampler drawing minimal samples without replacement.

use crate::core::Sampler;
use crate::errors::FitError;
use crate::utils::UniformRandomGenerator;

/// Uniform random sampler drawing minimal samples without replacement.
#[derive(Default)]
pub struct UniformRandomSampler {
    rng: UniformRandomGenerator,
}

impl UniformRandomSampler {
    /// Construct a new sampler with a random seed.
    pub fn new() -> Self {
        Self {
            rng: UniformRandomGenerator::new(),
        }
    }

    /// Construct a sampler from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
        }
    }

    /// Seeded when `seed` is set, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::from_seed)
    }
}

impl Sampler for UniformRandomSampler {
    fn sample(
        &mut self,
        rows: usize,
        sample_size: usize,
        out: &mut Vec<usize>,
    ) -> Result<(), FitError> {
        self.rng.gen_unique_sorted(sample_size, rows, out)
    }
}
