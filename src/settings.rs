//! RANSAC configuration.
//!
//! Parameters are passed by reference into each strategy. There is no
//! process-wide default instance; `RansacParameters::default()` builds a fresh
//! copy of the documented defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::FitError;

/// Configuration of one RANSAC run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RansacParameters {
    /// Number of sample-fit-score iterations.
    pub iterations: u32,
    /// Size of each random minimal sample.
    pub min_sample_points: u32,
    /// A point is an inlier when its absolute vertical residual is strictly
    /// below this value.
    pub inlier_threshold: f64,
    /// Minimum consensus size for a candidate to be refit and considered.
    /// Must be at least 1: an empty consensus set refits to a NaN line whose
    /// residual over zero rows is 0.
    pub min_inliers_to_accept: u32,
    /// Seed for the sampler. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RansacParameters {
    fn default() -> Self {
        Self {
            iterations: 1,
            min_sample_points: 2,
            inlier_threshold: 1e9,
            min_inliers_to_accept: 2,
            seed: None,
        }
    }
}

impl RansacParameters {
    pub fn new(
        iterations: u32,
        min_sample_points: u32,
        inlier_threshold: f64,
        min_inliers_to_accept: u32,
    ) -> Self {
        Self {
            iterations,
            min_sample_points,
            inlier_threshold,
            min_inliers_to_accept,
            seed: None,
        }
    }

    /// Same parameters with a fixed sampler seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the parameters against a dataset of `rows` points.
    pub fn validate(&self, rows: usize) -> Result<(), FitError> {
        if self.min_sample_points == 0 {
            return Err(FitError::EmptySample);
        }
        let sample_size = self.min_sample_points as usize;
        if sample_size > rows {
            return Err(FitError::SampleSizeExceedsRows { sample_size, rows });
        }
        if self.min_inliers_to_accept == 0 {
            return Err(FitError::EmptyConsensusAccepted);
        }
        if self.inlier_threshold.is_nan() || self.inlier_threshold < 0.0 {
            return Err(FitError::InvalidThreshold(self.inlier_threshold));
        }
        Ok(())
    }
}
