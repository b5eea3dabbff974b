//! Consensus scoring for RANSAC candidates.

use crate::models::LinearModel;
use crate::types::SampleSet;

/// Threshold consensus on the absolute vertical residual.
///
/// A row is an inlier when `|model.value_at(x) - y| < threshold`. The
/// comparison is strict, so a zero threshold admits no point at all and a NaN
/// residual is never an inlier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConsensus {
    threshold: f64,
}

impl ThresholdConsensus {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_inlier(&self, model: &LinearModel, x: f64, y: f64) -> bool {
        model.residual_at(x, y).abs() < self.threshold
    }

    /// Collect the consensus set of `model` into `inliers_out` and return its
    /// size. Rows are visited in order, so the set comes out ascending and
    /// unique.
    pub fn score(
        &self,
        samples: &SampleSet<'_>,
        model: &LinearModel,
        inliers_out: &mut Vec<usize>,
    ) -> usize {
        inliers_out.clear();
        inliers_out.extend(
            samples
                .points()
                .enumerate()
                .filter(|&(_, (x, y))| self.is_inlier(model, x, y))
                .map(|(i, _)| i),
        );
        inliers_out.len()
    }
}
