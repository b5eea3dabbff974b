//! Core traits and result types shared by the fitting strategies.
//!
//! - [`LinearModelFitStrategy`]: fit a [`LinearModel`] to paired columns.
//! - [`Sampler`]: draw minimal samples of row indices for RANSAC.
//! - [`FitOutcome`] / [`EstimationResult`]: what a fit produced, with an
//!   explicit variant for "no consensus reached".

use crate::errors::FitError;
use crate::models::LinearModel;

/// A strategy that fits a straight line to paired abscissa/ordinate columns.
///
/// Implementations must not keep fit results between calls; the only state a
/// strategy may carry across calls is its configuration and, for randomized
/// strategies, its random number generator.
pub trait LinearModelFitStrategy {
    /// Short human-readable name, used in logs and fitted column headers.
    fn name(&self) -> &'static str;

    /// Fit a model to `abscissa[i], ordinate[i]` pairs.
    ///
    /// Returns an error for caller contract violations (length mismatch,
    /// unusable configuration). Numeric degeneracies are not errors.
    fn fit_model(&mut self, abscissa: &[f64], ordinate: &[f64]) -> Result<FitOutcome, FitError>;
}

/// Sampler responsible for drawing minimal samples of row indices.
pub trait Sampler {
    /// Draw `sample_size` distinct indices from `[0, rows)` into `out`,
    /// sorted ascending.
    ///
    /// Must fail with [`FitError::SampleSizeExceedsRows`] rather than loop
    /// when `sample_size > rows`.
    fn sample(
        &mut self,
        rows: usize,
        sample_size: usize,
        out: &mut Vec<usize>,
    ) -> Result<(), FitError>;
}

/// An accepted fit.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult {
    /// The fitted line.
    pub model: LinearModel,
    /// Sum of squared residuals over `inliers`.
    pub residual: f64,
    /// Rows the model was fitted on, ascending.
    pub inliers: Vec<usize>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of iterations whose consensus set met the acceptance size.
    pub accepted_iterations: usize,
}

/// Outcome of a fit.
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome {
    Accepted(EstimationResult),
    /// No iteration produced a large enough consensus set.
    NoConsensus { iterations: usize },
}

impl FitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FitOutcome::Accepted(_))
    }

    pub fn model(&self) -> Option<LinearModel> {
        self.result().map(|r| r.model)
    }

    pub fn result(&self) -> Option<&EstimationResult> {
        match self {
            FitOutcome::Accepted(result) => Some(result),
            FitOutcome::NoConsensus { .. } => None,
        }
    }

    pub fn into_result(self) -> Option<EstimationResult> {
        match self {
            FitOutcome::Accepted(result) => Some(result),
            FitOutcome::NoConsensus { .. } => None,
        }
    }

    /// The fitted model, or the identity line when nothing was accepted.
    pub fn model_or_default(&self) -> LinearModel {
        self.model().unwrap_or_default()
    }

    pub fn iterations(&self) -> usize {
        match self {
            FitOutcome::Accepted(result) => result.iterations,
            FitOutcome::NoConsensus { iterations } => *iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EstimationResult, FitOutcome};
    use crate::models::LinearModel;

    fn accepted() -> FitOutcome {
        FitOutcome::Accepted(EstimationResult {
            model: LinearModel::new(2.0, -3.0),
            residual: 0.5,
            inliers: vec![0, 2],
            iterations: 4,
            accepted_iterations: 1,
        })
    }

    #[test]
    fn accepted_outcome_exposes_model() {
        let outcome = accepted();
        assert!(outcome.is_accepted());
        assert_eq!(outcome.model(), Some(LinearModel::new(2.0, -3.0)));
        assert_eq!(outcome.model_or_default(), LinearModel::new(2.0, -3.0));
        assert_eq!(outcome.iterations(), 4);
        assert_eq!(outcome.into_result().unwrap().inliers, vec![0, 2]);
    }

    #[test]
    fn no_consensus_is_distinguishable_from_identity_fit() {
        let outcome = FitOutcome::NoConsensus { iterations: 7 };
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.model(), None);
        assert!(outcome.result().is_none());
        assert_eq!(outcome.model_or_default(), LinearModel::default());
        assert_eq!(outcome.iterations(), 7);
    }
}
