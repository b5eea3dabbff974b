//! RANSAC line fit.
//!
//! Each iteration draws a minimal sample, fits a candidate line to it with
//! least squares, collects the candidate's consensus set, and if that set is
//! large enough refits the line to the consensus set alone. The refit with
//! the smallest sum of squared residuals over its own consensus set wins.

use tracing::{debug, trace};

use crate::core::{EstimationResult, FitOutcome, LinearModelFitStrategy, Sampler};
use crate::errors::FitError;
use crate::estimators::LeastSquaresFitStrategy;
use crate::models::LinearModel;
use crate::samplers::UniformRandomSampler;
use crate::scoring::ThresholdConsensus;
use crate::settings::RansacParameters;
use crate::types::SampleSet;

/// Random sample consensus estimator.
///
/// Generic over the [`Sampler`] so tests and callers can control which rows
/// are drawn; the default draws uniformly without replacement.
///
/// The best model is replaced only when a refit's residual is strictly
/// smaller than the current best. The first of several equal residuals is
/// kept, and a NaN residual (a consensus set whose abscissae are all equal)
/// never replaces anything.
pub struct RansacFitStrategy<S = UniformRandomSampler> {
    parameters: RansacParameters,
    sampler: S,
    least_squares: LeastSquaresFitStrategy,
}

impl RansacFitStrategy<UniformRandomSampler> {
    /// Uniform sampling, seeded from `parameters.seed` when set.
    pub fn new(parameters: RansacParameters) -> Self {
        let sampler = UniformRandomSampler::from_optional_seed(parameters.seed);
        Self::with_sampler(parameters, sampler)
    }
}

impl Default for RansacFitStrategy<UniformRandomSampler> {
    fn default() -> Self {
        Self::new(RansacParameters::default())
    }
}

impl<S: Sampler> RansacFitStrategy<S> {
    pub fn with_sampler(parameters: RansacParameters, sampler: S) -> Self {
        Self {
            parameters,
            sampler,
            least_squares: LeastSquaresFitStrategy,
        }
    }

    pub fn parameters(&self) -> &RansacParameters {
        &self.parameters
    }

    /// Run the RANSAC loop on paired columns.
    ///
    /// Fails before sampling if the columns differ in length or the
    /// parameters cannot be satisfied by this many rows.
    pub fn fit_linear_model(
        &mut self,
        abscissa: &[f64],
        ordinate: &[f64],
    ) -> Result<FitOutcome, FitError> {
        let samples = SampleSet::new(abscissa, ordinate)?;
        let rows = samples.len();
        self.parameters.validate(rows)?;

        let sample_size = self.parameters.min_sample_points as usize;
        let min_inliers = self.parameters.min_inliers_to_accept as usize;
        let iterations = self.parameters.iterations as usize;
        let scoring = ThresholdConsensus::new(self.parameters.inlier_threshold);

        let mut sample = Vec::with_capacity(sample_size);
        let mut inliers = Vec::with_capacity(rows);
        let mut xs = Vec::with_capacity(rows);
        let mut ys = Vec::with_capacity(rows);

        let mut best: Option<(LinearModel, Vec<usize>)> = None;
        let mut best_residual = f64::INFINITY;
        let mut accepted_iterations = 0usize;

        for iteration in 0..iterations {
            self.sampler.sample(rows, sample_size, &mut sample)?;
            samples.gather(&sample, &mut xs, &mut ys)?;
            let candidate = self.least_squares.fit_linear_model(&xs, &ys);

            let consensus = scoring.score(&samples, &candidate, &mut inliers);
            trace!(iteration, ?sample, %candidate, consensus, "scored candidate");
            if consensus < min_inliers {
                continue;
            }
            accepted_iterations += 1;

            samples.gather(&inliers, &mut xs, &mut ys)?;
            let refined = self.least_squares.fit_linear_model(&xs, &ys);
            let residual = refined.sum_of_squared_residuals(&xs, &ys);

            if residual < best_residual {
                debug!(iteration, consensus, residual, model = %refined, "new best model");
                best_residual = residual;
                best = Some((refined, inliers.clone()));
            }
        }

        match best {
            Some((model, inliers)) => {
                debug!(
                    iterations,
                    accepted_iterations,
                    inliers = inliers.len(),
                    residual = best_residual,
                    %model,
                    "RANSAC finished"
                );
                Ok(FitOutcome::Accepted(EstimationResult {
                    model,
                    residual: best_residual,
                    inliers,
                    iterations,
                    accepted_iterations,
                }))
            }
            None => {
                debug!(iterations, accepted_iterations, "RANSAC found no consensus");
                Ok(FitOutcome::NoConsensus { iterations })
            }
        }
    }
}

impl<S: Sampler> LinearModelFitStrategy for RansacFitStrategy<S> {
    fn name(&self) -> &'static str {
        "RANSAC"
    }

    fn fit_model(&mut self, abscissa: &[f64], ordinate: &[f64]) -> Result<FitOutcome, FitError> {
        self.fit_linear_model(abscissa, ordinate)
    }
}
