//! Ordinary least squares line fit.

use crate::core::{EstimationResult, FitOutcome, LinearModelFitStrategy};
use crate::errors::FitError;
use crate::models::LinearModel;
use crate::types::SampleSet;
use crate::utils::running_mean;

/// Closed-form ordinary least squares estimator.
///
/// ```text
/// slope     = Σ (xᵢ − x̄)(yᵢ − ȳ) / Σ (xᵢ − x̄)²
/// intercept = ȳ − slope · x̄
/// ```
///
/// Degenerate input is not rejected. With all abscissae equal the
/// denominator is zero and the slope comes out as NaN or ±∞; with no points
/// at all both parameters are NaN. Callers that need a usable line must
/// check [`f64::is_finite`] on the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquaresFitStrategy;

impl LeastSquaresFitStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Fit a line to the shared indices of the two columns.
    pub fn fit_linear_model(&self, abscissa: &[f64], ordinate: &[f64]) -> LinearModel {
        debug_assert_eq!(abscissa.len(), ordinate.len());

        let abscissa_mean = running_mean(abscissa);
        let ordinate_mean = running_mean(ordinate);

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (&x, &y) in abscissa.iter().zip(ordinate) {
            let dx = x - abscissa_mean;
            let dy = y - ordinate_mean;
            numerator += dx * dy;
            denominator += dx * dx;
        }

        let slope = numerator / denominator;
        LinearModel::new(ordinate_mean - slope * abscissa_mean, slope)
    }

    /// Fit a line to the selected rows only, taken in the given order.
    pub fn fit_rows(
        &self,
        samples: &SampleSet<'_>,
        rows: &[usize],
    ) -> Result<LinearModel, FitError> {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        samples.gather(rows, &mut xs, &mut ys)?;
        Ok(self.fit_linear_model(&xs, &ys))
    }

    /// Fit every row. The residual covers the whole dataset and every row
    /// is reported as an inlier.
    pub fn estimate(&self, abscissa: &[f64], ordinate: &[f64]) -> Result<EstimationResult, FitError> {
        let samples = SampleSet::new(abscissa, ordinate)?;
        let model = self.fit_linear_model(samples.abscissa(), samples.ordinate());
        let residual = model.sum_of_squared_residuals(samples.abscissa(), samples.ordinate());

        Ok(EstimationResult {
            model,
            residual,
            inliers: (0..samples.len()).collect(),
            iterations: 1,
            accepted_iterations: 1,
        })
    }
}

impl LinearModelFitStrategy for LeastSquaresFitStrategy {
    fn name(&self) -> &'static str {
        "Least Squares"
    }

    /// Always accepted.
    fn fit_model(&mut self, abscissa: &[f64], ordinate: &[f64]) -> Result<FitOutcome, FitError> {
        self.estimate(abscissa, ordinate).map(FitOutcome::Accepted)
    }
}
