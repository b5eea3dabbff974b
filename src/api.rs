//! High-level line-fitting API.
//!
//! Thin functions over the strategies in [`crate::estimators`] for callers
//! that want a single call per fit, a least-squares/RANSAC comparison, or
//! fitted-value columns appended to a [`Table`].

use tracing::{info, warn};

use crate::choices::FitStrategyChoice;
use crate::core::{EstimationResult, FitOutcome, LinearModelFitStrategy};
use crate::errors::FitError;
use crate::estimators::{LeastSquaresFitStrategy, RansacFitStrategy};
use crate::settings::RansacParameters;
use crate::table::{Column, Table};
use crate::types::{DataMatrix, SampleSet};

/// Ordinary least squares over every row.
pub fn fit_least_squares(abscissa: &[f64], ordinate: &[f64]) -> Result<EstimationResult, FitError> {
    LeastSquaresFitStrategy.estimate(abscissa, ordinate)
}

/// One RANSAC run with a sampler seeded from `parameters.seed`.
pub fn fit_ransac(
    abscissa: &[f64],
    ordinate: &[f64],
    parameters: &RansacParameters,
) -> Result<FitOutcome, FitError> {
    RansacFitStrategy::new(parameters.clone()).fit_linear_model(abscissa, ordinate)
}

/// Estimate a line from points stored as rows of an Nx2 matrix.
///
/// # Arguments
/// * `points` - Nx2 matrix, each row is `[x, y]`
/// * `settings_opt` - Optional RANSAC parameters (uses defaults if None)
///
/// # Example
///
/// ```rust
/// use linefit::{estimate_line, RansacParameters};
/// use nalgebra::DMatrix;
///
/// let points = DMatrix::from_row_slice(3, 2, &[0.0, -1.0, 1.0, 1.0, 2.0, 3.0]);
/// let settings = RansacParameters::new(10, 2, 0.5, 2).with_seed(7);
///
/// let outcome = estimate_line(&points, Some(settings)).unwrap();
/// assert!(outcome.is_accepted());
/// ```
pub fn estimate_line(
    points: &DataMatrix,
    settings_opt: Option<RansacParameters>,
) -> Result<FitOutcome, FitError> {
    if points.ncols() != 2 {
        return Err(FitError::InvalidPointMatrix {
            rows: points.nrows(),
            cols: points.ncols(),
        });
    }

    let abscissa: Vec<f64> = points.column(0).iter().copied().collect();
    let ordinate: Vec<f64> = points.column(1).iter().copied().collect();
    let settings = settings_opt.unwrap_or_default();
    fit_ransac(&abscissa, &ordinate, &settings)
}

/// Least squares and RANSAC fitted to the same data.
#[derive(Debug, Clone, PartialEq)]
pub struct FitComparison {
    pub least_squares: EstimationResult,
    pub ransac: FitOutcome,
    /// Sum of squared residuals of the least-squares line over the RANSAC
    /// consensus set. Directly comparable with the RANSAC residual; `None`
    /// when RANSAC found no consensus.
    pub least_squares_consensus_residual: Option<f64>,
}

impl FitComparison {
    /// How much larger the least-squares residual is than the RANSAC one on
    /// the RANSAC consensus set.
    pub fn consensus_residual_gap(&self) -> Option<f64> {
        let ransac = self.ransac.result()?;
        self.least_squares_consensus_residual
            .map(|least_squares| least_squares - ransac.residual)
    }
}

/// Fit the same columns with least squares and RANSAC.
pub fn compare_fits(
    abscissa: &[f64],
    ordinate: &[f64],
    parameters: &RansacParameters,
) -> Result<FitComparison, FitError> {
    let least_squares = fit_least_squares(abscissa, ordinate)?;
    let ransac = fit_ransac(abscissa, ordinate, parameters)?;

    let least_squares_consensus_residual = match ransac.result() {
        Some(result) => {
            let samples = SampleSet::new(abscissa, ordinate)?;
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            samples.gather(&result.inliers, &mut xs, &mut ys)?;
            Some(least_squares.model.sum_of_squared_residuals(&xs, &ys))
        }
        None => None,
    };

    info!(
        least_squares = %least_squares.model,
        ransac = ?ransac.model(),
        "compared line fits"
    );

    Ok(FitComparison {
        least_squares,
        ransac,
        least_squares_consensus_residual,
    })
}

/// Fit each strategy to two columns of `table` and append one column of
/// fitted values per strategy, headed `"<strategy name> Fit"`.
///
/// When a strategy finds no consensus the fitted values of the default
/// (identity) line are appended instead and a warning is logged. Outcomes
/// are returned in strategy order.
pub fn append_fitted_columns(
    table: &mut Table,
    abscissa_column: usize,
    ordinate_column: usize,
    strategies: &mut [FitStrategyChoice],
) -> Result<Vec<FitOutcome>, FitError> {
    let abscissa = table.column(abscissa_column)?.values().to_vec();
    let ordinate = table.column(ordinate_column)?.values().to_vec();

    let mut outcomes = Vec::with_capacity(strategies.len());
    for strategy in strategies.iter_mut() {
        let outcome = strategy.fit_model(&abscissa, &ordinate)?;
        if !outcome.is_accepted() {
            warn!(
                strategy = strategy.name(),
                iterations = outcome.iterations(),
                "no consensus reached, filling with the default line"
            );
        }

        let model = outcome.model_or_default();
        info!(strategy = strategy.name(), %model, "appending fitted column");
        table.append_column(Column::new(
            format!("{} Fit", strategy.name()),
            model.values_at(&abscissa),
        ))?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
