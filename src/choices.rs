//! Runtime selection of fitting strategies.
//!
//! Callers that hold a list of strategies chosen at runtime (for example one
//! fitted column per strategy) use [`FitStrategyChoice`] instead of a trait
//! object. Built-in strategies are concrete variants and `Dyn` is the escape
//! hatch for custom implementations.

use crate::core::{FitOutcome, LinearModelFitStrategy};
use crate::errors::FitError;
use crate::estimators::{LeastSquaresFitStrategy, RansacFitStrategy};
use crate::settings::RansacParameters;

/// Runtime fit strategy selection.
pub enum FitStrategyChoice {
    LeastSquares(LeastSquaresFitStrategy),
    Ransac(RansacFitStrategy),
    Dyn(Box<dyn LinearModelFitStrategy + Send + Sync>),
}

impl Default for FitStrategyChoice {
    fn default() -> Self {
        FitStrategyChoice::LeastSquares(LeastSquaresFitStrategy)
    }
}

impl FitStrategyChoice {
    pub fn least_squares() -> Self {
        FitStrategyChoice::LeastSquares(LeastSquaresFitStrategy)
    }

    pub fn ransac(parameters: RansacParameters) -> Self {
        FitStrategyChoice::Ransac(RansacFitStrategy::new(parameters))
    }

    /// Least squares followed by RANSAC, the pair compared by
    /// [`append_fitted_columns`](crate::api::append_fitted_columns).
    pub fn comparison_pair(parameters: RansacParameters) -> Vec<FitStrategyChoice> {
        vec![Self::least_squares(), Self::ransac(parameters)]
    }
}

impl LinearModelFitStrategy for FitStrategyChoice {
    fn name(&self) -> &'static str {
        match self {
            FitStrategyChoice::LeastSquares(s) => s.name(),
            FitStrategyChoice::Ransac(s) => s.name(),
            FitStrategyChoice::Dyn(s) => s.name(),
        }
    }

    fn fit_model(&mut self, abscissa: &[f64], ordinate: &[f64]) -> Result<FitOutcome, FitError> {
        match self {
            FitStrategyChoice::LeastSquares(s) => s.fit_model(abscissa, ordinate),
            FitStrategyChoice::Ransac(s) => s.fit_model(abscissa, ordinate),
            FitStrategyChoice::Dyn(s) => s.fit_model(abscissa, ordinate),
        }
    }
}
