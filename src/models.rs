//! The straight-line model produced by every fitting strategy.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Straight line `y = intercept + slope * x`.
///
/// A plain value type: copied freely and compared field by field. The
/// default is the identity line `{ intercept: 0, slope: 1 }`.
///
/// `==` is exact IEEE equality of both fields. Fitted parameters are rarely
/// bit-identical across platforms, so prefer [`LinearModel::approx_eq`] when
/// comparing results of a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearModel {
    pub intercept: f64,
    pub slope: f64,
}

impl Default for LinearModel {
    fn default() -> Self {
        Self {
            intercept: 0.0,
            slope: 1.0,
        }
    }
}

impl LinearModel {
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Evaluate the line at `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Evaluate the line at every abscissa, preserving order and length.
    pub fn values_at(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.value_at(x)).collect()
    }

    /// Signed vertical residual `value_at(x) - y`.
    pub fn residual_at(&self, x: f64, y: f64) -> f64 {
        self.value_at(x) - y
    }

    /// Sum of squared vertical residuals over the shared indices of the two
    /// columns. Returns `0.0` for empty input.
    pub fn sum_of_squared_residuals(&self, abscissa: &[f64], ordinate: &[f64]) -> f64 {
        debug_assert_eq!(abscissa.len(), ordinate.len());
        abscissa
            .iter()
            .zip(ordinate)
            .map(|(&x, &y)| {
                let r = self.residual_at(x, y);
                r * r
            })
            .sum()
    }

    /// Compare both parameters with an absolute tolerance.
    pub fn approx_eq(&self, other: &LinearModel, tolerance: f64) -> bool {
        crate::utils::approx_eq(self.intercept, other.intercept, tolerance)
            && crate::utils::approx_eq(self.slope, other.slope, tolerance)
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {}·x + {}", self.slope, self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearModel;

    #[test]
    fn default_is_identity_line() {
        let model = LinearModel::default();
        assert_eq!(model.intercept(), 0.0);
        assert_eq!(model.slope(), 1.0);
        assert_eq!(model.value_at(3.5), 3.5);
    }

    #[test]
    fn evaluates_single_and_multiple_points() {
        let model = LinearModel::new(-1.0, 2.0);
        assert_eq!(model.value_at(0.0), -1.0);
        assert_eq!(model.value_at(2.0), 3.0);
        assert_eq!(model.values_at(&[2.0, 0.0, 1.0]), vec![3.0, -1.0, 1.0]);
        assert!(model.values_at(&[]).is_empty());
    }

    #[test]
    fn sum_of_squared_residuals_over_shared_rows() {
        let model = LinearModel::new(0.0, 1.0);
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 1.0, 0.0];
        // residuals: -1, 0, 2
        assert_eq!(model.sum_of_squared_residuals(&xs, &ys), 5.0);
        assert_eq!(model.sum_of_squared_residuals(&[], &[]), 0.0);
    }

    #[test]
    fn exact_and_tolerant_equality() {
        let a = LinearModel::new(1.0, 2.0);
        let b = LinearModel::new(1.0 + 1e-12, 2.0);
        assert_eq!(a, LinearModel::new(1.0, 2.0));
        assert_ne!(a, b);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&b, 1e-13));
    }

    #[test]
    fn nan_models_never_compare_equal() {
        let nan = LinearModel::new(f64::NAN, f64::NAN);
        assert_ne!(nan, nan);
        assert!(!nan.approx_eq(&nan, 1.0));
    }

    #[test]
    fn displays_slope_intercept_form() {
        assert_eq!(LinearModel::new(-1.0, 2.0).to_string(), "y = 2·x + -1");
    }
}
