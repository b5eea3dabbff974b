//! Integration tests for the high-level Rust API.
//!
//! These tests drive the public functions with synthetic lines, with and
//! without outliers, and check the results against known answers.

use approx::assert_abs_diff_eq;
use linefit::samplers::UniformRandomSampler;
use linefit::*;
use nalgebra::DMatrix;

/// `y = 2x - 1` on `x = 0.0..=1.0` in steps of 0.1, plus `(0.5, 10.0)`.
fn line_with_outlier() -> (Vec<f64>, Vec<f64>) {
    let mut xs = vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    let mut ys = vec![-1.0, -0.8, -0.6, -0.4, -0.2, 0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
    xs.push(0.5);
    ys.push(10.0);
    (xs, ys)
}

#[test]
fn test_least_squares_known_answers() {
    let two = fit_least_squares(&[0.0, 1.0], &[2.0, 0.0]).unwrap();
    assert_eq!(two.model.slope(), -2.0);
    assert_eq!(two.model.intercept(), 2.0);

    let three = fit_least_squares(&[0.0, 1.0, 2.0], &[-1.0, 0.0, 1.0]).unwrap();
    assert_eq!(three.model.slope(), 1.0);
    assert_eq!(three.model.intercept(), -1.0);
}

#[test]
fn test_ransac_ignores_outlier_that_drags_least_squares() {
    let (xs, ys) = line_with_outlier();
    let parameters = RansacParameters::new(100, 2, 0.05, 8).with_seed(2024);

    let comparison = compare_fits(&xs, &ys, &parameters).unwrap();

    // The outlier sits above the middle of the range, so least squares keeps
    // the slope and lifts the intercept.
    assert_eq!(comparison.least_squares.model.slope(), 2.0);
    assert_abs_diff_eq!(
        comparison.least_squares.model.intercept(),
        -0.16666666666666666,
        epsilon = f64::EPSILON
    );

    let ransac = comparison
        .ransac
        .result()
        .expect("a clean pair is drawn within 100 iterations");
    assert_eq!(ransac.inliers, (0..=10).collect::<Vec<_>>());
    assert_abs_diff_eq!(ransac.model.slope(), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ransac.model.intercept(), -1.0, epsilon = 1e-12);
    assert_eq!(ransac.iterations, 100);
    assert!(ransac.accepted_iterations >= 1);
    assert!(comparison.consensus_residual_gap().unwrap() > 1.0);
}

#[test]
fn test_ransac_default_parameters_on_clean_line() {
    let mut xs = Vec::with_capacity(101);
    let mut value = 0.0;
    for _ in 0..101 {
        xs.push(value);
        value += 0.1;
    }
    let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x - 1.0).collect();

    let outcome = fit_ransac(&xs, &ys, &RansacParameters::default()).unwrap();
    let model = outcome.model().expect("every row is within 1e9");
    assert_abs_diff_eq!(model.slope(), 2.0, epsilon = 100.0 * f64::EPSILON);
    assert_abs_diff_eq!(model.intercept(), -1.0, epsilon = 100.0 * f64::EPSILON);
}

#[test]
fn test_least_squares_is_idempotent() {
    let (xs, ys) = line_with_outlier();
    let first = fit_least_squares(&xs, &ys).unwrap();
    let second = fit_least_squares(&xs, &ys).unwrap();
    assert_eq!(first.model.slope().to_bits(), second.model.slope().to_bits());
    assert_eq!(
        first.model.intercept().to_bits(),
        second.model.intercept().to_bits()
    );
}

#[test]
fn test_seeded_ransac_is_reproducible() {
    let (xs, ys) = line_with_outlier();
    let parameters = RansacParameters::new(20, 3, 0.3, 4).with_seed(77);
    let first = fit_ransac(&xs, &ys, &parameters).unwrap();
    let second = fit_ransac(&xs, &ys, &parameters).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_uniform_sampler_draws_distinct_sorted_indices() {
    let mut sampler = UniformRandomSampler::from_seed(5);
    let mut sample = Vec::new();
    for _ in 0..200 {
        sampler.sample(10, 4, &mut sample).unwrap();
        assert_eq!(sample.len(), 4);
        assert!(sample.windows(2).all(|w| w[0] < w[1]));
        assert!(sample.iter().all(|&i| i < 10));
    }

    sampler.sample(3, 3, &mut sample).unwrap();
    assert_eq!(sample, vec![0, 1, 2]);
}

#[test]
fn test_zero_threshold_reports_no_consensus() {
    let (xs, ys) = line_with_outlier();
    let parameters = RansacParameters::new(10, 2, 0.0, 2).with_seed(1);
    let outcome = fit_ransac(&xs, &ys, &parameters).unwrap();

    assert_eq!(outcome, FitOutcome::NoConsensus { iterations: 10 });
    // The fallback line is still available for callers that want it.
    assert_eq!(outcome.model_or_default(), LinearModel::new(0.0, 1.0));
}

#[test]
fn test_sample_larger_than_dataset_fails_fast() {
    let parameters = RansacParameters::new(1_000_000, 5, 1.0, 2);
    assert_eq!(
        fit_ransac(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &parameters),
        Err(FitError::SampleSizeExceedsRows {
            sample_size: 5,
            rows: 3
        })
    );
}

#[test]
fn test_mismatched_columns_are_rejected() {
    let expected = Err(FitError::MismatchedInputs {
        abscissa_len: 3,
        ordinate_len: 2,
    });
    assert_eq!(fit_least_squares(&[0.0, 1.0, 2.0], &[0.0, 1.0]), expected);
    assert_eq!(
        fit_ransac(&[0.0, 1.0, 2.0], &[0.0, 1.0], &RansacParameters::default()).map(|_| ()),
        Err(FitError::MismatchedInputs {
            abscissa_len: 3,
            ordinate_len: 2,
        })
    );
}

#[test]
fn test_estimate_line_from_point_matrix() {
    let (xs, ys) = line_with_outlier();
    let mut points = DMatrix::<f64>::zeros(xs.len(), 2);
    for (i, (&x, &y)) in xs.iter().zip(&ys).enumerate() {
        points[(i, 0)] = x;
        points[(i, 1)] = y;
    }

    let settings = RansacParameters::new(100, 2, 0.05, 8).with_seed(9);
    let outcome = estimate_line(&points, Some(settings)).unwrap();
    let result = outcome.result().expect("a clean pair is drawn");
    assert!(!result.inliers.contains(&11));
    assert_abs_diff_eq!(result.model.slope(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_table_fitting_workflow() {
    let (xs, ys) = line_with_outlier();
    let mut table = Table::new("measurements");
    table
        .append_column(Column::from_slice("x", &xs).unwrap())
        .unwrap();
    table
        .append_column(Column::from_slice("y", &ys).unwrap())
        .unwrap();

    let mut strategies =
        FitStrategyChoice::comparison_pair(RansacParameters::new(100, 2, 0.05, 8).with_seed(3));
    let outcomes = append_fitted_columns(&mut table, 0, 1, &mut strategies).unwrap();

    assert_eq!(outcomes.len(), 2);
    assert_eq!(table.column_count(), 4);
    assert_eq!(table.common_row_count(), 12);

    let least_squares = table.column(2).unwrap();
    let ransac = table.column(3).unwrap();
    assert_eq!(least_squares.header(), "Least Squares Fit");
    assert_eq!(ransac.header(), "RANSAC Fit");

    // At the outlier's abscissa the robust fit stays on y = 2x - 1.
    assert_abs_diff_eq!(ransac.value_at(11).unwrap(), 0.0, epsilon = 1e-12);
    assert!(least_squares.value_at(11).unwrap() > 0.8);

    let inlier_rows: Vec<usize> = (0..=10).collect();
    let selected = table.column(1).unwrap().select_rows(&inlier_rows).unwrap();
    assert_eq!(selected.header(), "y- selected");
    assert_abs_diff_eq!(selected.average(), 0.0, epsilon = 1e-12);
}
