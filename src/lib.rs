//! # linefit - Straight-Line Fitting with Least Squares and RANSAC
//!
//! `linefit` fits a line `y = slope·x + intercept` to paired numeric columns,
//! either with closed-form ordinary least squares or with RANSAC (random
//! sample consensus) for data contaminated by outliers.
//!
//! ## Quick Start
//!
//! ```rust
//! use linefit::{compare_fits, RansacParameters};
//!
//! let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let ys = [-1.0, 1.0, 3.0, 40.0, 7.0];
//!
//! let parameters = RansacParameters::new(50, 2, 0.5, 3).with_seed(42);
//! let comparison = compare_fits(&xs, &ys, &parameters).unwrap();
//!
//! println!("least squares: {}", comparison.least_squares.model);
//! if let Some(model) = comparison.ransac.model() {
//!     println!("RANSAC: {}", model);
//! }
//! ```
//!
//! ## Strategies
//!
//! Both strategies implement [`LinearModelFitStrategy`](core::LinearModelFitStrategy)
//! and return a [`FitOutcome`](core::FitOutcome):
//!
//! - [`LeastSquaresFitStrategy`](estimators::LeastSquaresFitStrategy) always
//!   accepts, fitting every row.
//! - [`RansacFitStrategy`](estimators::RansacFitStrategy) repeatedly fits
//!   minimal random samples, keeps candidates whose consensus set is large
//!   enough, refits them on that set, and returns the refit with the smallest
//!   residual. When no candidate qualifies it returns
//!   [`FitOutcome::NoConsensus`](core::FitOutcome::NoConsensus) rather than a
//!   made-up line.
//!
//! Custom strategies plug into [`FitStrategyChoice::Dyn`](choices::FitStrategyChoice::Dyn)
//! and custom samplers into
//! [`RansacFitStrategy::with_sampler`](estimators::RansacFitStrategy::with_sampler).
//!
//! ### Example: Deterministic Sampler
//!
//! ```rust
//! use linefit::core::{LinearModelFitStrategy, Sampler};
//! use linefit::errors::FitError;
//! use linefit::estimators::RansacFitStrategy;
//! use linefit::RansacParameters;
//!
//! /// Always draws the first `sample_size` rows.
//! struct FirstRows;
//!
//! impl Sampler for FirstRows {
//!     fn sample(
//!         &mut self,
//!         rows: usize,
//!         sample_size: usize,
//!         out: &mut Vec<usize>,
//!     ) -> Result<(), FitError> {
//!         if sample_size > rows {
//!             return Err(FitError::SampleSizeExceedsRows { sample_size, rows });
//!         }
//!         out.clear();
//!         out.extend(0..sample_size);
//!         Ok(())
//!     }
//! }
//!
//! let mut ransac = RansacFitStrategy::with_sampler(RansacParameters::default(), FirstRows);
//! let outcome = ransac.fit_model(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
//! assert_eq!(outcome.model().map(|m| m.slope()), Some(2.0));
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `trace` per RANSAC candidate, `debug`
//! when the best model changes, `info`/`warn` from the high-level API.
//! Install any subscriber to see them.

pub mod api;
pub mod choices;
pub mod core;
pub mod errors;
pub mod estimators;
pub mod models;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod table;
pub mod types;
pub mod utils;

// Re-export high-level API
pub use api::{
    append_fitted_columns, compare_fits, estimate_line, fit_least_squares, fit_ransac,
    FitComparison,
};

// Re-export core traits and results for easy access
pub use crate::core::{EstimationResult, FitOutcome, LinearModelFitStrategy, Sampler};

pub use choices::FitStrategyChoice;
pub use errors::{FitError, TableError};
pub use models::LinearModel;
pub use settings::RansacParameters;
pub use table::{Column, Table};
