//! Line-fitting strategies.
//!
//! - [`LeastSquaresFitStrategy`]: closed-form ordinary least squares.
//! - [`RansacFitStrategy`]: random sample consensus, refit with least squares.

pub mod least_squares;
pub mod ransac;

pub use least_squares::LeastSquaresFitStrategy;
pub use ransac::RansacFitStrategy;
