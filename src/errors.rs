//! Error types for line fitting and the in-memory table.
//!
//! Numeric degeneracies (zero variance in the abscissa, empty input to least
//! squares) are not errors: they propagate as NaN/Inf through the model.
//! The variants here cover caller contract violations only.

use thiserror::Error;

/// Errors raised by the fitting strategies and the high-level API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// Abscissa and ordinate must be paired by index.
    #[error("length mismatch: abscissa has {abscissa_len} values, ordinate has {ordinate_len}")]
    MismatchedInputs {
        abscissa_len: usize,
        ordinate_len: usize,
    },

    /// A RANSAC minimal sample must contain at least one point.
    #[error("minimal sample size must be at least 1")]
    EmptySample,

    /// A consensus set must contain at least one point to be refit.
    #[error("minimum consensus size must be at least 1")]
    EmptyConsensusAccepted,

    /// More distinct sample points were requested than there are rows.
    #[error("cannot draw {sample_size} distinct sample points from {rows} rows")]
    SampleSizeExceedsRows { sample_size: usize, rows: usize },

    /// The inlier threshold must be a non-negative number.
    #[error("inlier threshold must be non-negative, got {0}")]
    InvalidThreshold(f64),

    /// A row index referenced data outside the sample set.
    #[error("row index {index} is out of range for {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    /// Point matrices must have exactly two columns, `[x, y]`.
    #[error("points must be an Nx2 matrix, got {rows}x{cols}")]
    InvalidPointMatrix { rows: usize, cols: usize },

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Errors raised by [`Column`](crate::table::Column) and
/// [`Table`](crate::table::Table).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("row index {index} is out of range for column \"{header}\" with {len} rows")]
    RowIndexOutOfRange {
        index: usize,
        len: usize,
        header: String,
    },

    #[error("column index {index} is out of range for a table with {count} columns")]
    ColumnIndexOutOfRange { index: usize, count: usize },

    /// Reserving storage for a column failed.
    #[error("not enough memory to allocate {requested} rows for column \"{header}\"")]
    AllocationFailed { requested: usize, header: String },
}

#[cfg(test)]
mod tests {
    use super::{FitError, TableError};

    #[test]
    fn messages_carry_context() {
        let err = FitError::SampleSizeExceedsRows {
            sample_size: 5,
            rows: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot draw 5 distinct sample points from 3 rows"
        );

        let err = TableError::ColumnIndexOutOfRange { index: 4, count: 2 };
        assert_eq!(
            err.to_string(),
            "column index 4 is out of range for a table with 2 columns"
        );
    }

    #[test]
    fn table_errors_convert_into_fit_errors() {
        let table_err = TableError::RowIndexOutOfRange {
            index: 9,
            len: 3,
            header: "x".to_string(),
        };
        let fit_err: FitError = table_err.clone().into();
        assert_eq!(fit_err, FitError::Table(table_err.clone()));
        assert_eq!(fit_err.to_string(), table_err.to_string());
    }
}
