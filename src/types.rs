//! Shared input types.
//!
//! The fitting core works on two borrowed `f64` columns paired by index. The
//! matrix alias is kept for callers that hold their points as an `Nx2`
//! `nalgebra` matrix (see [`api::estimate_line`](crate::api::estimate_line)).

use nalgebra::DMatrix;

use crate::errors::FitError;

/// Dynamic row-major view of point data, one `[x, y]` row per point.
pub type DataMatrix = DMatrix<f64>;

/// Abscissa and ordinate columns of one dataset, validated to be the same
/// length.
#[derive(Debug, Clone, Copy)]
pub struct SampleSet<'a> {
    abscissa: &'a [f64],
    ordinate: &'a [f64],
}

impl<'a> SampleSet<'a> {
    /// Pair two columns. Fails if their lengths differ.
    pub fn new(abscissa: &'a [f64], ordinate: &'a [f64]) -> Result<Self, FitError> {
        if abscissa.len() != ordinate.len() {
            return Err(FitError::MismatchedInputs {
                abscissa_len: abscissa.len(),
                ordinate_len: ordinate.len(),
            });
        }
        Ok(Self { abscissa, ordinate })
    }

    pub fn abscissa(&self) -> &'a [f64] {
        self.abscissa
    }

    pub fn ordinate(&self) -> &'a [f64] {
        self.ordinate
    }

    pub fn len(&self) -> usize {
        self.ordinate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordinate.is_empty()
    }

    /// Iterate over `(x, y)` pairs in row order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.abscissa
            .iter()
            .copied()
            .zip(self.ordinate.iter().copied())
    }

    /// Copy the given rows, in the given order, into `xs` and `ys`.
    ///
    /// Both buffers are cleared first so they can be reused across calls.
    pub fn gather(
        &self,
        rows: &[usize],
        xs: &mut Vec<f64>,
        ys: &mut Vec<f64>,
    ) -> Result<(), FitError> {
        xs.clear();
        ys.clear();
        xs.reserve(rows.len());
        ys.reserve(rows.len());
        for &row in rows {
            if row >= self.len() {
                return Err(FitError::IndexOutOfRange {
                    index: row,
                    len: self.len(),
                });
            }
            xs.push(self.abscissa[row]);
            ys.push(self.ordinate[row]);
        }
        Ok(())
    }
}
