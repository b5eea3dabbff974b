//! In-memory table of labelled numeric columns.
//!
//! Columns may be appended with different lengths; the table keeps every
//! column at the common (longest) row count by padding with zeros.

use crate::errors::TableError;
use crate::utils::running_mean;

/// Value used to pad columns up to the table's common row count.
pub const PAD_VALUE: f64 = 0.0;

const SELECTED_SUFFIX: &str = "- selected";

/// A labelled column of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    header: String,
    values: Vec<f64>,
}

impl Column {
    /// Wrap an already-owned vector.
    pub fn new(header: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            header: header.into(),
            values,
        }
    }

    /// Copy `values` into a new column, reporting allocation failure instead
    /// of aborting.
    pub fn from_slice(header: impl Into<String>, values: &[f64]) -> Result<Self, TableError> {
        let header = header.into();
        let mut owned = Vec::new();
        if owned.try_reserve_exact(values.len()).is_err() {
            return Err(TableError::AllocationFailed {
                requested: values.len(),
                header,
            });
        }
        owned.extend_from_slice(values);
        Ok(Self::new(header, owned))
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, value: f64) -> Result<(), TableError> {
        if self.values.try_reserve(1).is_err() {
            return Err(TableError::AllocationFailed {
                requested: self.values.len() + 1,
                header: self.header.clone(),
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// Extend with `fill` until the column holds `rows` values. Never
    /// shortens.
    pub fn pad_to(&mut self, rows: usize, fill: f64) -> Result<(), TableError> {
        let missing = rows.saturating_sub(self.values.len());
        if missing == 0 {
            return Ok(());
        }
        if self.values.try_reserve(missing).is_err() {
            return Err(TableError::AllocationFailed {
                requested: rows,
                header: self.header.clone(),
            });
        }
        self.values.resize(rows, fill);
        Ok(())
    }

    pub fn value_at(&self, row: usize) -> Result<f64, TableError> {
        self.values
            .get(row)
            .copied()
            .ok_or_else(|| TableError::RowIndexOutOfRange {
                index: row,
                len: self.values.len(),
                header: self.header.clone(),
            })
    }

    /// New column holding the given rows in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Result<Column, TableError> {
        let values = rows
            .iter()
            .map(|&row| self.value_at(row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Column::new(format!("{}{}", self.header, SELECTED_SUFFIX), values))
    }

    /// Running mean of the column; `0.0` when empty.
    pub fn average(&self) -> f64 {
        running_mean(&self.values)
    }
}

/// A named collection of columns sharing one row count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Longest column length, `0` for an empty table.
    pub fn common_row_count(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    /// Append a column, padding either it or the existing columns with
    /// [`PAD_VALUE`] so all columns end up the same length.
    pub fn append_column(&mut self, mut column: Column) -> Result<(), TableError> {
        let rows = self.common_row_count().max(column.len());
        column.pad_to(rows, PAD_VALUE)?;
        for existing in &mut self.columns {
            existing.pad_to(rows, PAD_VALUE)?;
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn column(&self, index: usize) -> Result<&Column, TableError> {
        self.columns
            .get(index)
            .ok_or(TableError::ColumnIndexOutOfRange {
                index,
                count: self.columns.len(),
            })
    }

    pub fn cell_value(&self, row: usize, column: usize) -> Result<f64, TableError> {
        self.column(column)?.value_at(row)
    }
}
