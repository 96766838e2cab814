//! # Dense matrix
//!
//! The simplex tableau is stored as a dense, row major matrix of floating point values. Besides
//! element access, the matrix offers the two elementary row operations that Gauss-Jordan
//! elimination is built from: scaling a row, and adding a multiple of one row to another.
use std::fmt::{Display, Formatter, Result as FormatResult};

use num_traits::Float;

use crate::error::InputError;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Float> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of the same, nonzero length.
    ///
    /// # Return value
    ///
    /// The matrix, or an error if there are no rows or the rows are not of equal length.
    pub fn from_data(data: Vec<Vec<F>>) -> Result<Self, InputError> {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        if nr_rows == 0 || nr_columns == 0 {
            return Err(InputError::Empty);
        }

        if let Some((row, values)) = data.iter()
            .enumerate()
            .find(|(_, values)| values.len() != nr_columns) {
            return Err(InputError::RaggedRow { row, expected: nr_columns, actual: values.len() });
        }

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn scale_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = *value * factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    ///
    /// # Arguments
    ///
    /// * `read_row`: Row that is added, not modified.
    /// * `write_row`: Row that is modified, should differ from `read_row`.
    /// * `factor`: Multiple of `read_row` to add.
    pub fn add_scaled_row_multiple(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read = self.data[read_row][j];
            self.data[write_row][j] = self.data[write_row][j] + factor * read;
        }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Coordinates of the first value that is infinite or NaN, if any.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.data.iter()
            .enumerate()
            .find_map(|(i, row)| {
                row.iter().position(|value| !value.is_finite()).map(|j| (i, j))
            })
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F: Float + Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let column_width = 10;
        for row in &self.data {
            write!(f, "[")?;
            for value in row {
                write!(f, "{0:>width$}", format!("{:.4}", value), width = column_width)?;
            }
            writeln!(f, "]")?;
        }

        Ok(())
    }
}
