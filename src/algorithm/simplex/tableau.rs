//! # The simplex tableau
//!
//! Contains the simplex tableau and the elementary operations which can be performed upon it. The
//! tableau is extended with supplementary data structures for efficiency.
use std::collections::{BTreeSet, HashMap};
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::float::{is_close, to_f64_lossy};
use crate::error::InputError;

/// The data structure that the simplex algorithm operates on.
///
/// A dense matrix with a row for every constraint and a last row for the objective function, and
/// a column for every variable and a last column for the right-hand side. The objective row
/// represents `-z + c^T x = rhs`, such that the current objective value is `-rhs`. The tableau is
/// optimal when no coefficient in the objective row is positive.
///
/// The tableau owns the basis: for every constraint row the variable that is basic in it.
#[derive(Clone, PartialEq, Debug)]
pub struct Tableau<F> {
    /// Matrix of size (m + 1) x (n + 1).
    ///
    /// This attribute changes with a basis change.
    matrix: DenseMatrix<F>,

    /// Maps the rows to the column containing its pivot.
    ///
    /// The rows are indexed 0 through self.nr_rows(), while the columns are indexed 0 through
    /// self.nr_columns().
    ///
    /// This attribute changes with a basis change.
    basis_indices: Vec<usize>,
    /// All columns currently not in the basis.
    ///
    /// Derived from `basis_indices`, and kept up to date with it on every basis change rather than
    /// being recomputed.
    non_basis_columns: BTreeSet<usize>,
}

impl<F: Float> Tableau<F> {
    /// Create a new tableau, checking the input for consistency.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Constraint rows followed by the objective row. The last column holds the
    /// right-hand side.
    /// * `basis_indices`: For each constraint row, the variable that is basic in it.
    /// * `nr_constraints`: Number of constraint rows `m`.
    /// * `nr_variables`: Number of variables `n`, including any slack or artificial variables.
    ///
    /// # Return value
    ///
    /// The tableau, or an error if the dimensions don't match, the basis isn't a list of distinct
    /// variables of the right length, a value isn't finite, or the basis is infeasible.
    ///
    /// # Note
    ///
    /// The columns of the basic variables are expected to form an identity matrix (also in the
    /// objective row). This is not enforced, see `first_non_canonical_row`.
    pub fn new(
        matrix: DenseMatrix<F>,
        basis_indices: Vec<usize>,
        nr_constraints: usize,
        nr_variables: usize,
    ) -> Result<Self, InputError> {
        // A matrix is never empty, so it always has an objective row and a right-hand side column
        if matrix.nr_rows() - 1 != nr_constraints || matrix.nr_columns() - 1 != nr_variables {
            return Err(InputError::Dimensions {
                nr_rows: matrix.nr_rows(),
                nr_columns: matrix.nr_columns(),
                nr_constraints,
                nr_variables,
            });
        }
        if basis_indices.len() != nr_constraints {
            return Err(InputError::BasisLength {
                expected: nr_constraints,
                actual: basis_indices.len(),
            });
        }

        let mut rows_by_variable = HashMap::with_capacity(nr_constraints);
        for (row, &variable) in basis_indices.iter().enumerate() {
            if variable >= nr_variables {
                return Err(InputError::BasisIndexOutOfRange { row, variable, nr_variables });
            }
            if let Some(&first_row) = rows_by_variable.get(&variable) {
                return Err(InputError::DuplicateBasisIndex { variable, first_row, second_row: row });
            }
            rows_by_variable.insert(variable, row);
        }

        if let Some((row, column)) = matrix.first_non_finite() {
            return Err(InputError::NonFinite { row, column });
        }

        let rhs_column = nr_variables;
        if let Some(row) = (0..nr_constraints).find(|&i| matrix.get_value(i, rhs_column) < F::zero()) {
            return Err(InputError::Infeasible {
                row,
                value: to_f64_lossy(matrix.get_value(row, rhs_column)),
            });
        }

        let non_basis_columns = (0..nr_variables)
            .filter(|j| !rows_by_variable.contains_key(j))
            .collect();

        Ok(Self { matrix, basis_indices, non_basis_columns })
    }

    /// Create a new tableau from rows, deriving the dimensions from the data.
    ///
    /// See `Tableau::new`.
    pub fn from_data(data: Vec<Vec<F>>, basis_indices: Vec<usize>) -> Result<Self, InputError> {
        let matrix = DenseMatrix::from_data(data)?;
        let nr_constraints = matrix.nr_rows() - 1;
        let nr_variables = matrix.nr_columns() - 1;

        Self::new(matrix, basis_indices, nr_constraints, nr_variables)
    }

    /// Brings a column into the basis by Gauss-Jordan elimination.
    ///
    /// The pivot row is divided by the pivot element, after which multiples of it are subtracted
    /// from all other rows (including the objective row) such that the pivot column becomes a unit
    /// vector. Then, the basis indices are updated.
    ///
    /// # Arguments
    ///
    /// * `pivot_column`: Index of the entering variable, in range 0 until self.nr_columns().
    /// * `pivot_row`: Index of the row of the leaving variable, in range 0 until self.nr_rows().
    ///
    /// # Return value
    ///
    /// Index of the variable that left the basis.
    ///
    /// # Note
    ///
    /// The pivot element should not be zero. Checking whether it is numerically safe to divide by
    /// it is up to the caller.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize) -> usize {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());

        let pivot_value = self.pivot_element(pivot_row, pivot_column);
        debug_assert!(pivot_value != F::zero());

        self.matrix.scale_row(pivot_row, F::one() / pivot_value);
        // Exact, rather than the product of the pivot element and its inverse
        self.matrix.set_value(pivot_row, pivot_column, F::one());

        for row in (0..self.matrix.nr_rows()).filter(|&i| i != pivot_row) {
            let value = self.matrix.get_value(row, pivot_column);
            if value != F::zero() {
                self.matrix.add_scaled_row_multiple(pivot_row, row, -value);
            }
        }

        self.update_basis_indices(pivot_row, pivot_column)
    }

    /// Update the basis index.
    ///
    /// Removes the entering variable from the non basis columns and adds the leaving variable to
    /// them, unless it is still basic in another row.
    ///
    /// # Return value
    ///
    /// The leaving variable.
    fn update_basis_indices(&mut self, pivot_row: usize, pivot_column: usize) -> usize {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());

        let leaving_column = self.basis_indices[pivot_row];
        self.basis_indices[pivot_row] = pivot_column;
        self.non_basis_columns.remove(&pivot_column);
        if !self.basis_indices.contains(&leaving_column) {
            self.non_basis_columns.insert(leaving_column);
        }

        debug_assert!(
            self.non_basis_columns.iter().copied().eq(
                (0..self.nr_columns()).filter(|j| !self.basis_indices.contains(j)),
            ),
        );

        leaving_column
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current constraint value and the column. When there are multiple
    /// rows with this ratio, the one with the lowest index is selected.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering variable.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio)
        let mut min_values: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.matrix.get_value(row, column);
            if xij > F::zero() {
                let ratio = self.constraint_value(row) / xij;
                match min_values {
                    Some((_, min_ratio)) if ratio >= min_ratio => {},
                    _ => min_values = Some((row, ratio)),
                }
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// The objective row, without the right-hand side.
    pub fn objective_row(&self) -> &[F] {
        &self.matrix.row(self.nr_rows())[..self.nr_columns()]
    }

    /// Right-hand side of constraint row `i`, the value of the variable basic in that row.
    pub fn constraint_value(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        self.matrix.get_value(i, self.nr_columns())
    }

    /// Value at the intersection of a constraint row and a variable column.
    pub fn pivot_element(&self, row: usize, column: usize) -> F {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());

        self.matrix.get_value(row, column)
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// A value for each variable: the right-hand side of its row for basic variables, zero for
    /// the others. If a variable is basic in more than one row, the last of them determines the
    /// value.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut solution = vec![F::zero(); self.nr_columns()];
        for (row, &column) in self.basis_indices.iter().enumerate() {
            solution[column] = self.constraint_value(row);
        }

        solution
    }

    /// Get the value of the objective function of the current solution.
    pub fn objective_function_value(&self) -> F {
        -self.matrix.get_value(self.nr_rows(), self.nr_columns())
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        !self.non_basis_columns.contains(&column)
    }

    /// For each constraint row, the variable that is basic in it.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// All variables that are not basic, in increasing order.
    pub fn non_basis_columns(&self) -> &BTreeSet<usize> {
        &self.non_basis_columns
    }

    /// The full matrix, including the objective row and right-hand side column.
    pub fn matrix(&self) -> &DenseMatrix<F> {
        &self.matrix
    }

    /// The first constraint row whose basic variable doesn't have a unit column.
    ///
    /// In a canonical tableau, the column of the variable basic in row `i` is the `i`-th unit
    /// vector, with a zero in the objective row.
    pub fn first_non_canonical_row(&self, epsilon: F) -> Option<usize> {
        self.basis_indices.iter()
            .enumerate()
            .find(|&(row, &column)| {
                (0..self.matrix.nr_rows()).any(|i| {
                    let expected = if i == row { F::one() } else { F::zero() };
                    !is_close(self.matrix.get_value(i, column), expected, epsilon)
                })
            })
            .map(|(row, _)| row)
    }

    /// Number of constraint rows in the tableau, `m`.
    ///
    /// The objective row is not counted.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of variables in the problem, `n`.
    ///
    /// The right-hand side column is not counted.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }
}

impl<F: Float + Display> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Current State ===")?;
        let column_width = 10;
        let counter_width = 8;
        // Column counter
        write!(f, "{0:width$}", "", width = counter_width)?;
        write!(f, "|")?;
        for column_index in 0..self.nr_columns() {
            write!(f, "{0:^width$}", format!("x{}", column_index + 1), width = column_width)?;
        }
        write!(f, "|")?;
        writeln!(f, "{0:^width$}", "b", width = column_width)?;

        // Separator
        let separator = "-".repeat(counter_width + (1 + self.nr_columns()) * column_width + 2);
        writeln!(f, "{}", separator)?;

        // Row counter and row data
        for row_index in 0..self.matrix.nr_rows() {
            let label = if row_index < self.nr_rows() {
                format!("{}  ", row_index)
            } else {
                "cost  ".to_string()
            };
            write!(f, "{0:>width$}", label, width = counter_width)?;
            write!(f, "|")?;
            for column_index in 0..self.nr_columns() {
                let number = format!("{:.4}", self.matrix.get_value(row_index, column_index));
                write!(f, "{0:^width$}", number, width = column_width)?;
            }
            write!(f, "|")?;
            let number = format!("{:.4}", self.matrix.get_value(row_index, self.nr_columns()));
            writeln!(f, "{0:^width$}", number, width = column_width)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "{}", self.basis_indices.iter()
            .enumerate()
            .map(|(i, j)| format!("({}, x{})", i, j + 1))
            .join(", "))
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use approx::assert_abs_diff_eq;

    use crate::algorithm::simplex::tableau::Tableau;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::error::InputError;
    use crate::tests::problem_2;

    #[test]
    fn create() {
        let tableau = problem_2::tableau_form();
        assert_eq!(tableau.nr_rows(), 3);
        assert_eq!(tableau.nr_columns(), 5);
        assert_eq!(tableau.basis_indices(), &[2, 3, 4]);
        assert_eq!(tableau.non_basis_columns(), &BTreeSet::from([0, 1]));
        assert!(tableau.is_in_basis(2));
        assert!(!tableau.is_in_basis(0));
        assert_eq!(tableau.first_non_canonical_row(1e-10), None);
        assert_eq!(tableau.objective_row(), &[3_f64, 5_f64, 0_f64, 0_f64, 0_f64]);
        assert_eq!(tableau.objective_function_value(), 0_f64);
        assert_eq!(tableau.current_bfs(), vec![0_f64, 0_f64, 4_f64, 12_f64, 18_f64]);
    }

    #[test]
    fn reject_dimensions() {
        let matrix = DenseMatrix::from_data(problem_2::tableau_data()).unwrap();
        assert_eq!(
            Tableau::new(matrix.clone(), vec![2, 3, 4], 3, 4),
            Err(InputError::Dimensions { nr_rows: 4, nr_columns: 6, nr_constraints: 3, nr_variables: 4 }),
        );
        assert_eq!(
            Tableau::new(matrix, vec![2, 3, 4], 2, 5),
            Err(InputError::Dimensions { nr_rows: 4, nr_columns: 6, nr_constraints: 2, nr_variables: 5 }),
        );
        let matrix = DenseMatrix::from_data(vec![vec![1_f64, 1_f64], vec![0_f64, 0_f64]]).unwrap();
        assert_eq!(
            Tableau::new(matrix.clone(), vec![0], usize::MAX, 1),
            Err(InputError::Dimensions { nr_rows: 2, nr_columns: 2, nr_constraints: usize::MAX, nr_variables: 1 }),
        );
        assert_eq!(
            Tableau::new(matrix, vec![0], 1, usize::MAX),
            Err(InputError::Dimensions { nr_rows: 2, nr_columns: 2, nr_constraints: 1, nr_variables: usize::MAX }),
        );
        assert_eq!(
            Tableau::<f64>::from_data(vec![vec![1_f64, 0_f64], vec![1_f64]], vec![0]),
            Err(InputError::RaggedRow { row: 1, expected: 2, actual: 1 }),
        );
    }

    #[test]
    fn reject_basis() {
        assert_eq!(
            Tableau::from_data(problem_2::tableau_data(), vec![2, 3]),
            Err(InputError::BasisLength { expected: 3, actual: 2 }),
        );
        assert_eq!(
            Tableau::from_data(problem_2::tableau_data(), vec![2, 3, 5]),
            Err(InputError::BasisIndexOutOfRange { row: 2, variable: 5, nr_variables: 5 }),
        );
        assert_eq!(
            Tableau::from_data(problem_2::tableau_data(), vec![2, 3, 2]),
            Err(InputError::DuplicateBasisIndex { variable: 2, first_row: 0, second_row: 2 }),
        );
    }

    #[test]
    fn reject_values() {
        let mut data = problem_2::tableau_data();
        data[1][5] = -1_f64;
        assert_eq!(
            Tableau::from_data(data, vec![2, 3, 4]),
            Err(InputError::Infeasible { row: 1, value: -1_f64 }),
        );

        let mut data = problem_2::tableau_data();
        data[3][0] = f64::NAN;
        assert_eq!(
            Tableau::from_data(data, vec![2, 3, 4]),
            Err(InputError::NonFinite { row: 3, column: 0 }),
        );

        // The objective row's right-hand side may be negative
        let mut data = problem_2::tableau_data();
        data[3][5] = -10_f64;
        let tableau = Tableau::from_data(data, vec![2, 3, 4]).unwrap();
        assert_eq!(tableau.objective_function_value(), 10_f64);
    }

    #[test]
    fn find_pivot_row() {
        let tableau = problem_2::tableau_form();
        // Ratios 4 / 1 and 18 / 3
        assert_eq!(tableau.select_primal_pivot_row(0), Some(0));
        // Ratios 12 / 2 and 18 / 2
        assert_eq!(tableau.select_primal_pivot_row(1), Some(1));
        assert_eq!(tableau.select_primal_pivot_row(3), Some(1));

        // Only nonpositive coefficients
        let tableau = Tableau::from_data(
            vec![
                vec![1_f64, -1_f64, 0_f64, 1_f64],
                vec![0_f64, 0_f64, 1_f64, 2_f64],
                vec![1_f64, 2_f64, 0_f64, 0_f64],
            ],
            vec![0, 2],
        ).unwrap();
        assert_eq!(tableau.select_primal_pivot_row(1), None);
    }

    #[test]
    fn pivot_row_ties_lowest_index() {
        let tableau = Tableau::from_data(
            vec![
                vec![1_f64, 2_f64, 0_f64, 0_f64, 4_f64],
                vec![0_f64, 1_f64, 1_f64, 0_f64, 2_f64],
                vec![0_f64, 3_f64, 0_f64, 1_f64, 6_f64],
                vec![0_f64, 1_f64, 0_f64, 0_f64, 0_f64],
            ],
            vec![0, 2, 3],
        ).unwrap();
        assert_eq!(tableau.select_primal_pivot_row(1), Some(0));
    }

    #[test]
    fn bring_into_basis() {
        let mut tableau = problem_2::tableau_form();
        let leaving = tableau.bring_into_basis(1, 1);

        assert_eq!(leaving, 3);
        assert_eq!(tableau.basis_indices(), &[2, 1, 4]);
        assert_eq!(tableau.non_basis_columns(), &BTreeSet::from([0, 3]));
        assert!(tableau.is_in_basis(1));
        assert!(!tableau.is_in_basis(3));
        assert_eq!(tableau.matrix().column(1), vec![0_f64, 1_f64, 0_f64, 0_f64]);
        assert_eq!(tableau.first_non_canonical_row(1e-10), None);
        assert_abs_diff_eq!(tableau.objective_function_value(), 30_f64);
        assert_eq!(tableau.objective_row(), &[3_f64, 0_f64, 0_f64, -2.5_f64, 0_f64]);
        assert_eq!(tableau.current_bfs(), vec![0_f64, 6_f64, 4_f64, 0_f64, 6_f64]);
    }

    #[test]
    fn non_canonical() {
        let tableau = crate::tests::problem_1::tableau_form();
        // The column of x3 has a -3 in the first row
        assert_eq!(tableau.first_non_canonical_row(1e-10), Some(0));
    }

    #[test]
    fn display() {
        let tableau = Tableau::from_data(
            vec![vec![1_f64, 2_f64], vec![-1_f64, 0_f64]],
            vec![0],
        ).unwrap();
        let text = tableau.to_string();
        assert!(text.starts_with("=== Current State ===\n"));
        assert!(text.contains("cost"));
        assert!(text.contains("-1.0000"));
        assert!(text.ends_with("=== Basis Columns ===\n(0, x1)\n"));
    }
}
