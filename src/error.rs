//! # Error reporting
//!
//! Errors are split in two levels. An `InputError` describes a problem with the data handed to
//! the solver, and is always detected before the first pivot. A `SolveError` is what the solver
//! returns; it wraps the `InputError` or describes a condition encountered while iterating.
//!
//! Note that an unbounded linear program is not an error: it is a regular outcome, see
//! `OptimizationResult`.
use thiserror::Error;

/// The data describing the problem is inconsistent.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A matrix needs at least one row and one column.
    #[error("matrix has no rows or no columns")]
    Empty,
    /// Not all rows of the matrix have the same length.
    #[error("row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The matrix doesn't have `nr_constraints + 1` rows and `nr_variables + 1` columns.
    #[error(
        "tableau is {nr_rows} x {nr_columns}, expected a row per constraint ({nr_constraints}) \
        and a column per variable ({nr_variables}), each plus one"
    )]
    Dimensions {
        nr_rows: usize,
        nr_columns: usize,
        nr_constraints: usize,
        nr_variables: usize,
    },
    /// There should be exactly one basic variable per constraint row.
    #[error("expected {expected} basis indices, one for each constraint, got {actual}")]
    BasisLength {
        expected: usize,
        actual: usize,
    },
    /// A basis index doesn't refer to a variable.
    #[error("basic variable {variable} of row {row} is out of range, there are {nr_variables} variables")]
    BasisIndexOutOfRange {
        row: usize,
        variable: usize,
        nr_variables: usize,
    },
    /// A variable can be basic in at most one row.
    #[error("variable {variable} is basic in both row {first_row} and row {second_row}")]
    DuplicateBasisIndex {
        variable: usize,
        first_row: usize,
        second_row: usize,
    },
    /// Infinite or NaN values can't be pivoted on.
    #[error("value at row {row}, column {column} is not finite")]
    NonFinite {
        row: usize,
        column: usize,
    },
    /// The initial basis should be feasible: no phase one is performed.
    #[error("initial basis is infeasible, row {row} has right-hand side {value}")]
    Infeasible {
        row: usize,
        value: f64,
    },
    /// The pivot tolerance should be a finite, nonnegative number.
    #[error("pivot tolerance {value} is not a finite, nonnegative number")]
    InvalidEpsilon {
        value: f64,
    },
}

/// Reasons the solver stopped without reaching a terminal state.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The problem was rejected before the first iteration.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// The pivot element is too close to zero to divide by.
    ///
    /// No other row is selected instead; the caller may retry with a different tolerance or
    /// pivot rule.
    #[error(
        "pivot element {value} at row {row}, column {column} is too close to zero \
        in iteration {iteration}"
    )]
    DegeneratePivot {
        row: usize,
        column: usize,
        value: f64,
        iteration: usize,
    },
    /// The configured maximum number of iterations was reached.
    #[error("no terminal state reached within {limit} iterations")]
    IterationLimit {
        limit: usize,
    },
}

#[cfg(test)]
mod test {
    use crate::error::{InputError, SolveError};

    #[test]
    fn messages() {
        let error = InputError::Dimensions {
            nr_rows: 3,
            nr_columns: 4,
            nr_constraints: 3,
            nr_variables: 3,
        };
        assert_eq!(
            error.to_string(),
            "tableau is 3 x 4, expected a row per constraint (3) and a column per variable (3), each plus one",
        );

        let error: SolveError = InputError::BasisLength { expected: 3, actual: 2 }.into();
        assert_eq!(
            error.to_string(),
            "invalid input: expected 3 basis indices, one for each constraint, got 2",
        );

        let error = SolveError::DegeneratePivot { row: 1, column: 2, value: 1e-14, iteration: 5 };
        assert_eq!(
            error.to_string(),
            "pivot element 0.00000000000001 at row 1, column 2 is too close to zero in iteration 5",
        );

        let error = InputError::InvalidEpsilon { value: -1_f64 };
        assert_eq!(error.to_string(), "pivot tolerance -1 is not a finite, nonnegative number");
    }
}
