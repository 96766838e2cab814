//! # Iteration trace
//!
//! A record of the decisions made in every iteration, for inspection after the solve. The trace
//! plays no role in the algorithm itself.
use crate::data::linear_algebra::matrix::DenseMatrix;

/// The state of the tableau at the start of an iteration, and what was decided based on it.
#[derive(Clone, PartialEq, Debug)]
pub struct Snapshot<F> {
    /// Number of pivots performed before this snapshot was taken.
    pub iteration: usize,
    /// Copy of the tableau before the decision.
    pub tableau: DenseMatrix<F>,
    /// Basis before the decision.
    pub basis_indices: Vec<usize>,
    /// Variable selected to enter the basis, `None` if the tableau was optimal.
    pub entering: Option<usize>,
    /// Variable that left the basis, `None` if the tableau was optimal or unbounded.
    pub leaving: Option<usize>,
    /// Row that was pivoted on.
    pub pivot_row: Option<usize>,
}

impl<F> Snapshot<F> {
    /// Whether a pivot was performed in this iteration.
    pub fn is_pivot(&self) -> bool {
        self.leaving.is_some()
    }
}
