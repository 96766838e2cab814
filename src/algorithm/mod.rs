//! # Algorithms
use crate::data::linear_program::solution::Solution;

pub mod simplex;

/// A linear program with a feasible starting basis is either unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[derive(Clone, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    /// The optimal solution with its objective value.
    FiniteOptimum(Solution<F>),
    /// The objective can be increased without limit.
    Unbounded {
        /// Variable that could be increased indefinitely when this was detected.
        entering_column: usize,
    },
}
