//! # The simplex algorithm
//!
//! This module contains all data structures and logic specific to the primal simplex algorithm on
//! a dense tableau. The algorithm is implemented as described in chapter 2 of Combinatorial
//! Optimization, a book by Christos H. Papadimitriou and Kenneth Steiglitz, starting from a basic
//! feasible solution that is provided by the caller.
use std::fmt::Display;

use num_traits::Float;

use crate::algorithm::simplex::logic::{Report, Solver};
use crate::algorithm::simplex::settings::Settings;
use crate::algorithm::simplex::tableau::Tableau;
use crate::error::SolveError;

pub mod logic;
pub mod settings;
pub mod strategy;
pub mod tableau;
pub mod trace;

/// Solve a linear program from a feasible basis, using Dantzig's pivot rule.
///
/// # Arguments
///
/// * `tableau`: Tableau with a feasible basis that is in canonical form.
/// * `settings`: Tolerance, iteration limit and whether to record a trace.
///
/// # Return value
///
/// The result with the number of iterations and a trace, or an error if a pivot element was
/// (close to) zero or the iteration limit was reached.
pub fn solve<F: Float + Display>(
    tableau: Tableau<F>,
    settings: Settings<F>,
) -> Result<Report<F>, SolveError> {
    Solver::new(tableau, settings).solve()
}
