//! # A tableau simplex solver
//!
//! Linear programs in equality form are solved using the primal Simplex Method on a dense tableau,
//! as described in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth
//! Steiglitz. The caller provides a basic feasible solution to start from.
//!
//! ```
//! use relp_tableau::algorithm::OptimizationResult;
//! use relp_tableau::algorithm::simplex::settings::Settings;
//! use relp_tableau::algorithm::simplex::solve;
//! use relp_tableau::algorithm::simplex::tableau::Tableau;
//!
//! // maximize 3x1 + 2x2 subject to x1 + x2 + s = 4
//! let tableau = Tableau::from_data(
//!     vec![
//!         vec![1_f64, 1_f64, 1_f64, 4_f64],
//!         vec![3_f64, 2_f64, 0_f64, 0_f64],
//!     ],
//!     vec![2],
//! ).unwrap();
//!
//! let report = solve(tableau, Settings::default()).unwrap();
//! match report.result {
//!     OptimizationResult::FiniteOptimum(solution) => {
//!         assert_eq!(solution.values(), &[4_f64, 0_f64, 0_f64]);
//!         assert_eq!(solution.objective_value(), 12_f64);
//!     },
//!     OptimizationResult::Unbounded { .. } => unreachable!(),
//! }
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
