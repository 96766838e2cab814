//! # High-level simplex logic
//!
//! The iteration of the primal simplex method as a state machine. The details of the individual
//! steps are hidden away mostly in the `Tableau` type and the `PivotRule` strategy.
use std::fmt::Display;

use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::settings::Settings;
use crate::algorithm::simplex::strategy::pivot_rule::{Dantzig, PivotRule};
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::simplex::trace::Snapshot;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::float::{is_close_to_zero, to_f64_lossy};
use crate::error::SolveError;

/// Where the solver is in the process.
///
/// Starts at `Initialized`, moves to `Iterating` at the first step and ends in one of the two
/// terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No iteration has been performed yet.
    Initialized,
    /// At least one iteration has been performed, but no terminal state was reached yet.
    Iterating,
    /// No coefficient in the objective row is positive.
    Optimal,
    /// The objective can be increased without limit by increasing the `entering_column` variable.
    Unbounded {
        /// Variable selected to enter the basis when no row limited it.
        entering_column: usize,
    },
}

impl State {
    /// Whether no further iterations will change the state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Optimal | State::Unbounded { .. })
    }
}

/// Everything that came out of a completed solve.
#[derive(Clone, PartialEq, Debug)]
pub struct Report<F> {
    /// The optimal solution, or the direction in which the problem is unbounded.
    pub result: OptimizationResult<F>,
    /// Number of pivots performed.
    pub iterations: usize,
    /// A snapshot for every iteration, including the final one in which the terminal state was
    /// detected. Empty if tracing was disabled in the settings.
    pub trace: Vec<Snapshot<F>>,
}

/// Primal simplex method on a tableau with a feasible starting basis.
///
/// Every step tests for optimality, selects an entering column with the pivot rule, selects the
/// leaving row with the ratio test and pivots.
///
/// # Note
///
/// There is no iteration limit unless one is configured in the `Settings`. The default pivot rule
/// can cycle on degenerate problems.
pub struct Solver<F, PR = Dantzig> {
    tableau: Tableau<F>,
    rule: PR,
    settings: Settings<F>,
    state: State,
    iteration: usize,
    trace: Vec<Snapshot<F>>,
}

impl<F: Float + Display> Solver<F, Dantzig> {
    /// Create a solver that uses Dantzig's pivot rule.
    pub fn new(tableau: Tableau<F>, settings: Settings<F>) -> Self {
        Self::with_pivot_rule(tableau, settings)
    }
}

impl<F, PR> Solver<F, PR>
where
    F: Float + Display,
    PR: PivotRule<F>,
{
    /// Create a solver with a specific pivot rule.
    pub fn with_pivot_rule(tableau: Tableau<F>, settings: Settings<F>) -> Self {
        let canonical_check = settings.validate().ok()
            .and_then(|()| tableau.first_non_canonical_row(settings.epsilon));
        if let Some(row) = canonical_check {
            warn!(
                "Column of basic variable x{} in row {} is not a unit column, the results may be meaningless",
                tableau.basis_indices()[row] + 1,
                row,
            );
        }
        debug!(
            "Initialized solver: {} constraints, {} variables, objective value {}",
            tableau.nr_rows(),
            tableau.nr_columns(),
            tableau.objective_function_value(),
        );

        let rule = PR::new(&tableau);
        Self {
            tableau,
            rule,
            settings,
            state: State::Initialized,
            iteration: 0,
            trace: Vec::new(),
        }
    }

    /// Perform a single iteration.
    ///
    /// If the solver is already in a terminal state, nothing happens.
    ///
    /// # Return value
    ///
    /// The state after the iteration, or an error if the settings are invalid, the pivot element
    /// is too small or the iteration limit is reached. In case of an error, the tableau is left
    /// unchanged.
    pub fn step(&mut self) -> Result<State, SolveError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        if self.state == State::Initialized {
            self.settings.validate()?;
        }
        self.state = State::Iterating;

        trace!("Iteration {}\n{}", self.iteration, self.tableau);
        let mut snapshot = self.settings.record_trace.then(|| Snapshot {
            iteration: self.iteration,
            tableau: self.tableau.matrix().clone(),
            basis_indices: self.tableau.basis_indices().to_vec(),
            entering: None,
            leaving: None,
            pivot_row: None,
        });

        let outcome = self.iterate(snapshot.as_mut());
        self.trace.extend(snapshot);

        outcome
    }

    fn iterate(&mut self, mut snapshot: Option<&mut Snapshot<F>>) -> Result<State, SolveError> {
        let Some((column, cost)) = self.rule.select_primal_pivot_column(&self.tableau) else {
            debug!(
                "Optimal after {} iterations, objective value {}",
                self.iteration,
                self.tableau.objective_function_value(),
            );
            self.state = State::Optimal;
            return Ok(self.state);
        };

        if let Some(snapshot) = snapshot.as_mut() {
            snapshot.entering = Some(column);
        }

        let Some(row) = self.tableau.select_primal_pivot_row(column) else {
            debug!("Unbounded in iteration {}, along x{}", self.iteration, column + 1);
            self.state = State::Unbounded { entering_column: column };
            return Ok(self.state);
        };

        if let Some(limit) = self.settings.iteration_limit {
            if self.iteration >= limit {
                return Err(SolveError::IterationLimit { limit });
            }
        }

        let value = self.tableau.pivot_element(row, column);
        if is_close_to_zero(value, self.settings.epsilon) {
            return Err(SolveError::DegeneratePivot {
                row,
                column,
                value: to_f64_lossy(value),
                iteration: self.iteration,
            });
        }

        let leaving = self.tableau.bring_into_basis(column, row);
        debug!(
            "Iteration {}: x{} (cost {}) enters in row {}, x{} leaves, objective value {}",
            self.iteration,
            column + 1,
            cost,
            row,
            leaving + 1,
            self.tableau.objective_function_value(),
        );

        if let Some(snapshot) = snapshot {
            snapshot.leaving = Some(leaving);
            snapshot.pivot_row = Some(row);
        }
        self.iteration += 1;

        Ok(self.state)
    }

    /// Iterate until a terminal state is reached.
    pub fn solve(mut self) -> Result<Report<F>, SolveError> {
        let result = loop {
            self.step()?;
            if let Some(result) = self.result() {
                break result;
            }
        };

        Ok(Report {
            result,
            iterations: self.iteration,
            trace: self.trace,
        })
    }

    /// The result, if a terminal state has been reached.
    pub fn result(&self) -> Option<OptimizationResult<F>> {
        match self.state {
            State::Optimal => Some(OptimizationResult::FiniteOptimum(Solution::new(
                self.tableau.objective_function_value(),
                self.tableau.current_bfs(),
            ))),
            State::Unbounded { entering_column } => {
                Some(OptimizationResult::Unbounded { entering_column })
            },
            State::Initialized | State::Iterating => None,
        }
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of pivots performed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current tableau.
    pub fn tableau(&self) -> &Tableau<F> {
        &self.tableau
    }

    /// Snapshots of all iterations so far.
    pub fn trace(&self) -> &[Snapshot<F>] {
        &self.trace
    }

    /// Take the tableau out of the solver, for example to inspect it after an error.
    pub fn into_tableau(self) -> Tableau<F> {
        self.tableau
    }
}
