//! # Representation of optimal solutions
//!
//! Once the solver reaches an optimal basis, the basic feasible solution is read from the tableau.
//! Variables are identified by their column index in the tableau.
use std::fmt::{Display, Formatter, Result as FormatResult};

use num_traits::Float;

/// Values for all variables of a linear program together with the objective function value.
#[derive(Clone, PartialEq, Debug)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    objective_value: F,
    /// A value for each variable, indexed by column.
    solution_values: Vec<F>,
}

impl<F: Float> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, solution_values: Vec<F>) -> Self {
        Self { objective_value, solution_values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Values of all variables, indexed by column.
    pub fn values(&self) -> &[F] {
        &self.solution_values
    }

    /// Value of variable `j`.
    pub fn value(&self, j: usize) -> F {
        debug_assert!(j < self.solution_values.len());

        self.solution_values[j]
    }

    /// Number of variables.
    pub fn nr_variables(&self) -> usize {
        self.solution_values.len()
    }
}

/// Variables are written with a 1-based name, as in `x1 = 0.5`.
impl<F: Float + Display> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        for (j, value) in self.solution_values.iter().enumerate() {
            writeln!(f, "x{} = {}", j + 1, value)?;
        }
        write!(f, "Optimal value of z = {}", self.objective_value)
    }
}
