//! # Pivot rules
//!
//! Strategies for selecting the variable that enters the basis.
//!
//! Once the column has been selected, the row follows from the ratio test. That decision is made
//! independent of the strategy, see `Tableau::select_primal_pivot_row`.
use num_traits::Float;

use crate::algorithm::simplex::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new(tableau: &Tableau<F>) -> Self;

    /// Column selection rule for the primal simplex method.
    ///
    /// # Return value
    ///
    /// The index of the entering variable together with its coefficient in the objective row, or
    /// `None` if no column improves the objective, in which case the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Pivot on the column with the largest positive coefficient in the objective row.
///
/// The columns are scanned from left to right and the first maximum is kept, such that ties are
/// broken in favor of the lowest index. Note that this rule does not prevent cycling on
/// degenerate problems.
pub struct Dantzig;
impl<F: Float> PivotRule<F> for Dantzig {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let mut largest: Option<(usize, F)> = None;
        for (j, &cost) in tableau.objective_row().iter().enumerate() {
            if cost > F::zero() {
                match largest {
                    Some((_, existing_cost)) if cost <= existing_cost => {},
                    _ => largest = Some((j, cost)),
                }
            }
        }

        largest
    }
}
