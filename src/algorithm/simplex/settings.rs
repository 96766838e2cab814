//! Configuration of the solver.
use num_traits::Float;

use crate::data::number_types::float::{default_epsilon, to_f64_lossy};
use crate::error::InputError;

/// Settings that control a single solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings<F> {
    /// Pivot elements with an absolute value at most this large are rejected.
    pub epsilon: F,
    /// Maximum number of iterations before giving up.
    ///
    /// The simplex method with Dantzig's rule may cycle on degenerate problems. Without a limit,
    /// the solver then doesn't terminate.
    pub iteration_limit: Option<usize>,
    /// Whether to keep a copy of the tableau for every iteration.
    pub record_trace: bool,
}

impl<F: Float> Default for Settings<F> {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            iteration_limit: None,
            record_trace: true,
        }
    }
}

impl<F: Float> Settings<F> {
    /// Use a different pivot tolerance.
    ///
    /// The value is checked before the first iteration, see `Settings::validate`.
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Stop with an error after `limit` iterations.
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Enable or disable keeping a snapshot of every iteration.
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// Check the values that can't be enforced by their types.
    ///
    /// # Return value
    ///
    /// An error if the pivot tolerance is negative, infinite or NaN.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.epsilon.is_finite() && self.epsilon >= F::zero() {
            Ok(())
        } else {
            Err(InputError::InvalidEpsilon { value: to_f64_lossy(self.epsilon) })
        }
    }
}
