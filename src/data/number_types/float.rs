//! # Floating point numbers
//!
//! The tableau is stored in a floating point type from the start, so that no integer division can
//! sneak into the elimination steps. Correctness guarantees are harder to give than for exact
//! arithmetic due to (accumulating) rounding errors, which is why comparisons against zero that
//! decide whether a value may be used as a divisor go through a tolerance.
use num_traits::Float;

/// Numerical error assumed to be acceptable for a single value in the tableau.
///
/// On well scaled problems, values that are this close to zero are almost certainly the result of
/// cancellation rather than a true nonzero.
pub fn default_epsilon<F: Float>() -> F {
    // About 2.2e-11 for f64 and about 1.2e-2 for f32.
    F::from(1e5).unwrap_or_else(F::one) * F::epsilon()
}

/// Whether a value is within `epsilon` of zero.
///
/// Never true for a negative or NaN `epsilon`.
pub fn is_close_to_zero<F: Float>(value: F, epsilon: F) -> bool {
    value.abs() <= epsilon
}

/// Whether two values are within `epsilon` of each other.
pub fn is_close<F: Float>(left: F, right: F, epsilon: F) -> bool {
    is_close_to_zero(left - right, epsilon)
}

/// Lossy conversion to `f64` for reporting purposes, such as error messages.
pub fn to_f64_lossy<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
