//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent the simplex tableau.
pub mod matrix;
