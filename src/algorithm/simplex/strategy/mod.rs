//! # Strategies for the simplex method
//!
//! Decisions that the simplex method leaves open, such as which of the improving columns should
//! enter the basis, are made by a strategy. The strategy is chosen with a type parameter.
pub mod pivot_rule;
