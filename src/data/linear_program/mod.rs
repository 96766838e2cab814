//! # Representing linear programs
//!
//! Linear programs are handed to the solver as a tableau, see `algorithm::simplex::tableau`. This
//! module holds what comes out.
pub mod solution;
