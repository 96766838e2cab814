//! # Number types
//!
//! All data structures and algorithms in this crate are generic over the floating point type that
//! they calculate with, through `num_traits::Float`. This module contains the helpers to deal
//! with the finite precision of those types.
pub mod float;
