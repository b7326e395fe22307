//! Utilities shared across the crate.

pub mod approx_eq;
