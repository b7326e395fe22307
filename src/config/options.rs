//! Options for the elimination routines.
//!
//! This module provides the `EliminationOptions` struct, which is passed to
//! `Matrix::rank_with`, `Matrix::determinant_with` and `Matrix::inverse_with`.
//! The default options reproduce the exact-zero pivot test used by
//! `rank`, `determinant` and `inverse`.

use crate::error::MatrixError;

/// Elimination parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliminationOptions {
    /// A pivot candidate `x` is treated as zero when `|x| <= pivot_tol`.
    /// `0.0` means exact comparison against zero.
    pub pivot_tol: f64,
}

impl EliminationOptions {
    /// Options with the given pivot tolerance.
    pub fn new(pivot_tol: f64) -> Result<Self, MatrixError> {
        Self::default().with_pivot_tol(pivot_tol)
    }

    pub fn with_pivot_tol(mut self, pivot_tol: f64) -> Result<Self, MatrixError> {
        if !pivot_tol.is_finite() || pivot_tol < 0.0 {
            return Err(MatrixError::InvalidTolerance(pivot_tol));
        }
        self.pivot_tol = pivot_tol;
        Ok(self)
    }

    /// True when the options reproduce the exact-zero pivot test.
    pub fn is_exact(&self) -> bool {
        self.pivot_tol == 0.0
    }
}

impl Default for EliminationOptions {
    fn default() -> Self {
        Self { pivot_tol: 0.0 }
    }
}
