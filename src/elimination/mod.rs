//! Elimination-derived queries: rank, determinant and inverse.
//!
//! All three routines reduce a private copy of the matrix and share the row
//! operations in [`rowops`]. They differ in how a zero pivot is replaced:
//! - rank and inverse add a lower row with a nonzero entry into the pivot row;
//! - determinant swaps the rows and does not flip the sign of the result.
//!
//! Pivots are tested against `EliminationOptions::pivot_tol`, which defaults to
//! an exact comparison with zero.

use crate::config::EliminationOptions;
use crate::core::traits::MatShape;
use crate::error::MatrixError;
use crate::matrix::Matrix;

pub mod determinant;
pub mod inverse;
pub mod rank;
pub mod rowops;

/// Side length of a square source, or `NotSquare`.
pub(crate) fn check_square<M: MatShape + ?Sized>(m: &M) -> Result<usize, MatrixError> {
    let (rows, columns) = m.shape();
    if rows != columns {
        return Err(MatrixError::NotSquare { rows, columns });
    }
    Ok(rows)
}

impl Matrix {
    /// Rank by row-echelon reduction with exact zero pivots.
    pub fn rank(&self) -> usize {
        rank::rank(self, &EliminationOptions::default())
    }

    pub fn rank_with(&self, opts: &EliminationOptions) -> usize {
        rank::rank(self, opts)
    }

    /// Determinant of a square matrix. Singular input yields `0.0`, not an error.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        determinant::determinant(self, &EliminationOptions::default())
    }

    pub fn determinant_with(&self, opts: &EliminationOptions) -> Result<f64, MatrixError> {
        determinant::determinant(self, opts)
    }

    /// Inverse of a square matrix by augmented Gauss-Jordan elimination.
    ///
    /// Fails with [`MatrixError::Singular`] once a column without a usable
    /// pivot is reached; there is no up-front determinant check.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        inverse::inverse(self, &EliminationOptions::default())
    }

    pub fn inverse_with(&self, opts: &EliminationOptions) -> Result<Matrix, MatrixError> {
        inverse::inverse(self, opts)
    }
}
