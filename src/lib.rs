//! mathbeta: dense matrices and Gauss-Jordan row reduction
//!
//! This crate provides a double-precision dense `Matrix` value type with
//! construction, elementwise arithmetic, transpose, and the elimination-derived
//! queries rank, determinant and inverse. Every operation returns a new matrix;
//! receivers and arguments are never mutated.
//!
//! ```
//! use mathbeta::{Matrix, MatrixError};
//!
//! let m = Matrix::new(2, 2, &[4.0, 7.0, 2.0, 6.0])?;
//! assert_eq!(m.determinant()?, 10.0);
//! let id = m.multiply(&m.inverse()?)?;
//! assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
//! # Ok::<(), MatrixError>(())
//! ```

pub mod config;
pub mod core;
pub mod elimination;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-exports for convenience
pub use crate::config::EliminationOptions;
pub use crate::core::traits::{MatShape, MatrixGet};
pub use crate::error::MatrixError;
pub use crate::matrix::{MatProperties, Matrix};
