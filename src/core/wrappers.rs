//! Interop with `faer` dense matrices.
//!
//! `faer::Mat<f64>` is the dense storage type used across the numeric Rust
//! ecosystem. These impls let a [`Matrix`] be handed to faer-based code and
//! brought back, entry for entry, without any rounding.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use faer::Mat;

use crate::core::traits::{MatShape, MatrixGet};
use crate::matrix::Matrix;

impl<T: Copy> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        Mat::nrows(self)
    }
    fn ncols(&self) -> usize {
        Mat::ncols(self)
    }
}

/// Copy a `Matrix` into faer's column-major storage.
impl From<&Matrix> for Mat<f64> {
    fn from(m: &Matrix) -> Self {
        Mat::from_fn(m.rows(), m.columns(), |i, j| m[(i, j)])
    }
}

impl From<&Mat<f64>> for Matrix {
    fn from(a: &Mat<f64>) -> Self {
        Matrix::from_entries(a)
    }
}
