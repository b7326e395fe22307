//! Dense row-major matrix of `f64`.
//!
//! `Matrix` owns its grid outright. Every operation here returns a freshly
//! allocated matrix and leaves its receiver and arguments untouched; the
//! elimination-derived queries (`rank`, `determinant`, `inverse`) live in
//! [`crate::elimination`] and follow the same rule.

use std::ops::Index;

use rand::Rng;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::MatrixError;

/// Dense `rows × columns` matrix of `f64`, stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Build a `rows × columns` matrix, filling it row-major from `values`.
    ///
    /// Entries past the end of `values` stay zero. More values than the grid
    /// holds is an error.
    ///
    /// ```
    /// use mathbeta::Matrix;
    /// let m = Matrix::new(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
    /// assert_eq!(m[(1, 0)], 2.0);
    /// ```
    pub fn new(rows: usize, columns: usize, values: &[f64]) -> Result<Self, MatrixError> {
        if values.len() > rows.saturating_mul(columns) {
            return Err(MatrixError::TooManyValues {
                rows,
                columns,
                given: values.len(),
            });
        }
        let mut m = Self::filled(rows, columns, 0.0);
        for (idx, &v) in values.iter().enumerate() {
            m.data[idx / columns][idx % columns] = v;
        }
        Ok(m)
    }

    /// Build from nested rows. Every row must have the length of the first.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let rows = data.len();
        let columns = data.first().map_or(0, Vec::len);
        if let Some((row, r)) = data.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(MatrixError::RaggedRow {
                row,
                expected: columns,
                found: r.len(),
            });
        }
        Ok(Self { rows, columns, data })
    }

    /// Copy any dense source that exposes its shape and entries.
    pub fn from_entries<M>(source: &M) -> Self
    where
        M: MatShape + MatrixGet<f64> + ?Sized,
    {
        let (rows, columns) = source.shape();
        Self::from_fn(rows, columns, |i, j| MatrixGet::get(source, i, j))
    }

    pub(crate) fn from_fn(rows: usize, columns: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let data = (0..rows)
            .map(|i| (0..columns).map(|j| f(i, j)).collect())
            .collect();
        Self { rows, columns, data }
    }

    fn filled(rows: usize, columns: usize, value: f64) -> Self {
        Self {
            rows,
            columns,
            data: vec![vec![value; columns]; rows],
        }
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    pub fn ones(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, 1.0)
    }

    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, 0.0)
    }

    /// Uniform `[0, 1)` entries from the thread-local generator.
    pub fn random(rows: usize, columns: usize) -> Self {
        Self::random_with(rows, columns, &mut rand::thread_rng())
    }

    /// Uniform `[0, 1)` entries from `rng`, filled row-major.
    pub fn random_with<R: Rng>(rows: usize, columns: usize, rng: &mut R) -> Self {
        let data = (0..rows)
            .map(|_| (0..columns).map(|_| rng.r#gen::<f64>()).collect())
            .collect();
        Self { rows, columns, data }
    }

    /// Deep copy; the result shares no storage with `self`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Entry at `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get(i).and_then(|r| r.get(j)).copied()
    }

    /// Row `i`, or `None` when out of range.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.data.get(i).map(Vec::as_slice)
    }

    /// All rows, top to bottom.
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter().flatten()
    }

    /// Consume the matrix and hand back its rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference `self - other`.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    fn zip_with(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
            .collect();
        Ok(Matrix {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }

    /// Matrix product `self · other`.
    ///
    /// Each entry is the dot product of a row of `self` and a column of
    /// `other`, summed in ascending index order. With the `rayon` feature the
    /// output rows are computed in parallel; results are identical either way.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.columns != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        #[cfg(feature = "rayon")]
        let data: Vec<Vec<f64>> = {
            use rayon::prelude::*;
            self.data.par_iter().map(|row| product_row(row, other)).collect()
        };
        #[cfg(not(feature = "rayon"))]
        let data: Vec<Vec<f64>> = self.data.iter().map(|row| product_row(row, other)).collect();
        Ok(Matrix {
            rows: self.rows,
            columns: other.columns,
            data,
        })
    }

    /// New `columns × rows` matrix with `t[i][j] = self[j][i]`.
    pub fn transpose(&self) -> Matrix {
        Self::from_fn(self.columns, self.rows, |i, j| self.data[j][i])
    }

    /// Mutable grid for the elimination routines, which only ever touch copies.
    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.data
    }
}

fn product_row(row: &[f64], other: &Matrix) -> Vec<f64> {
    (0..other.columns)
        .map(|j| {
            row.iter()
                .zip(&other.data)
                .fold(0.0, |acc, (&a, b)| acc + a * b[j])
        })
        .collect()
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}

impl MatShape for Matrix {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.columns
    }
}

impl MatrixGet<f64> for Matrix {
    fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i][j]
    }
}
