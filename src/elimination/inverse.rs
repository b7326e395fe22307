//! Inverse by augmented Gauss-Jordan elimination.
//!
//! The working copy and an identity accumulator receive the same row
//! operations. The forward pass leaves the copy unit upper-triangular; the
//! backward pass clears everything above the diagonal, after which the
//! accumulator holds the inverse. Operations on the copy start at the pivot
//! column, operations on the accumulator always span the full row.

use log::{debug, trace};

use super::check_square;
use super::rowops::{add_row_into, axpy_row, find_pivot_row, is_negligible, normalize_row};
use crate::config::EliminationOptions;
use crate::error::MatrixError;
use crate::matrix::Matrix;

pub fn inverse(m: &Matrix, opts: &EliminationOptions) -> Result<Matrix, MatrixError> {
    let n = check_square(m)?;
    let tol = opts.pivot_tol;
    let mut work = m.copy();
    let mut acc = Matrix::identity(n);
    let a = work.rows_mut();
    let e = acc.rows_mut();

    // forward: zero below the diagonal, unit diagonal
    for i in 0..n {
        if is_negligible(a[i][i], tol) {
            match find_pivot_row(a, i, i, tol) {
                Some(j) => {
                    trace!("inverse: zero pivot at row {i}, adding row {j}");
                    add_row_into(a, i, j, i);
                    add_row_into(e, i, j, 0);
                }
                None => {
                    debug!("inverse: no pivot in column {i}, matrix is singular");
                    return Err(MatrixError::Singular { column: i });
                }
            }
        }
        let p = a[i][i];
        normalize_row(&mut a[i], i, p);
        normalize_row(&mut e[i], 0, p);
        for j in i + 1..n {
            let f = -a[j][i];
            axpy_row(a, j, i, f, i);
            axpy_row(e, j, i, f, 0);
        }
    }

    // backward: zero above the diagonal
    for j in (1..n).rev() {
        for i in (0..j).rev() {
            let f = -a[i][j];
            a[i][j] = 0.0;
            axpy_row(e, i, j, f, 0);
        }
    }

    Ok(acc)
}
