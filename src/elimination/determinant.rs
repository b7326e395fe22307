//! Determinant by Gaussian elimination to upper-triangular form.

use log::{debug, trace};

use super::check_square;
use super::rowops::{axpy_row, find_pivot_row, is_negligible, swap_rows_from};
use crate::config::EliminationOptions;
use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Product of the diagonal after eliminating below every pivot of a copy of `m`.
///
/// A zero pivot is replaced by swapping in the first lower row with a nonzero
/// entry in that column. Swaps do not negate the result. When no such row
/// exists the matrix is singular and `0.0` is returned immediately.
pub fn determinant(m: &Matrix, opts: &EliminationOptions) -> Result<f64, MatrixError> {
    let n = check_square(m)?;
    if n == 1 {
        return Ok(m[(0, 0)]);
    }
    let tol = opts.pivot_tol;
    let mut work = m.copy();
    let grid = work.rows_mut();

    for i in 0..n {
        if is_negligible(grid[i][i], tol) {
            match find_pivot_row(grid, i, i, tol) {
                Some(j) => {
                    trace!("determinant: zero pivot at row {i}, swapping with row {j}");
                    swap_rows_from(grid, i, j, i);
                }
                None => {
                    debug!("determinant: no pivot in column {i}, matrix is singular");
                    return Ok(0.0);
                }
            }
        }
        let p = grid[i][i];
        for j in i + 1..n {
            let f = -grid[j][i] / p;
            grid[j][i] = 0.0;
            axpy_row(grid, j, i, f, i + 1);
        }
    }

    Ok(grid.iter().enumerate().map(|(i, row)| row[i]).product())
}
