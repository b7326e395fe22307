//! Rank by reduction to row-echelon form.

use log::{debug, trace};

use super::rowops::{add_row_into, axpy_row, find_pivot_row, is_negligible, normalize_row, row_is_zero};
use crate::config::EliminationOptions;
use crate::matrix::Matrix;

/// Number of non-zero rows left after reducing a copy of `m` to row-echelon form.
///
/// The pivot cursor `k` walks the columns while `i` walks the rows. A zero
/// pivot is cleared by adding the first lower row with a nonzero entry in
/// column `k`; if there is none, `k` moves right and row `i` is retried.
/// Tall matrices are reduced through their transpose.
pub fn rank(m: &Matrix, opts: &EliminationOptions) -> usize {
    if m.rows() > m.columns() {
        return rank(&m.transpose(), opts);
    }
    let tol = opts.pivot_tol;
    let (rows, columns) = m.shape();
    let mut work = m.copy();
    let grid = work.rows_mut();

    let (mut i, mut k) = (0, 0);
    while i < rows && k < columns {
        if is_negligible(grid[i][k], tol) {
            match find_pivot_row(grid, i, k, tol) {
                Some(j) => {
                    trace!("rank: zero pivot at ({i}, {k}), adding row {j}");
                    add_row_into(grid, i, j, k);
                }
                None => {
                    k += 1;
                    continue;
                }
            }
        }
        let p = grid[i][k];
        normalize_row(&mut grid[i], k, p);
        for j in i + 1..rows {
            let f = -grid[j][k];
            grid[j][k] = 0.0;
            axpy_row(grid, j, i, f, k + 1);
        }
        i += 1;
        k += 1;
    }

    let r = grid.iter().filter(|row| !row_is_zero(row, tol)).count();
    if r < rows {
        debug!("rank: {rows}x{columns} matrix is rank-deficient (rank {r})");
    }
    r
}
