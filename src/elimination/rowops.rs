//! Row operations shared by the elimination routines.
//!
//! Each helper works on whole rows of a row-major grid and only touches
//! columns `from..`; callers pass the pivot column so the zeros already
//! produced to its left are never recomputed.

use num_traits::Float;

/// Pivot test: `x` counts as zero when `|x| <= tol`. With `tol == 0` this is
/// exactly `x == 0`.
#[inline]
pub fn is_negligible<T: Float>(x: T, tol: T) -> bool {
    x.abs() <= tol
}

/// First row `j > i` whose entry in column `k` is not negligible.
pub fn find_pivot_row<T: Float>(grid: &[Vec<T>], i: usize, k: usize, tol: T) -> Option<usize> {
    (i + 1..grid.len()).find(|&j| !is_negligible(grid[j][k], tol))
}

/// `grid[dst][from..] += grid[src][from..]`, with `src > dst`.
pub fn add_row_into<T: Float>(grid: &mut [Vec<T>], dst: usize, src: usize, from: usize) {
    debug_assert!(src > dst);
    let (head, tail) = grid.split_at_mut(src);
    let src_row = &tail[0];
    for (d, &s) in head[dst][from..].iter_mut().zip(&src_row[from..]) {
        *d = *d + s;
    }
}

/// Exchange `grid[a][from..]` and `grid[b][from..]`.
pub fn swap_rows_from<T: Float>(grid: &mut [Vec<T>], a: usize, b: usize, from: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = (a.min(b), a.max(b));
    let (head, tail) = grid.split_at_mut(hi);
    head[lo][from..].swap_with_slice(&mut tail[0][from..]);
}

/// `row[from..] /= p`.
pub fn normalize_row<T: Float>(row: &mut [T], from: usize, p: T) {
    for v in &mut row[from..] {
        *v = *v / p;
    }
}

/// `grid[dst][from..] += f * grid[src][from..]`, `src != dst`.
pub fn axpy_row<T: Float>(grid: &mut [Vec<T>], dst: usize, src: usize, f: T, from: usize) {
    let (d, s) = pair_mut(grid, dst, src);
    for (x, &y) in d[from..].iter_mut().zip(&s[from..]) {
        *x = *x + f * y;
    }
}

fn pair_mut<T>(grid: &mut [Vec<T>], dst: usize, src: usize) -> (&mut Vec<T>, &Vec<T>) {
    assert_ne!(dst, src, "row operation on a single row");
    if dst < src {
        let (head, tail) = grid.split_at_mut(src);
        (&mut head[dst], &tail[0])
    } else {
        let (head, tail) = grid.split_at_mut(dst);
        (&mut tail[0], &head[src])
    }
}

/// True when no entry of `row` is significant under `tol`.
pub fn row_is_zero<T: Float>(row: &[T], tol: T) -> bool {
    row.iter().all(|&x| is_negligible(x, tol))
}
