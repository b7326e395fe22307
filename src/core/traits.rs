//! Core read-only matrix traits for mathbeta.

/// Shape of a dense two-dimensional source.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// `(rows, columns)`.
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Entry access by `(row, column)`; callers stay inside `MatShape` bounds.
pub trait MatrixGet<T> {
    fn get(&self, i: usize, j: usize) -> T;
}
