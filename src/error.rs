use thiserror::Error;

// Unified error type for mathbeta

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("matrix is not square ({rows}x{columns})")]
    NotSquare { rows: usize, columns: usize },
    #[error("singular matrix: no nonzero pivot in column {column}")]
    Singular { column: usize },
    #[error("{given} values do not fit a {rows}x{columns} matrix")]
    TooManyValues {
        rows: usize,
        columns: usize,
        given: usize,
    },
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid pivot tolerance {0} (must be finite and >= 0)")]
    InvalidTolerance(f64),
}
