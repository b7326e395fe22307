//! Structural properties of a dense matrix.

use bitflags::bitflags;

use super::Matrix;

bitflags! {
    /// Structure flags reported by [`Matrix::properties`]. All tests are exact.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct MatProperties: u32 {
        const SQUARE           = 0b0000_0001;
        const ZERO             = 0b0000_0010;
        const UPPER_TRIANGULAR = 0b0000_0100; // square, zero below the diagonal
        const LOWER_TRIANGULAR = 0b0000_1000; // square, zero above the diagonal
        const DIAGONAL         = Self::UPPER_TRIANGULAR.bits() | Self::LOWER_TRIANGULAR.bits();
        const SYMMETRIC        = 0b0001_0000;
        const IDENTITY         = 0b0010_0000;
    }
}

impl Matrix {
    /// Classify the matrix. Triangular, symmetric and identity flags are only
    /// ever set on square matrices.
    pub fn properties(&self) -> MatProperties {
        let mut props = MatProperties::empty();
        if self.iter().all(|&x| x == 0.0) {
            props |= MatProperties::ZERO;
        }
        if !self.is_square() {
            return props;
        }
        props |= MatProperties::SQUARE;

        let n = self.rows();
        let rows = self.as_rows();
        let mut upper = true;
        let mut lower = true;
        let mut symmetric = true;
        for i in 0..n {
            for j in 0..i {
                upper &= rows[i][j] == 0.0;
                lower &= rows[j][i] == 0.0;
                symmetric &= rows[i][j] == rows[j][i];
            }
        }
        if upper {
            props |= MatProperties::UPPER_TRIANGULAR;
        }
        if lower {
            props |= MatProperties::LOWER_TRIANGULAR;
        }
        if symmetric {
            props |= MatProperties::SYMMETRIC;
        }
        if upper && lower && (0..n).all(|i| rows[i][i] == 1.0) {
            props |= MatProperties::IDENTITY;
        }
        props
    }
}
