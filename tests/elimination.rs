//! Tests for rank, determinant and inverse.
//!
//! Covers the fixed scenarios (the singular 3x3 counting matrix and the
//! invertible 2x2), the identity round trips `M·M⁻¹` and `M⁻¹·M`, the
//! determinant/inverse asymmetry on singular input, and pivot tolerances.

use approx::assert_abs_diff_eq;
use mathbeta::{EliminationOptions, Matrix, MatrixError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn counting_3x3() -> Matrix {
    Matrix::new(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap()
}

/// Random, strictly diagonally dominant (hence invertible) matrix.
fn random_invertible(n: usize, seed: u64) -> Matrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = Matrix::random_with(n, n, &mut rng);
    let mut diag = vec![0.0; n * n];
    for i in 0..n {
        diag[i * n + i] = n as f64;
    }
    let shift = Matrix::new(n, n, &diag).unwrap();
    m.add(&shift).unwrap()
}

/// Rows [1,2,3], [4,5,6], [7,8,9]: third row is 2·second − first.
#[test]
fn counting_matrix_is_singular() {
    let m = counting_3x3();
    assert_eq!(m.determinant().unwrap(), 0.0);
    assert_eq!(m.inverse(), Err(MatrixError::Singular { column: 2 }));
    assert_eq!(m.rank(), 2);
}

/// Determinant reports singular input as 0.0; inverse reports it as an error.
#[test]
fn determinant_and_inverse_disagree_on_singular_input() {
    for m in [counting_3x3(), Matrix::zeros(4, 4), Matrix::ones(3, 3)] {
        assert_eq!(m.determinant(), Ok(0.0));
        assert!(matches!(m.inverse(), Err(MatrixError::Singular { .. })));
    }
}

#[test]
fn two_by_two_determinant_and_inverse() {
    let m = Matrix::new(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
    assert_eq!(m.determinant().unwrap(), 10.0);
    let expected = Matrix::new(2, 2, &[0.6, -0.7, -0.2, 0.4]).unwrap();
    assert_abs_diff_eq!(m.inverse().unwrap(), expected, epsilon = 1e-12);
}

/// `M·M⁻¹` and `M⁻¹·M` both approximate the identity.
#[test]
fn inverse_round_trips_to_identity() {
    for (n, seed) in [(1, 1), (2, 2), (5, 3), (10, 4), (25, 5)] {
        let m = random_invertible(n, seed);
        let inv = m.inverse().unwrap();
        let eye = Matrix::identity(n);
        assert_abs_diff_eq!(m.multiply(&inv).unwrap(), eye, epsilon = 1e-9);
        assert_abs_diff_eq!(inv.multiply(&m).unwrap(), eye, epsilon = 1e-9);
    }
}

/// Zero leading pivots are cleared without losing invertibility.
#[test]
fn inverse_with_zero_pivots() {
    let m = Matrix::new(3, 3, &[0.0, 2.0, 1.0, 1.0, 0.0, 3.0, 4.0, 1.0, 0.0]).unwrap();
    let inv = m.inverse().unwrap();
    assert_abs_diff_eq!(m.multiply(&inv).unwrap(), Matrix::identity(3), epsilon = 1e-12);
    assert_abs_diff_eq!(inv.multiply(&m).unwrap(), Matrix::identity(3), epsilon = 1e-12);
}

/// A row swap does not negate the determinant.
#[test]
fn determinant_ignores_swap_parity() {
    let swapped = Matrix::new(3, 3, &[0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
    assert_eq!(swapped.determinant().unwrap(), 1.0);
    // rank and inverse never swap, so they see an ordinary permutation
    assert_eq!(swapped.rank(), 3);
    assert_eq!(swapped.inverse().unwrap(), swapped.transpose());
}

#[test]
fn rank_of_identity_and_zero() {
    for n in 0..6 {
        assert_eq!(Matrix::identity(n).rank(), n);
    }
    for (r, c) in [(1, 1), (3, 5), (5, 3), (0, 4)] {
        assert_eq!(Matrix::zeros(r, c).rank(), 0);
    }
}

#[test]
fn rank_is_transpose_invariant() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = Matrix::random_with(3, 2, &mut rng);
    let b = Matrix::random_with(2, 6, &mut rng);
    // product of a 3x2 and a 2x6 has rank at most 2
    let p = a.multiply(&b).unwrap();
    assert_eq!(p.rank(), p.transpose().rank());
    assert_eq!(a.rank(), 2);
    assert_eq!(b.transpose().rank(), 2);
}

#[test]
fn square_only_operations_reject_rectangles() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.determinant(), Err(MatrixError::NotSquare { rows: 2, columns: 3 }));
    assert_eq!(m.inverse(), Err(MatrixError::NotSquare { rows: 2, columns: 3 }));
}

/// A pivot tolerance turns a nearly singular matrix into a singular one; the
/// default exact test does not.
#[test]
fn pivot_tolerance_on_nearly_singular_input() {
    let m = Matrix::new(2, 2, &[1.0, 1.0, 1.0, 1.0 + 1e-14]).unwrap();
    assert_eq!(m.rank(), 2);
    assert!(m.determinant().unwrap() != 0.0);
    assert!(m.inverse().is_ok());

    let loose = EliminationOptions::new(1e-12).unwrap();
    assert_eq!(m.rank_with(&loose), 1);
    assert_eq!(m.determinant_with(&loose), Ok(0.0));
    assert_eq!(m.inverse_with(&loose), Err(MatrixError::Singular { column: 1 }));

    let exact = EliminationOptions::default();
    assert_eq!(m.rank_with(&exact), m.rank());
    assert_eq!(m.determinant_with(&exact), m.determinant());
    assert_eq!(m.inverse_with(&exact), m.inverse());
}

#[test]
fn elimination_leaves_receiver_untouched() {
    let m = Matrix::new(3, 3, &[0.0, 2.0, 1.0, 1.0, 0.0, 3.0, 4.0, 1.0, 0.0]).unwrap();
    let before = m.copy();
    let _ = m.rank();
    let _ = m.determinant();
    let _ = m.inverse();
    assert_eq!(m, before);
}
