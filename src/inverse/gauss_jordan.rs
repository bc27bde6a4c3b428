//! Gauss-Jordan inversion with partial pivoting.
//!
//! The augmented system `[A | I]` is reduced column by column. For each column
//! the remaining row with the largest absolute entry is swapped into pivot
//! position, the pivot row is normalized, and the column is eliminated from
//! every other row. When the left half reaches `I`, the right half is `A⁻¹`.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.4

use crate::config::InverseOptions;
use crate::core::traits::Scalar;
use crate::error::{LinalgError, Result};
use crate::matrix::DenseMatrix;
use num_traits::NumCast;

/// Invert a square matrix, failing with `NotSquare` or `SingularMatrix`.
pub fn invert<T: Scalar>(a: &DenseMatrix<T>, opts: &InverseOptions) -> Result<DenseMatrix<T>> {
    let (nrows, ncols) = a.shape();
    if nrows != ncols {
        return Err(LinalgError::NotSquare { nrows, ncols });
    }
    let n = nrows;
    let tol: T = <T as NumCast>::from(opts.pivot_tol).unwrap_or_else(T::epsilon);
    log::debug!("gauss-jordan: inverting {n}x{n} matrix (pivot_tol = {})", opts.pivot_tol);

    let mut lhs = a.clone().into_rows();
    let mut inv = DenseMatrix::<T>::identity(n).into_rows();

    for col in 0..n {
        // Partial pivoting: largest magnitude among rows col..n.
        let mut p = col;
        let mut best = lhs[col][col].abs();
        for (r, row) in lhs.iter().enumerate().skip(col + 1) {
            let mag = row[col].abs();
            if mag > best {
                best = mag;
                p = r;
            }
        }
        if best.is_nan() || best <= tol {
            log::warn!("gauss-jordan: no usable pivot in column {col} (|pivot| = {best:?})");
            return Err(LinalgError::SingularMatrix { column: col });
        }
        if p != col {
            log::trace!("gauss-jordan: swapping rows {col} and {p}");
            lhs.swap(col, p);
            inv.swap(col, p);
        }

        let pivot = lhs[col][col];
        for j in col..n {
            lhs[col][j] = lhs[col][j] / pivot;
        }
        for x in inv[col].iter_mut() {
            *x = *x / pivot;
        }

        let pivot_lhs = lhs[col].clone();
        let pivot_inv = inv[col].clone();
        for r in (0..n).filter(|&r| r != col) {
            let factor = lhs[r][col];
            if factor == T::zero() {
                continue;
            }
            // Entries left of `col` are already zero in both rows.
            for j in col..n {
                lhs[r][j] = lhs[r][j] - factor * pivot_lhs[j];
            }
            for (x, &y) in inv[r].iter_mut().zip(&pivot_inv) {
                *x = *x - factor * y;
            }
        }
    }

    log::debug!("gauss-jordan: {n}x{n} inverse complete");
    DenseMatrix::from_rows(inv)
}
