//! Tolerance comparison of containers.
//!
//! Two containers are approximately equal when they have the same shape and
//! every pair of corresponding elements differs by at most `epsilon`. Dense
//! and sparse operands can be mixed freely; sparse ones are read through their
//! defaults, never materialized.
//!
//! The containers also implement [`approx::AbsDiffEq`], so tests can use
//! `approx::assert_abs_diff_eq!(a, b, epsilon = 1e-8)` directly.

use crate::config::CompareOptions;
use crate::core::traits::{MatrixGet, Scalar, VectorGet};
use crate::error::{LinalgError, Result};
use crate::matrix::{DenseMatrix, SparseMatrix};
use crate::vector::{DenseVector, SparseVector};
use approx::AbsDiffEq;
use num_traits::NumCast;

/// Largest `|a_i - b_i|`; `DimensionMismatch` if the lengths differ.
pub fn max_abs_diff_vectors<T, A, B>(a: &A, b: &B) -> Result<T>
where
    T: Scalar,
    A: VectorGet<T>,
    B: VectorGet<T>,
{
    if a.len() != b.len() {
        return Err(LinalgError::DimensionMismatch {
            op: "compare",
            left: (a.len(), 1),
            right: (b.len(), 1),
        });
    }
    let mut max = T::zero();
    for i in 0..a.len() {
        let d = (a.at(i) - b.at(i)).abs();
        if d.is_nan() {
            return Ok(d);
        }
        max = max.max(d);
    }
    Ok(max)
}

/// Largest `|a_ij - b_ij|`; `DimensionMismatch` if the shapes differ.
pub fn max_abs_diff_matrices<T, A, B>(a: &A, b: &B) -> Result<T>
where
    T: Scalar,
    A: MatrixGet<T>,
    B: MatrixGet<T>,
{
    if a.shape() != b.shape() {
        return Err(LinalgError::DimensionMismatch {
            op: "compare",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let (nrows, ncols) = a.shape();
    let mut max = T::zero();
    for i in 0..nrows {
        for j in 0..ncols {
            let d = (a.at(i, j) - b.at(i, j)).abs();
            // `Float::max` drops NaN; surface it instead.
            if d.is_nan() {
                return Ok(d);
            }
            max = max.max(d);
        }
    }
    Ok(max)
}

/// Same length and every element within `epsilon`.
pub fn vectors_approx_eq<T, A, B>(a: &A, b: &B, epsilon: T) -> bool
where
    T: Scalar,
    A: VectorGet<T>,
    B: VectorGet<T>,
{
    a.len() == b.len() && (0..a.len()).all(|i| (a.at(i) - b.at(i)).abs() <= epsilon)
}

/// Same shape and every element within `epsilon`.
pub fn matrices_approx_eq<T, A, B>(a: &A, b: &B, epsilon: T) -> bool
where
    T: Scalar,
    A: MatrixGet<T>,
    B: MatrixGet<T>,
{
    matches!(max_abs_diff_matrices(a, b), Ok(d) if d <= epsilon)
}

/// [`matrices_approx_eq`] with the epsilon taken from `opts`.
pub fn matrices_approx_eq_with<T, A, B>(a: &A, b: &B, opts: &CompareOptions) -> bool
where
    T: Scalar,
    A: MatrixGet<T>,
    B: MatrixGet<T>,
{
    let eps = <T as NumCast>::from(opts.epsilon).unwrap_or_else(T::epsilon);
    matrices_approx_eq(a, b, eps)
}

/// [`vectors_approx_eq`] with the epsilon taken from `opts`.
pub fn vectors_approx_eq_with<T, A, B>(a: &A, b: &B, opts: &CompareOptions) -> bool
where
    T: Scalar,
    A: VectorGet<T>,
    B: VectorGet<T>,
{
    let eps = <T as NumCast>::from(opts.epsilon).unwrap_or_else(T::epsilon);
    vectors_approx_eq(a, b, eps)
}

macro_rules! abs_diff_eq_impl {
    ($C:ident, $cmp:ident) => {
        impl<T: Scalar> AbsDiffEq for $C<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                $cmp(self, other, epsilon)
            }
        }
    };
}

abs_diff_eq_impl!(DenseVector, vectors_approx_eq);
abs_diff_eq_impl!(SparseVector, vectors_approx_eq);
abs_diff_eq_impl!(DenseMatrix, matrices_approx_eq);
abs_diff_eq_impl!(SparseMatrix, matrices_approx_eq);
