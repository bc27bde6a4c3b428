//! Generic arithmetic kernels over vector-like and matrix-like operands.
//!
//! Each kernel validates shapes, then computes a freshly allocated dense result
//! by reading operands through [`VectorGet`] / [`MatrixGet`]. Sparse operands are
//! never materialized; unset cells are read as the operand's default value.
//!
//! # Features
//! - Elementwise combination of two vectors or two matrices (`+`, `-`).
//! - Matrix-matrix, matrix-vector and vector-matrix products.
//! - Dot product of two vectors.
//!
//! With the `rayon` feature, the rows of dense-result products are computed in
//! parallel. Each output element is still a sequential sum, so results do not
//! depend on the feature.

use crate::core::traits::{MatrixGet, Scalar, VectorGet};
use crate::error::{LinalgError, Result};
use crate::matrix::DenseMatrix;
use crate::vector::DenseVector;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Elementwise `f(a_i, b_i)` for two vectors of equal length.
pub fn zip_vectors<T, A, B, F>(op: &'static str, a: &A, b: &B, f: F) -> Result<DenseVector<T>>
where
    T: Scalar,
    A: VectorGet<T>,
    B: VectorGet<T>,
    F: Fn(T, T) -> T,
{
    if a.len() != b.len() {
        return Err(LinalgError::DimensionMismatch {
            op,
            left: (a.len(), 1),
            right: (b.len(), 1),
        });
    }
    Ok((0..a.len()).map(|i| f(a.at(i), b.at(i))).collect())
}

/// Elementwise `f(a_ij, b_ij)` for two matrices of equal shape.
pub fn zip_matrices<T, A, B, F>(op: &'static str, a: &A, b: &B, f: F) -> Result<DenseMatrix<T>>
where
    T: Scalar,
    A: MatrixGet<T>,
    B: MatrixGet<T>,
    F: Fn(T, T) -> T,
{
    if a.shape() != b.shape() {
        return Err(LinalgError::DimensionMismatch {
            op,
            left: a.shape(),
            right: b.shape(),
        });
    }
    let (nrows, ncols) = a.shape();
    Ok(DenseMatrix::from_fn(nrows, ncols, |i, j| f(a.at(i, j), b.at(i, j))))
}

/// Sum of elementwise products of two vectors of equal length.
pub fn dot<T, A, B>(a: &A, b: &B) -> Result<T>
where
    T: Scalar,
    A: VectorGet<T>,
    B: VectorGet<T>,
{
    if a.len() != b.len() {
        return Err(LinalgError::DimensionMismatch {
            op: "dot",
            left: (a.len(), 1),
            right: (b.len(), 1),
        });
    }
    Ok((0..a.len()).fold(T::zero(), |acc, i| acc + a.at(i) * b.at(i)))
}

/// Matrix product `A * B`; requires `A.ncols == B.nrows`.
pub fn mat_mat<T, A, B>(a: &A, b: &B) -> Result<DenseMatrix<T>>
where
    T: Scalar,
    A: MatrixGet<T> + Sync,
    B: MatrixGet<T> + Sync,
{
    if a.ncols() != b.nrows() {
        return Err(LinalgError::DimensionMismatch {
            op: "matrix product",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let (n, p) = (a.ncols(), b.ncols());
    let row = |i: usize| -> DenseVector<T> {
        (0..p)
            .map(|j| (0..n).fold(T::zero(), |acc, k| acc + a.at(i, k) * b.at(k, j)))
            .collect()
    };
    #[cfg(feature = "rayon")]
    let rows: Vec<DenseVector<T>> = (0..a.nrows()).into_par_iter().map(row).collect();
    #[cfg(not(feature = "rayon"))]
    let rows: Vec<DenseVector<T>> = (0..a.nrows()).map(row).collect();
    Ok(DenseMatrix::from_vectors(rows, p))
}

/// Matrix-vector product `A * x`; requires `A.ncols == x.len`.
pub fn mat_vec<T, A, V>(a: &A, x: &V) -> Result<DenseVector<T>>
where
    T: Scalar,
    A: MatrixGet<T> + Sync,
    V: VectorGet<T> + Sync,
{
    if a.ncols() != x.len() {
        return Err(LinalgError::DimensionMismatch {
            op: "matrix-vector product",
            left: a.shape(),
            right: (x.len(), 1),
        });
    }
    let n = a.ncols();
    let row = |i: usize| (0..n).fold(T::zero(), |acc, j| acc + a.at(i, j) * x.at(j));
    #[cfg(feature = "rayon")]
    let data: Vec<T> = (0..a.nrows()).into_par_iter().map(row).collect();
    #[cfg(not(feature = "rayon"))]
    let data: Vec<T> = (0..a.nrows()).map(row).collect();
    Ok(DenseVector::from(data))
}

/// Row vector times matrix `x * A`; requires `x.len == A.nrows`.
pub fn vec_mat<T, V, A>(x: &V, a: &A) -> Result<DenseVector<T>>
where
    T: Scalar,
    V: VectorGet<T>,
    A: MatrixGet<T>,
{
    if x.len() != a.nrows() {
        return Err(LinalgError::DimensionMismatch {
            op: "vector-matrix product",
            left: (1, x.len()),
            right: a.shape(),
        });
    }
    Ok((0..a.ncols())
        .map(|j| (0..a.nrows()).fold(T::zero(), |acc, k| acc + x.at(k) * a.at(k, j)))
        .collect())
}
