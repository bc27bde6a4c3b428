//! Core linear-algebra traits for matvec.
//!
//! Every container, dense or sparse, exposes its logical elements through
//! [`VectorGet`] or [`MatrixGet`]. The kernels in [`crate::core::kernels`] are
//! written against these traits only, which is what lets a single kernel serve
//! every dense/sparse operand combination.

use approx::AbsDiffEq;
use num_traits::Float;
use std::fmt::Debug;

/// Element type accepted by every container (`f32`, `f64`).
pub trait Scalar: Float + Send + Sync + Debug + AbsDiffEq<Epsilon = Self> + 'static {}

impl<T> Scalar for T where T: Float + Send + Sync + Debug + AbsDiffEq<Epsilon = T> + 'static {}

/// Logical shape of a matrix-like container.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// `(nrows, ncols)`.
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Read-only element access for matrix-like containers.
///
/// `at` is only called with indices already validated against the shape.
pub trait MatrixGet<T>: MatShape {
    fn at(&self, i: usize, j: usize) -> T;
}

/// Read-only element access for vector-like containers (dense or sparse).
#[allow(clippy::len_without_is_empty)]
pub trait VectorGet<T> {
    /// Logical length.
    fn len(&self) -> usize;
    /// Element `i`; `i < len()` is the caller's responsibility.
    fn at(&self, i: usize) -> T;
}
