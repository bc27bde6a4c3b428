//! Pairwise arithmetic across dense and sparse containers.
//!
//! Every supported operand pair has a fallible form ([`TryAdd`], [`TrySub`],
//! [`TryMul`], [`Dot`]) returning [`crate::error::Result`], and `std::ops`
//! sugar on references and owned values that panics with the error message on
//! a shape mismatch, the way slice indexing panics out of range.
//!
//! | lhs \ rhs      | DenseVector | SparseVector | DenseMatrix | SparseMatrix |
//! |----------------|-------------|--------------|-------------|--------------|
//! | DenseVector    | `+ - dot`   | `+ - dot`    | `*`         | `*`          |
//! | SparseVector   | `+ - dot`   | `+ - dot`    | `*`         | `*`          |
//! | DenseMatrix    | `*`         | `*`          | `+ - *`     | `+ - *`      |
//! | SparseMatrix   | `*`         | `*`          | `+ - *`     | `+ - *`      |
//!
//! Results of container-container operators are always dense. Scalar operators
//! (`+ - *` with `f32`/`f64`) keep the container kind.

use crate::error::Result;

mod pairwise;
mod scalar;

/// Fallible `self + rhs`.
pub trait TryAdd<Rhs = Self> {
    type Output;
    fn try_add(&self, rhs: &Rhs) -> Result<Self::Output>;
}

/// Fallible `self - rhs`.
pub trait TrySub<Rhs = Self> {
    type Output;
    fn try_sub(&self, rhs: &Rhs) -> Result<Self::Output>;
}

/// Fallible `self * rhs` (matrix or vector product).
pub trait TryMul<Rhs = Self> {
    type Output;
    fn try_mul(&self, rhs: &Rhs) -> Result<Self::Output>;
}

/// Inner product of two vector-family operands of equal length.
pub trait Dot<Rhs = Self> {
    type Output;
    fn try_dot(&self, rhs: &Rhs) -> Result<Self::Output>;

    /// Panicking form of [`Dot::try_dot`].
    fn dot(&self, rhs: &Rhs) -> Self::Output {
        self.try_dot(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}
