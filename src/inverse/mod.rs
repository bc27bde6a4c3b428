//! Matrix inversion.
//!
//! Dense matrices are inverted by [`gauss_jordan::invert`]. Sparse matrices have
//! no dedicated algorithm: they are materialized with
//! [`SparseMatrix::full_matrix`] and inverted densely.

pub mod gauss_jordan;

use crate::config::InverseOptions;
use crate::core::traits::Scalar;
use crate::error::Result;
use crate::matrix::{DenseMatrix, SparseMatrix};

impl<T: Scalar> DenseMatrix<T> {
    /// Inverse with the default pivot tolerance.
    pub fn inverse(&self) -> Result<DenseMatrix<T>> {
        self.inverse_with(&InverseOptions::default())
    }

    pub fn inverse_with(&self, opts: &InverseOptions) -> Result<DenseMatrix<T>> {
        gauss_jordan::invert(self, opts)
    }
}

impl<T: Scalar> SparseMatrix<T> {
    /// Inverse of the materialized matrix; the result is dense.
    pub fn inverse(&self) -> Result<DenseMatrix<T>> {
        self.inverse_with(&InverseOptions::default())
    }

    pub fn inverse_with(&self, opts: &InverseOptions) -> Result<DenseMatrix<T>> {
        log::debug!(
            "densifying {}x{} sparse matrix ({} overrides) for inversion",
            self.nrows(),
            self.ncols(),
            self.nnz()
        );
        self.full_matrix().inverse_with(opts)
    }
}
