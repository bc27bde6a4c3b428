//! matvec: dense and sparse matrices and vectors
//!
//! This crate provides four containers (dense/sparse × matrix/vector), arithmetic between
//! every dimensionally compatible pair of them and against scalars, and Gauss-Jordan matrix
//! inversion. Sparse containers store a default value plus explicit overrides.
//!
//! Containers are plain owned values. They are `Send + Sync`, but concurrent mutation of one
//! instance needs external synchronization supplied by the caller.
//!
//! ```
//! use matvec::{DenseMatrix, SparseVector};
//!
//! let a = DenseMatrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
//! let mut x = SparseVector::new(1.0, 2);
//! x.set(1, 3.0).unwrap();
//! let y = &a * &x;
//! assert_eq!(y.as_slice(), &[2.0, 6.0]);
//! assert_eq!(a.inverse().unwrap()[0][0], 0.5);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod inverse;
pub mod io;
pub mod matrix;
pub mod ops;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use crate::config::{CompareOptions, InverseOptions};
pub use crate::core::traits::{MatShape, MatrixGet, Scalar, VectorGet};
pub use crate::error::{LinalgError, Result};
pub use crate::matrix::{DenseMatrix, SparseMatrix};
pub use crate::ops::{Dot, TryAdd, TryMul, TrySub};
pub use crate::vector::{DenseVector, SparseVector};
