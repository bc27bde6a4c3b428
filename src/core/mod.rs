//! Shared traits and the generic arithmetic kernels.

pub mod kernels;
pub mod traits;

pub use traits::{MatShape, MatrixGet, Scalar, VectorGet};
