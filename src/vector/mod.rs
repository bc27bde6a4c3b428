//! Vector module: dense and sparse vector types.

pub mod dense;
pub use dense::DenseVector;
pub mod sparse;
pub use sparse::SparseVector;
