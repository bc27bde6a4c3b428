//! Configuration types.

pub mod options;
pub use options::{CompareOptions, InverseOptions};
