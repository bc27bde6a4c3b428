//! Utilities: tolerance comparison.

pub mod compare;
pub use compare::{
    matrices_approx_eq, matrices_approx_eq_with, max_abs_diff_matrices, max_abs_diff_vectors,
    vectors_approx_eq, vectors_approx_eq_with,
};
