//! Tunable tolerances for inversion and comparison.
//!
//! Both option structs are plain values with sensible defaults; pass them
//! explicitly to the `*_with` variants when the defaults do not fit the data.

/// Gauss-Jordan inversion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseOptions {
    /// A candidate pivot with absolute value at or below this is treated as zero.
    pub pivot_tol: f64,
}

impl Default for InverseOptions {
    fn default() -> Self {
        Self { pivot_tol: 1e-12 }
    }
}

impl InverseOptions {
    pub fn with_pivot_tol(pivot_tol: f64) -> Self {
        Self { pivot_tol }
    }
}

/// Elementwise tolerance comparison parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    /// Maximum allowed absolute difference between corresponding elements.
    pub epsilon: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { epsilon: 1e-8 }
    }
}
