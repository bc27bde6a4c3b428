use thiserror::Error;

// Unified error type for matvec

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("dimension mismatch in {op}: left shape {left:?}, right shape {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("matrix is not square ({nrows}x{ncols})")]
    NotSquare { nrows: usize, ncols: usize },
    #[error("singular matrix: no usable pivot in column {column}")]
    SingularMatrix { column: usize },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("malformed matrix: {0}")]
    MalformedMatrix(String),
    #[error("fixture codec error: {0}")]
    Codec(String),
}

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Bounds check shared by every container accessor.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinalgError::IndexOutOfRange { index, len })
    }
}

/// Panicking form of [`check_index`] for `Index`/`IndexMut` impls.
pub(crate) fn assert_index(index: usize, len: usize) {
    if let Err(e) = check_index(index, len) {
        panic!("{e}");
    }
}
