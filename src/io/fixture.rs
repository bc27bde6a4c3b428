//! Binary fixture layout for the four container types.
//!
//! All integers are `u64` and all values `f64`, in native byte order:
//!
//! | container     | layout |
//! |---------------|--------|
//! | DenseVector   | `count, count × value` |
//! | SparseVector  | `size, default, entry_count, entry_count × (index, value)` |
//! | DenseMatrix   | `nrows, ncols, nrows·ncols × value` (row-major) |
//! | SparseMatrix  | `nrows, ncols, default, entry_count, entry_count × (row, col, value)` |
//!
//! Decoders reject truncated input and trailing bytes, and check declared
//! counts against the remaining input before allocating.

use crate::error::{LinalgError, Result};
use crate::matrix::{DenseMatrix, SparseMatrix};
use crate::vector::{DenseVector, SparseVector};

const WORD: usize = 8;

/// Cursor over an encoded buffer.
struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn word(&mut self) -> Result<[u8; WORD]> {
        let bytes = self
            .data
            .get(self.offset..self.offset + WORD)
            .ok_or_else(|| {
                LinalgError::Codec(format!("unexpected end of input at offset {}", self.offset))
            })?;
        let mut out = [0u8; WORD];
        out.copy_from_slice(bytes);
        self.offset += WORD;
        Ok(out)
    }

    fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_ne_bytes(self.word()?))
    }

    fn read_usize(&mut self) -> Result<usize> {
        let at = self.offset;
        let raw = u64::from_ne_bytes(self.word()?);
        usize::try_from(raw)
            .map_err(|_| LinalgError::Codec(format!("count {raw} at offset {at} overflows usize")))
    }

    /// Fail early if `count` records of `words` words each cannot fit.
    fn expect_records(&self, count: usize, words: usize) -> Result<()> {
        let remaining = self.data.len() - self.offset;
        match count.checked_mul(words * WORD) {
            Some(needed) if needed <= remaining => Ok(()),
            _ => Err(LinalgError::Codec(format!(
                "{count} records declared at offset {} but only {remaining} bytes remain",
                self.offset
            ))),
        }
    }

    fn finish(self) -> Result<()> {
        if self.offset == self.data.len() {
            Ok(())
        } else {
            Err(LinalgError::Codec(format!(
                "{} trailing bytes after offset {}",
                self.data.len() - self.offset,
                self.offset
            )))
        }
    }
}

fn push_usize(out: &mut Vec<u8>, x: usize) {
    out.extend_from_slice(&(x as u64).to_ne_bytes());
}

fn push_f64(out: &mut Vec<u8>, x: f64) {
    out.extend_from_slice(&x.to_ne_bytes());
}

pub fn encode_vector(v: &DenseVector<f64>) -> Vec<u8> {
    let mut out = Vec::with_capacity((1 + v.len()) * WORD);
    push_usize(&mut out, v.len());
    for &x in v.iter() {
        push_f64(&mut out, x);
    }
    out
}

pub fn decode_vector(data: &[u8]) -> Result<DenseVector<f64>> {
    let mut r = Reader::new(data);
    let count = r.read_usize()?;
    r.expect_records(count, 1)?;
    let values = (0..count).map(|_| r.read_f64()).collect::<Result<Vec<_>>>()?;
    r.finish()?;
    Ok(DenseVector::from(values))
}

pub fn encode_sparse_vector(v: &SparseVector<f64>) -> Vec<u8> {
    let mut out = Vec::with_capacity((3 + 2 * v.nnz()) * WORD);
    push_usize(&mut out, v.len());
    push_f64(&mut out, v.default_value());
    push_usize(&mut out, v.nnz());
    for (i, x) in v.entries() {
        push_usize(&mut out, i);
        push_f64(&mut out, x);
    }
    out
}

pub fn decode_sparse_vector(data: &[u8]) -> Result<SparseVector<f64>> {
    let mut r = Reader::new(data);
    let size = r.read_usize()?;
    let default = r.read_f64()?;
    let count = r.read_usize()?;
    r.expect_records(count, 2)?;
    let mut v = SparseVector::new(default, size);
    for _ in 0..count {
        let i = r.read_usize()?;
        v.set(i, r.read_f64()?)?;
    }
    r.finish()?;
    Ok(v)
}

pub fn encode_matrix(m: &DenseMatrix<f64>) -> Vec<u8> {
    let mut out = Vec::with_capacity((2 + m.nrows() * m.ncols()) * WORD);
    push_usize(&mut out, m.nrows());
    push_usize(&mut out, m.ncols());
    for row in m.rows() {
        for &x in row.iter() {
            push_f64(&mut out, x);
        }
    }
    out
}

pub fn decode_matrix(data: &[u8]) -> Result<DenseMatrix<f64>> {
    let mut r = Reader::new(data);
    let nrows = r.read_usize()?;
    let ncols = r.read_usize()?;
    if nrows > 0 && ncols == 0 {
        return Err(LinalgError::Codec(format!(
            "matrix with {nrows} rows declares zero columns"
        )));
    }
    let count = nrows.checked_mul(ncols).ok_or_else(|| {
        LinalgError::Codec(format!("matrix shape {nrows}x{ncols} overflows usize"))
    })?;
    r.expect_records(count, 1)?;
    let values = (0..count).map(|_| r.read_f64()).collect::<Result<Vec<_>>>()?;
    r.finish()?;
    DenseMatrix::from_row_major(nrows, ncols, values)
}

pub fn encode_sparse_matrix(m: &SparseMatrix<f64>) -> Vec<u8> {
    let mut out = Vec::with_capacity((4 + 3 * m.nnz()) * WORD);
    push_usize(&mut out, m.nrows());
    push_usize(&mut out, m.ncols());
    push_f64(&mut out, m.default_value());
    push_usize(&mut out, m.nnz());
    for (i, j, x) in m.entries() {
        push_usize(&mut out, i);
        push_usize(&mut out, j);
        push_f64(&mut out, x);
    }
    out
}

pub fn decode_sparse_matrix(data: &[u8]) -> Result<SparseMatrix<f64>> {
    let mut r = Reader::new(data);
    let nrows = r.read_usize()?;
    let ncols = r.read_usize()?;
    let default = r.read_f64()?;
    let count = r.read_usize()?;
    r.expect_records(count, 3)?;
    let mut m = SparseMatrix::new(default, nrows, ncols);
    for _ in 0..count {
        let i = r.read_usize()?;
        let j = r.read_usize()?;
        m.set(i, j, r.read_f64()?)?;
    }
    r.finish()?;
    Ok(m)
}
