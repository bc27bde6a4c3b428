//! Sparse matrix: a default value plus explicit per-cell overrides.
//!
//! Overrides are stored in a two-level ordered map (row → column → value), so
//! rows with no writes cost nothing and iteration is row-major. Unset cells
//! read as the default. As with [`SparseVector`], writes never delete.

use crate::core::traits::{MatShape, MatrixGet, Scalar};
use crate::error::{Result, assert_index, check_index};
use crate::matrix::DenseMatrix;
use crate::vector::SparseVector;
use std::collections::BTreeMap;
use std::ops::Index;

/// Owned sparse matrix of fixed logical shape.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseMatrix<T> {
    rows: BTreeMap<usize, BTreeMap<usize, T>>,
    nrows: usize,
    ncols: usize,
    default: T,
}

impl<T: Scalar> SparseMatrix<T> {
    /// `nrows × ncols` matrix where every cell reads as `default`.
    pub fn new(default: T, nrows: usize, ncols: usize) -> Self {
        Self {
            rows: BTreeMap::new(),
            nrows,
            ncols,
            default,
        }
    }

    /// Build from explicit `(row, col, value)` overrides; later duplicates win.
    pub fn from_entries<I>(default: T, nrows: usize, ncols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut m = Self::new(default, nrows, ncols);
        for (i, j, x) in entries {
            m.set(i, j, x)?;
        }
        Ok(m)
    }

    /// Sparsify a dense matrix, recording every cell that differs from `default`.
    pub fn from_dense(dense: &DenseMatrix<T>, default: T) -> Self {
        let mut m = Self::new(default, dense.nrows(), dense.ncols());
        for (i, row) in dense.rows().enumerate() {
            let overrides: BTreeMap<usize, T> = row
                .iter()
                .enumerate()
                .filter(|&(_, &x)| x != default)
                .map(|(j, &x)| (j, x))
                .collect();
            if !overrides.is_empty() {
                m.rows.insert(i, overrides);
            }
        }
        m
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    /// Number of explicit overrides.
    pub fn nnz(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Explicit overrides as `(row, col, value)` in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.rows
            .iter()
            .flat_map(|(&i, row)| row.iter().map(move |(&j, &x)| (i, j, x)))
    }

    /// Cell `(i, j)`: its override if present, otherwise the default.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        check_index(i, self.nrows)?;
        check_index(j, self.ncols)?;
        Ok(self.value_at(i, j))
    }

    /// Insert or overwrite the override at `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        check_index(i, self.nrows)?;
        check_index(j, self.ncols)?;
        self.rows.entry(i).or_default().insert(j, value);
        Ok(())
    }

    /// Row `i` as a sparse vector sharing this matrix's default.
    pub fn row(&self, i: usize) -> Result<SparseVector<T>> {
        check_index(i, self.nrows)?;
        let overrides = self
            .rows
            .get(&i)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&j, &x)| (j, x)));
        SparseVector::from_entries(self.default, self.ncols, overrides)
    }

    /// Materialize the equivalent dense matrix.
    pub fn full_matrix(&self) -> DenseMatrix<T> {
        let mut dense = DenseMatrix::from_fn(self.nrows, self.ncols, |_, _| self.default);
        for (i, j, x) in self.entries() {
            dense[i][j] = x;
        }
        dense
    }

    pub fn add_scalar(&self, c: T) -> Self {
        self.map(|x| x + c)
    }

    pub fn sub_scalar(&self, c: T) -> Self {
        self.map(|x| x - c)
    }

    pub fn scale(&self, c: T) -> Self {
        self.map(|x| x * c)
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|(&i, row)| (i, row.iter().map(|(&j, &x)| (j, f(x))).collect()))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            default: f(self.default),
        }
    }

    fn value_at(&self, i: usize, j: usize) -> T {
        self.rows
            .get(&i)
            .and_then(|row| row.get(&j))
            .copied()
            .unwrap_or(self.default)
    }
}

impl<T: Scalar> Index<(usize, usize)> for SparseMatrix<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert_index(i, self.nrows);
        assert_index(j, self.ncols);
        self.rows
            .get(&i)
            .and_then(|row| row.get(&j))
            .unwrap_or(&self.default)
    }
}

impl<T> MatShape for SparseMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Scalar> MatrixGet<T> for SparseMatrix<T> {
    fn at(&self, i: usize, j: usize) -> T {
        self.value_at(i, j)
    }
}
