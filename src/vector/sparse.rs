//! Sparse vector: a default value plus explicit per-index overrides.
//!
//! Any index without an override reads as the default. Writes insert or
//! overwrite an override and never remove one, even when the written value
//! equals the default; `nnz` therefore counts explicit writes, not values that
//! differ from the default.

use crate::core::traits::{Scalar, VectorGet};
use crate::error::{LinalgError, Result, assert_index, check_index};
use crate::vector::DenseVector;
use num_traits::NumCast;
use std::collections::BTreeMap;
use std::ops::Index;

/// Owned sparse vector of fixed logical length.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseVector<T> {
    entries: BTreeMap<usize, T>,
    len: usize,
    default: T,
}

impl<T: Scalar> SparseVector<T> {
    /// Vector of logical length `len` where every element reads as `default`.
    pub fn new(default: T, len: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            len,
            default,
        }
    }

    /// Build from explicit `(index, value)` overrides; later duplicates win.
    pub fn from_entries<I>(default: T, len: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut v = Self::new(default, len);
        for (i, x) in entries {
            v.set(i, x)?;
        }
        Ok(v)
    }

    /// Sparsify a dense vector, recording every element that differs from `default`.
    pub fn from_dense(dense: &DenseVector<T>, default: T) -> Self {
        let entries = dense
            .iter()
            .enumerate()
            .filter(|&(_, &x)| x != default)
            .map(|(i, &x)| (i, x))
            .collect();
        Self {
            entries,
            len: dense.len(),
            default,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    /// Number of explicit overrides.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Explicit overrides in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.entries.iter().map(|(&i, &x)| (i, x))
    }

    /// Element `i`: its override if present, otherwise the default.
    pub fn get(&self, i: usize) -> Result<T> {
        check_index(i, self.len)?;
        Ok(self.value_at(i))
    }

    /// Insert or overwrite the override at `i`.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        check_index(i, self.len)?;
        self.entries.insert(i, value);
        Ok(())
    }

    /// Materialize the equivalent dense vector.
    pub fn to_dense(&self) -> DenseVector<T> {
        let mut dense = DenseVector::from_elem(self.len, self.default);
        for (&i, &x) in &self.entries {
            dense[i] = x;
        }
        dense
    }

    /// New sparse vector with `c` added to the default and every override.
    pub fn add_scalar(&self, c: T) -> Self {
        self.map(|x| x + c)
    }

    /// New sparse vector with `c` subtracted from the default and every override.
    pub fn sub_scalar(&self, c: T) -> Self {
        self.map(|x| x - c)
    }

    /// New sparse vector with the default and every override multiplied by `c`.
    pub fn scale(&self, c: T) -> Self {
        self.map(|x| x * c)
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            entries: self.entries.iter().map(|(&i, &x)| (i, f(x))).collect(),
            len: self.len,
            default: f(self.default),
        }
    }

    fn value_at(&self, i: usize) -> T {
        self.entries.get(&i).copied().unwrap_or(self.default)
    }

    /// Dot product of two sparse vectors without materializing either.
    ///
    /// Indices overridden in either operand are summed explicitly; every other
    /// position contributes `default_a * default_b`.
    pub(crate) fn sparse_dot(&self, other: &Self) -> Result<T> {
        if self.len != other.len {
            return Err(LinalgError::DimensionMismatch {
                op: "dot",
                left: (self.len, 1),
                right: (other.len, 1),
            });
        }
        let mut sum = T::zero();
        let mut touched = 0usize;
        for (&i, &x) in &self.entries {
            sum = sum + x * other.value_at(i);
            touched += 1;
        }
        for (&i, &y) in &other.entries {
            if !self.entries.contains_key(&i) {
                sum = sum + self.default * y;
                touched += 1;
            }
        }
        let untouched = self.len - touched;
        if untouched == 0 {
            return Ok(sum);
        }
        let dd = self.default * other.default;
        Ok(match <T as NumCast>::from(untouched) {
            Some(k) => sum + dd * k,
            None => (0..untouched).fold(sum, |acc, _| acc + dd),
        })
    }
}

impl<T: Scalar> Index<usize> for SparseVector<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        assert_index(i, self.len);
        self.entries.get(&i).unwrap_or(&self.default)
    }
}

impl<T: Scalar> VectorGet<T> for SparseVector<T> {
    fn len(&self) -> usize {
        self.len
    }
    fn at(&self, i: usize) -> T {
        self.value_at(i)
    }
}
