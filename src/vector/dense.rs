//! Dense vector: a fixed-length sequence storing every element explicitly.

use crate::core::traits::{Scalar, VectorGet};
use crate::error::{Result, assert_index, check_index};
use std::ops::{Index, IndexMut};

/// Owned dense vector.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DenseVector<T> {
    data: Vec<T>,
}

impl<T: Scalar> DenseVector<T> {
    /// Zero-filled vector of length `len`.
    pub fn new(len: usize) -> Self {
        Self::from_elem(len, T::zero())
    }

    /// Vector of length `len` with every element equal to `fill`.
    pub fn from_elem(len: usize, fill: T) -> Self {
        Self { data: vec![fill; len] }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element `i`, or `IndexOutOfRange` when `i >= len`.
    pub fn get(&self, i: usize) -> Result<T> {
        check_index(i, self.len())?;
        Ok(self.data[i])
    }

    /// Overwrite element `i`, or `IndexOutOfRange` when `i >= len`.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        check_index(i, self.len())?;
        self.data[i] = value;
        Ok(())
    }

    /// Grow or shrink to `len`, filling new slots with `fill`.
    pub fn resize(&mut self, len: usize, fill: T) {
        self.data.resize(len, fill);
    }

    /// Euclidean norm ‖x‖₂.
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// New vector with `c` added to every element.
    pub fn add_scalar(&self, c: T) -> Self {
        self.map(|x| x + c)
    }

    /// New vector with `c` subtracted from every element.
    pub fn sub_scalar(&self, c: T) -> Self {
        self.map(|x| x - c)
    }

    /// New vector with every element multiplied by `c`.
    pub fn scale(&self, c: T) -> Self {
        self.map(|x| x * c)
    }

    pub(crate) fn map(&self, f: impl Fn(T) -> T) -> Self {
        self.data.iter().map(|&x| f(x)).collect()
    }
}

impl<T> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Copy> From<&[T]> for DenseVector<T> {
    fn from(data: &[T]) -> Self {
        Self { data: data.to_vec() }
    }
}

impl<T> FromIterator<T> for DenseVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> AsRef<[T]> for DenseVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for DenseVector<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        assert_index(i, self.data.len());
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        assert_index(i, self.data.len());
        &mut self.data[i]
    }
}

impl<T: Scalar> VectorGet<T> for DenseVector<T> {
    fn len(&self) -> usize {
        self.data.len()
    }
    fn at(&self, i: usize) -> T {
        self.data[i]
    }
}
