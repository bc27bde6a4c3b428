//! Dense row-major matrix.
//!
//! A `DenseMatrix` owns `nrows` [`DenseVector`] rows of identical length
//! `ncols`. Conversions to and from `faer::Mat<f64>` are provided for
//! interoperating with faer-based code.

use crate::core::traits::{MatShape, MatrixGet, Scalar};
use crate::error::{LinalgError, Result, assert_index, check_index};
use crate::vector::DenseVector;
use faer::Mat;
use std::ops::{Index, IndexMut};

/// Owned dense matrix stored as a sequence of rows.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DenseMatrix<T> {
    rows: Vec<DenseVector<T>>,
    ncols: usize,
}

impl<T: Scalar> DenseMatrix<T> {
    /// Build from nested rows. All rows must have the same, non-zero length;
    /// an empty outer sequence is the 0×0 matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let ncols = match rows.first() {
            None => return Ok(Self::zeros(0, 0)),
            Some(first) if first.is_empty() => {
                return Err(LinalgError::MalformedMatrix(
                    "first row has length 0".to_string(),
                ));
            }
            Some(first) => first.len(),
        };
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(LinalgError::MalformedMatrix(format!(
                "row {i} has length {}, expected {ncols}",
                row.len()
            )));
        }
        Ok(Self {
            rows: rows.into_iter().map(DenseVector::from).collect(),
            ncols,
        })
    }

    /// Build from row-major storage; `data.len()` must equal `nrows * ncols`.
    pub fn from_row_major(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(LinalgError::MalformedMatrix(format!(
                "{} values cannot fill a {nrows}x{ncols} matrix",
                data.len()
            )));
        }
        if ncols == 0 {
            return Ok(Self::zeros(nrows, 0));
        }
        Ok(Self {
            rows: data.chunks(ncols).map(DenseVector::from).collect(),
            ncols,
        })
    }

    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            rows: (0..nrows)
                .map(|i| (0..ncols).map(|j| f(i, j)).collect())
                .collect(),
            ncols,
        }
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| T::zero())
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Assemble already-validated rows, each of length `ncols`.
    pub(crate) fn from_vectors(rows: Vec<DenseVector<T>>, ncols: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == ncols));
        Self { rows, ncols }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols
    }

    /// Element `(i, j)`, or `IndexOutOfRange` on either axis.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        check_index(i, self.nrows())?;
        check_index(j, self.ncols)?;
        Ok(self.rows[i][j])
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        check_index(i, self.nrows())?;
        check_index(j, self.ncols)?;
        self.rows[i][j] = value;
        Ok(())
    }

    pub fn row(&self, i: usize) -> Result<&DenseVector<T>> {
        check_index(i, self.nrows())?;
        Ok(&self.rows[i])
    }

    pub fn column(&self, j: usize) -> Result<DenseVector<T>> {
        check_index(j, self.ncols)?;
        Ok(self.rows.iter().map(|r| r[j]).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = &DenseVector<T>> {
        self.rows.iter()
    }

    /// New matrix with swapped dimensions, `result[j][i] = self[i][j]`.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows(), |i, j| self.rows[j][i])
    }

    /// Element `(i, j)` of the transpose, read without materializing it.
    pub fn t(&self, i: usize, j: usize) -> Result<T> {
        self.get(j, i)
    }

    /// Largest absolute element, or zero for an empty matrix.
    pub fn max_abs(&self) -> T {
        self.rows
            .iter()
            .flat_map(|r| r.iter())
            .fold(T::zero(), |acc, &x| acc.max(x.abs()))
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
            rows: self.rows.iter().map(|r| r.map(&f)).collect(),
            ncols: self.ncols,
        }
    }

    pub(crate) fn into_rows(self) -> Vec<Vec<T>> {
        self.rows.into_iter().map(DenseVector::into_vec).collect()
    }
}

impl DenseMatrix<f64> {
    /// Copy into a column-major faer matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.nrows(), self.ncols, |i, j| self.rows[i][j])
    }

    /// Copy out of a faer matrix.
    pub fn from_faer(m: &Mat<f64>) -> Self {
        Self::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl<T> Index<usize> for DenseMatrix<T> {
    type Output = [T];
    fn index(&self, i: usize) -> &[T] {
        assert_index(i, self.rows.len());
        self.rows[i].as_ref()
    }
}

impl<T: Scalar> IndexMut<usize> for DenseMatrix<T> {
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        assert_index(i, self.rows.len());
        self.rows[i].as_mut_slice()
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert_index(i, self.rows.len());
        assert_index(j, self.ncols);
        &self.rows[i][j]
    }
}

impl<T> MatShape for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.rows.len()
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T: Scalar> MatrixGet<T> for DenseMatrix<T> {
    fn at(&self, i: usize, j: usize) -> T {
        self.rows[i][j]
    }
}
