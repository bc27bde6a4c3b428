//! Container-container operators, one impl set per operand pair.

use super::{Dot, TryAdd, TryMul, TrySub};
use crate::core::kernels;
use crate::core::traits::Scalar;
use crate::error::Result;
use crate::matrix::{DenseMatrix, SparseMatrix};
use crate::vector::{DenseVector, SparseVector};
use std::ops::{Add, Mul, Sub};

/// `std::ops` sugar over a fallible impl, for `&a op &b` and `a op b`.
macro_rules! binop_sugar {
    ($Op:ident, $method:ident, $try:ident, $Lhs:ident, $Rhs:ident, $Out:ident) => {
        impl<'a, 'b, T: Scalar> $Op<&'b $Rhs<T>> for &'a $Lhs<T> {
            type Output = $Out<T>;
            fn $method(self, rhs: &'b $Rhs<T>) -> $Out<T> {
                self.$try(rhs).unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl<T: Scalar> $Op<$Rhs<T>> for $Lhs<T> {
            type Output = $Out<T>;
            fn $method(self, rhs: $Rhs<T>) -> $Out<T> {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! elementwise {
    ($Lhs:ident, $Rhs:ident, $Out:ident, $kernel:ident) => {
        impl<T: Scalar> TryAdd<$Rhs<T>> for $Lhs<T> {
            type Output = $Out<T>;
            fn try_add(&self, rhs: &$Rhs<T>) -> Result<$Out<T>> {
                kernels::$kernel("add", self, rhs, |a, b| a + b)
            }
        }

        impl<T: Scalar> TrySub<$Rhs<T>> for $Lhs<T> {
            type Output = $Out<T>;
            fn try_sub(&self, rhs: &$Rhs<T>) -> Result<$Out<T>> {
                kernels::$kernel("subtract", self, rhs, |a, b| a - b)
            }
        }

        binop_sugar!(Add, add, try_add, $Lhs, $Rhs, $Out);
        binop_sugar!(Sub, sub, try_sub, $Lhs, $Rhs, $Out);
    };
}

macro_rules! product {
    ($Lhs:ident, $Rhs:ident, $Out:ident, $kernel:ident) => {
        impl<T: Scalar> TryMul<$Rhs<T>> for $Lhs<T> {
            type Output = $Out<T>;
            fn try_mul(&self, rhs: &$Rhs<T>) -> Result<$Out<T>> {
                kernels::$kernel(self, rhs)
            }
        }

        binop_sugar!(Mul, mul, try_mul, $Lhs, $Rhs, $Out);
    };
}

elementwise!(DenseVector, DenseVector, DenseVector, zip_vectors);
elementwise!(DenseVector, SparseVector, DenseVector, zip_vectors);
elementwise!(SparseVector, DenseVector, DenseVector, zip_vectors);
elementwise!(SparseVector, SparseVector, DenseVector, zip_vectors);

elementwise!(DenseMatrix, DenseMatrix, DenseMatrix, zip_matrices);
elementwise!(DenseMatrix, SparseMatrix, DenseMatrix, zip_matrices);
elementwise!(SparseMatrix, DenseMatrix, DenseMatrix, zip_matrices);
elementwise!(SparseMatrix, SparseMatrix, DenseMatrix, zip_matrices);

product!(DenseMatrix, DenseMatrix, DenseMatrix, mat_mat);
product!(DenseMatrix, SparseMatrix, DenseMatrix, mat_mat);
product!(SparseMatrix, DenseMatrix, DenseMatrix, mat_mat);
product!(SparseMatrix, SparseMatrix, DenseMatrix, mat_mat);

product!(DenseMatrix, DenseVector, DenseVector, mat_vec);
product!(DenseMatrix, SparseVector, DenseVector, mat_vec);
product!(SparseMatrix, DenseVector, DenseVector, mat_vec);
product!(SparseMatrix, SparseVector, DenseVector, mat_vec);

product!(DenseVector, DenseMatrix, DenseVector, vec_mat);
product!(DenseVector, SparseMatrix, DenseVector, vec_mat);
product!(SparseVector, DenseMatrix, DenseVector, vec_mat);
product!(SparseVector, SparseMatrix, DenseVector, vec_mat);

macro_rules! dense_dot {
    ($Lhs:ident, $Rhs:ident) => {
        impl<T: Scalar> Dot<$Rhs<T>> for $Lhs<T> {
            type Output = T;
            fn try_dot(&self, rhs: &$Rhs<T>) -> Result<T> {
                kernels::dot(self, rhs)
            }
        }
    };
}

dense_dot!(DenseVector, DenseVector);
dense_dot!(DenseVector, SparseVector);
dense_dot!(SparseVector, DenseVector);

impl<T: Scalar> Dot<SparseVector<T>> for SparseVector<T> {
    type Output = T;
    fn try_dot(&self, rhs: &SparseVector<T>) -> Result<T> {
        self.sparse_dot(rhs)
    }
}
