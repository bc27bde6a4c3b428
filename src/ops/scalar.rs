//! Container-scalar operators for `f32` and `f64`.
//!
//! Sparse containers stay sparse: the scalar is applied to the default value
//! and to every override, which is the same as applying it to every logical
//! element.

use crate::matrix::{DenseMatrix, SparseMatrix};
use crate::vector::{DenseVector, SparseVector};
use std::ops::{Add, Mul, Sub};

macro_rules! scalar_ops {
    ($C:ident, $t:ty) => {
        impl Add<$t> for &$C<$t> {
            type Output = $C<$t>;
            fn add(self, c: $t) -> $C<$t> {
                self.add_scalar(c)
            }
        }

        impl Add<$t> for $C<$t> {
            type Output = $C<$t>;
            fn add(self, c: $t) -> $C<$t> {
                self.add_scalar(c)
            }
        }

        impl Sub<$t> for &$C<$t> {
            type Output = $C<$t>;
            fn sub(self, c: $t) -> $C<$t> {
                self.sub_scalar(c)
            }
        }

        impl Sub<$t> for $C<$t> {
            type Output = $C<$t>;
            fn sub(self, c: $t) -> $C<$t> {
                self.sub_scalar(c)
            }
        }

        impl Mul<$t> for &$C<$t> {
            type Output = $C<$t>;
            fn mul(self, c: $t) -> $C<$t> {
                self.scale(c)
            }
        }

        impl Mul<$t> for $C<$t> {
            type Output = $C<$t>;
            fn mul(self, c: $t) -> $C<$t> {
                self.scale(c)
            }
        }

        impl Mul<&$C<$t>> for $t {
            type Output = $C<$t>;
            fn mul(self, rhs: &$C<$t>) -> $C<$t> {
                rhs.scale(self)
            }
        }

        impl Mul<$C<$t>> for $t {
            type Output = $C<$t>;
            fn mul(self, rhs: $C<$t>) -> $C<$t> {
                rhs.scale(self)
            }
        }
    };
}

scalar_ops!(DenseVector, f32);
scalar_ops!(DenseVector, f64);
scalar_ops!(SparseVector, f32);
scalar_ops!(SparseVector, f64);
scalar_ops!(DenseMatrix, f32);
scalar_ops!(DenseMatrix, f64);
scalar_ops!(SparseMatrix, f32);
scalar_ops!(SparseMatrix, f64);
