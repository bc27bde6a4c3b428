//! Every container-container and container-scalar operator against a dense reference.
//!
//! Operands are random (dense or sparse, 40% filled). Products are checked against
//! faer on the materialized operands; sums, differences, dot products and scalar
//! operations against straightforward loops over the materialized operands. Every
//! comparison uses a tolerance of 1e-8, the dot product included.

mod common;

use approx::assert_abs_diff_eq;
use common::*;
use matvec::{DenseMatrix, DenseVector, Dot, LinalgError, TryAdd, TryMul, TrySub};

const EPS: f64 = 1e-8;

fn zip_ref(
    a: &DenseMatrix<f64>,
    b: &DenseMatrix<f64>,
    f: impl Fn(f64, f64) -> f64,
) -> DenseMatrix<f64> {
    DenseMatrix::from_fn(a.nrows(), a.ncols(), |i, j| f(a[i][j], b[i][j]))
}

fn zip_vec_ref(
    a: &DenseVector<f64>,
    b: &DenseVector<f64>,
    f: impl Fn(f64, f64) -> f64,
) -> DenseVector<f64> {
    a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect()
}

fn dot_ref(a: &DenseVector<f64>, b: &DenseVector<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Row vector times matrix, via the transpose: `(Aᵀ x)ᵀ`.
fn vec_mat_ref(x: &DenseVector<f64>, a: &DenseMatrix<f64>) -> DenseVector<f64> {
    faer_mat_vec(&a.transpose(), x)
}

#[test]
fn matrix_sums_and_differences() {
    let (r, c) = (dim(), dim());
    let m_a = random_matrix(r, c);
    let m_b = random_matrix(r, c);
    let s_a = random_sparse_matrix(r, c);
    let s_b = random_sparse_matrix(r, c);
    let (d_a, d_b) = (s_a.full_matrix(), s_b.full_matrix());

    assert_abs_diff_eq!(&m_a + &m_b, zip_ref(&m_a, &m_b, |x, y| x + y), epsilon = EPS);
    assert_abs_diff_eq!(&m_a + &s_b, zip_ref(&m_a, &d_b, |x, y| x + y), epsilon = EPS);
    assert_abs_diff_eq!(&s_a + &m_b, zip_ref(&d_a, &m_b, |x, y| x + y), epsilon = EPS);
    assert_abs_diff_eq!(&s_a + &s_b, zip_ref(&d_a, &d_b, |x, y| x + y), epsilon = EPS);

    assert_abs_diff_eq!(&m_a - &m_b, zip_ref(&m_a, &m_b, |x, y| x - y), epsilon = EPS);
    assert_abs_diff_eq!(&m_a - &s_b, zip_ref(&m_a, &d_b, |x, y| x - y), epsilon = EPS);
    assert_abs_diff_eq!(&s_a - &m_b, zip_ref(&d_a, &m_b, |x, y| x - y), epsilon = EPS);
    assert_abs_diff_eq!(&s_a - &s_b, zip_ref(&d_a, &d_b, |x, y| x - y), epsilon = EPS);
}

#[test]
fn vector_sums_and_differences() {
    let n = dim();
    let v_a = random_vector(n);
    let v_b = random_vector(n);
    let s_a = random_sparse_vector(n);
    let s_b = random_sparse_vector(n);
    let (d_a, d_b) = (s_a.to_dense(), s_b.to_dense());

    assert_abs_diff_eq!(&v_a + &v_b, zip_vec_ref(&v_a, &v_b, |x, y| x + y), epsilon = EPS);
    assert_abs_diff_eq!(&v_a + &s_b, zip_vec_ref(&v_a, &d_b, |x, y| x + y), epsilon = EPS);
    assert_abs_diff_eq!(&s_a + &v_b, zip_vec_ref(&d_a, &v_b, |x, y| x + y), epsilon = EPS);
    assert_abs_diff_eq!(&s_a + &s_b, zip_vec_ref(&d_a, &d_b, |x, y| x + y), epsilon = EPS);

    assert_abs_diff_eq!(&v_a - &v_b, zip_vec_ref(&v_a, &v_b, |x, y| x - y), epsilon = EPS);
    assert_abs_diff_eq!(&v_a - &s_b, zip_vec_ref(&v_a, &d_b, |x, y| x - y), epsilon = EPS);
    assert_abs_diff_eq!(&s_a - &v_b, zip_vec_ref(&d_a, &v_b, |x, y| x - y), epsilon = EPS);
    assert_abs_diff_eq!(&s_a - &s_b, zip_vec_ref(&d_a, &d_b, |x, y| x - y), epsilon = EPS);
}

#[test]
fn matrix_products() {
    let (n1, n2, n3) = (dim(), dim(), dim());
    let m_a = random_matrix(n1, n2);
    let m_b = random_matrix(n2, n3);
    let s_a = random_sparse_matrix(n1, n2);
    let s_b = random_sparse_matrix(n2, n3);
    let (d_a, d_b) = (s_a.full_matrix(), s_b.full_matrix());

    assert_abs_diff_eq!(&m_a * &m_b, faer_product(&m_a, &m_b), epsilon = EPS);
    assert_abs_diff_eq!(&m_a * &s_b, faer_product(&m_a, &d_b), epsilon = EPS);
    assert_abs_diff_eq!(&s_a * &m_b, faer_product(&d_a, &m_b), epsilon = EPS);
    assert_abs_diff_eq!(&s_a * &s_b, faer_product(&d_a, &d_b), epsilon = EPS);
    assert_eq!((&s_a * &s_b).shape(), (n1, n3));
}

#[test]
fn matrix_vector_products() {
    let (n1, n2) = (dim(), dim());
    let m = random_matrix(n1, n2);
    let s = random_sparse_matrix(n1, n2);
    let v = random_vector(n2);
    let sv = random_sparse_vector(n2);
    let (d, dv) = (s.full_matrix(), sv.to_dense());

    assert_abs_diff_eq!(&m * &v, faer_mat_vec(&m, &v), epsilon = EPS);
    assert_abs_diff_eq!(&m * &sv, faer_mat_vec(&m, &dv), epsilon = EPS);
    assert_abs_diff_eq!(&s * &v, faer_mat_vec(&d, &v), epsilon = EPS);
    assert_abs_diff_eq!(&s * &sv, faer_mat_vec(&d, &dv), epsilon = EPS);
    assert_eq!((&s * &sv).len(), n1);
}

#[test]
fn vector_matrix_products() {
    let (n2, n3) = (dim(), dim());
    let v = random_vector(n2);
    let sv = random_sparse_vector(n2);
    let m = random_matrix(n2, n3);
    let s = random_sparse_matrix(n2, n3);
    let (d, dv) = (s.full_matrix(), sv.to_dense());

    assert_abs_diff_eq!(&v * &m, vec_mat_ref(&v, &m), epsilon = EPS);
    assert_abs_diff_eq!(&v * &s, vec_mat_ref(&v, &d), epsilon = EPS);
    assert_abs_diff_eq!(&sv * &m, vec_mat_ref(&dv, &m), epsilon = EPS);
    assert_abs_diff_eq!(&sv * &s, vec_mat_ref(&dv, &d), epsilon = EPS);
    assert_eq!((&sv * &s).len(), n3);
}

#[test]
fn dot_products() {
    let n = dim();
    let v_a = random_vector(n);
    let v_b = random_vector(n);
    let s_a = random_sparse_vector(n);
    let s_b = random_sparse_vector(n);
    let (d_a, d_b) = (s_a.to_dense(), s_b.to_dense());

    assert_abs_diff_eq!(v_a.dot(&v_b), dot_ref(&v_a, &v_b), epsilon = EPS);
    assert_abs_diff_eq!(v_a.dot(&s_b), dot_ref(&v_a, &d_b), epsilon = EPS);
    assert_abs_diff_eq!(s_a.dot(&v_b), dot_ref(&d_a, &v_b), epsilon = EPS);
    assert_abs_diff_eq!(s_a.dot(&s_b), dot_ref(&d_a, &d_b), epsilon = EPS);
}

#[test]
fn scalar_operations() {
    let c = 3.25_f64;
    let (r, k) = (dim(), dim());
    let m = random_matrix(r, k);
    let s = random_sparse_matrix(r, k);
    let v = random_vector(k);
    let sv = random_sparse_vector(k);
    let (d, dv) = (s.full_matrix(), sv.to_dense());
    let shifted = |m: &DenseMatrix<f64>, f: fn(f64) -> f64| {
        DenseMatrix::from_fn(m.nrows(), m.ncols(), |i, j| f(m[i][j]))
    };

    assert_abs_diff_eq!(&m + c, shifted(&m, |x| x + 3.25), epsilon = EPS);
    assert_abs_diff_eq!(&m - c, shifted(&m, |x| x - 3.25), epsilon = EPS);
    assert_abs_diff_eq!(&m * c, shifted(&m, |x| x * 3.25), epsilon = EPS);
    assert_abs_diff_eq!((&s + c).full_matrix(), shifted(&d, |x| x + 3.25), epsilon = EPS);
    assert_abs_diff_eq!((&s - c).full_matrix(), shifted(&d, |x| x - 3.25), epsilon = EPS);
    assert_abs_diff_eq!((&s * c).full_matrix(), shifted(&d, |x| x * 3.25), epsilon = EPS);

    let expected: DenseVector<f64> = v.iter().map(|x| x * c).collect();
    assert_abs_diff_eq!(&v * c, expected, epsilon = EPS);
    let expected: DenseVector<f64> = v.iter().map(|x| x + c).collect();
    assert_abs_diff_eq!(&v + c, expected, epsilon = EPS);
    let expected: DenseVector<f64> = v.iter().map(|x| x - c).collect();
    assert_abs_diff_eq!(&v - c, expected, epsilon = EPS);
    let expected: DenseVector<f64> = dv.iter().map(|x| x * c).collect();
    assert_abs_diff_eq!((&sv * c).to_dense(), expected, epsilon = EPS);
    let expected: DenseVector<f64> = dv.iter().map(|x| x + c).collect();
    assert_abs_diff_eq!((&sv + c).to_dense(), expected, epsilon = EPS);
    let expected: DenseVector<f64> = dv.iter().map(|x| x - c).collect();
    assert_abs_diff_eq!((&sv - c).to_dense(), expected, epsilon = EPS);
}

#[test]
fn incompatible_shapes_are_errors() {
    let m = random_matrix(3, 4);
    let s = random_sparse_matrix(3, 4);
    let v = random_vector(3);
    let sv = random_sparse_vector(5);
    assert!(m.try_mul(&s).is_err());
    assert!(m.try_mul(&v).is_err());
    assert!(s.try_mul(&sv).is_err());
    assert!(sv.try_mul(&m).is_err());
    assert!(v.try_mul(&m).is_ok());
    assert!(v.try_dot(&sv).is_err());
    assert!(sv.try_dot(&sv).is_ok());
}

#[test]
fn elementwise_shape_mismatch_reports_both_shapes() {
    let m = random_matrix(3, 4);
    let m_t = random_matrix(4, 3);
    let s = random_sparse_matrix(4, 3);
    let s_wide = random_sparse_matrix(3, 5);

    assert_eq!(
        m.try_add(&s),
        Err(LinalgError::DimensionMismatch { op: "add", left: (3, 4), right: (4, 3) })
    );
    assert_eq!(
        m.try_sub(&s),
        Err(LinalgError::DimensionMismatch { op: "subtract", left: (3, 4), right: (4, 3) })
    );
    assert!(m.try_add(&m_t).is_err());
    assert!(m.try_sub(&m_t).is_err());
    assert!(s.try_add(&m).is_err());
    assert!(s.try_sub(&s_wide).is_err());
    assert!(s_wide.try_add(&s).is_err());

    let v = random_vector(4);
    let sv = random_sparse_vector(6);
    assert_eq!(
        sv.try_add(&v),
        Err(LinalgError::DimensionMismatch { op: "add", left: (6, 1), right: (4, 1) })
    );
    assert_eq!(
        v.try_sub(&sv),
        Err(LinalgError::DimensionMismatch { op: "subtract", left: (4, 1), right: (6, 1) })
    );
}

#[test]
#[should_panic(expected = "dimension mismatch in add")]
fn mismatched_sparse_sum_operator_panics() {
    let _ = &random_sparse_matrix(2, 3) + &random_matrix(3, 2);
}
