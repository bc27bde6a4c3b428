//! Random operand builders shared by the integration tests.
//!
//! Values are drawn uniformly from [-5, 5). Sparse operands get a random
//! default and explicit overrides on 40% of their cells.

#![allow(dead_code)]

use faer::Mat;
use matvec::{DenseMatrix, DenseVector, SparseMatrix, SparseVector};
use rand::Rng;

fn value(rng: &mut impl Rng) -> f64 {
    rng.gen_range(-5.0..5.0)
}

/// Random size in 5..10.
pub fn dim() -> usize {
    rand::thread_rng().gen_range(5..10)
}

pub fn random_vector(n: usize) -> DenseVector<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| value(&mut rng)).collect()
}

pub fn random_matrix(nrows: usize, ncols: usize) -> DenseMatrix<f64> {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..nrows * ncols).map(|_| value(&mut rng)).collect();
    DenseMatrix::from_row_major(nrows, ncols, data).unwrap()
}

pub fn random_sparse_vector(n: usize) -> SparseVector<f64> {
    let mut rng = rand::thread_rng();
    let mut v = SparseVector::new(value(&mut rng), n);
    let target = (0.4 * n as f64) as usize;
    while v.nnz() < target {
        let i = rng.gen_range(0..n);
        v.set(i, value(&mut rng)).unwrap();
    }
    v
}

pub fn random_sparse_matrix(nrows: usize, ncols: usize) -> SparseMatrix<f64> {
    let mut rng = rand::thread_rng();
    let mut m = SparseMatrix::new(value(&mut rng), nrows, ncols);
    let target = (0.4 * (nrows * ncols) as f64) as usize;
    while m.nnz() < target {
        let (i, j) = (rng.gen_range(0..nrows), rng.gen_range(0..ncols));
        m.set(i, j, value(&mut rng)).unwrap();
    }
    m
}

/// Column matrix holding `v`.
pub fn column(v: &DenseVector<f64>) -> Mat<f64> {
    Mat::from_fn(v.len(), 1, |i, _| v[i])
}

/// Product computed by faer, used as the reference result.
pub fn faer_product(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>) -> DenseMatrix<f64> {
    let p = &a.to_faer() * &b.to_faer();
    DenseMatrix::from_faer(&p)
}

/// `A * x` computed by faer.
pub fn faer_mat_vec(a: &DenseMatrix<f64>, x: &DenseVector<f64>) -> DenseVector<f64> {
    let y = &a.to_faer() * &column(x);
    (0..y.nrows()).map(|i| y[(i, 0)]).collect()
}

/// Inverse computed by faer's full-pivoting LU against the identity.
pub fn faer_inverse(a: &DenseMatrix<f64>) -> DenseMatrix<f64> {
    use faer::linalg::solvers::SolveCore;
    let n = a.nrows();
    let lu = faer::linalg::solvers::FullPivLu::new(a.to_faer().as_ref());
    let mut inv = Mat::<f64>::identity(n, n);
    lu.solve_in_place_with_conj(faer::Conj::No, inv.as_mut());
    DenseMatrix::from_faer(&inv)
}

/// Random matrix made well conditioned by a dominant diagonal.
pub fn random_invertible(n: usize) -> DenseMatrix<f64> {
    let mut a = random_matrix(n, n);
    for i in 0..n {
        a[i][i] += 10.0 * n as f64;
    }
    a
}
