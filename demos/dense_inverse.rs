use matvec::{DenseMatrix, DenseVector, SparseMatrix, SparseVector};
use rand::Rng;

fn main() {
    let n = 5;
    // build a random SPD matrix: A = MᵀM + I
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(0.0..1.0)).collect();
    let m = DenseMatrix::from_row_major(n, n, data).unwrap();
    let mut a = &m.transpose() * &m;
    for i in 0..n {
        a[i][i] += 1.0;
    }

    let inv = a.inverse().unwrap();
    let residual = (&inv * &a - DenseMatrix::identity(n)).max_abs();
    println!("A⁻¹ = {inv:?}");
    println!("max |A⁻¹A - I| = {residual:e}");

    // solve A x = b through the inverse
    let b: DenseVector<f64> = (0..n).map(|_| rng.gen_range(0.0..1.0)).collect();
    let x = &inv * &b;
    println!("x = {:?}, |Ax - b| = {:e}", x.as_slice(), (&(&a * &x) - &b).norm());

    // sparse operands mix freely with dense ones
    let mut s = SparseMatrix::new(0.0, n, n);
    for i in 0..n {
        s.set(i, i, 2.0).unwrap();
    }
    let mut ones = SparseVector::new(1.0, n);
    ones.set(0, -1.0).unwrap();
    println!("S * ones = {:?}", (&s * &ones).as_slice());
    println!("S⁻¹ = {:?}", s.inverse().unwrap());
}
