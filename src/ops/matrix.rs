//! Dense matrix kernels: transpose, multiply, matrix-vector, Frobenius norm

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Returns the transpose of `a` as a fresh matrix.
///
/// Works for any rectangular shape; for the square in-place case see
/// [`Matrix::transpose_in_place`].
pub fn transpose(a: &Matrix) -> Matrix {
    let (n, m) = (a.nrows(), a.ncols());
    let mut at = Matrix::zeros(m, n);
    for i in 0..n {
        for j in 0..m {
            at[(j, i)] = a[(i, j)];
        }
    }
    at
}

/// Matrix product `b * c` for shapes `n x m` and `m x p`.
///
/// Every output element is formed in a local accumulator before being
/// written, so the result never depends on partially-written output.
pub fn matmul(b: &Matrix, c: &Matrix) -> Result<Matrix> {
    if b.ncols() != c.nrows() {
        return Err(Error::shape_mismatch(
            &[b.nrows(), b.ncols(), b.ncols()],
            &[b.nrows(), b.ncols(), c.nrows()],
        ));
    }
    let (n, m, p) = (b.nrows(), b.ncols(), c.ncols());
    let mut a = Matrix::zeros(n, p);
    for i in 0..n {
        for j in 0..p {
            let mut acc = 0.0;
            for k in 0..m {
                acc += b[(i, k)] * c[(k, j)];
            }
            a[(i, j)] = acc;
        }
    }
    Ok(a)
}

/// Matrix-vector product `a * x`.
pub fn matvec(a: &Matrix, x: &[f64]) -> Result<Vec<f64>> {
    if a.ncols() != x.len() {
        return Err(Error::shape_mismatch(&[a.ncols()], &[x.len()]));
    }
    let mut y = vec![0.0; a.nrows()];
    for i in 0..a.nrows() {
        let mut acc = 0.0;
        for j in 0..a.ncols() {
            acc += a[(i, j)] * x[j];
        }
        y[i] = acc;
    }
    Ok(y)
}

/// Frobenius norm: square root of the sum of squares of all entries.
pub fn frobenius_norm(a: &Matrix) -> f64 {
    a.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt()
}
