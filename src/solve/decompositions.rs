//! LU factorization with partial pivoting (Doolittle algorithm)

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Default magnitude below which a pivot is treated as zero.
pub const DEFAULT_PIVOT_TOL: f64 = 1e-12;

/// LU factorization result: `P * A = L * U`
///
/// `L` is lower triangular with unit diagonal, `U` is upper triangular and
/// `P` is the row permutation recorded as successive swaps in `pivots`.
#[derive(Debug, Clone)]
pub struct LuFactors {
    /// Unit lower triangular factor.
    pub l: Matrix,
    /// Upper triangular factor.
    pub u: Matrix,
    /// Pivot indices: at step `i`, row `i` was swapped with row `pivots[i]`.
    pub pivots: Vec<usize>,
    /// Number of actual row swaps (determinant sign).
    pub num_swaps: usize,
}

impl LuFactors {
    /// Applies the row permutation `P` to a vector.
    pub fn permute(&self, b: &[f64]) -> Vec<f64> {
        let mut pb = b.to_vec();
        for (i, &p) in self.pivots.iter().enumerate() {
            if p != i {
                pb.swap(i, p);
            }
        }
        pb
    }

    /// Applies the row permutation `P` to a matrix.
    pub fn permute_rows(&self, a: &Matrix) -> Matrix {
        let mut pa = a.clone();
        for (i, &p) in self.pivots.iter().enumerate() {
            pa.swap_rows(i, p);
        }
        pa
    }
}

/// Factors a square matrix as `P * A = L * U` using [`DEFAULT_PIVOT_TOL`].
pub fn lu_factor(a: &Matrix) -> Result<LuFactors> {
    lu_factor_with_tol(a, DEFAULT_PIVOT_TOL)
}

/// Factors a square matrix as `P * A = L * U` with an explicit pivot tolerance.
///
/// At each column the largest remaining entry is chosen as pivot; when even
/// that entry's magnitude is below `tol` the matrix is reported as
/// [`Error::SingularMatrix`].
pub fn lu_factor_with_tol(a: &Matrix, tol: f64) -> Result<LuFactors> {
    let n = a.require_square()?;
    if tol < 0.0 {
        return Err(Error::invalid_argument(
            "tol",
            "pivot tolerance must be non-negative".to_string(),
        ));
    }

    // Working copy holding L below the diagonal and U on and above it.
    let mut lu = a.as_slice().to_vec();
    let mut pivots = vec![0usize; n];
    let mut num_swaps = 0usize;

    for col in 0..n {
        // Partial pivoting: largest magnitude in column col, rows col..n.
        let mut pivot_row = col;
        let mut max_val = lu[col * n + col].abs();
        for row in (col + 1)..n {
            let val = lu[row * n + col].abs();
            if val > max_val {
                max_val = val;
                pivot_row = row;
            }
        }
        pivots[col] = pivot_row;

        if pivot_row != col {
            for j in 0..n {
                lu.swap(col * n + j, pivot_row * n + j);
            }
            num_swaps += 1;
        }

        if max_val < tol {
            return Err(Error::SingularMatrix {
                pivot: max_val,
                tolerance: tol,
            });
        }

        let pivot = lu[col * n + col];
        for row in (col + 1)..n {
            lu[row * n + col] /= pivot;
        }
        for row in (col + 1)..n {
            let multiplier = lu[row * n + col];
            for j in (col + 1)..n {
                lu[row * n + j] -= multiplier * lu[col * n + j];
            }
        }
    }

    // Split the packed factor into explicit L and U.
    let mut l = Matrix::identity(n);
    let mut u = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            if j < i {
                l[(i, j)] = lu[i * n + j];
            } else {
                u[(i, j)] = lu[i * n + j];
            }
        }
    }

    Ok(LuFactors {
        l,
        u,
        pivots,
        num_swaps,
    })
}
