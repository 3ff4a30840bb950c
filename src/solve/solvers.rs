//! Triangular substitution, general solve, inverse, and determinant

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::solve::decompositions::{lu_factor, DEFAULT_PIVOT_TOL};

fn check_rhs_len(n: usize, b: &[f64]) -> Result<()> {
    if b.len() != n {
        return Err(Error::shape_mismatch(&[n], &[b.len()]));
    }
    Ok(())
}

/// Solves `L * y = b` for lower triangular `L`, top row first.
///
/// Divides by the diagonal, so both unit-diagonal factors from
/// [`lu_factor`] and general lower triangular systems are handled; a
/// sub-tolerance diagonal entry is reported as [`Error::SingularMatrix`].
pub fn forward_subst(l: &Matrix, b: &[f64]) -> Result<Vec<f64>> {
    let n = l.require_square()?;
    check_rhs_len(n, b)?;
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += l[(i, j)] * y[j];
        }
        let diag = l[(i, i)];
        if diag.abs() < DEFAULT_PIVOT_TOL {
            return Err(Error::SingularMatrix {
                pivot: diag.abs(),
                tolerance: DEFAULT_PIVOT_TOL,
            });
        }
        y[i] = (b[i] - sum) / diag;
    }
    Ok(y)
}

/// Solves `U * x = y` for upper triangular `U`, bottom row first.
pub fn back_subst(u: &Matrix, y: &[f64]) -> Result<Vec<f64>> {
    let n = u.require_square()?;
    check_rhs_len(n, y)?;
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += u[(i, j)] * x[j];
        }
        let diag = u[(i, i)];
        if diag.abs() < DEFAULT_PIVOT_TOL {
            return Err(Error::SingularMatrix {
                pivot: diag.abs(),
                tolerance: DEFAULT_PIVOT_TOL,
            });
        }
        x[i] = (y[i] - sum) / diag;
    }
    Ok(x)
}

/// Solves `A * x = b` by LU factorization, permutation, and two triangular
/// substitutions.
pub fn solve(a: &Matrix, b: &[f64]) -> Result<Vec<f64>> {
    let n = a.require_square()?;
    check_rhs_len(n, b)?;
    let factors = lu_factor(a)?;
    let pb = factors.permute(b);
    let y = forward_subst(&factors.l, &pb)?;
    back_subst(&factors.u, &y)
}

/// Matrix inverse via one LU factorization and `n` identity-column solves.
pub fn inverse(a: &Matrix) -> Result<Matrix> {
    let n = a.require_square()?;
    let factors = lu_factor(a)?;
    let mut ai = Matrix::zeros(n, n);
    let mut e = vec![0.0; n];
    for col in 0..n {
        e.fill(0.0);
        e[col] = 1.0;
        let pe = factors.permute(&e);
        let y = forward_subst(&factors.l, &pe)?;
        let x = back_subst(&factors.u, &y)?;
        for row in 0..n {
            ai[(row, col)] = x[row];
        }
    }
    Ok(ai)
}

/// Determinant via LU: `(-1)^num_swaps * prod(U[i][i])`.
///
/// A matrix the factorization rejects as singular has determinant zero (to
/// within the pivot tolerance), so that case returns `Ok(0.0)` rather than
/// an error.
pub fn det(a: &Matrix) -> Result<f64> {
    let n = a.require_square()?;
    let factors = match lu_factor(a) {
        Ok(f) => f,
        Err(Error::SingularMatrix { .. }) => return Ok(0.0),
        Err(e) => return Err(e),
    };
    let mut d = if factors.num_swaps % 2 == 0 { 1.0 } else { -1.0 };
    for i in 0..n {
        d *= factors.u[(i, i)];
    }
    Ok(d)
}
