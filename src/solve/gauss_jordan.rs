//! Gauss-Jordan elimination with full pivoting
//!
//! Transforms `A` in place into its inverse while reducing an `n x m` block
//! of right-hand sides to the corresponding solutions in the same pass, which
//! is the cheap way to solve several systems against one `A`.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::solve::decompositions::DEFAULT_PIVOT_TOL;

/// Gauss-Jordan elimination using [`DEFAULT_PIVOT_TOL`].
///
/// On success `a` holds `A^-1` and every column of `b` holds the solution of
/// `A * x = b_col`. `a` must be square and `b` must have matching row count;
/// `b` may have zero columns when only the inverse is wanted.
pub fn gauss_jordan(a: &mut Matrix, b: &mut Matrix) -> Result<()> {
    gauss_jordan_with_tol(a, b, DEFAULT_PIVOT_TOL)
}

/// Gauss-Jordan elimination with an explicit pivot tolerance.
///
/// Full pivoting: each step selects the largest remaining entry over all
/// unreduced rows and columns. A sub-tolerance pivot fails with
/// [`Error::SingularMatrix`]; `a` and `b` are left in a partially reduced
/// state in that case and must not be reused.
pub fn gauss_jordan_with_tol(a: &mut Matrix, b: &mut Matrix, tol: f64) -> Result<()> {
    let n = a.require_square()?;
    if b.nrows() != n {
        return Err(Error::shape_mismatch(&[n, b.ncols()], &[b.nrows(), b.ncols()]));
    }
    let m = b.ncols();

    // Per-step bookkeeping for the column unscramble at the end.
    let mut indxr = vec![0usize; n];
    let mut indxc = vec![0usize; n];
    let mut ipiv = vec![false; n];

    let av = a.as_mut_slice();
    let bv = b.as_mut_slice();

    for step in 0..n {
        // Full pivot search over rows and columns not yet reduced.
        let mut big = 0.0;
        let mut irow = 0;
        let mut icol = 0;
        for j in 0..n {
            if ipiv[j] {
                continue;
            }
            for k in 0..n {
                if !ipiv[k] && av[j * n + k].abs() >= big {
                    big = av[j * n + k].abs();
                    irow = j;
                    icol = k;
                }
            }
        }
        ipiv[icol] = true;

        // Move the pivot onto the diagonal by a row swap.
        if irow != icol {
            for k in 0..n {
                av.swap(irow * n + k, icol * n + k);
            }
            for k in 0..m {
                bv.swap(irow * m + k, icol * m + k);
            }
        }
        indxr[step] = irow;
        indxc[step] = icol;

        let pivot = av[icol * n + icol];
        if pivot.abs() < tol {
            return Err(Error::SingularMatrix {
                pivot: pivot.abs(),
                tolerance: tol,
            });
        }

        // Scale the pivot row; the pivot column of A is rebuilt as the
        // corresponding inverse column, starting from the implicit identity.
        let pivinv = 1.0 / pivot;
        av[icol * n + icol] = 1.0;
        for k in 0..n {
            av[icol * n + k] *= pivinv;
        }
        for k in 0..m {
            bv[icol * m + k] *= pivinv;
        }

        // Eliminate the pivot column from every other row.
        for ll in 0..n {
            if ll == icol {
                continue;
            }
            let factor = av[ll * n + icol];
            av[ll * n + icol] = 0.0;
            for k in 0..n {
                av[ll * n + k] -= factor * av[icol * n + k];
            }
            for k in 0..m {
                bv[ll * m + k] -= factor * bv[icol * m + k];
            }
        }
    }

    // Undo the column permutation introduced by full pivoting.
    for step in (0..n).rev() {
        if indxr[step] != indxc[step] {
            for k in 0..n {
                av.swap(k * n + indxr[step], k * n + indxc[step]);
            }
        }
    }
    Ok(())
}
