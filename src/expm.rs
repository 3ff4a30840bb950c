//! Matrix exponential via Taylor series

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::ops::matrix::{frobenius_norm, matmul};
use crate::ops::vector::{add_assign, scale_assign};

/// Iteration cap for the Taylor series.
///
/// Terms of `e^A` can grow for many iterations before the factorial wins, so
/// the cap has to be generous; a series still above `eps` after this many
/// terms is reported as non-convergent rather than looped on forever.
pub const EXPM_MAX_TERMS: usize = 512;

/// Computes `e^A` by summing the Taylor series `sum A^k / k!`.
///
/// Terms are accumulated until the Frobenius norm of the current term drops
/// below `eps`. Requires square `a` and positive `eps`; failure to converge
/// within [`EXPM_MAX_TERMS`] terms is [`Error::NonConvergence`].
pub fn expm(a: &Matrix, eps: f64) -> Result<Matrix> {
    let n = a.require_square()?;
    if !(eps > 0.0) {
        return Err(Error::invalid_argument(
            "eps",
            format!("convergence threshold must be positive, got {eps}"),
        ));
    }

    let mut result = Matrix::identity(n);
    let mut term = Matrix::identity(n);
    for k in 1..=EXPM_MAX_TERMS {
        // term <- term * A / k
        term = matmul(&term, a)?;
        scale_assign(1.0 / k as f64, term.as_mut_slice());
        add_assign(result.as_mut_slice(), term.as_slice())?;
        if frobenius_norm(&term) < eps {
            return Ok(result);
        }
    }
    Err(Error::NonConvergence {
        op: "expm",
        iterations: EXPM_MAX_TERMS,
    })
}
