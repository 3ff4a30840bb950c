//! Direct linear solvers
//!
//! LU factorization with partial pivoting, triangular substitution, general
//! solve, inverse, determinant, and full-pivoting Gauss-Jordan elimination
//! with multiple simultaneous right-hand sides.
//!
//! Singularity is always decided against a configurable tolerance rather
//! than an exact-zero compare; see [`DEFAULT_PIVOT_TOL`].

mod decompositions;
mod gauss_jordan;
mod solvers;

pub use decompositions::{lu_factor, lu_factor_with_tol, LuFactors, DEFAULT_PIVOT_TOL};
pub use gauss_jordan::{gauss_jordan, gauss_jordan_with_tol};
pub use solvers::{back_subst, det, forward_subst, inverse, solve};
