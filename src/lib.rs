//! # matr
//!
//! **Dense and sparse matrix kernels for `f64` linear algebra.**
//!
//! matr provides the classical small-matrix toolbox - vector arithmetic,
//! dense matrix arithmetic, LU factorization, triangular and general solves,
//! matrix inversion, Gauss-Jordan elimination with multiple right-hand
//! sides, and the Taylor-series matrix exponential - together with a compact
//! sparse row encoding that stores a sufficiently sparse matrix in the same
//! physical footprint as the dense one.
//!
//! ## Design
//!
//! - **Shape-carrying types**: [`Matrix`] owns its row-major storage and its
//!   shape; every operation validates dimensions and reports failures through
//!   [`error::Result`], never by truncating or trusting caller integers.
//! - **Tagged sparse state**: dense and sparse are distinct types
//!   ([`Matrix`] vs [`sparse::SparseMatrix`]) with explicit, checked
//!   conversions. The in-buffer wire format (count, indices, values, and a
//!   sentinel bit pattern per row) lives in [`sparse::codec`].
//! - **Checked numerics**: singular pivots, non-converging series, and
//!   degenerate inputs surface as typed errors, not NaN-laden output.
//!
//! ## Quick Start
//!
//! ```
//! use matr::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![4.0, 1.0], vec![1.0, 3.0]])?;
//! let x = solve::solve(&a, &[1.0, 2.0])?;
//! let residual = ops::vector::sub(&ops::matrix::matvec(&a, &x)?, &[1.0, 2.0])?;
//! assert!(ops::vector::norm2(&residual) < 1e-12);
//! # Ok::<(), matr::error::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod expm;
pub mod matrix;
pub mod ops;
pub mod solve;
pub mod sparse;

pub use matrix::Matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::expm::expm;
    pub use crate::matrix::Matrix;
    pub use crate::sparse::{SparseMatrix, SparseRow};
    pub use crate::{ops, solve, sparse};
}
