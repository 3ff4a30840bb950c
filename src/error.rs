//! Error types for matr

use thiserror::Error;

/// Result type alias using matr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matr operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Square matrix required
    #[error("Operation requires a square matrix, got {nrows}x{ncols}")]
    NotSquare {
        /// Number of rows
        nrows: usize,
        /// Number of columns
        ncols: usize,
    },

    /// A row has too many non-zero entries for the sparse encoding
    #[error("Row {row} has {nonzero} non-zero entries, sparse encoding allows at most {max}")]
    DensityViolation {
        /// The offending row
        row: usize,
        /// Non-zero entries found in the row
        nonzero: usize,
        /// Maximum non-zeros the physical row can hold
        max: usize,
    },

    /// A buffer does not hold a valid sparse encoding
    #[error("Malformed sparse encoding in row {row}: {reason}")]
    MalformedSparseEncoding {
        /// The offending row
        row: usize,
        /// What the validation found
        reason: String,
    },

    /// Zero or near-zero pivot encountered during factorization/elimination
    #[error("Matrix is singular: pivot magnitude {pivot:e} below tolerance {tolerance:e}")]
    SingularMatrix {
        /// Magnitude of the best available pivot
        pivot: f64,
        /// Tolerance it was compared against
        tolerance: f64,
    },

    /// An iterative computation failed to converge
    #[error("'{op}' did not converge within {iterations} iterations")]
    NonConvergence {
        /// The operation name
        op: &'static str,
        /// Iteration cap that was reached
        iterations: usize,
    },

    /// Zero-length vector where a direction is required
    #[error("'{op}' is undefined for a zero-length vector")]
    DegenerateVector {
        /// The operation name
        op: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a malformed-sparse-encoding error
    pub fn malformed(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedSparseEncoding {
            row,
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
