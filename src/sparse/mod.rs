//! Sparse matrix support
//!
//! Two layers:
//!
//! - [`SparseMatrix`] - an explicit per-row index/value representation with
//!   checked conversions to and from [`Matrix`]. This is the in-memory form;
//!   holding sparse and dense state as distinct types removes any ambiguity
//!   about what a buffer currently contains.
//! - [`codec`] - the physical row layout used when a sparse matrix shares
//!   storage with a dense `nrows x ncols` buffer, discriminated by a sentinel
//!   bit pattern in each row's last cell.
//!
//! Both layers enforce the same density bound: a row of `m` physical columns
//! may carry at most `(m - 2) / 2` non-zero entries, i.e. strictly more than
//! half of every logical row must be zero.
//!
//! Solvers in [`crate::solve`] accept only [`Matrix`]; sparse data must be
//! converted back to dense first.

pub mod codec;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::sparse::codec::max_row_nonzeros;

/// Non-zero entries of one matrix row: parallel index and value lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseRow {
    /// Column indices of the non-zero entries, duplicate-free, in `[0, ncols)`.
    pub indices: Vec<usize>,
    /// Values at the corresponding indices, all non-zero after a conversion
    /// from dense.
    pub values: Vec<f64>,
}

/// Sparse matrix as an explicit structure of per-row non-zero entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    nrows: usize,
    ncols: usize,
    rows: Vec<SparseRow>,
}

impl SparseMatrix {
    /// Converts a dense matrix, enforcing the density bound on every row.
    ///
    /// The whole conversion fails with [`Error::DensityViolation`] naming the
    /// first offending row; there is no partially-converted state.
    pub fn from_dense(a: &Matrix) -> Result<Self> {
        let (nrows, ncols) = (a.nrows(), a.ncols());
        let max = max_row_nonzeros(ncols);
        let mut rows = Vec::with_capacity(nrows);
        for i in 0..nrows {
            let mut row = SparseRow::default();
            for (j, &v) in a.row(i).iter().enumerate() {
                if v != 0.0 {
                    row.indices.push(j);
                    row.values.push(v);
                }
            }
            if row.indices.len() > max {
                return Err(Error::DensityViolation {
                    row: i,
                    nonzero: row.indices.len(),
                    max,
                });
            }
            rows.push(row);
        }
        Ok(Self { nrows, ncols, rows })
    }

    /// Expands back to a dense matrix. Exact inverse of [`Self::from_dense`].
    pub fn to_dense(&self) -> Matrix {
        let mut a = Matrix::zeros(self.nrows, self.ncols);
        for (i, row) in self.rows.iter().enumerate() {
            let dense_row = a.row_mut(i);
            for (&idx, &val) in row.indices.iter().zip(&row.values) {
                dense_row[idx] = val;
            }
        }
        a
    }

    /// Returns the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of logical columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Total number of stored non-zero entries.
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(|r| r.indices.len()).sum()
    }

    /// Returns row `i`'s non-zero entries.
    ///
    /// # Panics
    ///
    /// Panics when `i >= nrows`.
    pub fn row(&self, i: usize) -> &SparseRow {
        &self.rows[i]
    }

    /// Writes the matrix into `buf` in the physical [`codec`] layout.
    ///
    /// `buf` must hold exactly `nrows * ncols` elements and `ncols` must be
    /// at least 2 so every row can hold its count and sentinel cells.
    pub fn write_encoded(&self, buf: &mut [f64]) -> Result<()> {
        if buf.len() != self.nrows * self.ncols {
            return Err(Error::invalid_argument(
                "buf",
                format!(
                    "expected {} elements for a {}x{} matrix, got {}",
                    self.nrows * self.ncols,
                    self.nrows,
                    self.ncols,
                    buf.len()
                ),
            ));
        }
        if self.nrows > 0 && self.ncols < 2 {
            return Err(Error::invalid_argument(
                "ncols",
                "sparse layout needs at least 2 physical columns per row".to_string(),
            ));
        }
        for (i, row) in self.rows.iter().enumerate() {
            codec::pack_row(
                &mut buf[i * self.ncols..(i + 1) * self.ncols],
                &row.indices,
                &row.values,
            );
        }
        Ok(())
    }

    /// Reads a matrix from a buffer in the physical [`codec`] layout.
    ///
    /// Fails with [`Error::MalformedSparseEncoding`] on a missing sentinel,
    /// bad count, or invalid index list.
    pub fn read_encoded(buf: &[f64], nrows: usize, ncols: usize) -> Result<Self> {
        if buf.len() != nrows * ncols {
            return Err(Error::invalid_argument(
                "buf",
                format!(
                    "expected {} elements for a {nrows}x{ncols} matrix, got {}",
                    nrows * ncols,
                    buf.len()
                ),
            ));
        }
        let mut rows = Vec::with_capacity(nrows);
        for i in 0..nrows {
            let row = codec::parse_row(&buf[i * ncols..(i + 1) * ncols])
                .map_err(|reason| Error::malformed(i, reason))?;
            rows.push(row);
        }
        Ok(Self { nrows, ncols, rows })
    }
}
