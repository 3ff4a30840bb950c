//! Dense matrix type
//!
//! A [`Matrix`] owns its storage in row-major order and carries its own shape,
//! so every operation can validate dimensions at the call boundary instead of
//! trusting caller-supplied integers.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// Dense matrix of `f64` values stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Matrix entries in row-major order, `nrows * ncols` long.
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Creates an `nrows x ncols` matrix filled with zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Creates an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Creates a matrix from a flat row-major slice.
    ///
    /// Fails with [`Error::InvalidArgument`] when `data.len() != nrows * ncols`.
    pub fn from_slice(data: &[f64], nrows: usize, ncols: usize) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(Error::invalid_argument(
                "data",
                format!(
                    "expected {} elements for a {}x{} matrix, got {}",
                    nrows * ncols,
                    nrows,
                    ncols,
                    data.len()
                ),
            ));
        }
        Ok(Self {
            data: data.to_vec(),
            nrows,
            ncols,
        })
    }

    /// Creates a matrix from nested row vectors.
    ///
    /// All rows must have the same length; a ragged input fails with
    /// [`Error::ShapeMismatch`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::ShapeMismatch {
                    expected: vec![nrows, ncols],
                    got: vec![i, row.len()],
                });
            }
        }
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        Ok(Self { data, nrows, ncols })
    }

    /// Returns the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Checks whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Returns the underlying row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the underlying row-major storage mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics when `i >= nrows`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Returns row `i` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics when `i >= nrows`.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Swaps rows `i` and `j`.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.ncols {
            self.data.swap(i * self.ncols + k, j * self.ncols + k);
        }
    }

    /// Transposes a square matrix in place.
    ///
    /// The general rectangular transpose into the same storage has no safe
    /// in-place formulation; use [`crate::ops::matrix::transpose`] for that.
    pub fn transpose_in_place(&mut self) -> Result<()> {
        let n = self.require_square()?;
        for i in 0..n {
            for j in (i + 1)..n {
                self.data.swap(i * n + j, j * n + i);
            }
        }
        Ok(())
    }

    /// Returns the side length when square, [`Error::NotSquare`] otherwise.
    pub fn require_square(&self) -> Result<usize> {
        if self.nrows != self.ncols {
            return Err(Error::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(self.nrows)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.ncols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.ncols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>12.6}", self.data[i * self.ncols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
