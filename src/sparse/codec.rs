//! In-buffer sparse row codec
//!
//! Encodes a row-major `nrows x ncols` buffer in place, row by row, into the
//! compact layout
//!
//! ```text
//! [count][idx_1 .. idx_count][val_1 .. val_count][unused ...][SENTINEL]
//! ```
//!
//! where `count` and the indices are integers stored as `f64`, and the last
//! physical cell of every encoded row carries the sentinel bit pattern
//! [`SENTINEL_BITS`]. A row `[0, 0, 0, 1.3, 0, 0, 4.7, 0, 0, -3.4]` of a
//! 10-column matrix encodes to `[3, 3, 6, 9, 1.3, 4.7, -3.4, X, X, SENTINEL]`
//! (`X` cells are unspecified).
//!
//! The count, the indices, the values, and the sentinel of a row must all fit
//! in the row's `ncols` physical cells, so a row qualifies only when
//! `2 * count + 2 <= ncols` - strictly more than half the logical row must be
//! zero. Encoding is all-or-nothing across the matrix: one over-dense row
//! fails the whole conversion and leaves the buffer untouched.

use crate::error::{Error, Result};
use crate::sparse::SparseRow;

/// Bit pattern marking the last physical cell of a sparse-encoded row.
pub const SENTINEL_BITS: u64 = 0xDEAD_BEEF_BABE_FACE;

/// The sentinel reinterpreted as an `f64`.
///
/// Always compare via [`f64::to_bits`]; the payload is a bit pattern, not a
/// meaningful floating-point value.
pub const SENTINEL: f64 = f64::from_bits(SENTINEL_BITS);

fn is_sentinel(x: f64) -> bool {
    x.to_bits() == SENTINEL_BITS
}

/// Maximum non-zero entries a row of `ncols` physical cells can hold in the
/// encoded layout: `floor((ncols - 2) / 2)`.
pub fn max_row_nonzeros(ncols: usize) -> usize {
    ncols.saturating_sub(2) / 2
}

fn check_buffer(buf_len: usize, nrows: usize, ncols: usize) -> Result<()> {
    if buf_len != nrows * ncols {
        return Err(Error::invalid_argument(
            "buf",
            format!(
                "expected {} elements for a {}x{} matrix, got {}",
                nrows * ncols,
                nrows,
                ncols,
                buf_len
            ),
        ));
    }
    Ok(())
}

/// Reads the index as an integer, rejecting negatives and fractional values.
fn read_index(cell: f64, bound: usize) -> Option<usize> {
    if cell < 0.0 || cell.fract() != 0.0 || cell >= bound as f64 {
        return None;
    }
    Some(cell as usize)
}

/// Parses one encoded row into its index/value lists, validating the layout.
pub(crate) fn parse_row(row: &[f64]) -> std::result::Result<SparseRow, String> {
    let m = row.len();
    if m < 2 {
        return Err(format!("row of {m} cells cannot hold count and sentinel"));
    }
    if !is_sentinel(row[m - 1]) {
        return Err("missing sentinel in last physical cell".to_string());
    }
    let max = max_row_nonzeros(m);
    let count_cell = row[0];
    if count_cell < 0.0 || count_cell.fract() != 0.0 || count_cell > max as f64 {
        return Err(format!(
            "count cell {count_cell} is not an integer in 0..={max}"
        ));
    }
    let count = count_cell as usize;

    let mut indices = Vec::with_capacity(count);
    let mut seen = vec![false; m];
    for i in 0..count {
        let idx = read_index(row[1 + i], m)
            .ok_or_else(|| format!("index cell {} is not an integer in 0..{}", row[1 + i], m))?;
        if seen[idx] {
            return Err(format!("duplicate column index {idx}"));
        }
        seen[idx] = true;
        indices.push(idx);
    }
    let values = row[1 + count..1 + 2 * count].to_vec();
    Ok(SparseRow { indices, values })
}

/// Packs index/value lists into one encoded row. `row.len()` must satisfy the
/// density bound for `indices.len()`.
pub(crate) fn pack_row(row: &mut [f64], indices: &[usize], values: &[f64]) {
    let m = row.len();
    let count = indices.len();
    debug_assert!(count <= max_row_nonzeros(m));
    debug_assert_eq!(count, values.len());

    row.fill(0.0);
    row[0] = count as f64;
    for (i, &idx) in indices.iter().enumerate() {
        row[1 + i] = idx as f64;
    }
    row[1 + count..1 + 2 * count].copy_from_slice(values);
    row[m - 1] = SENTINEL;
}

/// True iff every row's last physical cell carries the sentinel bit pattern.
///
/// Returns false for a buffer whose length does not match `nrows * ncols`.
/// An empty matrix is vacuously sparse.
pub fn is_sparse(buf: &[f64], nrows: usize, ncols: usize) -> bool {
    if buf.len() != nrows * ncols {
        return false;
    }
    (0..nrows).all(|i| ncols > 0 && is_sentinel(buf[i * ncols + ncols - 1]))
}

/// Full validity check for an encoded buffer.
///
/// Beyond [`is_sparse`], verifies for every row that the count cell is an
/// integer within the density bound and that all index cells are
/// integer-valued, in range, and duplicate-free. Cells between the value
/// block and the sentinel are ignored.
pub fn sparse_sanity(buf: &[f64], nrows: usize, ncols: usize) -> bool {
    if buf.len() != nrows * ncols {
        return false;
    }
    (0..nrows).all(|i| parse_row(&buf[i * ncols..(i + 1) * ncols]).is_ok())
}

/// Encodes a dense buffer in place (`MakeSparse`).
///
/// Scans every row's non-zero count first; any row over the density bound
/// fails the whole conversion with [`Error::DensityViolation`] and leaves the
/// buffer bit-identical to the input. Each row is then rewritten through a
/// scratch row, so the operation is safe even though source and destination
/// cells overlap within a row.
pub fn encode(buf: &mut [f64], nrows: usize, ncols: usize) -> Result<()> {
    check_buffer(buf.len(), nrows, ncols)?;
    if nrows > 0 && ncols < 2 {
        return Err(Error::invalid_argument(
            "ncols",
            "sparse layout needs at least 2 physical columns per row".to_string(),
        ));
    }

    // Commit nothing until every row is known to fit.
    let max = max_row_nonzeros(ncols);
    for i in 0..nrows {
        let nonzero = buf[i * ncols..(i + 1) * ncols]
            .iter()
            .filter(|&&v| v != 0.0)
            .count();
        if nonzero > max {
            return Err(Error::DensityViolation { row: i, nonzero, max });
        }
    }

    let mut scratch = vec![0.0; ncols];
    for i in 0..nrows {
        let row = &mut buf[i * ncols..(i + 1) * ncols];
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for (j, &v) in row.iter().enumerate() {
            if v != 0.0 {
                indices.push(j);
                values.push(v);
            }
        }
        pack_row(&mut scratch, &indices, &values);
        row.copy_from_slice(&scratch);
    }
    Ok(())
}

/// Decodes an encoded buffer back to dense form in place (`MakeUnSparse`).
///
/// Each row is validated and expanded into a scratch row before the compact
/// cells are overwritten; a naive in-place expansion could write a value at a
/// small column index over compact metadata that is still unread. Any layout
/// violation fails with [`Error::MalformedSparseEncoding`].
pub fn decode(buf: &mut [f64], nrows: usize, ncols: usize) -> Result<()> {
    check_buffer(buf.len(), nrows, ncols)?;
    let mut scratch = vec![0.0; ncols];
    for i in 0..nrows {
        let row = &mut buf[i * ncols..(i + 1) * ncols];
        let parsed = parse_row(row).map_err(|reason| Error::malformed(i, reason))?;
        scratch.fill(0.0);
        for (&idx, &val) in parsed.indices.iter().zip(&parsed.values) {
            scratch[idx] = val;
        }
        row.copy_from_slice(&scratch);
    }
    Ok(())
}
