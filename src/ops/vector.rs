//! Vector kernels over `f64` slices
//!
//! Allocating forms (`add`, `sub`, `scale`, `normalize`) return a fresh
//! `Vec<f64>`; the `*_assign` forms update the destination in place and are
//! the entry points for "result aliases an input" usage. Exclusive `&mut`
//! borrows make a partially-overwritten read impossible, so no scratch
//! buffering is needed inside the in-place forms.

use crate::error::{Error, Result};

fn check_same_len(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::shape_mismatch(&[a.len()], &[b.len()]));
    }
    Ok(())
}

/// Dot product of two vectors of equal length.
pub fn dot(x: &[f64], y: &[f64]) -> Result<f64> {
    check_same_len(x, y)?;
    Ok(x.iter().zip(y).map(|(a, b)| a * b).sum())
}

/// 1-norm: sum of absolute values.
pub fn norm1(x: &[f64]) -> f64 {
    x.iter().map(|v| v.abs()).sum()
}

/// Euclidean (2-)norm.
pub fn norm2(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Elementwise sum `x + y`.
pub fn add(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    check_same_len(x, y)?;
    Ok(x.iter().zip(y).map(|(a, b)| a + b).collect())
}

/// Elementwise difference `x - y`.
pub fn sub(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    check_same_len(x, y)?;
    Ok(x.iter().zip(y).map(|(a, b)| a - b).collect())
}

/// Scalar multiple `k * x`.
pub fn scale(k: f64, x: &[f64]) -> Vec<f64> {
    x.iter().map(|v| k * v).collect()
}

/// In-place sum: `dst += src`.
pub fn add_assign(dst: &mut [f64], src: &[f64]) -> Result<()> {
    check_same_len(dst, src)?;
    for (d, s) in dst.iter_mut().zip(src) {
        *d += s;
    }
    Ok(())
}

/// In-place difference: `dst -= src`.
pub fn sub_assign(dst: &mut [f64], src: &[f64]) -> Result<()> {
    check_same_len(dst, src)?;
    for (d, s) in dst.iter_mut().zip(src) {
        *d -= s;
    }
    Ok(())
}

/// In-place scalar multiply: `dst *= k`.
pub fn scale_assign(k: f64, dst: &mut [f64]) {
    for d in dst.iter_mut() {
        *d *= k;
    }
}

/// Fills a vector with zeros.
pub fn set_zero(dst: &mut [f64]) {
    dst.fill(0.0);
}

/// Copies `src` into `dst`.
pub fn copy_from(dst: &mut [f64], src: &[f64]) -> Result<()> {
    check_same_len(dst, src)?;
    dst.copy_from_slice(src);
    Ok(())
}

/// Scales a vector to unit Euclidean length.
///
/// Fails with [`Error::DegenerateVector`] when the input norm is zero.
pub fn normalize(x: &[f64]) -> Result<Vec<f64>> {
    let len = norm2(x);
    if len == 0.0 {
        return Err(Error::DegenerateVector { op: "normalize" });
    }
    Ok(scale(1.0 / len, x))
}
