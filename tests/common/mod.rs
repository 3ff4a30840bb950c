//! Common test utilities
#![allow(dead_code)]

use matr::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Deterministic RNG so failures reproduce.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random vector with entries in [-1, 1).
pub fn random_vec(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Random vector with standard normal entries.
pub fn random_normal_vec(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| StandardNormal.sample(rng)).collect()
}

/// Random matrix with entries in [-1, 1).
pub fn random_matrix(rng: &mut StdRng, n: usize, m: usize) -> Matrix {
    Matrix::from_slice(&random_vec(rng, n * m), n, m).expect("length matches")
}

/// Random diagonally dominant square matrix; always well conditioned.
pub fn random_well_conditioned(rng: &mut StdRng, n: usize) -> Matrix {
    let mut a = random_matrix(rng, n, n);
    for i in 0..n {
        a[(i, i)] += n as f64 + 1.0;
    }
    a
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
