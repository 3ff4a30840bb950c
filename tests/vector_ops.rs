//! Integration tests for vector kernels

mod common;

use common::{assert_allclose_f64, random_vec, seeded_rng};
use matr::error::Error;
use matr::ops::vector;

#[test]
fn test_dot_and_norms() {
    let x = vec![3.0, -4.0];
    assert_eq!(vector::dot(&x, &x).unwrap(), 25.0);
    assert_eq!(vector::norm2(&x), 5.0);
    assert_eq!(vector::norm1(&x), 7.0);
    assert_eq!(vector::dot(&[], &[]).unwrap(), 0.0);
}

#[test]
fn test_dot_length_mismatch() {
    let err = vector::dot(&[1.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_add_sub_scale() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![0.5, -2.0, 1.0];
    assert_eq!(vector::add(&x, &y).unwrap(), vec![1.5, 0.0, 4.0]);
    assert_eq!(vector::sub(&x, &y).unwrap(), vec![0.5, 4.0, 2.0]);
    assert_eq!(vector::scale(2.0, &x), vec![2.0, 4.0, 6.0]);
}

#[test]
fn test_in_place_matches_fresh_output() {
    // The in-place forms are the aliased-result calling convention; they
    // must agree exactly with the allocating forms.
    let mut rng = seeded_rng(7);
    for n in [1usize, 2, 5, 17] {
        let x = random_vec(&mut rng, n);
        let mut y = random_vec(&mut rng, n);
        y[0] = 0.0; // keep degenerate zero entries in the mix

        let fresh = vector::add(&x, &y).unwrap();
        let mut aliased = x.clone();
        vector::add_assign(&mut aliased, &y).unwrap();
        assert_allclose_f64(&aliased, &fresh, 0.0, 0.0, "add_assign == add");

        let fresh = vector::sub(&x, &y).unwrap();
        let mut aliased = x.clone();
        vector::sub_assign(&mut aliased, &y).unwrap();
        assert_allclose_f64(&aliased, &fresh, 0.0, 0.0, "sub_assign == sub");

        let fresh = vector::scale(-1.75, &x);
        let mut aliased = x.clone();
        vector::scale_assign(-1.75, &mut aliased);
        assert_allclose_f64(&aliased, &fresh, 0.0, 0.0, "scale_assign == scale");
    }
}

#[test]
fn test_self_aliased_add() {
    // dst and src as the same logical vector: x + x == 2x
    let x = vec![1.0, -2.5, 4.0];
    let mut doubled = x.clone();
    vector::add_assign(&mut doubled, &x).unwrap();
    assert_eq!(doubled, vector::scale(2.0, &x));
}

#[test]
fn test_copy_and_zero() {
    let src = vec![1.0, 2.0];
    let mut dst = vec![0.0, 0.0];
    vector::copy_from(&mut dst, &src).unwrap();
    assert_eq!(dst, src);
    vector::set_zero(&mut dst);
    assert_eq!(dst, vec![0.0, 0.0]);

    let mut short = vec![0.0];
    assert!(vector::copy_from(&mut short, &src).is_err());
}

#[test]
fn test_normalize() {
    let mut rng = seeded_rng(11);
    let x = random_vec(&mut rng, 6);
    let unit = vector::normalize(&x).unwrap();
    assert!((vector::norm2(&unit) - 1.0).abs() < 1e-12);

    let err = vector::normalize(&[0.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(err, Error::DegenerateVector { op: "normalize" }));
}
