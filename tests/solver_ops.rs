//! Integration tests for LU factorization, solves, inverse, and Gauss-Jordan

mod common;

use common::{assert_allclose_f64, random_normal_vec, random_vec, random_well_conditioned, seeded_rng};
use matr::error::Error;
use matr::ops::matrix::{matmul, matvec};
use matr::solve::{
    back_subst, det, forward_subst, gauss_jordan, inverse, lu_factor, lu_factor_with_tol, solve,
};
use matr::Matrix;

#[test]
fn test_lu_reconstructs_permuted_input() {
    let mut rng = seeded_rng(101);
    for n in [1usize, 2, 5, 9] {
        let a = random_well_conditioned(&mut rng, n);
        let factors = lu_factor(&a).unwrap();
        let pa = factors.permute_rows(&a);
        let lu = matmul(&factors.l, &factors.u).unwrap();
        assert_allclose_f64(lu.as_slice(), pa.as_slice(), 1e-10, 1e-10, "P*A = L*U");
    }
}

#[test]
fn test_lu_factor_shapes() {
    let mut rng = seeded_rng(102);
    let a = random_well_conditioned(&mut rng, 6);
    let factors = lu_factor(&a).unwrap();

    for i in 0..6 {
        assert_eq!(factors.l[(i, i)], 1.0, "L has unit diagonal");
        for j in (i + 1)..6 {
            assert_eq!(factors.l[(i, j)], 0.0, "L is lower triangular");
        }
        for j in 0..i {
            assert_eq!(factors.u[(i, j)], 0.0, "U is upper triangular");
        }
    }
}

#[test]
fn test_lu_rejects_non_square() {
    let a = Matrix::zeros(2, 3);
    assert!(matches!(
        lu_factor(&a),
        Err(Error::NotSquare { nrows: 2, ncols: 3 })
    ));
}

#[test]
fn test_forward_subst_lower_triangular() {
    // L*y = b with L = [[2,0],[1,3]], b = [4, 10] -> y = [2, 8/3]
    let l = Matrix::from_rows(vec![vec![2.0, 0.0], vec![1.0, 3.0]]).unwrap();
    let y = forward_subst(&l, &[4.0, 10.0]).unwrap();
    assert_allclose_f64(&y, &[2.0, 8.0 / 3.0], 1e-14, 1e-14, "forward subst");
}

#[test]
fn test_back_subst_upper_triangular() {
    // U*x = y with U = [[2,1],[0,4]], y = [5, 8] -> x = [1.5, 2]
    let u = Matrix::from_rows(vec![vec![2.0, 1.0], vec![0.0, 4.0]]).unwrap();
    let x = back_subst(&u, &[5.0, 8.0]).unwrap();
    assert_allclose_f64(&x, &[1.5, 2.0], 1e-14, 1e-14, "back subst");
}

#[test]
fn test_substitution_rejects_tiny_diagonal() {
    let l = Matrix::from_rows(vec![vec![0.0, 0.0], vec![1.0, 3.0]]).unwrap();
    assert!(matches!(
        forward_subst(&l, &[1.0, 2.0]),
        Err(Error::SingularMatrix { .. })
    ));
    let u = Matrix::from_rows(vec![vec![2.0, 1.0], vec![0.0, 0.0]]).unwrap();
    assert!(matches!(
        back_subst(&u, &[1.0, 2.0]),
        Err(Error::SingularMatrix { .. })
    ));
}

#[test]
fn test_solve_satisfies_system() {
    let mut rng = seeded_rng(103);
    for n in [1usize, 3, 8] {
        let a = random_well_conditioned(&mut rng, n);
        let b = random_normal_vec(&mut rng, n);
        let x = solve(&a, &b).unwrap();
        let ax = matvec(&a, &x).unwrap();
        assert_allclose_f64(&ax, &b, 1e-9, 1e-9, "A*x = b");
    }
}

#[test]
fn test_solve_requires_pivoting() {
    // zero leading diagonal entry; solvable only with row exchange
    let a = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    let x = solve(&a, &[3.0, 7.0]).unwrap();
    assert_allclose_f64(&x, &[7.0, 3.0], 1e-14, 1e-14, "pivoted solve");
}

#[test]
fn test_solve_rhs_length_mismatch() {
    let a = Matrix::identity(3);
    assert!(matches!(
        solve(&a, &[1.0, 2.0]),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[test]
fn test_inverse_times_input_is_identity() {
    let mut rng = seeded_rng(104);
    for n in [1usize, 2, 6] {
        let a = random_well_conditioned(&mut rng, n);
        let ai = inverse(&a).unwrap();
        let prod = matmul(&a, &ai).unwrap();
        let eye = Matrix::identity(n);
        assert_allclose_f64(prod.as_slice(), eye.as_slice(), 1e-9, 1e-9, "A*A^-1 = I");
    }
}

#[test]
fn test_det_known_values() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert!((det(&a).unwrap() + 2.0).abs() < 1e-12);
    assert!((det(&Matrix::identity(4)).unwrap() - 1.0).abs() < 1e-12);

    let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    assert_eq!(det(&singular).unwrap(), 0.0);
}

#[test]
fn test_singular_matrix_detected_everywhere() {
    // exactly singular: zero row
    let mut a = Matrix::identity(3);
    for j in 0..3 {
        a[(1, j)] = 0.0;
    }

    assert!(matches!(lu_factor(&a), Err(Error::SingularMatrix { .. })));
    assert!(matches!(
        solve(&a, &[1.0, 1.0, 1.0]),
        Err(Error::SingularMatrix { .. })
    ));
    assert!(matches!(inverse(&a), Err(Error::SingularMatrix { .. })));

    let mut a_gj = a.clone();
    let mut b_gj = Matrix::identity(3);
    assert!(matches!(
        gauss_jordan(&mut a_gj, &mut b_gj),
        Err(Error::SingularMatrix { .. })
    ));

    // zero column as well
    let mut c = Matrix::identity(3);
    for i in 0..3 {
        c[(i, 2)] = 0.0;
    }
    assert!(matches!(lu_factor(&c), Err(Error::SingularMatrix { .. })));
}

#[test]
fn test_lu_configurable_tolerance() {
    // best pivot magnitude 1e-8: singular for tol 1e-6, fine for tol 1e-10
    let a = Matrix::from_rows(vec![vec![1e-8, 0.0], vec![0.0, 1.0]]).unwrap();
    assert!(matches!(
        lu_factor_with_tol(&a, 1e-6),
        Err(Error::SingularMatrix { .. })
    ));
    assert!(lu_factor_with_tol(&a, 1e-10).is_ok());
}

#[test]
fn test_gauss_jordan_inverse_and_solutions() {
    let mut rng = seeded_rng(105);
    let a = random_well_conditioned(&mut rng, 5);

    // 3 simultaneous right-hand sides
    let mut b = Matrix::zeros(5, 3);
    let rhs: Vec<Vec<f64>> = (0..3).map(|_| random_vec(&mut rng, 5)).collect();
    for (col, r) in rhs.iter().enumerate() {
        for row in 0..5 {
            b[(row, col)] = r[row];
        }
    }

    let mut a_gj = a.clone();
    let mut b_gj = b.clone();
    gauss_jordan(&mut a_gj, &mut b_gj).unwrap();

    // a_gj now holds the inverse
    let ai = inverse(&a).unwrap();
    assert_allclose_f64(
        a_gj.as_slice(),
        ai.as_slice(),
        1e-8,
        1e-8,
        "gauss_jordan inverse vs LU inverse",
    );

    // each column of b_gj solves the corresponding system
    for (col, r) in rhs.iter().enumerate() {
        let x: Vec<f64> = (0..5).map(|row| b_gj[(row, col)]).collect();
        let ax = matvec(&a, &x).unwrap();
        assert_allclose_f64(&ax, r, 1e-8, 1e-8, "gauss_jordan solution column");
    }
}

#[test]
fn test_gauss_jordan_zero_rhs_columns() {
    // inverse-only use: B with zero columns
    let mut rng = seeded_rng(106);
    let a = random_well_conditioned(&mut rng, 4);
    let mut a_gj = a.clone();
    let mut b = Matrix::zeros(4, 0);
    gauss_jordan(&mut a_gj, &mut b).unwrap();

    let prod = matmul(&a, &a_gj).unwrap();
    let eye = Matrix::identity(4);
    assert_allclose_f64(prod.as_slice(), eye.as_slice(), 1e-9, 1e-9, "GJ inverse");
}

#[test]
fn test_gauss_jordan_shape_checks() {
    let mut a = Matrix::zeros(2, 3);
    let mut b = Matrix::zeros(2, 1);
    assert!(matches!(
        gauss_jordan(&mut a, &mut b),
        Err(Error::NotSquare { .. })
    ));

    let mut a = Matrix::identity(3);
    let mut b = Matrix::zeros(2, 1);
    assert!(matches!(
        gauss_jordan(&mut a, &mut b),
        Err(Error::ShapeMismatch { .. })
    ));
}
