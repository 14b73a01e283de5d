use crate::dense::Mat;
use crate::{
    gauss_elim, gauss_seidel, generate_system, jacobi, residual_norm, run_solver, Alg, Kind,
    LSOpt, SolveError, System,
};

use anyhow::{format_err, Result};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn dominant() -> System {
    let a = Mat::from_rows(&[
        [10.0, -1.0, 2.0, 0.0],
        [-1.0, 11.0, -1.0, 3.0],
        [2.0, -1.0, 10.0, -1.0],
        [0.0, 3.0, -1.0, 8.0],
    ])
    .unwrap();
    System::new(a, vec![6.0, 25.0, -11.0, 15.0]).unwrap()
}

fn hilbert(n: usize) -> System {
    let a = Mat::from_rows(
        &(0..n)
            .map(|i| (0..n).map(|j| 1.0 / (i + j + 1) as f64).collect::<Vec<f64>>())
            .collect::<Vec<_>>(),
    )
    .unwrap();
    System::new(a, vec![1.0; n]).unwrap()
}

#[test]
fn test_two_by_two_direct() -> Result<()> {
    let a = Mat::from_rows(&[[4.0, 1.0], [1.0, 3.0]])?;
    let sys = System::new(a, vec![1.0, 2.0])?;

    let x = gauss_elim(&sys, false)?;
    assert_relative_eq!(x[0], 1.0 / 11.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 7.0 / 11.0, epsilon = 1e-12);
    assert!(residual_norm(&sys, &x)? < 1e-12);
    Ok(())
}

#[test]
fn test_known_solution_residual() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [1, 2, 5, 10, 20] {
        let sys = generate_system(n, Kind::DiagDominant, 10.0, &mut rng)?;
        let x_star: Vec<f64> = (0..n).map(|i| i as f64 - 2.5).collect();
        let sys = System::from_solution(sys.coefficients().clone(), &x_star)?;

        for pivot in [false, true] {
            let x = gauss_elim(&sys, pivot)?;
            let r = residual_norm(&sys, &x)?;
            if r >= 1e-9 {
                return Err(format_err!("n = {}, pivot = {}: residual {}", n, pivot, r));
            }
        }
    }
    Ok(())
}

#[test]
fn test_null_row_is_singular() -> Result<()> {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sys = generate_system(3, Kind::NullRow, 10.0, &mut rng)?;
        for pivot in [false, true] {
            match gauss_elim(&sys, pivot) {
                Err(SolveError::SingularMatrix { .. }) => {}
                r => {
                    return Err(format_err!(
                        "seed {}, pivot = {}: expected singular matrix, got {:?}",
                        seed,
                        pivot,
                        r
                    ))
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_dependent_rows_are_singular() -> Result<()> {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        for kind in [Kind::ProportionalRow, Kind::CombinationRow] {
            let sys = generate_system(4, kind, 1.0, &mut rng)?;
            let r = gauss_elim(&sys, true);
            if !matches!(r, Err(SolveError::SingularMatrix { .. })) {
                return Err(format_err!("seed {}, {}: got {:?}", seed, kind, r));
            }
        }
    }
    Ok(())
}

#[test]
fn test_pivoting_required() -> Result<()> {
    let a = Mat::from_rows(&[[0.0, 2.0, 1.0], [1.0, 1.0, 1.0], [2.0, 0.0, 3.0]])?;
    let sys = System::from_solution(a, &[1.0, 2.0, 3.0])?;

    assert_eq!(
        gauss_elim(&sys, false),
        Err(SolveError::SingularMatrix { row: 0 })
    );
    let x = gauss_elim(&sys, true)?;
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    assert_relative_eq!(x[2], 3.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_iterative_on_dominant_systems() -> Result<()> {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sys = generate_system(3, Kind::DiagDominant, 1.0, &mut rng)?;

        let (xj, _) = jacobi(&sys, 1e-6, 100)?;
        let (xg, _) = gauss_seidel(&sys, 1e-6, 100)?;
        assert!(residual_norm(&sys, &xj)? < 1e-5);
        assert!(residual_norm(&sys, &xg)? < 1e-5);
    }
    Ok(())
}

#[test]
fn test_looser_tolerance_fewer_iterations() -> Result<()> {
    let sys = dominant();
    let tolerances = [1e-10, 1e-8, 1e-6, 1e-4, 1e-2];

    let (mut last_j, mut last_g) = (usize::MAX, usize::MAX);
    for tol in tolerances {
        let (_, its_j) = jacobi(&sys, tol, 500)?;
        let (_, its_g) = gauss_seidel(&sys, tol, 500)?;
        assert!(its_j <= last_j);
        assert!(its_g <= last_g);
        (last_j, last_g) = (its_j, its_g);
    }
    Ok(())
}

#[test]
fn test_gauss_seidel_not_slower_than_jacobi() -> Result<()> {
    let two = System::new(Mat::from_rows(&[[4.0, 1.0], [1.0, 3.0]])?, vec![1.0, 2.0])?;
    let three = System::new(
        Mat::from_rows(&[[5.0, 1.0, 1.0], [1.0, 6.0, 2.0], [2.0, 1.0, 7.0]])?,
        vec![7.0, 9.0, 10.0],
    )?;

    for sys in [dominant(), two, three] {
        for tol in [1e-3, 1e-6, 1e-9] {
            let (_, its_j) = jacobi(&sys, tol, 200)?;
            let (_, its_g) = gauss_seidel(&sys, tol, 200)?;
            assert!(its_g <= its_j, "tol {}: gs {} > jacobi {}", tol, its_g, its_j);
        }
    }
    Ok(())
}

#[test]
fn test_hilbert() -> Result<()> {
    let sys = hilbert(5);

    for pivot in [false, true] {
        let x = gauss_elim(&sys, pivot)?;
        assert!(residual_norm(&sys, &x)? < 1e-9);
    }

    // Ill-conditioning keeps both iterative methods from converging.
    for r in [jacobi(&sys, 1e-6, 50), gauss_seidel(&sys, 1e-6, 50)] {
        match r {
            Err(SolveError::Convergence { iterations, last }) => {
                assert_eq!(iterations, 50);
                assert_eq!(last.len(), 5);
            }
            r => return Err(format_err!("expected convergence failure, got {:?}", r)),
        }
    }
    Ok(())
}

#[test]
fn test_hilbert_jacobi_divergence() {
    let sys = hilbert(5);
    let mut opt = LSOpt::default();
    opt.alg = Alg::JACOBI;
    opt.div_threshold = 1e6;
    opt.max_it(50);

    match run_solver(&sys, &opt, None) {
        Err(SolveError::Convergence { iterations, .. }) => assert!(iterations < 50),
        r => panic!("expected divergence, got {:?}", r),
    }
}

#[test]
fn test_solvers_share_system() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(9);
    let sys = generate_system(6, Kind::DiagDominant, 5.0, &mut rng)?;
    let before = sys.clone();

    let mut opt = LSOpt::default();
    let mut residuals = vec![];
    for alg in Alg::ALL {
        opt.alg = alg;
        let report = run_solver(&sys, &opt, None)?;
        assert_eq!(residual_norm(&sys, &report.x)?, report.residual);
        residuals.push(report.residual);
    }
    assert_eq!(sys, before);
    assert!(residuals.iter().all(|&r| r < 1e-4));
    Ok(())
}
