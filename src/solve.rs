use crate::error::SolveError;
use crate::gauss::{ProgressMonitor, Sweep};
use crate::lsopt::{Alg, LSOpt};
use crate::residual::residual_norm;
use crate::system::System;
use crate::traits::{GaussElim, Iterative, LinearSolver};

use std::time::{Duration, Instant};

/// Outcome of a successful [`run_solver`] call.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub alg: Alg,

    /// Solution vector.
    pub x: Vec<f64>,

    /// Iterations performed (1 for the direct methods).
    pub iterations: usize,

    /// Euclidean norm of `b - A*x`.
    pub residual: f64,

    /// Time spent in the solver, excluding the residual evaluation.
    pub elapsed: Duration,
}

/// Solves `sys` with the algorithm selected in `opt` and evaluates the
/// residual of the result.
pub fn run_solver(
    sys: &System,
    opt: &LSOpt,
    progress: Option<&dyn ProgressMonitor>,
) -> Result<SolveReport, SolveError> {
    let alg = opt.alg;

    let solver: Box<dyn LinearSolver + '_> = match alg {
        Alg::GE => Box::new(GaussElim { pivot: false }),
        Alg::GEPP => Box::new(GaussElim { pivot: true }),
        Alg::JACOBI => Box::new(Iterative {
            sweep: Sweep::Jacobi,
            opt: opt.it_opt(alg),
            progress,
        }),
        Alg::GS => Box::new(Iterative {
            sweep: Sweep::GaussSeidel,
            opt: opt.it_opt(alg),
            progress,
        }),
    };

    log::debug!("solving order {} system with {}", sys.order(), alg);
    let t0 = Instant::now();
    let result = solver.solve(sys);
    let elapsed = t0.elapsed();

    let (x, iterations) = match result {
        Ok(sol) => sol,
        Err(err) => {
            log::info!("{} failed after {:?}: {}", alg, elapsed, err);
            return Err(err);
        }
    };
    let residual = residual_norm(sys, &x)?;

    log::info!(
        "{} solved order {} system in {} iterations ({:?}), residual {:e}",
        alg,
        sys.order(),
        iterations,
        elapsed,
        residual
    );

    Ok(SolveReport {
        alg,
        x,
        iterations,
        residual,
        elapsed,
    })
}
