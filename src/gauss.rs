use crate::error::SolveError;
use crate::math::{max_rel_diff, norm_inf, EPS};
use crate::system::System;

pub trait ProgressMonitor {
    fn update(&self, i: usize, diff: f64);
}

/// Reports the relative change of each sweep through the `log` facade.
pub struct LogProgress {}

impl ProgressMonitor for LogProgress {
    fn update(&self, i: usize, diff: f64) {
        if i == 1 {
            log::info!(" it    max relative change");
            log::info!("----  ---------------------");
        }
        log::info!("{:3}        {:10.3e}", i, diff);
    }
}

/// Which values a sweep reads when updating coordinate `i`.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Sweep {
    /// Read only the previous iterate.
    Jacobi,
    /// Read the coordinates already updated in the current sweep.
    GaussSeidel,
}

/// Stopping parameters for the iterative methods.
#[derive(Debug, Clone, PartialEq)]
pub struct ItOpt {
    /// Maximum relative change between successive iterates at which the
    /// iteration is considered converged.
    pub tolerance: f64,

    /// Maximum number of sweeps.
    pub max_it: usize,

    /// Infinity norm above which an iterate is declared divergent.
    pub div_threshold: f64,
}

impl Default for ItOpt {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_it: 1000,
            div_threshold: 1e50,
        }
    }
}

/// Per-call iteration state.
struct IterState {
    x: Vec<f64>,
    x_prev: Vec<f64>,
    it: usize,
    converged: bool,
}

/// Solves `Ax = b` with Jacobi or Gauss-Seidel iterations.
///
/// Starts from `x0` (the zero vector if `None`) and sweeps until the maximum
/// relative change between successive iterates is at most `opt.tolerance`.
/// Returns the solution and the number of sweeps performed.
///
/// Fails with [`SolveError::SingularMatrix`] if a diagonal element is
/// `<= EPS` in magnitude or not finite, and with [`SolveError::Convergence`] if the sweep
/// limit is reached or the iterate diverges. Diagonal dominance is not
/// checked.
pub fn iterate(
    sys: &System,
    sweep: Sweep,
    x0: Option<&[f64]>,
    opt: &ItOpt,
    progress: Option<&dyn ProgressMonitor>,
) -> Result<(Vec<f64>, usize), SolveError> {
    let n = sys.order();
    let a = sys.coefficients();
    let b = sys.rhs();

    if !(opt.tolerance > 0.0 && opt.tolerance.is_finite()) {
        return Err(SolveError::InvalidOption(format!(
            "tolerance must be positive: {}",
            opt.tolerance
        )));
    }
    if opt.max_it == 0 {
        return Err(SolveError::InvalidOption(
            "iteration limit must be positive".to_string(),
        ));
    }
    let x = match x0 {
        Some(x0) if x0.len() != n => {
            return Err(SolveError::DimensionMismatch {
                expected: n,
                got: x0.len(),
            });
        }
        Some(x0) => x0.to_vec(),
        None => vec![0.0; n],
    };

    let diag: Vec<f64> = a.diagonal().collect();
    if let Some(row) = diag.iter().position(|d| !(d.is_finite() && d.abs() > EPS)) {
        return Err(SolveError::SingularMatrix { row });
    }

    let mut state = IterState {
        x_prev: x.clone(),
        x,
        it: 0,
        converged: false,
    };

    while !state.converged && state.it < opt.max_it {
        state.it += 1;
        state.x_prev.copy_from_slice(&state.x);

        for i in 0..n {
            let sigma: f64 = {
                let src: &[f64] = match sweep {
                    Sweep::Jacobi => &state.x_prev,
                    Sweep::GaussSeidel => &state.x,
                };
                a.row(i)
                    .iter()
                    .zip(src)
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, (a_ij, x_j))| a_ij * x_j)
                    .sum()
            };
            state.x[i] = (b[i] - sigma) / diag[i];
        }

        let diff = max_rel_diff(&state.x, &state.x_prev);
        if let Some(pm) = progress {
            pm.update(state.it, diff);
        }

        if !state.x.iter().all(|v| v.is_finite()) || norm_inf(&state.x) > opt.div_threshold {
            log::debug!("{:?} diverged after {} iterations", sweep, state.it);
            return Err(SolveError::Convergence {
                iterations: state.it,
                last: state.x,
            });
        }
        state.converged = diff <= opt.tolerance;
    }

    if !state.converged {
        log::debug!(
            "{:?} did not converge in {} iterations",
            sweep,
            state.it
        );
        return Err(SolveError::Convergence {
            iterations: state.it,
            last: state.x,
        });
    }
    log::debug!("{:?} converged in {} iterations", sweep, state.it);

    Ok((state.x, state.it))
}

/// Jacobi iterations from the zero vector.
pub fn jacobi(
    sys: &System,
    tolerance: f64,
    max_it: usize,
) -> Result<(Vec<f64>, usize), SolveError> {
    let opt = ItOpt {
        tolerance,
        max_it,
        ..Default::default()
    };
    iterate(sys, Sweep::Jacobi, None, &opt, None)
}

/// Gauss-Seidel iterations from the zero vector.
pub fn gauss_seidel(
    sys: &System,
    tolerance: f64,
    max_it: usize,
) -> Result<(Vec<f64>, usize), SolveError> {
    let opt = ItOpt {
        tolerance,
        max_it,
        ..Default::default()
    };
    iterate(sys, Sweep::GaussSeidel, None, &opt, None)
}
