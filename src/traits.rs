use crate::elim::gauss_elim;
use crate::error::SolveError;
use crate::gauss::{iterate, ItOpt, ProgressMonitor, Sweep};
use crate::system::System;

pub trait LinearSolver {
    /// Returns the solution of `sys` and the number of iterations used.
    fn solve(&self, sys: &System) -> Result<(Vec<f64>, usize), SolveError>;
}

/// Direct solver. Always reports a single iteration.
pub struct GaussElim {
    pub pivot: bool,
}

impl LinearSolver for GaussElim {
    fn solve(&self, sys: &System) -> Result<(Vec<f64>, usize), SolveError> {
        Ok((gauss_elim(sys, self.pivot)?, 1))
    }
}

/// Jacobi or Gauss-Seidel solver starting from the zero vector.
pub struct Iterative<'a> {
    pub sweep: Sweep,
    pub opt: ItOpt,
    pub progress: Option<&'a dyn ProgressMonitor>,
}

impl<'a> LinearSolver for Iterative<'a> {
    fn solve(&self, sys: &System) -> Result<(Vec<f64>, usize), SolveError> {
        iterate(sys, self.sweep, None, &self.opt, self.progress)
    }
}
