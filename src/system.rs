use crate::dense::Mat;
use crate::error::SolveError;

/// A square linear system `Ax = b`.
///
/// The order always matches both dimensions of the coefficient matrix and
/// the length of the right-hand side; the constructors reject anything
/// else, so solvers never need to re-check it.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    coefficients: Mat<f64>,
    rhs: Vec<f64>,
}

impl System {
    pub fn new(coefficients: Mat<f64>, rhs: Vec<f64>) -> Result<Self, SolveError> {
        let (rows, cols) = coefficients.shape();
        if rows == 0 {
            return Err(SolveError::InvalidOption(
                "system order must be positive".to_string(),
            ));
        }
        if rows != cols {
            return Err(SolveError::DimensionMismatch {
                expected: rows,
                got: cols,
            });
        }
        if rhs.len() != rows {
            return Err(SolveError::DimensionMismatch {
                expected: rows,
                got: rhs.len(),
            });
        }
        Ok(Self { coefficients, rhs })
    }

    /// Builds the system whose exact solution is `x`, i.e. `b = A * x`.
    pub fn from_solution(coefficients: Mat<f64>, x: &[f64]) -> Result<Self, SolveError> {
        if x.len() != coefficients.cols() {
            return Err(SolveError::DimensionMismatch {
                expected: coefficients.cols(),
                got: x.len(),
            });
        }
        let rhs = coefficients.mat_vec(x);
        Self::new(coefficients, rhs)
    }

    /// Number of unknowns.
    pub fn order(&self) -> usize {
        self.rhs.len()
    }

    pub fn coefficients(&self) -> &Mat<f64> {
        &self.coefficients
    }

    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }
}
