use crate::dense::dot;
use crate::error::SolveError;
use crate::math::norm;
use crate::system::System;

/// Returns the residual vector `b - A*x`.
pub fn residual(sys: &System, x: &[f64]) -> Result<Vec<f64>, SolveError> {
    if x.len() != sys.order() {
        return Err(SolveError::DimensionMismatch {
            expected: sys.order(),
            got: x.len(),
        });
    }
    let a = sys.coefficients();
    Ok(sys
        .rhs()
        .iter()
        .enumerate()
        .map(|(i, b_i)| b_i - dot(a.row(i), x))
        .collect())
}

/// Euclidean norm of the residual `b - A*x`.
pub fn residual_norm(sys: &System, x: &[f64]) -> Result<f64, SolveError> {
    Ok(norm(&residual(sys, x)?))
}
