use thiserror::Error;

/// Errors reported by the solvers and the residual evaluator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// Input sizes disagree.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A required pivot or diagonal element is numerically zero.
    #[error("matrix is singular: zero pivot at row {row}")]
    SingularMatrix { row: usize },

    /// An iterative method stopped without meeting its tolerance.
    ///
    /// `last` holds the final iterate so the caller can inspect it.
    #[error("did not converge in {iterations} iterations")]
    Convergence { iterations: usize, last: Vec<f64> },

    /// A solver or generator parameter is out of range.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}
