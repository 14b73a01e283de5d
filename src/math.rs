/// Magnitude at or below which a pivot or diagonal element is treated as zero.
/// Also the floor applied to the denominator of relative differences.
pub const EPS: f64 = 1e-10;

/// Computes the infinity norm: `max(abs(a))`
pub fn norm_inf(a: &[f64]) -> f64 {
    a.iter().fold(0.0, |max, v| f64::max(max, v.abs()))
}

/// Returns the 2-norm (Euclidean) of `a`.
pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Largest relative change between two iterates:
/// `max(abs(x - prev) / max(abs(x), EPS))`.
pub fn max_rel_diff(x: &[f64], prev: &[f64]) -> f64 {
    x.iter()
        .zip(prev)
        .map(|(&xi, &pi)| (xi - pi).abs() / xi.abs().max(EPS))
        .fold(0.0, f64::max)
}
