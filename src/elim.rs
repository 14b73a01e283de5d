use crate::dense::Mat;
use crate::error::SolveError;
use crate::math::EPS;
use crate::system::System;

/// Solves `Ax = b` by Gaussian elimination followed by back substitution.
///
/// With `pivot` set, partial pivoting selects the row with the largest
/// magnitude in the current column (lowest index on ties). The caller's
/// system is left untouched; elimination runs on a private copy.
///
/// Fails with [`SolveError::SingularMatrix`] as soon as a pivot is
/// `<= EPS` in magnitude or not finite.
pub fn gauss_elim(sys: &System, pivot: bool) -> Result<Vec<f64>, SolveError> {
    let n = sys.order();
    let mut a = sys.coefficients().clone();
    let mut b = sys.rhs().to_vec();

    for i in 0..n {
        if pivot {
            let i_max = max_pivot(&a, i);
            if !usable_pivot(a.get(i_max, i)) {
                return Err(SolveError::SingularMatrix { row: i });
            }
            if i_max != i {
                log::trace!("swap rows {} and {}", i, i_max);
                a.swap_rows(i, i_max);
                b.swap(i, i_max);
            }
        } else if !usable_pivot(a.get(i, i)) {
            return Err(SolveError::SingularMatrix { row: i });
        }

        let a_ii = a.get(i, i);
        for k in (i + 1)..n {
            let m = a.get(k, i) / a_ii;
            a.set(k, i, 0.0);

            for j in (i + 1)..n {
                let a_kj = a.get(k, j) - a.get(i, j) * m;
                a.set(k, j, a_kj);
            }
            b[k] -= b[i] * m;
        }
    }

    // back substitution on the upper triangular system
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let row = a.row(i);
        let sum: f64 = ((i + 1)..n).map(|j| row[j] * x[j]).sum();
        x[i] = (b[i] - sum) / row[i];
    }

    Ok(x)
}

/// Pivots that are NaN, infinite or `<= EPS` in magnitude are rejected.
fn usable_pivot(p: f64) -> bool {
    p.is_finite() && p.abs() > EPS
}

/// Index of the row at or below `i` with the largest `abs(a[k][i])`.
/// A NaN entry wins so that it is rejected as a pivot.
fn max_pivot(a: &Mat<f64>, i: usize) -> usize {
    let mut i_max = i;
    let mut max = a.get(i, i).abs();
    for k in (i + 1)..a.rows() {
        if max.is_nan() {
            break;
        }
        let v = a.get(k, i).abs();
        if v > max || v.is_nan() {
            max = v;
            i_max = k;
        }
    }
    i_max
}
