use crate::dense::Mat;
use crate::error::SolveError;
use crate::system::System;

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Kind of synthetic system produced by [`generate_system`].
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Kind {
    /// Uniformly random coefficients.
    WithSolution,
    /// One row and its rhs set to zero.
    NullRow,
    /// One row equal to a multiple of the next.
    ProportionalRow,
    /// One row equal to the sum of the next two.
    CombinationRow,
    /// Strictly diagonally dominant.
    DiagDominant,
    /// `a[i][j] = 1 / (i + j + 1)`.
    Hilbert,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::WithSolution,
        Kind::NullRow,
        Kind::ProportionalRow,
        Kind::CombinationRow,
        Kind::DiagDominant,
        Kind::Hilbert,
    ];
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::WithSolution => "random",
            Kind::NullRow => "null-row",
            Kind::ProportionalRow => "proportional",
            Kind::CombinationRow => "combination",
            Kind::DiagDominant => "dominant",
            Kind::Hilbert => "hilbert",
        };
        f.write_str(name)
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|k| k.to_string() == s.to_ascii_lowercase())
            .ok_or_else(|| {
                let names: Vec<String> = Kind::ALL.iter().map(|k| k.to_string()).collect();
                format!("unknown system kind '{}' (expected {})", s, names.join(", "))
            })
    }
}

/// Generates a system of the given `order` and `kind`.
///
/// Random values are drawn uniformly from `[0, coef_max)` using `rng`;
/// pass a seeded generator for reproducible systems.
pub fn generate_system<R>(
    order: usize,
    kind: Kind,
    coef_max: f64,
    rng: &mut R,
) -> Result<System, SolveError>
where
    R: Rng,
{
    if order == 0 {
        return Err(SolveError::InvalidOption(
            "system order must be positive".to_string(),
        ));
    }
    if !(coef_max > 0.0 && coef_max.is_finite()) {
        return Err(SolveError::InvalidOption(format!(
            "maximum coefficient must be positive: {}",
            coef_max
        )));
    }
    let n = order;

    let mut b: Vec<f64> = (0..n).map(|_| sample(rng, coef_max)).collect();

    let a = if kind == Kind::Hilbert {
        let values: Vec<f64> = (0..n * n)
            .map(|k| 1.0 / ((k / n + k % n + 1) as f64))
            .collect();
        Mat::new(n, n).values(values).build()
    } else {
        let values: Vec<f64> = (0..n * n).map(|_| sample(rng, coef_max)).collect();
        Mat::new(n, n).values(values).build()
    };
    let mut a = a.map_err(|err| SolveError::InvalidOption(err.to_string()))?;

    match kind {
        Kind::NullRow => {
            let null = rng.random_range(0..n);
            a.row_mut(null).fill(0.0);
            b[null] = 0.0;
        }
        Kind::ProportionalRow => {
            let dst = rng.random_range(0..n);
            let src = (dst + 1) % n;
            let mult = sample(rng, coef_max);
            for j in 0..n {
                a.set(dst, j, a.get(src, j) * mult);
            }
            b[dst] = b[src] * mult;
        }
        Kind::CombinationRow => {
            let dst = rng.random_range(0..n);
            let (src1, src2) = ((dst + 1) % n, (dst + 2) % n);
            for j in 0..n {
                a.set(dst, j, a.get(src1, j) + a.get(src2, j));
            }
            b[dst] = b[src1] + b[src2];
        }
        Kind::DiagDominant => {
            // scale the whole row magnitude onto the diagonal
            for i in 0..n {
                let row_sum: f64 = a.row(i).iter().map(|v| v.abs()).sum();
                a.set(i, i, row_sum * n as f64);
            }
        }
        Kind::WithSolution | Kind::Hilbert => {}
    }
    log::debug!("generated {} system of order {}", kind, n);

    System::new(a, b)
}

fn sample<R: Rng>(rng: &mut R, max: f64) -> f64 {
    rng.random::<f64>() * max
}
