use crate::gauss::ItOpt;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Alg {
    /// Gaussian elimination without pivoting.
    GE = 0,
    /// Gaussian elimination with partial pivoting.
    GEPP = 1,
    /// Jacobi method.
    JACOBI = 2,
    /// Gauss-Seidel method.
    GS = 3,
}

impl Alg {
    pub const ALL: [Alg; 4] = [Alg::GE, Alg::GEPP, Alg::JACOBI, Alg::GS];

    pub fn is_iterative(&self) -> bool {
        matches!(self, Alg::JACOBI | Alg::GS)
    }
}

impl fmt::Display for Alg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alg::GE => "ge",
            Alg::GEPP => "gepp",
            Alg::JACOBI => "jacobi",
            Alg::GS => "gs",
        };
        f.write_str(name)
    }
}

impl FromStr for Alg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ge" => Ok(Alg::GE),
            "gepp" => Ok(Alg::GEPP),
            "jacobi" => Ok(Alg::JACOBI),
            "gs" | "gauss-seidel" => Ok(Alg::GS),
            _ => Err(format!(
                "unknown algorithm '{}' (expected ge, gepp, jacobi or gs)",
                s
            )),
        }
    }
}

pub struct LSOpt {
    // Solution algorithm. Default is Gaussian elimination with pivoting.
    pub alg: Alg,

    // Termination tolerance on the maximum relative change between
    // successive iterates. Default value is 1e-6.
    pub tolerance: f64,

    // Maximum number of iterations for the Jacobi method. Default value is 1000.
    pub max_it_jacobi: usize,
    // Maximum number of iterations for the Gauss-Seidel method. Default value is 1000.
    pub max_it_gs: usize,

    // Iterates with an infinity norm above this are treated as diverged.
    // Default value is 1e50.
    pub div_threshold: f64,
}

impl Default for LSOpt {
    fn default() -> Self {
        Self {
            alg: Alg::GEPP,
            tolerance: 1e-6,
            max_it_jacobi: 1000,
            max_it_gs: 1000,
            div_threshold: 1e50,
        }
    }
}

impl LSOpt {
    /// Sets the iteration limit of both iterative methods.
    pub fn max_it(&mut self, max_it: usize) -> &mut Self {
        self.max_it_jacobi = max_it;
        self.max_it_gs = max_it;
        self
    }

    /// Stopping parameters for `alg`.
    pub fn it_opt(&self, alg: Alg) -> ItOpt {
        ItOpt {
            tolerance: self.tolerance,
            max_it: match alg {
                Alg::GS => self.max_it_gs,
                _ => self.max_it_jacobi,
            },
            div_threshold: self.div_threshold,
        }
    }
}
