mod elim;
mod error;
mod gauss;
mod generate;
mod lsopt;
mod math;
mod read;
mod residual;
mod solve;
mod system;
mod traits;

pub mod debug;
pub mod dense;

pub use elim::*;
pub use error::*;
pub use gauss::*;
pub use generate::*;
pub use lsopt::*;
pub use math::*;
pub use read::*;
pub use residual::*;
pub use solve::*;
pub use system::*;
pub use traits::*;

#[cfg(test)]
mod tests;
