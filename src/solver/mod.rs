//! Direct & iterative solver interfaces.

use num_traits::Float;

use crate::check::CheckPolicy;
use crate::error::Error;
use crate::matrix::Matrix;
use crate::utils::convergence::SolveStats;
use crate::vector::Vector;

/// Common interface for any direct or iterative solver of `A·x = b`.
///
/// Solvers are stateless values; dimension and squareness violations are
/// reported as typed errors, while non-convergence of an iterative method is
/// not an error and shows up in the returned [`SolveStats`] instead.
pub trait LinearSolver<T: Float, C: CheckPolicy> {
    /// Solve `A·x = b`, writing the result into `x`.
    /// Returns iteration stats (including convergence info).
    fn solve(
        &self,
        a: &Matrix<T, C>,
        b: &Vector<T, C>,
        x: &mut Vector<T, C>,
    ) -> Result<SolveStats<T>, Error>;

    /// Solve `A·x = b` into a freshly allocated vector.
    fn solution(&self, a: &Matrix<T, C>, b: &Vector<T, C>) -> Result<Vector<T, C>, Error> {
        let mut x = Vector::zeros(b.dim());
        self.solve(a, b, &mut x)?;
        Ok(x)
    }
}

pub mod lu;
pub use lu::{LuFactor, LuSolver};

pub mod minres;
pub use minres::MinimalResidual;
