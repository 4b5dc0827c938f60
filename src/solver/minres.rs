//! Minimal-residual iterative solver.
//!
//! Steepest-descent-style residual minimization: starting from `x = 0`, each
//! step computes the residual `r = A·x − b`, the step size
//! `λ = ⟨r, A·r⟩ / ⟨A·r, A·r⟩`, and updates `x ← x − λ·r`. Suitable for
//! symmetric positive-(semi)definite systems only; no check enforces that
//! precondition. Exhausting the iteration budget is not an error: the best
//! available `x` is kept and the returned stats carry `converged: false`.

use num_traits::Float;

use crate::check::CheckPolicy;
use crate::error::Error;
use crate::matrix::Matrix;
use crate::solver::LinearSolver;
use crate::utils::convergence::{Convergence, SolveStats};
use crate::vector::Vector;

/// Minimal-residual solver with caller-configurable tolerance and iteration
/// budget.
pub struct MinimalResidual<T> {
    pub conv: Convergence<T>,
}

impl<T: Float> MinimalResidual<T> {
    /// Solver stopping when the residual norm drops to `tol` or after
    /// `max_iters` update steps, whichever comes first.
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self {
            conv: Convergence { tol, max_iters },
        }
    }
}

impl Default for MinimalResidual<f64> {
    fn default() -> Self {
        Self::new(1e-10, 100)
    }
}

impl Default for MinimalResidual<f32> {
    fn default() -> Self {
        Self::new(1e-6, 100)
    }
}

impl<T: Float, C: CheckPolicy> LinearSolver<T, C> for MinimalResidual<T> {
    fn solve(
        &self,
        a: &Matrix<T, C>,
        b: &Vector<T, C>,
        x: &mut Vector<T, C>,
    ) -> Result<SolveStats<T>, Error> {
        let n = a.nrows();
        if a.ncols() != n {
            return Err(Error::NotSquare {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        if b.dim() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: b.dim(),
            });
        }

        *x = Vector::zeros(n);
        let mut stats = SolveStats {
            iterations: 0,
            final_residual: T::zero(),
            converged: false,
        };

        for i in 0..=self.conv.max_iters {
            let r = a * &*x - b;
            let res_norm = r.norm_sq().sqrt();
            let (stop, s) = self.conv.check(res_norm, i);
            stats = s;
            if stop {
                break;
            }

            let ar = a * &r;
            let denom = ar.norm_sq();
            if denom.is_zero() {
                // stagnation: the residual lies in the null space of A
                break;
            }
            let lambda = r.dot(&ar) / denom;
            *x -= r * lambda;
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_on_small_spd_system() {
        let a = Matrix::<f64>::from_rows([[1.0, -0.5], [-0.5, 2.0]]);
        let x_true = Vector::from([3.0, -1.5]);
        let b = &a * &x_true;

        let mut x = Vector::zeros(2);
        let stats = MinimalResidual::default().solve(&a, &b, &mut x).unwrap();
        assert!(stats.converged);
        for (xi, ei) in x.iter().zip(x_true.iter()) {
            assert!((xi - ei).abs() < 1e-3, "xi = {xi}, expected = {ei}");
        }
    }

    #[test]
    fn zero_right_hand_side_converges_immediately() {
        let a = Matrix::<f64>::from_rows([[4.0, 1.0], [1.0, 3.0]]);
        let b = Vector::zeros(2);
        let mut x = Vector::zeros(2);
        let stats = MinimalResidual::default().solve(&a, &b, &mut x).unwrap();
        assert!(stats.converged);
        assert_eq!(stats.iterations, 0);
        assert_eq!(x, Vector::zeros(2));
    }

    #[test]
    fn exhausted_budget_reports_non_convergence() {
        let a = Matrix::<f64>::from_rows([[1.0, -0.5], [-0.5, 2.0]]);
        let b = Vector::from([1.0, 1.0]);
        let mut x = Vector::zeros(2);
        let solver = MinimalResidual::new(1e-300, 1);
        let stats = solver.solve(&a, &b, &mut x).unwrap();
        assert!(!stats.converged);
        assert_eq!(stats.iterations, 1);
        // the best available iterate is still returned
        assert!(x.norm_sq() > 0.0);
    }

    #[test]
    fn dimension_mismatch_is_reported() {
        let a = Matrix::<f64>::zeros(2, 2);
        let b = Vector::<f64>::zeros(3);
        let mut x = Vector::zeros(3);
        assert_eq!(
            MinimalResidual::default().solve(&a, &b, &mut x).unwrap_err(),
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }
}
