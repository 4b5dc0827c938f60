//! Convergence tracking & tolerance checks for iterative solvers.

/// Stopping criteria: absolute residual-norm tolerance and iteration budget.
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Returns (should_stop, stats) given the residual norm after `i` update
    /// steps. Exhausting the budget stops the iteration without setting
    /// `converged`.
    pub fn check(&self, res_norm: T, i: usize) -> (bool, SolveStats<T>) {
        let converged = res_norm <= self.tol;
        (
            converged || i >= self.max_iters,
            SolveStats {
                iterations: i,
                final_residual: res_norm,
                converged,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_on_tolerance() {
        let conv = Convergence {
            tol: 1e-8,
            max_iters: 100,
        };
        let (stop, stats) = conv.check(1e-9, 3);
        assert!(stop);
        assert!(stats.converged);
        assert_eq!(stats.iterations, 3);
    }

    #[test]
    fn stops_on_budget_without_convergence() {
        let conv = Convergence {
            tol: 1e-8,
            max_iters: 10,
        };
        let (stop, stats) = conv.check(1.0, 10);
        assert!(stop);
        assert!(!stats.converged);
        assert_eq!(stats.final_residual, 1.0);
    }

    #[test]
    fn keeps_going_otherwise() {
        let conv = Convergence {
            tol: 1e-8,
            max_iters: 10,
        };
        let (stop, stats) = conv.check(1.0, 4);
        assert!(!stop);
        assert!(!stats.converged);
    }
}
