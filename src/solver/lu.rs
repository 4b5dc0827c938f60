//! Direct dense solver via non-pivoted LU (Doolittle) factorization.
//!
//! The factor stores `L` and `U` packed in one square matrix: `U` on and
//! above the diagonal, `L` strictly below it with an implicit unit diagonal.
//! No pivoting is performed, so a matrix that is nonsingular but has a zero
//! leading pivot is rejected with [`Error::ZeroPivot`]; near-zero pivots pass
//! through and carry the usual numerical caveats of unpivoted elimination.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.2

use num_traits::Float;

use crate::check::{CheckPolicy, Strict};
use crate::error::Error;
use crate::matrix::Matrix;
use crate::solver::LinearSolver;
use crate::utils::convergence::SolveStats;
use crate::vector::Vector;

/// Packed LU factorization of a square matrix, reusable across right-hand
/// sides.
#[derive(Debug)]
pub struct LuFactor<T, C: CheckPolicy = Strict> {
    lu: Matrix<T, C>,
}

impl<T: Float, C: CheckPolicy> LuFactor<T, C> {
    /// Factor `a` as `L·U` by Doolittle elimination.
    ///
    /// For each pivot index in increasing order, the corresponding row of `U`
    /// and column of `L` are derived from the already-resolved prefixes.
    pub fn new(a: &Matrix<T, C>) -> Result<Self, Error> {
        let n = a.nrows();
        if a.ncols() != n {
            return Err(Error::NotSquare {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }

        let mut lu = Matrix::zeros(n, n);
        for i in 0..n {
            // row i of U
            for j in i..n {
                let mut u = a[(i, j)];
                for k in 0..i {
                    u = u - lu[(i, k)] * lu[(k, j)];
                }
                lu[(i, j)] = u;
            }
            if lu[(i, i)].is_zero() {
                return Err(Error::ZeroPivot(i));
            }
            // column i of L
            for j in i + 1..n {
                let mut l = a[(j, i)];
                for k in 0..i {
                    l = l - lu[(j, k)] * lu[(k, i)];
                }
                lu[(j, i)] = l / lu[(i, i)];
            }
        }

        Ok(Self { lu })
    }

    /// Dimension of the factored matrix.
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// Solve `A·x = b` by forward substitution on `L`, then back substitution
    /// on `U`.
    pub fn solve(&self, b: &Vector<T, C>) -> Result<Vector<T, C>, Error> {
        let n = self.dim();
        if b.dim() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: b.dim(),
            });
        }

        // L y = b, resolved in increasing index order
        let mut y = b.clone();
        for i in 0..n {
            for j in 0..i {
                y[i] = y[i] - self.lu[(i, j)] * y[j];
            }
        }

        // U x = y, resolved in decreasing index order
        let mut x = y;
        for i in (0..n).rev() {
            for j in i + 1..n {
                x[i] = x[i] - self.lu[(i, j)] * x[j];
            }
            x[i] = x[i] / self.lu[(i, i)];
        }

        Ok(x)
    }
}

/// Direct solver wrapping [`LuFactor`]; factors on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LuSolver;

impl LuSolver {
    pub fn new() -> Self {
        LuSolver
    }
}

impl<T: Float, C: CheckPolicy> LinearSolver<T, C> for LuSolver {
    fn solve(
        &self,
        a: &Matrix<T, C>,
        b: &Vector<T, C>,
        x: &mut Vector<T, C>,
    ) -> Result<SolveStats<T>, Error> {
        let factor = LuFactor::new(a)?;
        *x = factor.solve(b)?;
        // Direct solvers always "converge" in one step
        Ok(SolveStats {
            iterations: 1,
            final_residual: T::zero(),
            converged: true,
        })
    }
}
