//! Stationary distributions of continuous-time Markov chains.
//!
//! A chain is described by its transition-intensity matrix `Λ`: the
//! off-diagonal entry `(i, j)` is the transition rate from state `i` to
//! state `j`, and the diagonal is ignored. The stationary probabilities `π`
//! satisfy the balance equations `π·Λ = 0` together with `Σπ = 1`; the
//! linearly dependent last balance equation is replaced by the normalization
//! constraint and the resulting system is handed to a pluggable linear
//! solver.

use num_traits::Float;

use crate::check::CheckPolicy;
use crate::error::Error;
use crate::matrix::Matrix;
use crate::solver::{LinearSolver, LuSolver};
use crate::vector::Vector;

/// Stationary probability vector of the chain with intensity matrix
/// `lambda`, computed with the given solver.
///
/// The result is not validated: the solver's numerical error decides how
/// close the entries are to non-negative and summing to one. Callers needing
/// a hard guarantee must validate and renormalize themselves.
pub fn stationary_distribution<T, C, S>(
    lambda: &Matrix<T, C>,
    solver: &S,
) -> Result<Vector<T, C>, Error>
where
    T: Float,
    C: CheckPolicy,
    S: LinearSolver<T, C>,
{
    let n = lambda.nrows();
    if lambda.ncols() != n {
        return Err(Error::NotSquare {
            rows: lambda.nrows(),
            cols: lambda.ncols(),
        });
    }
    if n == 0 {
        return Err(Error::EmptySystem);
    }

    // Balance equation for state i: outflow -sum_{j != i} lambda(i, j) on
    // the diagonal, inflow lambda(j, i) elsewhere.
    let mut a = Matrix::<T, C>::zeros(n, n);
    for i in 0..n - 1 {
        for j in 0..n {
            if j != i {
                a[(i, i)] = a[(i, i)] - lambda[(i, j)];
                a[(i, j)] = lambda[(j, i)];
            }
        }
    }
    // The last row becomes the normalization constraint sum(pi) = 1.
    for j in 0..n {
        a[(n - 1, j)] = T::one();
    }

    let mut b = Vector::zeros(n);
    b[n - 1] = T::one();

    solver.solution(&a, &b)
}

/// [`stationary_distribution`] with the default LU solver.
pub fn stationary<T, C>(lambda: &Matrix<T, C>) -> Result<Vector<T, C>, Error>
where
    T: Float,
    C: CheckPolicy,
{
    stationary_distribution(lambda, &LuSolver)
}
