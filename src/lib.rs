//! ergodic: checked dense linear algebra for continuous-time Markov chains
//!
//! This crate provides fixed-dimension vector and matrix types with pluggable
//! precondition checking, a non-pivoted LU direct solver, a minimal-residual
//! iterative solver, and a routine computing stationary distributions of
//! continuous-time Markov chains from their transition-intensity matrices.

pub mod check;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod stochastic;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use check::{CheckPolicy, Strict, Unchecked};
pub use error::Error;
pub use matrix::Matrix;
pub use solver::{LinearSolver, LuFactor, LuSolver, MinimalResidual};
pub use stochastic::{stationary, stationary_distribution};
pub use vector::Vector;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::{Convergence, SolveStats};
