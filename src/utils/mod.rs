//! Shared solver utilities.

pub mod convergence;
