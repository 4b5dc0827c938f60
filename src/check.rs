//! Precondition check policies for vectors and matrices.
//!
//! A policy is a zero-sized type plugged into [`Vector`](crate::vector::Vector)
//! and [`Matrix`](crate::matrix::Matrix) as a generic parameter. [`Strict`]
//! panics with a typed [`Error`](crate::error::Error) message on any violated
//! precondition; [`Unchecked`] reduces each check to a `debug_assert!`, so
//! release builds skip them entirely. Out-of-range indexing under `Unchecked`
//! still hits the backing buffer's own bounds check rather than undefined
//! behavior.

use std::fmt::Debug;

use num_traits::Zero;

use crate::error::Error;

/// Strategy for validating shape, index and divisor preconditions.
pub trait CheckPolicy: Copy + Clone + Debug + Default + PartialEq + Eq + 'static {
    /// Two vector dimensions must agree.
    fn dim_eq(expected: usize, found: usize);
    /// Two matrix shapes must agree.
    fn shape_eq(left: (usize, usize), right: (usize, usize));
    /// A vector index must lie in `[0, dim)`.
    fn index(index: usize, dim: usize);
    /// A matrix entry must lie in `[0, rows) x [0, cols)`.
    fn entry(row: usize, col: usize, rows: usize, cols: usize);
    /// A scalar divisor must be non-zero.
    fn nonzero_divisor<T: Zero>(divisor: &T);
}

/// Default policy: every violated precondition panics with the message of the
/// corresponding [`Error`](crate::error::Error) variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Strict;

impl CheckPolicy for Strict {
    fn dim_eq(expected: usize, found: usize) {
        if expected != found {
            panic!("{}", Error::DimensionMismatch { expected, found });
        }
    }

    fn shape_eq(left: (usize, usize), right: (usize, usize)) {
        if left != right {
            panic!("{}", Error::ShapeMismatch { left, right });
        }
    }

    fn index(index: usize, dim: usize) {
        if index >= dim {
            panic!("{}", Error::IndexOutOfRange { index, dim });
        }
    }

    fn entry(row: usize, col: usize, rows: usize, cols: usize) {
        if row >= rows || col >= cols {
            panic!("{}", Error::EntryOutOfRange { row, col, rows, cols });
        }
    }

    fn nonzero_divisor<T: Zero>(divisor: &T) {
        if divisor.is_zero() {
            panic!("{}", Error::DivisionByZero);
        }
    }
}

/// Opt-in policy for callers that have already validated their inputs.
///
/// Checks degrade to `debug_assert!`, so they are active in test and debug
/// builds and compiled out in release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unchecked;

impl CheckPolicy for Unchecked {
    fn dim_eq(expected: usize, found: usize) {
        debug_assert_eq!(expected, found, "dimension mismatch");
    }

    fn shape_eq(left: (usize, usize), right: (usize, usize)) {
        debug_assert_eq!(left, right, "dimension mismatch");
    }

    fn index(index: usize, dim: usize) {
        debug_assert!(index < dim, "index {index} out of range for dimension {dim}");
    }

    fn entry(row: usize, col: usize, rows: usize, cols: usize) {
        debug_assert!(
            row < rows && col < cols,
            "entry ({row}, {col}) out of range for {rows}x{cols} matrix"
        );
    }

    fn nonzero_divisor<T: Zero>(divisor: &T) {
        debug_assert!(!divisor.is_zero(), "division by zero");
    }
}
