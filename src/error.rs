use thiserror::Error;

// Unified error type for ergodic

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("dimension mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("index {index} out of range for dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },
    #[error("entry ({row}, {col}) out of range for {rows}x{cols} matrix")]
    EntryOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("empty system")]
    EmptySystem,
}
