//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised by grid access and generation advance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("grid size mismatch: expected {expected:?}, found {found:?}")]
    SizeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Errors raised when saving or loading a grid snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("image codec failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("snapshot is {found:?} but the grid is {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (u32, u32),
    },
    #[error("a {width}x{height} grid does not fit in an image")]
    TooLarge {
        width: usize,
        height: usize,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}
