use std::error::Error;
use std::fmt;

/// Custom error type for matrix construction, cell access, and parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A supplied row or column extent was below the minimum of 1.
    InvalidDimension(usize),
    /// Dimension-slice construction was given more than 2 extents.
    InvalidArguments(usize),
    /// Coordinates fell outside the current shape.
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A rotation spelling that `Rotation::from_str` does not know.
    UnrecognizedRotation(String),
    /// A plane spelling that `Plane::from_str` does not know.
    UnrecognizedPlane(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimension(dimension) => {
                write!(f, "matrix dimension {} must be greater than 0", dimension)
            }
            MatrixError::InvalidArguments(count) => {
                write!(f, "expected at most 2 dimension values, got {}", count)
            }
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "coordinates ({}, {}) out of bounds for {}x{} matrix",
                    row, col, rows, cols
                )
            }
            MatrixError::UnrecognizedRotation(input) => {
                write!(f, "unrecognized rotation: {}", input)
            }
            MatrixError::UnrecognizedPlane(input) => {
                write!(f, "unrecognized plane: {}", input)
            }
        }
    }
}

impl Error for MatrixError {}
