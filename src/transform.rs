//! Whole-grid geometric transforms.
//!
//! Rotations are clockwise quarter, half, and three-quarter turns; flips
//! mirror the grid across its horizontal or vertical midline. Every
//! transform relocates whole cells, empty markers included, so a value
//! never changes, appears, or disappears on the way through.

use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Clockwise rotation amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// A quarter turn.
    Clockwise90,
    /// A half turn.
    Clockwise180,
    /// A three-quarter turn.
    Clockwise270,
}

/// Mirror plane for [`Matrix::flip`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane {
    Horizontal,
    Vertical,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Clockwise90 => write!(f, "clockwise90"),
            Rotation::Clockwise180 => write!(f, "clockwise180"),
            Rotation::Clockwise270 => write!(f, "clockwise270"),
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plane::Horizontal => write!(f, "horizontal"),
            Plane::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Rotation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "90" | "cw90" | "clockwise90" => Ok(Rotation::Clockwise90),
            "180" | "cw180" | "clockwise180" => Ok(Rotation::Clockwise180),
            "270" | "cw270" | "clockwise270" => Ok(Rotation::Clockwise270),
            _ => Err(MatrixError::UnrecognizedRotation(s.to_string())),
        }
    }
}

impl FromStr for Plane {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" => Ok(Plane::Horizontal),
            "vertical" | "v" => Ok(Plane::Vertical),
            _ => Err(MatrixError::UnrecognizedPlane(s.to_string())),
        }
    }
}

impl<T> Matrix<T> {
    /// Rotates the grid clockwise by the given amount.
    ///
    /// Quarter and three-quarter turns exchange the row and column extents,
    /// so a `2x3` matrix comes back as `3x2`; a half turn keeps the shape.
    /// Cells move without being cloned. Returns the matrix so calls can
    /// chain.
    pub fn rotate(&mut self, rotation: Rotation) -> &mut Self {
        log::trace!("rotating {}x{} matrix {}", self.rows, self.cols, rotation);
        let (rows, cols) = (self.rows, self.cols);
        let mut next = match rotation {
            Rotation::Clockwise180 => Self::build(rows, cols),
            _ => Self::build(cols, rows),
        };
        for (index, cell) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            let (i, j) = (index / cols, index % cols);
            let dest = match rotation {
                Rotation::Clockwise90 => j * rows + (rows - 1 - i),
                Rotation::Clockwise180 => (rows - 1 - i) * cols + (cols - 1 - j),
                Rotation::Clockwise270 => (cols - 1 - j) * rows + i,
            };
            next[dest] = cell;
        }
        self.cells = next;
        if rotation != Rotation::Clockwise180 && !self.is_square() {
            std::mem::swap(&mut self.rows, &mut self.cols);
        }
        self
    }

    /// Mirrors the grid across the given plane.
    ///
    /// A horizontal flip reverses the order of the rows; a vertical flip
    /// reverses each row in place. The shape never changes. Returns the
    /// matrix so calls can chain.
    pub fn flip(&mut self, plane: Plane) -> &mut Self {
        log::trace!("flipping {}x{} matrix {}", self.rows, self.cols, plane);
        let (rows, cols) = (self.rows, self.cols);
        let mut next = Self::build(rows, cols);
        for (index, cell) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            let (i, j) = (index / cols, index % cols);
            let dest = match plane {
                Plane::Horizontal => (rows - 1 - i) * cols + j,
                Plane::Vertical => i * cols + (cols - 1 - j),
            };
            next[dest] = cell;
        }
        self.cells = next;
        self
    }
}
