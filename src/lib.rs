//! gridmat: a dense 2D grid container with geometric transforms.
//!
//! The crate provides `Matrix<T>`, a row-major grid of optional cells.
//! Every cell is either present (`Some(value)`) or holds the explicit empty
//! marker (`None`); emptiness is always decided by the marker, never by the
//! stored value. On top of the cell operations (`set`, `set_all`, `fill`,
//! `clear_element`, `clear`, `randomize_all`) the matrix supports clockwise
//! rotation by 90/180/270 degrees and horizontal/vertical flips, including
//! the row/column extent swap that 90 and 270 degree rotations apply to
//! non-square shapes.
//!
//! The design favors a small, fully synchronous API: no linear algebra, no
//! interior mutability, and transforms that build a complete replacement
//! grid before swapping it in.
pub mod error;
pub mod matrix;
pub mod transform;

mod random;
mod render;

pub use error::MatrixError;
pub use matrix::Matrix;
pub use transform::{Plane, Rotation};
