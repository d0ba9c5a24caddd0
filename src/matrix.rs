//! The dense 2D grid container at the heart of the crate.
//!
//! `Matrix<T>` keeps `rows * cols` optional cells in a flat row-major
//! vector. Cells start out empty and move between the present and empty
//! states through the mutating operations below; the geometric transforms
//! live in the `transform` module.

use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::MatrixError;

/// A dense `rows x cols` grid of optional cells.
///
/// Each cell holds either a value (`Some`) or the explicit empty marker
/// (`None`). The empty marker is not a value of `T`: a cell containing a
/// zero or an empty string is present, not empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<Option<T>>,
}

impl<T> Matrix<T> {
    pub const DEFAULT_ROWS: usize = 3;
    pub const DEFAULT_COLS: usize = 3;

    /// Creates a matrix with the default 3x3 shape, every cell empty.
    pub fn new() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
            cells: Self::build(Self::DEFAULT_ROWS, Self::DEFAULT_COLS),
        }
    }

    /// Creates a square `dimension x dimension` matrix, every cell empty.
    ///
    /// Fails with `MatrixError::InvalidDimension` if `dimension` is below 1.
    pub fn square(dimension: usize) -> Result<Self, MatrixError> {
        Self::validate_dimension(dimension)?;
        Ok(Self {
            rows: dimension,
            cols: dimension,
            cells: Self::build(dimension, dimension),
        })
    }

    /// Creates a `rows x cols` matrix, every cell empty.
    ///
    /// Each extent is validated independently before anything is allocated;
    /// an extent below 1 fails with `MatrixError::InvalidDimension`.
    pub fn with_shape(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::validate_dimension(rows)?;
        Self::validate_dimension(cols)?;
        Ok(Self {
            rows,
            cols,
            cells: Self::build(rows, cols),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The `(rows, cols)` pair describing the grid extents.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the row and column extents are equal.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Bounds-checked read of the cell at `(row, col)`.
    ///
    /// Distinguishes the three cases a caller can hit: coordinates outside
    /// the current shape (`Err`), an in-range empty cell (`Ok(None)`), and
    /// an in-range present value (`Ok(Some(&value))`).
    pub fn get(&self, row: usize, col: usize) -> Result<Option<&T>, MatrixError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.offset(row, col)].as_ref())
    }

    /// Borrows one row of the backing storage.
    pub fn row(&self, row: usize) -> &[Option<T>] {
        let start = self.offset(row, 0);
        &self.cells[start..start + self.cols]
    }

    /// Borrows the whole backing storage in row-major order.
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Sets `value` at `(row, col)`, overwriting any existing content,
    /// value or empty marker alike.
    ///
    /// Coordinates outside the current shape fail with
    /// `MatrixError::IndexOutOfBounds` before any mutation takes place.
    /// Returns the matrix so calls can chain.
    pub fn set(&mut self, value: T, row: usize, col: usize) -> Result<&mut Self, MatrixError> {
        self.check_bounds(row, col)?;
        let offset = self.offset(row, col);
        self.cells[offset] = Some(value);
        Ok(self)
    }

    /// Resets the single cell at `(row, col)` to the empty marker.
    ///
    /// Same bounds contract as [`Matrix::set`].
    pub fn clear_element(&mut self, row: usize, col: usize) -> Result<&mut Self, MatrixError> {
        self.check_bounds(row, col)?;
        let offset = self.offset(row, col);
        self.cells[offset] = None;
        Ok(self)
    }

    /// Discards the current grid and allocates a fresh all-empty one of the
    /// same shape.
    pub fn clear(&mut self) {
        log::trace!("clearing {}x{} matrix", self.rows, self.cols);
        self.cells = Self::build(self.rows, self.cols);
    }

    fn validate_dimension(dimension: usize) -> Result<(), MatrixError> {
        if dimension < 1 {
            return Err(MatrixError::InvalidDimension(dimension));
        }
        Ok(())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub(crate) fn build(rows: usize, cols: usize) -> Vec<Option<T>> {
        (0..rows * cols).map(|_| None).collect()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    /// Sets every cell to `value`, overwriting existing values.
    ///
    /// Returns the matrix so calls can chain.
    pub fn set_all(&mut self, value: T) -> &mut Self {
        for cell in self.cells.iter_mut() {
            *cell = Some(value.clone());
        }
        self
    }

    /// Sets every *empty* cell to `value`, filling the matrix.
    ///
    /// Cells that already hold a value are left untouched; only the empty
    /// marker decides what gets written, never the stored value itself.
    /// Returns the matrix so calls can chain.
    pub fn fill(&mut self, value: T) -> &mut Self {
        for cell in self.cells.iter_mut() {
            if cell.is_none() {
                *cell = Some(value.clone());
            }
        }
        self
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    /// Creates a validated `rows x cols` matrix with every cell present and
    /// holding `T::zero()`.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let mut matrix = Self::with_shape(rows, cols)?;
        matrix.set_all(T::zero());
        Ok(matrix)
    }
}

impl<T> Matrix<T>
where
    T: Clone + One,
{
    /// Creates a validated `rows x cols` matrix with every cell present and
    /// holding `T::one()`.
    pub fn ones(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let mut matrix = Self::with_shape(rows, cols)?;
        matrix.set_all(T::one());
        Ok(matrix)
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction from a slice of dimension values: no entries gives the
/// default shape, one entry a square matrix, two entries a `rows x cols`
/// matrix. More than two entries fail with `MatrixError::InvalidArguments`.
impl<T> TryFrom<&[usize]> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(dims: &[usize]) -> Result<Self, Self::Error> {
        match dims {
            [] => Ok(Self::new()),
            [dimension] => Self::square(*dimension),
            [rows, cols] => Self::with_shape(*rows, *cols),
            _ => Err(MatrixError::InvalidArguments(dims.len())),
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = Option<T>;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "coordinates ({}, {}) out of bounds for {}x{} matrix",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &self.cells[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "coordinates ({}, {}) out of bounds for {}x{} matrix",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &mut self.cells[offset]
    }
}
