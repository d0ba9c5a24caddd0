//! Random population of the grid.

use rand::distributions::{Distribution, Standard};
use rand::thread_rng;
use rand::Rng;

use crate::matrix::Matrix;

impl<T> Matrix<T>
where
    Standard: Distribution<T>,
{
    /// Fills every cell with a fresh sample from the thread-local
    /// generator, overwriting values and empty markers alike.
    ///
    /// Returns the matrix so calls can chain.
    pub fn randomize_all(&mut self) -> &mut Self {
        self.randomize_all_with(&mut thread_rng())
    }

    /// Like [`Matrix::randomize_all`], but samples from a caller-supplied
    /// generator so a seeded run produces the same grid every time.
    pub fn randomize_all_with<R: Rng>(&mut self, rng: &mut R) -> &mut Self {
        log::debug!(
            "randomizing all {} cells of {}x{} matrix",
            self.cells.len(),
            self.rows,
            self.cols
        );
        for cell in self.cells.iter_mut() {
            *cell = Some(rng.gen());
        }
        self
    }
}
