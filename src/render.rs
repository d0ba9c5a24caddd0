//! Human-readable renderings of the grid.
//!
//! Two formats share one row renderer: the `Display` impl emits the whole
//! grid on a single line as nested sequences, and [`Matrix::pretty`] emits
//! one row per line. Empty cells render as the literal token `None` in both
//! formats. Present values always render through their own `Display` impl,
//! so a stored `0` prints as `0`, never as `None`.

use std::fmt;

use crate::matrix::Matrix;

impl<T: fmt::Display> Matrix<T> {
    /// Multi-line rendering, one bracketed row per line, no trailing
    /// newline.
    pub fn pretty(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            lines.push(self.render_row(row));
        }
        lines.join("\n")
    }

    fn render_row(&self, row: usize) -> String {
        let mut out = String::from("[");
        for (idx, cell) in self.row(row).iter().enumerate() {
            match cell {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push_str("None"),
            }
            if idx + 1 != self.cols {
                out.push_str(", ");
            }
        }
        out.push(']');
        out
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            write!(f, "{}", self.render_row(row))?;
            if row + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
