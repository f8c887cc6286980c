//! Seam traits for reading, writing, and drawing cell grids.
//!
//! These decouple the snapshot codec and the renderer from concrete
//! board types: both work through `&dyn CellReader` / `CellWriter`
//! rather than naming a board directly.

use crate::cell::Cell;
use crate::color::Color;

/// Read-only access to a rectangular grid of cells.
///
/// Coordinates passed to [`cell`](CellReader::cell) must satisfy
/// `row < rows()` and `col < cols()`.
pub trait CellReader {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// State of the cell at `(row, col)` in the authoritative buffer.
    fn cell(&self, row: u32, col: u32) -> Cell;

    /// Rows that hold data, counted from row 0. Rows at or beyond this
    /// read as state 0 and are left out of snapshots.
    ///
    /// Fixed grids hold data in every row.
    fn filled_rows(&self) -> u32 {
        self.rows()
    }
}

/// Mutable access to a rectangular grid of cells.
pub trait CellWriter: CellReader {
    /// Overwrite the cell at `(row, col)` in the authoritative buffer.
    fn set_cell(&mut self, row: u32, col: u32, cell: Cell);

    /// Declare that rows `0..rows` hold data, as after loading an image
    /// `rows` tall. Fixed grids ignore this.
    fn set_filled_rows(&mut self, rows: u32) {
        let _ = rows;
    }
}

/// A drawing surface that can colour one grid cell at a time.
///
/// Implemented by the host's renderer. Calls arrive in row-major order
/// once per rendered frame.
pub trait CellSurface {
    /// Fill the cell at `(row, col)` with `color`.
    fn fill_cell(&mut self, row: u32, col: u32, color: Color);
}
