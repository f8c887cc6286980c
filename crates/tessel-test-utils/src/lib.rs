//! Test utilities and mock types for Tessel development.
//!
//! Provides mock implementations of the core seam traits
//! ([`CellReader`], [`CellWriter`], [`CellSurface`]) and palette and grid
//! fixtures for constructing test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use tessel_core::{Cell, CellReader, CellSurface, CellWriter, Color};

/// Plain row-major grid implementing [`CellReader`] and [`CellWriter`].
///
/// Stands in for a board wherever only the seam traits are exercised,
/// e.g. by the snapshot codec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockGrid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl MockGrid {
    /// All-zero `rows x cols` grid.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows as usize * cols as usize],
        }
    }

    /// Grid holding `cells` row-major.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != rows * cols`.
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), rows as usize * cols as usize, "cell count mismatch");
        Self { rows, cols, cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrite every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }
}

impl CellReader for MockGrid {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn cell(&self, row: u32, col: u32) -> Cell {
        self.cells[row as usize * self.cols as usize + col as usize]
    }
}

impl CellWriter for MockGrid {
    fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        self.cells[row as usize * self.cols as usize + col as usize] = cell;
    }
}

/// Recording [`CellSurface`]: remembers every fill in call order.
#[derive(Clone, Debug, Default)]
pub struct MockSurface {
    pub fills: Vec<(u32, u32, Color)>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour most recently filled at `(row, col)`, if any.
    pub fn color_at(&self, row: u32, col: u32) -> Option<Color> {
        self.fills
            .iter()
            .rev()
            .find(|&&(r, c, _)| r == row && c == col)
            .map(|&(_, _, color)| color)
    }

    /// Forget recorded fills.
    pub fn reset(&mut self) {
        self.fills.clear();
    }
}

impl CellSurface for MockSurface {
    fn fill_cell(&mut self, row: u32, col: u32, color: Color) {
        self.fills.push((row, col, color));
    }
}
