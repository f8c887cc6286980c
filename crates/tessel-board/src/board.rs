//! Double-buffered 2D toroidal board.
//!
//! [`Board`] owns two equally sized cell buffers and a selector in
//! `{0, 1}` naming the authoritative one. Everything outside
//! [`Board::advance_with`] reads and writes only the authoritative
//! buffer; the other one is a candidate for the next generation and is
//! never observed.
//!
//! ```text
//! buffers[current]      ←─── authoritative (read by render / click / reset)
//! buffers[1 - current]  ←─── candidate     (written by the next step)
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::{Cell, CellReader, CellWriter, GenerationId};
use tessel_space::{Space, Torus2D};

use crate::error::BoardError;
use crate::lattice::{cycle, Lattice};
use crate::shape::Shape;

/// A fixed-size toroidal grid of cells with double buffering.
///
/// # Examples
///
/// ```
/// use tessel_board::{Board, Shape};
///
/// let mut board = Board::new(8, 8).unwrap();
/// board.inject(-1, -1, &Shape::block());
/// // The block straddles all four edges.
/// assert_eq!(board.get(0, 0), 1);
/// assert_eq!(board.get(7, 7), 1);
/// assert_eq!(board.neighbor_count(0, 0, 1), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    space: Torus2D,
    buffers: [Vec<Cell>; 2],
    current: usize,
    generation: GenerationId,
}

impl Board {
    /// Create an all-zero `width x height` board.
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        let space = Torus2D::new(width, height)?;
        let n = space.cell_count();
        Ok(Self {
            space,
            buffers: [vec![0; n], vec![0; n]],
            current: 0,
            generation: GenerationId::default(),
        })
    }

    /// Create a board whose authoritative buffer holds `cells` (row-major).
    ///
    /// Returns `Err(BoardError::SizeMismatch)` if `cells.len()` is not
    /// `width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Result<Self, BoardError> {
        let mut board = Self::new(width, height)?;
        if cells.len() != board.space.cell_count() {
            return Err(BoardError::SizeMismatch {
                expected: board.space.cell_count(),
                got: cells.len(),
            });
        }
        board.buffers[0] = cells;
        Ok(board)
    }

    /// The board's geometry.
    pub fn space(&self) -> &Torus2D {
        &self.space
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.space.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.space.height()
    }

    /// The authoritative buffer, row-major.
    pub fn current(&self) -> &[Cell] {
        &self.buffers[self.current]
    }

    /// Which of the two buffers is authoritative (0 or 1).
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Generations advanced since construction.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// State at `(row, col)`, wrapping both coordinates.
    pub fn get(&self, row: i32, col: i32) -> Cell {
        self.current()[self.space.wrapped_index(row, col)]
    }

    /// Overwrite the state at `(row, col)`, wrapping both coordinates.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) {
        let i = self.space.wrapped_index(row, col);
        self.buffers[self.current][i] = cell;
    }

    /// How many of the 8 toroidal neighbours of `(row, col)` hold `target`.
    pub fn neighbor_count(&self, row: i32, col: i32, target: Cell) -> u8 {
        let row = tessel_space::wrap(row, self.height());
        let col = tessel_space::wrap(col, self.width());
        self.space.count_matching(self.current(), row, col, &target)
    }

    /// Run one generation step and flip the buffers.
    ///
    /// `step` reads the authoritative buffer and must fully overwrite the
    /// candidate buffer, which still holds an older generation on entry.
    pub fn advance_with<F>(&mut self, step: F)
    where
        F: FnOnce(&Torus2D, &[Cell], &mut [Cell]),
    {
        let [a, b] = &mut self.buffers;
        let (prev, next) = if self.current == 0 { (a, b) } else { (b, a) };
        step(&self.space, prev, next);
        self.current = 1 - self.current;
        self.generation = self.generation.next();
    }

    /// Copy `shape` into the authoritative buffer with its top-left corner
    /// at `(row0, col0)`, wrapping around every edge.
    ///
    /// Every cell of the shape's bounding box is copied, zeros included.
    pub fn inject(&mut self, row0: i32, col0: i32, shape: &Shape) {
        for r in 0..shape.rows() {
            for c in 0..shape.cols() {
                self.set(row0 + r as i32, col0 + c as i32, shape.cell(r, c));
            }
        }
    }

    /// Cycle the state at `(row, col)` modulo `state_count`, returning the
    /// new state. Coordinates past the edge wrap.
    pub fn toggle_cell(&mut self, row: u32, col: u32, state_count: usize) -> Cell {
        let i = self.offset(row, col);
        let next = cycle(self.buffers[self.current][i], state_count);
        self.buffers[self.current][i] = next;
        next
    }

    /// Flat offset of an unsigned `(row, col)`, wrapping both axes.
    fn offset(&self, row: u32, col: u32) -> usize {
        self.space
            .index(row % self.space.height(), col % self.space.width())
    }

    /// Zero the authoritative buffer. The candidate buffer is left alone.
    pub fn clear(&mut self) {
        self.buffers[self.current].fill(0);
    }

    /// Fill the authoritative buffer with uniform random states in
    /// `[0, state_count)` drawn from a generator seeded with `seed`.
    pub fn randomize(&mut self, seed: u64, state_count: usize) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = state_count.clamp(1, tessel_core::MAX_STATES);
        for cell in self.buffers[self.current].iter_mut() {
            *cell = rng.random_range(0..n) as Cell;
        }
    }

    /// Number of authoritative cells holding `target`.
    pub fn population(&self, target: Cell) -> usize {
        self.current().iter().filter(|&&c| c == target).count()
    }
}

impl CellReader for Board {
    fn rows(&self) -> u32 {
        self.height()
    }

    fn cols(&self) -> u32 {
        self.width()
    }

    fn cell(&self, row: u32, col: u32) -> Cell {
        self.current()[self.offset(row, col)]
    }
}

impl CellWriter for Board {
    fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        let i = self.offset(row, col);
        self.buffers[self.current][i] = cell;
    }
}

impl Lattice for Board {
    fn step_space(&self) -> Torus2D {
        self.space
    }

    fn generation(&self) -> GenerationId {
        self.generation
    }

    fn advance_with<F>(&mut self, step: F)
    where
        F: FnOnce(&Torus2D, &[Cell], &mut [Cell]),
    {
        Board::advance_with(self, step);
    }

    fn toggle_cell(&mut self, row: u32, col: u32, state_count: usize) -> Cell {
        Board::toggle_cell(self, row, col, state_count)
    }

    fn clear(&mut self) {
        Board::clear(self);
    }

    fn randomize(&mut self, seed: u64, state_count: usize) {
        Board::randomize(self, seed, state_count);
    }
}
