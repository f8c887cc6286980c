//! Ring buffer of the most recent rows of a one-dimensional automaton.
//!
//! Row slots are reused in place: once `height` rows are held, pushing a
//! new row overwrites the oldest one and moves `begin` forward.
//!
//! ```text
//! slots:  [ r3 | r4 | r1 | r2 ]      begin = 2, size = 4
//!                     ^ oldest   newest = slot(begin, size - 1) = 1
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::{Cell, CellReader, CellWriter, GenerationId};
use tessel_space::{Ring1D, Torus2D};

use crate::error::BoardError;
use crate::lattice::{cycle, Lattice};

/// The last `height` generations of a `width`-cell wrapping row.
///
/// Visible row 0 is the oldest held generation; visible row `size - 1`
/// is the newest. Rows at or beyond `size` read as state 0.
///
/// # Examples
///
/// ```
/// use tessel_board::RowHistory;
/// use tessel_core::CellReader;
///
/// let mut h = RowHistory::new(3, 2).unwrap();
/// h.push_row(&[1, 0, 0]).unwrap();
/// h.push_row(&[0, 1, 0]).unwrap();
/// h.push_row(&[0, 0, 1]).unwrap();
/// // The first row has been evicted.
/// assert_eq!(h.size(), 2);
/// assert_eq!(h.cell(0, 1), 1);
/// assert_eq!(h.latest(), &[0, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHistory {
    /// `height` row slots of `width` cells, slot-major.
    slots: Vec<Cell>,
    /// Candidate buffer for the next row.
    scratch: Vec<Cell>,
    row_space: Torus2D,
    ring: Ring1D,
    begin: usize,
    size: usize,
    generation: GenerationId,
}

impl RowHistory {
    /// Create a history of `height` rows of `width` cells, holding a
    /// single all-zero row.
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        let row_space = Torus2D::new(width, 1)?;
        let ring = Ring1D::new(height)?;
        Ok(Self {
            slots: vec![0; width as usize * height as usize],
            scratch: vec![0; width as usize],
            row_space,
            ring,
            begin: 0,
            size: 1,
            generation: GenerationId::default(),
        })
    }

    /// Create a history whose only row is `row`.
    pub fn with_row(height: u32, row: &[Cell]) -> Result<Self, BoardError> {
        let width = u32::try_from(row.len()).unwrap_or(u32::MAX);
        let mut history = Self::new(width, height)?;
        history.slots[..row.len()].copy_from_slice(row);
        Ok(history)
    }

    /// Cells per row.
    pub fn width(&self) -> u32 {
        self.row_space.width()
    }

    /// Maximum number of rows held.
    pub fn height(&self) -> u32 {
        self.ring.len()
    }

    /// Number of rows currently held.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Slot holding the oldest row.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Append `row` as the newest generation, evicting the oldest row if
    /// the history is full.
    ///
    /// Returns `Err(BoardError::SizeMismatch)` if `row` is not `width`
    /// cells long.
    pub fn push_row(&mut self, row: &[Cell]) -> Result<(), BoardError> {
        if row.len() != self.width() as usize {
            return Err(BoardError::SizeMismatch {
                expected: self.width() as usize,
                got: row.len(),
            });
        }
        let slot = self.claim_slot();
        self.row_mut(slot).copy_from_slice(row);
        Ok(())
    }

    /// The newest row.
    pub fn latest(&self) -> &[Cell] {
        self.row(self.ring.slot(self.begin, self.size - 1))
    }

    /// Visible rows, oldest first.
    pub fn rows_oldest_first(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.size).map(move |i| self.row(self.ring.slot(self.begin, i)))
    }

    /// Fill the newest row with seeded uniform random states.
    pub fn randomize_latest(&mut self, seed: u64, state_count: usize) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = state_count.clamp(1, tessel_core::MAX_STATES);
        let slot = self.ring.slot(self.begin, self.size - 1);
        for cell in self.row_mut(slot) {
            *cell = rng.random_range(0..n) as Cell;
        }
    }

    /// Advance the ring by one slot and return the slot for the new row.
    fn claim_slot(&mut self) -> usize {
        let slot = self.ring.slot(self.begin, self.size);
        if self.size < self.height() as usize {
            self.size += 1;
        } else {
            self.begin = self.ring.slot(self.begin, 1);
        }
        slot
    }

    fn row(&self, slot: usize) -> &[Cell] {
        let w = self.width() as usize;
        &self.slots[slot * w..(slot + 1) * w]
    }

    fn row_mut(&mut self, slot: usize) -> &mut [Cell] {
        let w = self.width() as usize;
        &mut self.slots[slot * w..(slot + 1) * w]
    }

    /// Slot-major offset of visible `(row, col)`. `row` must be below
    /// `height`; `col` wraps.
    fn visible_index(&self, row: u32, col: u32) -> usize {
        let col = col % self.width();
        self.ring.slot(self.begin, row as usize) * self.width() as usize + col as usize
    }
}

impl CellReader for RowHistory {
    fn rows(&self) -> u32 {
        self.height()
    }

    fn cols(&self) -> u32 {
        self.width()
    }

    fn cell(&self, row: u32, col: u32) -> Cell {
        if row as usize >= self.size {
            return 0;
        }
        self.slots[self.visible_index(row, col)]
    }

    fn filled_rows(&self) -> u32 {
        self.size as u32
    }
}

impl CellWriter for RowHistory {
    /// Writing below the newest row extends the history down to `row`.
    /// Rows past `height` wrap.
    fn set_cell(&mut self, row: u32, col: u32, cell: Cell) {
        let row = row % self.height();
        if row as usize >= self.size {
            self.size = row as usize + 1;
        }
        let i = self.visible_index(row, col);
        self.slots[i] = cell;
    }

    /// Hold exactly `rows` rows, oldest first from the current `begin`.
    /// The last of them becomes the newest generation.
    fn set_filled_rows(&mut self, rows: u32) {
        self.size = (rows as usize).clamp(1, self.height() as usize);
    }
}

impl Lattice for RowHistory {
    fn step_space(&self) -> Torus2D {
        self.row_space
    }

    fn generation(&self) -> GenerationId {
        self.generation
    }

    fn advance_with<F>(&mut self, step: F)
    where
        F: FnOnce(&Torus2D, &[Cell], &mut [Cell]),
    {
        let w = self.width() as usize;
        let newest = self.ring.slot(self.begin, self.size - 1);
        step(
            &self.row_space,
            &self.slots[newest * w..(newest + 1) * w],
            &mut self.scratch,
        );
        let slot = self.claim_slot();
        self.slots[slot * w..(slot + 1) * w].copy_from_slice(&self.scratch);
        self.generation = self.generation.next();
    }

    /// Toggle within a visible row; clicks below the newest row toggle
    /// nothing and return 0.
    fn toggle_cell(&mut self, row: u32, col: u32, state_count: usize) -> Cell {
        if row as usize >= self.size {
            return 0;
        }
        let i = self.visible_index(row, col);
        self.slots[i] = cycle(self.slots[i], state_count);
        self.slots[i]
    }

    fn clear(&mut self) {
        self.slots.fill(0);
        self.begin = 0;
        self.size = 1;
    }

    fn randomize(&mut self, seed: u64, state_count: usize) {
        self.randomize_latest(seed, state_count);
    }
}
