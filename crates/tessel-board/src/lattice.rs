//! The `Lattice` trait: what the simulation loop needs from a board.

use tessel_core::{Cell, CellWriter, GenerationId};
use tessel_space::Torus2D;

use crate::error::BoardError;

/// A double-buffered cell store that a rule can advance.
///
/// The [`CellReader`](tessel_core::CellReader) view always reflects the
/// authoritative buffer; the candidate buffer is only ever handed to a
/// step closure as write-only scratch.
pub trait Lattice: CellWriter + Send + 'static {
    /// The space a generation step runs over.
    ///
    /// For a [`Board`](crate::Board) this is the whole grid; for a
    /// [`RowHistory`](crate::RowHistory) it is a single wrapping row.
    fn step_space(&self) -> Torus2D;

    /// Number of generations advanced since construction.
    fn generation(&self) -> GenerationId;

    /// Advance one generation.
    ///
    /// `step` receives the step space, the authoritative cells, and a
    /// buffer of the same length to fill with the next generation. The
    /// authoritative cells are never mutated during the call.
    fn advance_with<F>(&mut self, step: F)
    where
        F: FnOnce(&Torus2D, &[Cell], &mut [Cell]);

    /// Cycle the cell at `(row, col)` to its next state modulo
    /// `state_count` and return the new state. Coordinates past the
    /// edge wrap.
    fn toggle_cell(&mut self, row: u32, col: u32, state_count: usize) -> Cell;

    /// Reset the authoritative state to all zeros.
    fn clear(&mut self);

    /// Fill the authoritative state with seeded uniform random states.
    fn randomize(&mut self, seed: u64, state_count: usize);

    /// Check every visible cell lies in `[0, state_count)`.
    fn check_states(&self, state_count: usize) -> Result<(), BoardError> {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let cell = self.cell(row, col);
                if cell as usize >= state_count {
                    return Err(BoardError::StateOutOfRange {
                        row,
                        col,
                        cell,
                        state_count,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Next state of `cell` when cycled through `state_count` states.
pub(crate) fn cycle(cell: Cell, state_count: usize) -> Cell {
    ((cell as usize + 1) % state_count.max(1)) as Cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_at_state_count() {
        assert_eq!(cycle(0, 2), 1);
        assert_eq!(cycle(1, 2), 0);
        assert_eq!(cycle(2, 4), 3);
        assert_eq!(cycle(3, 4), 0);
        assert_eq!(cycle(255, 256), 0);
    }

    #[test]
    fn cycle_single_state_stays_zero() {
        assert_eq!(cycle(0, 1), 0);
        assert_eq!(cycle(0, 0), 0);
    }
}
