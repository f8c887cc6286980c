//! Error types for board construction and editing.

use std::error::Error;
use std::fmt;

use tessel_core::Cell;
use tessel_space::SpaceError;

/// Errors arising from board and shape construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The requested dimensions do not form a valid space.
    Space(SpaceError),
    /// A cell buffer does not match the board's cell count.
    SizeMismatch {
        /// Number of cells the board holds.
        expected: usize,
        /// Number of cells supplied.
        got: usize,
    },
    /// A shape's cell vector does not match its declared dimensions.
    ShapeMismatch {
        /// Declared row count.
        rows: u32,
        /// Declared column count.
        cols: u32,
        /// Length of the supplied cell vector.
        len: usize,
    },
    /// A shape pattern contains a character with no cell meaning.
    ShapeSyntax {
        /// Pattern row of the offending character.
        row: usize,
        /// Pattern column of the offending character.
        col: usize,
        /// The offending character.
        ch: char,
    },
    /// A cell holds a state the automaton does not define.
    StateOutOfRange {
        /// Row of the offending cell.
        row: u32,
        /// Column of the offending cell.
        col: u32,
        /// The offending state.
        cell: Cell,
        /// Number of states the automaton defines.
        state_count: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "invalid board space: {e}"),
            Self::SizeMismatch { expected, got } => {
                write!(f, "cell buffer length {got} does not match board size {expected}")
            }
            Self::ShapeMismatch { rows, cols, len } => {
                write!(f, "shape {rows}x{cols} needs {} cells, got {len}", *rows as usize * *cols as usize)
            }
            Self::ShapeSyntax { row, col, ch } => {
                write!(f, "unexpected {ch:?} in shape pattern at row {row}, column {col}")
            }
            Self::StateOutOfRange {
                row,
                col,
                cell,
                state_count,
            } => write!(
                f,
                "cell ({row}, {col}) holds state {cell}, automaton has {state_count} states"
            ),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for BoardError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}
