//! Error types for palette construction.

use std::error::Error;
use std::fmt;

use crate::color::Color;

/// Errors detected while building a [`Palette`](crate::Palette).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteError {
    /// A palette needs at least one colour.
    Empty,
    /// More colours than a [`Cell`](crate::Cell) can index.
    TooManyStates {
        /// Number of colours supplied.
        count: usize,
    },
    /// Two states share a colour, which would make loading ambiguous.
    DuplicateColor {
        /// The repeated colour.
        color: Color,
        /// First state using the colour.
        first: usize,
        /// Second state using the colour.
        second: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must have at least one colour"),
            Self::TooManyStates { count } => write!(
                f,
                "palette has {count} colours, at most {} states are supported",
                crate::MAX_STATES
            ),
            Self::DuplicateColor {
                color,
                first,
                second,
            } => write!(
                f,
                "colour {color} is used by both state {first} and state {second}"
            ),
        }
    }
}

impl Error for PaletteError {}
