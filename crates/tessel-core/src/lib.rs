//! Core types and traits for the Tessel cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: cell
//! states, RGBA colours, palettes, generation IDs, and the seam traits
//! through which boards are read, written, and drawn.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod color;
pub mod error;
pub mod id;
pub mod palette;
pub mod traits;

pub use cell::{Cell, MAX_STATES};
pub use color::Color;
pub use error::PaletteError;
pub use id::GenerationId;
pub use palette::Palette;
pub use traits::{CellReader, CellSurface, CellWriter};
