//! Tessel: a cellular automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // A glider on a 16×16 torus, stepped through a full period.
//! let mut board = Board::new(16, 16).unwrap();
//! board.inject(0, 0, &Shape::glider());
//! let config = SimConfig::from_preset(board, "conway").unwrap();
//! let mut sim = Simulation::new(config).unwrap();
//!
//! sim.step(4);
//! assert_eq!(sim.lattice().generation(), GenerationId(4));
//! assert_eq!(sim.lattice().population(1), 5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Cells, colours, palettes, grid access traits |
//! | [`space`] | `tessel-space` | Toroidal and ring geometry |
//! | [`board`] | `tessel-board` | Double-buffered boards, row history, shapes |
//! | [`rule`] | `tessel-rule` | Transition rules and named presets |
//! | [`snapshot`] | `tessel-snapshot` | PNG palette codec |
//! | [`engine`] | `tessel-engine` | Generation clock and frame loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`tessel-core`).
///
/// Contains [`types::Cell`], [`types::Color`], [`types::Palette`], and the
/// grid access traits ([`types::CellReader`], [`types::CellWriter`],
/// [`types::CellSurface`]).
pub use tessel_core as types;

/// Lattice geometry (`tessel-space`).
///
/// Provides the [`space::Space`] trait with [`space::Torus2D`] and
/// [`space::Ring1D`].
pub use tessel_space as space;

/// Cell storage (`tessel-board`).
///
/// [`board::Board`] for double-buffered 2D generations,
/// [`board::RowHistory`] for one-dimensional rules drawn row by row.
pub use tessel_board as board;

/// Transition rules (`tessel-rule`).
///
/// The [`rule::Rule`] enum and the named presets behind
/// [`rule::preset`].
pub use tessel_rule as rule;

/// PNG snapshot codec (`tessel-snapshot`).
pub use tessel_snapshot as snapshot;

/// Frame-driven simulation (`tessel-engine`).
///
/// [`engine::Simulation`] owns a lattice and a [`engine::GenerationClock`];
/// hosts drive it through [`engine::FrameHost`].
pub use tessel_engine as engine;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tessel_core::{
        Cell, CellReader, CellSurface, CellWriter, Color, GenerationId, Palette,
    };

    // Storage
    pub use tessel_board::{Board, Lattice, RowHistory, Shape};

    // Rules
    pub use tessel_rule::{ElementaryRule, LifeRule, Rule, Transition};

    // Errors
    pub use tessel_board::BoardError;
    pub use tessel_engine::{ConfigError, SimError};
    pub use tessel_rule::RuleError;
    pub use tessel_snapshot::SnapshotError;

    // Engine
    pub use tessel_engine::{
        ClockConfig, FrameHost, FrameStatus, InputEvent, Key, SimConfig, Simulation,
    };
}
