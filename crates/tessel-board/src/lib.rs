//! Double-buffered cell storage for Tessel automata.
//!
//! Two storage shapes share the [`Lattice`] interface:
//!
//! - [`Board`]: a 2D toroidal grid with two full buffers and a selector
//!   naming the live one. A generation step reads the live buffer, writes
//!   the other, then flips the selector.
//! - [`RowHistory`]: a ring of the most recent rows of a 1D automaton.
//!   A generation step computes a new row from the newest row and pushes
//!   it, evicting the oldest once the ring is full.
//!
//! [`Shape`] holds small patterns (gliders, oscillators, guns) that can be
//! stamped into a board at a wrapped offset.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod error;
pub mod history;
pub mod lattice;
pub mod shape;

pub use board::Board;
pub use error::BoardError;
pub use history::RowHistory;
pub use lattice::Lattice;
pub use shape::Shape;
