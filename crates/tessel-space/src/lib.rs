//! Toroidal grid geometry for Tessel automata.
//!
//! Every coordinate access in the workspace goes through [`wrap`]; there is
//! no direct indexing of raw (possibly negative or overflowing) coordinates.
//! [`index`] is the only sanctioned translation from 2D coordinates to a
//! flat storage offset.
//!
//! # Backends
//!
//! - [`Torus2D`]: 2D grid, 8-connected (Moore) neighbourhood, wraps on all four edges
//! - [`Ring1D`]: 1D ring, left/right neighbourhood, wraps on both ends

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod ring1d;
pub mod space;
pub mod torus2d;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use geometry::{index, wrap};
pub use ring1d::Ring1D;
pub use space::Space;
pub use torus2d::Torus2D;
