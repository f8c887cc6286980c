//! Palette-indexed PNG snapshots of Tessel boards.
//!
//! A snapshot is an RGBA image with one pixel per cell. Each pixel holds
//! the palette colour of its cell's state; no other metadata is stored,
//! so the same palette must be supplied when saving and loading.
//!
//! Loading is validate-then-write: every pixel is decoded and matched
//! against the palette before the target grid is touched, so a rejected
//! file leaves the grid exactly as it was.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;

pub use codec::{decode, encode, load_from_memory, load_into, save, Extent};
pub use error::SnapshotError;
