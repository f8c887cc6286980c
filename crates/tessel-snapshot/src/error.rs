//! Error types for snapshot save and load.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use tessel_core::{Cell, Color};

/// Errors arising from snapshot save and load.
#[derive(Debug)]
pub enum SnapshotError {
    /// Reading or writing the file failed.
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The image could not be encoded or decoded.
    Image {
        /// The file involved.
        path: PathBuf,
        /// The underlying codec error.
        source: image::ImageError,
    },
    /// The image does not have four channels per pixel.
    ChannelDepth {
        /// The file involved.
        path: PathBuf,
        /// Channels per pixel found in the file.
        found: u8,
    },
    /// The image is larger than the target grid.
    Oversized {
        /// The file involved.
        path: PathBuf,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Grid width in cells.
        max_width: u32,
        /// Grid height in cells.
        max_height: u32,
    },
    /// A pixel colour has no entry in the palette.
    UnknownColor {
        /// The file involved.
        path: PathBuf,
        /// The unmatched colour.
        color: Color,
        /// Pixel row.
        row: u32,
        /// Pixel column.
        col: u32,
    },
    /// A cell holds a state the palette has no colour for.
    UnmappedState {
        /// Cell row.
        row: u32,
        /// Cell column.
        col: u32,
        /// The unmapped state.
        cell: Cell,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Image { path, source } => {
                write!(f, "{}: image codec error: {source}", path.display())
            }
            Self::ChannelDepth { path, found } => write!(
                f,
                "{}: expected 4 channels per pixel, found {found}",
                path.display()
            ),
            Self::Oversized {
                path,
                width,
                height,
                max_width,
                max_height,
            } => write!(
                f,
                "{}: image is {width}x{height}, board is only {max_width}x{max_height}",
                path.display()
            ),
            Self::UnknownColor {
                path,
                color,
                row,
                col,
            } => write!(
                f,
                "{}: Unknown color {color} at row {row}, column {col}",
                path.display()
            ),
            Self::UnmappedState { row, col, cell } => {
                write!(f, "cell ({row}, {col}) has state {cell} with no palette colour")
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Image { source, .. } => Some(source),
            _ => None,
        }
    }
}
