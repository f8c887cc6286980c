//! Errors raised while a simulation is running.

use std::error::Error;
use std::fmt;

use tessel_snapshot::SnapshotError;

/// A failure inside a frame.
///
/// Construction problems are reported as
/// [`ConfigError`](crate::ConfigError) instead.
#[derive(Debug)]
pub enum SimError {
    /// A snapshot save or load failed.
    Snapshot(SnapshotError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot(e) => write!(f, "snapshot: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Snapshot(e) => Some(e),
        }
    }
}

impl From<SnapshotError> for SimError {
    fn from(e: SnapshotError) -> Self {
        Self::Snapshot(e)
    }
}
