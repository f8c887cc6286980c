//! Error types for rule parsing and lookup.

use std::error::Error;
use std::fmt;

/// Errors arising from rule parsing and preset lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A rule string could not be parsed.
    InvalidNotation {
        /// The string that was supplied.
        notation: String,
        /// What was wrong with it.
        reason: String,
    },
    /// No preset is registered under this name.
    UnknownPreset {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNotation { notation, reason } => {
                write!(f, "invalid rule {notation:?}: {reason}")
            }
            Self::UnknownPreset { name } => write!(f, "unknown rule preset {name:?}"),
        }
    }
}

impl Error for RuleError {}
