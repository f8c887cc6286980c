//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the constructor input for a [`Simulation`](crate::Simulation).
//! [`validate()`](SimConfig::validate) checks every structural invariant
//! once, at construction; nothing is re-validated per frame.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use tessel_board::{BoardError, Lattice};
use tessel_core::{Palette, PaletteError};
use tessel_rule::{Rule, RuleError, Transition};

use crate::controls::KeyBindings;
use crate::presets::automaton;

// ── ClockConfig ────────────────────────────────────────────────────

/// Timing parameters for the [`GenerationClock`](crate::GenerationClock).
///
/// All durations are in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockConfig {
    /// Nominal duration of one rendered frame. Default: 1/60.
    pub frame_delta: f64,
    /// Seconds per generation at start. Default: 0.05.
    pub initial_timeout: f64,
    /// Floor for the timeout under repeated speed-ups. Default: 1e-4.
    pub min_timeout: f64,
    /// Ceiling for the timeout under repeated speed-downs. Default: 60.
    pub max_timeout: f64,
    /// Multiplier applied by one speed-down, divisor by one speed-up. Default: 1.5.
    pub speed_factor: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            frame_delta: 1.0 / 60.0,
            initial_timeout: 0.05,
            min_timeout: 1e-4,
            max_timeout: 60.0,
            speed_factor: 1.5,
        }
    }
}

impl ClockConfig {
    /// Check that every duration is finite and positive, the initial
    /// timeout lies between the floor and the ceiling, and the speed
    /// factor exceeds 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("frame_delta", self.frame_delta),
            ("initial_timeout", self.initial_timeout),
            ("min_timeout", self.min_timeout),
            ("max_timeout", self.max_timeout),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDuration { name, value });
            }
        }
        if self.initial_timeout < self.min_timeout {
            return Err(ConfigError::TimeoutBelowFloor {
                initial: self.initial_timeout,
                min: self.min_timeout,
            });
        }
        if self.initial_timeout > self.max_timeout {
            return Err(ConfigError::TimeoutAboveCeiling {
                initial: self.initial_timeout,
                max: self.max_timeout,
            });
        }
        if !self.speed_factor.is_finite() || self.speed_factor <= 1.0 {
            return Err(ConfigError::InvalidSpeedFactor {
                value: self.speed_factor,
            });
        }
        Ok(())
    }
}

// ── ScreenConfig ───────────────────────────────────────────────────

/// Logical screen size in pixels, split evenly across the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Width in pixels. Default: 1024.
    pub width: u32,
    /// Height in pixels. Default: 1024.
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating a [`SimConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The palette does not have exactly one colour per rule state.
    PaletteMismatch {
        /// Colours in the palette.
        colors: usize,
        /// States the rule defines.
        states: usize,
    },
    /// A palette could not be built.
    Palette(PaletteError),
    /// A rule name could not be resolved.
    Rule(RuleError),
    /// The initial lattice is invalid for the rule.
    Board(BoardError),
    /// A clock duration is NaN, infinite, zero, or negative.
    InvalidDuration {
        /// Which field.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// `initial_timeout` is below `min_timeout`.
    TimeoutBelowFloor {
        /// The configured initial timeout.
        initial: f64,
        /// The configured floor.
        min: f64,
    },
    /// `initial_timeout` is above `max_timeout`.
    TimeoutAboveCeiling {
        /// The configured initial timeout.
        initial: f64,
        /// The configured ceiling.
        max: f64,
    },
    /// `speed_factor` is not a finite value above 1.
    InvalidSpeedFactor {
        /// The invalid value.
        value: f64,
    },
    /// `generations_per_step` is zero.
    ZeroGenerationsPerStep,
    /// The screen has no pixels.
    EmptyScreen,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaletteMismatch { colors, states } => {
                write!(f, "palette has {colors} colours but the rule has {states} states")
            }
            Self::Palette(e) => write!(f, "palette: {e}"),
            Self::Rule(e) => write!(f, "rule: {e}"),
            Self::Board(e) => write!(f, "initial board: {e}"),
            Self::InvalidDuration { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::TimeoutBelowFloor { initial, min } => {
                write!(f, "initial_timeout {initial} is below min_timeout {min}")
            }
            Self::TimeoutAboveCeiling { initial, max } => {
                write!(f, "initial_timeout {initial} is above max_timeout {max}")
            }
            Self::InvalidSpeedFactor { value } => {
                write!(f, "speed_factor must be finite and greater than 1, got {value}")
            }
            Self::ZeroGenerationsPerStep => write!(f, "generations_per_step must be at least 1"),
            Self::EmptyScreen => write!(f, "screen must be at least 1x1 pixels"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Palette(e) => Some(e),
            Self::Rule(e) => Some(e),
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PaletteError> for ConfigError {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

impl From<BoardError> for ConfigError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Everything needed to construct a [`Simulation`](crate::Simulation).
pub struct SimConfig<L> {
    /// Initial cell state. Ownership passes to the simulation.
    pub lattice: L,
    /// Transition rule.
    pub rule: Rule,
    /// One colour per rule state, used for rendering and snapshots.
    pub palette: Palette,
    /// Generation clock parameters.
    pub clock: ClockConfig,
    /// Key-to-action bindings.
    pub controls: KeyBindings,
    /// Logical screen size for mouse hit-testing.
    pub screen: ScreenConfig,
    /// Where the save action writes, and the load action reads.
    pub snapshot_path: PathBuf,
    /// Rule applications per owed generation. Default: 1.
    pub generations_per_step: u32,
}

impl<L: Lattice> SimConfig<L> {
    /// A configuration with default clock, controls, and screen.
    pub fn new(lattice: L, rule: Rule, palette: Palette) -> Self {
        Self {
            lattice,
            rule,
            palette,
            clock: ClockConfig::default(),
            controls: KeyBindings::default(),
            screen: ScreenConfig::default(),
            snapshot_path: PathBuf::from("snapshot.png"),
            generations_per_step: 1,
        }
    }

    /// A configuration using a named automaton's rule and palette.
    pub fn from_preset(lattice: L, name: &str) -> Result<Self, ConfigError> {
        let preset = automaton(name)?;
        Ok(Self::new(lattice, preset.rule, preset.palette()?))
    }

    /// Check every construction-time invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let states = self.rule.state_count();
        if self.palette.len() != states {
            return Err(ConfigError::PaletteMismatch {
                colors: self.palette.len(),
                states,
            });
        }
        self.lattice.check_states(states)?;
        self.clock.validate()?;
        if self.generations_per_step == 0 {
            return Err(ConfigError::ZeroGenerationsPerStep);
        }
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::EmptyScreen);
        }
        Ok(())
    }
}
