//! Frame-driven simulation loop for Tessel automata.
//!
//! One frame of a [`Simulation`] is:
//!
//! 1. drain queued [`InputEvent`]s (pause, speed, click, reset, save)
//! 2. ask the [`GenerationClock`] how many generations are due
//! 3. step the rule that many times, flipping the board's buffers
//! 4. paint every cell through the palette onto the host's surface
//!
//! Everything runs on the caller's thread. The only cross-thread piece is
//! the [`EventQueue`], whose [`EventSender`] may be cloned into other
//! threads that produce input.
//!
//! Hosts (a window, a terminal, a test harness) implement [`FrameHost`]
//! and hand themselves to [`Simulation::run`], or drive
//! [`Simulation::frame`] directly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod controls;
pub mod error;
pub mod host;
pub mod input;
pub mod metrics;
pub mod presets;
pub mod simulation;
pub mod viewport;

pub use clock::GenerationClock;
pub use config::{ClockConfig, ConfigError, ScreenConfig, SimConfig};
pub use controls::{Action, KeyBindings};
pub use error::SimError;
pub use host::{FrameHost, FrameStatus};
pub use input::{EventQueue, EventSender, InputEvent, Key};
pub use metrics::{FrameMetrics, RunSummary};
pub use presets::{automata, automaton, Automaton};
pub use simulation::Simulation;
pub use viewport::Viewport;
