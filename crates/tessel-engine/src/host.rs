//! The seam between the simulation and whatever displays it.

use tessel_core::{CellSurface, GenerationId};

use crate::input::EventSender;
use crate::metrics::FrameMetrics;

/// What a host learns after each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStatus {
    /// Whether stepping is paused, for drawing an overlay.
    pub paused: bool,
    /// Current seconds per generation.
    pub timeout: f64,
    /// Generation shown on the surface.
    pub generation: GenerationId,
    /// Counters for the frame just rendered.
    pub metrics: FrameMetrics,
}

/// A window, terminal, or harness that drives a
/// [`Simulation`](crate::Simulation) via [`run`](crate::Simulation::run).
///
/// Called once per frame, in order: [`pump_events`](Self::pump_events),
/// [`frame_delta`](Self::frame_delta), [`surface`](Self::surface) (filled
/// cell by cell), then [`present`](Self::present).
pub trait FrameHost {
    /// Seconds covered by the coming frame, usually the fixed frame period.
    fn frame_delta(&self) -> f64;

    /// Forward pending raw input as [`InputEvent`](crate::InputEvent)s.
    fn pump_events(&mut self, events: &EventSender);

    /// Surface the frame is painted on.
    fn surface(&mut self) -> &mut dyn CellSurface;

    /// Show the painted frame.
    fn present(&mut self, status: &FrameStatus);
}
