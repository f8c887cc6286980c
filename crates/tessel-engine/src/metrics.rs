//! Per-frame counters for the simulation loop.
//!
//! [`FrameMetrics`] captures what one frame did; [`RunSummary`]
//! accumulates across a whole [`Simulation::run`](crate::Simulation::run).

/// Timing and work counters for a single frame.
///
/// Durations are in microseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameMetrics {
    /// Rule applications performed this frame.
    pub generations: u64,
    /// Wall-clock time spent applying the rule.
    pub step_us: u64,
    /// Wall-clock time spent painting the surface.
    pub render_us: u64,
    /// Input events handled this frame.
    pub events: u32,
}

/// Totals for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered.
    pub frames: u64,
    /// Rule applications across all frames.
    pub generations: u64,
    /// Frames whose actions failed (e.g. a snapshot could not be saved).
    pub failed_frames: u64,
}

impl RunSummary {
    /// Fold one frame into the totals.
    pub fn record(&mut self, frame: &FrameMetrics) {
        self.frames += 1;
        self.generations += frame.generations;
    }
}
