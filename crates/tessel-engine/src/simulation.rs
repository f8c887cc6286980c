//! The frame-driven simulation loop.
//!
//! [`Simulation`] is an explicitly constructed, caller-owned context:
//! it owns the lattice, the clock, and the event queue, and nothing in
//! it is global. Several simulations can run side by side in one
//! process.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tessel_board::Lattice;
use tessel_core::{CellSurface, Color, Palette};
use tessel_rule::{Rule, Transition};
use tessel_snapshot::Extent;
use tracing::{debug, error, info};

use crate::clock::GenerationClock;
use crate::config::{ConfigError, SimConfig};
use crate::controls::{Action, KeyBindings};
use crate::error::SimError;
use crate::host::{FrameHost, FrameStatus};
use crate::input::{EventQueue, EventSender, InputEvent};
use crate::metrics::{FrameMetrics, RunSummary};
use crate::viewport::Viewport;

/// A running automaton: lattice, rule, palette, clock, and controls.
///
/// # Examples
///
/// ```
/// use tessel_board::{Board, Shape};
/// use tessel_engine::{InputEvent, Key, SimConfig, Simulation};
/// use tessel_test_utils::MockSurface;
///
/// let mut board = Board::new(8, 8).unwrap();
/// board.inject(3, 2, &Shape::blinker());
/// let config = SimConfig::from_preset(board, "conway").unwrap();
/// let mut sim = Simulation::new(config).unwrap();
///
/// sim.sender().send(InputEvent::KeyDown(Key::Space));
/// let mut surface = MockSurface::new();
/// let status = sim.frame(1.0, &mut surface).unwrap();
/// assert!(status.paused);
/// assert_eq!(surface.fills.len(), 64);
/// ```
pub struct Simulation<L: Lattice> {
    lattice: L,
    rule: Rule,
    palette: Palette,
    clock: GenerationClock,
    controls: KeyBindings,
    viewport: Viewport,
    snapshot_path: PathBuf,
    generations_per_step: u32,
    events: EventQueue,
    pointer: Option<(f32, f32)>,
    quit: bool,
}

impl<L: Lattice> Simulation<L> {
    /// Validate `config` and take ownership of its lattice.
    pub fn new(config: SimConfig<L>) -> Result<Self, ConfigError> {
        config.validate()?;
        let clock = GenerationClock::new(&config.clock)?;
        let viewport = Viewport::new(config.screen, config.lattice.rows(), config.lattice.cols());
        info!(
            rule = %config.rule,
            rows = config.lattice.rows(),
            cols = config.lattice.cols(),
            states = config.rule.state_count(),
            "simulation created"
        );
        Ok(Self {
            lattice: config.lattice,
            rule: config.rule,
            palette: config.palette,
            clock,
            controls: config.controls,
            viewport,
            snapshot_path: config.snapshot_path,
            generations_per_step: config.generations_per_step,
            events: EventQueue::new(),
            pointer: None,
            quit: false,
        })
    }

    /// A handle for queueing input from any thread.
    pub fn sender(&self) -> EventSender {
        self.events.sender()
    }

    /// The lattice, showing the authoritative generation.
    pub fn lattice(&self) -> &L {
        &self.lattice
    }

    /// Mutable access for seeding between frames.
    pub fn lattice_mut(&mut self) -> &mut L {
        &mut self.lattice
    }

    /// Consume the simulation, returning the lattice.
    pub fn into_lattice(self) -> L {
        self.lattice
    }

    /// The rule being applied.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The state palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The generation clock.
    pub fn clock(&self) -> &GenerationClock {
        &self.clock
    }

    /// The screen-to-grid mapping used for clicks.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Last known pointer position in screen pixels.
    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// Whether a quit has been requested.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Fill the lattice with seeded random states.
    pub fn randomize(&mut self, seed: u64) {
        self.lattice.randomize(seed, self.rule.state_count());
        info!(seed, "lattice randomized");
    }

    /// Apply one input event immediately.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), SimError> {
        match event {
            InputEvent::Quit => self.perform(Action::Quit)?,
            InputEvent::KeyDown(key) => match self.controls.action_for(key) {
                Some(action) => self.perform(action)?,
                None => debug!(?key, "unbound key"),
            },
            InputEvent::MouseMove { x, y } => self.pointer = Some((x, y)),
            InputEvent::MouseDown { x, y } => {
                self.pointer = Some((x, y));
                if let Some((row, col)) = self.viewport.cell_at(x, y) {
                    let state = self
                        .lattice
                        .toggle_cell(row, col, self.rule.state_count());
                    debug!(row, col, state, "cell toggled");
                }
            }
        }
        Ok(())
    }

    /// Carry out a control action.
    pub fn perform(&mut self, action: Action) -> Result<(), SimError> {
        match action {
            Action::TogglePause => {
                let paused = self.clock.toggle_pause();
                info!(paused, "pause toggled");
            }
            Action::SpeedUp => {
                self.clock.speed_up();
                info!(timeout = self.clock.timeout(), "speed up");
            }
            Action::SpeedDown => {
                self.clock.speed_down();
                info!(timeout = self.clock.timeout(), "speed down");
            }
            Action::Reset => {
                self.lattice.clear();
                info!("lattice reset");
            }
            Action::Save => self.save()?,
            Action::Load => {
                let path = self.snapshot_path.clone();
                self.load_snapshot(path)?;
            }
            Action::Quit => {
                self.quit = true;
                info!("quit requested");
            }
        }
        Ok(())
    }

    /// Apply the rule `generations` times, bypassing the clock.
    pub fn step(&mut self, generations: u64) {
        self.rule.advance_by(&mut self.lattice, generations);
    }

    /// Run one frame lasting `delta` seconds and paint it on `surface`.
    ///
    /// Queued events are handled first, in order. If one fails, the frame
    /// stops there: nothing is stepped or painted, and the events behind
    /// it stay queued for the next frame.
    pub fn frame(
        &mut self,
        delta: f64,
        surface: &mut dyn CellSurface,
    ) -> Result<FrameStatus, SimError> {
        let mut metrics = FrameMetrics::default();
        while let Some(event) = self.events.next_event() {
            metrics.events += 1;
            self.handle_event(event)?;
        }

        self.clock.advance(delta);
        let generations = self.clock.consume() * u64::from(self.generations_per_step);
        let started = Instant::now();
        self.step(generations);
        metrics.generations = generations;
        metrics.step_us = started.elapsed().as_micros() as u64;

        let started = Instant::now();
        self.render(surface);
        metrics.render_us = started.elapsed().as_micros() as u64;

        Ok(FrameStatus {
            paused: self.clock.is_paused(),
            timeout: self.clock.timeout(),
            generation: self.lattice.generation(),
            metrics,
        })
    }

    /// Paint every cell of the authoritative generation, row-major.
    pub fn render(&self, surface: &mut dyn CellSurface) {
        for row in 0..self.lattice.rows() {
            for col in 0..self.lattice.cols() {
                let cell = self.lattice.cell(row, col);
                let color = self.palette.color(cell).unwrap_or(Color::TRANSPARENT);
                surface.fill_cell(row, col, color);
            }
        }
    }

    /// Save a snapshot to the configured path.
    pub fn save(&self) -> Result<(), SimError> {
        self.save_to(&self.snapshot_path)
    }

    /// Save a snapshot to `path`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        tessel_snapshot::save(&self.lattice, &self.palette, path)?;
        Ok(())
    }

    /// Load a snapshot from `path` into the authoritative generation.
    ///
    /// Cells outside the image keep their state. On error the lattice is
    /// unchanged.
    pub fn load_snapshot(&mut self, path: impl AsRef<Path>) -> Result<Extent, SimError> {
        Ok(tessel_snapshot::load_into(path, &self.palette, &mut self.lattice)?)
    }

    /// Drive frames from `host` until a quit is requested.
    ///
    /// A failed frame is logged and counted; the run carries on.
    pub fn run<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> RunSummary {
        let sender = self.sender();
        let mut summary = RunSummary::default();
        info!(rule = %self.rule, "simulation started");
        while !self.quit {
            host.pump_events(&sender);
            let delta = host.frame_delta();
            match self.frame(delta, host.surface()) {
                Ok(status) => {
                    summary.record(&status.metrics);
                    host.present(&status);
                }
                Err(e) => {
                    summary.failed_frames += 1;
                    error!(error = %e, "frame failed");
                }
            }
        }
        info!(
            frames = summary.frames,
            generations = summary.generations,
            failed_frames = summary.failed_frames,
            "simulation stopped"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockConfig;
    use crate::input::Key;
    use tessel_board::{Board, Shape};
    use tessel_core::{CellReader, CellWriter, GenerationId};
    use tessel_rule::LifeRule;
    use tessel_test_utils::fixtures::two_state_palette;
    use tessel_test_utils::MockSurface;

    const DELTA: f64 = 1.0 / 60.0;

    fn sim_with(board: Board, timeout: f64) -> Simulation<Board> {
        let mut config = SimConfig::new(board, Rule::Life(LifeRule::CONWAY), two_state_palette());
        config.clock = ClockConfig {
            frame_delta: DELTA,
            initial_timeout: timeout,
            ..ClockConfig::default()
        };
        Simulation::new(config).unwrap()
    }

    fn blinker_sim(timeout: f64) -> Simulation<Board> {
        let mut board = Board::new(5, 5).unwrap();
        board.inject(2, 1, &Shape::blinker());
        sim_with(board, timeout)
    }

    fn key(c: char) -> InputEvent {
        InputEvent::KeyDown(Key::Char(c))
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut config = SimConfig::new(
            Board::new(2, 2).unwrap(),
            Rule::Life(LifeRule::CONWAY),
            two_state_palette(),
        );
        config.generations_per_step = 0;
        assert!(matches!(
            Simulation::new(config),
            Err(ConfigError::ZeroGenerationsPerStep)
        ));
    }

    #[test]
    fn fast_clock_steps_several_generations_per_frame() {
        let mut sim = blinker_sim(DELTA / 3.0);
        let mut surface = MockSurface::new();
        let status = sim.frame(DELTA, &mut surface).unwrap();
        assert_eq!(status.metrics.generations, 3);
        assert_eq!(status.generation, GenerationId(3));
        // Odd generation: the blinker is vertical.
        assert_eq!(sim.lattice().cell(1, 2), 1);
        assert_eq!(sim.lattice().cell(2, 1), 0);
    }

    #[test]
    fn generations_per_step_multiplies_owed() {
        let mut board = Board::new(5, 5).unwrap();
        board.inject(2, 1, &Shape::blinker());
        let mut config = SimConfig::new(board, Rule::Life(LifeRule::CONWAY), two_state_palette());
        config.clock.initial_timeout = DELTA / 2.0;
        config.generations_per_step = 30;
        let mut sim = Simulation::new(config).unwrap();
        let status = sim.frame(DELTA, &mut MockSurface::new()).unwrap();
        assert_eq!(status.metrics.generations, 60);
    }

    #[test]
    fn paused_frames_do_not_step() {
        let mut sim = blinker_sim(DELTA / 2.0);
        sim.sender().send(InputEvent::KeyDown(Key::Space));
        let before = sim.lattice().clone();
        for _ in 0..10 {
            let status = sim.frame(DELTA, &mut MockSurface::new()).unwrap();
            assert!(status.paused);
            assert_eq!(status.metrics.generations, 0);
        }
        assert_eq!(sim.lattice(), &before);
    }

    #[test]
    fn click_toggles_the_cell_under_the_pointer() {
        let mut sim = sim_with(Board::new(4, 4).unwrap(), 1.0);
        // Default 1024px screen: 256px cells.
        sim.sender().send(InputEvent::MouseDown { x: 300.0, y: 10.0 });
        sim.frame(DELTA, &mut MockSurface::new()).unwrap();
        assert_eq!(sim.lattice().cell(0, 1), 1);
        assert_eq!(sim.pointer(), Some((300.0, 10.0)));

        sim.sender().send(InputEvent::MouseDown { x: 300.0, y: 10.0 });
        sim.sender().send(InputEvent::MouseDown { x: -1.0, y: 10.0 });
        let status = sim.frame(DELTA, &mut MockSurface::new()).unwrap();
        assert_eq!(status.metrics.events, 2);
        assert_eq!(sim.lattice().cell(0, 1), 0);
    }

    #[test]
    fn reset_clears_the_board() {
        let mut sim = blinker_sim(1.0);
        sim.sender().send(key('r'));
        sim.frame(DELTA, &mut MockSurface::new()).unwrap();
        assert_eq!(sim.lattice().population(1), 0);
    }

    #[test]
    fn uppercase_key_events_reach_bindings() {
        let mut sim = blinker_sim(0.3);
        sim.handle_event(InputEvent::KeyDown(Key::Char('Z'))).unwrap();
        assert!((sim.clock().timeout() - 0.45).abs() < 1e-12);
        sim.handle_event(InputEvent::KeyDown(Key::Char('R'))).unwrap();
        assert_eq!(sim.lattice().population(1), 0);
    }

    #[test]
    fn speed_keys_scale_timeout() {
        let mut sim = blinker_sim(0.3);
        sim.handle_event(key('z')).unwrap();
        assert!((sim.clock().timeout() - 0.45).abs() < 1e-12);
        sim.handle_event(key('x')).unwrap();
        sim.handle_event(key('x')).unwrap();
        assert!((sim.clock().timeout() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn render_paints_palette_colours() {
        let sim = blinker_sim(1.0);
        let mut surface = MockSurface::new();
        sim.render(&mut surface);
        assert_eq!(surface.fills.len(), 25);
        assert_eq!(surface.fills[0], (0, 0, Color(0x0000_0000)));
        assert_eq!(surface.color_at(2, 2), Some(Color(0xFFAA_BBFF)));
    }

    #[test]
    fn failed_save_aborts_frame_and_keeps_later_events() {
        let mut board = Board::new(3, 3).unwrap();
        board.set_cell(0, 0, 1);
        let mut config = SimConfig::new(board, Rule::Life(LifeRule::CONWAY), two_state_palette());
        config.snapshot_path = std::env::temp_dir()
            .join("tessel-engine-missing-dir")
            .join("deeper")
            .join("s.png");
        let mut sim = Simulation::new(config).unwrap();
        sim.sender().send(key('s'));
        sim.sender().send(key('r'));

        let err = sim.frame(DELTA, &mut MockSurface::new()).unwrap_err();
        assert!(matches!(err, SimError::Snapshot(_)));
        assert_eq!(sim.lattice().cell(0, 0), 1);

        sim.frame(DELTA, &mut MockSurface::new()).unwrap();
        assert_eq!(sim.lattice().cell(0, 0), 0);
    }

    #[test]
    fn quit_event_and_escape_request_stop() {
        let mut sim = blinker_sim(1.0);
        assert!(!sim.should_quit());
        sim.handle_event(InputEvent::KeyDown(Key::Escape)).unwrap();
        assert!(sim.should_quit());

        let mut sim = blinker_sim(1.0);
        sim.handle_event(InputEvent::Quit).unwrap();
        assert!(sim.should_quit());
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut sim = blinker_sim(1.0);
        let before = sim.lattice().clone();
        sim.handle_event(key('q')).unwrap();
        assert_eq!(sim.lattice(), &before);
        assert!(!sim.clock().is_paused());
    }
}
