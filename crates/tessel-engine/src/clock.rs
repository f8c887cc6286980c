//! Adaptive generation clock.
//!
//! [`GenerationClock`] turns a stream of frame deltas into whole
//! generations owed. It has two regimes, chosen per frame:
//!
//! - **slow** (`timeout >= Δ`): a cooldown counts down by `Δ` each frame
//!   and, on expiry, is reloaded with `timeout` while one generation is
//!   owed. At most one generation per frame.
//! - **fast** (`timeout < Δ`): `floor(Δ / timeout)` generations are owed
//!   every frame, with no cooldown bookkeeping. The fractional remainder
//!   is dropped rather than carried, so the realised rate can fall
//!   slightly short of `1 / timeout`.
//!
//! Owed generations are delivered exactly once by [`consume`](GenerationClock::consume).

use tracing::debug;

use crate::config::{ClockConfig, ConfigError};

/// Slack for floating-point comparisons against zero and integers.
///
/// A cooldown within this many seconds of zero counts as expired, and a
/// `Δ / timeout` ratio within this of the next integer rounds up.
const EPSILON: f64 = 1e-9;

/// Converts frame deltas into a count of owed generations.
///
/// # Examples
///
/// ```
/// use tessel_engine::{ClockConfig, GenerationClock};
///
/// let config = ClockConfig {
///     initial_timeout: ClockConfig::default().frame_delta / 3.0,
///     ..ClockConfig::default()
/// };
/// let mut clock = GenerationClock::new(&config).unwrap();
/// clock.advance_frame();
/// assert_eq!(clock.consume(), 3);
/// assert_eq!(clock.consume(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct GenerationClock {
    frame_delta: f64,
    timeout: f64,
    min_timeout: f64,
    max_timeout: f64,
    speed_factor: f64,
    cooldown: f64,
    paused: bool,
    pending: u64,
}

impl GenerationClock {
    /// Create a running clock with a full cooldown.
    pub fn new(config: &ClockConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            frame_delta: config.frame_delta,
            timeout: config.initial_timeout,
            min_timeout: config.min_timeout,
            max_timeout: config.max_timeout,
            speed_factor: config.speed_factor,
            cooldown: config.initial_timeout,
            paused: false,
            pending: 0,
        })
    }

    /// Seconds per generation.
    pub fn timeout(&self) -> f64 {
        self.timeout
    }

    /// Seconds until the next generation in the slow regime.
    pub fn cooldown(&self) -> f64 {
        self.cooldown
    }

    /// Lower bound on [`timeout`](Self::timeout).
    pub fn min_timeout(&self) -> f64 {
        self.min_timeout
    }

    /// Upper bound on [`timeout`](Self::timeout).
    pub fn max_timeout(&self) -> f64 {
        self.max_timeout
    }

    /// The nominal frame duration in seconds.
    pub fn frame_delta(&self) -> f64 {
        self.frame_delta
    }

    /// Whether generation accrual is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Generations owed but not yet consumed.
    pub fn pending(&self) -> u64 {
        self.pending
    }

    /// Account for one nominal frame.
    pub fn advance_frame(&mut self) {
        self.advance(self.frame_delta);
    }

    /// Account for a frame lasting `delta` seconds.
    pub fn advance(&mut self, delta: f64) {
        if self.paused {
            return;
        }
        if self.timeout >= delta {
            self.cooldown -= delta;
            if self.cooldown <= EPSILON {
                self.cooldown = self.timeout;
                self.pending += 1;
            }
        } else {
            self.pending += (delta / self.timeout + EPSILON).floor() as u64;
        }
    }

    /// Take every owed generation, resetting the count to zero.
    ///
    /// Call once per frame.
    pub fn consume(&mut self) -> u64 {
        std::mem::take(&mut self.pending)
    }

    /// Divide the timeout by the speed factor, clamped to the floor, and
    /// restart the cooldown.
    pub fn speed_up(&mut self) {
        let old = self.timeout;
        self.timeout = (self.timeout / self.speed_factor).max(self.min_timeout);
        self.cooldown = self.timeout;
        debug!(old, new = self.timeout, "clock sped up");
    }

    /// Multiply the timeout by the speed factor, clamped to the ceiling,
    /// and restart the cooldown.
    pub fn speed_down(&mut self) {
        let old = self.timeout;
        self.timeout = (self.timeout * self.speed_factor).min(self.max_timeout);
        self.cooldown = self.timeout;
        debug!(old, new = self.timeout, "clock slowed down");
    }

    /// Flip the pause flag, returning the new state.
    ///
    /// Anything owed at the moment of pausing is dropped, so a pause never
    /// banks generations.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Set the pause flag.
    pub fn set_paused(&mut self, paused: bool) {
        if paused {
            self.pending = 0;
        }
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DELTA: f64 = 1.0 / 60.0;

    fn clock(timeout: f64) -> GenerationClock {
        GenerationClock::new(&ClockConfig {
            frame_delta: DELTA,
            initial_timeout: timeout,
            min_timeout: 1e-6,
            max_timeout: 1e6,
            speed_factor: 1.5,
        })
        .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs())
    }

    #[test]
    fn fast_regime_owes_floor_of_ratio() {
        let mut c = clock(DELTA / 3.0);
        c.advance_frame();
        assert_eq!(c.consume(), 3);
    }

    #[test]
    fn fast_regime_truncates_each_frame() {
        // Δ / timeout = 2.5: every frame owes 2, the half is never carried.
        let mut c = clock(DELTA / 2.5);
        for _ in 0..10 {
            c.advance_frame();
            assert_eq!(c.consume(), 2);
        }
    }

    #[test]
    fn slow_regime_owes_one_every_tenth_frame() {
        let mut c = clock(10.0 * DELTA);
        for round in 0..3 {
            for frame in 0..9 {
                c.advance_frame();
                assert_eq!(c.consume(), 0, "round {round} frame {frame}");
            }
            c.advance_frame();
            assert_eq!(c.consume(), 1, "round {round}");
        }
    }

    #[test]
    fn timeout_equal_to_delta_owes_one_per_frame() {
        let mut c = clock(DELTA);
        for _ in 0..5 {
            c.advance_frame();
            assert_eq!(c.consume(), 1);
        }
    }

    #[test]
    fn consume_is_exactly_once() {
        let mut c = clock(DELTA / 4.0);
        c.advance_frame();
        c.advance_frame();
        assert_eq!(c.pending(), 8);
        assert_eq!(c.consume(), 8);
        assert_eq!(c.consume(), 0);
    }

    #[test]
    fn pause_accrues_nothing_and_banks_nothing() {
        let mut c = clock(DELTA / 2.0);
        assert!(c.toggle_pause());
        for _ in 0..100 {
            c.advance_frame();
            assert_eq!(c.consume(), 0);
        }
        assert!(!c.toggle_pause());
        c.advance_frame();
        assert_eq!(c.consume(), 2);
    }

    #[test]
    fn pause_leaves_cooldown_alone() {
        let mut c = clock(5.0 * DELTA);
        c.advance_frame();
        let before = c.cooldown();
        c.set_paused(true);
        c.advance(1.0);
        assert_eq!(c.cooldown(), before);
    }

    #[test]
    fn pausing_drops_pending() {
        let mut c = clock(DELTA / 2.0);
        c.advance_frame();
        c.set_paused(true);
        assert_eq!(c.consume(), 0);
    }

    #[test]
    fn speed_change_resets_cooldown() {
        let mut c = clock(10.0 * DELTA);
        for _ in 0..5 {
            c.advance_frame();
        }
        c.speed_down();
        assert!(close(c.timeout(), 15.0 * DELTA));
        assert_eq!(c.cooldown(), c.timeout());
        c.speed_up();
        assert!(close(c.timeout(), 10.0 * DELTA));
        assert_eq!(c.cooldown(), c.timeout());
    }

    #[test]
    fn speed_up_clamps_at_floor() {
        let mut c = clock(1.2e-6);
        c.speed_up();
        assert_eq!(c.timeout(), 1e-6);
        c.speed_up();
        assert_eq!(c.timeout(), 1e-6);
        c.speed_down();
        assert!(close(c.timeout(), 1.5e-6));
        assert!(!close(c.timeout(), 1.2e-6));
    }

    #[test]
    fn speed_down_is_bounded_and_recoverable() {
        let mut c = GenerationClock::new(&ClockConfig::default()).unwrap();
        for _ in 0..2000 {
            c.speed_down();
        }
        assert_eq!(c.timeout(), 60.0);
        assert_eq!(c.cooldown(), 60.0);
        for _ in 0..2000 {
            c.speed_up();
        }
        assert_eq!(c.timeout(), c.min_timeout());
        c.speed_down();
        assert!(c.timeout().is_finite());
    }

    #[test]
    fn new_rejects_bad_config() {
        let bad = ClockConfig {
            speed_factor: 1.0,
            ..ClockConfig::default()
        };
        assert!(GenerationClock::new(&bad).is_err());
    }

    proptest! {
        #[test]
        fn down_then_up_restores_timeout(timeout in 1e-6f64..10.0, n in 1usize..20) {
            let mut c = clock(timeout);
            for _ in 0..n {
                c.speed_down();
            }
            for _ in 0..n {
                c.speed_up();
            }
            prop_assert!((c.timeout() - timeout).abs() <= 1e-9 * timeout);
        }

        #[test]
        fn timeout_never_below_floor(ups in 0usize..200) {
            let mut c = clock(0.05);
            for _ in 0..ups {
                c.speed_up();
            }
            prop_assert!(c.timeout() >= c.min_timeout());
        }

        #[test]
        fn timeout_stays_finite_and_bounded(downs in 0usize..3000) {
            let mut c = clock(0.05);
            for _ in 0..downs {
                c.speed_down();
            }
            prop_assert!(c.timeout() <= c.max_timeout());
            c.speed_up();
            prop_assert!(c.timeout() < c.max_timeout());
        }

        #[test]
        fn fast_regime_never_exceeds_ratio(divisor in 1.01f64..500.0) {
            let mut c = clock(DELTA / divisor);
            c.advance_frame();
            let owed = c.consume() as f64;
            prop_assert!(owed <= divisor + 1e-6);
            prop_assert!(owed >= divisor.floor() - 1.0);
        }
    }
}
