#![forbid(unsafe_code)]

//! Leading-edge rate limiting for high-frequency event streams.
//!
//! Scroll handlers can fire dozens of times per second during a fling.
//! [`Throttle`] bounds how often a handler runs: the first invocation in a
//! window fires immediately, and every invocation until the window elapses
//! is dropped.
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use vitrine_core::throttle::Throttle;
//!
//! let mut throttle = Throttle::new(Duration::from_millis(100));
//! let t0 = Instant::now();
//! assert!(throttle.try_fire(t0));                                   // leading edge
//! assert!(!throttle.try_fire(t0 + Duration::from_millis(50)));      // in window
//! assert!(throttle.try_fire(t0 + Duration::from_millis(100)));      // window elapsed
//! ```
//!
//! # Invariants
//!
//! - The first call after construction always fires.
//! - Between two fires at least `window` elapses.
//! - Dropped invocations leave the window untouched (no trailing edge).

use std::time::{Duration, Instant};

/// A leading-edge throttle with an explicit last-fired timestamp.
///
/// Not thread-safe; owned by a single event-processing loop.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    window: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    /// The reference window used by page scroll subscriptions.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);

    /// Create a throttle with the given window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// The configured window.
    #[inline]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Attempt to fire at `now`.
    ///
    /// Returns `true` (and records `now`) if no fire has happened yet or the
    /// window has elapsed since the last fire; returns `false` otherwise.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let open = match self.last_fired {
            None => true,
            Some(last) => now.checked_duration_since(last).unwrap_or(Duration::ZERO) >= self.window,
        };
        if open {
            self.last_fired = Some(now);
        }
        open
    }

    /// Forget the last fire, reopening the window immediately.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(100);

    #[test]
    fn first_call_fires() {
        let mut t = Throttle::new(WINDOW);
        assert!(t.try_fire(Instant::now()));
    }

    #[test]
    fn calls_inside_window_are_dropped() {
        let mut t = Throttle::new(WINDOW);
        let t0 = Instant::now();
        assert!(t.try_fire(t0));
        assert!(!t.try_fire(t0 + Duration::from_millis(1)));
        assert!(!t.try_fire(t0 + Duration::from_millis(99)));
    }

    #[test]
    fn fires_again_once_window_elapses() {
        let mut t = Throttle::new(WINDOW);
        let t0 = Instant::now();
        assert!(t.try_fire(t0));
        assert!(t.try_fire(t0 + WINDOW));
    }

    #[test]
    fn dropped_calls_do_not_extend_window() {
        let mut t = Throttle::new(WINDOW);
        let t0 = Instant::now();
        assert!(t.try_fire(t0));
        assert!(!t.try_fire(t0 + Duration::from_millis(90)));
        // The drop at t0+90 must not push the next opening past t0+100.
        assert!(t.try_fire(t0 + WINDOW));
    }

    #[test]
    fn non_monotonic_now_is_treated_as_in_window() {
        let mut t = Throttle::new(WINDOW);
        let t0 = Instant::now() + Duration::from_secs(1);
        assert!(t.try_fire(t0));
        assert!(!t.try_fire(t0 - Duration::from_millis(10)));
    }

    #[test]
    fn reset_reopens_immediately() {
        let mut t = Throttle::new(WINDOW);
        let t0 = Instant::now();
        assert!(t.try_fire(t0));
        t.reset();
        assert!(t.try_fire(t0 + Duration::from_millis(1)));
    }

    #[test]
    fn zero_window_always_fires() {
        let mut t = Throttle::new(Duration::ZERO);
        let t0 = Instant::now();
        assert!(t.try_fire(t0));
        assert!(t.try_fire(t0));
    }
}
