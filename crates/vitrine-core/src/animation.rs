#![forbid(unsafe_code)]

//! Composable time-based animation primitives.
//!
//! Animations produce normalized `f32` values (0.0–1.0) and advance via
//! [`Animation::tick`] with an explicit `dt`. They hold no timers of their
//! own; the page controller decides when time passes. This is what turns
//! the source material's fire-and-forget `setTimeout` chains into a
//! deterministic, testable state machine.
//!
//! Completed animations report [`Animation::overshoot`], the leftover tick
//! time past their end. Consumers chaining phases back to back forward that
//! overshoot into the next phase ([`Sequence`] does this automatically), so
//! a 500 ms fade followed by another completes in exactly one second
//! regardless of tick granularity.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);

    /// Time elapsed past completion. Composition types forward this so
    /// back-to-back phases lose no time at the seam.
    /// Returns [`Duration::ZERO`] for animations that never complete.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Fade
// ---------------------------------------------------------------------------

/// Progression from 0.0 to 1.0 over a duration, with configurable easing.
///
/// Elapsed time accumulates as [`Duration`] internally, so repeated small
/// ticks carry no floating-point drift and overshoot stays exact.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Create a fade over `duration` with linear easing.
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function (builder).
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Interpolates a pixel offset between `from` and `to` over a duration.
///
/// [`Animation::value`] returns the normalized progress; use
/// [`Tween::position`] for the interpolated offset. Drives the smooth
/// anchor scroll.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    fade: Fade,
}

impl Tween {
    /// Create a tween from `from` to `to` over `duration` with ease-in-out.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            fade: Fade::new(duration).easing(ease_in_out),
        }
    }

    /// Set the easing function (builder).
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.fade = self.fade.easing(easing);
        self
    }

    /// Target offset.
    #[inline]
    pub const fn target(&self) -> f32 {
        self.to
    }

    /// Current interpolated offset in pixels.
    pub fn position(&self) -> f32 {
        self.from + (self.to - self.from) * self.fade.value()
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.fade.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.fade.is_complete()
    }

    fn value(&self) -> f32 {
        self.fade.value()
    }

    fn reset(&mut self) {
        self.fade.reset();
    }

    fn overshoot(&self) -> Duration {
        self.fade.overshoot()
    }
}

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

/// Runs `A` to completion, then `B`. Drives the two-phase slideshow fade.
///
/// `value()` reports whichever half is live. Tick time left over when `A`
/// finishes spills into `B` within the same tick, so the pair's total
/// duration is exact regardless of tick granularity.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<A, B> {
    first: A,
    second: B,
    past_first: bool,
}

impl<A: Animation, B: Animation> Sequence<A, B> {
    /// Create a sequence playing `first` then `second`.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            past_first: false,
        }
    }

    /// Whether playback has moved past the first half.
    pub fn in_second(&self) -> bool {
        self.past_first
    }
}

/// Shorthand for [`Sequence::new`].
pub fn sequence<A: Animation, B: Animation>(first: A, second: B) -> Sequence<A, B> {
    Sequence::new(first, second)
}

impl<A: Animation, B: Animation> Animation for Sequence<A, B> {
    fn tick(&mut self, dt: Duration) {
        if self.past_first {
            self.second.tick(dt);
            return;
        }
        self.first.tick(dt);
        if self.first.is_complete() {
            self.past_first = true;
            let spill = self.first.overshoot();
            if !spill.is_zero() {
                self.second.tick(spill);
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.past_first && self.second.is_complete()
    }

    fn value(&self) -> f32 {
        if self.past_first {
            self.second.value()
        } else {
            self.first.value()
        }
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.past_first = false;
    }

    fn overshoot(&self) -> Duration {
        if self.past_first {
            self.second.overshoot()
        } else {
            Duration::ZERO
        }
    }
}
