#![forbid(unsafe_code)]

//! Transition: a timed, eased move between two offsets.
//!
//! A [`Transition`] carries the presentation of the center container from
//! where it is drawn now to a committed target offset. The target is the
//! authoritative value the moment the transition starts; the transition only
//! governs what is drawn in between.
//!
//! # Invariants
//!
//! 1. `offset()` equals `from` before the first tick and `to` once complete.
//! 2. `elapsed` never exceeds `duration`.
//!
//! # Failure Modes
//!
//! - Zero duration: the transition is complete on construction.

use std::time::Duration;

use super::{Animation, Easing};
use crate::geometry::Vector;

/// A timed move from one offset to another.
#[derive(Debug, Clone)]
pub struct Transition {
    from: Vector,
    to: Vector,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Transition {
    /// Create a transition from `from` to `to` over `duration`.
    #[must_use]
    pub fn new(from: Vector, to: Vector, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start offset.
    #[inline]
    pub fn start(&self) -> Vector {
        self.from
    }

    /// Target offset.
    #[inline]
    pub fn target(&self) -> Vector {
        self.to
    }

    /// Total duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time remaining until completion.
    #[inline]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }

    /// Currently presented offset.
    pub fn offset(&self) -> Vector {
        if self.is_complete() {
            self.to
        } else {
            self.from.lerp(self.to, self.value())
        }
    }

    /// Move the target without restarting the clock.
    ///
    /// Used while a drag moves the authoritative offset under an in-flight
    /// transition.
    pub fn shift_target(&mut self, to: Vector) {
        self.to = to;
    }

    /// Map both endpoints into another coordinate space, keeping progress.
    pub fn remap(&mut self, f: impl Fn(Vector) -> Vector) {
        self.from = f(self.from);
        self.to = f(self.to);
    }
}

impl Animation for Transition {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (self.easing.function())(t)
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
