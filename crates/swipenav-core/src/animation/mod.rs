#![forbid(unsafe_code)]

//! Time-driven animation primitives.
//!
//! Animations are advanced explicitly by the host with [`Animation::tick`];
//! nothing in this module reads a clock. This keeps every transition
//! deterministic under test.

pub mod transition;

use std::time::Duration;

pub use transition::Transition;

/// A value that evolves over time toward completion.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end state.
    fn is_complete(&self) -> bool;

    /// Eased progress in `[0.0, 1.0]`.
    fn value(&self) -> f64;

    /// Return to the initial state.
    fn reset(&mut self);
}

/// An easing curve mapping linear progress `t` in `[0, 1]` to eased progress.
pub type EasingFn = fn(f64) -> f64;

/// Identity easing.
#[inline]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out: fast start, gentle landing.
#[inline]
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic ease-in-out.
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Named easing curves, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// The curve function for this easing.
    pub fn function(self) -> EasingFn {
        match self {
            Easing::Linear => linear,
            Easing::EaseOut => ease_out,
            Easing::EaseInOut => ease_in_out,
        }
    }
}
