#![forbid(unsafe_code)]

//! Pan tracking: turns Begin/Change/End pan events into clamped offsets and a
//! snap target.
//!
//! [`PanTracker`] owns the per-gesture state only (locked axis and last
//! nonzero direction). The current offset, the offset registry and the
//! visibility set are passed in by the controller on every call, so the
//! tracker itself holds no layout state.
//!
//! # State Machine
//!
//! ```text
//!   Idle --Began--> DraggingUndefined --Changed--> DraggingHorizontal --Ended--> Idle
//!                 \                            \-> DraggingVertical   --Ended--> Idle
//!                  \--(peripheral active)--> DraggingHorizontal | DraggingVertical
//! ```
//!
//! # Invariants
//!
//! 1. During a horizontal drag `dy` of the offset is never modified; during a
//!    vertical drag `dx` is never modified.
//! 2. The axis is reset at every `Began` and discarded at `Ended`.
//! 3. A zero component of a translation never overwrites the stored last
//!    nonzero direction on that axis.
//! 4. After a `Changed`, the offset along the locked axis lies within the
//!    bounds computed by [`drag_bounds`].
//!
//! # Failure Modes
//!
//! - `Changed` or `Ended` without a preceding `Began` are ignored.
//! - `Ended` with the axis still undefined commits nothing; the offset stays
//!   where it is.

use crate::geometry::Vector;
use crate::offsets::OffsetRegistry;
use crate::position::{Axis, PeripheralSet, Position};
use crate::snap::SnapPolicy;

/// Events produced by the host's pan recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanEvent {
    /// A pan started.
    Began,
    /// Incremental translation since the previous `Changed` (not cumulative).
    Changed(Vector),
    /// The pan finished.
    Ended,
}

/// Axis lock for the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanAxis {
    #[default]
    Undefined,
    Horizontal,
    Vertical,
}

impl PanAxis {
    /// The resolved axis, if any.
    #[inline]
    pub fn resolved(self) -> Option<Axis> {
        match self {
            PanAxis::Undefined => None,
            PanAxis::Horizontal => Some(Axis::Horizontal),
            PanAxis::Vertical => Some(Axis::Vertical),
        }
    }

    /// Resolve from the first movement. Horizontal only when strictly larger.
    #[inline]
    pub fn from_translation(translation: Vector) -> Self {
        if translation.dx.abs() > translation.dy.abs() {
            PanAxis::Horizontal
        } else {
            PanAxis::Vertical
        }
    }
}

impl From<Axis> for PanAxis {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => PanAxis::Horizontal,
            Axis::Vertical => PanAxis::Vertical,
        }
    }
}

/// Observable gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    DraggingUndefined,
    DraggingHorizontal,
    DraggingVertical,
}

/// Per-gesture pan state.
#[derive(Debug, Clone, Default)]
pub struct PanTracker {
    active: bool,
    axis: PanAxis,
    last_direction: Vector,
}

impl PanTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture phase.
    pub fn state(&self) -> GestureState {
        if !self.active {
            return GestureState::Idle;
        }
        match self.axis {
            PanAxis::Undefined => GestureState::DraggingUndefined,
            PanAxis::Horizontal => GestureState::DraggingHorizontal,
            PanAxis::Vertical => GestureState::DraggingVertical,
        }
    }

    /// Axis locked for the current gesture.
    #[inline]
    pub fn axis(&self) -> PanAxis {
        self.axis
    }

    /// Last nonzero translation per axis seen during the current gesture.
    #[inline]
    pub fn last_direction(&self) -> Vector {
        self.last_direction
    }

    /// Whether a gesture is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a gesture.
    ///
    /// A gesture starting on a peripheral position is pre-locked to that
    /// position's axis, so it can only travel back toward center (or further
    /// along the same line). A repeated begin while a gesture is in progress
    /// keeps the running gesture.
    pub fn begin(&mut self, registry: &OffsetRegistry, current: Vector) -> PanAxis {
        if self.active {
            return self.axis;
        }
        self.active = true;
        self.last_direction = Vector::ZERO;
        self.axis = registry
            .position_at(current)
            .and_then(Position::axis)
            .map_or(PanAxis::Undefined, PanAxis::from);
        self.axis
    }

    /// Apply one incremental translation, returning the new offset.
    ///
    /// A translation with a NaN or infinite component is dropped.
    pub fn change(
        &mut self,
        translation: Vector,
        registry: &OffsetRegistry,
        attached: PeripheralSet,
        current: Vector,
    ) -> Vector {
        if !self.active || !translation.is_finite() {
            return current;
        }

        if translation.dx != 0.0 {
            self.last_direction.dx = translation.dx;
        }
        if translation.dy != 0.0 {
            self.last_direction.dy = translation.dy;
        }

        if self.axis == PanAxis::Undefined {
            if translation.is_zero() {
                return current;
            }
            self.axis = PanAxis::from_translation(translation);
        }

        match self.axis.resolved() {
            Some(axis @ Axis::Horizontal) => {
                let (min, max) = drag_bounds(registry, attached, current, axis);
                Vector::new((current.dx + translation.dx).clamp(min, max), current.dy)
            }
            Some(axis @ Axis::Vertical) => {
                let (min, max) = drag_bounds(registry, attached, current, axis);
                Vector::new(current.dx, (current.dy + translation.dy).clamp(min, max))
            }
            None => current,
        }
    }

    /// Finish the gesture and pick a snap target.
    ///
    /// Returns `None` when nothing should be committed: no resolved axis, or
    /// the offset already sits on center along the locked axis.
    pub fn end(
        &mut self,
        registry: &OffsetRegistry,
        current: Vector,
        policy: &SnapPolicy,
    ) -> Option<Position> {
        if !self.active {
            return None;
        }
        let axis = self.axis.resolved();
        let last = self.last_direction;
        self.active = false;
        self.axis = PanAxis::Undefined;

        let displacement = current - registry.offset(Position::Center);
        policy.decide(axis?, displacement, registry.frame(), last)
    }

    /// Drop any in-progress gesture without committing.
    pub fn reset(&mut self) {
        self.active = false;
        self.axis = PanAxis::Undefined;
        self.last_direction = Vector::ZERO;
    }
}

/// Clamp range along `axis` for a drag starting from `current`.
///
/// A peripheral bound is reachable when its view is attached, or when the
/// offset is already past center toward it (it was shown through some other
/// means, e.g. a button, before being detached). Otherwise the bound
/// collapses onto center.
pub fn drag_bounds(
    registry: &OffsetRegistry,
    attached: PeripheralSet,
    current: Vector,
    axis: Axis,
) -> (f64, f64) {
    let center = registry.offset(Position::Center);
    let (value, center_value, negative, positive) = match axis {
        Axis::Horizontal => (current.dx, center.dx, Position::Right, Position::Left),
        Axis::Vertical => (current.dy, center.dy, Position::Bottom, Position::Top),
    };
    let component = |p: Position| match axis {
        Axis::Horizontal => registry.offset(p).dx,
        Axis::Vertical => registry.offset(p).dy,
    };

    let min = if value < center_value || attached.allows(negative) {
        component(negative)
    } else {
        center_value
    };
    let max = if value > center_value || attached.allows(positive) {
        component(positive)
    } else {
        center_value
    };
    (min, max)
}
