#![forbid(unsafe_code)]

//! Snap decision at the end of a pan.
//!
//! Each half of an axis is split into three bands by the threshold fraction
//! `f` of the container extent `E`:
//!
//! ```text
//!  center     middle band      peripheral
//! 0----------+----------------+---------->E
//!            f*E          (1-f)*E
//! ```
//!
//! Below `f*E` snaps back to center, above `(1-f)*E` commits to the
//! peripheral. Inside the middle band the last nonzero movement on that axis
//! decides: still moving away from center commits to the peripheral,
//! anything else returns to center. The negative half mirrors this.
//!
//! The same rule is used for both axes; there is no per-axis tie-break
//! variation.

use crate::geometry::{Size, Vector};
use crate::position::{Axis, Position};

/// Default snap threshold fraction for both axes.
pub const DEFAULT_SNAP_FRACTION: f64 = 0.15;

/// Threshold fractions used to pick a snap target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPolicy {
    pub horizontal_fraction: f64,
    pub vertical_fraction: f64,
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self {
            horizontal_fraction: DEFAULT_SNAP_FRACTION,
            vertical_fraction: DEFAULT_SNAP_FRACTION,
        }
    }
}

impl SnapPolicy {
    /// Pick the commit target for a pan that ended on `axis`.
    ///
    /// `displacement` is the current offset relative to center and
    /// `last_direction` the last nonzero per-axis delta of the gesture.
    /// Returns `None` when the offset sits exactly on center along `axis`.
    pub fn decide(
        &self,
        axis: Axis,
        displacement: Vector,
        frame: Size,
        last_direction: Vector,
    ) -> Option<Position> {
        match axis {
            Axis::Horizontal => snap_axis(
                displacement.dx,
                frame.width,
                self.horizontal_fraction,
                last_direction.dx,
                Position::Left,
                Position::Right,
            ),
            Axis::Vertical => snap_axis(
                displacement.dy,
                frame.height,
                self.vertical_fraction,
                last_direction.dy,
                Position::Top,
                Position::Bottom,
            ),
        }
    }
}

fn snap_axis(
    value: f64,
    extent: f64,
    fraction: f64,
    last: f64,
    positive: Position,
    negative: Position,
) -> Option<Position> {
    let near = fraction * extent;
    let far = (1.0 - fraction) * extent;
    if value > 0.0 {
        if value < near {
            Some(Position::Center)
        } else if value > far || last > 0.0 {
            Some(positive)
        } else {
            Some(Position::Center)
        }
    } else if value < 0.0 {
        if value > -near {
            Some(Position::Center)
        } else if value < -far || last < 0.0 {
            Some(negative)
        } else {
            Some(Position::Center)
        }
    } else {
        None
    }
}
