#![forbid(unsafe_code)]

//! Offset registry: the five target offsets derived from the frame size.
//!
//! The offsets form a "plus" around center, one frame extent away on each
//! axis:
//!
//! ```text
//!                 top (0, +H)
//!                      |
//!  right (-W, 0) -- center (0,0) -- left (+W, 0)
//!                      |
//!               bottom (0, -H)
//! ```
//!
//! Moving the center container by `+W` reveals the view laid out to its
//! left, hence the sign convention.
//!
//! # Invariants
//!
//! 1. `top.dy - center.dy == H`, `bottom.dy - center.dy == -H`.
//! 2. `left.dx - center.dx == W`, `right.dx - center.dx == -W`.
//! 3. Every peripheral shares its cross-axis component with center.
//! 4. The registry is rebuilt whenever the frame size changes; it is never
//!    patched in place.

use crate::error::{Result, SwipeError};
use crate::geometry::{Size, Vector};
use crate::position::Position;

/// Cached target offsets for one frame size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetRegistry {
    frame: Size,
    center: Vector,
    top: Vector,
    bottom: Vector,
    left: Vector,
    right: Vector,
}

impl OffsetRegistry {
    /// Compute the offsets for `frame`, with center at rest `(0, 0)`.
    pub fn compute(frame: Size) -> Result<Self> {
        Self::compute_around(frame, Vector::ZERO)
    }

    /// Compute the offsets for `frame` around an explicit center baseline.
    pub(crate) fn compute_around(frame: Size, center: Vector) -> Result<Self> {
        if !frame.is_valid() || !center.is_finite() {
            return Err(SwipeError::InvalidFrameSize {
                width: frame.width,
                height: frame.height,
            });
        }
        Ok(Self {
            frame,
            center,
            top: center + Vector::vertical(frame.height),
            bottom: center + Vector::vertical(-frame.height),
            left: center + Vector::horizontal(frame.width),
            right: center + Vector::horizontal(-frame.width),
        })
    }

    /// Frame size these offsets were computed from.
    #[inline]
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// Target offset for `position`.
    #[inline]
    pub fn offset(&self, position: Position) -> Vector {
        match position {
            Position::Center => self.center,
            Position::Top => self.top,
            Position::Bottom => self.bottom,
            Position::Left => self.left,
            Position::Right => self.right,
        }
    }

    /// The position whose target exactly equals `offset`, if any.
    pub fn position_at(&self, offset: Vector) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&p| self.offset(p) == offset)
    }

    /// Map an offset expressed against `self` onto `next`, scaling each axis
    /// by the ratio of frame extents relative to center.
    ///
    /// Exact targets map to exact targets, so an active position stays active
    /// across a resize.
    pub fn rebase(&self, offset: Vector, next: &OffsetRegistry) -> Vector {
        if let Some(position) = self.position_at(offset) {
            return next.offset(position);
        }
        let sx = next.frame.width / self.frame.width;
        let sy = next.frame.height / self.frame.height;
        next.center + (offset - self.center).scale(sx, sy)
    }
}
