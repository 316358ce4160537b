#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are in host layout units (points on most toolkits). The core
//! never rounds; equality between vectors is exact.

use std::ops::{Add, Mul, Neg, Sub};

/// A 2D displacement of the center container relative to its rest position.
///
/// Positive `dx` moves the center container right (revealing the left
/// peripheral); positive `dy` moves it down (revealing the top peripheral).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// Horizontal component.
    pub dx: f64,
    /// Vertical component.
    pub dy: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    /// Create a new vector.
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Vector with only a horizontal component.
    #[inline]
    pub const fn horizontal(dx: f64) -> Self {
        Self::new(dx, 0.0)
    }

    /// Vector with only a vertical component.
    #[inline]
    pub const fn vertical(dy: f64) -> Self {
        Self::new(0.0, dy)
    }

    /// Whether both components are exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    /// Linear interpolation toward `other`; `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Vector, t: f64) -> Vector {
        self + (other - self) * t
    }

    /// Scale each component independently.
    #[inline]
    pub fn scale(self, sx: f64, sy: f64) -> Vector {
        Vector::new(self.dx * sx, self.dy * sy)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((dx, dy): (f64, f64)) -> Self {
        Self::new(dx, dy)
    }
}

/// Container frame size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size is usable for layout when both extents are finite and positive.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}
