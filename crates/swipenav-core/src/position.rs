#![forbid(unsafe_code)]

//! The five layout positions and the peripheral visibility set.

use std::fmt;

use bitflags::bitflags;

/// One of the five fixed layout positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

/// A pan axis that has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Position {
    /// All positions, center first.
    pub const ALL: [Position; 5] = [
        Position::Center,
        Position::Top,
        Position::Bottom,
        Position::Left,
        Position::Right,
    ];

    /// The four peripheral positions.
    pub const PERIPHERALS: [Position; 4] =
        [Position::Top, Position::Bottom, Position::Left, Position::Right];

    /// Whether this is one of the four peripheral positions.
    #[inline]
    pub const fn is_peripheral(self) -> bool {
        !matches!(self, Position::Center)
    }

    /// Axis along which this position is reached from center.
    ///
    /// `None` for [`Position::Center`].
    #[inline]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Position::Center => None,
            Position::Top | Position::Bottom => Some(Axis::Vertical),
            Position::Left | Position::Right => Some(Axis::Horizontal),
        }
    }

    /// Visibility flag gating this position, `None` for center.
    #[inline]
    pub const fn flag(self) -> Option<PeripheralSet> {
        match self {
            Position::Center => None,
            Position::Top => Some(PeripheralSet::TOP),
            Position::Bottom => Some(PeripheralSet::BOTTOM),
            Position::Left => Some(PeripheralSet::LEFT),
            Position::Right => Some(PeripheralSet::RIGHT),
        }
    }

    /// Lowercase name, as used in traces and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Position::Center => "center",
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::Left => "left",
            Position::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Set of peripheral positions that currently have an attached view.
    ///
    /// A position missing from the set cannot be dragged toward from center.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PeripheralSet: u8 {
        const TOP = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
    }
}

impl PeripheralSet {
    /// Whether `position` is reachable. Center is always reachable.
    #[inline]
    pub fn allows(self, position: Position) -> bool {
        position.flag().is_none_or(|flag| self.contains(flag))
    }
}

impl FromIterator<Position> for PeripheralSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        iter.into_iter()
            .filter_map(Position::flag)
            .fold(PeripheralSet::empty(), |acc, flag| acc | flag)
    }
}
