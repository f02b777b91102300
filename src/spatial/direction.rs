//! Axis directions on the lattice and their coordinate offsets

use std::fmt;

use crate::spatial::cell::Coordinate;

/// One of the four axis-aligned directions between adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row - 1
    Top,
    /// Towards column + 1
    Right,
    /// Towards row + 1
    Bottom,
    /// Towards column - 1
    Left,
}

impl Direction {
    /// All directions in clockwise order starting from the top
    ///
    /// Neighbor enumeration follows this order, which keeps scripted
    /// random draws reproducible.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The direction pointing back the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Row and column deltas for one step in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Top => (-1, 0),
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::Left => (0, -1),
        }
    }

    /// Direction leading from `from` to an axis-adjacent `to`
    ///
    /// Returns `None` unless the Manhattan distance between the two is exactly 1.
    pub const fn between(from: Coordinate, to: Coordinate) -> Option<Self> {
        if from.row == to.row {
            if to.column == from.column.wrapping_add(1) {
                return Some(Self::Right);
            }
            if from.column == to.column.wrapping_add(1) {
                return Some(Self::Left);
            }
        } else if from.column == to.column {
            if to.row == from.row.wrapping_add(1) {
                return Some(Self::Bottom);
            }
            if from.row == to.row.wrapping_add(1) {
                return Some(Self::Top);
            }
        }
        None
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}
