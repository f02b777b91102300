//! Lattice positions with their wall and visitation state

use std::fmt;

use crate::spatial::direction::Direction;

/// Non-owning handle to a cell: its `(row, column)` position in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based column index
    pub column: usize,
}

impl Coordinate {
    /// Create a coordinate from row and column indices
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The coordinate one step away in `direction`, if it does not underflow
    ///
    /// Upper bounds are the grid's concern, see `Grid::neighbor`.
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, column_delta) = direction.offset();
        match (
            self.row.checked_add_signed(row_delta),
            self.column.checked_add_signed(column_delta),
        ) {
            (Some(row), Some(column)) => Some(Self { row, column }),
            _ => None,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The four walls enclosing a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls {
    /// Wall shared with the cell above
    pub top: bool,
    /// Wall shared with the cell to the right
    pub right: bool,
    /// Wall shared with the cell below
    pub bottom: bool,
    /// Wall shared with the cell to the left
    pub left: bool,
}

impl Walls {
    /// Every wall standing
    pub const CLOSED: Self = Self {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// Whether the wall on the given side is standing
    pub const fn has(self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// Number of cleared sides
    pub fn openings(self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&direction| !self.has(direction))
            .count()
    }

    const fn clear(&mut self, direction: Direction) {
        match direction {
            Direction::Top => self.top = false,
            Direction::Right => self.right = false,
            Direction::Bottom => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// One lattice position
///
/// Coordinates are fixed at creation. Walls only ever come down and `visited`
/// only ever goes from false to true; both are mutated through the owning grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    coordinate: Coordinate,
    walls: Walls,
    visited: bool,
}

impl Cell {
    /// A fully enclosed, unvisited cell
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            coordinate: Coordinate::new(row, column),
            walls: Walls::CLOSED,
            visited: false,
        }
    }

    /// Row index
    pub const fn row(&self) -> usize {
        self.coordinate.row
    }

    /// Column index
    pub const fn column(&self) -> usize {
        self.coordinate.column
    }

    /// Position handle for grid lookups
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Current wall state
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Whether the wall towards `direction` is standing
    pub const fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    /// Whether the generator has reached this cell
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) const fn clear_wall(&mut self, direction: Direction) {
        self.walls.clear(direction);
    }

    /// Returns true when the flag actually changed
    pub(crate) const fn mark_visited(&mut self) -> bool {
        let changed = !self.visited;
        self.visited = true;
        changed
    }
}
