//! Fixed-size lattice of cells with centralized bounds checking
//!
//! Cells are stored row-major in an `Array2` and never hold references to each
//! other. Adjacency is always derived from coordinates through `Grid::neighbor`,
//! which applies the same `0 <= index < dimension` rule on every side.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result};
use crate::spatial::cell::{Cell, Coordinate};
use crate::spatial::direction::Direction;

/// The maze lattice, owning every cell exclusively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Allocate `rows` x `columns` enclosed, unvisited cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("columns", columns)?;

        let cells = Array2::from_shape_fn((rows, columns), |(row, column)| Cell::new(row, column));
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a grid holds at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether a coordinate addresses a cell of this grid
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows() && coordinate.column < self.columns()
    }

    /// Row-major index of a coordinate, used for flat side tables
    pub fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        self.contains(coordinate)
            .then(|| coordinate.row * self.columns() + coordinate.column)
    }

    /// Look up a cell by row and column
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` outside `[0, rows) x [0, columns)`
    pub fn cell_at(&self, row: usize, column: usize) -> Result<&Cell> {
        let coordinate = Coordinate::new(row, column);
        self.cell(coordinate)
            .ok_or_else(|| self.out_of_bounds(coordinate))
    }

    /// Look up a cell by coordinate, `None` when outside the grid
    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.cells.get([coordinate.row, coordinate.column])
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// The adjacent coordinate in `direction`, or `None` past any edge
    pub fn neighbor(&self, coordinate: Coordinate, direction: Direction) -> Option<Coordinate> {
        if !self.contains(coordinate) {
            return None;
        }
        coordinate
            .step(direction)
            .filter(|&next| self.contains(next))
    }

    /// Axis-adjacent cells of `cell` that have not been visited
    ///
    /// Candidates are listed in `Direction::ALL` order.
    pub fn unvisited_neighbors(&self, cell: &Cell) -> Vec<Coordinate> {
        let mut neighbors = Vec::with_capacity(Direction::ALL.len());
        for direction in Direction::ALL {
            if let Some(next) = self.neighbor(cell.coordinate(), direction) {
                if self.cell(next).is_some_and(|candidate| !candidate.is_visited()) {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }

    /// Mark a cell visited, returning whether it was previously unvisited
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the coordinate is outside the grid
    pub fn mark_visited(&mut self, coordinate: Coordinate) -> Result<bool> {
        let error = self.out_of_bounds(coordinate);
        self.cells
            .get_mut([coordinate.row, coordinate.column])
            .map(Cell::mark_visited)
            .ok_or(error)
    }

    /// Carve a passage between two axis-adjacent cells
    ///
    /// Clears the wall of `first` facing `second` and the matching wall of
    /// `second`. Returns the direction from `first` to `second`. Nothing is
    /// mutated when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either coordinate is outside the grid, or
    /// `NotAdjacent` if the cells are not exactly one step apart
    pub fn remove_wall_between(&mut self, first: Coordinate, second: Coordinate) -> Result<Direction> {
        for coordinate in [first, second] {
            if !self.contains(coordinate) {
                return Err(self.out_of_bounds(coordinate));
            }
        }

        let direction =
            Direction::between(first, second).ok_or(MazeError::NotAdjacent { first, second })?;

        if let Some(cell) = self.cells.get_mut([first.row, first.column]) {
            cell.clear_wall(direction);
        }
        if let Some(cell) = self.cells.get_mut([second.row, second.column]) {
            cell.clear_wall(direction.opposite());
        }

        Ok(direction)
    }

    /// Whether two adjacent cells are joined by a carved passage
    pub fn has_passage(&self, first: Coordinate, second: Coordinate) -> bool {
        Direction::between(first, second).is_some_and(|direction| {
            self.cell(first).is_some_and(|cell| !cell.has_wall(direction))
                && self
                    .cell(second)
                    .is_some_and(|cell| !cell.has_wall(direction.opposite()))
        })
    }

    fn out_of_bounds(&self, coordinate: Coordinate) -> MazeError {
        MazeError::OutOfBounds {
            coordinate,
            rows: self.rows(),
            columns: self.columns(),
        }
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(MazeError::InvalidDimension {
            parameter,
            value,
            reason: "must be at least 1".to_string(),
        });
    }
    if value > MAX_GRID_DIMENSION {
        return Err(MazeError::InvalidDimension {
            parameter,
            value,
            reason: format!("must not exceed {MAX_GRID_DIMENSION}"),
        });
    }
    Ok(())
}
