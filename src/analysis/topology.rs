//! Structural checks over a carved grid
//!
//! A maze is perfect when its passage graph is a spanning tree of the lattice.
//! For a graph on `n` vertices, being connected with exactly `n - 1` edges is
//! equivalent to being a tree, so the checks reduce to a passage count and a
//! flood fill from the origin.

use bitvec::prelude::*;

use crate::spatial::cell::Coordinate;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;

/// Summary of the passage graph of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyReport {
    /// Number of cells in the grid
    pub cells: usize,
    /// Number of cleared interior walls, each counted once
    pub passages: usize,
    /// Cells reachable from (0, 0) through passages
    pub reachable: usize,
    /// Every interior wall agrees on both of its sides
    pub symmetric: bool,
    /// Every wall on the outer border is still standing
    pub sealed: bool,
    /// Cells with exactly one opening
    pub dead_ends: usize,
}

impl TopologyReport {
    /// Inspect the walls of every cell in `grid`
    pub fn analyze(grid: &Grid) -> Self {
        let mut passages = 0;
        let mut symmetric = true;
        let mut sealed = true;
        let mut dead_ends = 0;

        for cell in grid.cells() {
            if cell.walls().openings() == 1 {
                dead_ends += 1;
            }

            for direction in Direction::ALL {
                let open = !cell.has_wall(direction);
                match grid.neighbor(cell.coordinate(), direction) {
                    Some(next) => {
                        let facing_open = grid
                            .cell(next)
                            .is_some_and(|other| !other.has_wall(direction.opposite()));
                        if open != facing_open {
                            symmetric = false;
                        }
                        // Count each shared wall from its top or left side only
                        if open
                            && facing_open
                            && matches!(direction, Direction::Right | Direction::Bottom)
                        {
                            passages += 1;
                        }
                    }
                    None => {
                        if open {
                            sealed = false;
                        }
                    }
                }
            }
        }

        Self {
            cells: grid.len(),
            passages,
            reachable: count_reachable(grid),
            symmetric,
            sealed,
            dead_ends,
        }
    }

    /// Whether every cell is reachable from the origin
    pub const fn is_connected(&self) -> bool {
        self.reachable == self.cells
    }

    /// Whether the passages form a spanning tree with consistent walls
    pub const fn is_perfect(&self) -> bool {
        self.symmetric
            && self.sealed
            && self.is_connected()
            && self.passages + 1 == self.cells
    }
}

fn count_reachable(grid: &Grid) -> usize {
    let mut seen = bitvec![0; grid.len()];
    let mut pending = vec![Coordinate::default()];
    let mut reached = 0;

    while let Some(coordinate) = pending.pop() {
        let Some(index) = grid.index_of(coordinate) else {
            continue;
        };
        if seen.get(index).is_some_and(|bit| *bit) {
            continue;
        }
        seen.set(index, true);
        reached += 1;

        for direction in Direction::ALL {
            if let Some(next) = grid.neighbor(coordinate, direction) {
                if grid.has_passage(coordinate, next) {
                    pending.push(next);
                }
            }
        }
    }

    reached
}
