//! Spatial data structures for the maze lattice
//!
//! This module contains:
//! - Cells with their wall and visitation state
//! - Axis directions and coordinate offsets
//! - The grid owning all cells and resolving adjacency

/// Cell, wall and coordinate types
pub mod cell;
/// Axis directions between adjacent cells
pub mod direction;
/// Grid storage and bounds-checked adjacency
pub mod grid;

pub use cell::{Cell, Coordinate, Walls};
pub use direction::Direction;
pub use grid::Grid;
