//! Steppable randomized depth-first maze generation
//!
//! A `MazeGenerator` carves a perfect maze over a rectangular `Grid` one step at
//! a time, keeping an explicit backtrack stack. Drivers call `advance_step`
//! once per tick and read the grid back through `cells()` to draw it.

#![forbid(unsafe_code)]

/// Depth-first carving state machine and its random sources
pub mod algorithm;
/// Structural verification of carved grids
pub mod analysis;
/// Input/output operations, rendering and error handling
pub mod io;
/// Grid, cell and direction types
pub mod spatial;

pub use algorithm::generator::{CellView, MazeGenerator, StepAction, StepResult};
pub use io::error::{MazeError, Result};
pub use spatial::{Cell, Coordinate, Direction, Grid};
