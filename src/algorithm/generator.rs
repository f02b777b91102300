//! Steppable randomized depth-first maze carving
//!
//! The generator owns the grid together with the traversal state (current cell
//! and backtrack stack) and advances one bounded unit of work per call to
//! `advance_step`. A driver decides when to call it; the generator has no notion
//! of timing and keeps no global state.

use bitvec::prelude::*;

use crate::algorithm::random::{RandomSelector, RandomSource};
use crate::io::error::Result;
use crate::spatial::cell::{Cell, Coordinate, Walls};
use crate::spatial::grid::Grid;

/// Lifecycle of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Cells remain to be carved or backtracked through
    Running,
    /// Stack empty and no unvisited neighbor around the current cell
    Complete,
}

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Moved forward into an unvisited neighbor, removing the wall in between
    Carved {
        /// Cell the step left, now on the backtrack stack
        from: Coordinate,
        /// Newly visited cell
        to: Coordinate,
        /// Index drawn among the unvisited neighbors
        choice: usize,
    },
    /// Popped the backtrack stack after a dead end
    Backtracked {
        /// Dead-end cell the step left
        from: Coordinate,
        /// Cell restored from the stack
        to: Coordinate,
    },
    /// Nothing left to do
    Idle,
}

/// Outcome reported to the driver after each step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the current cell changed
    pub moved: bool,
    /// Whether generation has finished; further steps are no-ops
    pub complete: bool,
    /// Detail of the transition taken
    pub action: StepAction,
}

/// Read-only snapshot of one cell for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
    /// Standing walls
    pub walls: Walls,
    /// Whether the cell has been reached
    pub visited: bool,
    /// Whether this is the generator's current cell
    pub is_current: bool,
    /// Whether the cell is waiting on the backtrack stack
    pub is_on_backtrack_path: bool,
}

impl CellView {
    /// Position of the viewed cell
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.row, self.column)
    }
}

/// Randomized depth-first maze generator with an explicit backtrack stack
///
/// Every carve joins a visited cell to a previously unvisited one, so the
/// passages never form a cycle, and the stack guarantees every cell is reached
/// before it empties. The finished maze is therefore a spanning tree of the grid.
#[derive(Debug, Clone)]
pub struct MazeGenerator<R = RandomSelector> {
    grid: Grid,
    current: Coordinate,
    backtrack_stack: Vec<Coordinate>,
    /// Stack membership by row-major index
    on_stack: BitVec,
    source: R,
    state: GeneratorState,
    steps: usize,
    visited_count: usize,
}

impl MazeGenerator<RandomSelector> {
    /// Create a generator drawing from a seeded random selector
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if the grid dimensions are rejected
    pub fn with_seed(rows: usize, columns: usize, seed: u64) -> Result<Self> {
        Self::new(rows, columns, RandomSelector::new(seed))
    }
}

impl<R: RandomSource> MazeGenerator<R> {
    /// Create a generator over a fresh `rows` x `columns` grid starting at (0, 0)
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if the grid dimensions are rejected
    pub fn new(rows: usize, columns: usize, source: R) -> Result<Self> {
        let grid = Grid::new(rows, columns)?;
        let cell_count = grid.len();

        Ok(Self {
            grid,
            current: Coordinate::default(),
            backtrack_stack: Vec::with_capacity(cell_count),
            on_stack: bitvec![0; cell_count],
            source,
            state: GeneratorState::Running,
            steps: 0,
            visited_count: 0,
        })
    }

    /// Advance the carving process by one step
    ///
    /// Marks the current cell visited, then either carves into a random
    /// unvisited neighbor, backtracks one cell, or reports completion. Once
    /// complete, every call is a no-op returning `moved == false`.
    ///
    /// # Errors
    ///
    /// Only returns an error if grid invariants were broken, in which case no
    /// further mutation happened for this step
    pub fn advance_step(&mut self) -> Result<StepResult> {
        if self.is_complete() {
            return Ok(StepResult {
                moved: false,
                complete: true,
                action: StepAction::Idle,
            });
        }

        if self.grid.mark_visited(self.current)? {
            self.visited_count += 1;
        }

        let action = match self.pick_neighbor()? {
            Some((choice, next)) => self.carve_to(next, choice)?,
            None => self.backtrack(),
        };

        if self.backtrack_stack.is_empty() && self.frontier(self.current)?.is_empty() {
            self.state = GeneratorState::Complete;
        }

        Ok(StepResult {
            moved: action != StepAction::Idle,
            complete: self.is_complete(),
            action,
        })
    }

    /// Step until complete, returning the number of moves taken by this call
    ///
    /// # Errors
    ///
    /// Propagates any error from `advance_step`
    pub fn run_to_completion(&mut self) -> Result<usize> {
        let mut moves = 0;
        while !self.is_complete() {
            if self.advance_step()?.moved {
                moves += 1;
            }
        }
        Ok(moves)
    }

    fn pick_neighbor(&mut self) -> Result<Option<(usize, Coordinate)>> {
        let candidates = self.frontier(self.current)?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let drawn = self.source.next_index(candidates.len());
        debug_assert!(
            drawn < candidates.len(),
            "random source returned {drawn} for bound {}",
            candidates.len()
        );
        let choice = drawn.min(candidates.len() - 1);
        Ok(candidates.get(choice).map(|&next| (choice, next)))
    }

    fn carve_to(&mut self, next: Coordinate, choice: usize) -> Result<StepAction> {
        let from = self.current;

        self.grid.remove_wall_between(from, next)?;
        if self.grid.mark_visited(next)? {
            self.visited_count += 1;
        }
        self.push(from);
        self.current = next;
        self.steps += 1;

        Ok(StepAction::Carved {
            from,
            to: next,
            choice,
        })
    }

    fn backtrack(&mut self) -> StepAction {
        let Some(previous) = self.backtrack_stack.pop() else {
            return StepAction::Idle;
        };
        self.set_on_stack(previous, false);

        let from = self.current;
        self.current = previous;
        self.steps += 1;

        StepAction::Backtracked { from, to: previous }
    }

    fn push(&mut self, coordinate: Coordinate) {
        self.backtrack_stack.push(coordinate);
        self.set_on_stack(coordinate, true);
    }

    fn set_on_stack(&mut self, coordinate: Coordinate, value: bool) {
        if let Some(index) = self.grid.index_of(coordinate) {
            if let Some(mut bit) = self.on_stack.get_mut(index) {
                *bit = value;
            }
        }
    }

    fn frontier(&self, coordinate: Coordinate) -> Result<Vec<Coordinate>> {
        let cell = self.grid.cell_at(coordinate.row, coordinate.column)?;
        Ok(self.grid.unvisited_neighbors(cell))
    }
}

impl<R> MazeGenerator<R> {
    /// The grid being carved
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give up the generator and keep the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Coordinate of the active cell
    pub const fn current(&self) -> Coordinate {
        self.current
    }

    /// The active cell
    pub fn current_cell(&self) -> Option<&Cell> {
        self.grid.cell(self.current)
    }

    /// Backtrack stack contents from bottom to top
    pub fn backtrack_path(&self) -> &[Coordinate] {
        &self.backtrack_stack
    }

    /// Whether a cell is waiting on the backtrack stack
    pub fn is_on_backtrack_path(&self, coordinate: Coordinate) -> bool {
        self.grid
            .index_of(coordinate)
            .and_then(|index| self.on_stack.get(index).map(|bit| *bit))
            .unwrap_or(false)
    }

    /// Lifecycle state
    pub const fn state(&self) -> GeneratorState {
        self.state
    }

    /// Whether generation has finished
    pub const fn is_complete(&self) -> bool {
        matches!(self.state, GeneratorState::Complete)
    }

    /// Moves taken so far, forward and backward
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Number of cells reached so far
    pub const fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Read-only views of every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.grid.cells().map(move |cell| {
            let coordinate = cell.coordinate();
            CellView {
                row: cell.row(),
                column: cell.column(),
                walls: cell.walls(),
                visited: cell.is_visited(),
                is_current: coordinate == self.current,
                is_on_backtrack_path: self.is_on_backtrack_path(coordinate),
            }
        })
    }
}
