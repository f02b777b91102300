//! Multi-maze progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Per-maze display state: label, visited cells, total cells
#[derive(Debug, Clone, Default)]
struct MazeProgress {
    label: String,
    visited: usize,
    cells: usize,
}

/// Coordinates progress display for a batch of generated mazes
///
/// Shows one bar per maze for small batches, counting visited cells, and adds a
/// batch bar once the number of mazes exceeds the visible window. Only the most
/// recent mazes keep a visible bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    maze_bars: Vec<ProgressBar>,
    maze_count: usize,
    maze_states: Vec<MazeProgress>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Mazes: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            maze_bars: Vec::new(),
            maze_count: 0,
            maze_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on maze count
    pub fn initialize(&mut self, maze_count: usize) {
        self.maze_count = maze_count;

        // Switch to batch mode for large runs to avoid terminal spam
        if maze_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(maze_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = maze_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.maze_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Number of mazes announced by `initialize`
    pub const fn maze_count(&self) -> usize {
        self.maze_count
    }

    /// Configure a progress bar for a new maze
    pub fn start_maze(&mut self, index: usize, label: &str, cells: usize) {
        if index >= self.maze_states.len() {
            self.maze_states.resize(index + 1, MazeProgress::default());
        }
        if let Some(state) = self.maze_states.get_mut(index) {
            *state = MazeProgress {
                label: label.to_string(),
                visited: 0,
                cells,
            };
        }
        self.update_bars();
    }

    /// Report how many cells of a maze have been visited
    pub fn update_visited(&mut self, index: usize, visited: usize) {
        if let Some(state) = self.maze_states.get_mut(index) {
            if state.visited == visited {
                return;
            }
            state.visited = visited;
        }
        self.update_bars();
    }

    /// Mark a maze as finished and update batch progress
    pub fn complete_maze(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.maze_states.get_mut(index) {
            state.label = format!("✓ {}", state.label);
            state.visited = state.cells;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All mazes generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active mazes
    fn update_bars(&self) {
        let active: Vec<&MazeProgress> = self
            .maze_states
            .iter()
            .filter(|state| !state.label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, state) in visible.iter().enumerate() {
            if let Some(bar) = self.maze_bars.get(bar_idx) {
                bar.set_length(state.cells as u64);
                bar.set_position(state.visited as u64);
                let max_width = state.cells.to_string().len();
                bar.set_message(format!("{:>max_width$}/{}", state.visited, state.cells));
                bar.set_prefix(state.label.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible.len()..self.maze_bars.len() {
            if let Some(bar) = self.maze_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
