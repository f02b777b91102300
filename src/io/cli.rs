//! Command-line interface and the step-driving loop for batch maze generation

use crate::algorithm::generator::MazeGenerator;
use crate::analysis::topology::TopologyReport;
use crate::io::configuration::{
    CONSTRUCTION_SUFFIX, DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_MAZE_COUNT, DEFAULT_ROWS,
    DEFAULT_SEED, GIF_FRAME_DELAY_MS, OUTPUT_PREFIX,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::image::export_maze_png;
use crate::io::progress::ProgressManager;
use crate::io::render::MazeRenderer;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazecarver")]
#[command(
    author,
    version,
    about = "Generate perfect mazes by randomized depth-first carving"
)]
/// Command-line arguments for the maze generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory receiving the generated images
    #[arg(value_name = "OUTPUT", default_value = ".")]
    pub output: PathBuf,

    /// Number of rows in the grid
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns in the grid
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Edge length of a drawn cell in pixels
    #[arg(short = 'z', long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Random seed of the first maze; later mazes use the following seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of mazes to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAZE_COUNT)]
    pub count: usize,

    /// Also export the construction as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate mazes even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seeds of every maze requested, in generation order
    pub fn seeds(&self) -> Vec<u64> {
        (0..self.count as u64)
            .map(|offset| self.seed.wrapping_add(offset))
            .collect()
    }
}

/// Drives generators step by step and writes their outputs
///
/// This is the only caller of `MazeGenerator::advance_step`: each loop
/// iteration advances one step, records it for the animation and refreshes the
/// progress display.
pub struct MazeRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested maze
    ///
    /// # Errors
    ///
    /// Returns an error if the grid or cell size is rejected, a maze fails
    /// verification, or an output cannot be written
    pub fn run(&mut self) -> Result<()> {
        let renderer = MazeRenderer::new(self.cli.cell_size)?;
        renderer.checked_canvas_size(self.cli.rows, self.cli.columns)?;

        let seeds: Vec<u64> = self
            .cli
            .seeds()
            .into_iter()
            .filter(|&seed| self.should_generate(seed))
            .collect();

        if seeds.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        for (index, &seed) in seeds.iter().enumerate() {
            self.generate(&renderer, index, seed)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn should_generate(&self, seed: u64) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::maze_path(&self.cli.output, seed);
        let animation_done =
            !self.cli.visualize || Self::construction_path(&self.cli.output, seed).exists();
        if output_path.exists() && animation_done {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", output_path.display());
            }
            false
        } else {
            true
        }
    }

    fn generate(&mut self, renderer: &MazeRenderer, index: usize, seed: u64) -> Result<()> {
        let (rows, columns) = (self.cli.rows, self.cli.columns);
        let mut generator = MazeGenerator::with_seed(rows, columns, seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_maze(index, &format!("{OUTPUT_PREFIX}_{seed}"), generator.grid().len());
        }

        let mut capture = self
            .cli
            .visualize
            .then(|| VisualizationCapture::new(rows, columns, *renderer));

        let mut complete = false;
        while !complete {
            let step = generator.advance_step()?;

            if let Some(ref mut capture) = capture {
                capture.record_step(&step);
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_visited(index, generator.visited_count());
            }

            complete = step.complete;
        }

        let report = TopologyReport::analyze(generator.grid());
        if !report.is_perfect() {
            return Err(MazeError::ImperfectMaze {
                seed,
                passages: report.passages,
                reachable: report.reachable,
                cells: report.cells,
            });
        }

        let output_path = Self::maze_path(&self.cli.output, seed);
        export_maze_png(&generator, renderer, path_str(&output_path)?)?;

        if let Some(capture) = capture {
            let viz_path = Self::construction_path(&self.cli.output, seed);
            capture.export_gif(path_str(&viz_path)?, GIF_FRAME_DELAY_MS)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_maze(index);
        }

        Ok(())
    }

    /// Location of the finished maze image for a seed
    pub fn maze_path(output_dir: &Path, seed: u64) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}_{seed}.png"))
    }

    /// Location of the construction animation for a seed
    pub fn construction_path(output_dir: &Path, seed: u64) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}_{seed}{CONSTRUCTION_SUFFIX}.gif"))
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| invalid_parameter("output", &path.display(), &"path is not valid UTF-8"))
}
