//! Generation constants and runtime configuration defaults

// Grid defaults reproduce a 30x30 maze drawn on a 500px canvas
/// Default number of rows
pub const DEFAULT_ROWS: usize = 30;
/// Default number of columns
pub const DEFAULT_COLUMNS: usize = 30;
/// Default edge length of a cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 16;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Maximum cell edge length accepted by the renderer
pub const MAX_CELL_SIZE: u32 = 256;

/// Largest canvas side the renderer will allocate, in pixels
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Thickness of a wall line in pixels
pub const WALL_THICKNESS: u32 = 2;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of mazes generated per run
pub const DEFAULT_MAZE_COUNT: usize = 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// File name prefix for generated mazes
pub const OUTPUT_PREFIX: &str = "maze";
/// Suffix added to animation filenames
pub const CONSTRUCTION_SUFFIX: &str = "_construction";
/// Delay between GIF animation frames, one per generation step
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the delay of the closing frame
pub const FINAL_FRAME_HOLD: u32 = 25;

// Palette, RGBA
/// Canvas background
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Wall lines
pub const WALL_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Cells the generator has not reached yet
pub const UNVISITED_COLOR: [u8; 4] = [40, 40, 40, 255];
/// Cells already carved and left behind
pub const VISITED_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Cells waiting on the backtrack stack
pub const BACKTRACK_COLOR: [u8; 4] = [0, 0, 255, 255];
/// The generator's current cell
pub const CURRENT_COLOR: [u8; 4] = [255, 0, 0, 255];
