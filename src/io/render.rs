//! Raster drawing of maze cells and walls

use image::{Rgba, RgbaImage};

use crate::algorithm::generator::CellView;
use crate::io::configuration::{
    BACKGROUND_COLOR, BACKTRACK_COLOR, CURRENT_COLOR, DEFAULT_CELL_SIZE, MAX_CANVAS_SIDE,
    MAX_CELL_SIZE, UNVISITED_COLOR, VISITED_COLOR, WALL_COLOR, WALL_THICKNESS,
};
use crate::io::error::{Result, invalid_parameter};

/// Colors used for each cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Canvas background
    pub background: [u8; 4],
    /// Wall lines
    pub wall: [u8; 4],
    /// Unreached cells
    pub unvisited: [u8; 4],
    /// Reached cells off the backtrack path
    pub visited: [u8; 4],
    /// Cells on the backtrack path
    pub backtrack: [u8; 4],
    /// Current cell
    pub current: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR,
            wall: WALL_COLOR,
            unvisited: UNVISITED_COLOR,
            visited: VISITED_COLOR,
            backtrack: BACKTRACK_COLOR,
            current: CURRENT_COLOR,
        }
    }
}

/// Draws cell views onto an RGBA canvas
///
/// Each cell occupies a `cell_size` square whose top-left corner sits at
/// `(column * cell_size, row * cell_size)`. Interiors are inset by one pixel and
/// walls are drawn on top, so the canvas is `WALL_THICKNESS` wider and taller
/// than the cell area to fit the right and bottom border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeRenderer {
    cell_size: u32,
    palette: Palette,
}

impl Default for MazeRenderer {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            palette: Palette::default(),
        }
    }
}

impl MazeRenderer {
    /// Create a renderer with the default palette
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `cell_size` is smaller than 3 pixels or
    /// larger than `MAX_CELL_SIZE`
    pub fn new(cell_size: u32) -> Result<Self> {
        if !(3..=MAX_CELL_SIZE).contains(&cell_size) {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("must be between 3 and {MAX_CELL_SIZE} pixels"),
            ));
        }
        Ok(Self {
            cell_size,
            palette: Palette::default(),
        })
    }

    /// Replace the palette
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Edge length of a cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Canvas size in pixels for a grid of the given dimensions, saturating
    pub const fn canvas_size(&self, rows: usize, columns: usize) -> (u32, u32) {
        (
            (columns as u32)
                .saturating_mul(self.cell_size)
                .saturating_add(WALL_THICKNESS),
            (rows as u32)
                .saturating_mul(self.cell_size)
                .saturating_add(WALL_THICKNESS),
        )
    }

    /// Render one frame from cell views of a `rows` x `columns` grid
    pub fn render(
        &self,
        rows: usize,
        columns: usize,
        cells: impl IntoIterator<Item = CellView>,
    ) -> RgbaImage {
        let (width, height) = self.canvas_size(rows, columns);
        let mut img = RgbaImage::from_pixel(width, height, Rgba(self.palette.background));

        // Walls go on top of every interior, including the neighbors' insets
        let views: Vec<CellView> = cells.into_iter().collect();
        for view in &views {
            self.fill_cell(&mut img, view);
        }
        for view in &views {
            self.draw_walls(&mut img, view);
        }

        img
    }

    /// Canvas size, rejecting grids whose canvas would exceed `MAX_CANVAS_SIDE`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either side of the canvas is too large
    pub fn checked_canvas_size(&self, rows: usize, columns: usize) -> Result<(u32, u32)> {
        let side = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|cells| cells.checked_mul(self.cell_size))
                .and_then(|pixels| pixels.checked_add(WALL_THICKNESS))
                .filter(|&pixels| pixels <= MAX_CANVAS_SIDE)
        };
        match (side(columns), side(rows)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(invalid_parameter(
                "canvas",
                &format!("{rows}x{columns} cells at {}px", self.cell_size),
                &format!("canvas sides must not exceed {MAX_CANVAS_SIDE} pixels"),
            )),
        }
    }

    fn fill_cell(&self, img: &mut RgbaImage, view: &CellView) {
        let size = self.cell_size;
        let x = pixel_offset(view.column, size);
        let y = pixel_offset(view.row, size);

        let fill = if view.is_current {
            self.palette.current
        } else if view.is_on_backtrack_path {
            self.palette.backtrack
        } else if view.visited {
            self.palette.visited
        } else {
            self.palette.unvisited
        };
        fill_rect(img, x.saturating_add(1), y.saturating_add(1), size - 2, size - 2, fill);
    }

    fn draw_walls(&self, img: &mut RgbaImage, view: &CellView) {
        let size = self.cell_size;
        let x = pixel_offset(view.column, size);
        let y = pixel_offset(view.row, size);

        let wall = self.palette.wall;
        let walls = view.walls;
        if walls.top {
            fill_rect(img, x, y, size + WALL_THICKNESS, WALL_THICKNESS, wall);
        }
        if walls.bottom {
            fill_rect(img, x, y.saturating_add(size), size + WALL_THICKNESS, WALL_THICKNESS, wall);
        }
        if walls.left {
            fill_rect(img, x, y, WALL_THICKNESS, size + WALL_THICKNESS, wall);
        }
        if walls.right {
            fill_rect(img, x.saturating_add(size), y, WALL_THICKNESS, size + WALL_THICKNESS, wall);
        }
    }
}

// Saturates so out-of-canvas cells clip instead of overflowing
fn pixel_offset(index: usize, cell_size: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(cell_size)
}

// Clips silently at the canvas edge
fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: [u8; 4]) {
    let x_end = x.saturating_add(width).min(img.width());
    let y_end = y.saturating_add(height).min(img.height());

    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, Rgba(color));
        }
    }
}
