//! PNG export of a maze in its current state

use crate::algorithm::generator::MazeGenerator;
use crate::io::error::{MazeError, Result};
use crate::io::render::MazeRenderer;

/// Render the generator's grid and save it as a PNG image
///
/// Finished mazes are drawn without the current-cell highlight. Mid-run
/// exports show the current cell and the pending backtrack path.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas for this grid and cell size would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_png<R>(
    generator: &MazeGenerator<R>,
    renderer: &MazeRenderer,
    output_path: &str,
) -> Result<()> {
    let grid = generator.grid();
    renderer.checked_canvas_size(grid.rows(), grid.columns())?;

    let img = if generator.is_complete() {
        let cells = generator.cells().map(|mut view| {
            view.is_current = false;
            view
        });
        renderer.render(grid.rows(), grid.columns(), cells)
    } else {
        renderer.render(grid.rows(), grid.columns(), generator.cells())
    };

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
