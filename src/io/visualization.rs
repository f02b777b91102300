//! Step capture and GIF generation for maze construction

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::algorithm::generator::{MazeGenerator, StepAction, StepResult};
use crate::algorithm::random::ScriptedSource;
use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::render::MazeRenderer;

/// Captures generation steps for visualization
///
/// Only the step actions are kept during the run. Frames are produced at
/// export time by replaying the recorded carve choices through a fresh
/// generator, so memory stays proportional to the number of steps.
pub struct VisualizationCapture {
    events: Vec<StepAction>,
    completed: bool,
    rows: usize,
    columns: usize,
    renderer: MazeRenderer,
}

impl VisualizationCapture {
    /// Prepare a capture for a `rows` x `columns` run drawn with `renderer`
    pub fn new(rows: usize, columns: usize, renderer: MazeRenderer) -> Self {
        Self {
            events: Vec::with_capacity(rows.saturating_mul(columns).saturating_mul(2)),
            completed: false,
            rows,
            columns,
            renderer,
        }
    }

    /// Records a step if it moved the generator, and notes completion
    pub fn record_step(&mut self, step: &StepResult) {
        if step.moved {
            self.events.push(step.action);
        }
        self.completed |= step.complete;
    }

    /// Whether a completing step has been recorded
    pub const fn is_complete(&self) -> bool {
        self.completed
    }

    /// Returns all recorded step actions
    pub fn events(&self) -> &[StepAction] {
        &self.events
    }

    /// Neighbor indices drawn by every recorded carve, in order
    pub fn carve_choices(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                StepAction::Carved { choice, .. } => Some(*choice),
                _ => None,
            })
            .collect()
    }

    /// Returns the total number of recorded steps
    pub const fn step_count(&self) -> usize {
        self.events.len()
    }

    /// Export the construction as a GIF with automatic frame skipping
    ///
    /// Automatically skips frames if the requested frame rate exceeds viewer capabilities.
    /// For example, if the delay is 5ms (200 FPS) but viewers only support 50ms (20 FPS),
    /// this will keep every 10th step to maintain the apparent animation speed.
    /// The closing frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No steps were captured and the run never completed
    /// - The canvas would be too large
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        // A single-cell run completes without moving
        if self.events.is_empty() && !self.completed {
            return Err(invalid_parameter(
                "visualization",
                &"empty",
                &"No generation steps captured for visualization",
            ));
        }
        self.renderer.checked_canvas_size(self.rows, self.columns)?;

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        if let Some(parent) = Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = File::create(output_path).map_err(|e| MazeError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(BufWriter::new(file));
        let encode = |encoder: &mut GifEncoder<BufWriter<File>>, img: RgbaImage, delay_ms: u32| {
            encoder
                .encode_frame(Frame::from_parts(
                    img,
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay_ms, 1),
                ))
                .map_err(|e| MazeError::ImageExport {
                    path: output_path.into(),
                    source: e,
                })
        };

        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        let mut replay = MazeGenerator::new(
            self.rows,
            self.columns,
            ScriptedSource::new(self.carve_choices()),
        )?;
        encode(&mut encoder, self.frame(&replay), effective_delay_ms)?;

        let mut frame_count = 0;
        for _ in 0..self.events.len() {
            if !replay.advance_step()?.moved {
                break;
            }
            frame_count += 1;

            if frame_count % skip_factor == 0 {
                encode(&mut encoder, self.frame(&replay), effective_delay_ms)?;
            }
        }

        // Settles a run that finished without moving
        if self.completed && !replay.is_complete() {
            replay.advance_step()?;
        }

        if frame_count % skip_factor != 0 {
            encode(&mut encoder, self.frame(&replay), effective_delay_ms)?;
        }

        // Final frame displays longer for better visibility
        encode(
            &mut encoder,
            self.frame(&replay),
            effective_delay_ms.saturating_mul(FINAL_FRAME_HOLD),
        )?;

        Ok(())
    }

    fn frame(&self, replay: &MazeGenerator<ScriptedSource>) -> RgbaImage {
        self.renderer.render(self.rows, self.columns, replay.cells())
    }
}
