//! Input/output operations around the generator
//!
//! Everything here sits outside the carving core: error types, configuration
//! constants, rendering, image and animation export, progress display and the
//! command-line driver.

/// Command-line parsing and the step-driving loop
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of rendered mazes
pub mod image;
/// Terminal progress display
pub mod progress;
/// Raster rendering of cell views
pub mod render;
/// Step capture and GIF export
pub mod visualization;
