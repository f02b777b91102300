//! Error types for grid construction, generation and output

use std::fmt;
use std::path::PathBuf;

use crate::spatial::cell::Coordinate;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Grid dimension is zero or too large to allocate
    InvalidDimension {
        /// Which dimension was rejected (`rows` or `columns`)
        parameter: &'static str,
        /// Provided value
        value: usize,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coordinate lies outside the grid
    OutOfBounds {
        /// The offending coordinate
        coordinate: Coordinate,
        /// Number of rows in the grid
        rows: usize,
        /// Number of columns in the grid
        columns: usize,
    },

    /// Wall removal requested between cells that do not share a wall
    ///
    /// Signals a caller bug rather than a recoverable condition.
    NotAdjacent {
        /// First cell of the pair
        first: Coordinate,
        /// Second cell of the pair
        second: Coordinate,
    },

    /// A finished maze failed the spanning-tree check
    ImperfectMaze {
        /// Seed of the offending run
        seed: u64,
        /// Cleared interior walls
        passages: usize,
        /// Cells reachable from the origin
        reachable: usize,
        /// Cells in the grid
        cells: usize,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid grid dimension '{parameter}' = {value}: {reason}")
            }
            Self::OutOfBounds {
                coordinate,
                rows,
                columns,
            } => {
                write!(
                    f,
                    "Coordinate {coordinate} is outside the {rows}x{columns} grid"
                )
            }
            Self::NotAdjacent { first, second } => {
                write!(f, "Cells {first} and {second} are not adjacent")
            }
            Self::ImperfectMaze {
                seed,
                passages,
                reachable,
                cells,
            } => {
                write!(
                    f,
                    "Maze for seed {seed} is not perfect: {passages} passages, {reachable}/{cells} cells reachable"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
