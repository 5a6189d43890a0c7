//! Error taxonomy for loading and placing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::placement::PlacementBounds;
use crate::types::Position;

/// Malformed grid source. Fatal at load time.
///
/// Line and column numbers are 1-based so they match what an editor shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("grid source contains no rows")]
    Empty,
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: invalid cell value {value:?} (expected 0 or 1)")]
    InvalidCell {
        line: usize,
        column: usize,
        value: String,
    },
}

/// Random or explicit placement of the player/goal failed. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("placement bounds {0} do not intersect the grid")]
    EmptyBounds(PlacementBounds),
    #[error("no corridor cell found in {bounds} after {attempts} attempts")]
    NoCorridor {
        bounds: PlacementBounds,
        attempts: u32,
    },
    #[error("cell {0} is not an open corridor")]
    NotCorridor(Position),
    #[error("player and goal must be distinct, both requested at {0}")]
    SameCell(Position),
}

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed maze file {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error(transparent)]
    Placement(#[from] PlacementError),
}
