//! Error types for grid construction and word placement, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W006) for documentation lookup:
//!
//! - W001: `CoordinateNotFound` (Coordinate outside the grid)
//! - W002: `GridExhausted` (No candidate cell fits the word)
//! - W003: `UnsupportedDirection` (Direction has no placement logic)
//! - W004: `InvalidDirection` (Unrecognized direction name)
//! - W005: `EmptyWord` (Placement requested for an empty word)
//! - W006: `InvalidGridSize` (Grid size of zero)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::PlacementError;
//! use wordsearch::grid::Grid;
//!
//! match Grid::new(0) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "W006");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

use crate::placement::Direction;

/// Everything that can go wrong while building a grid or placing words into it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("coordinate ({x}, {y}) not found in a {size}x{size} grid")]
    CoordinateNotFound { x: usize, y: usize, size: usize },

    #[error("exhausted all candidates: \"{word}\" does not fit anywhere going {direction}")]
    GridExhausted { word: String, direction: Direction },

    #[error("direction '{direction}' is not implemented")]
    UnsupportedDirection { direction: Direction },

    #[error("invalid direction \"{input}\"")]
    InvalidDirection { input: String },

    #[error("cannot place an empty word")]
    EmptyWord,

    #[error("grid size must be positive")]
    InvalidGridSize,
}

impl From<PlacementError> for io::Error {
    fn from(pe: PlacementError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PlacementError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PlacementError::CoordinateNotFound { .. } => "W001",
            PlacementError::GridExhausted { .. } => "W002",
            PlacementError::UnsupportedDirection { .. } => "W003",
            PlacementError::InvalidDirection { .. } => "W004",
            PlacementError::EmptyWord => "W005",
            PlacementError::InvalidGridSize => "W006",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PlacementError::CoordinateNotFound { .. } => "Coordinate outside the grid",
            PlacementError::GridExhausted { .. } => "No candidate cell fits the word",
            PlacementError::UnsupportedDirection { .. } => "Direction has no placement logic",
            PlacementError::InvalidDirection { .. } => "Unrecognized direction name",
            PlacementError::EmptyWord => "Placement requested for an empty word",
            PlacementError::InvalidGridSize => "Grid size of zero",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PlacementError::CoordinateNotFound { .. } => "A cell lookup or write addressed a coordinate outside [0, size) x [0, size). Fit checks treat this as \"does not fit\"; when it surfaces from a write, the word was written without a successful fit check first.",
            PlacementError::GridExhausted { .. } => "Every unoccupied candidate cell was tried as a starting point and none left room for the word without clashing with a different letter already in the grid. Words already placed stay in the grid.",
            PlacementError::UnsupportedDirection { .. } => "Only vertical placement (up and down) is implemented. Left and right are recognized directions but are rejected before any candidate is scanned.",
            PlacementError::InvalidDirection { .. } => "The direction name could not be parsed. Recognized names are up, down, left and right (case-insensitive).",
            PlacementError::EmptyWord => "A placement request must carry at least one character. An empty word has no reference point.",
            PlacementError::InvalidGridSize => "Grids are square with a side length fixed at construction, and that side length must be at least 1.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PlacementError::GridExhausted { .. } => Some("Enlarge the grid, reorder the word list, or try the other vertical direction"),
            PlacementError::UnsupportedDirection { .. } => Some("Use 'up' or 'down'"),
            PlacementError::InvalidDirection { .. } => Some("Expected one of: up, down, left, right"),
            PlacementError::EmptyWord => Some("Remove blank entries from the word list"),
            PlacementError::InvalidGridSize => Some("Example: use a size of 10 for a 10x10 grid"),
            PlacementError::CoordinateNotFound { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
