//! Error type for grid resolution and board set validation

use std::fmt;

/// Error type for board grid problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Board count is neither a known preset nor a positive integer
    InvalidBoardCount(String),
    /// Grid has zero columns or rows
    EmptyGrid,
    /// Tile size is zero or too large for 8-bit cell coordinates
    InvalidTileSize(u32),
    /// Number of boards doesn't fill the grid
    BoardCountMismatch { expected: usize, actual: usize },
    /// Two boards claim the same grid position
    DuplicateBoard { row: u32, col: u32 },
    /// A board position is too large to size a grid from
    PositionOutOfRange { row: u32, col: u32 },
    /// A board's pixel grid has the wrong size
    BoardSizeMismatch {
        /// Label of the offending board
        id: String,
        expected: u32,
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidBoardCount(value) => {
                write!(f, "invalid board count '{}'", value)
            }
            GridError::EmptyGrid => write!(f, "grid must have at least one row and column"),
            GridError::InvalidTileSize(size) => {
                write!(f, "tile size {} out of range (1..=256)", size)
            }
            GridError::BoardCountMismatch { expected, actual } => write!(
                f,
                "grid needs {} boards but {} were supplied",
                expected, actual
            ),
            GridError::DuplicateBoard { row, col } => {
                write!(f, "more than one board at row {} column {}", row, col)
            }
            GridError::PositionOutOfRange { row, col } => {
                write!(f, "board position row {} column {} is out of range", row, col)
            }
            GridError::BoardSizeMismatch {
                id,
                expected,
                actual,
            } => write!(
                f,
                "board {} should be {}x{} but has {} cells",
                id, expected, expected, actual
            ),
        }
    }
}

impl std::error::Error for GridError {}
