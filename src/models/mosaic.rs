//! Wire shapes of mosaics, boards and palette colors.
//!
//! Field names are camelCase and colors are uppercase `#RRGGBB` strings.

use mosaic_core::{
    board_label, Board, BoardSet, GridError, MosaicResult, NamedColor, ParseColorError, Position,
    Rgb,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A palette entry as exposed by `GET /api/palette`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaletteColor {
    /// Display name, e.g. "Dark Bluish Gray"
    pub name: String,
    /// Uppercase `#RRGGBB`
    pub hex: String,
}

impl From<&NamedColor> for PaletteColor {
    fn from(color: &NamedColor) -> Self {
        Self {
            name: color.name.clone(),
            hex: color.hex(),
        }
    }
}

/// Number of cells using one color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColorUsageData {
    pub name: String,
    pub hex: String,
    pub count: u64,
}

/// Grid position of a board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoardPosition {
    pub row: u32,
    pub col: u32,
}

/// One board: `pixels[y][x]` hex colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BoardData {
    /// Assembly label, e.g. "B2"
    pub id: String,
    pub position: BoardPosition,
    pub pixels: Vec<Vec<String>>,
}

/// A complete mosaic as sent to and from clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MosaicData {
    /// Quantized image as a `data:image/png;base64,...` URI
    pub pixelated_image_data: String,
    /// Color usage in first-seen order
    pub color_map: Vec<ColorUsageData>,
    /// Boards in grid order
    pub boards: Vec<BoardData>,
    /// Cell count of the whole grid
    pub total_tiles: u64,
}

/// A client-supplied mosaic that can't be turned back into boards
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("board {id}: invalid color '{value}': {source}")]
    InvalidColor {
        id: String,
        value: String,
        #[source]
        source: ParseColorError,
    },

    #[error("board {id}: pixel rows must form a square grid")]
    NotSquare { id: String },

    #[error("board {id} is at the position of {expected}")]
    LabelMismatch { id: String, expected: String },

    #[error("boards are {found}x{found} cells but this server uses {expected}x{expected}")]
    TileSizeMismatch { expected: u32, found: u32 },

    #[error("{0}")]
    Grid(#[from] GridError),
}

impl BoardData {
    pub fn from_board(board: &Board) -> Self {
        let Position { row, col } = board.position();
        Self {
            id: board.id().to_string(),
            position: BoardPosition { row, col },
            pixels: board
                .rows()
                .map(|cells| cells.iter().map(|c| c.to_hex()).collect())
                .collect(),
        }
    }

    /// Parse the hex grid back into a board
    pub fn to_board(&self) -> Result<Board, WireError> {
        let BoardPosition { row, col } = self.position;
        let expected = board_label(row, col);
        if self.id != expected {
            return Err(WireError::LabelMismatch {
                id: self.id.clone(),
                expected,
            });
        }

        let size = self.pixels.len();
        if size == 0 || self.pixels.iter().any(|r| r.len() != size) {
            return Err(WireError::NotSquare {
                id: self.id.clone(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for value in self.pixels.iter().flatten() {
            let rgb = value
                .parse::<Rgb>()
                .map_err(|source| WireError::InvalidColor {
                    id: self.id.clone(),
                    value: value.clone(),
                    source,
                })?;
            cells.push(rgb);
        }

        let size = u32::try_from(size).map_err(|_| WireError::NotSquare {
            id: self.id.clone(),
        })?;
        Ok(Board::new(Position::new(row, col), size, cells)?)
    }
}

impl MosaicData {
    /// Wire form of a result; `image_data` is the encoded quantized raster.
    pub fn from_result(result: &MosaicResult, image_data: String) -> Self {
        Self {
            pixelated_image_data: image_data,
            color_map: result
                .color_usage()
                .iter()
                .map(|c| ColorUsageData {
                    name: c.color.name.clone(),
                    hex: c.color.hex(),
                    count: c.count,
                })
                .collect(),
            boards: result.boards().iter().map(BoardData::from_board).collect(),
            total_tiles: result.total_cells(),
        }
    }

    /// Rebuild the board set. The image and usage fields are ignored; they
    /// are recomputed from the boards.
    pub fn board_set(&self) -> Result<BoardSet, WireError> {
        let boards = self
            .boards
            .iter()
            .map(BoardData::to_board)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BoardSet::from_boards(boards)?)
    }
}
