//! Boards, their labels, and the id-indexed collection of a grid's boards.

use std::collections::HashMap;

use super::error::GridError;
use super::grid::GridSpec;
use crate::color::Rgb;

/// Grid position of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Spreadsheet-style column letters: 0 → "A", 25 → "Z", 26 → "AA".
pub fn column_letters(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col as u64 + 1;
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push(b'A' + rem);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Assembly label of the board at `(row, col)`: column letter, then the
/// 1-based row number.
///
/// ```
/// use mosaic_core::board_label;
///
/// assert_eq!(board_label(0, 0), "A1");
/// assert_eq!(board_label(0, 1), "B1");
/// assert_eq!(board_label(1, 0), "A2");
/// ```
pub fn board_label(row: u32, col: u32) -> String {
    format!("{}{}", column_letters(col), row as u64 + 1)
}

/// One physical build unit: a square grid of cells.
///
/// Cells are stored row-major; `(x, y)` is column then row within the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    id: String,
    position: Position,
    size: u32,
    pixels: Vec<Rgb>,
}

impl Board {
    /// Create a board from row-major cells.
    ///
    /// # Errors
    ///
    /// [`GridError::BoardSizeMismatch`] if `pixels` isn't `size * size` long.
    pub fn new(position: Position, size: u32, pixels: Vec<Rgb>) -> Result<Self, GridError> {
        let id = board_label(position.row, position.col);
        if pixels.len() != size as usize * size as usize {
            return Err(GridError::BoardSizeMismatch {
                id,
                expected: size,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            id,
            position,
            size,
            pixels,
        })
    }

    /// `pixels` must hold exactly `size * size` cells.
    pub(crate) fn from_cells(position: Position, size: u32, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), size as usize * size as usize);
        Self {
            id: board_label(position.row, position.col),
            position,
            size,
            pixels,
        }
    }

    /// A board with every cell set to `color`.
    pub fn filled(position: Position, size: u32, color: Rgb) -> Self {
        Self {
            id: board_label(position.row, position.col),
            position,
            size,
            pixels: vec![color; size as usize * size as usize],
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Edge length in cells.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Cell color at `(x, y)`, or `None` outside the board.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.size && y < self.size {
            Some(self.pixels[(y * self.size + x) as usize])
        } else {
            None
        }
    }

    /// Overwrite a cell, returning its previous color. `None` outside the board.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> Option<Rgb> {
        if x < self.size && y < self.size {
            let cell = &mut self.pixels[(y * self.size + x) as usize];
            Some(std::mem::replace(cell, color))
        } else {
            None
        }
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.size as usize)
    }
}

/// All boards of a grid, in row-major grid order, addressable by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSet {
    grid: GridSpec,
    boards: Vec<Board>,
    by_id: HashMap<String, usize>,
}

impl BoardSet {
    /// Collect boards into a set, inferring the grid from their positions.
    ///
    /// Boards may arrive in any order; they are stored in grid order.
    ///
    /// # Errors
    ///
    /// Fails if the boards don't tile a complete rectangular grid of
    /// equally-sized boards.
    pub fn from_boards(mut boards: Vec<Board>) -> Result<Self, GridError> {
        let first = boards.first().ok_or(GridError::EmptyGrid)?;
        let tile_size = first.size();
        let extent = |key: fn(&Position) -> u32| -> Result<u32, GridError> {
            let far = boards
                .iter()
                .map(|b| b.position)
                .max_by_key(|p| key(p))
                .unwrap_or(first.position);
            key(&far)
                .checked_add(1)
                .ok_or(GridError::PositionOutOfRange {
                    row: far.row,
                    col: far.col,
                })
        };
        let cols = extent(|p| p.col)?;
        let rows = extent(|p| p.row)?;
        let grid = GridSpec::new(cols, rows, tile_size)?;

        if boards.len() != grid.board_count() {
            return Err(GridError::BoardCountMismatch {
                expected: grid.board_count(),
                actual: boards.len(),
            });
        }
        if let Some(b) = boards.iter().find(|b| b.size() != tile_size) {
            return Err(GridError::BoardSizeMismatch {
                id: b.id.clone(),
                expected: tile_size,
                actual: b.pixels.len(),
            });
        }

        boards.sort_by_key(|b| (b.position.row, b.position.col));
        if let Some(pair) = boards.windows(2).find(|w| w[0].position == w[1].position) {
            return Err(GridError::DuplicateBoard {
                row: pair[0].position.row,
                col: pair[0].position.col,
            });
        }

        Ok(Self::from_sorted(grid, boards))
    }

    /// `boards` must already be in row-major grid order.
    pub(crate) fn from_sorted(grid: GridSpec, boards: Vec<Board>) -> Self {
        debug_assert_eq!(boards.len(), grid.board_count());
        let by_id = boards
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect();
        Self {
            grid,
            boards,
            by_id,
        }
    }

    #[inline]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    pub fn as_slice(&self) -> &[Board] {
        &self.boards
    }

    pub fn get(&self, id: &str) -> Option<&Board> {
        self.by_id.get(id).map(|&i| &self.boards[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Board> {
        self.by_id.get(id).map(|&i| &mut self.boards[i])
    }

    /// Board at a grid position.
    pub fn at(&self, row: u32, col: u32) -> Option<&Board> {
        if row < self.grid.rows && col < self.grid.cols {
            self.boards.get((row * self.grid.cols + col) as usize)
        } else {
            None
        }
    }

    /// Mutable board at a grid position.
    pub fn at_mut(&mut self, row: u32, col: u32) -> Option<&mut Board> {
        if row < self.grid.rows && col < self.grid.cols {
            self.boards.get_mut((row * self.grid.cols + col) as usize)
        } else {
            None
        }
    }
}
