//! Board grid dimensions and board-count presets.

use super::error::GridError;
use crate::quantize::RasterError;

/// Edge length of a board in cells, unless configured otherwise.
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Largest tile size whose cell coordinates still fit in a `u8`.
pub const MAX_TILE_SIZE: u32 = 256;

/// Named board layouts as `(name, cols, rows)`.
pub const GRID_PRESETS: [(&str, u32, u32); 5] = [
    ("1x1", 1, 1),
    ("2x2", 2, 2),
    ("3x2", 3, 2),
    ("3x3", 3, 3),
    ("4x2", 4, 2),
];

/// Columns and rows of boards, and the edge length of each board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    pub cols: u32,
    pub rows: u32,
    pub tile_size: u32,
}

impl GridSpec {
    pub fn new(cols: u32, rows: u32, tile_size: u32) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid);
        }
        if tile_size == 0 || tile_size > MAX_TILE_SIZE {
            return Err(GridError::InvalidTileSize(tile_size));
        }
        Ok(Self {
            cols,
            rows,
            tile_size,
        })
    }

    /// Resolve a board-count value into a grid.
    ///
    /// Preset names map to their explicit layout. Any other positive
    /// integer `n` becomes a square grid of `ceil(sqrt(n))` boards per side.
    ///
    /// ```
    /// use mosaic_core::GridSpec;
    ///
    /// let grid = GridSpec::from_board_count("3x2", 32).unwrap();
    /// assert_eq!((grid.cols, grid.rows), (3, 2));
    ///
    /// let grid = GridSpec::from_board_count("5", 32).unwrap();
    /// assert_eq!((grid.cols, grid.rows), (3, 3));
    /// ```
    pub fn from_board_count(value: &str, tile_size: u32) -> Result<Self, GridError> {
        let value = value.trim();
        if let Some(&(_, cols, rows)) = GRID_PRESETS
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(value))
        {
            return Self::new(cols, rows, tile_size);
        }

        let count: u32 = value
            .parse()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| GridError::InvalidBoardCount(value.to_string()))?;
        let side = ceil_sqrt(count);
        Self::new(side, side, tile_size)
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.cols * self.tile_size
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.rows * self.tile_size
    }

    #[inline]
    pub fn board_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Total cells across all boards.
    #[inline]
    pub fn total_cells(&self) -> u64 {
        self.board_count() as u64 * self.tile_size as u64 * self.tile_size as u64
    }

    /// Check that a raster can be partitioned on this grid.
    ///
    /// The raster must be exactly `cols*tile_size x rows*tile_size`; resizing
    /// happens before the pipeline.
    pub fn check_raster(&self, width: u32, height: u32) -> Result<(), RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimension);
        }
        if width % self.tile_size != 0 || height % self.tile_size != 0 {
            return Err(RasterError::NotTileAligned {
                width,
                height,
                tile_size: self.tile_size,
            });
        }
        if width != self.width() || height != self.height() {
            return Err(RasterError::GridMismatch {
                width,
                height,
                grid_width: self.width(),
                grid_height: self.height(),
            });
        }
        Ok(())
    }
}

fn ceil_sqrt(n: u32) -> u32 {
    let mut side = (n as f64).sqrt() as u32;
    while (side as u64) * (side as u64) < n as u64 {
        side += 1;
    }
    side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let cases = [
            ("1x1", 1, 1),
            ("2x2", 2, 2),
            ("3x2", 3, 2),
            ("3x3", 3, 3),
            ("4x2", 4, 2),
        ];
        for (name, cols, rows) in cases {
            let grid = GridSpec::from_board_count(name, 32).unwrap();
            assert_eq!((grid.cols, grid.rows), (cols, rows), "preset {name}");
        }
    }

    #[test]
    fn test_count_fallback_is_square() {
        let expect = [(1, 1), (2, 2), (4, 2), (5, 3), (9, 3), (10, 4), (16, 4), (17, 5)];
        for (count, side) in expect {
            let grid = GridSpec::from_board_count(&count.to_string(), 16).unwrap();
            assert_eq!((grid.cols, grid.rows), (side, side), "count {count}");
        }
    }

    #[test]
    fn test_invalid_counts() {
        for bad in ["0", "-3", "abc", "2x5", ""] {
            assert_eq!(
                GridSpec::from_board_count(bad, 32),
                Err(GridError::InvalidBoardCount(bad.to_string())),
                "value {bad:?}"
            );
        }
    }

    #[test]
    fn test_tile_size_bounds() {
        assert_eq!(GridSpec::new(1, 1, 0), Err(GridError::InvalidTileSize(0)));
        assert_eq!(
            GridSpec::new(1, 1, 257),
            Err(GridError::InvalidTileSize(257))
        );
        assert!(GridSpec::new(1, 1, 256).is_ok());
        assert_eq!(GridSpec::new(0, 1, 8), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_extent_and_total_cells() {
        let grid = GridSpec::new(3, 2, 32).unwrap();
        assert_eq!(grid.width(), 96);
        assert_eq!(grid.height(), 64);
        assert_eq!(grid.board_count(), 6);
        assert_eq!(grid.total_cells(), 6 * 32 * 32);
    }

    #[test]
    fn test_check_raster() {
        let grid = GridSpec::new(2, 2, 4).unwrap();
        assert!(grid.check_raster(8, 8).is_ok());
        assert_eq!(
            grid.check_raster(6, 8),
            Err(RasterError::NotTileAligned {
                width: 6,
                height: 8,
                tile_size: 4
            })
        );
        assert!(matches!(
            grid.check_raster(12, 8),
            Err(RasterError::GridMismatch { .. })
        ));
        assert_eq!(
            grid.check_raster(4, 8),
            Err(RasterError::GridMismatch {
                width: 4,
                height: 8,
                grid_width: 8,
                grid_height: 8
            })
        );
        assert_eq!(grid.check_raster(0, 8), Err(RasterError::ZeroDimension));
    }
}
