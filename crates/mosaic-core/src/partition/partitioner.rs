//! Slicing a quantized raster into boards, and stitching boards back.

use super::board::{Board, BoardSet, Position};
use super::grid::GridSpec;
use crate::color::Rgb;
use crate::quantize::QuantizedRaster;

/// Color of board cells that fall outside the source raster.
pub const FILL_COLOR: Rgb = Rgb::WHITE;

/// Cut `raster` into `grid.cols × grid.rows` boards of `grid.tile_size` cells.
///
/// The board at `(row, col)` covers raster pixels starting at
/// `(col * tile_size, row * tile_size)`. Cells beyond the raster's extent
/// are [`FILL_COLOR`].
pub fn partition(raster: &QuantizedRaster, grid: &GridSpec) -> BoardSet {
    let n = grid.tile_size;
    let mut boards = Vec::with_capacity(grid.board_count());

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let mut pixels = Vec::with_capacity(n as usize * n as usize);
            for y in 0..n {
                for x in 0..n {
                    let px = raster
                        .get(col * n + x, row * n + y)
                        .unwrap_or(FILL_COLOR);
                    pixels.push(px);
                }
            }
            boards.push(Board::from_cells(Position::new(row, col), n, pixels));
        }
    }

    BoardSet::from_sorted(*grid, boards)
}

/// Stitch boards back into a raster covering the full grid.
pub fn assemble(boards: &BoardSet) -> QuantizedRaster {
    let grid = boards.grid();
    let n = grid.tile_size;
    let width = grid.width();
    let mut pixels = vec![FILL_COLOR; width as usize * grid.height() as usize];

    for board in boards.iter() {
        let Position { row, col } = board.position();
        for (y, cells) in board.rows().enumerate() {
            let start = ((row * n + y as u32) * width + col * n) as usize;
            pixels[start..start + n as usize].copy_from_slice(cells);
        }
    }

    QuantizedRaster::from_parts(width, grid.height(), pixels)
}
