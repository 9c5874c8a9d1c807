//! Screen ↔ canvas mapping and board hit-testing.
//!
//! The canvas lays boards out in grid order, `cell_size` canvas units per
//! cell with `board_gap` units between neighbouring boards. The view maps a
//! screen point to the canvas as `(screen - pan) / zoom`.

use crate::partition::GridSpec;

/// A point in screen or canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A cell addressed by board grid position and in-board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
    pub x: u8,
    pub y: u8,
}

/// Inclusive bounds on the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.25, max: 8.0 }
    }
}

impl ZoomLimits {
    #[inline]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

/// Pan offset and zoom factor of the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    #[inline]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.zoom,
            (screen.y - self.pan_y) / self.zoom,
        )
    }

    /// Shift the view by a screen-space delta.
    #[inline]
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Multiply zoom by `factor`, keeping the canvas point under `anchor` in
    /// place. Returns `false` if nothing changed.
    ///
    /// Non-finite or non-positive factors are ignored.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64, limits: ZoomLimits) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let next = limits.clamp(self.zoom * factor);
        if (next - self.zoom).abs() <= f64::EPSILON {
            return false;
        }
        let ratio = next / self.zoom;
        self.pan_x = anchor.x - (anchor.x - self.pan_x) * ratio;
        self.pan_y = anchor.y - (anchor.y - self.pan_y) * ratio;
        self.zoom = next;
        true
    }
}

/// Canvas geometry of the board grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub cell_size: f64,
    pub board_gap: f64,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            cell_size: 16.0,
            board_gap: 8.0,
        }
    }
}

impl BoardLayout {
    /// Edge length of one board in canvas units.
    #[inline]
    pub fn board_extent(&self, grid: &GridSpec) -> f64 {
        self.cell_size * grid.tile_size as f64
    }

    #[inline]
    fn stride(&self, grid: &GridSpec) -> f64 {
        self.board_extent(grid) + self.board_gap
    }

    /// Cell under a canvas point. Gaps, negative coordinates and points
    /// beyond the grid miss.
    pub fn hit_test(&self, grid: &GridSpec, canvas: Point) -> Option<CellRef> {
        let (col, x) = self.locate(grid, canvas.x, grid.cols)?;
        let (row, y) = self.locate(grid, canvas.y, grid.rows)?;
        Some(CellRef { row, col, x, y })
    }

    fn locate(&self, grid: &GridSpec, v: f64, boards: u32) -> Option<(u32, u8)> {
        if !v.is_finite() || v < 0.0 || self.cell_size <= 0.0 {
            return None;
        }
        let stride = self.stride(grid);
        let board = (v / stride).floor();
        if board >= boards as f64 {
            return None;
        }
        let offset = v - board * stride;
        if offset >= self.board_extent(grid) {
            return None;
        }
        let last = grid.tile_size - 1;
        let cell = ((offset / self.cell_size).floor() as u32).min(last);
        Some((board as u32, cell as u8))
    }
}
