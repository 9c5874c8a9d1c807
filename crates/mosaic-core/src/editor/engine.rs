//! The per-session editing state machine.

use std::sync::Arc;

use super::history::{EditBatch, PixelChange, UndoHistory};
use super::transform::{BoardLayout, CellRef, Point, ViewTransform, ZoomLimits};
use crate::color::Rgb;
use crate::output::MosaicResult;
use crate::palette::Palette;
use crate::partition::{board_label, BoardSet};

/// Externally visible editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorState {
    Idle,
    Painting,
    Panning,
}

impl EditorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorState::Idle => "idle",
            EditorState::Painting => "painting",
            EditorState::Panning => "panning",
        }
    }
}

/// View geometry and zoom bounds of an editor session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EditorOptions {
    pub layout: BoardLayout,
    pub zoom_limits: ZoomLimits,
}

#[derive(Debug)]
enum Gesture {
    Idle,
    Painting {
        color: Rgb,
        batch: EditBatch,
        last: CellRef,
    },
    Panning {
        last: Point,
    },
}

/// Live boards of one mosaic plus their edit history and view.
///
/// The session owns the boards exclusively. Every paint gesture becomes one
/// undoable batch; pointer positions are screen coordinates resolved
/// through the current [`ViewTransform`]. Pointer events that land outside
/// every board are ignored.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use mosaic_core::{EditorSession, GridSpec, MosaicBuilder, Palette, Point, Rgb, SourceRaster};
///
/// let palette = Palette::from_hex(&[("K", "#000000"), ("W", "#FFFFFF")]).unwrap();
/// let builder = MosaicBuilder::new(palette.clone()).tile_size(2);
/// let raster = SourceRaster::filled(2, 2, Rgb::WHITE).unwrap();
/// let mosaic = builder.build(&raster, &GridSpec::new(1, 1, 2).unwrap()).unwrap();
///
/// let mut session = EditorSession::new(mosaic, Arc::new(palette));
/// session.begin_paint(Point::new(1.0, 1.0), Rgb::BLACK);
/// session.end_paint();
/// assert!(session.can_undo());
///
/// session.undo();
/// assert_eq!(session.boards().get("A1").unwrap().get(0, 0), Some(Rgb::WHITE));
/// ```
#[derive(Debug)]
pub struct EditorSession {
    boards: BoardSet,
    palette: Arc<Palette>,
    history: UndoHistory,
    view: ViewTransform,
    options: EditorOptions,
    gesture: Gesture,
}

impl EditorSession {
    /// Start a session on a pipeline result with default options.
    pub fn new(mosaic: MosaicResult, palette: Arc<Palette>) -> Self {
        Self::with_options(mosaic, palette, EditorOptions::default())
    }

    pub fn with_options(mosaic: MosaicResult, palette: Arc<Palette>, options: EditorOptions) -> Self {
        Self {
            boards: mosaic.into_boards(),
            palette,
            history: UndoHistory::new(),
            view: ViewTransform::default(),
            options,
            gesture: Gesture::Idle,
        }
    }

    pub fn state(&self) -> EditorState {
        match self.gesture {
            Gesture::Idle => EditorState::Idle,
            Gesture::Painting { .. } => EditorState::Painting,
            Gesture::Panning { .. } => EditorState::Panning,
        }
    }

    #[inline]
    pub fn boards(&self) -> &BoardSet {
        &self.boards
    }

    #[inline]
    pub fn view(&self) -> ViewTransform {
        self.view
    }

    #[inline]
    pub fn options(&self) -> EditorOptions {
        self.options
    }

    #[inline]
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Cell under a screen point, if any.
    pub fn cell_at(&self, screen: Point) -> Option<CellRef> {
        let canvas = self.view.screen_to_canvas(screen);
        self.options.layout.hit_test(&self.boards.grid(), canvas)
    }

    /// Start a stroke. Returns `true` if the session entered `Painting`.
    ///
    /// Ignored unless idle; a miss leaves the session idle.
    pub fn begin_paint(&mut self, screen: Point, color: Rgb) -> bool {
        if !matches!(self.gesture, Gesture::Idle) {
            return false;
        }
        let Some(cell) = self.cell_at(screen) else {
            return false;
        };
        let mut batch = EditBatch::new();
        self.paint_cell(&mut batch, cell, color);
        self.gesture = Gesture::Painting {
            color,
            batch,
            last: cell,
        };
        true
    }

    /// Extend the current stroke. Returns `true` if a cell changed.
    pub fn continue_paint(&mut self, screen: Point) -> bool {
        if !matches!(self.gesture, Gesture::Painting { .. }) {
            return false;
        }
        let Some(cell) = self.cell_at(screen) else {
            return false;
        };
        let Gesture::Painting {
            color,
            mut batch,
            last,
        } = std::mem::replace(&mut self.gesture, Gesture::Idle)
        else {
            return false;
        };

        let changed = cell != last && self.paint_cell(&mut batch, cell, color);
        self.gesture = Gesture::Painting {
            color,
            batch,
            last: cell,
        };
        changed
    }

    /// Finish the stroke and return to idle. Returns the number of changes
    /// committed to history (0 when nothing changed or no stroke was active).
    pub fn end_paint(&mut self) -> usize {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Painting { batch, .. } => {
                let n = batch.len();
                if self.history.commit(batch) {
                    n
                } else {
                    0
                }
            }
            other => {
                self.gesture = other;
                0
            }
        }
    }

    /// Start dragging the view. Only valid from idle.
    pub fn begin_pan(&mut self, screen: Point) -> bool {
        if !matches!(self.gesture, Gesture::Idle) {
            return false;
        }
        self.gesture = Gesture::Panning { last: screen };
        true
    }

    /// Move the view by the pointer's travel since the last pan event.
    pub fn continue_pan(&mut self, screen: Point) -> bool {
        let Gesture::Panning { last } = &mut self.gesture else {
            return false;
        };
        self.view.pan_by(screen.x - last.x, screen.y - last.y);
        *last = screen;
        true
    }

    pub fn end_pan(&mut self) -> bool {
        if matches!(self.gesture, Gesture::Panning { .. }) {
            self.gesture = Gesture::Idle;
            true
        } else {
            false
        }
    }

    /// Zoom by `factor` around a screen point. Allowed in any state.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> bool {
        self.view.zoom_at(anchor, factor, self.options.zoom_limits)
    }

    /// Revert the newest batch. Only allowed when idle; returns `false`
    /// during a stroke or pan and leaves both stacks untouched.
    pub fn undo(&mut self) -> bool {
        if !matches!(self.gesture, Gesture::Idle) {
            return false;
        }
        self.history.undo(&mut self.boards)
    }

    /// Re-apply the most recently undone batch. Only allowed when idle.
    pub fn redo(&mut self) -> bool {
        if !matches!(self.gesture, Gesture::Idle) {
            return false;
        }
        self.history.redo(&mut self.boards)
    }

    /// A fresh result from the live boards.
    pub fn snapshot(&self) -> MosaicResult {
        MosaicResult::from_boards(self.boards.clone(), &self.palette)
    }

    fn paint_cell(&mut self, batch: &mut EditBatch, cell: CellRef, color: Rgb) -> bool {
        let board_id = board_label(cell.row, cell.col);
        if batch.contains(&board_id, cell.x, cell.y) {
            return false;
        }
        let Some(board) = self.boards.at_mut(cell.row, cell.col) else {
            return false;
        };
        let Some(old_color) = board.get(cell.x as u32, cell.y as u32) else {
            return false;
        };
        if old_color == color {
            return false;
        }
        board.set(cell.x as u32, cell.y as u32, color);
        batch.record(PixelChange {
            board_id,
            x: cell.x,
            y: cell.y,
            old_color,
            new_color: color,
        })
    }
}
