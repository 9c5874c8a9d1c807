//! Edit batches and the undo/redo history.
//!
//! One paint gesture produces one [`EditBatch`]. Committed batches live on
//! the undo stack of an [`UndoHistory`]; undoing moves a batch to the redo
//! stack and committing a new batch clears it.

use std::collections::HashSet;

use crate::color::Rgb;
use crate::partition::BoardSet;

/// One recorded cell edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelChange {
    pub board_id: String,
    pub x: u8,
    pub y: u8,
    pub old_color: Rgb,
    pub new_color: Rgb,
}

/// The ordered changes of one gesture, at most one per cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    changes: Vec<PixelChange>,
    touched: HashSet<(String, u8, u8)>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a change for this cell is already recorded.
    pub fn contains(&self, board_id: &str, x: u8, y: u8) -> bool {
        self.touched.contains(&(board_id.to_string(), x, y))
    }

    /// Append a change. Returns `false` and drops it if the cell already has
    /// one, so the first recorded `old_color` is kept.
    pub fn record(&mut self, change: PixelChange) -> bool {
        let key = (change.board_id.clone(), change.x, change.y);
        if !self.touched.insert(key) {
            return false;
        }
        self.changes.push(change);
        true
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn changes(&self) -> &[PixelChange] {
        &self.changes
    }

    /// Write every `old_color` back, last change first.
    pub fn revert(&self, boards: &mut BoardSet) {
        for c in self.changes.iter().rev() {
            if let Some(board) = boards.get_mut(&c.board_id) {
                board.set(c.x as u32, c.y as u32, c.old_color);
            }
        }
    }

    /// Write every `new_color` again, in recorded order.
    pub fn reapply(&self, boards: &mut BoardSet) {
        for c in &self.changes {
            if let Some(board) = boards.get_mut(&c.board_id) {
                board.set(c.x as u32, c.y as u32, c.new_color);
            }
        }
    }
}

/// Undo and redo stacks of committed batches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoHistory {
    undo: Vec<EditBatch>,
    redo: Vec<EditBatch>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a finished batch. Empty batches are dropped; anything else
    /// invalidates the redo stack. Returns whether the batch was kept.
    pub fn commit(&mut self, batch: EditBatch) -> bool {
        if batch.is_empty() {
            return false;
        }
        self.undo.push(batch);
        self.redo.clear();
        true
    }

    /// Revert the newest batch on `boards`. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self, boards: &mut BoardSet) -> bool {
        let Some(batch) = self.undo.pop() else {
            return false;
        };
        batch.revert(boards);
        self.redo.push(batch);
        true
    }

    /// Re-apply the most recently undone batch.
    pub fn redo(&mut self, boards: &mut BoardSet) -> bool {
        let Some(batch) = self.redo.pop() else {
            return false;
        };
        batch.reapply(boards);
        self.undo.push(batch);
        true
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
