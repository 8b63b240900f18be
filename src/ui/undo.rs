//! Undo/redo functionality for table moves made in the editor.

use crate::constants::MAX_UNDO_HISTORY;
use crate::types::{Layout, ShapeId};
use std::collections::VecDeque;

/// A reversible edit made in the editor view.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoAction {
    /// A table was dropped somewhere else
    TableMoved {
        /// The moved table
        table_id: ShapeId,
        /// Anchor before the move
        old_position: (f32, f32),
        /// Anchor after the move
        new_position: (f32, f32),
    },
}

/// Bounded undo and redo stacks of [`UndoAction`]s.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    /// Oldest entry at the front
    undo_stack: VecDeque<UndoAction>,
    /// Inverses of undone actions, newest last
    redo_stack: Vec<UndoAction>,
}

impl UndoHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fresh edit. Any redo entries are discarded and the oldest
    /// entry is dropped once the history is full.
    pub fn push_action(&mut self, action: UndoAction) {
        self.redo_stack.clear();
        self.push_undo(action);
    }

    /// Whether there is anything to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether there is anything to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Takes the most recent action off the undo stack.
    pub fn pop_undo(&mut self) -> Option<UndoAction> {
        self.undo_stack.pop_back()
    }

    /// Takes the most recently undone action off the redo stack.
    pub fn pop_redo(&mut self) -> Option<UndoAction> {
        self.redo_stack.pop()
    }

    /// Records the inverse of an undone action.
    pub fn push_redo(&mut self, action: UndoAction) {
        self.redo_stack.push(action);
    }

    /// Pushes onto the undo stack and leaves the redo stack alone.
    pub fn push_undo(&mut self, action: UndoAction) {
        self.undo_stack.push_back(action);
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.pop_front();
        }
    }

    /// Forgets everything, e.g. after a new layout is loaded.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

/// Something an [`UndoAction`] can be played against.
///
/// Both methods return the inverse action, or `None` when the action no
/// longer applies (the table is gone).
pub trait UndoableLayout {
    /// Reverts `action`.
    fn apply_undo(&mut self, action: &UndoAction) -> Option<UndoAction>;
    /// Replays an inverse produced by [`UndoableLayout::apply_undo`].
    fn apply_redo(&mut self, action: &UndoAction) -> Option<UndoAction>;
}

impl UndoableLayout for Layout {
    fn apply_undo(&mut self, action: &UndoAction) -> Option<UndoAction> {
        match action {
            UndoAction::TableMoved {
                table_id,
                old_position,
                new_position,
            } => {
                self.move_table(table_id, *old_position)?;
                Some(UndoAction::TableMoved {
                    table_id: table_id.clone(),
                    old_position: *new_position,
                    new_position: *old_position,
                })
            }
        }
    }

    fn apply_redo(&mut self, action: &UndoAction) -> Option<UndoAction> {
        // The redo stack holds inverses, so replaying one is another undo.
        self.apply_undo(action)
    }
}
