//! Undo and redo history for a game session.

use crate::game_state::game_state::GameState;

/// Undo/redo stacks of whole-state snapshots.
///
/// A state-changing command records the state it is about to replace with
/// `record`, which also invalidates the redo stack.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<GameState>,
    redo_stack: Vec<GameState>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, before: GameState) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// Swaps `current` for the previous snapshot.
    pub fn undo(&mut self, current: GameState) -> Option<GameState> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Swaps `current` for the next snapshot.
    pub fn redo(&mut self, current: GameState) -> Option<GameState> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
