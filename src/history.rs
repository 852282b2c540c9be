// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;

/// Undo/redo over the active user's transaction list.
///
/// Holds the live list plus two snapshot stacks. A commit pushes the
/// pre-mutation list onto the undo stack and discards the redoable future;
/// undo/redo shuttle whole-list snapshots between the two stacks. History is
/// session-scoped: it is reset on login/logout and never persisted.
#[derive(Debug, Default)]
pub struct HistoryEngine {
    current: Vec<Transaction>,
    undo_stack: Vec<Vec<Transaction>>,
    redo_stack: Vec<Vec<Transaction>>,
}

impl HistoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &[Transaction] {
        &self.current
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Sole mutation entry point: records the pre-mutation list and makes
    /// `new_list` current. After a commit, redo is unavailable until a
    /// subsequent undo.
    pub fn commit(&mut self, new_list: Vec<Transaction>) {
        self.redo_stack.clear();
        let prev = std::mem::replace(&mut self.current, new_list);
        self.undo_stack.push(prev);
    }

    /// Steps back one committed mutation. Returns false at the boundary.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.undo_stack.pop() else {
            return false;
        };
        let now = std::mem::replace(&mut self.current, prev);
        self.redo_stack.push(now);
        true
    }

    /// Reapplies the most recently undone mutation. Returns false at the
    /// boundary.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let now = std::mem::replace(&mut self.current, next);
        self.undo_stack.push(now);
        true
    }

    /// Drops all history and makes `initial` current. Invoked on login,
    /// logout, and user switch.
    pub fn reset(&mut self, initial: Vec<Transaction>) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current = initial;
    }
}
