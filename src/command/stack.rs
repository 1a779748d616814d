// CommandStack - bounded undo/redo history

use crate::command::trait_def::Command;
use crate::config::SessionConfig;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Default maximum number of commands to keep in history
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Smallest usable history bound; lower requests are clamped up
pub const MIN_HISTORY_LIMIT: usize = 2;

/// Bounded linear history of executed commands
///
/// The stack keeps one ordered sequence of commands and a cursor that
/// splits it into the undoable past `[0, cursor)` and the redoable future
/// `[cursor, len)`. The host executes a command first and then records it
/// here; undo and redo hand the recorded command back for the host to
/// replay.
///
/// # Memory Management
/// History length is bounded to keep long sessions from growing without
/// limit. Once the bound is reached the oldest entry is evicted and the
/// cursor shifted so the relative position is preserved.
pub struct CommandStack {
    /// Executed commands, oldest at the front
    history: VecDeque<Box<dyn Command>>,

    /// Boundary between undoable and redoable entries
    cursor: usize,

    /// Maximum number of commands to keep in history
    capacity: usize,
}

impl CommandStack {
    /// Create an empty stack bounded by `capacity` entries
    ///
    /// Capacities below [`MIN_HISTORY_LIMIT`] are clamped up to it.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_HISTORY_LIMIT);
        Self {
            history: VecDeque::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    /// Create a stack bounded by the session's configured history limit
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.history_limit)
    }

    /// Record an executed command at the cursor
    ///
    /// Entries between the cursor and the tip (undone but not redone) are
    /// discarded first. If the stack is full afterwards the oldest entry
    /// is evicted and the cursor adjusted so the new entry stays at the
    /// tip.
    pub fn append(&mut self, command: Box<dyn Command>) {
        if self.cursor < self.history.len() {
            debug!(
                discarded = self.history.len() - self.cursor,
                "discarding redoable branch"
            );
            self.history.truncate(self.cursor);
        }

        trace!(label = command.label(), "append");
        self.history.push_back(command);
        self.cursor += 1;

        if self.history.len() > self.capacity {
            self.history.pop_front();
            self.cursor -= 1;
            debug!(capacity = self.capacity, "evicted oldest history entry");
        }
    }

    /// Step the cursor back and hand out the command being undone
    ///
    /// Returns `None` when nothing is left to undo. The host replays
    /// `unexecute` on the returned command.
    pub fn undo(&mut self) -> Option<&mut (dyn Command + '_)> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        trace!(cursor = self.cursor, "undo");
        match self.history.get_mut(self.cursor) {
            Some(c) => Some(c.as_mut()),
            None => None,
        }
    }

    /// Hand out the command being redone and step the cursor forward
    ///
    /// Returns `None` when nothing has been undone. The host replays
    /// `execute` on the returned command.
    pub fn redo(&mut self) -> Option<&mut (dyn Command + '_)> {
        if self.cursor == self.history.len() {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        trace!(cursor = self.cursor, "redo");
        match self.history.get_mut(index) {
            Some(c) => Some(c.as_mut()),
            None => None,
        }
    }

    /// Label of the command `undo` would act on
    ///
    /// Used by the host to set menu text without mutating the stack.
    pub fn undo_label(&self) -> Option<&str> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.history.get(index))
            .map(|command| command.label())
    }

    /// Label of the command `redo` would act on
    pub fn redo_label(&self) -> Option<&str> {
        self.history.get(self.cursor).map(|command| command.label())
    }

    /// True when undo is unavailable
    pub fn is_at_oldest(&self) -> bool {
        self.cursor == 0
    }

    /// True when redo is unavailable
    pub fn is_at_newest(&self) -> bool {
        self.cursor == self.history.len()
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.is_at_oldest()
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.is_at_newest()
    }

    /// Number of commands currently undoable
    pub fn undo_count(&self) -> usize {
        self.cursor
    }

    /// Number of commands currently redoable
    pub fn redo_count(&self) -> usize {
        self.history.len() - self.cursor
    }

    /// Total retained history length
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The clamped history bound
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all history, as on a document reset
    pub fn clear(&mut self) {
        self.history.clear();
        self.cursor = 0;
    }
}

impl Default for CommandStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
