//! Undo/redo journal of committed interactions.

use super::InputState;
use crate::draw::{Element, ElementId, ElementPatch, Geometry};
use crate::error::CanvasError;
use log::debug;
use std::collections::VecDeque;

/// One committed interaction, with enough data to reverse it.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEntry {
    /// A draft was committed to the store
    Inserted(Element),
    /// An eraser stroke removed these elements
    Removed(Vec<Element>),
    /// The mouse tool dragged an element
    Moved {
        id: ElementId,
        before: Geometry,
        after: Geometry,
    },
}

/// Bounded undo stack plus redo stack.
#[derive(Debug, Default)]
pub struct History {
    undo: VecDeque<HistoryEntry>,
    redo: Vec<HistoryEntry>,
    /// Maximum undo depth (0 = unlimited)
    max_depth: usize,
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Records a new interaction; anything that could be redone is dropped.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.redo.clear();
        self.push_undo(entry);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    fn push_undo(&mut self, entry: HistoryEntry) {
        self.undo.push_back(entry);
        if self.max_depth > 0 && self.undo.len() > self.max_depth {
            self.undo.pop_front();
        }
    }
}

impl InputState {
    /// Reverts the most recent committed interaction.
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool, CanvasError> {
        if !self.is_idle() {
            return Err(self.invalid_event("undo"));
        }
        let Some(entry) = self.history.undo.pop_back() else {
            return Ok(false);
        };

        match &entry {
            HistoryEntry::Inserted(element) => {
                self.store.remove(element.id)?;
            }
            HistoryEntry::Removed(elements) => {
                for element in elements {
                    self.store.restore(element.clone())?;
                }
            }
            HistoryEntry::Moved { id, before, .. } => {
                self.store.update(*id, ElementPatch::geometry(before.clone()))?;
            }
        }

        debug!("Undid {entry:?}");
        self.history.redo.push(entry);
        self.needs_redraw = true;
        Ok(true)
    }

    /// Re-applies the most recently undone interaction.
    ///
    /// Returns `Ok(false)` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool, CanvasError> {
        if !self.is_idle() {
            return Err(self.invalid_event("redo"));
        }
        let Some(entry) = self.history.redo.pop() else {
            return Ok(false);
        };

        match &entry {
            HistoryEntry::Inserted(element) => {
                self.store.restore(element.clone())?;
            }
            HistoryEntry::Removed(elements) => {
                for element in elements {
                    self.store.remove(element.id)?;
                }
            }
            HistoryEntry::Moved { id, after, .. } => {
                self.store.update(*id, ElementPatch::geometry(after.clone()))?;
            }
        }

        debug!("Redid {entry:?}");
        self.history.push_undo(entry);
        self.needs_redraw = true;
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
