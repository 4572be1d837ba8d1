//! Toolbar selection state.

use super::tool::{ShapeKind, ToggleButton, ToolName};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Active tool and active shape as shown on the host toolbar.
///
/// Only [`InputState`](super::InputState) changes the selection, so a tool
/// switch can be refused while an interaction is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Toolbar {
    active_tool: ToolName,
    active_shape: ShapeKind,
}

impl Toolbar {
    pub fn new(active_tool: ToolName, active_shape: ShapeKind) -> Self {
        Self {
            active_tool,
            active_shape,
        }
    }

    pub fn active_tool(&self) -> ToolName {
        self.active_tool
    }

    pub fn active_shape(&self) -> ShapeKind {
        self.active_shape
    }

    /// Returns true if the selection changed.
    pub(crate) fn select_tool(&mut self, tool: ToolName) -> bool {
        std::mem::replace(&mut self.active_tool, tool) != tool
    }

    /// Returns true if the selection changed.
    pub(crate) fn select_shape(&mut self, kind: ShapeKind) -> bool {
        std::mem::replace(&mut self.active_shape, kind) != kind
    }

    pub fn is_toggled(&self, button: ToggleButton) -> bool {
        self.active_tool == button
    }

    /// Every toggle button with its pressed state, in toolbar order.
    pub fn toggle_states(&self) -> impl Iterator<Item = (ToggleButton, bool)> + '_ {
        ToggleButton::iter().map(|button| (button, self.is_toggled(button)))
    }
}
