use crate::draw::{BoundingBox, Element, Viewport};
use crate::input::{ShapeKind, ToolName};
use serde::{Deserialize, Serialize};

use super::{DrawingState, InputState, Phase};

/// Owned snapshot of everything a render pass needs.
///
/// Taking a snapshot gives a consistent view when rendering happens away
/// from the thread that feeds events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub tool: ToolName,
    pub shape: ShapeKind,
    pub phase: Phase,
    pub viewport: Viewport,
    /// Committed elements, bottom to top
    pub elements: Vec<Element>,
    /// Live preview of the element being drawn, if any
    pub draft: Option<Element>,
}

impl InputState {
    /// Committed elements in ascending z-order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.store.iter()
    }

    /// The uncommitted element being drawn, for live preview.
    ///
    /// Elements dragged by the mouse tool are updated in the store directly
    /// and are not reported here.
    pub fn draft(&self) -> Option<&Element> {
        match &self.state {
            DrawingState::Drawing { draft, .. } | DrawingState::TextEditing { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn scene(&self) -> Scene {
        Scene {
            tool: self.toolbar.active_tool(),
            shape: self.toolbar.active_shape(),
            phase: self.phase(),
            viewport: self.viewport,
            elements: self.store.iter().cloned().collect(),
            draft: self.draft().cloned(),
        }
    }

    /// Drains pending dirty regions, in screen space, for the current surface size.
    ///
    /// Only committed changes are tracked; hosts repaint the draft themselves.
    pub fn take_dirty_regions(&mut self) -> Vec<BoundingBox> {
        self.store
            .take_dirty_regions(self.screen_width, self.screen_height, &self.viewport)
    }
}
