use super::{DrawingState, InputState};
use crate::draw::{ElementId, Geometry};
use crate::error::CanvasError;
use log::debug;

impl InputState {
    /// Content of the open text draft, if a text session is active.
    pub fn draft_text(&self) -> Option<&str> {
        match &self.state {
            DrawingState::TextEditing { draft } => match &draft.geometry {
                Geometry::Text { content, .. } => Some(content),
                _ => None,
            },
            _ => None,
        }
    }

    /// Replaces the content of the open text draft.
    ///
    /// Called by the host's text-input overlay; only valid during a text session.
    pub fn set_draft_text(&mut self, content: impl Into<String>) -> Result<(), CanvasError> {
        let phase = self.phase();
        let DrawingState::TextEditing { draft } = &mut self.state else {
            return Err(CanvasError::InvalidEvent {
                event: "set_draft_text",
                phase,
            });
        };

        if let Geometry::Text {
            content: current, ..
        } = &mut draft.geometry
        {
            *current = content.into();
        }
        self.needs_redraw = true;
        Ok(())
    }

    /// Ends the text session, committing the draft.
    ///
    /// # Returns
    /// The committed element's id, or `None` when the draft was empty and got
    /// discarded.
    pub fn commit_text(&mut self) -> Result<Option<ElementId>, CanvasError> {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::TextEditing { draft } => {
                self.needs_redraw = true;
                let empty = matches!(&draft.geometry, Geometry::Text { content, .. } if content.is_empty());
                if empty {
                    debug!("Discarding empty text draft {}", draft.id);
                    return Ok(None);
                }
                self.commit_draft(draft).map(Some)
            }
            other => {
                self.state = other;
                Err(self.invalid_event("commit_text"))
            }
        }
    }
}
