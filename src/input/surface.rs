//! Translates host pointer, keyboard and toolbar events into state machine calls.

use log::{debug, warn};

use super::events::{Key, MouseButton};
use super::modifiers::Modifiers;
use super::state::InputState;
use super::tool::{ShapeKind, ToolName};
use crate::draw::Point;
use crate::error::CanvasError;

/// Raw event as delivered by the host UI.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    ButtonPress { button: MouseButton, x: f64, y: f64 },
    ButtonRelease { button: MouseButton, x: f64, y: f64 },
    Motion { x: f64, y: f64 },
    Key { key: Key, modifiers: Modifiers },
    /// Toolbar button clicked
    ToolSelected(ToolName),
    /// Shape picker changed
    ShapeSelected(ShapeKind),
    /// Text overlay content changed
    TextInput(String),
    /// Text overlay confirmed
    TextCommit,
}

/// Feeds one host event into the state machine.
///
/// Keeps no state of its own: whether a motion or release belongs to an
/// interaction is decided by asking the machine. Hover motion and releases
/// after a press that started nothing are dropped.
pub fn dispatch(state: &mut InputState, event: HostEvent) -> Result<(), CanvasError> {
    match event {
        HostEvent::ButtonPress { button, x, y } => {
            let Some(point) = finite_point(x, y) else {
                return Ok(());
            };
            match button {
                MouseButton::Left => state.pointer_down(point),
                MouseButton::Right => state.cancel(),
                MouseButton::Middle => Ok(()),
            }
        }
        HostEvent::Motion { x, y } => match finite_point(x, y) {
            Some(point) if state.pointer_held() => state.pointer_move(point),
            _ => Ok(()),
        },
        HostEvent::ButtonRelease { button, x, y } => {
            if button != MouseButton::Left {
                return Ok(());
            }
            match finite_point(x, y) {
                Some(point) if state.pointer_held() => state.pointer_up(point),
                Some(_) => {
                    debug!("Release without an active pointer session ignored");
                    Ok(())
                }
                None => Ok(()),
            }
        }
        HostEvent::Key { key, modifiers } => on_key(state, key, modifiers),
        HostEvent::ToolSelected(tool) => state.set_active_tool(tool),
        HostEvent::ShapeSelected(kind) => state.set_active_shape(kind),
        HostEvent::TextInput(content) => state.set_draft_text(content),
        HostEvent::TextCommit => state.commit_text().map(|_| ()),
    }
}

/// Handles a key press.
///
/// # Behavior
/// - Escape: cancels the current interaction
/// - During a text session: characters, Space and Backspace edit the draft,
///   Return commits it
/// - While idle: Ctrl+Z undoes, Ctrl+Shift+Z and Ctrl+Y redo
fn on_key(state: &mut InputState, key: Key, modifiers: Modifiers) -> Result<(), CanvasError> {
    if key == Key::Escape {
        return state.cancel();
    }

    if let Some(current) = state.draft_text() {
        let mut content = current.to_string();
        match key {
            Key::Return => return state.commit_text().map(|_| ()),
            Key::Backspace => {
                content.pop();
            }
            Key::Space => content.push(' '),
            Key::Char(c) if !modifiers.has_shortcut_modifier() => content.push(c),
            _ => return Ok(()),
        }
        return state.set_draft_text(content);
    }

    if modifiers.command() && state.is_idle() {
        match key {
            Key::Char('z' | 'Z') if modifiers.shift => {
                state.redo()?;
            }
            Key::Char('z' | 'Z') => {
                state.undo()?;
            }
            Key::Char('y' | 'Y') => {
                state.redo()?;
            }
            _ => {}
        }
    }
    Ok(())
}

fn finite_point(x: f64, y: f64) -> Option<Point> {
    let point = Point::new(x, y);
    if point.is_finite() {
        Some(point)
    } else {
        warn!("Dropping pointer event with non-finite coordinates ({x}, {y})");
        None
    }
}
