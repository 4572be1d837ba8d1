//! Line-oriented host event scripts.
//!
//! Each non-empty, non-comment line describes one [`HostEvent`]. Scripts let
//! the CLI drive the state machine headlessly, the same way a host UI would.

use crate::error::CanvasError;
use crate::input::{HostEvent, InputState, Key, Modifiers, MouseButton, ShapeKind, ToolName, dispatch};
use log::debug;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Dispatch {
        line: usize,
        #[source]
        source: CanvasError,
    },
}

impl ReplayError {
    pub fn line(&self) -> usize {
        match self {
            ReplayError::Parse { line, .. } | ReplayError::Dispatch { line, .. } => *line,
        }
    }
}

/// Parses a single script line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<HostEvent>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let event = match command.to_lowercase().as_str() {
        "tool" => HostEvent::ToolSelected(parse_single::<ToolName>("tool", &args)?),
        "shape" => HostEvent::ShapeSelected(parse_single::<ShapeKind>("shape", &args)?),
        "press" => {
            let (button, x, y) = parse_button_point(&args)?;
            HostEvent::ButtonPress { button, x, y }
        }
        "release" => {
            let (button, x, y) = parse_button_point(&args)?;
            HostEvent::ButtonRelease { button, x, y }
        }
        "move" => match args.as_slice() {
            [x, y] => HostEvent::Motion {
                x: parse_coord(x)?,
                y: parse_coord(y)?,
            },
            _ => return Err("expected: move <x> <y>".to_string()),
        },
        "key" => match args.as_slice() {
            [spec] => {
                let (key, modifiers) = parse_key(spec)?;
                HostEvent::Key { key, modifiers }
            }
            _ => return Err("expected: key [ctrl+][shift+][alt+]<key>".to_string()),
        },
        // Content is everything after the command, inner spacing kept.
        "text" => HostEvent::TextInput(rest.to_string()),
        "commit" if args.is_empty() => HostEvent::TextCommit,
        "commit" => return Err("commit takes no arguments".to_string()),
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(Some(event))
}

/// Parses a whole script, keeping the 1-based line number of every event.
pub fn parse_script(script: &str) -> Result<Vec<(usize, HostEvent)>, ReplayError> {
    let mut events = Vec::new();
    for (index, line) in script.lines().enumerate() {
        let number = index + 1;
        match parse_line(line) {
            Ok(Some(event)) => events.push((number, event)),
            Ok(None) => {}
            Err(message) => {
                return Err(ReplayError::Parse {
                    line: number,
                    message,
                });
            }
        }
    }
    Ok(events)
}

/// Parses and dispatches a script against `state`.
///
/// The whole script is parsed before anything is dispatched, so a syntax
/// error leaves the state untouched. Returns the number of events applied.
pub fn replay(state: &mut InputState, script: &str) -> Result<usize, ReplayError> {
    let events = parse_script(script)?;
    for (line, event) in &events {
        debug!("line {line}: {event:?}");
        dispatch(state, event.clone()).map_err(|source| ReplayError::Dispatch {
            line: *line,
            source,
        })?;
    }
    Ok(events.len())
}

fn parse_single<T>(what: &str, args: &[&str]) -> Result<T, String>
where
    T: FromStr,
{
    match args {
        [name] => name
            .parse::<T>()
            .map_err(|_| format!("unknown {what} '{name}'")),
        _ => Err(format!("expected: {what} <name>")),
    }
}

fn parse_button_point(args: &[&str]) -> Result<(MouseButton, f64, f64), String> {
    match args {
        [x, y] => Ok((MouseButton::Left, parse_coord(x)?, parse_coord(y)?)),
        [button, x, y] => Ok((parse_button(button)?, parse_coord(x)?, parse_coord(y)?)),
        _ => Err("expected: [left|right|middle] <x> <y>".to_string()),
    }
}

fn parse_button(name: &str) -> Result<MouseButton, String> {
    match name.to_lowercase().as_str() {
        "left" => Ok(MouseButton::Left),
        "right" => Ok(MouseButton::Right),
        "middle" => Ok(MouseButton::Middle),
        _ => Err(format!("unknown button '{name}'")),
    }
}

fn parse_coord(value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|_| format!("invalid coordinate '{value}'"))
}

/// Parses `ctrl+shift+z` style key specs.
fn parse_key(spec: &str) -> Result<(Key, Modifiers), String> {
    let mut modifiers = Modifiers::new();
    let mut parts: Vec<&str> = spec.split('+').collect();
    // The key itself is '+' only when the spec is "+" or ends in "++".
    let key_name = match parts.pop() {
        Some("") if parts.last() == Some(&"") => {
            parts.pop();
            "+"
        }
        Some("") | None => return Err(format!("unknown key '{spec}'")),
        Some(name) => name,
    };

    for part in parts {
        match part.to_lowercase().as_str() {
            "ctrl" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" => modifiers.alt = true,
            _ => return Err(format!("unknown modifier '{part}'")),
        }
    }

    let key = match key_name.to_lowercase().as_str() {
        "escape" | "esc" => Key::Escape,
        "return" | "enter" => Key::Return,
        "backspace" => Key::Backspace,
        "space" => Key::Space,
        "tab" => Key::Tab,
        _ => {
            let mut chars = key_name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return Err(format!("unknown key '{key_name}'")),
            }
        }
    };
    Ok((key, modifiers))
}
