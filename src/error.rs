//! Contract violations raised by the element store and the tool state machine.
//!
//! None of these are user-facing failures: a host that drives the core
//! correctly never triggers them. Degenerate input (a zero-size shape, a
//! stroke without movement, erasing empty space) is not an error.

use crate::draw::ElementId;
use crate::input::Phase;
use thiserror::Error;

/// Errors surfaced by store and state machine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    #[error("element {0} already exists")]
    DuplicateId(ElementId),

    #[error("element {0} not found")]
    NotFound(ElementId),

    #[error("cannot switch to '{requested}' while the session is {phase}")]
    ToolChangeDuringSession { requested: String, phase: Phase },

    #[error("{event} is not valid while the session is {phase}")]
    InvalidEvent { event: &'static str, phase: Phase },
}
