//! Toolbar tool and shape selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Toolbar tool; exactly one is active at a time.
///
/// The active tool decides how pointer events are interpreted. Names parse
/// from and display as the lowercase toolbar identifiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ToolName {
    /// Select and drag an existing element
    #[default]
    Mouse,
    /// Pan the viewport
    Hand,
    /// Freehand stroke
    Pencil,
    /// Place a text block
    Text,
    /// Remove elements under the pointer
    Eraser,
    /// Drag out the active [`ShapeKind`]
    Shape,
}

/// Toolbar toggle buttons; one per tool, pressed while that tool is active.
pub type ToggleButton = ToolName;

/// Primitive drawn by the shape tool.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ShapeKind {
    #[default]
    Rect,
    Circle,
    Triangle,
}
