//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::{ShapeKind, ToolName};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Style applied to new elements when the canvas starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Default font size for text elements in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub default_font_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_font_size: default_font_size(),
        }
    }
}

/// Toolbar defaults and picking slack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    /// Tool active at startup (mouse, hand, pencil, text, eraser, shape)
    #[serde(default)]
    pub default_tool: ToolName,

    /// Shape drawn by the shape tool at startup (rect, circle, triangle)
    #[serde(default)]
    pub default_shape: ShapeKind,

    /// Distance in pixels within which the mouse tool picks an element
    /// (valid range: 0.0 - 50.0)
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance: f64,

    /// Distance in pixels within which the eraser removes an element
    /// (valid range: 0.0 - 50.0)
    #[serde(default = "default_eraser_tolerance")]
    pub eraser_tolerance: f64,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_tool: ToolName::default(),
            default_shape: ShapeKind::default(),
            hit_tolerance: default_hit_tolerance(),
            eraser_tolerance: default_eraser_tolerance(),
        }
    }
}

/// Undo/redo settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of undo steps kept (0 = unlimited)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_thickness() -> f64 {
    3.0
}

fn default_font_size() -> f64 {
    32.0
}

fn default_hit_tolerance() -> f64 {
    4.0
}

fn default_eraser_tolerance() -> f64 {
    6.0
}

fn default_max_depth() -> usize {
    100
}
