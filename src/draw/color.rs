//! Stroke colors and the named palette used by config and summaries.

use serde::{Deserialize, Serialize};

/// RGBA color with components in the range 0.0 to 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
    }

    /// Human-readable palette name, or "custom" for anything off-palette.
    pub fn name(&self) -> &'static str {
        PALETTE
            .iter()
            .find(|(_, color)| color.approx_eq(self))
            .map_or("custom", |(name, _)| *name)
    }

    fn approx_eq(&self, other: &Color) -> bool {
        const TOLERANCE: f64 = 0.1;
        (self.r - other.r).abs() < TOLERANCE
            && (self.g - other.g).abs() < TOLERANCE
            && (self.b - other.b).abs() < TOLERANCE
    }
}

impl Default for Color {
    fn default() -> Self {
        RED
    }
}

pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.0, 1.0);
pub const PINK: Color = Color::new(1.0, 0.0, 1.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

const PALETTE: [(&str, Color); 8] = [
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("orange", ORANGE),
    ("pink", PINK),
    ("white", WHITE),
    ("black", BLACK),
];

/// Maps a palette name (case-insensitive) to its color.
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.to_lowercase();
    PALETTE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}
