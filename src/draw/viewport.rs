//! Canvas viewport moved by the hand tool.

use super::Point;
use serde::{Deserialize, Serialize};

/// Pan offset between screen space and world space.
///
/// A world point `w` is shown at screen position `w + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn screen_to_world(&self, point: Point) -> Point {
        point.offset(-self.offset_x, -self.offset_y)
    }

    pub fn world_to_screen(&self, point: Point) -> Point {
        point.offset(self.offset_x, self.offset_y)
    }
}
