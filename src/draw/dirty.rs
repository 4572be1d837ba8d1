//! Dirty region tracking for incremental rendering.
//!
//! Collects axis-aligned boxes that need repainting between frames.

use super::{BoundingBox, Element};

/// Tracks dirty boxes accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<BoundingBox>,
    force_full: bool,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated boxes.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty box if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: BoundingBox) {
        if rect.is_degenerate() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the repaint region of the given element.
    pub fn mark_element(&mut self, element: &Element) {
        self.mark_rect(element.damage_bounds());
    }

    /// True when the next drain returns the whole surface.
    pub fn is_full(&self) -> bool {
        self.force_full
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single box covering the
    /// entire surface; otherwise returns the accumulated boxes.
    pub fn take_regions(&mut self, width: u32, height: u32) -> Vec<BoundingBox> {
        if std::mem::take(&mut self.force_full) {
            self.regions.clear();
            if width > 0 && height > 0 {
                return vec![BoundingBox::new(0.0, 0.0, width as f64, height as f64)];
            }
            Vec::new()
        } else {
            self.regions.drain(..).collect()
        }
    }
}
