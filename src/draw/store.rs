//! Element store: the ordered collection of committed elements.

use super::{BoundingBox, DirtyTracker, Element, ElementId, ElementPatch, Point, Viewport};
use crate::error::CanvasError;
use log::debug;

/// Hit-test target for [`ElementStore::query`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Query {
    /// Elements whose geometry contains the point, within `tolerance`
    Point { point: Point, tolerance: f64 },
    /// Elements whose bounding box overlaps the region
    Region(BoundingBox),
}

impl Query {
    fn matches(&self, element: &Element) -> bool {
        match self {
            Query::Point { point, tolerance } => element.contains_point(*point, *tolerance),
            Query::Region(region) => element.bounding_box().intersects(region),
        }
    }
}

/// Committed elements in ascending z-order.
///
/// `z_index` values come from a counter that only grows, so insertion order
/// and z-order agree and no two elements share an index. Every mutation marks
/// the affected region in the store's [`DirtyTracker`].
#[derive(Debug, Default)]
pub struct ElementStore {
    /// Elements sorted by `z_index` (first = bottom, last = top)
    elements: Vec<Element>,
    next_z: u64,
    last_id: u64,
    dirty: DirtyTracker,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an id that no stored element uses.
    pub fn next_id(&mut self) -> ElementId {
        self.last_id += 1;
        ElementId::from_raw(self.last_id)
    }

    /// Appends an element on top of the stack, assigning the next z-index.
    pub fn insert(&mut self, mut element: Element) -> Result<ElementId, CanvasError> {
        if self.contains(element.id) {
            return Err(CanvasError::DuplicateId(element.id));
        }

        element.z_index = self.next_z;
        self.next_z += 1;
        self.last_id = self.last_id.max(element.id.raw());
        self.dirty.mark_element(&element);

        let id = element.id;
        debug!("Inserted {} element {id} at z={}", element.kind(), element.z_index);
        self.elements.push(element);
        Ok(id)
    }

    /// Replaces geometry and/or style, preserving id and z-index.
    pub fn update(&mut self, id: ElementId, patch: ElementPatch) -> Result<(), CanvasError> {
        let index = self.position(id).ok_or(CanvasError::NotFound(id))?;
        let element = &mut self.elements[index];
        self.dirty.mark_element(element);

        if let Some(geometry) = patch.geometry {
            element.geometry = geometry;
        }
        if let Some(style) = patch.style {
            element.style = style;
        }

        self.dirty.mark_element(element);
        Ok(())
    }

    /// Deletes an element and hands it back.
    pub fn remove(&mut self, id: ElementId) -> Result<Element, CanvasError> {
        let index = self.position(id).ok_or(CanvasError::NotFound(id))?;
        let element = self.elements.remove(index);
        self.dirty.mark_element(&element);
        debug!("Removed {} element {id}", element.kind());
        Ok(element)
    }

    /// Puts a previously removed element back at its original z position.
    pub fn restore(&mut self, element: Element) -> Result<ElementId, CanvasError> {
        if self.contains(element.id) {
            return Err(CanvasError::DuplicateId(element.id));
        }

        let index = self
            .elements
            .partition_point(|existing| existing.z_index < element.z_index);
        self.next_z = self.next_z.max(element.z_index + 1);
        self.last_id = self.last_id.max(element.id.raw());
        self.dirty.mark_element(&element);

        let id = element.id;
        self.elements.insert(index, element);
        Ok(id)
    }

    /// Matching elements, topmost first.
    ///
    /// The iterator borrows the store, so it always reflects the state at the
    /// time of the call; query again after mutating.
    pub fn query(&self, query: Query) -> impl Iterator<Item = &Element> + '_ {
        self.elements
            .iter()
            .rev()
            .filter(move |element| query.matches(element))
    }

    /// Topmost element hit at `point`.
    pub fn topmost_at(&self, point: Point, tolerance: f64) -> Option<&Element> {
        self.query(Query::Point { point, tolerance }).next()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.position(id).is_some()
    }

    /// All elements, bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Marks the whole surface for repaint (e.g. after the viewport moved).
    pub fn mark_full_damage(&mut self) {
        self.dirty.mark_full();
    }

    /// Drains dirty regions for a surface of the given size.
    ///
    /// Regions are tracked in world space and returned in screen space for
    /// the given viewport.
    pub fn take_dirty_regions(
        &mut self,
        width: u32,
        height: u32,
        viewport: &Viewport,
    ) -> Vec<BoundingBox> {
        let full = self.dirty.is_full();
        let regions = self.dirty.take_regions(width, height);
        if full {
            return regions;
        }
        regions
            .into_iter()
            .map(|region| {
                let origin = viewport.world_to_screen(Point::new(region.x, region.y));
                BoundingBox::new(origin.x, origin.y, region.width, region.height)
            })
            .collect()
    }

    fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id == id)
    }
}
