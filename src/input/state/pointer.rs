use super::history::HistoryEntry;
use super::{DrawingState, InputState};
use crate::draw::{
    BoundingBox, Element, ElementId, ElementPatch, ElementStore, Geometry, Point, Query,
};
use crate::error::CanvasError;
use crate::input::ToolName;
use log::{debug, info};

impl InputState {
    /// Processes a primary-button press at a screen-space point.
    ///
    /// # Behavior
    /// - Mouse: picks the topmost element under the pointer; a miss stays idle
    /// - Hand: starts panning the viewport
    /// - Pencil: starts a path draft at the point
    /// - Text: opens a text draft with empty content (while a text draft is
    ///   already open, moves it to the point instead)
    /// - Eraser: starts a stroke and erases under the point
    /// - Shape: starts a zero-size draft of the active shape kind
    pub fn pointer_down(&mut self, point: Point) -> Result<(), CanvasError> {
        let world = self.viewport.screen_to_world(point);

        if let DrawingState::TextEditing { draft } = &mut self.state {
            if let Geometry::Text { anchor, .. } = &mut draft.geometry {
                *anchor = world;
            }
            self.needs_redraw = true;
            return Ok(());
        }
        if !self.is_idle() {
            return Err(self.invalid_event("pointer_down"));
        }

        let tool = self.toolbar.active_tool();
        self.state = match tool {
            ToolName::Mouse => match self.store.topmost_at(world, self.hit_tolerance) {
                Some(hit) => {
                    debug!("Picked {} element {}", hit.kind(), hit.id);
                    DrawingState::Editing {
                        target: hit.id,
                        original: hit.geometry.clone(),
                        last: world,
                    }
                }
                None => {
                    debug!("Nothing to pick at ({:.1}, {:.1})", world.x, world.y);
                    return Ok(());
                }
            },
            ToolName::Hand => DrawingState::Panning {
                origin: self.viewport,
                last: point,
            },
            ToolName::Pencil => DrawingState::Drawing {
                anchor: world,
                draft: self.new_draft(Geometry::Path {
                    points: vec![world],
                }),
            },
            ToolName::Text => DrawingState::TextEditing {
                draft: self.new_draft(Geometry::Text {
                    anchor: world,
                    content: String::new(),
                }),
            },
            ToolName::Eraser => {
                let mut removed = Vec::new();
                erase_at(&mut self.store, world, self.eraser_tolerance, &mut removed)?;
                DrawingState::Erasing { removed }
            }
            ToolName::Shape => {
                let kind = self.toolbar.active_shape();
                DrawingState::Drawing {
                    anchor: world,
                    draft: self.new_draft(Geometry::shape(kind, BoundingBox::at(world))),
                }
            }
        };

        debug!("{tool} session started: {}", self.phase());
        self.needs_redraw = true;
        Ok(())
    }

    /// Processes pointer motion while the primary button is held.
    ///
    /// Moves are cumulative: the mouse and hand tools apply the delta since the
    /// previous move, so events must arrive in order.
    pub fn pointer_move(&mut self, point: Point) -> Result<(), CanvasError> {
        let world = self.viewport.screen_to_world(point);
        let phase = self.phase();

        match &mut self.state {
            DrawingState::Idle => {
                return Err(CanvasError::InvalidEvent {
                    event: "pointer_move",
                    phase,
                });
            }
            DrawingState::TextEditing { .. } => return Ok(()),
            DrawingState::Drawing { anchor, draft } => match &mut draft.geometry {
                Geometry::Path { points } => points.push(world),
                geometry => {
                    if let Some(bounds) = geometry.bounds_mut() {
                        *bounds = BoundingBox::from_corners(*anchor, world);
                    }
                }
            },
            DrawingState::Editing { target, last, .. } => {
                let (dx, dy) = last.delta_to(world);
                translate_element(&mut self.store, *target, dx, dy)?;
                *last = world;
            }
            DrawingState::Erasing { removed } => {
                erase_at(&mut self.store, world, self.eraser_tolerance, removed)?;
            }
            DrawingState::Panning { last, .. } => {
                let (dx, dy) = last.delta_to(point);
                self.viewport.pan_by(dx, dy);
                self.store.mark_full_damage();
                *last = point;
            }
        }

        self.needs_redraw = true;
        Ok(())
    }

    /// Processes the primary-button release and finishes the session.
    ///
    /// # Behavior
    /// - Pencil: commits the stroke if it covers at least two distinct points
    /// - Shape: commits the box spanned by the anchor and the release point,
    ///   even when it has zero size
    /// - Mouse: applies the last delta and records the move
    /// - Hand: applies the last screen-space delta to the viewport
    /// - Eraser: records the stroke's removals
    /// - Text: no effect; text sessions end with [`InputState::commit_text`]
    pub fn pointer_up(&mut self, point: Point) -> Result<(), CanvasError> {
        let world = self.viewport.screen_to_world(point);

        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Drawing { anchor, mut draft } => {
                if let Some(bounds) = draft.geometry.bounds_mut() {
                    *bounds = BoundingBox::from_corners(anchor, world);
                } else if let Geometry::Path { points } = &draft.geometry {
                    if !has_distinct_points(points) {
                        debug!("Discarding stroke without movement");
                        self.needs_redraw = true;
                        return Ok(());
                    }
                }
                self.commit_draft(draft)?;
            }
            DrawingState::Editing {
                target,
                original,
                last,
            } => {
                let (dx, dy) = last.delta_to(world);
                translate_element(&mut self.store, target, dx, dy)?;
                let after = self
                    .store
                    .get(target)
                    .ok_or(CanvasError::NotFound(target))?
                    .geometry
                    .clone();
                if after != original {
                    info!("Moved element {target}");
                    self.history.record(HistoryEntry::Moved {
                        id: target,
                        before: original,
                        after,
                    });
                }
            }
            DrawingState::Erasing { removed } => self.record_erasure(removed),
            DrawingState::Panning { last, .. } => {
                let (dx, dy) = last.delta_to(point);
                if dx != 0.0 || dy != 0.0 {
                    self.viewport.pan_by(dx, dy);
                    self.store.mark_full_damage();
                }
                debug!(
                    "Viewport offset now ({:.1}, {:.1})",
                    self.viewport.offset_x, self.viewport.offset_y
                );
            }
            text @ DrawingState::TextEditing { .. } => {
                self.state = text;
                return Ok(());
            }
            DrawingState::Idle => return Err(self.invalid_event("pointer_up")),
        }

        self.needs_redraw = true;
        Ok(())
    }

    /// Abandons the current session and returns to idle.
    ///
    /// Drafts are dropped without touching the store. A mouse drag puts the
    /// element back where it started and a hand drag restores the viewport.
    /// Elements an eraser stroke already removed stay removed.
    pub fn cancel(&mut self) -> Result<(), CanvasError> {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Idle => return Ok(()),
            DrawingState::Drawing { draft, .. } | DrawingState::TextEditing { draft } => {
                debug!("Discarded {} draft {}", draft.kind(), draft.id);
            }
            DrawingState::Editing {
                target, original, ..
            } => {
                self.store.update(target, ElementPatch::geometry(original))?;
                debug!("Reverted drag of element {target}");
            }
            DrawingState::Erasing { removed } => self.record_erasure(removed),
            DrawingState::Panning { origin, .. } => {
                self.viewport = origin;
                self.store.mark_full_damage();
            }
        }

        self.needs_redraw = true;
        Ok(())
    }

    /// Inserts a finished draft and records it for undo.
    pub(super) fn commit_draft(&mut self, draft: Element) -> Result<ElementId, CanvasError> {
        let id = self.store.insert(draft)?;
        if let Some(element) = self.store.get(id) {
            info!("Committed {} element {id}", element.kind());
            self.history.record(HistoryEntry::Inserted(element.clone()));
        }
        Ok(id)
    }

    fn record_erasure(&mut self, removed: Vec<Element>) {
        if !removed.is_empty() {
            info!("Erased {} element(s)", removed.len());
            self.history.record(HistoryEntry::Removed(removed));
        }
    }
}

/// Removes every element hit at `point`, topmost first.
fn erase_at(
    store: &mut ElementStore,
    point: Point,
    tolerance: f64,
    removed: &mut Vec<Element>,
) -> Result<(), CanvasError> {
    let hits: Vec<ElementId> = store
        .query(Query::Point { point, tolerance })
        .map(|element| element.id)
        .collect();

    for id in hits {
        removed.push(store.remove(id)?);
    }
    Ok(())
}

fn translate_element(
    store: &mut ElementStore,
    id: ElementId,
    dx: f64,
    dy: f64,
) -> Result<(), CanvasError> {
    if dx == 0.0 && dy == 0.0 {
        return Ok(());
    }
    let geometry = store
        .get(id)
        .ok_or(CanvasError::NotFound(id))?
        .geometry
        .translated(dx, dy);
    store.update(id, ElementPatch::geometry(geometry))
}

fn has_distinct_points(points: &[Point]) -> bool {
    points
        .split_first()
        .is_some_and(|(first, rest)| rest.iter().any(|point| point != first))
}
