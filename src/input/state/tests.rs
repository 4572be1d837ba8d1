use super::*;
use crate::draw::{BoundingBox, ElementId, ElementKind, Geometry, Point, Style, normalize};
use crate::error::CanvasError;
use crate::input::{ShapeKind, ToolName, Toolbar};

fn create_test_input_state() -> InputState {
    InputState::with_defaults(
        Style::default(),
        Toolbar::default(),
        2.0, // hit_tolerance
        4.0, // eraser_tolerance
        0,   // unlimited history
    )
}

fn state_with_tool(tool: ToolName) -> InputState {
    let mut state = create_test_input_state();
    state.set_active_tool(tool).unwrap();
    state
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn drag(state: &mut InputState, from: Point, moves: &[Point], to: Point) {
    state.pointer_down(from).unwrap();
    for point in moves {
        state.pointer_move(*point).unwrap();
    }
    state.pointer_up(to).unwrap();
}

fn draw_rect(state: &mut InputState, from: Point, to: Point) -> ElementId {
    state.set_active_tool(ToolName::Shape).unwrap();
    state.set_active_shape(ShapeKind::Rect).unwrap();
    drag(state, from, &[to], to);
    state.elements().last().unwrap().id
}

fn bounds_of(state: &InputState, id: ElementId) -> BoundingBox {
    state.store().get(id).unwrap().bounding_box()
}

// ---------------------------------------------------------------------------
// Shape tool
// ---------------------------------------------------------------------------

#[test]
fn test_rect_scenario_produces_normalized_box() {
    let mut state = state_with_tool(ToolName::Shape);
    drag(&mut state, p(10.0, 10.0), &[p(50.0, 40.0)], p(50.0, 40.0));

    let elements: Vec<_> = state.elements().collect();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].kind(), ElementKind::Rect);
    assert_eq!(
        elements[0].bounding_box(),
        BoundingBox::new(10.0, 10.0, 40.0, 30.0)
    );
    assert!(state.is_idle());
}

#[test]
fn test_shape_box_is_normalized_in_every_quadrant() {
    let anchor = p(100.0, 100.0);
    for end in [
        p(130.0, 120.0),
        p(70.0, 120.0),
        p(70.0, 80.0),
        p(130.0, 80.0),
    ] {
        let mut state = state_with_tool(ToolName::Shape);
        drag(&mut state, anchor, &[p(0.0, 0.0), end], end);

        let expected = normalize(BoundingBox::new(
            anchor.x,
            anchor.y,
            end.x - anchor.x,
            end.y - anchor.y,
        ));
        let element = state.elements().next().unwrap();
        assert_eq!(element.bounding_box(), expected, "drag to {end:?}");
        assert!(element.bounding_box().width >= 0.0);
        assert!(element.bounding_box().height >= 0.0);
    }
}

#[test]
fn test_shape_uses_release_point_not_last_move() {
    let mut state = state_with_tool(ToolName::Shape);
    drag(&mut state, p(0.0, 0.0), &[p(5.0, 5.0)], p(20.0, 10.0));
    assert_eq!(
        state.elements().next().unwrap().bounding_box(),
        BoundingBox::new(0.0, 0.0, 20.0, 10.0)
    );
}

#[test]
fn test_zero_size_shape_is_inserted() {
    let mut state = state_with_tool(ToolName::Shape);
    drag(&mut state, p(7.0, 7.0), &[], p(7.0, 7.0));
    assert_eq!(state.store().len(), 1);
    assert_eq!(
        state.elements().next().unwrap().bounding_box(),
        BoundingBox::new(7.0, 7.0, 0.0, 0.0)
    );
}

#[test]
fn test_shape_draft_is_not_in_store_until_release() {
    let mut state = state_with_tool(ToolName::Shape);
    state.set_active_shape(ShapeKind::Circle).unwrap();
    state.pointer_down(p(0.0, 0.0)).unwrap();
    state.pointer_move(p(30.0, 30.0)).unwrap();

    assert!(state.store().is_empty());
    let draft = state.draft().unwrap();
    assert_eq!(draft.kind(), ElementKind::Circle);
    assert_eq!(draft.bounding_box(), BoundingBox::new(0.0, 0.0, 30.0, 30.0));
    assert_eq!(state.phase(), Phase::Drawing);

    state.pointer_up(p(30.0, 30.0)).unwrap();
    assert!(state.draft().is_none());
    assert_eq!(state.elements().next().unwrap().kind(), ElementKind::Circle);
}

#[test]
fn test_triangle_uses_active_shape_and_style() {
    let mut state = state_with_tool(ToolName::Shape);
    state.set_active_shape(ShapeKind::Triangle).unwrap();
    state.current_style.thickness = 9.0;
    drag(&mut state, p(0.0, 0.0), &[], p(10.0, 10.0));

    let element = state.elements().next().unwrap();
    assert_eq!(element.kind(), ElementKind::Triangle);
    assert_eq!(element.style.thickness, 9.0);
}

// ---------------------------------------------------------------------------
// Pencil tool
// ---------------------------------------------------------------------------

#[test]
fn test_pencil_click_without_movement_leaves_store_unchanged() {
    let mut state = state_with_tool(ToolName::Pencil);
    drag(&mut state, p(0.0, 0.0), &[], p(0.0, 0.0));
    assert!(state.store().is_empty());
    assert!(state.is_idle());
    assert!(!state.can_undo());
}

#[test]
fn test_pencil_moves_to_same_point_are_discarded() {
    let mut state = state_with_tool(ToolName::Pencil);
    drag(&mut state, p(3.0, 3.0), &[p(3.0, 3.0), p(3.0, 3.0)], p(3.0, 3.0));
    assert!(state.store().is_empty());
}

#[test]
fn test_pencil_stroke_keeps_every_move() {
    let mut state = state_with_tool(ToolName::Pencil);
    let moves = [p(1.0, 1.0), p(1.0, 1.0), p(2.0, 5.0)];
    drag(&mut state, p(0.0, 0.0), &moves, p(9.0, 9.0));

    let element = state.elements().next().unwrap();
    let Geometry::Path { points } = &element.geometry else {
        panic!("expected a path, got {:?}", element.geometry);
    };
    assert_eq!(
        points,
        &vec![p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(2.0, 5.0)]
    );
}

// ---------------------------------------------------------------------------
// Mouse tool
// ---------------------------------------------------------------------------

#[test]
fn test_mouse_drag_translates_by_cumulative_moves() {
    let mut state = create_test_input_state();
    let id = draw_rect(&mut state, p(10.0, 10.0), p(30.0, 30.0));
    state.set_active_tool(ToolName::Mouse).unwrap();

    drag(
        &mut state,
        p(20.0, 20.0),
        &[p(25.0, 25.0), p(30.0, 30.0)],
        p(30.0, 30.0),
    );

    assert_eq!(bounds_of(&state, id), BoundingBox::new(20.0, 20.0, 20.0, 20.0));
    assert!(state.is_idle());
}

#[test]
fn test_mouse_translation_is_associative_over_moves() {
    let build = || {
        let mut state = create_test_input_state();
        let id = draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
        state.set_active_tool(ToolName::Mouse).unwrap();
        (state, id)
    };

    let (mut stepped, id) = build();
    drag(
        &mut stepped,
        p(5.0, 5.0),
        &[p(6.5, 4.0), p(9.0, 12.0), p(11.0, 13.0)],
        p(11.0, 13.0),
    );

    let (mut direct, other) = build();
    drag(&mut direct, p(5.0, 5.0), &[], p(11.0, 13.0));

    assert_eq!(bounds_of(&stepped, id), bounds_of(&direct, other));
    assert_eq!(bounds_of(&direct, other), BoundingBox::new(6.0, 8.0, 10.0, 10.0));
}

#[test]
fn test_mouse_updates_store_live_during_drag() {
    let mut state = create_test_input_state();
    let id = draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    state.set_active_tool(ToolName::Mouse).unwrap();

    state.pointer_down(p(5.0, 5.0)).unwrap();
    state.pointer_move(p(8.0, 5.0)).unwrap();
    assert_eq!(state.phase(), Phase::Editing);
    assert_eq!(bounds_of(&state, id).x, 3.0);
    assert!(state.draft().is_none());
}

#[test]
fn test_mouse_picks_topmost_element() {
    let mut state = create_test_input_state();
    let lower = draw_rect(&mut state, p(0.0, 0.0), p(20.0, 20.0));
    let upper = draw_rect(&mut state, p(10.0, 10.0), p(30.0, 30.0));
    state.set_active_tool(ToolName::Mouse).unwrap();

    drag(&mut state, p(15.0, 15.0), &[], p(16.0, 15.0));

    assert_eq!(bounds_of(&state, lower).x, 0.0);
    assert_eq!(bounds_of(&state, upper).x, 11.0);
}

#[test]
fn test_mouse_miss_stays_idle() {
    let mut state = create_test_input_state();
    draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    state.set_active_tool(ToolName::Mouse).unwrap();

    state.pointer_down(p(100.0, 100.0)).unwrap();
    assert!(state.is_idle());
    assert!(matches!(
        state.pointer_move(p(110.0, 110.0)),
        Err(CanvasError::InvalidEvent { .. })
    ));
}

#[test]
fn test_mouse_hit_tolerance_extends_pick_area() {
    let mut state = create_test_input_state();
    draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    state.set_active_tool(ToolName::Mouse).unwrap();

    state.pointer_down(p(11.5, 5.0)).unwrap();
    assert_eq!(state.phase(), Phase::Editing);
}

#[test]
fn test_mouse_drag_preserves_id_and_z_order() {
    let mut state = create_test_input_state();
    let first = draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    let second = draw_rect(&mut state, p(50.0, 50.0), p(60.0, 60.0));
    state.set_active_tool(ToolName::Mouse).unwrap();

    drag(&mut state, p(5.0, 5.0), &[p(55.0, 55.0)], p(55.0, 55.0));

    let order: Vec<_> = state.elements().map(|element| element.id).collect();
    assert_eq!(order, vec![first, second]);
}

#[test]
fn test_cancel_during_mouse_drag_restores_geometry() {
    let mut state = create_test_input_state();
    let id = draw_rect(&mut state, p(10.0, 10.0), p(20.0, 20.0));
    let before = bounds_of(&state, id);
    state.set_active_tool(ToolName::Mouse).unwrap();

    state.pointer_down(p(15.0, 15.0)).unwrap();
    state.pointer_move(p(40.0, 40.0)).unwrap();
    state.cancel().unwrap();

    assert!(state.is_idle());
    assert_eq!(bounds_of(&state, id), before);
    // Only the insert is on the history.
    assert!(state.undo().unwrap());
    assert!(!state.can_undo());
}

// ---------------------------------------------------------------------------
// Eraser tool
// ---------------------------------------------------------------------------

#[test]
fn test_eraser_removes_every_element_under_point() {
    let mut state = create_test_input_state();
    draw_rect(&mut state, p(0.0, 0.0), p(20.0, 20.0));
    draw_rect(&mut state, p(10.0, 10.0), p(30.0, 30.0));
    let far = draw_rect(&mut state, p(100.0, 100.0), p(110.0, 110.0));
    state.set_active_tool(ToolName::Eraser).unwrap();

    drag(&mut state, p(15.0, 15.0), &[], p(15.0, 15.0));

    let remaining: Vec<_> = state.elements().map(|element| element.id).collect();
    assert_eq!(remaining, vec![far]);
}

#[test]
fn test_erasing_same_point_twice_is_harmless() {
    let mut state = create_test_input_state();
    draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    state.set_active_tool(ToolName::Eraser).unwrap();

    drag(
        &mut state,
        p(5.0, 5.0),
        &[p(5.0, 5.0), p(5.0, 5.0)],
        p(5.0, 5.0),
    );
    assert!(state.store().is_empty());

    drag(&mut state, p(5.0, 5.0), &[p(5.0, 5.0)], p(5.0, 5.0));
    assert!(state.store().is_empty());
}

#[test]
fn test_eraser_in_empty_space_records_nothing() {
    let mut state = state_with_tool(ToolName::Eraser);
    drag(&mut state, p(5.0, 5.0), &[p(6.0, 6.0)], p(7.0, 7.0));
    assert!(!state.can_undo());
    assert!(state.is_idle());
}

#[test]
fn test_eraser_stroke_is_one_undo_step() {
    let mut state = create_test_input_state();
    draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    draw_rect(&mut state, p(50.0, 0.0), p(60.0, 10.0));
    state.set_active_tool(ToolName::Eraser).unwrap();

    drag(&mut state, p(5.0, 5.0), &[p(55.0, 5.0)], p(55.0, 5.0));
    assert!(state.store().is_empty());

    assert!(state.undo().unwrap());
    assert_eq!(state.store().len(), 2);
}

#[test]
fn test_cancel_keeps_erasures_already_applied() {
    let mut state = create_test_input_state();
    draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    state.set_active_tool(ToolName::Eraser).unwrap();

    state.pointer_down(p(5.0, 5.0)).unwrap();
    state.cancel().unwrap();

    assert!(state.store().is_empty());
    assert!(state.undo().unwrap());
    assert_eq!(state.store().len(), 1);
}

// ---------------------------------------------------------------------------
// Text tool
// ---------------------------------------------------------------------------

#[test]
fn test_text_session_outlives_pointer_release() {
    let mut state = state_with_tool(ToolName::Text);
    drag(&mut state, p(10.0, 20.0), &[], p(10.0, 20.0));

    assert_eq!(state.phase(), Phase::Editing);
    assert!(!state.pointer_held());
    assert_eq!(state.draft_text(), Some(""));
    state.pointer_move(p(50.0, 50.0)).unwrap();
    state.pointer_up(p(50.0, 50.0)).unwrap();
    assert_eq!(state.phase(), Phase::Editing);
}

#[test]
fn test_text_commit_inserts_element() {
    let mut state = state_with_tool(ToolName::Text);
    state.pointer_down(p(10.0, 20.0)).unwrap();
    state.set_draft_text("hello").unwrap();
    let id = state.commit_text().unwrap().unwrap();

    let element = state.store().get(id).unwrap();
    assert_eq!(
        element.geometry,
        Geometry::Text {
            anchor: p(10.0, 20.0),
            content: "hello".to_string(),
        }
    );
    assert!(state.is_idle());
}

#[test]
fn test_second_press_moves_text_anchor() {
    let mut state = state_with_tool(ToolName::Text);
    state.pointer_down(p(10.0, 20.0)).unwrap();
    state.set_draft_text("x").unwrap();
    state.pointer_down(p(40.0, 50.0)).unwrap();

    let Some(Geometry::Text { anchor, content }) = state.draft().map(|d| &d.geometry) else {
        panic!("expected a text draft");
    };
    assert_eq!(*anchor, p(40.0, 50.0));
    assert_eq!(content, "x");
}

#[test]
fn test_empty_text_commit_is_discarded() {
    let mut state = state_with_tool(ToolName::Text);
    state.pointer_down(p(0.0, 0.0)).unwrap();
    assert_eq!(state.commit_text().unwrap(), None);
    assert!(state.store().is_empty());
    assert!(state.is_idle());
}

#[test]
fn test_text_calls_outside_session_are_invalid() {
    let mut state = create_test_input_state();
    assert!(matches!(
        state.set_draft_text("nope"),
        Err(CanvasError::InvalidEvent {
            event: "set_draft_text",
            phase: Phase::Idle
        })
    ));
    assert!(matches!(
        state.commit_text(),
        Err(CanvasError::InvalidEvent {
            event: "commit_text",
            ..
        })
    ));
}

#[test]
fn test_cancel_discards_text_draft() {
    let mut state = state_with_tool(ToolName::Text);
    state.pointer_down(p(0.0, 0.0)).unwrap();
    state.set_draft_text("draft").unwrap();
    state.cancel().unwrap();
    assert!(state.store().is_empty());
    assert!(state.draft().is_none());
}

// ---------------------------------------------------------------------------
// Hand tool and viewport
// ---------------------------------------------------------------------------

#[test]
fn test_hand_pans_viewport_without_touching_store() {
    let mut state = create_test_input_state();
    let id = draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    state.set_active_tool(ToolName::Hand).unwrap();

    drag(
        &mut state,
        p(100.0, 100.0),
        &[p(110.0, 105.0), p(120.0, 110.0)],
        p(120.0, 110.0),
    );

    assert_eq!(state.viewport().offset_x, 20.0);
    assert_eq!(state.viewport().offset_y, 10.0);
    assert_eq!(bounds_of(&state, id), BoundingBox::new(0.0, 0.0, 10.0, 10.0));
    assert!(!state.can_redo());
}

#[test]
fn test_panned_viewport_maps_new_shapes_to_world_space() {
    let mut state = state_with_tool(ToolName::Hand);
    drag(&mut state, p(0.0, 0.0), &[p(50.0, 0.0)], p(50.0, 0.0));

    state.set_active_tool(ToolName::Shape).unwrap();
    drag(&mut state, p(60.0, 10.0), &[], p(70.0, 20.0));

    assert_eq!(
        state.elements().next().unwrap().bounding_box(),
        BoundingBox::new(10.0, 10.0, 10.0, 10.0)
    );
}

#[test]
fn test_hand_release_applies_final_delta() {
    let mut state = state_with_tool(ToolName::Hand);
    drag(&mut state, p(0.0, 0.0), &[], p(40.0, 40.0));
    assert_eq!(state.viewport().offset_x, 40.0);
    assert_eq!(state.viewport().offset_y, 40.0);

    let mut mouse = create_test_input_state();
    let id = draw_rect(&mut mouse, p(0.0, 0.0), p(10.0, 10.0));
    mouse.set_active_tool(ToolName::Mouse).unwrap();
    drag(&mut mouse, p(5.0, 5.0), &[], p(45.0, 45.0));
    assert_eq!(bounds_of(&mouse, id).x, 40.0);
}

#[test]
fn test_cancel_during_pan_restores_viewport() {
    let mut state = state_with_tool(ToolName::Hand);
    state.pointer_down(p(0.0, 0.0)).unwrap();
    state.pointer_move(p(30.0, 30.0)).unwrap();
    assert_eq!(state.phase(), Phase::Panning);

    state.cancel().unwrap();
    assert_eq!(state.viewport().offset_x, 0.0);
    assert_eq!(state.viewport().offset_y, 0.0);
}

// ---------------------------------------------------------------------------
// Session contract
// ---------------------------------------------------------------------------

#[test]
fn test_tool_change_fails_iff_session_open() {
    for tool in [
        ToolName::Hand,
        ToolName::Pencil,
        ToolName::Text,
        ToolName::Eraser,
        ToolName::Shape,
    ] {
        let mut state = state_with_tool(tool);
        state.set_active_tool(ToolName::Mouse).unwrap();
        state.set_active_tool(tool).unwrap();

        state.pointer_down(p(1.0, 1.0)).unwrap();
        assert_ne!(state.phase(), Phase::Idle, "{tool} should open a session");

        let err = state.set_active_tool(ToolName::Mouse).unwrap_err();
        assert_eq!(
            err,
            CanvasError::ToolChangeDuringSession {
                requested: "mouse".to_string(),
                phase: state.phase(),
            }
        );
        assert!(matches!(
            state.set_active_shape(ShapeKind::Circle),
            Err(CanvasError::ToolChangeDuringSession { .. })
        ));
        assert_eq!(state.active_tool(), tool);
    }
}

#[test]
fn test_pointer_events_out_of_order_are_invalid() {
    let mut state = state_with_tool(ToolName::Pencil);
    assert!(matches!(
        state.pointer_move(p(0.0, 0.0)),
        Err(CanvasError::InvalidEvent {
            event: "pointer_move",
            phase: Phase::Idle
        })
    ));
    assert!(matches!(
        state.pointer_up(p(0.0, 0.0)),
        Err(CanvasError::InvalidEvent {
            event: "pointer_up",
            ..
        })
    ));

    state.pointer_down(p(0.0, 0.0)).unwrap();
    assert!(matches!(
        state.pointer_down(p(1.0, 1.0)),
        Err(CanvasError::InvalidEvent {
            event: "pointer_down",
            phase: Phase::Drawing
        })
    ));
    // The open session is untouched by the rejected press.
    state.pointer_move(p(5.0, 5.0)).unwrap();
    state.pointer_up(p(5.0, 5.0)).unwrap();
    assert_eq!(state.store().len(), 1);
}

#[test]
fn test_cancel_drops_drawing_draft() {
    let mut state = state_with_tool(ToolName::Pencil);
    state.pointer_down(p(0.0, 0.0)).unwrap();
    state.pointer_move(p(10.0, 10.0)).unwrap();
    state.cancel().unwrap();

    assert!(state.store().is_empty());
    assert!(state.is_idle());
    state.cancel().unwrap();
}

#[test]
fn test_scene_snapshot_reflects_draft_and_elements() {
    let mut state = create_test_input_state();
    draw_rect(&mut state, p(0.0, 0.0), p(5.0, 5.0));
    state.set_active_tool(ToolName::Pencil).unwrap();
    state.pointer_down(p(1.0, 1.0)).unwrap();

    let scene = state.scene();
    assert_eq!(scene.tool, ToolName::Pencil);
    assert_eq!(scene.phase, Phase::Drawing);
    assert_eq!(scene.elements.len(), 1);
    assert_eq!(scene.draft.map(|draft| draft.kind()), Some(ElementKind::Path));
}

#[test]
fn test_dirty_regions_cover_committed_shape() {
    let mut state = create_test_input_state();
    state.update_screen_dimensions(200, 200);
    state.take_dirty_regions();

    draw_rect(&mut state, p(10.0, 10.0), p(20.0, 20.0));
    let regions = state.take_dirty_regions();
    assert!(!regions.is_empty());
    assert!(regions.iter().any(|region| region.contains(p(15.0, 15.0))));
    assert!(state.take_dirty_regions().is_empty());
}

#[test]
fn test_dirty_regions_follow_viewport_offset() {
    let mut state = state_with_tool(ToolName::Hand);
    state.update_screen_dimensions(300, 300);
    drag(&mut state, p(0.0, 0.0), &[p(100.0, 0.0)], p(100.0, 0.0));
    assert_eq!(
        state.take_dirty_regions(),
        vec![BoundingBox::new(0.0, 0.0, 300.0, 300.0)]
    );

    draw_rect(&mut state, p(110.0, 10.0), p(120.0, 20.0));
    let regions = state.take_dirty_regions();
    assert!(regions.iter().any(|region| region.contains(p(115.0, 15.0))));
    assert!(!regions.iter().any(|region| region.contains(p(15.0, 15.0))));
}

// ---------------------------------------------------------------------------
// Undo / redo
// ---------------------------------------------------------------------------

#[test]
fn test_undo_redo_shape_insert_keeps_id_and_z() {
    let mut state = create_test_input_state();
    let id = draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    let original = state.store().get(id).unwrap().clone();

    assert!(state.undo().unwrap());
    assert!(state.store().is_empty());

    assert!(state.redo().unwrap());
    assert_eq!(state.store().get(id), Some(&original));
}

#[test]
fn test_undo_move_restores_previous_position() {
    let mut state = create_test_input_state();
    let id = draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    state.set_active_tool(ToolName::Mouse).unwrap();
    drag(&mut state, p(5.0, 5.0), &[], p(15.0, 5.0));

    assert!(state.undo().unwrap());
    assert_eq!(bounds_of(&state, id).x, 0.0);
    assert!(state.redo().unwrap());
    assert_eq!(bounds_of(&state, id).x, 10.0);
}

#[test]
fn test_click_without_drag_records_no_move() {
    let mut state = create_test_input_state();
    draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    state.set_active_tool(ToolName::Mouse).unwrap();
    drag(&mut state, p(5.0, 5.0), &[], p(5.0, 5.0));

    assert!(state.undo().unwrap());
    assert!(!state.can_undo());
}

#[test]
fn test_undo_restores_erased_elements_in_original_order() {
    let mut state = create_test_input_state();
    let bottom = draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    let middle = draw_rect(&mut state, p(5.0, 5.0), p(15.0, 15.0));
    let top = draw_rect(&mut state, p(40.0, 40.0), p(50.0, 50.0));
    state.set_active_tool(ToolName::Eraser).unwrap();
    drag(&mut state, p(7.0, 7.0), &[], p(7.0, 7.0));

    state.undo().unwrap();
    let order: Vec<_> = state.elements().map(|element| element.id).collect();
    assert_eq!(order, vec![bottom, middle, top]);
}

#[test]
fn test_new_commit_clears_redo() {
    let mut state = create_test_input_state();
    draw_rect(&mut state, p(0.0, 0.0), p(10.0, 10.0));
    state.undo().unwrap();
    assert!(state.can_redo());

    draw_rect(&mut state, p(20.0, 20.0), p(30.0, 30.0));
    assert!(!state.can_redo());
    assert!(!state.redo().unwrap());
}

#[test]
fn test_undo_mid_session_is_invalid() {
    let mut state = state_with_tool(ToolName::Pencil);
    state.pointer_down(p(0.0, 0.0)).unwrap();
    assert!(matches!(
        state.undo(),
        Err(CanvasError::InvalidEvent { event: "undo", .. })
    ));
    assert!(matches!(
        state.redo(),
        Err(CanvasError::InvalidEvent { event: "redo", .. })
    ));
}

#[test]
fn test_history_depth_is_bounded() {
    let mut state =
        InputState::with_defaults(Style::default(), Toolbar::default(), 2.0, 4.0, 2);
    for offset in [0.0, 20.0, 40.0] {
        draw_rect(&mut state, p(offset, 0.0), p(offset + 10.0, 10.0));
    }

    assert!(state.undo().unwrap());
    assert!(state.undo().unwrap());
    assert!(!state.undo().unwrap());
    assert_eq!(state.store().len(), 1);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn test_from_config_applies_tool_defaults() {
    let mut config = crate::config::Config::default();
    config.tools.default_tool = ToolName::Pencil;
    config.tools.default_shape = ShapeKind::Triangle;
    config.drawing.default_thickness = 7.0;

    let state = InputState::from_config(&config);
    assert_eq!(state.active_tool(), ToolName::Pencil);
    assert_eq!(state.active_shape(), ShapeKind::Triangle);
    assert_eq!(state.current_style.thickness, 7.0);
    assert!(state.is_idle());
}
