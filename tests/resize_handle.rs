//! Tests for drag sessions on resize handles
//!
//! The test group is 1000px wide, so 10px of pointer travel is 1%.

mod common;

use common::{assert_sizes, dashboard, test_model};
use dashboard_shell::geometry::Point;
use dashboard_shell::messages::{LayoutMsg, Msg};
use dashboard_shell::model::AppModel;
use dashboard_shell::panel::{resize_pair, Bound, SizeConstraint};
use dashboard_shell::update::update;

fn press(model: &mut AppModel, handle_index: usize, x: f32) {
    update(
        model,
        Msg::Layout(LayoutMsg::BeginResize {
            layout_id: dashboard(),
            handle_index,
            position: Point::new(x, 300.0),
        }),
    );
}

fn drag(model: &mut AppModel, x: f32) {
    update(
        model,
        Msg::Layout(LayoutMsg::ResizeMove {
            layout_id: dashboard(),
            position: Point::new(x, 300.0),
        }),
    );
}

fn release(model: &mut AppModel) {
    update(model, Msg::Layout(LayoutMsg::EndResize(dashboard())));
}

fn sizes(model: &AppModel) -> Vec<f64> {
    model.layouts.sizes(&dashboard()).unwrap()
}

// ============================================================================
// Pure drag math
// ============================================================================

#[test]
fn test_resize_pair_moves_only_adjacent_panels() {
    let constraints = vec![SizeConstraint::new(0.0, 100.0); 4];
    let outcome = resize_pair(&[25.0, 25.0, 25.0, 25.0], &constraints, 1, 10.0);
    assert_sizes(&outcome.sizes, &[25.0, 35.0, 15.0, 25.0]);
    assert_eq!(outcome.violation, None);
}

#[test]
fn test_resize_pair_clamps_to_neighbour_max() {
    let constraints = vec![
        SizeConstraint::new(15.0, 30.0),
        SizeConstraint::new(40.0, 70.0),
        SizeConstraint::new(10.0, 30.0),
    ];
    // Shrinking main grows the inspector until it hits 30
    let outcome = resize_pair(&[20.0, 60.0, 20.0], &constraints, 1, -25.0);
    assert_eq!(outcome.sizes[2], 30.0);
    assert_eq!(outcome.sizes[1], 50.0);
    let violation = outcome.violation.unwrap();
    assert_eq!(violation.panel_index, 2);
    assert_eq!(violation.bound, Bound::Max);
    assert_eq!(violation.applied_delta, -10.0);
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn test_drag_moves_boundary() {
    let mut model = test_model();
    press(&mut model, 0, 200.0);
    drag(&mut model, 250.0);
    assert_sizes(&sizes(&model), &[25.0, 55.0, 20.0]);

    // Moves are relative to the press, not the previous move
    drag(&mut model, 230.0);
    assert_sizes(&sizes(&model), &[23.0, 57.0, 20.0]);
    release(&mut model);

    assert!(!model.layouts.is_dragging());
}

#[test]
fn test_drag_past_max_lands_exactly_on_bound() {
    let mut model = test_model();
    press(&mut model, 0, 200.0);
    drag(&mut model, 900.0);

    // Sidebar capped at 30, main absorbs exactly the 10 it gave up
    assert_eq!(sizes(&model), vec![30.0, 50.0, 20.0]);
}

#[test]
fn test_drag_past_min_lands_exactly_on_bound() {
    let mut model = test_model();
    press(&mut model, 1, 800.0);
    drag(&mut model, 999.0);

    // Inspector pinned at its 10 minimum
    assert_eq!(sizes(&model), vec![20.0, 70.0, 10.0]);
}

#[test]
fn test_drag_back_inside_after_clamp() {
    let mut model = test_model();
    press(&mut model, 0, 200.0);
    drag(&mut model, 900.0);
    drag(&mut model, 180.0);
    assert_sizes(&sizes(&model), &[18.0, 62.0, 20.0]);
}

#[test]
fn test_press_while_dragging_rejected() {
    let mut model = test_model();
    press(&mut model, 0, 200.0);
    press(&mut model, 0, 200.0);

    assert!(model
        .ui
        .last_error
        .as_deref()
        .is_some_and(|e| e.contains("already active")));
    assert_eq!(
        model.layouts.group(&dashboard()).unwrap().active_handle(),
        Some(0)
    );
}

#[test]
fn test_release_allows_new_session() {
    let mut model = test_model();
    press(&mut model, 0, 200.0);
    release(&mut model);
    press(&mut model, 1, 800.0);

    assert_eq!(
        model.layouts.group(&dashboard()).unwrap().active_handle(),
        Some(1)
    );
}

#[test]
fn test_release_without_session_recorded() {
    let mut model = test_model();
    release(&mut model);
    assert!(model
        .ui
        .last_error
        .as_deref()
        .is_some_and(|e| e.starts_with("no drag session")));
}

#[test]
fn test_invalid_handle_rejected() {
    let mut model = test_model();
    press(&mut model, 2, 500.0);
    assert_eq!(
        model.ui.last_error.as_deref(),
        Some("group dashboard has no handle 2")
    );
}

#[test]
fn test_cancel_keeps_last_sizes() {
    let mut model = test_model();
    press(&mut model, 0, 200.0);
    drag(&mut model, 260.0);
    update(&mut model, Msg::Layout(LayoutMsg::CancelResize(dashboard())));

    assert_sizes(&sizes(&model), &[26.0, 54.0, 20.0]);
    assert!(!model.layouts.is_dragging());
}

#[test]
fn test_nudge_rejected_during_drag() {
    let mut model = test_model();
    press(&mut model, 0, 200.0);
    update(
        &mut model,
        Msg::Layout(LayoutMsg::Nudge {
            layout_id: dashboard(),
            handle_index: 1,
            delta: 5.0,
        }),
    );
    assert_sizes(&sizes(&model), &[20.0, 60.0, 20.0]);
    assert!(model.ui.last_error.is_some());
}

#[test]
fn test_vertical_drag_ignores_x() {
    use dashboard_shell::geometry::{Direction, Rect};
    use dashboard_shell::panel::{GroupSpec, PanelGroup, PanelSpec};

    let spec = GroupSpec::new(
        "stack",
        Direction::Vertical,
        vec![
            PanelSpec::new("top", 20.0, 80.0, 50.0),
            PanelSpec::new("bottom", 20.0, 80.0, 50.0),
        ],
    )
    .with_bounds(Rect::new(0.0, 0.0, 300.0, 400.0));
    let mut group = PanelGroup::from_spec(&spec).unwrap();

    group.begin_drag(0, Point::new(10.0, 200.0)).unwrap();
    let outcome = group.drag_to(Point::new(290.0, 240.0)).unwrap();

    // 40px of 400 = 10%
    assert_sizes(&outcome.sizes, &[60.0, 40.0]);
    assert!(group.end_drag().unwrap().changed);
}
