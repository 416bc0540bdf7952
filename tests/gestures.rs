//! Tests for drag handling and nested-scroll arbitration through the presenter

mod common;

use common::{callbacks, drag, open_now, pull, sheet, test_presenter, FakeScroll};
use drawer::geometry::ScrollEdge;
use drawer::gesture::OtherGesture;
use drawer::headless::{ObserverEvent, ViewEvent};
use drawer::transition::TransitionKind;
use drawer::{DragPhase, Gravity, PanelConfig, PanelPhase, PanelState, Vector};

// ============================================================================
// Translation
// ============================================================================

#[test]
fn test_drag_away_from_anchor_grows_each_gravity() {
    let cases = [
        (Gravity::Bottom, 0.0, -50.0),
        (Gravity::Top, 0.0, 50.0),
        (Gravity::Left, 50.0, 0.0),
        (Gravity::Right, -50.0, 0.0),
    ];

    for (gravity, dx, dy) in cases {
        let mut presenter = test_presenter();
        let id = open_now(&mut presenter, PanelConfig::new(gravity, 100.0, 50.0..=400.0));

        drag(&mut presenter, id, DragPhase::Changed, dx, dy);

        assert_eq!(
            presenter.state(id),
            Some(PanelState::new(150.0, 150.0)),
            "{:?}",
            gravity
        );
    }
}

#[test]
fn test_drag_toward_anchor_shrinks_each_gravity() {
    for gravity in Gravity::ALL {
        let mut presenter = test_presenter();
        let id = open_now(&mut presenter, PanelConfig::new(gravity, 200.0, 50.0..=400.0));

        pull(&mut presenter, id, DragPhase::Changed, -80.0);

        assert_eq!(
            presenter.state(id),
            Some(PanelState::new(120.0, 120.0)),
            "{:?}",
            gravity
        );
    }
}

#[test]
fn test_translations_accumulate_across_events() {
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, sheet(100.0, 50.0, 400.0));

    pull(&mut presenter, id, DragPhase::Began, 10.0);
    pull(&mut presenter, id, DragPhase::Changed, 20.0);
    pull(&mut presenter, id, DragPhase::Changed, 30.0);

    assert_eq!(presenter.state(id), Some(PanelState::new(160.0, 160.0)));
}

#[test]
fn test_cross_axis_motion_is_ignored() {
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, sheet(100.0, 50.0, 400.0));

    drag(&mut presenter, id, DragPhase::Changed, 75.0, 0.0);

    assert_eq!(presenter.state(id), Some(PanelState::new(100.0, 100.0)));
}

// ============================================================================
// Phases
// ============================================================================

#[test]
fn test_drag_phases_track_then_settle() {
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, sheet(100.0, 50.0, 400.0));

    pull(&mut presenter, id, DragPhase::Began, 40.0);
    assert_eq!(presenter.phase(id), Some(PanelPhase::Dragging));
    assert!(presenter.animator().is_idle());
    // Live tracking reports synchronously
    assert_eq!(
        callbacks(&mut presenter),
        vec![ObserverEvent::DidChangeSize { panel: id, offset: 140.0 }]
    );

    pull(&mut presenter, id, DragPhase::Ended, 0.0);
    assert_eq!(presenter.phase(id), Some(PanelPhase::Open));

    let tickets: Vec<_> = presenter.animator().pending().cloned().collect();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].kind, TransitionKind::Resize);

    presenter.finish_animations();
    assert_eq!(
        callbacks(&mut presenter),
        vec![ObserverEvent::DidChangeSize { panel: id, offset: 140.0 }]
    );
}

#[test]
fn test_cancelled_drag_returns_to_open() {
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, sheet(100.0, 50.0, 400.0));

    pull(&mut presenter, id, DragPhase::Began, 40.0);
    pull(&mut presenter, id, DragPhase::Cancelled, 100.0);

    assert_eq!(presenter.phase(id), Some(PanelPhase::Open));
    assert_eq!(presenter.state(id), Some(PanelState::new(140.0, 140.0)));
    assert!(presenter.animator().is_idle());
}

#[test]
fn test_drag_to_close() {
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, sheet(200.0, 100.0, 300.0).with_closable(true));

    drag(&mut presenter, id, DragPhase::Began, 0.0, 120.0);
    assert_eq!(presenter.state(id), Some(PanelState::new(80.0, 100.0)));

    drag(&mut presenter, id, DragPhase::Ended, 0.0, 40.0);
    assert_eq!(presenter.phase(id), Some(PanelPhase::Closing));

    presenter.finish_animations();
    assert_eq!(presenter.phase(id), Some(PanelPhase::Closed));
    assert!(presenter.panels(Gravity::Bottom).is_empty());
}

#[test]
fn test_fixed_panel_resists_drag() {
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, PanelConfig::fixed(Gravity::Bottom, 100.0));

    pull(&mut presenter, id, DragPhase::Began, 80.0);
    assert_eq!(presenter.state(id), Some(PanelState::new(100.0, 100.0)));
    pull(&mut presenter, id, DragPhase::Changed, -300.0);
    assert_eq!(presenter.state(id), Some(PanelState::new(100.0, 100.0)));
    pull(&mut presenter, id, DragPhase::Ended, 0.0);
    presenter.finish_animations();

    assert_eq!(presenter.state(id), Some(PanelState::new(100.0, 100.0)));
    assert_eq!(presenter.phase(id), Some(PanelPhase::Open));
}

#[test]
fn test_drag_while_opening_keeps_opening_phase() {
    let mut presenter = test_presenter();
    let id = presenter.register(sheet(200.0, 100.0, 300.0));
    presenter.open(id, true);

    pull(&mut presenter, id, DragPhase::Changed, 50.0);

    assert_eq!(presenter.state(id), Some(PanelState::new(250.0, 250.0)));
    assert_eq!(presenter.phase(id), Some(PanelPhase::Opening));

    presenter.finish_animations();
    assert_eq!(presenter.phase(id), Some(PanelPhase::Open));
}

// ============================================================================
// Listener
// ============================================================================

#[test]
fn test_non_draggable_panel_ignores_drags() {
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, sheet(100.0, 50.0, 400.0).with_draggable(false));
    assert!(!presenter.view().drag_enabled(id));

    pull(&mut presenter, id, DragPhase::Changed, 60.0);
    assert_eq!(presenter.state(id), Some(PanelState::new(100.0, 100.0)));

    presenter.set_draggable(id, true);
    assert!(presenter.view().drag_enabled(id));

    pull(&mut presenter, id, DragPhase::Changed, 60.0);
    assert_eq!(presenter.state(id), Some(PanelState::new(160.0, 160.0)));

    presenter.set_draggable(id, false);
    assert!(!presenter.view().drag_enabled(id));
}

#[test]
fn test_set_draggable_on_closed_panel_only_updates_config() {
    let mut presenter = test_presenter();
    let id = presenter.register(sheet(100.0, 50.0, 400.0));

    presenter.set_draggable(id, false);

    assert!(presenter.view().events().is_empty());
    assert_eq!(presenter.config(id).map(|c| c.is_draggable()), Some(false));

    presenter.open(id, false);
    assert!(presenter
        .view()
        .events()
        .contains(&ViewEvent::DragEnabled { panel: id, enabled: false }));
}

#[test]
fn test_occluded_panel_ignores_drags() {
    let mut presenter = test_presenter();
    let below = open_now(&mut presenter, sheet(200.0, 100.0, 300.0));
    let _top = open_now(&mut presenter, sheet(150.0, 100.0, 300.0));

    pull(&mut presenter, below, DragPhase::Began, 50.0);

    assert_eq!(presenter.phase(below), Some(PanelPhase::Occluded));
    assert_eq!(presenter.state(below), Some(PanelState::new(150.0, 200.0)));
}

#[test]
fn test_drag_after_close_is_ignored() {
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, sheet(100.0, 50.0, 400.0));
    presenter.close(id, false);
    let closed = presenter.state(id);

    pull(&mut presenter, id, DragPhase::Changed, 60.0);

    assert_eq!(presenter.state(id), closed);
    assert_eq!(presenter.phase(id), Some(PanelPhase::Closed));
}

// ============================================================================
// Arbitration
// ============================================================================

#[test]
fn test_arbitration_each_gravity() {
    for gravity in Gravity::ALL {
        let scroll = FakeScroll::resting_at(Some(gravity.far_scroll_edge()));
        let config = PanelConfig::new(gravity, 200.0, 100.0..=300.0).with_scroll_surface(scroll.clone());
        let mut presenter = test_presenter();
        let id = open_now(&mut presenter, config);

        let toward_anchor = Vector::away_from(gravity, -300.0);
        let outcome = presenter
            .arbitrate(id, toward_anchor, OtherGesture::NestedScroll)
            .unwrap();
        assert!(outcome.drag_wins, "{:?} toward anchor", gravity);
        assert!(!outcome.simultaneous);
        assert!(!scroll.enabled.get(), "{:?} scroll should be disabled", gravity);

        let away = Vector::away_from(gravity, 300.0);
        let outcome = presenter
            .arbitrate(id, away, OtherGesture::NestedScroll)
            .unwrap();
        assert!(!outcome.drag_wins, "{:?} away from anchor", gravity);
        assert!(scroll.enabled.get());
    }
}

#[test]
fn test_arbitration_scroll_not_at_edge_keeps_scrolling() {
    let scroll = FakeScroll::resting_at(Some(ScrollEdge::Bottom));
    let config = sheet(200.0, 100.0, 300.0).with_scroll_surface(scroll.clone());
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, config);

    let outcome = presenter
        .arbitrate(id, Vector::new(0.0, 400.0), OtherGesture::NestedScroll)
        .unwrap();

    assert!(!outcome.drag_wins);
    assert!(scroll.enabled.get());

    scroll.at.set(Some(ScrollEdge::Top));
    let outcome = presenter
        .arbitrate(id, Vector::new(0.0, 400.0), OtherGesture::NestedScroll)
        .unwrap();
    assert!(outcome.drag_wins);
    assert!(!scroll.enabled.get());
}

#[test]
fn test_arbitration_unrelated_gesture_is_simultaneous() {
    let scroll = FakeScroll::resting_at(None);
    let config = sheet(200.0, 100.0, 300.0).with_scroll_surface(scroll);
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, config);

    let outcome = presenter
        .arbitrate(id, Vector::ZERO, OtherGesture::Unrelated)
        .unwrap();

    assert!(outcome.simultaneous);
    assert!(!outcome.drag_wins);
}

#[test]
fn test_arbitration_without_scroll_surface() {
    let mut presenter = test_presenter();
    let id = open_now(&mut presenter, sheet(200.0, 100.0, 300.0));

    assert!(presenter
        .arbitrate(id, Vector::new(0.0, 400.0), OtherGesture::NestedScroll)
        .is_none());
}
