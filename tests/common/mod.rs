//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use drawer::geometry::ScrollEdge;
use drawer::headless::{ObserverEvent, RecordingObserver, RecordingView};
use drawer::transition::QueuedAnimator;
use drawer::{DragEvent, DragPhase, Gravity, PanelConfig, PanelId, Presenter, ScrollSurface, Vector};

pub type TestPresenter = Presenter<RecordingView, QueuedAnimator, RecordingObserver>;

/// Presenter over the headless host with default settings
pub fn test_presenter() -> TestPresenter {
    Presenter::new(
        RecordingView::new(),
        QueuedAnimator::new(),
        RecordingObserver::new(),
    )
}

/// Register and open without animation, then drop callbacks and view events
pub fn open_now(presenter: &mut TestPresenter, config: PanelConfig) -> PanelId {
    let id = presenter.register(config);
    presenter.open(id, false);
    presenter.observer_mut().take();
    presenter.view_mut().clear_events();
    id
}

/// Resizable bottom panel
pub fn sheet(initial_offset: f64, min: f64, max: f64) -> PanelConfig {
    PanelConfig::new(Gravity::Bottom, initial_offset, min..=max)
}

/// Drag event with a raw screen translation
pub fn drag(presenter: &mut TestPresenter, panel: PanelId, phase: DragPhase, dx: f64, dy: f64) {
    let event = DragEvent::new(phase, Vector::new(dx, dy), Vector::ZERO);
    presenter.handle_drag(panel, &event);
}

/// Drag event pulling `amount` units away from the panel's anchor edge
pub fn pull(presenter: &mut TestPresenter, panel: PanelId, phase: DragPhase, amount: f64) {
    let gravity = presenter.config(panel).map(|c| c.gravity).unwrap();
    let event = DragEvent::new(phase, Vector::away_from(gravity, amount), Vector::ZERO);
    presenter.handle_drag(panel, &event);
}

pub fn callbacks(presenter: &mut TestPresenter) -> Vec<ObserverEvent> {
    presenter.observer_mut().take()
}

/// Scroll surface resting at a fixed edge, remembering its enabled flag
pub struct FakeScroll {
    pub at: Cell<Option<ScrollEdge>>,
    pub enabled: Cell<bool>,
}

impl FakeScroll {
    pub fn resting_at(edge: Option<ScrollEdge>) -> Rc<Self> {
        Rc::new(Self {
            at: Cell::new(edge),
            enabled: Cell::new(true),
        })
    }
}

impl ScrollSurface for FakeScroll {
    fn is_at_edge(&self, edge: ScrollEdge) -> bool {
        self.at.get() == Some(edge)
    }

    fn set_scroll_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}
