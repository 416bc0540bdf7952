//! Gesture translation and nested-scroll arbitration
//!
//! The host decodes its pan recognizer into `DragEvent`s (translation since
//! the previous event, instantaneous velocity, phase). This module turns them
//! into offset requests for the presenter and decides, per event, whether the
//! panel drag or a nested scroll surface owns the gesture.

use serde::{Deserialize, Serialize};

use crate::geometry::{Gravity, Offset, ScrollEdge, Vector};
use crate::panel::PanelConfig;

/// Phase of a single-finger drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One decoded drag event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragEvent {
    pub phase: DragPhase,
    /// Screen-space translation since the previous event
    #[serde(default)]
    pub translation: Vector,
    /// Screen-space velocity in points per second
    #[serde(default)]
    pub velocity: Vector,
}

impl DragEvent {
    pub fn new(phase: DragPhase, translation: Vector, velocity: Vector) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }
}

/// Offset change requested by a drag event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragRequest {
    /// Live tracking: unclamped, immediate
    Track(Offset),
    /// Gesture ended: clamped, animated, may close
    Settle(Offset),
    /// Nothing to do (cancelled gesture)
    Ignore,
}

/// Translate a drag event against the panel's current offset
pub fn translate(gravity: Gravity, current_offset: Offset, event: &DragEvent) -> DragRequest {
    let offset = current_offset + gravity.edge_delta(event.translation);
    match event.phase {
        DragPhase::Began | DragPhase::Changed => DragRequest::Track(offset),
        DragPhase::Ended => DragRequest::Settle(offset),
        DragPhase::Cancelled => DragRequest::Ignore,
    }
}

/// Scrollable content nested inside a panel
///
/// Methods take `&self`; implementations hold their own interior state.
pub trait ScrollSurface {
    /// Whether the content rests against `edge` (nothing more to scroll there)
    fn is_at_edge(&self, edge: ScrollEdge) -> bool;

    /// Enable or suppress the surface's own scrolling
    fn set_scroll_enabled(&self, enabled: bool);
}

/// The gesture competing with the panel drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherGesture {
    /// The nested scroll surface's own pan
    NestedScroll,
    /// Anything else (taps, unrelated recognizers)
    Unrelated,
}

/// Outcome of arbitrating one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arbitration {
    /// Panel drag owns the gesture; nested scrolling is suppressed
    pub drag_wins: bool,
    /// Whether the panel drag may recognize alongside `other`
    pub simultaneous: bool,
}

/// Whether the panel drag beats the nested scroll for this velocity.
///
/// The drag wins only when it moves toward the anchor edge (collapsing the
/// panel) while the content rests against its far edge:
///
/// | gravity | content at | drag velocity |
/// |---------|------------|---------------|
/// | bottom  | top        | vy > 0        |
/// | top     | bottom     | vy < 0        |
/// | left    | right      | vx < 0        |
/// | right   | left       | vx > 0        |
pub fn drag_wins(gravity: Gravity, surface: &dyn ScrollSurface, velocity: Vector) -> bool {
    gravity.edge_delta(velocity) < 0.0 && surface.is_at_edge(gravity.far_scroll_edge())
}

/// Arbitrate against `other`, toggling the nested surface's scrolling.
///
/// Returns `None` when the panel has no scroll surface: no arbitration, and
/// no simultaneous recognition.
pub fn arbitrate(config: &PanelConfig, velocity: Vector, other: OtherGesture) -> Option<Arbitration> {
    let surface = config.scroll_surface.as_ref()?;
    let drag_wins = drag_wins(config.gravity, surface.as_ref(), velocity);
    surface.set_scroll_enabled(!drag_wins);
    Some(Arbitration {
        drag_wins,
        simultaneous: other != OtherGesture::NestedScroll,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeScroll {
        at: Option<ScrollEdge>,
        enabled: Cell<bool>,
    }

    impl FakeScroll {
        fn resting_at(edge: Option<ScrollEdge>) -> Rc<Self> {
            Rc::new(Self {
                at: edge,
                enabled: Cell::new(true),
            })
        }
    }

    impl ScrollSurface for FakeScroll {
        fn is_at_edge(&self, edge: ScrollEdge) -> bool {
            self.at == Some(edge)
        }

        fn set_scroll_enabled(&self, enabled: bool) {
            self.enabled.set(enabled);
        }
    }

    fn event(phase: DragPhase, dx: f64, dy: f64) -> DragEvent {
        DragEvent::new(phase, Vector::new(dx, dy), Vector::ZERO)
    }

    #[test]
    fn test_translate_phases() {
        let began = translate(Gravity::Bottom, 100.0, &event(DragPhase::Began, 0.0, -10.0));
        assert_eq!(began, DragRequest::Track(110.0));

        let changed = translate(Gravity::Bottom, 110.0, &event(DragPhase::Changed, 0.0, 30.0));
        assert_eq!(changed, DragRequest::Track(80.0));

        let ended = translate(Gravity::Bottom, 80.0, &event(DragPhase::Ended, 0.0, 0.0));
        assert_eq!(ended, DragRequest::Settle(80.0));

        let cancelled = translate(Gravity::Bottom, 80.0, &event(DragPhase::Cancelled, 0.0, -50.0));
        assert_eq!(cancelled, DragRequest::Ignore);
    }

    #[test]
    fn test_translate_pull_into_view_increases_offset_for_every_gravity() {
        for gravity in Gravity::ALL {
            let pull = DragEvent::new(DragPhase::Changed, Vector::away_from(gravity, 50.0), Vector::ZERO);
            assert_eq!(
                translate(gravity, 100.0, &pull),
                DragRequest::Track(150.0),
                "{:?}",
                gravity
            );
        }
    }

    // Truth table: (gravity, content edge, velocity, expected drag_wins)
    #[test]
    fn test_drag_wins_truth_table() {
        use Gravity::*;
        use ScrollEdge as E;
        let cases = [
            (Bottom, Some(E::Top), Vector::new(0.0, 300.0), true),
            (Bottom, Some(E::Top), Vector::new(0.0, -300.0), false),
            (Bottom, None, Vector::new(0.0, 300.0), false),
            (Bottom, Some(E::Bottom), Vector::new(0.0, 300.0), false),
            (Top, Some(E::Bottom), Vector::new(0.0, -300.0), true),
            (Top, Some(E::Bottom), Vector::new(0.0, 300.0), false),
            (Top, Some(E::Top), Vector::new(0.0, -300.0), false),
            (Left, Some(E::Right), Vector::new(-300.0, 0.0), true),
            (Left, Some(E::Right), Vector::new(300.0, 0.0), false),
            (Left, Some(E::Left), Vector::new(-300.0, 0.0), false),
            (Right, Some(E::Left), Vector::new(300.0, 0.0), true),
            (Right, Some(E::Left), Vector::new(-300.0, 0.0), false),
            (Right, Some(E::Right), Vector::new(300.0, 0.0), false),
        ];
        for (gravity, at, velocity, expected) in cases {
            let surface = FakeScroll::resting_at(at);
            assert_eq!(
                drag_wins(gravity, &*surface, velocity),
                expected,
                "{:?} at {:?} with {:?}",
                gravity,
                at,
                velocity
            );
        }
    }

    #[test]
    fn test_zero_velocity_leaves_scroll_in_charge() {
        let surface = FakeScroll::resting_at(Some(ScrollEdge::Top));
        assert!(!drag_wins(Gravity::Bottom, &*surface, Vector::ZERO));
    }

    #[test]
    fn test_arbitrate_without_surface() {
        let config = PanelConfig::new(Gravity::Bottom, 200.0, 100.0..=300.0);
        assert_eq!(arbitrate(&config, Vector::new(0.0, 100.0), OtherGesture::Unrelated), None);
    }

    #[test]
    fn test_arbitrate_toggles_scrolling() {
        let surface = FakeScroll::resting_at(Some(ScrollEdge::Top));
        let config = PanelConfig::new(Gravity::Bottom, 200.0, 100.0..=300.0)
            .with_scroll_surface(surface.clone());

        let down = arbitrate(&config, Vector::new(0.0, 250.0), OtherGesture::NestedScroll).unwrap();
        assert!(down.drag_wins);
        assert!(!down.simultaneous);
        assert!(!surface.enabled.get());

        let up = arbitrate(&config, Vector::new(0.0, -250.0), OtherGesture::Unrelated).unwrap();
        assert!(!up.drag_wins);
        assert!(up.simultaneous);
        assert!(surface.enabled.get());
    }
}
