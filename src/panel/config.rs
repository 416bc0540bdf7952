//! Per-panel policy

use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;

use crate::geometry::{Gravity, Offset, Size};
use crate::gesture::ScrollSurface;

/// Speed (points per second) reserved for flick-to-close
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 200.0;

/// Post-clamp snap function, e.g. quantizing to detents
///
/// Must return the same value when fed its own output under unchanged bounds.
pub type AdjustFn = Rc<dyn Fn(Size) -> Size>;

/// Configuration for a single panel
///
/// Fields are public except `is_draggable`, which is tied to the host's drag
/// listener and must go through `Presenter::set_draggable`.
#[derive(Clone)]
pub struct PanelConfig {
    /// Edge the panel is attached to. Changing it while open is undefined.
    pub gravity: Gravity,

    /// Offset the panel opens to.
    ///
    /// The offset is the distance from the anchor edge of the host to the
    /// panel's far edge. For `Gravity::Bottom` it is the distance from the
    /// bottom of the host to the top of the panel.
    pub initial_offset: Offset,

    /// Sizes the panel is allowed to settle at (`min <= max`)
    pub allowed_range: RangeInclusive<Size>,

    /// Optional snap applied after clamping when a drag settles
    pub adjust_range: Option<AdjustFn>,

    /// When `true` the panel closes if it settles below half of the lower
    /// bound of `allowed_range`.
    pub is_closable: bool,

    /// Speed with which the user has to swipe to close without dragging all
    /// the way. Reserved; the engine does not act on it yet.
    pub velocity_threshold: f64,

    /// Nested scrollable content competing with the panel's drag gesture
    pub scroll_surface: Option<Rc<dyn ScrollSurface>>,

    is_draggable: bool,
}

impl PanelConfig {
    /// Resizable panel with the given bounds; draggable, not closable
    pub fn new(gravity: Gravity, initial_offset: Offset, allowed_range: RangeInclusive<Size>) -> Self {
        Self {
            gravity,
            initial_offset,
            allowed_range,
            adjust_range: None,
            is_closable: false,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            scroll_surface: None,
            is_draggable: true,
        }
    }

    /// Fixed-size panel: `allowed_range` collapses to `offset..=offset`
    pub fn fixed(gravity: Gravity, offset: Offset) -> Self {
        Self::new(gravity, offset, offset..=offset)
    }

    pub fn with_adjust_range(mut self, adjust: impl Fn(Size) -> Size + 'static) -> Self {
        self.adjust_range = Some(Rc::new(adjust));
        self
    }

    pub fn with_draggable(mut self, is_draggable: bool) -> Self {
        self.is_draggable = is_draggable;
        self
    }

    pub fn with_closable(mut self, is_closable: bool) -> Self {
        self.is_closable = is_closable;
        self
    }

    pub fn with_velocity_threshold(mut self, threshold: f64) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    pub fn with_scroll_surface(mut self, surface: Rc<dyn ScrollSurface>) -> Self {
        self.scroll_surface = Some(surface);
        self
    }

    pub fn is_draggable(&self) -> bool {
        self.is_draggable
    }

    /// Only the presenter flips this, together with the host listener
    pub(crate) fn set_draggable(&mut self, is_draggable: bool) {
        self.is_draggable = is_draggable;
    }

    pub fn min_size(&self) -> Size {
        *self.allowed_range.start()
    }

    pub fn max_size(&self) -> Size {
        *self.allowed_range.end()
    }

    /// Settling below this closes a closable panel
    pub fn close_threshold(&self) -> Offset {
        self.min_size() / 2.0
    }

    /// Whether the panel can change size at all
    pub fn is_resizable(&self) -> bool {
        self.min_size() < self.max_size()
    }
}

impl fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelConfig")
            .field("gravity", &self.gravity)
            .field("initial_offset", &self.initial_offset)
            .field("allowed_range", &self.allowed_range)
            .field("adjust_range", &self.adjust_range.is_some())
            .field("is_draggable", &self.is_draggable)
            .field("is_closable", &self.is_closable)
            .field("velocity_threshold", &self.velocity_threshold)
            .field("scroll_surface", &self.scroll_surface.is_some())
            .finish()
    }
}
