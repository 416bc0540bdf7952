//! Panel geometry and lifecycle state

use serde::Serialize;

use super::PanelConfig;
use crate::geometry::{Offset, Size};

/// Unique identifier for a registered panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PanelId(pub u64);

/// Geometry snapshot: extent along the gravity axis and far-edge distance
///
/// A fully open panel has `offset == size`. `offset < size` means part of the
/// panel is pushed behind the anchor edge (or behind a sibling).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelState {
    pub offset: Offset,
    pub size: Size,
}

impl PanelState {
    pub fn new(offset: Offset, size: Size) -> Self {
        Self { offset, size }
    }
}

/// Constraint constants the host realizes on screen
///
/// `size` is the extent constraint; `edge` is how far the panel's anchored
/// edge sits behind the host's anchor edge. Offset is derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constraints {
    pub size: Size,
    pub edge: f64,
}

impl Constraints {
    pub fn offset(&self) -> Offset {
        self.size - self.edge
    }

    pub fn state(&self) -> PanelState {
        PanelState::new(self.offset(), self.size)
    }

    /// Far edge at `offset` from the anchor with extent `size`
    pub fn set_opened(&mut self, offset: Offset, size: Size) {
        self.size = size;
        self.edge = size - offset;
    }

    /// Fully behind the anchor edge, travelling exactly the current size
    pub fn set_closed(&mut self) {
        let size = self.size;
        self.set_opened(-size, size);
    }
}

/// Lifecycle of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PanelPhase {
    Closed,
    Opening,
    Open,
    Dragging,
    /// Covered by a later panel on the same edge
    Occluded,
    Closing,
}

impl PanelPhase {
    /// Whether the panel currently sits in a stack
    pub fn is_presented(&self) -> bool {
        !matches!(self, PanelPhase::Closed)
    }
}

/// A registered panel
#[derive(Debug)]
pub struct Panel {
    pub id: PanelId,
    pub config: PanelConfig,
    pub(crate) constraints: Constraints,
    pub(crate) phase: PanelPhase,
    /// Geometry before a sibling was stacked on top; only set while occluded
    pub(crate) before_state: Option<PanelState>,
    pub(crate) alpha: f32,
    /// Host drag listener installed (between open and close)
    pub(crate) listening: bool,
}

impl Panel {
    pub fn new(id: PanelId, config: PanelConfig) -> Self {
        Self {
            id,
            config,
            constraints: Constraints::default(),
            phase: PanelPhase::Closed,
            before_state: None,
            alpha: 1.0,
            listening: false,
        }
    }

    pub fn state(&self) -> PanelState {
        self.constraints.state()
    }

    pub fn offset(&self) -> Offset {
        self.constraints.offset()
    }

    pub fn size(&self) -> Size {
        self.constraints.size
    }

    pub fn constraints(&self) -> Constraints {
        self.constraints
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn before_state(&self) -> Option<PanelState> {
        self.before_state
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Drag events are delivered only while the listener is installed and enabled
    pub fn accepts_drag(&self) -> bool {
        self.listening && self.config.is_draggable()
    }
}
