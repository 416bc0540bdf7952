//! Message types for the Elm-style architecture
//!
//! Every host input to the presenter can be expressed as a `DrawerMsg` and
//! routed through `update::update`.

use crate::geometry::{Offset, Vector};
use crate::gesture::{DragEvent, OtherGesture};
use crate::panel::PanelId;
use crate::transition::TransitionId;

/// Presenter input
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerMsg {
    /// Present a panel on its edge
    Open {
        panel: PanelId,
        animated: bool,
        notify: bool,
    },
    /// Slide a panel out
    Close {
        panel: PanelId,
        animated: bool,
        notify: bool,
    },
    /// Resize a panel (live when `clamped` is false, settle when true)
    Change {
        panel: PanelId,
        offset: Offset,
        clamped: bool,
        animated: bool,
    },
    /// Decoded drag event from the panel's listener
    Drag { panel: PanelId, event: DragEvent },
    /// Competing recognizer fired; toggles the nested scroll surface
    Arbitrate {
        panel: PanelId,
        velocity: Vector,
        other: OtherGesture,
    },
    /// Toggle dragging and the host listener
    SetDraggable { panel: PanelId, draggable: bool },
    /// Host animation runtime finished a transition
    TransitionFinished(TransitionId),
}

impl DrawerMsg {
    pub fn open(panel: PanelId, animated: bool) -> Self {
        DrawerMsg::Open {
            panel,
            animated,
            notify: true,
        }
    }

    pub fn close(panel: PanelId, animated: bool) -> Self {
        DrawerMsg::Close {
            panel,
            animated,
            notify: true,
        }
    }

    /// Panel the message targets, if any
    pub fn panel(&self) -> Option<PanelId> {
        match self {
            DrawerMsg::Open { panel, .. }
            | DrawerMsg::Close { panel, .. }
            | DrawerMsg::Change { panel, .. }
            | DrawerMsg::Drag { panel, .. }
            | DrawerMsg::Arbitrate { panel, .. }
            | DrawerMsg::SetDraggable { panel, .. } => Some(*panel),
            DrawerMsg::TransitionFinished(_) => None,
        }
    }
}
