//! Update function for the Elm-style architecture
//!
//! Dispatches `DrawerMsg`s to the presenter.

use crate::messages::DrawerMsg;
use crate::observer::DrawerObserver;
use crate::presenter::Presenter;
use crate::transition::{AnimationRunner, HostView};

/// Main update function
pub fn update<V, A, O>(presenter: &mut Presenter<V, A, O>, msg: DrawerMsg)
where
    V: HostView,
    A: AnimationRunner,
    O: DrawerObserver,
{
    tracing::trace!(?msg, "update");
    match msg {
        DrawerMsg::Open {
            panel,
            animated,
            notify,
        } => presenter.open_with(panel, animated, notify),

        DrawerMsg::Close {
            panel,
            animated,
            notify,
        } => presenter.close_with(panel, animated, notify),

        DrawerMsg::Change {
            panel,
            offset,
            clamped,
            animated,
        } => presenter.change(panel, offset, clamped, animated),

        DrawerMsg::Drag { panel, event } => presenter.handle_drag(panel, &event),

        DrawerMsg::Arbitrate {
            panel,
            velocity,
            other,
        } => {
            // Applies the scroll toggle; the outcome itself is dropped
            presenter.arbitrate(panel, velocity, other);
        }

        DrawerMsg::SetDraggable { panel, draggable } => presenter.set_draggable(panel, draggable),

        DrawerMsg::TransitionFinished(id) => presenter.complete(id),
    }
}
