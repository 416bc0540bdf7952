//! Transition orchestration contracts
//!
//! The presenter mutates constraint constants through a `HostView` and then
//! either commits them immediately (layout pass + synchronous completion) or
//! hands a `TransitionTicket` to the host's `AnimationRunner`. The host reports
//! the end of an animation with `Presenter::complete(ticket.id)`; each ticket
//! completes at most once.

use std::collections::VecDeque;
use std::time::Duration;

use serde::Serialize;

use crate::geometry::Gravity;
use crate::panel::{PanelId, PanelState};

/// What a transition animates; determines its duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransitionKind {
    /// Panel sliding in (normal duration)
    Open,
    /// Panel sliding out (normal duration)
    Close,
    /// Drag settle or explicit resize (snap duration)
    Resize,
    /// Occlusion dimming and restore (fade duration)
    Fade,
}

/// Identifier handed to the host for one animated transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TransitionId(pub u64);

/// One animated transition the host must run and then complete
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionTicket {
    pub id: TransitionId,
    pub panel: PanelId,
    pub kind: TransitionKind,
    pub duration: Duration,
}

/// Host view hierarchy and geometry applier
///
/// `apply_geometry` is called for every constraint change, including once per
/// drag event, so it must be cheap.
pub trait HostView {
    /// Add the panel's view to the host, anchored to `gravity`
    fn attach(&mut self, panel: PanelId, gravity: Gravity);

    /// Remove the panel's view and its constraints
    fn detach(&mut self, panel: PanelId);

    /// Set size and edge constraints so the far edge sits at `state.offset`;
    /// cross-axis edges stay pinned to the host
    fn apply_geometry(&mut self, panel: PanelId, gravity: Gravity, state: PanelState);

    /// Target opacity; animated when followed by a `Fade` ticket
    fn set_alpha(&mut self, panel: PanelId, alpha: f32);

    /// Install (`true`) or suspend (`false`) the panel's drag listener
    fn set_drag_enabled(&mut self, panel: PanelId, enabled: bool);

    /// Commit pending geometry synchronously
    fn layout(&mut self);
}

/// Host animation runtime
pub trait AnimationRunner {
    /// Animate the pending changes for `ticket.panel` over `ticket.duration`.
    ///
    /// The host calls `Presenter::complete(ticket.id)` once the changes are
    /// visually committed. Starting a new ticket for the same panel does not
    /// cancel an earlier one; the runtime coalesces geometry to the latest
    /// target and still completes both.
    fn run_animated(&mut self, ticket: TransitionTicket);
}

/// Runner that queues tickets for the host loop to finish later
///
/// Useful for headless hosts and tests: drain the queue and feed each id back
/// into `Presenter::complete`.
#[derive(Debug, Default)]
pub struct QueuedAnimator {
    queue: VecDeque<TransitionTicket>,
    started: usize,
}

impl QueuedAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tickets started but not yet drained, oldest first
    pub fn pending(&self) -> impl Iterator<Item = &TransitionTicket> + '_ {
        self.queue.iter()
    }

    pub fn pop(&mut self) -> Option<TransitionTicket> {
        self.queue.pop_front()
    }

    pub fn drain(&mut self) -> Vec<TransitionTicket> {
        self.queue.drain(..).collect()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Total number of tickets ever started
    pub fn started(&self) -> usize {
        self.started
    }
}

impl AnimationRunner for QueuedAnimator {
    fn run_animated(&mut self, ticket: TransitionTicket) {
        tracing::trace!(id = ?ticket.id, panel = ?ticket.panel, kind = ?ticket.kind, "animation queued");
        self.started += 1;
        self.queue.push_back(ticket);
    }
}
