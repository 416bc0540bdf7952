//! Panel presenter - stacks, resizing and transition orchestration
//!
//! The presenter owns every registered panel, the per-edge stacks and the
//! bookkeeping for in-flight transitions. Hosts drive it with explicit
//! open/close/change requests and decoded drag events; it answers by mutating
//! constraints through the `HostView`, starting transitions on the
//! `AnimationRunner` and notifying the `DrawerObserver`.
//!
//! Per-panel lifecycle:
//!
//! ```text
//! Closed -> Opening -> Open <-> Dragging -> Closing -> Closed
//!                       Open <-> Occluded
//! ```

use std::collections::HashMap;

use crate::config::DrawerSettings;
use crate::geometry::{clamp, Gravity, Offset, Vector};
use crate::gesture::{self, Arbitration, DragEvent, DragRequest, OtherGesture};
use crate::observer::DrawerObserver;
use crate::panel::{Constraints, Panel, PanelConfig, PanelId, PanelPhase, PanelState};
use crate::stack::StackLayout;
use crate::transition::{
    AnimationRunner, HostView, TransitionId, TransitionKind, TransitionTicket,
};

/// Work to run once a transition is visually committed
#[derive(Debug, Clone, Copy)]
enum Completion {
    Opened {
        panel: PanelId,
        occluded: Option<PanelId>,
        notify: bool,
    },
    Closed {
        panel: PanelId,
        notify: bool,
    },
    Resized {
        panel: PanelId,
        offset: Offset,
    },
    Faded,
}

/// Stack manager for edge-anchored panels
pub struct Presenter<V, A, O> {
    panels: HashMap<PanelId, Panel>,
    stacks: StackLayout,
    pending: HashMap<TransitionId, Completion>,
    settings: DrawerSettings,
    view: V,
    animator: A,
    observer: O,
    next_panel_id: u64,
    next_transition_id: u64,
}

impl<V, A, O> Presenter<V, A, O>
where
    V: HostView,
    A: AnimationRunner,
    O: DrawerObserver,
{
    pub fn new(view: V, animator: A, observer: O) -> Self {
        Self::with_settings(view, animator, observer, DrawerSettings::default())
    }

    pub fn with_settings(view: V, animator: A, observer: O, settings: DrawerSettings) -> Self {
        Self {
            panels: HashMap::new(),
            stacks: StackLayout::default(),
            pending: HashMap::new(),
            settings,
            view,
            animator,
            observer,
            next_panel_id: 1,
            next_transition_id: 1,
        }
    }

    // =========================================================================
    // Registration and queries
    // =========================================================================

    /// Register a panel; it starts closed
    pub fn register(&mut self, config: PanelConfig) -> PanelId {
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;
        tracing::debug!(panel = ?id, ?config, "registered panel");
        self.panels.insert(id, Panel::new(id, config));
        id
    }

    /// Drop a closed panel, returning its config
    pub fn unregister(&mut self, panel_id: PanelId) -> Option<PanelConfig> {
        match self.panels.get(&panel_id) {
            Some(panel) if panel.phase.is_presented() => {
                tracing::warn!(panel = ?panel_id, phase = ?panel.phase, "cannot unregister a presented panel");
                None
            }
            Some(_) => self.panels.remove(&panel_id).map(|panel| panel.config),
            None => None,
        }
    }

    pub fn panel(&self, panel_id: PanelId) -> Option<&Panel> {
        self.panels.get(&panel_id)
    }

    pub fn config(&self, panel_id: PanelId) -> Option<&PanelConfig> {
        self.panels.get(&panel_id).map(|panel| &panel.config)
    }

    /// Mutable config; use `set_draggable` for the draggable flag
    pub fn config_mut(&mut self, panel_id: PanelId) -> Option<&mut PanelConfig> {
        self.panels.get_mut(&panel_id).map(|panel| &mut panel.config)
    }

    pub fn state(&self, panel_id: PanelId) -> Option<PanelState> {
        self.panels.get(&panel_id).map(Panel::state)
    }

    pub fn phase(&self, panel_id: PanelId) -> Option<PanelPhase> {
        self.panels.get(&panel_id).map(Panel::phase)
    }

    pub fn alpha(&self, panel_id: PanelId) -> Option<f32> {
        self.panels.get(&panel_id).map(Panel::alpha)
    }

    /// Whether the panel sits in a stack (including while opening or closing)
    pub fn is_open(&self, panel_id: PanelId) -> bool {
        self.phase(panel_id).is_some_and(|phase| phase.is_presented())
    }

    /// Topmost panel on an edge
    pub fn visible_panel(&self, gravity: Gravity) -> Option<PanelId> {
        self.stacks.stack(gravity).top()
    }

    /// Panels on an edge, bottom to top
    pub fn panels(&self, gravity: Gravity) -> &[PanelId] {
        self.stacks.stack(gravity).panel_ids()
    }

    pub fn stacks(&self) -> &StackLayout {
        &self.stacks
    }

    pub fn settings(&self) -> &DrawerSettings {
        &self.settings
    }

    /// Number of animated transitions not yet completed
    pub fn pending_transitions(&self) -> usize {
        self.pending.len()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Update the draggable flag and the live drag listener together
    pub fn set_draggable(&mut self, panel_id: PanelId, is_draggable: bool) {
        let Some(panel) = self.panels.get_mut(&panel_id) else {
            tracing::warn!(panel = ?panel_id, "set_draggable on unknown panel");
            return;
        };
        panel.config.set_draggable(is_draggable);
        if panel.listening {
            self.view.set_drag_enabled(panel_id, is_draggable);
        }
        tracing::debug!(panel = ?panel_id, is_draggable, "draggable changed");
    }

    // =========================================================================
    // Open
    // =========================================================================

    pub fn open(&mut self, panel_id: PanelId, animated: bool) {
        self.open_with(panel_id, animated, true);
    }

    /// Present a panel on its edge, occluding the current topmost one.
    ///
    /// # Panics
    ///
    /// If the panel is not registered or is already presented.
    pub fn open_with(&mut self, panel_id: PanelId, animated: bool, notify: bool) {
        let Some(panel) = self.panels.get(&panel_id) else {
            panic!("open: panel {:?} is not registered", panel_id);
        };
        assert!(
            !panel.phase.is_presented(),
            "open: panel {:?} is already presented ({:?})",
            panel_id,
            panel.phase
        );

        let gravity = panel.config.gravity;
        let initial_offset = panel.config.initial_offset;
        let is_draggable = panel.config.is_draggable();
        let current = self.active_top(gravity);

        tracing::debug!(panel = ?panel_id, ?gravity, initial_offset, occluding = ?current, animated, "opening panel");

        if notify {
            self.observer.will_open(panel_id);
        }

        self.view.attach(panel_id, gravity);
        self.view.set_drag_enabled(panel_id, is_draggable);

        // Sized to the initial offset, then pushed fully behind the anchor
        if let Some(panel) = self.panels.get_mut(&panel_id) {
            panel.listening = true;
            panel.alpha = 1.0;
            panel.before_state = None;
            panel.phase = PanelPhase::Opening;
            panel.constraints = Constraints {
                size: initial_offset,
                edge: 0.0,
            };
            panel.constraints.set_closed();
        }
        self.push_geometry(panel_id);

        if let Some(current_id) = current {
            self.occlude(current_id, initial_offset);
        }

        self.view.layout();
        self.stacks.stack_mut(gravity).push(panel_id);

        if let Some(panel) = self.panels.get_mut(&panel_id) {
            panel.constraints.set_opened(initial_offset, initial_offset);
        }
        self.push_geometry(panel_id);

        self.run(
            panel_id,
            TransitionKind::Open,
            animated,
            Completion::Opened {
                panel: panel_id,
                occluded: current,
                notify,
            },
        );
    }

    /// Snapshot the current topmost panel and pull it back to `limit`
    fn occlude(&mut self, panel_id: PanelId, limit: Offset) {
        let Some(panel) = self.panels.get_mut(&panel_id) else {
            return;
        };
        let before = panel.state();
        panel.before_state = Some(before);
        panel.phase = PanelPhase::Occluded;
        tracing::debug!(panel = ?panel_id, ?before, limit, "occluding panel");

        if before.offset > limit {
            panel.constraints.set_opened(limit, before.size);
            self.push_geometry(panel_id);
        }
    }

    // =========================================================================
    // Close
    // =========================================================================

    pub fn close(&mut self, panel_id: PanelId, animated: bool) {
        self.close_with(panel_id, animated, true);
    }

    /// Slide a panel out, restoring the panel it occluded
    pub fn close_with(&mut self, panel_id: PanelId, animated: bool, notify: bool) {
        let Some(panel) = self.panels.get(&panel_id) else {
            tracing::warn!(panel = ?panel_id, "close on unknown panel");
            return;
        };
        match panel.phase {
            PanelPhase::Closed | PanelPhase::Closing => {
                tracing::debug!(panel = ?panel_id, phase = ?panel.phase, "close ignored");
                return;
            }
            _ => {}
        }

        let gravity = panel.config.gravity;
        let is_top = self.active_top(gravity) == Some(panel_id);
        let restoring = if is_top {
            self.active_below(gravity, panel_id)
        } else {
            None
        };

        tracing::debug!(panel = ?panel_id, ?gravity, ?restoring, animated, "closing panel");

        // A panel closing from the middle of a stack leaves the one beneath it
        // occluded by whatever is still on top.
        if let Some(below_id) = restoring {
            self.restore(below_id);
        }

        if notify {
            self.observer.will_close(panel_id);
        }

        if let Some(panel) = self.panels.get_mut(&panel_id) {
            panel.phase = PanelPhase::Closing;
            panel.before_state = None;
            panel.constraints.set_closed();
        }
        self.push_geometry(panel_id);

        self.run(
            panel_id,
            TransitionKind::Close,
            animated,
            Completion::Closed {
                panel: panel_id,
                notify,
            },
        );
    }

    /// Put an occluded panel back to its snapshot and fade it in
    fn restore(&mut self, panel_id: PanelId) {
        let Some(panel) = self.panels.get_mut(&panel_id) else {
            return;
        };
        let Some(before) = panel.before_state.take() else {
            return;
        };
        panel.constraints.set_opened(before.offset, before.size);
        if panel.phase == PanelPhase::Occluded {
            panel.phase = PanelPhase::Open;
        }
        tracing::debug!(panel = ?panel_id, ?before, "restoring panel");

        self.push_geometry(panel_id);
        self.fade(panel_id, 1.0);
    }

    // =========================================================================
    // Change
    // =========================================================================

    /// Resize a panel.
    ///
    /// `clamped == false` is live tracking: the size is clamped but a closable
    /// panel's offset may sink below the lower bound. `clamped == true`
    /// settles: closes below half the lower bound, otherwise snaps and pins the
    /// offset to the resulting size.
    pub fn change(&mut self, panel_id: PanelId, offset: Offset, clamped: bool, animated: bool) {
        let Some(panel) = self.panels.get_mut(&panel_id) else {
            tracing::warn!(panel = ?panel_id, "change on unknown panel");
            return;
        };
        if matches!(panel.phase, PanelPhase::Closed | PanelPhase::Closing) {
            tracing::debug!(panel = ?panel_id, phase = ?panel.phase, "change ignored");
            return;
        }

        let config = &panel.config;
        let (min, max) = (config.min_size(), config.max_size());

        if clamped && config.is_closable && offset < config.close_threshold() {
            tracing::debug!(panel = ?panel_id, offset, threshold = config.close_threshold(), "settled below close threshold");
            self.close(panel_id, true);
            return;
        }

        let mut size = clamp(offset, min, max);
        let adjusted_offset = if clamped {
            if let Some(adjust) = &config.adjust_range {
                size = clamp(adjust(size), min, max);
            }
            size
        } else if config.is_closable {
            offset.min(max)
        } else {
            clamp(offset, min, max)
        };

        panel.constraints.set_opened(adjusted_offset, size);
        if matches!(panel.phase, PanelPhase::Open | PanelPhase::Dragging) {
            panel.phase = if clamped {
                PanelPhase::Open
            } else {
                PanelPhase::Dragging
            };
        }

        if clamped {
            tracing::debug!(panel = ?panel_id, requested = offset, offset = adjusted_offset, size, animated, "settling panel");
        } else {
            tracing::trace!(panel = ?panel_id, requested = offset, offset = adjusted_offset, size, "tracking panel");
        }

        self.push_geometry(panel_id);
        self.run(
            panel_id,
            TransitionKind::Resize,
            animated,
            Completion::Resized {
                panel: panel_id,
                offset: adjusted_offset,
            },
        );
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Feed one decoded drag event for a panel
    pub fn handle_drag(&mut self, panel_id: PanelId, event: &DragEvent) {
        let Some(panel) = self.panels.get_mut(&panel_id) else {
            tracing::warn!(panel = ?panel_id, "drag on unknown panel");
            return;
        };
        if !panel.accepts_drag() {
            tracing::trace!(panel = ?panel_id, "drag ignored, listener disabled");
            return;
        }
        if !matches!(
            panel.phase,
            PanelPhase::Opening | PanelPhase::Open | PanelPhase::Dragging
        ) {
            tracing::debug!(panel = ?panel_id, phase = ?panel.phase, "drag ignored");
            return;
        }

        match gesture::translate(panel.config.gravity, panel.offset(), event) {
            DragRequest::Track(offset) => self.change(panel_id, offset, false, false),
            DragRequest::Settle(offset) => self.change(panel_id, offset, true, true),
            DragRequest::Ignore => {
                if panel.phase == PanelPhase::Dragging {
                    panel.phase = PanelPhase::Open;
                }
                tracing::debug!(panel = ?panel_id, "drag cancelled");
            }
        }
    }

    /// Decide between the panel drag and its nested scroll surface
    pub fn arbitrate(
        &self,
        panel_id: PanelId,
        velocity: Vector,
        other: OtherGesture,
    ) -> Option<Arbitration> {
        let panel = self.panels.get(&panel_id)?;
        let outcome = gesture::arbitrate(&panel.config, velocity, other);
        if let Some(arbitration) = outcome {
            tracing::trace!(panel = ?panel_id, ?velocity, ?other, ?arbitration, "arbitrated drag");
        }
        outcome
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Report that the host finished animating a transition.
    ///
    /// Unknown or already-completed ids are ignored.
    pub fn complete(&mut self, transition_id: TransitionId) {
        match self.pending.remove(&transition_id) {
            Some(completion) => self.finish(completion),
            None => tracing::debug!(id = ?transition_id, "stale transition completion"),
        }
    }

    fn run(&mut self, panel_id: PanelId, kind: TransitionKind, animated: bool, completion: Completion) {
        if animated {
            let id = TransitionId(self.next_transition_id);
            self.next_transition_id += 1;
            self.pending.insert(id, completion);
            self.animator.run_animated(TransitionTicket {
                id,
                panel: panel_id,
                kind,
                duration: self.settings.animation.duration(kind),
            });
        } else {
            self.view.layout();
            self.finish(completion);
        }
    }

    fn fade(&mut self, panel_id: PanelId, alpha: f32) {
        if let Some(panel) = self.panels.get_mut(&panel_id) {
            panel.alpha = alpha;
        }
        self.view.set_alpha(panel_id, alpha);
        self.run(panel_id, TransitionKind::Fade, true, Completion::Faded);
    }

    fn finish(&mut self, completion: Completion) {
        match completion {
            Completion::Opened {
                panel,
                occluded,
                notify,
            } => {
                if let Some(p) = self.panels.get_mut(&panel) {
                    if p.phase == PanelPhase::Opening {
                        p.phase = PanelPhase::Open;
                    }
                }
                if notify {
                    self.observer.did_open(panel);
                }
                // Skip the dim if the sibling was restored in the meantime
                let still_occluded = occluded.filter(|id| self.phase(*id) == Some(PanelPhase::Occluded));
                if let Some(occluded) = still_occluded {
                    let alpha = self.settings.occluded_alpha;
                    self.fade(occluded, alpha);
                }
            }
            Completion::Closed { panel, notify } => {
                let Some(p) = self.panels.get_mut(&panel) else {
                    return;
                };
                if p.phase != PanelPhase::Closing {
                    tracing::debug!(panel = ?panel, phase = ?p.phase, "close completion ignored");
                    return;
                }
                p.phase = PanelPhase::Closed;
                p.listening = false;
                p.before_state = None;
                let gravity = p.config.gravity;

                self.view.set_drag_enabled(panel, false);
                self.view.detach(panel);
                self.stacks.stack_mut(gravity).remove(panel);
                tracing::debug!(panel = ?panel, ?gravity, "panel closed");

                if notify {
                    self.observer.did_close(panel);
                }
            }
            Completion::Resized { panel, offset } => {
                self.observer.did_change_size(panel, offset);
            }
            Completion::Faded => {}
        }
    }

    /// Topmost panel on an edge that is not already on its way out
    fn active_top(&self, gravity: Gravity) -> Option<PanelId> {
        self.stacks
            .stack(gravity)
            .panel_ids()
            .iter()
            .rev()
            .copied()
            .find(|id| self.phase(*id) != Some(PanelPhase::Closing))
    }

    /// Nearest panel beneath `panel_id` that is not on its way out
    fn active_below(&self, gravity: Gravity, panel_id: PanelId) -> Option<PanelId> {
        let ids = self.stacks.stack(gravity).panel_ids();
        let index = ids.iter().position(|id| *id == panel_id)?;
        ids[..index]
            .iter()
            .rev()
            .copied()
            .find(|id| self.phase(*id) != Some(PanelPhase::Closing))
    }

    fn push_geometry(&mut self, panel_id: PanelId) {
        if let Some(panel) = self.panels.get(&panel_id) {
            self.view
                .apply_geometry(panel_id, panel.config.gravity, panel.state());
        }
    }
}

impl<V, O> Presenter<V, crate::transition::QueuedAnimator, O>
where
    V: HostView,
    O: DrawerObserver,
{
    /// Complete every queued animation, including ones started by
    /// completions (fades after open). Returns how many were completed.
    pub fn finish_animations(&mut self) -> usize {
        let mut completed = 0;
        while let Some(ticket) = self.animator.pop() {
            self.complete(ticket.id);
            completed += 1;
        }
        completed
    }
}
