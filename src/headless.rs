//! Headless host - records what a real view hierarchy would be asked to do
//!
//! Drives the simulator and the integration tests. `RecordingView` keeps both
//! the latest constraint targets and the geometry as of the last layout pass,
//! so callers can tell immediate commits from animated ones.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::geometry::{Gravity, Offset};
use crate::observer::DrawerObserver;
use crate::panel::{PanelId, PanelState};
use crate::transition::HostView;

/// One call made on the host view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewEvent {
    Attached { panel: PanelId, gravity: Gravity },
    Detached { panel: PanelId },
    Geometry { panel: PanelId, state: PanelState },
    Alpha { panel: PanelId, alpha: f32 },
    DragEnabled { panel: PanelId, enabled: bool },
    Layout,
}

#[derive(Debug, Default)]
pub struct RecordingView {
    events: Vec<ViewEvent>,
    targets: BTreeMap<PanelId, PanelState>,
    committed: BTreeMap<PanelId, PanelState>,
    alpha: BTreeMap<PanelId, f32>,
    drag_enabled: BTreeMap<PanelId, bool>,
    attached: BTreeSet<PanelId>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Latest geometry requested for a panel
    pub fn target(&self, panel: PanelId) -> Option<PanelState> {
        self.targets.get(&panel).copied()
    }

    /// Geometry as of the last synchronous layout pass
    pub fn committed(&self, panel: PanelId) -> Option<PanelState> {
        self.committed.get(&panel).copied()
    }

    pub fn alpha(&self, panel: PanelId) -> Option<f32> {
        self.alpha.get(&panel).copied()
    }

    pub fn drag_enabled(&self, panel: PanelId) -> bool {
        self.drag_enabled.get(&panel).copied().unwrap_or(false)
    }

    pub fn is_attached(&self, panel: PanelId) -> bool {
        self.attached.contains(&panel)
    }

    pub fn layout_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Layout))
            .count()
    }
}

impl HostView for RecordingView {
    fn attach(&mut self, panel: PanelId, gravity: Gravity) {
        self.attached.insert(panel);
        self.alpha.insert(panel, 1.0);
        self.events.push(ViewEvent::Attached { panel, gravity });
    }

    fn detach(&mut self, panel: PanelId) {
        self.attached.remove(&panel);
        self.targets.remove(&panel);
        self.committed.remove(&panel);
        self.alpha.remove(&panel);
        self.drag_enabled.remove(&panel);
        self.events.push(ViewEvent::Detached { panel });
    }

    fn apply_geometry(&mut self, panel: PanelId, _gravity: Gravity, state: PanelState) {
        self.targets.insert(panel, state);
        self.events.push(ViewEvent::Geometry { panel, state });
    }

    fn set_alpha(&mut self, panel: PanelId, alpha: f32) {
        self.alpha.insert(panel, alpha);
        self.events.push(ViewEvent::Alpha { panel, alpha });
    }

    fn set_drag_enabled(&mut self, panel: PanelId, enabled: bool) {
        self.drag_enabled.insert(panel, enabled);
        self.events.push(ViewEvent::DragEnabled { panel, enabled });
    }

    fn layout(&mut self) {
        self.committed = self.targets.clone();
        self.events.push(ViewEvent::Layout);
    }
}

/// One observer callback
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ObserverEvent {
    WillOpen { panel: PanelId },
    DidOpen { panel: PanelId },
    WillClose { panel: PanelId },
    DidClose { panel: PanelId },
    DidChangeSize { panel: PanelId, offset: Offset },
}

/// Observer that keeps every callback, also logging it
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Vec<ObserverEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ObserverEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<ObserverEvent> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, event: ObserverEvent) {
        tracing::debug!(?event, "observer");
        self.events.push(event);
    }
}

impl DrawerObserver for RecordingObserver {
    fn will_open(&mut self, panel: PanelId) {
        self.record(ObserverEvent::WillOpen { panel });
    }

    fn did_open(&mut self, panel: PanelId) {
        self.record(ObserverEvent::DidOpen { panel });
    }

    fn will_close(&mut self, panel: PanelId) {
        self.record(ObserverEvent::WillClose { panel });
    }

    fn did_close(&mut self, panel: PanelId) {
        self.record(ObserverEvent::DidClose { panel });
    }

    fn did_change_size(&mut self, panel: PanelId, offset: Offset) {
        self.record(ObserverEvent::DidChangeSize { panel, offset });
    }
}
