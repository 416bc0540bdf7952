//! Presentation callbacks

use crate::geometry::Offset;
use crate::panel::PanelId;

/// Receives lifecycle notifications from the presenter
///
/// All methods default to no-ops. Completion-driven callbacks (`did_*`) may
/// arrive after later operations on the same panel have started.
pub trait DrawerObserver {
    fn will_open(&mut self, _panel: PanelId) {}
    fn did_open(&mut self, _panel: PanelId) {}
    fn will_close(&mut self, _panel: PanelId) {}
    fn did_close(&mut self, _panel: PanelId) {}
    /// Reports the offset the panel was set to (after clamping and snapping)
    fn did_change_size(&mut self, _panel: PanelId, _offset: Offset) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DrawerObserver for NoopObserver {}

/// Observer that logs every callback at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DrawerObserver for TracingObserver {
    fn will_open(&mut self, panel: PanelId) {
        tracing::info!(?panel, "will open panel");
    }

    fn did_open(&mut self, panel: PanelId) {
        tracing::info!(?panel, "did open panel");
    }

    fn will_close(&mut self, panel: PanelId) {
        tracing::info!(?panel, "will close panel");
    }

    fn did_close(&mut self, panel: PanelId) {
        tracing::info!(?panel, "did close panel");
    }

    fn did_change_size(&mut self, panel: PanelId, offset: Offset) {
        tracing::info!(?panel, offset, "did change size of panel");
    }
}
