//! Panel model - configuration and geometry for one edge-anchored panel
//!
//! ## Architecture
//!
//! - `PanelConfig`: per-panel policy (gravity, allowed range, snapping, flags)
//! - `PanelState`: `{ offset, size }` snapshot of a panel's geometry
//! - `Constraints`: the two constraint constants geometry is derived from
//! - `Panel`: a registered panel (config + constraints + lifecycle phase)
//!
//! Panels are owned by the `Presenter` and referred to by `PanelId`.

mod config;
mod state;

pub use config::{AdjustFn, PanelConfig, DEFAULT_VELOCITY_THRESHOLD};
pub use state::{Constraints, Panel, PanelId, PanelPhase, PanelState};
