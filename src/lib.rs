//! Drawer - edge-anchored sliding panels
//!
//! This crate provides the geometry and state engine for panels attached to
//! the edges of a host container: drag tracking, clamping and snapping,
//! open/close/resize transitions, and stacking of panels on the same edge.
//! Rendering, layout and animation stay with the host behind the `HostView`
//! and `AnimationRunner` traits.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod gesture;
pub mod headless;
pub mod messages;
pub mod observer;
pub mod panel;
pub mod presenter;
pub mod scenario;
pub mod snap;
pub mod stack;
pub mod tracing;
pub mod transition;
pub mod update;

// Re-export commonly used types
pub use config::DrawerSettings;
pub use geometry::{clamp, Gravity, Offset, Size, Vector};
pub use gesture::{DragEvent, DragPhase, ScrollSurface};
pub use messages::DrawerMsg;
pub use observer::DrawerObserver;
pub use panel::{PanelConfig, PanelId, PanelPhase, PanelState};
pub use presenter::Presenter;
pub use transition::{AnimationRunner, HostView, TransitionId, TransitionKind, TransitionTicket};
