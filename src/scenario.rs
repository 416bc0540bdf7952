//! Scripted sessions for the simulator
//!
//! A scenario declares named panels and a list of steps. Steps are turned
//! into `DrawerMsg`s and replayed against the headless host; after each step
//! a `Frame` records panel geometry and the observer callbacks it caused.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::DrawerSettings;
use crate::geometry::{Gravity, Offset, Size, Vector};
use crate::gesture::{DragEvent, DragPhase};
use crate::headless::{ObserverEvent, RecordingObserver, RecordingView};
use crate::messages::DrawerMsg;
use crate::panel::{PanelConfig, PanelId, PanelPhase};
use crate::presenter::Presenter;
use crate::snap::Detents;
use crate::transition::QueuedAnimator;
use crate::update::update;

/// Serializable panel declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelEntry {
    pub name: String,
    #[serde(default = "default_gravity")]
    pub gravity: Gravity,
    pub initial_offset: Offset,
    /// `[min, max]`; defaults to `[initial_offset, initial_offset]`
    #[serde(default)]
    pub allowed_range: Option<(Size, Size)>,
    #[serde(default)]
    pub detents: Vec<Size>,
    #[serde(default = "default_true")]
    pub draggable: bool,
    #[serde(default)]
    pub closable: bool,
    #[serde(default)]
    pub velocity_threshold: Option<f64>,
}

fn default_gravity() -> Gravity {
    Gravity::Bottom
}

fn default_true() -> bool {
    true
}

impl PanelEntry {
    pub fn to_config(&self, settings: &DrawerSettings) -> PanelConfig {
        let (min, max) = self
            .allowed_range
            .unwrap_or((self.initial_offset, self.initial_offset));
        let mut config = PanelConfig::new(self.gravity, self.initial_offset, min..=max)
            .with_draggable(self.draggable)
            .with_closable(self.closable)
            .with_velocity_threshold(self.velocity_threshold.unwrap_or(settings.velocity_threshold));
        if !self.detents.is_empty() {
            let detents = Detents::new(self.detents.iter().copied()).within(min, max);
            config.adjust_range = Some(detents.into_adjust_fn());
        }
        config
    }
}

/// One scripted input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Open {
        panel: String,
        #[serde(default = "default_true")]
        animated: bool,
        #[serde(default = "default_true")]
        notify: bool,
    },
    Close {
        panel: String,
        #[serde(default = "default_true")]
        animated: bool,
        #[serde(default = "default_true")]
        notify: bool,
    },
    Change {
        panel: String,
        offset: Offset,
        #[serde(default = "default_true")]
        clamped: bool,
        #[serde(default = "default_true")]
        animated: bool,
    },
    Drag {
        panel: String,
        phase: DragPhase,
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
        #[serde(default)]
        vx: f64,
        #[serde(default)]
        vy: f64,
    },
    SetDraggable {
        panel: String,
        draggable: bool,
    },
    /// Let the animation runtime complete everything in flight
    FinishAnimations,
}

impl Step {
    fn panel_name(&self) -> Option<&str> {
        match self {
            Step::Open { panel, .. }
            | Step::Close { panel, .. }
            | Step::Change { panel, .. }
            | Step::Drag { panel, .. }
            | Step::SetDraggable { panel, .. } => Some(panel.as_str()),
            Step::FinishAnimations => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub panels: Vec<PanelEntry>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Geometry of one panel after a step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelSnapshot {
    pub name: String,
    pub phase: PanelPhase,
    pub offset: Offset,
    pub size: Size,
    pub alpha: f32,
}

/// Outcome of one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub step: usize,
    pub input: String,
    pub panels: Vec<PanelSnapshot>,
    pub callbacks: Vec<ObserverEvent>,
}

type SimPresenter = Presenter<RecordingView, QueuedAnimator, RecordingObserver>;

impl Scenario {
    /// Load from a `.json` file, or YAML for any other extension
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Invalid scenario: {}", e))
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| format!("Invalid scenario: {}", e))
    }

    /// Replay every step, returning one frame per step
    pub fn run(&self, settings: &DrawerSettings) -> Result<Vec<Frame>, String> {
        let mut presenter = Presenter::with_settings(
            RecordingView::new(),
            QueuedAnimator::new(),
            RecordingObserver::new(),
            settings.clone(),
        );

        let mut ids: HashMap<&str, PanelId> = HashMap::new();
        let mut names: Vec<(PanelId, &str)> = Vec::new();
        for entry in &self.panels {
            if ids.contains_key(entry.name.as_str()) {
                return Err(format!("Duplicate panel name '{}'", entry.name));
            }
            let id = presenter.register(entry.to_config(settings));
            ids.insert(&entry.name, id);
            names.push((id, &entry.name));
        }

        let mut frames = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            let panel = match step.panel_name() {
                Some(name) => Some(
                    *ids.get(name)
                        .ok_or_else(|| format!("Step {}: unknown panel '{}'", index, name))?,
                ),
                None => None,
            };

            tracing::debug!(step = index, ?step, "replaying step");
            match panel.and_then(|panel| to_msg(step, panel)) {
                Some(msg) => {
                    if let DrawerMsg::Open { panel, .. } = msg {
                        if presenter.is_open(panel) {
                            return Err(format!("Step {}: panel is already open", index));
                        }
                    }
                    update(&mut presenter, msg);
                }
                None => finish_animations(&mut presenter),
            }

            frames.push(Frame {
                step: index,
                input: format!("{:?}", step),
                panels: snapshot(&presenter, &names),
                callbacks: presenter.observer_mut().take(),
            });
        }
        Ok(frames)
    }
}

/// Message for a step aimed at `panel`; `None` for `FinishAnimations`
fn to_msg(step: &Step, panel: PanelId) -> Option<DrawerMsg> {
    let msg = match *step {
        Step::Open {
            animated, notify, ..
        } => DrawerMsg::Open {
            panel,
            animated,
            notify,
        },
        Step::Close {
            animated, notify, ..
        } => DrawerMsg::Close {
            panel,
            animated,
            notify,
        },
        Step::Change {
            offset,
            clamped,
            animated,
            ..
        } => DrawerMsg::Change {
            panel,
            offset,
            clamped,
            animated,
        },
        Step::Drag {
            phase,
            dx,
            dy,
            vx,
            vy,
            ..
        } => DrawerMsg::Drag {
            panel,
            event: DragEvent::new(phase, Vector::new(dx, dy), Vector::new(vx, vy)),
        },
        Step::SetDraggable { draggable, .. } => DrawerMsg::SetDraggable { panel, draggable },
        Step::FinishAnimations => return None,
    };
    Some(msg)
}

/// Complete queued tickets through `update`, including follow-up fades
fn finish_animations(presenter: &mut SimPresenter) {
    while let Some(ticket) = presenter.animator_mut().pop() {
        update(presenter, DrawerMsg::TransitionFinished(ticket.id));
    }
}

fn snapshot(presenter: &SimPresenter, names: &[(PanelId, &str)]) -> Vec<PanelSnapshot> {
    names
        .iter()
        .filter_map(|&(id, name)| {
            let panel = presenter.panel(id)?;
            Some(PanelSnapshot {
                name: name.to_string(),
                phase: panel.phase(),
                offset: panel.offset(),
                size: panel.size(),
                alpha: panel.alpha(),
            })
        })
        .collect()
}
