//! Engine settings persistence
//!
//! Stores tunables in `~/.config/drawer/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::panel::DEFAULT_VELOCITY_THRESHOLD;
use crate::transition::TransitionKind;

/// Engine-wide settings that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerSettings {
    #[serde(default)]
    pub animation: AnimationSettings,

    /// Opacity of a panel while another panel covers it on the same edge
    #[serde(default = "default_occluded_alpha")]
    pub occluded_alpha: f32,

    /// Flick velocity used by panels built from settings
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f64,
}

/// Transition durations in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Open and close
    #[serde(default = "default_normal_ms")]
    pub normal_ms: u64,
    /// Drag settle and resize
    #[serde(default = "default_snap_ms")]
    pub snap_ms: u64,
    /// Occlusion dimming
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

fn default_occluded_alpha() -> f32 {
    0.0
}

fn default_velocity_threshold() -> f64 {
    DEFAULT_VELOCITY_THRESHOLD
}

fn default_normal_ms() -> u64 {
    300
}

fn default_snap_ms() -> u64 {
    200
}

fn default_fade_ms() -> u64 {
    100
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            normal_ms: default_normal_ms(),
            snap_ms: default_snap_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

impl AnimationSettings {
    pub fn duration(&self, kind: TransitionKind) -> Duration {
        let ms = match kind {
            TransitionKind::Open | TransitionKind::Close => self.normal_ms,
            TransitionKind::Resize => self.snap_ms,
            TransitionKind::Fade => self.fade_ms,
        };
        Duration::from_millis(ms)
    }
}

impl Default for DrawerSettings {
    fn default() -> Self {
        Self {
            animation: AnimationSettings::default(),
            occluded_alpha: default_occluded_alpha(),
            velocity_threshold: default_velocity_threshold(),
        }
    }
}

impl DrawerSettings {
    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("Loaded config from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save settings to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save settings to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
