//! Engine Settings
//!
//! This module defines the tunable constants of the scene engine.
//!
//! Every field has a default matching the stock LSF scene set, so an empty
//! JSON object (or no settings file at all) yields a working engine.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lsf::settings::EngineSettings;
//!
//! // Defaults
//! let settings = EngineSettings::default();
//!
//! // Partial override from JSON
//! let settings = EngineSettings::from_json(r#"{ "scenes_dir": "assets/scenes" }"#)?;
//!
//! // Struct update syntax
//! let settings = EngineSettings {
//!     camera_transition_speed: 6.0,
//!     ..Default::default()
//! };
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Configuration for [`SceneEngine`](crate::engine::SceneEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Directory scene documents are resolved against.
    pub scenes_dir: PathBuf,

    /// Upper bound on lights handed to the host per frame.
    ///
    /// The parser never drops lights; this only truncates
    /// [`SceneEngine::active_lights`](crate::engine::SceneEngine::active_lights).
    pub max_lights: usize,

    /// Camera transition speed in scene units per second.
    pub camera_transition_speed: f32,

    /// Base arc height for piece-move animations.
    pub piece_curve_height: f32,

    /// Minimum wall time between two applied
    /// [`SceneEngine::update`](crate::engine::SceneEngine::update) calls, in
    /// milliseconds; earlier calls are ignored. Zero applies every call.
    pub update_period_ms: u32,

    /// Path of the font sheet used by `spritetext` leaves.
    pub font_texture: String,

    /// Font sheet grid as `(columns, rows)`.
    pub font_grid: (u32, u32),
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            scenes_dir: PathBuf::from("scenes"),
            max_lights: 8,
            camera_transition_speed: 3.0,
            piece_curve_height: 0.5,
            update_period_ms: 100,
            font_texture: "./scenes/images/font.jpg".to_string(),
            font_grid: (10, 7),
        }
    }
}

impl EngineSettings {
    /// Decodes settings from JSON; absent fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes settings back to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Full path of a scene document inside [`scenes_dir`](Self::scenes_dir).
    #[must_use]
    pub fn scene_path(&self, name: &str) -> PathBuf {
        self.scenes_dir.join(name)
    }
}
