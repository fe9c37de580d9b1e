//! Engine Core Module
//!
//! This module contains [`SceneEngine`], the per-frame coordinator of a
//! loaded scene. It owns no window or graphics device: the host calls
//! [`update`](SceneEngine::update) with its wall-clock time and then
//! [`display`](SceneEngine::display) with its [`RenderContext`].
//!
//! # Responsibilities
//!
//! - **Loading**: parse documents from strings or from
//!   [`EngineSettings::scenes_dir`]; a failed load keeps the previous scene
//! - **Animation**: node playbacks, sprite animations, camera transitions
//! - **Cameras**: the active camera and animated switches between cameras
//! - **Display**: the scene graph, or a spinning placeholder until a scene
//!   is loaded
//!
//! # Example
//!
//! ```rust,ignore
//! use lsf::{EngineSettings, RecordingContext, SceneEngine, Timer};
//!
//! let mut engine = SceneEngine::new(EngineSettings::default());
//! engine.load_file("demo.xml")?;
//!
//! let mut timer = Timer::new();
//! let mut ctx = RecordingContext::new();
//! loop {
//!     engine.update(timer.tick());
//!     engine.display(&mut ctx)?;
//! }
//! ```

use std::fs;

use glam::{Vec3, Vec4};

use crate::animation::{AnimationMixer, AnimationPlayback, CameraTransition};
use crate::errors::Result;
use crate::parser::parse_document;
use crate::renderer::{RenderContext, display_scene};
use crate::resources::primitives::Rectangle;
use crate::resources::{Material, Spritesheet};
use crate::scene::{Camera, Light, LoadedScene};
use crate::settings::EngineSettings;

/// A camera switch in progress.
#[derive(Debug, Clone)]
struct PendingCamera {
    id: String,
    transition: CameraTransition,
}

/// Owns the loaded scene and drives its animation and display.
///
/// # Lifecycle
///
/// 1. Create with [`SceneEngine::new`]
/// 2. Load a document with [`load_str`](Self::load_str) or
///    [`load_file`](Self::load_file)
/// 3. Each frame call [`update`](Self::update) then
///    [`display`](Self::display)
#[derive(Debug)]
pub struct SceneEngine {
    settings: EngineSettings,
    scene: Option<LoadedScene>,
    mixer: AnimationMixer,

    active_camera_id: String,
    camera: Camera,
    pending_camera: Option<PendingCamera>,

    placeholder: Rectangle,
    loading_progress: u32,
    time_ms: f64,
    last_update_ms: Option<f64>,
}

impl SceneEngine {
    #[must_use]
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            scene: None,
            mixer: AnimationMixer::new(),
            active_camera_id: String::new(),
            camera: Camera::fallback(),
            pending_camera: None,
            placeholder: Rectangle::new(-1.0, -0.1, 1.0, 0.1),
            loading_progress: 0,
            time_ms: 0.0,
            last_update_ms: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    #[must_use]
    pub fn scene(&self) -> Option<&LoadedScene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.scene.is_some()
    }

    #[must_use]
    pub fn mixer(&self) -> &AnimationMixer {
        &self.mixer
    }

    /// Wall time of the last applied [`update`](Self::update), in milliseconds.
    #[must_use]
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Parses `text` and, on success, replaces the current scene.
    ///
    /// On failure the previous scene (if any) stays active.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        match parse_document(text) {
            Ok(scene) => {
                self.install(scene);
                Ok(())
            }
            Err(err) => {
                log::error!("scene load failed: {err}");
                Err(err)
            }
        }
    }

    /// Reads `name` from [`EngineSettings::scenes_dir`] and loads it.
    pub fn load_file(&mut self, name: &str) -> Result<()> {
        let path = self.settings.scene_path(name);
        log::info!("loading scene {}", path.display());
        let text = fs::read_to_string(&path).inspect_err(|err| {
            log::error!("cannot read {}: {err}", path.display());
        })?;
        self.load_str(&text)
    }

    fn install(&mut self, mut scene: LoadedScene) {
        scene.tables.font = Spritesheet::font(&self.settings.font_texture, self.settings.font_grid);
        self.mixer = AnimationMixer::for_scene(&scene.graph, &scene.tables);

        self.active_camera_id.clone_from(&scene.default_camera);
        self.camera = scene.default_camera().cloned().unwrap_or_else(Camera::fallback);
        self.pending_camera = None;
        self.last_update_ms = None;

        log::info!(
            "scene ready: root {}, {} animated nodes",
            scene.root_id(),
            self.mixer.len()
        );
        self.scene = Some(scene);
    }

    // ========================================================================
    // Frame Update
    // ========================================================================

    /// Advances every animation to wall time `time_ms`.
    ///
    /// Calls less than [`EngineSettings::update_period_ms`] after the last
    /// applied one are ignored. A clock that goes backwards always applies.
    pub fn update(&mut self, time_ms: f64) {
        if let Some(last) = self.last_update_ms {
            let period = f64::from(self.settings.update_period_ms);
            if (0.0..period).contains(&(time_ms - last)) {
                return;
            }
        }
        self.last_update_ms = Some(time_ms);
        self.time_ms = time_ms;
        let Some(scene) = self.scene.as_mut() else {
            return;
        };

        self.mixer.update(time_ms);
        scene.tables.update_sprite_animations(time_ms);

        if let Some(pending) = self.pending_camera.as_mut() {
            let finished = pending.transition.update(time_ms);
            pending.transition.apply(&mut self.camera);
            if finished {
                if let Some(camera) = scene.tables.camera(&pending.id) {
                    self.camera = camera.clone();
                }
                log::debug!("camera transition to {} finished", pending.id);
                self.active_camera_id = std::mem::take(&mut pending.id);
                self.pending_camera = None;
            }
        }
    }

    /// Rewinds every node playback and sprite animation.
    pub fn reset_animations(&mut self) {
        self.mixer.reset_all();
        if let Some(scene) = self.scene.as_mut() {
            scene.tables.reset_sprite_animations();
        }
    }

    /// Binds an arc move of `node_id` from `from` to `to` at `speed` units
    /// per second, replacing any animation the node had.
    ///
    /// Returns `false` when no loaded node has that id.
    pub fn move_node(&mut self, node_id: &str, from: Vec3, to: Vec3, speed: f32) -> bool {
        let Some(scene) = self.scene.as_ref() else {
            return false;
        };
        if !scene.graph.contains(node_id) {
            log::warn!("cannot animate unknown node {node_id}");
            return false;
        }
        let playback = AnimationPlayback::piece_move(from, to, speed, self.settings.piece_curve_height);
        self.mixer.bind_playback(node_id, playback);
        true
    }

    // ========================================================================
    // Cameras
    // ========================================================================

    /// Starts an animated switch to camera `id`.
    ///
    /// Returns `false` (and keeps the current camera) when `id` names no
    /// camera of the loaded scene.
    pub fn select_camera(&mut self, id: &str) -> bool {
        let Some(target) = self.scene.as_ref().and_then(|scene| scene.tables.camera(id)) else {
            log::warn!("camera {id} does not exist");
            return false;
        };
        if id == self.active_camera_id && self.pending_camera.is_none() {
            return true;
        }
        let transition = CameraTransition::new(&self.camera, target, self.settings.camera_transition_speed);
        log::debug!("camera transition to {id} over {:.2}s", transition.duration());
        self.pending_camera = Some(PendingCamera {
            id: id.to_string(),
            transition,
        });
        true
    }

    #[must_use]
    pub fn active_camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn active_camera_id(&self) -> &str {
        &self.active_camera_id
    }

    #[must_use]
    pub fn is_camera_transitioning(&self) -> bool {
        self.pending_camera.is_some()
    }

    /// Lights to enable this frame: at most `max_lights`, in declaration
    /// order.
    pub fn active_lights(&self) -> impl Iterator<Item = &Light> {
        self.scene
            .iter()
            .flat_map(|scene| scene.lights.iter())
            .take(self.settings.max_lights)
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// Draws the scene, or the loading placeholder while nothing is loaded.
    ///
    /// Traversal errors are logged and returned; the host's matrix stack is
    /// balanced either way.
    pub fn display(&mut self, ctx: &mut dyn RenderContext) -> Result<()> {
        let Some(scene) = self.scene.as_ref() else {
            self.display_placeholder(ctx);
            return Ok(());
        };
        display_scene(&scene.graph, &scene.tables, &self.mixer, ctx).inspect_err(|err| {
            log::error!("scene display failed: {err}");
        })
    }

    fn display_placeholder(&mut self, ctx: &mut dyn RenderContext) {
        let material = Material::new(
            Vec4::new(0.5, 0.5, 0.5, 1.0),
            Vec4::new(0.8, 0.8, 0.8, 1.0),
            Vec4::new(0.2, 0.2, 0.2, 1.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            10.0,
        );
        ctx.push_matrix();
        ctx.rotate(-(self.loading_progress as f32) / 10.0, Vec3::Z);
        ctx.apply_material(&material, None);
        ctx.draw_mesh(&self.placeholder.geometry);
        ctx.pop_matrix();
        self.loading_progress = self.loading_progress.wrapping_add(1);
    }
}
