#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod engine;
pub mod errors;
pub mod parser;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod settings;
pub mod utils;

pub use animation::{
    AnimationDefinition, AnimationMixer, AnimationPlayback, CameraTransition, KeyFrame,
    KeyframeTransform, MotionPath, PlaybackPhase, SpriteAnimation,
};
pub use engine::SceneEngine;
pub use errors::{Result, SceneError};
pub use parser::{Diagnostics, parse_document};
pub use renderer::{MatrixStack, RecordingContext, RenderCommand, RenderContext, display_scene};
pub use resources::primitives::Primitive;
pub use resources::{Geometry, Material, Spritesheet, Texture};
pub use scene::{
    Camera, Descendant, Illumination, Initials, Light, LoadedScene, MaterialRef, NodeGraph,
    ResourceTables, SceneNode, TextureId, TextureRef,
};
pub use settings::EngineSettings;
pub use utils::time::Timer;
