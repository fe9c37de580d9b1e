//! Animation Engine
//!
//! Time-driven state producing per-frame transforms:
//!
//! - [`AnimationDefinition`]: immutable keyframe list parsed from `<animations>`
//! - [`AnimationPlayback`]: per-node cursor and time origin over a definition,
//!   optionally following an arc path for piece moves
//! - [`AnimationMixer`]: all playbacks of a loaded scene, keyed by node id
//! - [`CameraTransition`]: eye/target interpolation between two cameras
//! - [`SpriteAnimation`]: looping spritesheet cell animation
//!
//! All updates take the host's wall time in milliseconds; the first update
//! of each animation latches its time origin.

mod values;
pub mod action;
pub mod camera_transition;
pub mod clip;
pub mod keyframe;
pub mod mixer;
pub mod sprite;
pub mod tracks;

pub use action::{AnimationPlayback, MotionPath, PlaybackPhase};
pub use camera_transition::CameraTransition;
pub use clip::AnimationDefinition;
pub use keyframe::{KeyFrame, KeyframeTransform};
pub use mixer::AnimationMixer;
pub use sprite::{SpriteAnimKey, SpriteAnimation};
pub use tracks::KeyframeCursor;
pub use values::Interpolatable;
