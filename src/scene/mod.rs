//! Scene Graph
//!
//! The in-memory form of a parsed document:
//!
//! - [`SceneNode`]: local transform, material/texture references, optional
//!   animation reference and ordered descendants
//! - [`NodeGraph`]: id-addressed node arena with a distinguished root
//! - [`ResourceTables`]: cameras, materials, textures, animations,
//!   spritesheets and sprite animation state
//! - [`Camera`], [`Light`], [`Initials`], [`Illumination`]
//! - [`LoadedScene`]: all of the above bundled for the engine

pub mod camera;
pub mod environment;
pub mod graph;
pub mod light;
pub mod node;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod tables;

pub use camera::{Camera, DEFAULT_CAMERA_ID};
pub use environment::{Illumination, Initials};
pub use graph::{NodeGraph, NodeKey};
pub use light::Light;
pub use node::{Descendant, MaterialRef, SceneNode, TextureId, TextureRef};
pub use scene::LoadedScene;
pub use tables::ResourceTables;
