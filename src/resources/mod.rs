//! Scene Resources
//!
//! Plain data registered in the resource tables of a loaded scene:
//!
//! - [`Material`]: Phong reflectance with the fluorescent fallback
//! - [`Texture`]: id-to-image-path binding
//! - [`Spritesheet`]: a texture split into an M × N cell grid
//! - [`Geometry`]: CPU-side triangle mesh
//! - [`primitives`]: the closed set of leaf shapes and their generators

pub mod geometry;
pub mod material;
pub mod primitives;
pub mod spritesheet;
pub mod texture;

pub use geometry::{BoundingBox, Geometry};
pub use material::Material;
pub use primitives::Primitive;
pub use spritesheet::Spritesheet;
pub use texture::Texture;
