//! Phong-style surface materials.

use glam::Vec4;

/// Color used for a single invalid material component.
pub const FALLBACK_COMPONENT: Vec4 = Vec4::new(0.8, 1.0, 1.0, 1.0);

/// Shininess used when a material's `<shininess>` is invalid.
pub const FALLBACK_SHININESS: f32 = 40.0;

/// Ambient/diffuse/specular/emissive reflectance plus a specular exponent.
///
/// Textures are not stored here; the resolved texture is handed to
/// [`RenderContext::apply_material`](crate::renderer::RenderContext::apply_material)
/// alongside the material on every bind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub emissive: Vec4,
    pub shininess: f32,
}

impl Material {
    #[must_use]
    pub fn new(ambient: Vec4, diffuse: Vec4, specular: Vec4, emissive: Vec4, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            emissive,
            shininess,
        }
    }

    /// The fluorescent material substituted for incomplete materials and
    /// applied when no material resolves during traversal.
    #[must_use]
    pub fn fallback() -> Self {
        let fluorescent = Vec4::new(0.8, 1.0, 0.0, 1.0);
        Self {
            ambient: fluorescent,
            diffuse: fluorescent,
            specular: fluorescent,
            emissive: Vec4::new(0.0, 0.0, 0.0, 1.0),
            shininess: FALLBACK_SHININESS,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::fallback()
    }
}
