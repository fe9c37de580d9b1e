use std::sync::Arc;

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::animation::{AnimationDefinition, SpriteAnimKey, SpriteAnimation};
use crate::resources::{Material, Spritesheet, Texture};
use crate::scene::camera::Camera;
use crate::scene::node::{MaterialRef, TextureId};
use crate::settings::EngineSettings;

/// Id-keyed registries populated while parsing a document.
///
/// Keys are unique per table; the parser keeps the first occurrence of a
/// duplicated id.
#[derive(Debug, Clone)]
pub struct ResourceTables {
    cameras: FxHashMap<String, Camera>,
    camera_order: Vec<String>,
    pub materials: FxHashMap<String, Material>,
    pub textures: FxHashMap<String, Texture>,
    pub animations: FxHashMap<String, Arc<AnimationDefinition>>,
    pub spritesheets: FxHashMap<String, Spritesheet>,
    pub sprite_animations: SlotMap<SpriteAnimKey, SpriteAnimation>,
    /// Font sheet used by `spritetext` leaves.
    pub font: Spritesheet,
    /// Applied when a node's material does not resolve.
    pub fallback_material: Material,
}

impl Default for ResourceTables {
    fn default() -> Self {
        let settings = EngineSettings::default();
        Self {
            cameras: FxHashMap::default(),
            camera_order: Vec::new(),
            materials: FxHashMap::default(),
            textures: FxHashMap::default(),
            animations: FxHashMap::default(),
            spritesheets: FxHashMap::default(),
            sprite_animations: SlotMap::with_key(),
            font: Spritesheet::font(&settings.font_texture, settings.font_grid),
            fallback_material: Material::fallback(),
        }
    }
}

impl ResourceTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Cameras
    // ========================================================================

    /// Registers a camera; returns `false` (and keeps the existing one) if
    /// the id is taken.
    pub fn insert_camera(&mut self, id: impl Into<String>, camera: Camera) -> bool {
        let id = id.into();
        if self.cameras.contains_key(&id) {
            return false;
        }
        self.camera_order.push(id.clone());
        self.cameras.insert(id, camera);
        true
    }

    #[must_use]
    pub fn camera(&self, id: &str) -> Option<&Camera> {
        self.cameras.get(id)
    }

    /// Camera ids in declaration order.
    #[must_use]
    pub fn camera_ids(&self) -> &[String] {
        &self.camera_order
    }

    #[must_use]
    pub fn camera_count(&self) -> usize {
        self.camera_order.len()
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// The material to bind for an effective reference.
    ///
    /// `Inherit` at this point means no ancestor named a material, so the
    /// fallback material applies; so does a name missing from the table.
    #[must_use]
    pub fn resolve_material(&self, material: &MaterialRef) -> &Material {
        material
            .id()
            .and_then(|id| self.materials.get(id))
            .unwrap_or(&self.fallback_material)
    }

    /// The texture to bind for an effective reference, `None` when clear
    /// or unresolved.
    #[must_use]
    pub fn resolve_texture(&self, texture: &TextureId) -> Option<&Texture> {
        texture.id().and_then(|id| self.textures.get(id))
    }

    // ========================================================================
    // Sprite Animations
    // ========================================================================

    pub fn add_sprite_animation(&mut self, animation: SpriteAnimation) -> SpriteAnimKey {
        self.sprite_animations.insert(animation)
    }

    pub fn update_sprite_animations(&mut self, now_ms: f64) {
        for animation in self.sprite_animations.values_mut() {
            animation.update(now_ms);
        }
    }

    pub fn reset_sprite_animations(&mut self) {
        for animation in self.sprite_animations.values_mut() {
            animation.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn first_camera_wins() {
        let mut tables = ResourceTables::new();
        assert!(tables.insert_camera("a", Camera::fallback()));
        assert!(!tables.insert_camera("a", Camera::default()));
        assert_eq!(tables.camera_ids(), ["a".to_string()]);
    }

    #[test]
    fn unresolved_material_uses_fallback() {
        let mut tables = ResourceTables::new();
        let red = Material::new(Vec4::X, Vec4::X, Vec4::X, Vec4::W, 10.0);
        tables.materials.insert("red".into(), red);

        assert_eq!(*tables.resolve_material(&MaterialRef::Named("red".into())), red);
        assert_eq!(*tables.resolve_material(&MaterialRef::Inherit), Material::fallback());
        assert_eq!(*tables.resolve_material(&MaterialRef::Named("nope".into())), Material::fallback());
    }

    #[test]
    fn clear_texture_binds_nothing() {
        let mut tables = ResourceTables::new();
        tables.textures.insert("wood".into(), Texture::new("wood", "wood.png"));
        assert!(tables.resolve_texture(&TextureId::Clear).is_none());
        assert!(tables.resolve_texture(&TextureId::Inherit).is_none());
        assert!(tables.resolve_texture(&TextureId::Named("wood".into())).is_some());
    }
}
