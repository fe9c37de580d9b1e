use glam::{Mat4, Vec3};

use crate::resources::{Geometry, Material, Spritesheet, Texture};

/// The host graphics runtime as seen by scene traversal.
///
/// The core calls these operations and never implements them for real
/// drawing. Transform operations post-multiply onto the current matrix;
/// `push_matrix`/`pop_matrix` must balance.
pub trait RenderContext {
    fn push_matrix(&mut self);
    fn pop_matrix(&mut self);
    fn mult_matrix(&mut self, matrix: &Mat4);
    fn translate(&mut self, offset: Vec3);
    /// Rotation of `angle` radians about `axis`.
    fn rotate(&mut self, angle: f32, axis: Vec3);
    fn scale(&mut self, factors: Vec3);

    /// Makes `material` current, with `texture` bound or no texture at all.
    fn apply_material(&mut self, material: &Material, texture: Option<&Texture>);

    /// Draws `geometry` in the current transform and material.
    fn draw_mesh(&mut self, geometry: &Geometry);

    /// Switches to the spritesheet shader showing cell `(m, n)` of `sheet`.
    fn activate_sprite_cell(&mut self, sheet: &Spritesheet, m: u32, n: u32);

    /// Returns to the default shader after sprite drawing.
    fn reset_shader(&mut self);
}
