use glam::{Mat4, Vec3};

use crate::renderer::context::RenderContext;
use crate::renderer::matrix_stack::MatrixStack;
use crate::resources::{Geometry, Material, Spritesheet, Texture};

/// One call made on a [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    PushMatrix,
    PopMatrix,
    MultMatrix(Mat4),
    Translate(Vec3),
    Rotate { angle: f32, axis: Vec3 },
    Scale(Vec3),
    ApplyMaterial {
        material: Material,
        /// Id of the bound texture, `None` when no texture is bound
        texture: Option<String>,
    },
    DrawMesh {
        vertices: usize,
        triangles: usize,
        /// Model matrix at the time of the draw
        model: Mat4,
    },
    ActivateSpriteCell { sheet: String, m: u32, n: u32 },
    ResetShader,
}

/// A headless [`RenderContext`] that records every call and tracks the
/// resulting model matrix.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    commands: Vec<RenderCommand>,
    stack: MatrixStack,
    max_depth: usize,
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.stack.reset();
        self.max_depth = 0;
    }

    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.stack.current()
    }

    /// Current push depth; zero after a balanced frame.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Model matrices of every draw, in order.
    #[must_use]
    pub fn draws(&self) -> Vec<Mat4> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                RenderCommand::DrawMesh { model, .. } => Some(*model),
                _ => None,
            })
            .collect()
    }

    /// `(material, texture id)` of every bind, in order.
    #[must_use]
    pub fn material_binds(&self) -> Vec<(Material, Option<String>)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                RenderCommand::ApplyMaterial { material, texture } => Some((*material, texture.clone())),
                _ => None,
            })
            .collect()
    }
}

impl RenderContext for RecordingContext {
    fn push_matrix(&mut self) {
        self.stack.push();
        self.max_depth = self.max_depth.max(self.stack.depth());
        self.commands.push(RenderCommand::PushMatrix);
    }

    fn pop_matrix(&mut self) {
        self.stack.pop();
        self.commands.push(RenderCommand::PopMatrix);
    }

    fn mult_matrix(&mut self, matrix: &Mat4) {
        self.stack.mult(matrix);
        self.commands.push(RenderCommand::MultMatrix(*matrix));
    }

    fn translate(&mut self, offset: Vec3) {
        self.stack.translate(offset);
        self.commands.push(RenderCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32, axis: Vec3) {
        self.stack.rotate(angle, axis);
        self.commands.push(RenderCommand::Rotate { angle, axis });
    }

    fn scale(&mut self, factors: Vec3) {
        self.stack.scale(factors);
        self.commands.push(RenderCommand::Scale(factors));
    }

    fn apply_material(&mut self, material: &Material, texture: Option<&Texture>) {
        self.commands.push(RenderCommand::ApplyMaterial {
            material: *material,
            texture: texture.map(|t| t.id.clone()),
        });
    }

    fn draw_mesh(&mut self, geometry: &Geometry) {
        self.commands.push(RenderCommand::DrawMesh {
            vertices: geometry.vertex_count(),
            triangles: geometry.triangle_count(),
            model: self.stack.current(),
        });
    }

    fn activate_sprite_cell(&mut self, sheet: &Spritesheet, m: u32, n: u32) {
        self.commands.push(RenderCommand::ActivateSpriteCell {
            sheet: sheet.id.clone(),
            m,
            n,
        });
    }

    fn reset_shader(&mut self) {
        self.commands.push(RenderCommand::ResetShader);
    }
}
