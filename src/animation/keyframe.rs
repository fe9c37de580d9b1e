use glam::{Mat4, Vec3};

use crate::animation::values::Interpolatable;
use crate::renderer::RenderContext;

/// The five independently interpolated channels of a keyframe.
///
/// Rotations are stored as vectors with only their own axis populated
/// (`rotation_x.x`, `rotation_y.y`, `rotation_z.z`), in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeTransform {
    pub translation: Vec3,
    pub rotation_x: Vec3,
    pub rotation_y: Vec3,
    pub rotation_z: Vec3,
    pub scale: Vec3,
}

impl KeyframeTransform {
    /// All channels zero, including scale.
    pub const ZERO: Self = Self {
        translation: Vec3::ZERO,
        rotation_x: Vec3::ZERO,
        rotation_y: Vec3::ZERO,
        rotation_z: Vec3::ZERO,
        scale: Vec3::ZERO,
    };

    /// No translation or rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation_x: Vec3::ZERO,
        rotation_y: Vec3::ZERO,
        rotation_z: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Builds a transform from per-axis angles in radians.
    #[must_use]
    pub fn new(translation: Vec3, angles: Vec3, scale: Vec3) -> Self {
        Self {
            translation,
            rotation_x: Vec3::new(angles.x, 0.0, 0.0),
            rotation_y: Vec3::new(0.0, angles.y, 0.0),
            rotation_z: Vec3::new(0.0, 0.0, angles.z),
            scale,
        }
    }

    /// Emits translate, rotate X, rotate Y, rotate Z, scale, in that order.
    pub fn apply(&self, ctx: &mut dyn RenderContext) {
        ctx.translate(self.translation);
        ctx.rotate(self.rotation_x.x, Vec3::X);
        ctx.rotate(self.rotation_y.y, Vec3::Y);
        ctx.rotate(self.rotation_z.z, Vec3::Z);
        ctx.scale(self.scale);
    }

    /// The matrix [`apply`](Self::apply) multiplies onto the stack.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_x(self.rotation_x.x)
            * Mat4::from_rotation_y(self.rotation_y.y)
            * Mat4::from_rotation_z(self.rotation_z.z)
            * Mat4::from_scale(self.scale)
    }
}

impl Default for KeyframeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Interpolatable for KeyframeTransform {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        Self {
            translation: Vec3::interpolate_linear(start.translation, end.translation, t),
            rotation_x: Vec3::interpolate_linear(start.rotation_x, end.rotation_x, t),
            rotation_y: Vec3::interpolate_linear(start.rotation_y, end.rotation_y, t),
            rotation_z: Vec3::interpolate_linear(start.rotation_z, end.rotation_z, t),
            scale: Vec3::interpolate_linear(start.scale, end.scale, t),
        }
    }
}

/// A transform reached at `instant` seconds after the animation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyFrame {
    pub instant: f32,
    pub transform: KeyframeTransform,
}

impl KeyFrame {
    #[must_use]
    pub fn new(instant: f32, transform: KeyframeTransform) -> Self {
        Self { instant, transform }
    }

    /// Shorthand for a keyframe that only translates.
    #[must_use]
    pub fn translation(instant: f32, translation: Vec3) -> Self {
        Self::new(
            instant,
            KeyframeTransform {
                translation,
                ..KeyframeTransform::IDENTITY
            },
        )
    }
}
