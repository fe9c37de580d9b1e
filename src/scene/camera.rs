use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Id under which the synthesized camera is registered.
pub const DEFAULT_CAMERA_ID: &str = "default";

/// A view declared in `<views>`.
///
/// Invariant: `0 <= near < far`, enforced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Camera {
    Perspective {
        /// Vertical field of view in radians
        fov: f32,
        near: f32,
        far: f32,
        position: Vec3,
        target: Vec3,
    },
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
        position: Vec3,
        target: Vec3,
        up: Vec3,
    },
}

impl Camera {
    #[must_use]
    pub fn perspective(fov: f32, near: f32, far: f32, position: Vec3, target: Vec3) -> Self {
        Self::Perspective {
            fov,
            near,
            far,
            position,
            target,
        }
    }

    #[must_use]
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
        position: Vec3,
        target: Vec3,
        up: Vec3,
    ) -> Self {
        Self::Orthographic {
            left,
            right,
            bottom,
            top,
            near,
            far,
            position,
            target,
            up,
        }
    }

    /// The camera used when `<views>` yields none: 30° field of view from
    /// (15, 15, 15) towards the origin.
    #[must_use]
    pub fn fallback() -> Self {
        Self::perspective(PI / 6.0, 0.1, 500.0, Vec3::splat(15.0), Vec3::ZERO)
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        match self {
            Self::Perspective { position, .. } | Self::Orthographic { position, .. } => *position,
        }
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        match self {
            Self::Perspective { target, .. } | Self::Orthographic { target, .. } => *target,
        }
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        match self {
            Self::Perspective { .. } => Vec3::Y,
            Self::Orthographic { up, .. } => *up,
        }
    }

    #[must_use]
    pub fn near(&self) -> f32 {
        match self {
            Self::Perspective { near, .. } | Self::Orthographic { near, .. } => *near,
        }
    }

    #[must_use]
    pub fn far(&self) -> f32 {
        match self {
            Self::Perspective { far, .. } | Self::Orthographic { far, .. } => *far,
        }
    }

    pub fn set_position(&mut self, value: Vec3) {
        match self {
            Self::Perspective { position, .. } | Self::Orthographic { position, .. } => *position = value,
        }
    }

    pub fn set_target(&mut self, value: Vec3) {
        match self {
            Self::Perspective { target, .. } | Self::Orthographic { target, .. } => *target = value,
        }
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target(), self.up())
    }

    /// OpenGL-style clip-space projection for a viewport of `aspect` ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match *self {
            Self::Perspective { fov, near, far, .. } => Mat4::perspective_rh_gl(fov, aspect, near, far),
            Self::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
                ..
            } => Mat4::orthographic_rh_gl(left, right, bottom, top, near, far),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::fallback()
    }
}
