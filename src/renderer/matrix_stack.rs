use glam::{Mat4, Quat, Vec3};

/// A model-matrix stack with OpenGL-style post-multiplication.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            saved: Vec::with_capacity(16),
        }
    }

    #[must_use]
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of saved matrices.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restores the last saved matrix; returns `false` on underflow,
    /// leaving the current matrix untouched.
    pub fn pop(&mut self) -> bool {
        match self.saved.pop() {
            Some(matrix) => {
                self.current = matrix;
                true
            }
            None => {
                log::warn!("matrix stack underflow");
                false
            }
        }
    }

    pub fn mult(&mut self, matrix: &Mat4) {
        self.current *= *matrix;
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.mult(&Mat4::from_translation(offset));
    }

    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        let axis = axis.normalize_or_zero();
        if axis != Vec3::ZERO {
            self.mult(&Mat4::from_quat(Quat::from_axis_angle(axis, angle)));
        }
    }

    pub fn scale(&mut self, factors: Vec3) {
        self.mult(&Mat4::from_scale(factors));
    }

    pub fn reset(&mut self) {
        self.current = Mat4::IDENTITY;
        self.saved.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_restores() {
        let mut stack = MatrixStack::new();
        stack.translate(Vec3::X);
        stack.push();
        stack.scale(Vec3::splat(2.0));
        assert_eq!(stack.depth(), 1);
        assert!(stack.pop());
        assert_eq!(stack.current(), Mat4::from_translation(Vec3::X));
    }

    #[test]
    fn underflow_is_reported() {
        let mut stack = MatrixStack::new();
        assert!(!stack.pop());
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn operations_post_multiply() {
        let mut stack = MatrixStack::new();
        stack.translate(Vec3::new(1.0, 0.0, 0.0));
        stack.scale(Vec3::splat(2.0));
        let p = stack.current().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-6);
    }
}
