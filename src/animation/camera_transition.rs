use glam::Vec3;

use crate::scene::Camera;

/// Animated move of the active camera's eye and target between two cameras.
///
/// Duration is the eye distance divided by the transition speed. Only
/// position and target interpolate; projection parameters switch when the
/// engine activates the destination camera on completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    from_position: Vec3,
    to_position: Vec3,
    from_target: Vec3,
    to_target: Vec3,
    duration: f32,
    origin_ms: Option<f64>,
    finished: bool,
    current_position: Vec3,
    current_target: Vec3,
}

impl CameraTransition {
    #[must_use]
    pub fn new(from: &Camera, to: &Camera, speed: f32) -> Self {
        let (from_position, to_position) = (from.position(), to.position());
        let distance = from_position.distance(to_position);
        let duration = if speed > 0.0 { distance / speed } else { 0.0 };

        Self {
            from_position,
            to_position,
            from_target: from.target(),
            to_target: to.target(),
            duration,
            origin_ms: None,
            finished: false,
            current_position: from_position,
            current_target: from.target(),
        }
    }

    /// Transition length in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn current_position(&self) -> Vec3 {
        self.current_position
    }

    #[must_use]
    pub fn current_target(&self) -> Vec3 {
        self.current_target
    }

    /// Advances to wall time `now_ms`; returns whether the transition has
    /// finished.
    pub fn update(&mut self, now_ms: f64) -> bool {
        if self.finished {
            return true;
        }
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let elapsed = ((now_ms - origin) / 1000.0) as f32;

        if elapsed >= self.duration {
            self.current_position = self.to_position;
            self.current_target = self.to_target;
            self.finished = true;
            return true;
        }

        let s = elapsed / self.duration;
        self.current_position = self.from_position.lerp(self.to_position, s);
        self.current_target = self.from_target.lerp(self.to_target, s);
        false
    }

    /// Moves `camera` to the current eye and target.
    pub fn apply(&self, camera: &mut Camera) {
        camera.set_position(self.current_position);
        camera.set_target(self.current_target);
    }

    /// Puts `camera` back at the start of the transition.
    pub fn rewind(&self, camera: &mut Camera) {
        camera.set_position(self.from_position);
        camera.set_target(self.from_target);
    }
}
