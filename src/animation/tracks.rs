use crate::animation::keyframe::KeyFrame;

/// The `(previous, next)` keyframe pair bracketing the current time.
///
/// Elapsed time is assumed non-decreasing between updates, so the cursor
/// only ever moves forward; [`reset`](Self::reset) is the only way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyframeCursor {
    pub previous: usize,
    pub next: usize,
}

impl Default for KeyframeCursor {
    fn default() -> Self {
        Self {
            previous: 0,
            next: 1,
        }
    }
}

impl KeyframeCursor {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves forward while `time` has reached the next keyframe, never
    /// past the final pair.
    pub fn advance(&mut self, keyframes: &[KeyFrame], time: f32) {
        let last = keyframes.len().saturating_sub(1);
        while self.next < last && time >= keyframes[self.next].instant {
            self.previous += 1;
            self.next += 1;
        }
    }

    /// Normalized position of `time` between the bracketing keyframes.
    #[must_use]
    pub fn interpolation_time(&self, keyframes: &[KeyFrame], time: f32) -> f32 {
        let (Some(prev), Some(next)) = (keyframes.get(self.previous), keyframes.get(self.next)) else {
            return 0.0;
        };
        let span = next.instant - prev.instant;
        if span > 0.0 {
            (time - prev.instant) / span
        } else {
            1.0
        }
    }
}
