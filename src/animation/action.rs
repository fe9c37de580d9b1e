use std::f32::consts::PI;
use std::sync::Arc;

use glam::Vec3;

use crate::animation::{
    clip::AnimationDefinition,
    keyframe::{KeyFrame, KeyframeTransform},
    tracks::KeyframeCursor,
    values::Interpolatable,
};
use crate::renderer::RenderContext;

/// Lifecycle of one playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackPhase {
    /// No update has been seen since creation or the last reset.
    Unstarted,
    /// The time origin is latched to the first update's wall time.
    Active { origin_ms: f64 },
    /// Terminal; holds the last keyframe's transform.
    Finished,
}

/// How the translation channel travels between keyframes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionPath {
    /// Straight-line interpolation.
    Linear,
    /// X and Z interpolate linearly while Y follows
    /// `sin(π·s)·peak_height + |x + z| / 10`; finishing snaps Y to 0.
    Arc { peak_height: f32 },
}

/// Per-binding playback state over a shared [`AnimationDefinition`].
///
/// Several nodes may reference the same definition; each gets its own
/// playback so their time origins and cursors never interfere.
#[derive(Debug, Clone)]
pub struct AnimationPlayback {
    definition: Arc<AnimationDefinition>,
    path: MotionPath,
    phase: PlaybackPhase,
    cursor: KeyframeCursor,
    current: KeyframeTransform,
}

impl AnimationPlayback {
    #[must_use]
    pub fn new(definition: Arc<AnimationDefinition>) -> Self {
        Self::with_path(definition, MotionPath::Linear)
    }

    #[must_use]
    pub fn with_path(definition: Arc<AnimationDefinition>, path: MotionPath) -> Self {
        Self {
            definition,
            path,
            phase: PlaybackPhase::Unstarted,
            cursor: KeyframeCursor::default(),
            current: KeyframeTransform::ZERO,
        }
    }

    /// A lift-and-move arc from `from` to `to` at `speed` units per second.
    ///
    /// The peak height is `curve_height + to.y`. A zero-length move (or a
    /// non-positive speed) yields a single identity keyframe that finishes
    /// on the first update.
    #[must_use]
    pub fn piece_move(from: Vec3, to: Vec3, speed: f32, curve_height: f32) -> Self {
        let movement = to - from;
        let distance = movement.length();

        let mut keyframes = vec![KeyFrame::new(0.0, KeyframeTransform::IDENTITY)];
        if distance > 0.0 && speed > 0.0 {
            keyframes.push(KeyFrame::translation(distance / speed, movement));
        }

        let definition = AnimationDefinition::new("piece-move", keyframes)
            .map_or_else(Self::still_definition, Arc::new);
        Self::with_path(
            definition,
            MotionPath::Arc {
                peak_height: curve_height + to.y,
            },
        )
    }

    fn still_definition() -> Arc<AnimationDefinition> {
        Arc::new(AnimationDefinition::still())
    }

    #[must_use]
    pub fn definition(&self) -> &Arc<AnimationDefinition> {
        &self.definition
    }

    #[must_use]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == PlaybackPhase::Finished
    }

    #[must_use]
    pub fn cursor(&self) -> KeyframeCursor {
        self.cursor
    }

    /// Current channel values.
    #[must_use]
    pub fn current(&self) -> &KeyframeTransform {
        &self.current
    }

    /// Advances to wall time `now_ms`; returns whether the playback has
    /// finished.
    pub fn update(&mut self, now_ms: f64) -> bool {
        let origin_ms = match self.phase {
            PlaybackPhase::Finished => return true,
            PlaybackPhase::Active { origin_ms } => origin_ms,
            PlaybackPhase::Unstarted => {
                log::debug!("animation {} started at {now_ms} ms", self.definition.id);
                self.phase = PlaybackPhase::Active { origin_ms: now_ms };
                now_ms
            }
        };
        let elapsed = ((now_ms - origin_ms) / 1000.0) as f32;

        let keyframes = self.definition.keyframes();
        if elapsed < self.definition.start_time() {
            return false;
        }

        if keyframes.len() == 1 {
            self.current = keyframes[0].transform;
            self.finish();
            return true;
        }

        if elapsed > self.definition.end_time() {
            self.current = self.definition.last().transform;
            if matches!(self.path, MotionPath::Arc { .. }) {
                self.current.translation.y = 0.0;
            }
            self.finish();
            return true;
        }

        self.cursor.advance(keyframes, elapsed);
        let s = self.cursor.interpolation_time(keyframes, elapsed);
        let prev = keyframes[self.cursor.previous].transform;
        let next = keyframes[self.cursor.next].transform;

        self.current = KeyframeTransform::interpolate_linear(prev, next, s);
        if let MotionPath::Arc { peak_height } = self.path {
            let t = self.current.translation;
            self.current.translation.y = (PI * s).sin() * peak_height + (t.x + t.z).abs() / 10.0;
        }
        false
    }

    fn finish(&mut self) {
        log::debug!("animation {} finished", self.definition.id);
        self.phase = PlaybackPhase::Finished;
    }

    /// Multiplies the current frame onto the transform stack.
    pub fn apply(&self, ctx: &mut dyn RenderContext) {
        self.current.apply(ctx);
    }

    /// Back to [`PlaybackPhase::Unstarted`] with a rewound cursor and all
    /// channels zeroed.
    pub fn reset(&mut self) {
        self.phase = PlaybackPhase::Unstarted;
        self.cursor.reset();
        self.current = KeyframeTransform::ZERO;
    }
}
