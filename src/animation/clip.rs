use crate::animation::keyframe::{KeyFrame, KeyframeTransform};

/// Immutable keyframe list shared by every node bound to an animation.
///
/// Invariant: at least one keyframe, instants non-negative and strictly
/// increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDefinition {
    pub id: String,
    keyframes: Vec<KeyFrame>,
}

impl AnimationDefinition {
    /// Returns `None` unless the invariant holds.
    #[must_use]
    pub fn new(id: impl Into<String>, keyframes: Vec<KeyFrame>) -> Option<Self> {
        let first = keyframes.first()?;
        let valid = first.instant >= 0.0
            && keyframes.iter().all(|kf| kf.instant.is_finite())
            && keyframes.windows(2).all(|w| w[0].instant < w[1].instant);

        valid.then(|| Self {
            id: id.into(),
            keyframes,
        })
    }

    /// A single identity keyframe at instant 0.
    #[must_use]
    pub fn still() -> Self {
        Self {
            id: "still".to_string(),
            keyframes: vec![KeyFrame::new(0.0, KeyframeTransform::IDENTITY)],
        }
    }

    #[must_use]
    pub fn keyframes(&self) -> &[KeyFrame] {
        &self.keyframes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> &KeyFrame {
        &self.keyframes[0]
    }

    #[must_use]
    pub fn last(&self) -> &KeyFrame {
        &self.keyframes[self.keyframes.len() - 1]
    }

    /// Instant of the first keyframe.
    #[must_use]
    pub fn start_time(&self) -> f32 {
        self.first().instant
    }

    /// Instant of the last keyframe.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.last().instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn rejects_empty_and_unordered_lists() {
        assert!(AnimationDefinition::new("a", vec![]).is_none());
        let unordered = vec![
            KeyFrame::translation(2.0, Vec3::ZERO),
            KeyFrame::translation(1.0, Vec3::ZERO),
        ];
        assert!(AnimationDefinition::new("a", unordered).is_none());
        let duplicate = vec![
            KeyFrame::translation(1.0, Vec3::ZERO),
            KeyFrame::translation(1.0, Vec3::ZERO),
        ];
        assert!(AnimationDefinition::new("a", duplicate).is_none());
    }

    #[test]
    fn reports_time_range() {
        let def = AnimationDefinition::new(
            "a",
            vec![
                KeyFrame::translation(0.5, Vec3::ZERO),
                KeyFrame::translation(3.0, Vec3::ONE),
            ],
        )
        .unwrap();
        assert_eq!(def.start_time(), 0.5);
        assert_eq!(def.end_time(), 3.0);
    }
}
