use std::sync::Arc;

use glam::Vec3;
use roxmltree::Node;

use crate::animation::{AnimationDefinition, KeyFrame, KeyframeTransform};
use crate::parser::reader::{self, AttrResult};
use crate::parser::SceneLoader;

/// Element children a `<keyframe>` must have: translation, three rotations
/// and scale.
const KEYFRAME_CHILDREN: usize = 5;

impl SceneLoader {
    /// `<animations>`: `<animation id>` timelines of `<keyframe instant>`.
    ///
    /// Malformed or out-of-order keyframes are dropped individually; an
    /// animation left without keyframes is dropped as a whole.
    pub(crate) fn parse_animations(&mut self, node: Node) {
        for child in reader::elements(node) {
            if !child.has_tag_name("animation") {
                self.diagnostics
                    .warn(format!("unknown tag <{}> in animations; ignoring it", reader::tag(child)));
                continue;
            }
            let Some(id) = reader::string(child, "id") else {
                self.diagnostics.warn("no ID defined for animation; ignoring it");
                continue;
            };
            if self.tables.animations.contains_key(id) {
                self.diagnostics.warn(format!(
                    "ID must be unique for each animation (conflict: ID = {id}); ignoring it"
                ));
                continue;
            }

            let keyframes = self.parse_keyframes(child, id);
            match AnimationDefinition::new(id, keyframes) {
                Some(definition) => {
                    self.tables.animations.insert(id.to_string(), Arc::new(definition));
                }
                None => self
                    .diagnostics
                    .warn(format!("there isn't any valid keyframe in animation {id}; ignoring it")),
            }
        }
    }

    fn parse_keyframes(&mut self, node: Node, id: &str) -> Vec<KeyFrame> {
        let mut keyframes: Vec<KeyFrame> = Vec::new();

        for child in reader::elements(node) {
            if !child.has_tag_name("keyframe") {
                self.diagnostics
                    .warn(format!("unknown tag <{}> in animation {id}; ignoring it", reader::tag(child)));
                continue;
            }
            let Some(instant) = reader::float(child, "instant") else {
                self.diagnostics
                    .warn(format!("no instant defined for keyframe in animation {id}; ignoring it"));
                continue;
            };
            let last = keyframes.last().map(|k| k.instant);
            if instant < 0.0 || last.is_some_and(|last| instant <= last) {
                self.diagnostics.warn(format!(
                    "instant {instant} of keyframe in animation {id} is invalid or out of order; ignoring it"
                ));
                continue;
            }
            if reader::elements(child).count() != KEYFRAME_CHILDREN {
                self.diagnostics.warn(format!(
                    "missing one or more transformations in animation {id}; ignoring keyframe"
                ));
                continue;
            }

            match parse_keyframe_transform(child, id) {
                Ok(transform) => keyframes.push(KeyFrame::new(instant, transform)),
                Err(message) => self.diagnostics.warn(format!("{message}; ignoring keyframe")),
            }
        }
        keyframes
    }
}

/// One translation, one rotation per axis and one scale, in any order.
fn parse_keyframe_transform(node: Node, id: &str) -> AttrResult<KeyframeTransform> {
    let context = format!("animation {id}");
    let mut translation = None;
    let mut angles: [Option<f32>; 3] = [None; 3];
    let mut scale = None;

    for op in reader::elements(node) {
        match reader::tag(op) {
            "translation" if translation.is_none() => translation = Some(reader::point3(op, &context)?),
            "translation" => return Err(format!("more than one translation in {context}")),
            "rotation" => {
                let angle = reader::float(op, "angle")
                    .ok_or_else(|| format!("value of angle invalid in {context}"))?;
                let slot = match reader::string(op, "axis") {
                    Some("x") => 0,
                    Some("y") => 1,
                    Some("z") => 2,
                    _ => return Err(format!("error in rotation axis of {context}")),
                };
                if angles[slot].replace(angle.to_radians()).is_some() {
                    return Err(format!("repeated rotation axis in {context}"));
                }
            }
            "scale" if scale.is_none() => scale = Some(reader::scale3(op, &context)?),
            "scale" => return Err(format!("more than one scale in {context}")),
            other => return Err(format!("unknown transformation <{other}> in {context}")),
        }
    }

    match (translation, angles, scale) {
        (Some(translation), [Some(x), Some(y), Some(z)], Some(scale)) => {
            Ok(KeyframeTransform::new(translation, Vec3::new(x, y, z), scale))
        }
        _ => Err(format!("missing one or more transformations in {context}")),
    }
}
