use glam::Vec3;
use roxmltree::Node;

use crate::parser::reader::{self, AttrResult};
use crate::parser::SceneLoader;
use crate::scene::{Camera, DEFAULT_CAMERA_ID};

impl SceneLoader {
    /// `<views default>`: perspective and orthographic cameras.
    ///
    /// A malformed camera is dropped on its own. When none survive, the
    /// fallback camera is registered as `"default"`.
    pub(crate) fn parse_views(&mut self, node: Node) {
        for child in reader::elements(node) {
            let kind = reader::tag(child);
            if kind != "perspective" && kind != "ortho" {
                self.diagnostics
                    .warn(format!("unrecognized tag <{kind}> found in views; ignoring it"));
                continue;
            }
            let Some(id) = reader::string(child, "id") else {
                self.diagnostics.warn(format!("no ID defined for {kind} camera; ignoring it"));
                continue;
            };

            let parsed = if kind == "perspective" {
                parse_perspective(child, id)
            } else {
                self.parse_ortho(child, id)
            };
            match parsed {
                Ok(camera) => {
                    if !self.tables.insert_camera(id, camera) {
                        self.diagnostics.warn(format!(
                            "ID must be unique for each camera (conflict: ID = {id}); ignoring it"
                        ));
                    }
                }
                Err(message) => self.diagnostics.warn(format!("{message}; ignoring camera {id}")),
            }
        }

        if self.tables.camera_count() == 0 {
            self.diagnostics.warn("no cameras detected; using default camera");
            self.tables.insert_camera(DEFAULT_CAMERA_ID, Camera::fallback());
        }

        let first = self.tables.camera_ids()[0].clone();
        self.default_camera = match reader::string(node, "default") {
            Some(id) if self.tables.camera(id).is_some() => id.to_string(),
            Some(id) => {
                self.diagnostics
                    .warn(format!("default camera {id} does not exist; using {first}"));
                first
            }
            None => {
                self.diagnostics
                    .warn(format!("no default camera defined; using {first}"));
                first
            }
        };
    }

    fn parse_ortho(&mut self, node: Node, id: &str) -> AttrResult<Camera> {
        let (near, far) = clip_planes(node, id)?;
        let bound = |name: &str| {
            reader::float(node, name)
                .ok_or_else(|| format!("error in reading {name} attribute of camera {id}"))
        };
        let left = bound("left")?;
        let right = bound("right")?;
        let top = bound("top")?;
        let bottom = bound("bottom")?;
        let (from, to) = eye(node, id)?;

        let up = match reader::child(node, "up") {
            None => Vec3::Y,
            Some(up) => reader::point3(up, &format!("<up> tag of camera {id}")).unwrap_or_else(|message| {
                self.diagnostics.warn(format!("{message}; using default value"));
                Vec3::Y
            }),
        };

        Ok(Camera::orthographic(left, right, bottom, top, near, far, from, to, up))
    }
}

fn parse_perspective(node: Node, id: &str) -> AttrResult<Camera> {
    let (near, far) = clip_planes(node, id)?;
    let angle = reader::float(node, "angle")
        .ok_or_else(|| format!("error in reading angle attribute of camera {id}"))?;
    let (from, to) = eye(node, id)?;
    Ok(Camera::perspective(angle.to_radians(), near, far, from, to))
}

/// `near` and `far`, both non-negative with `near < far`.
fn clip_planes(node: Node, id: &str) -> AttrResult<(f32, f32)> {
    let near = reader::non_negative(node, "near")
        .ok_or_else(|| format!("error in reading near attribute of camera {id}"))?;
    let far = reader::non_negative(node, "far")
        .ok_or_else(|| format!("error in reading far attribute of camera {id}"))?;
    if near >= far {
        return Err(format!("near ({near}) must be less than far ({far}) in camera {id}"));
    }
    Ok((near, far))
}

/// The required `<from>` and `<to>` points.
fn eye(node: Node, id: &str) -> AttrResult<(Vec3, Vec3)> {
    let point = |tag: &str| {
        let element = reader::child(node, tag).ok_or_else(|| format!("missing <{tag}> tag of camera {id}"))?;
        reader::point3(element, &format!("<{tag}> tag of camera {id}"))
    };
    Ok((point("from")?, point("to")?))
}
