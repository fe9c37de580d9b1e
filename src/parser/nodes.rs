use glam::{Mat4, Vec3};
use roxmltree::Node;

use crate::errors::{Result, SceneError};
use crate::parser::{SceneLoader, reader};
use crate::scene::{Descendant, MaterialRef, SceneNode, TextureId, TextureRef};

/// Reserved id meaning "use the parent's value".
const INHERIT_ID: &str = "null";
/// Reserved texture id meaning "bind no texture".
const CLEAR_ID: &str = "clear";

impl SceneLoader {
    /// `<nodes>`: every `<node id>` with its transformations, material,
    /// texture, optional animation and descendants.
    ///
    /// A node without an id, a repeated id and a node without
    /// `<descendants>` are fatal. Once every node exists, the root is
    /// checked and dangling `<noderef>`s are pruned.
    pub(crate) fn parse_nodes(&mut self, node: Node) -> Result<()> {
        for child in reader::elements(node) {
            if !child.has_tag_name("node") {
                self.diagnostics
                    .warn(format!("unknown tag <{}> in nodes; ignoring it", reader::tag(child)));
                continue;
            }
            let id = reader::string(child, "id").ok_or(SceneError::MissingNodeId)?;
            if self.graph.contains(id) {
                return Err(SceneError::DuplicateNode(id.to_string()));
            }

            let scene_node = self.parse_node(child, id)?;
            self.graph.insert(scene_node)?;
        }
        Ok(())
    }

    fn parse_node(&mut self, node: Node, id: &str) -> Result<SceneNode> {
        let mut scene_node = SceneNode::new(id);

        match reader::child(node, "transformations") {
            Some(transformations) => scene_node.transform = self.parse_transformations(transformations, id),
            None => self
                .diagnostics
                .warn(format!("there is no transformations tag in node {id}")),
        }

        scene_node.material = match reader::child(node, "material") {
            Some(material) => self.parse_material_ref(material, id),
            None => {
                self.diagnostics.warn(format!(
                    "there is no material tag in node {id}; using parent material"
                ));
                MaterialRef::Inherit
            }
        };

        scene_node.texture = match reader::child(node, "texture") {
            Some(texture) => self.parse_texture_ref(texture, id),
            None => {
                self.diagnostics.warn(format!(
                    "there is no texture tag in node {id}; using parent texture and default amplification"
                ));
                TextureRef::inherit()
            }
        };

        scene_node.animation = reader::child(node, "animationref").and_then(|animation| {
            match reader::string(animation, "id") {
                Some(animation_id) if self.tables.animations.contains_key(animation_id) => {
                    Some(animation_id.to_string())
                }
                _ => {
                    self.diagnostics
                        .warn(format!("animation ID invalid in node {id}; ignoring it"));
                    None
                }
            }
        });

        let descendants =
            reader::child(node, "descendants").ok_or_else(|| SceneError::MissingDescendants(id.to_string()))?;
        scene_node.descendants = self.parse_descendants(descendants, id, &scene_node.texture);

        Ok(scene_node)
    }

    /// Composes `<translation>`, `<rotation>` and `<scale>` in document
    /// order; a malformed operation is skipped on its own.
    fn parse_transformations(&mut self, node: Node, id: &str) -> Mat4 {
        let context = format!("node {id}");
        let mut matrix = Mat4::IDENTITY;

        for op in reader::elements(node) {
            let step = match reader::tag(op) {
                "translation" => reader::point3(op, &context).map(Mat4::from_translation),
                "rotation" => parse_rotation(op, &context),
                "scale" => reader::scale3(op, &context).map(Mat4::from_scale),
                other => Err(format!("unrecognized tag <{other}> in transformations of {context}")),
            };
            match step {
                Ok(step) => matrix *= step,
                Err(message) => self.diagnostics.warn(format!("{message}; ignoring transformation")),
            }
        }
        matrix
    }

    fn parse_material_ref(&mut self, node: Node, id: &str) -> MaterialRef {
        match reader::string(node, "id") {
            Some(INHERIT_ID) => MaterialRef::Inherit,
            Some(material) if self.tables.materials.contains_key(material) => MaterialRef::Named(material.to_string()),
            other => {
                self.diagnostics.warn(format!(
                    "there is no material with id {} (node {id}); using parent material",
                    other.unwrap_or("<none>")
                ));
                MaterialRef::Inherit
            }
        }
    }

    fn parse_texture_ref(&mut self, node: Node, id: &str) -> TextureRef {
        let texture = match reader::string(node, "id") {
            Some(INHERIT_ID) => TextureId::Inherit,
            Some(CLEAR_ID) => TextureId::Clear,
            Some(texture) if self.tables.textures.contains_key(texture) => TextureId::Named(texture.to_string()),
            other => {
                self.diagnostics.warn(format!(
                    "there is no texture with id {} (node {id}); clearing node's texture",
                    other.unwrap_or("<none>")
                ));
                TextureId::Clear
            }
        };
        if texture == TextureId::Clear {
            return TextureRef::clear();
        }

        let Some(amplification) = reader::child(node, "amplification") else {
            self.diagnostics.warn(format!(
                "there is no amplification tag in node {id}; using default value"
            ));
            return TextureRef::new(texture, 1.0, 1.0);
        };
        let mut factor = |name: &str| {
            reader::float(amplification, name).filter(|v| *v > 0.0).unwrap_or_else(|| {
                self.diagnostics
                    .warn(format!("invalid {name} amplification in node {id}; using 1"));
                1.0
            })
        };
        let afs = factor("afs");
        let aft = factor("aft");
        TextureRef::new(texture, afs, aft)
    }

    fn parse_descendants(&mut self, node: Node, id: &str, texture: &TextureRef) -> Vec<Descendant> {
        let mut descendants = Vec::new();
        let mut leaves = 0;

        for child in reader::elements(node) {
            match reader::tag(child) {
                "noderef" => match reader::string(child, "id") {
                    Some(child_id) => descendants.push(Descendant::Composite(child_id.to_string())),
                    None => self
                        .diagnostics
                        .warn(format!("noderef without id in node {id}; ignoring it")),
                },
                "leaf" => {
                    let Some(mut primitive) = self.parse_leaf(child, id) else {
                        continue;
                    };
                    if texture.id != TextureId::Clear {
                        primitive.update_tex_coords(texture.afs, texture.aft);
                    }
                    leaves += 1;
                    descendants.push(Descendant::Leaf(primitive));
                }
                other => self
                    .diagnostics
                    .warn(format!("unknown tag <{other}> in descendants of node {id}; ignoring it")),
            }
        }

        if leaves > 1 {
            self.diagnostics.warn(format!(
                "more than one leaf in node {id}; scene may not be what was expected"
            ));
        }
        descendants
    }
}

fn parse_rotation(node: Node, context: &str) -> reader::AttrResult<Mat4> {
    let angle = reader::float(node, "angle")
        .ok_or_else(|| format!("value of angle invalid in {context}"))?
        .to_radians();
    match reader::string(node, "axis") {
        Some("x") => Ok(Mat4::from_axis_angle(Vec3::X, angle)),
        Some("y") => Ok(Mat4::from_axis_angle(Vec3::Y, angle)),
        Some("z") => Ok(Mat4::from_axis_angle(Vec3::Z, angle)),
        _ => Err(format!("error in axis of {context}")),
    }
}
