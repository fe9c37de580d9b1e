use glam::Vec4;
use roxmltree::Node;

use crate::parser::{SceneLoader, reader};
use crate::resources::Material;
use crate::resources::material::{FALLBACK_COMPONENT, FALLBACK_SHININESS};

const COLOR_TAGS: [&str; 4] = ["ambient", "diffuse", "specular", "emissive"];

impl SceneLoader {
    /// `<materials>`: `<material id>` with `shininess`, `ambient`,
    /// `diffuse`, `specular` and `emissive` children.
    ///
    /// An invalid component falls back on its own; a missing component
    /// replaces the whole material with [`Material::fallback`].
    pub(crate) fn parse_materials(&mut self, node: Node) {
        for child in reader::elements(node) {
            if !child.has_tag_name("material") {
                self.diagnostics
                    .warn(format!("unknown tag <{}> in materials; ignoring it", reader::tag(child)));
                continue;
            }
            let Some(id) = reader::string(child, "id") else {
                self.diagnostics.warn("no ID defined for material; ignoring it");
                continue;
            };
            if self.tables.materials.contains_key(id) {
                self.diagnostics.warn(format!(
                    "ID must be unique for each material (conflict: ID = {id}); ignoring it"
                ));
                continue;
            }
            let material = self.parse_material(child, id);
            self.tables.materials.insert(id.to_string(), material);
        }
    }

    fn parse_material(&mut self, node: Node, id: &str) -> Material {
        let mut shininess = None;
        let mut colors: [Option<Vec4>; 4] = [None; 4];

        for component in reader::elements(node) {
            let tag = reader::tag(component);
            if tag == "shininess" {
                let value = reader::non_negative(component, "value").unwrap_or_else(|| {
                    self.diagnostics.warn(format!(
                        "shininess component from material {id} is incorrect; using default value of {FALLBACK_SHININESS}"
                    ));
                    FALLBACK_SHININESS
                });
                shininess = Some(value);
            } else if let Some(slot) = COLOR_TAGS.iter().position(|t| *t == tag) {
                let color = reader::color(component, &format!("{tag} of material {id}")).unwrap_or_else(|message| {
                    self.diagnostics.warn(message);
                    FALLBACK_COMPONENT
                });
                colors[slot] = Some(color);
            } else {
                self.diagnostics
                    .warn(format!("unknown tag <{tag}> in material {id}; ignoring it"));
            }
        }

        match (shininess, colors) {
            (Some(shininess), [Some(ambient), Some(diffuse), Some(specular), Some(emissive)]) => {
                Material::new(ambient, diffuse, specular, emissive, shininess)
            }
            _ => {
                self.diagnostics
                    .warn(format!("missing tags on material {id}; using default material"));
                Material::fallback()
            }
        }
    }
}
