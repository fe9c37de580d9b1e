use roxmltree::Node;

use crate::errors::{Result, SceneError};
use crate::parser::{SceneLoader, reader};
use crate::scene::{Illumination, Light};

/// Lights a fixed-function host can enable at once.
pub const MAX_LIGHTS: usize = 8;

impl SceneLoader {
    /// `<illumination>`: `<ambient>` and `<background>` colors, both required.
    pub(crate) fn parse_illumination(&mut self, node: Node) -> Result<()> {
        let color = |tag: &str| {
            let element = reader::child(node, tag)
                .ok_or_else(|| SceneError::InvalidIllumination(format!("<{tag}> missing")))?;
            reader::color(element, &format!("{tag} illumination")).map_err(SceneError::InvalidIllumination)
        };
        self.illumination = Illumination {
            ambient: color("ambient")?,
            background: color("background")?,
        };
        Ok(())
    }

    /// `<lights>`: every `<light id>` needs `enable`, `position`, `ambient`,
    /// `diffuse` and `specular` children.
    ///
    /// Unlike every other element, a light with a missing or malformed
    /// component aborts the whole document load.
    pub(crate) fn parse_lights(&mut self, node: Node) -> Result<()> {
        for (index, child) in reader::elements(node).enumerate() {
            if !child.has_tag_name("light") {
                self.diagnostics
                    .warn(format!("unknown tag <{}> in lights", reader::tag(child)));
                continue;
            }
            let Some(id) = reader::string(child, "id") else {
                self.diagnostics.warn(format!("no ID defined for light {}", index + 1));
                continue;
            };
            if self.lights.iter().any(|light| light.id == id) {
                self.diagnostics.warn(format!(
                    "ID must be unique for each light (conflict: ID = {id}); ignoring it"
                ));
                continue;
            }
            let light = self.parse_light(child, id)?;
            self.lights.push(light);
        }

        if self.lights.is_empty() {
            self.diagnostics.warn("no lights detected; using default light");
            self.lights.push(Light::fallback());
        } else if self.lights.len() > MAX_LIGHTS {
            self.diagnostics
                .warn(format!("too many lights defined; only {MAX_LIGHTS} will be enabled"));
        }
        Ok(())
    }

    fn parse_light(&mut self, node: Node, id: &str) -> Result<Light> {
        let invalid = |reason: String| SceneError::InvalidLight {
            light: id.to_string(),
            reason,
        };
        let component = |tag: &str| reader::child(node, tag).ok_or_else(|| invalid(format!("<{tag}> undefined")));

        let enable = component("enable")?;
        let enabled = reader::boolean(enable, "value").unwrap_or_else(|| {
            self.diagnostics.warn(format!(
                "unable to parse enable value of light {id}; assuming 'value = 1'"
            ));
            true
        });

        let position = reader::point4(component("position")?, &format!("light position for ID {id}")).map_err(invalid)?;
        let color = |tag: &str| {
            reader::color(component(tag)?, &format!("{tag} illumination for ID {id}")).map_err(invalid)
        };

        Ok(Light {
            id: id.to_string(),
            enabled,
            position,
            ambient: color("ambient")?,
            diffuse: color("diffuse")?,
            specular: color("specular")?,
        })
    }
}
