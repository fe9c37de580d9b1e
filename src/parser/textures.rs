use roxmltree::Node;

use crate::parser::{SceneLoader, reader};
use crate::resources::{Spritesheet, Texture};

impl SceneLoader {
    /// `<textures>`: `<texture id path>` entries.
    pub(crate) fn parse_textures(&mut self, node: Node) {
        for (index, child) in reader::elements(node).enumerate() {
            if !child.has_tag_name("texture") {
                self.diagnostics
                    .warn(format!("unknown tag <{}> in textures", reader::tag(child)));
                continue;
            }
            let Some(id) = reader::string(child, "id") else {
                self.diagnostics.warn(format!("no ID defined for texture {}", index + 1));
                continue;
            };
            if self.tables.textures.contains_key(id) {
                self.diagnostics.warn(format!(
                    "ID must be unique for each texture (conflict: ID = {id}); ignoring it"
                ));
                continue;
            }
            let Some(path) = reader::string(child, "path") else {
                self.diagnostics.warn(format!("no path defined for texture {id}; ignoring it"));
                continue;
            };
            self.tables.textures.insert(id.to_string(), Texture::new(id, path));
        }
    }

    /// `<spritesheets>`: `<spritesheet id path sizeM sizeN>` grids.
    pub(crate) fn parse_spritesheets(&mut self, node: Node) {
        for (index, child) in reader::elements(node).enumerate() {
            if !child.has_tag_name("spritesheet") {
                self.diagnostics
                    .warn(format!("unknown tag <{}> in spritesheets", reader::tag(child)));
                continue;
            }
            let Some(id) = reader::string(child, "id") else {
                self.diagnostics.warn(format!("no ID defined for spritesheet {}", index + 1));
                continue;
            };
            if self.tables.spritesheets.contains_key(id) {
                self.diagnostics.warn(format!(
                    "ID must be unique for each spritesheet (conflict: ID = {id}); ignoring it"
                ));
                continue;
            }
            let Some(path) = reader::string(child, "path") else {
                self.diagnostics.warn(format!("no path defined for spritesheet {id}; ignoring it"));
                continue;
            };

            let size = |name: &str| reader::count(child, name).filter(|n| *n > 0);
            let (Some(size_m), Some(size_n)) = (size("sizeM"), size("sizeN")) else {
                self.diagnostics.warn(format!(
                    "sizeM and sizeN of spritesheet {id} must be positive numbers; ignoring it"
                ));
                continue;
            };

            let sheet = Spritesheet::new(id, Texture::new(id, path), size_m, size_n);
            self.tables.spritesheets.insert(id.to_string(), sheet);
        }
    }
}
