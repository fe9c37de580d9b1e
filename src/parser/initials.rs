use roxmltree::Node;

use crate::errors::{Result, SceneError};
use crate::parser::{SceneLoader, reader};
use crate::scene::Initials;

impl SceneLoader {
    /// `<initials>`: the root node id (fatal when absent) and the
    /// reference axis length (defaults to 1).
    pub(crate) fn parse_initials(&mut self, node: Node) -> Result<()> {
        let root_id = reader::child(node, "root")
            .and_then(|root| reader::string(root, "id"))
            .ok_or(SceneError::MissingRootId)?;

        let mut initials = Initials::new(root_id);
        match reader::child(node, "reference").and_then(|r| reader::non_negative(r, "length")) {
            Some(length) => initials.reference_length = length,
            None => self
                .diagnostics
                .warn("no axis length defined for scene; assuming 'length = 1'"),
        }

        self.graph.set_root(root_id);
        self.initials = Some(initials);
        Ok(())
    }
}
