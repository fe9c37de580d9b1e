use crate::parser::Diagnostics;
use crate::scene::camera::Camera;
use crate::scene::environment::{Illumination, Initials};
use crate::scene::graph::NodeGraph;
use crate::scene::light::Light;
use crate::scene::tables::ResourceTables;

/// Everything a successfully parsed document produced.
///
/// Only ever constructed whole: a fatal error during parsing yields no
/// `LoadedScene` at all.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub initials: Initials,
    pub illumination: Illumination,
    /// Lights in declaration order; never empty.
    pub lights: Vec<Light>,
    /// Id of the initially active camera; always present in the tables.
    pub default_camera: String,
    pub graph: NodeGraph,
    pub tables: ResourceTables,
    /// Minor problems recovered from while parsing.
    pub diagnostics: Diagnostics,
}

impl LoadedScene {
    #[must_use]
    pub fn root_id(&self) -> &str {
        self.graph.root_id()
    }

    #[must_use]
    pub fn default_camera(&self) -> Option<&Camera> {
        self.tables.camera(&self.default_camera)
    }

    #[must_use]
    pub fn light(&self, id: &str) -> Option<&Light> {
        self.lights.iter().find(|light| light.id == id)
    }
}
