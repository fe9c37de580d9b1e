//! LSF Document Parser
//!
//! Turns an `<lsf>` XML document into a [`LoadedScene`]. Sections are
//! parsed in their canonical order regardless of where they appear in the
//! document:
//!
//! | section          | required | parsed by               |
//! |------------------|----------|-------------------------|
//! | `<initials>`     | yes      | [`initials`]            |
//! | `<views>`        | yes      | [`views`]               |
//! | `<illumination>` | yes      | [`illumination`]        |
//! | `<lights>`       | yes      | [`illumination`]        |
//! | `<textures>`     | yes      | [`textures`]            |
//! | `<spritesheets>` | no       | [`textures`]            |
//! | `<materials>`    | yes      | [`materials`]           |
//! | `<animations>`   | no       | [`animations`]          |
//! | `<nodes>`        | yes      | [`nodes`], [`primitives`] |
//!
//! Fatal problems abort the load with a [`SceneError`] and no scene is
//! produced. Everything else is recorded in [`Diagnostics`] and parsing
//! continues with the documented fallback.

pub mod animations;
pub mod diagnostics;
pub mod illumination;
pub mod initials;
pub mod materials;
pub mod nodes;
pub mod primitives;
pub(crate) mod reader;
pub mod textures;
pub mod views;

pub use diagnostics::Diagnostics;

use roxmltree::{Document, Node};

use crate::errors::{Result, SceneError};
use crate::scene::{Illumination, Initials, Light, LoadedScene, NodeGraph, ResourceTables};

/// Top-level sections in canonical order, with whether each is required.
const SECTIONS: [(&str, bool); 9] = [
    ("initials", true),
    ("views", true),
    ("illumination", true),
    ("lights", true),
    ("textures", true),
    ("spritesheets", false),
    ("materials", true),
    ("animations", false),
    ("nodes", true),
];

/// Parses a complete LSF document.
///
/// # Example
///
/// ```rust,ignore
/// let scene = lsf::parse_document(&std::fs::read_to_string("scene.xml")?)?;
/// println!("root = {}", scene.root_id());
/// ```
pub fn parse_document(text: &str) -> Result<LoadedScene> {
    let document = Document::parse(text)?;
    SceneLoader::default().load(document.root_element())
}

/// Accumulates parse results section by section.
#[derive(Debug, Default)]
pub(crate) struct SceneLoader {
    pub(crate) diagnostics: Diagnostics,
    pub(crate) initials: Option<Initials>,
    pub(crate) illumination: Illumination,
    pub(crate) lights: Vec<Light>,
    pub(crate) default_camera: String,
    pub(crate) tables: ResourceTables,
    pub(crate) graph: NodeGraph,
}

impl SceneLoader {
    fn load(mut self, root: Node) -> Result<LoadedScene> {
        if !root.has_tag_name("lsf") {
            return Err(SceneError::UnexpectedRootTag(reader::tag(root).to_string()));
        }

        let names: Vec<&str> = reader::elements(root).map(reader::tag).collect();
        let sections: Vec<Node> = reader::elements(root).collect();

        let mut expected = 0;
        for (name, required) in SECTIONS {
            let Some(index) = names.iter().position(|n| *n == name) else {
                if required {
                    log::error!("tag <{name}> missing");
                    return Err(SceneError::MissingSection(name));
                }
                continue;
            };
            if index != expected {
                self.diagnostics.warn(format!("tag <{name}> out of order"));
            }
            self.parse_section(name, sections[index])?;
            expected += 1;
        }

        self.finish()
    }

    fn parse_section(&mut self, name: &str, node: Node) -> Result<()> {
        match name {
            "initials" => self.parse_initials(node)?,
            "views" => self.parse_views(node),
            "illumination" => self.parse_illumination(node)?,
            "lights" => self.parse_lights(node)?,
            "textures" => self.parse_textures(node),
            "spritesheets" => self.parse_spritesheets(node),
            "materials" => self.parse_materials(node),
            "animations" => self.parse_animations(node),
            "nodes" => self.parse_nodes(node)?,
            _ => {}
        }
        log::info!("parsed <{name}>");
        Ok(())
    }

    /// Root check and dangling-reference pruning, once every node exists.
    fn verify_nodes(&mut self) -> Result<()> {
        let root = self.graph.root_id();
        if !self.graph.contains(root) {
            return Err(SceneError::UnknownRootNode(root.to_string()));
        }
        for (parent, child) in self.graph.prune_dangling() {
            self.diagnostics
                .warn(format!("there isn't a node with id {child} (referenced by {parent}); ignoring it"));
        }
        Ok(())
    }

    fn finish(mut self) -> Result<LoadedScene> {
        self.verify_nodes()?;
        let initials = self.initials.ok_or(SceneError::MissingRootId)?;
        log::info!(
            "scene loaded: {} nodes, {} cameras, {} warnings",
            self.graph.len(),
            self.tables.camera_count(),
            self.diagnostics.len()
        );
        Ok(LoadedScene {
            initials,
            illumination: self.illumination,
            lights: self.lights,
            default_camera: self.default_camera,
            graph: self.graph,
            tables: self.tables,
            diagnostics: self.diagnostics,
        })
    }
}
