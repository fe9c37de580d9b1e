use glam::Mat4;

use crate::resources::primitives::Primitive;

/// A node's material reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MaterialRef {
    /// Use the parent's resolved material (`id="null"` in documents).
    #[default]
    Inherit,
    /// A key of the materials table.
    Named(String),
}

impl MaterialRef {
    /// Resolves against the parent's effective value.
    #[must_use]
    pub fn resolve(&self, inherited: &MaterialRef) -> MaterialRef {
        match self {
            Self::Inherit => inherited.clone(),
            named @ Self::Named(_) => named.clone(),
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Inherit => None,
            Self::Named(id) => Some(id),
        }
    }
}

/// A node's texture binding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TextureId {
    /// Use the parent's resolved texture (`id="null"` in documents).
    #[default]
    Inherit,
    /// Bind no texture (`id="clear"`).
    Clear,
    /// A key of the textures table.
    Named(String),
}

impl TextureId {
    /// Resolves against the parent's effective value.
    #[must_use]
    pub fn resolve(&self, inherited: &TextureId) -> TextureId {
        match self {
            Self::Inherit => inherited.clone(),
            other => other.clone(),
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Named(id) => Some(id),
            Self::Inherit | Self::Clear => None,
        }
    }
}

/// Texture binding plus the `afs`/`aft` amplification factors.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRef {
    pub id: TextureId,
    pub afs: f32,
    pub aft: f32,
}

impl TextureRef {
    #[must_use]
    pub fn new(id: TextureId, afs: f32, aft: f32) -> Self {
        Self { id, afs, aft }
    }

    #[must_use]
    pub fn inherit() -> Self {
        Self::new(TextureId::Inherit, 1.0, 1.0)
    }

    #[must_use]
    pub fn clear() -> Self {
        Self::new(TextureId::Clear, 1.0, 1.0)
    }
}

impl Default for TextureRef {
    fn default() -> Self {
        Self::inherit()
    }
}

/// One entry of a node's `<descendants>`.
#[derive(Debug, Clone)]
pub enum Descendant {
    /// `<noderef id>`: edge to another node of the graph.
    Composite(String),
    /// `<leaf type>`: inline primitive drawn in the node's transform.
    Leaf(Primitive),
}

impl Descendant {
    #[must_use]
    pub fn child_id(&self) -> Option<&str> {
        match self {
            Self::Composite(id) => Some(id),
            Self::Leaf(_) => None,
        }
    }
}

/// A named node of the scene graph.
///
/// Everything but animation playback is fixed after parsing.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub id: String,
    /// Local transform composed from the node's ordered operations.
    pub transform: Mat4,
    pub material: MaterialRef,
    pub texture: TextureRef,
    /// Key of the animations table, if the node is animated.
    pub animation: Option<String>,
    pub descendants: Vec<Descendant>,
}

impl SceneNode {
    /// An identity node inheriting material and texture, with no children.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            transform: Mat4::IDENTITY,
            material: MaterialRef::Inherit,
            texture: TextureRef::inherit(),
            animation: None,
            descendants: Vec::new(),
        }
    }

    /// Ids of composite children in declared order.
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.descendants.iter().filter_map(Descendant::child_id)
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.descendants
            .iter()
            .filter(|d| matches!(d, Descendant::Leaf(_)))
            .count()
    }
}
