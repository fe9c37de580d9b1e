use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};

use crate::errors::{Result, SceneError};
use crate::scene::node::{Descendant, SceneNode};

new_key_type! {
    pub struct NodeKey;
}

/// Arena of scene nodes addressed by their document ids.
///
/// Iteration follows insertion order, which is document order for parsed
/// graphs.
#[derive(Debug, Clone, Default)]
pub struct NodeGraph {
    nodes: SlotMap<NodeKey, SceneNode>,
    index: FxHashMap<String, NodeKey>,
    root: String,
}

impl NodeGraph {
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            index: FxHashMap::default(),
            root: root.into(),
        }
    }

    #[must_use]
    pub fn root_id(&self) -> &str {
        &self.root
    }

    pub fn set_root(&mut self, root: impl Into<String>) {
        self.root = root.into();
    }

    #[must_use]
    pub fn root(&self) -> Option<&SceneNode> {
        self.get(&self.root)
    }

    /// Inserts `node`; a node with the same id is a [`SceneError::DuplicateNode`].
    pub fn insert(&mut self, node: SceneNode) -> Result<NodeKey> {
        if self.index.contains_key(&node.id) {
            return Err(SceneError::DuplicateNode(node.id));
        }
        let id = node.id.clone();
        let key = self.nodes.insert(node);
        self.index.insert(id, key);
        Ok(key)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SceneNode> {
        self.index.get(id).and_then(|&key| self.nodes.get(key))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every composite descendant naming a missing node.
    ///
    /// Returns `(parent, child)` for each pruned edge in document order.
    pub fn prune_dangling(&mut self) -> Vec<(String, String)> {
        let Self { nodes, index, .. } = self;
        let mut pruned = Vec::new();

        for node in nodes.values_mut() {
            let SceneNode { id, descendants, .. } = node;
            descendants.retain(|descendant| match descendant {
                Descendant::Composite(child) if !index.contains_key(child) => {
                    pruned.push((id.clone(), child.clone()));
                    false
                }
                _ => true,
            });
        }
        pruned
    }

    /// Composite edges whose target is not in the graph.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        self.nodes
            .values()
            .flat_map(|node| {
                node.child_ids()
                    .filter(|child| !self.contains(child))
                    .map(move |child| (node.id.as_str(), child))
            })
            .collect()
    }
}
