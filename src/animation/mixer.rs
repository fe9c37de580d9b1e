use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::animation::action::AnimationPlayback;
use crate::animation::clip::AnimationDefinition;
use crate::scene::{NodeGraph, ResourceTables};

/// Owns one [`AnimationPlayback`] per animated node.
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    playbacks: FxHashMap<String, AnimationPlayback>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh playback for every node whose `animationref`
    /// resolves in `tables`.
    #[must_use]
    pub fn for_scene(graph: &NodeGraph, tables: &ResourceTables) -> Self {
        let mut mixer = Self::new();
        for node in graph.nodes() {
            let Some(animation_id) = &node.animation else {
                continue;
            };
            if let Some(definition) = tables.animations.get(animation_id) {
                mixer.bind(node.id.clone(), Arc::clone(definition));
            }
        }
        mixer
    }

    /// Binds `definition` to `node_id`, replacing any previous playback.
    pub fn bind(&mut self, node_id: impl Into<String>, definition: Arc<AnimationDefinition>) {
        self.bind_playback(node_id, AnimationPlayback::new(definition));
    }

    pub fn bind_playback(&mut self, node_id: impl Into<String>, playback: AnimationPlayback) {
        self.playbacks.insert(node_id.into(), playback);
    }

    #[must_use]
    pub fn get(&self, node_id: &str) -> Option<&AnimationPlayback> {
        self.playbacks.get(node_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.playbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.playbacks.is_empty()
    }

    /// Advances every playback to wall time `now_ms`.
    pub fn update(&mut self, now_ms: f64) {
        for playback in self.playbacks.values_mut() {
            playback.update(now_ms);
        }
    }

    pub fn reset_all(&mut self) {
        for playback in self.playbacks.values_mut() {
            playback.reset();
        }
    }

    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.playbacks.values().all(AnimationPlayback::is_finished)
    }
}
