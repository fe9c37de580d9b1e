//! Depth-first scene display.
//!
//! Walks the node graph from the root with an explicit frame stack instead
//! of recursion, so deep hierarchies cannot overflow the call stack. Every
//! node visit is bracketed by `push_matrix`/`pop_matrix`; leaves draw in
//! their parent's transform; after a composite child returns, the parent's
//! material is bound again before its matrix is popped.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::animation::AnimationMixer;
use crate::errors::{Result, SceneError};
use crate::renderer::context::RenderContext;
use crate::resources::{Material, Texture};
use crate::scene::{Descendant, MaterialRef, NodeGraph, ResourceTables, SceneNode, TextureId};

/// Traversal state of one node on the active path.
struct Frame<'a> {
    node: &'a SceneNode,
    material_ref: MaterialRef,
    texture_id: TextureId,
    material: &'a Material,
    texture: Option<&'a Texture>,
    next_descendant: usize,
}

impl Frame<'_> {
    fn bind(&self, ctx: &mut dyn RenderContext) {
        ctx.apply_material(self.material, self.texture);
    }
}

/// Issues the draw calls for one frame of the scene.
///
/// Per node: push, multiply the local transform, apply the node's
/// animation (when `mixer` holds a playback for it), resolve the effective
/// material and texture against the parent's, bind them, then visit the
/// descendants in declared order.
///
/// Fails with [`SceneError::UnknownNode`] on a dangling composite
/// reference and [`SceneError::CycleDetected`] when a node is reached again
/// while still on the active path. On failure every outstanding push is
/// popped, so the host's matrix stack stays balanced either way.
pub fn display_scene(
    graph: &NodeGraph,
    tables: &ResourceTables,
    mixer: &AnimationMixer,
    ctx: &mut dyn RenderContext,
) -> Result<()> {
    let root = graph
        .root()
        .ok_or_else(|| SceneError::UnknownRootNode(graph.root_id().to_string()))?;

    let mut stack: SmallVec<[Frame<'_>; 16]> = SmallVec::new();
    let mut on_path: FxHashSet<&str> = FxHashSet::default();

    let root_frame = enter(root, &MaterialRef::Inherit, &TextureId::Inherit, tables, mixer, ctx);
    on_path.insert(root.id.as_str());
    stack.push(root_frame);

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;

        let Some(descendant) = node.descendants.get(frame.next_descendant) else {
            // Subtree done: leave the node.
            on_path.remove(node.id.as_str());
            stack.pop();
            if let Some(parent) = stack.last() {
                parent.bind(ctx);
            }
            ctx.pop_matrix();
            continue;
        };
        frame.next_descendant += 1;

        match descendant {
            Descendant::Leaf(primitive) => primitive.display(tables, ctx),
            Descendant::Composite(child_id) => {
                let child = match resolve_child(graph, &on_path, node, child_id) {
                    Ok(child) => child,
                    Err(err) => {
                        unwind(stack.len(), ctx);
                        return Err(err);
                    }
                };
                let child_frame = enter(child, &frame.material_ref, &frame.texture_id, tables, mixer, ctx);
                on_path.insert(child.id.as_str());
                stack.push(child_frame);
            }
        }
    }

    Ok(())
}

fn resolve_child<'a>(
    graph: &'a NodeGraph,
    on_path: &FxHashSet<&str>,
    parent: &SceneNode,
    child_id: &str,
) -> Result<&'a SceneNode> {
    let child = graph.get(child_id).ok_or_else(|| SceneError::UnknownNode {
        parent: parent.id.clone(),
        child: child_id.to_string(),
    })?;
    if on_path.contains(child_id) {
        return Err(SceneError::CycleDetected {
            node: child_id.to_string(),
        });
    }
    Ok(child)
}

fn enter<'a>(
    node: &'a SceneNode,
    inherited_material: &MaterialRef,
    inherited_texture: &TextureId,
    tables: &'a ResourceTables,
    mixer: &AnimationMixer,
    ctx: &mut dyn RenderContext,
) -> Frame<'a> {
    ctx.push_matrix();
    ctx.mult_matrix(&node.transform);
    if let Some(playback) = mixer.get(&node.id) {
        playback.apply(ctx);
    }

    let material_ref = node.material.resolve(inherited_material);
    let texture_id = node.texture.id.resolve(inherited_texture);
    let frame = Frame {
        node,
        material: tables.resolve_material(&material_ref),
        texture: tables.resolve_texture(&texture_id),
        material_ref,
        texture_id,
        next_descendant: 0,
    };
    frame.bind(ctx);
    frame
}

fn unwind(depth: usize, ctx: &mut dyn RenderContext) {
    log::error!("scene traversal aborted at depth {depth}");
    for _ in 0..depth {
        ctx.pop_matrix();
    }
}
