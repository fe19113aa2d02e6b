// graph.rs - Scene node hierarchy
//
// Just enough of a scene graph to answer "where is this node in world
// space right now". Nodes live in an arena; a parent is always created
// before its children, so parent chains can't form cycles.
//
// Nodes can be unmounted (removed from the scene by the host). Queries on
// an unmounted node, or one below an unmounted ancestor, return None.

use glam::{Affine3A, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    local: Affine3A,
    mounted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent` (or at the root).
    pub fn add(&mut self, parent: Option<NodeId>, local: Affine3A) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { parent, local, mounted: true });
        id
    }

    /// Add a node with only a translation.
    pub fn add_at(&mut self, parent: Option<NodeId>, translation: Vec3) -> NodeId {
        self.add(parent, Affine3A::from_translation(translation))
    }

    /// Replace a node's local transform. Descendants follow on the next query.
    pub fn set_local(&mut self, id: NodeId, translation: Vec3, rotation: Quat) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.local = Affine3A::from_rotation_translation(rotation, translation);
        }
    }

    pub fn set_mounted(&mut self, id: NodeId, mounted: bool) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.mounted = mounted;
        }
    }

    /// True only if the node and all its ancestors are mounted.
    pub fn is_mounted(&self, id: NodeId) -> bool {
        self.world_transform(id).is_some()
    }

    /// Compose local transforms from the root down to `id`.
    pub fn world_transform(&self, id: NodeId) -> Option<Affine3A> {
        let node = self.nodes.get(id.0).filter(|n| n.mounted)?;
        let mut world = node.local;
        let mut next = node.parent;
        while let Some(pid) = next {
            let parent = self.nodes.get(pid.0).filter(|n| n.mounted)?;
            world = parent.local * world;
            next = parent.parent;
        }
        Some(world)
    }

    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.world_transform(id).map(|t| Vec3::from(t.translation))
    }
}
