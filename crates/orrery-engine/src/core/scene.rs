use glam::{Quat, Vec3};

use crate::api::error::{OrreryError, OrreryResult};
use crate::api::types::NodeId;
use crate::components::node::SceneNode;

/// Scene graph stored as a flat arena.
///
/// Nodes are addressed by `NodeId` (their index) and are never removed, so
/// an id handed out at startup stays valid for the lifetime of the scene.
/// Parent links are indices, not references; world transforms are composed
/// by `extensions::transform::propagate`.
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(256),
        }
    }

    /// Create a scene with a specific node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a top-level node. Returns its id.
    pub fn spawn(&mut self, mut node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.id = id;
        node.parent = None;
        node.children.clear();
        node.world = node.local.matrix();
        self.nodes.push(node);
        id
    }

    /// Add a node as a child of `parent`.
    pub fn spawn_child(&mut self, parent: NodeId, node: SceneNode) -> OrreryResult<NodeId> {
        if self.get(parent).is_none() {
            return Err(OrreryError::UnknownNode(parent));
        }
        let id = self.spawn(node);
        self.attach(id, parent)?;
        Ok(id)
    }

    /// Re-parent `child` under `parent`, detaching it from any previous parent.
    pub fn attach(&mut self, child: NodeId, parent: NodeId) -> OrreryResult<()> {
        if self.get(child).is_none() {
            return Err(OrreryError::UnknownNode(child));
        }
        if self.get(parent).is_none() {
            return Err(OrreryError::UnknownNode(parent));
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(OrreryError::InvalidParent { child, parent });
        }

        if let Some(old) = self.nodes[child.index()].parent {
            self.nodes[old.index()].children.retain(|&c| c != child);
        }
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        Ok(())
    }

    /// Whether `ancestor` appears on the parent chain of `node`.
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = self.get(node).and_then(|n| n.parent);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Get a reference to a node by id.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    /// Get a mutable reference to a node by id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    /// Set the local translation. Returns false if the node does not exist.
    pub fn set_position(&mut self, id: NodeId, position: Vec3) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.local.translation = position;
                true
            }
            None => false,
        }
    }

    /// Set the local rotation. Returns false if the node does not exist.
    pub fn set_rotation(&mut self, id: NodeId, rotation: Quat) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.local.rotation = rotation;
                true
            }
            None => false,
        }
    }

    /// Spin a node about its own (local) vertical axis.
    pub fn rotate_local_y(&mut self, id: NodeId, angle: f32) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.local.rotation = (node.local.rotation * Quat::from_rotation_y(angle)).normalize();
                true
            }
            None => false,
        }
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.visible = visible;
                true
            }
            None => false,
        }
    }

    /// A node is drawn (and pickable) only if it and every ancestor are visible.
    pub fn is_effectively_visible(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.get(current) {
                Some(node) if node.visible => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// World-space position as of the last propagation.
    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.get(id).map(|n| n.world_position())
    }

    /// Ids of all top-level nodes, in spawn order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().filter(|n| n.parent.is_none()).map(|n| n.id)
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }

    /// Iterate over all nodes mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneNode> {
        self.nodes.iter_mut()
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_assigns_sequential_ids() {
        let mut scene = Scene::new();
        let a = scene.spawn(SceneNode::new().with_tag("sun"));
        let b = scene.spawn(SceneNode::new().with_tag("earth"));
        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(scene.get(b).unwrap().tag, "earth");
    }

    #[test]
    fn spawn_child_links_both_ways() {
        let mut scene = Scene::new();
        let planet = scene.spawn(SceneNode::new());
        let moon = scene.spawn_child(planet, SceneNode::new()).unwrap();
        assert_eq!(scene.get(moon).unwrap().parent, Some(planet));
        assert_eq!(scene.get(planet).unwrap().children, vec![moon]);
        assert_eq!(scene.roots().collect::<Vec<_>>(), vec![planet]);
    }

    #[test]
    fn spawn_child_of_missing_parent_fails() {
        let mut scene = Scene::new();
        let result = scene.spawn_child(NodeId(9), SceneNode::new());
        assert!(matches!(result, Err(OrreryError::UnknownNode(NodeId(9)))));
        assert!(scene.is_empty());
    }

    #[test]
    fn attach_rejects_cycles() {
        let mut scene = Scene::new();
        let a = scene.spawn(SceneNode::new());
        let b = scene.spawn_child(a, SceneNode::new()).unwrap();
        assert!(matches!(scene.attach(a, b), Err(OrreryError::InvalidParent { .. })));
        assert!(scene.attach(a, a).is_err());
    }

    #[test]
    fn reattach_moves_child() {
        let mut scene = Scene::new();
        let a = scene.spawn(SceneNode::new());
        let b = scene.spawn(SceneNode::new());
        let c = scene.spawn_child(a, SceneNode::new()).unwrap();
        scene.attach(c, b).unwrap();
        assert!(scene.get(a).unwrap().children.is_empty());
        assert_eq!(scene.get(b).unwrap().children, vec![c]);
    }

    #[test]
    fn hidden_parent_hides_subtree() {
        let mut scene = Scene::new();
        let pivot = scene.spawn(SceneNode::new());
        let mesh = scene.spawn_child(pivot, SceneNode::new()).unwrap();
        assert!(scene.is_effectively_visible(mesh));
        scene.set_visible(pivot, false);
        assert!(!scene.is_effectively_visible(mesh));
        assert!(!scene.is_effectively_visible(NodeId(42)));
    }

    #[test]
    fn setters_report_missing_nodes() {
        let mut scene = Scene::new();
        assert!(!scene.set_position(NodeId(3), Vec3::ONE));
        assert!(!scene.rotate_local_y(NodeId(3), 0.1));
    }

    #[test]
    fn rotate_local_y_accumulates() {
        let mut scene = Scene::new();
        let id = scene.spawn(SceneNode::new());
        scene.rotate_local_y(id, 0.25);
        scene.rotate_local_y(id, 0.25);
        let forward = scene.get(id).unwrap().local.rotation * Vec3::X;
        let expected = Quat::from_rotation_y(0.5) * Vec3::X;
        assert!((forward - expected).length() < 1e-5);
    }
}
