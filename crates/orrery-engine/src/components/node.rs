use glam::{Mat4, Quat, Vec3};

use crate::api::types::NodeId;
use crate::components::mesh::MeshComponent;

/// Local transform of a node relative to its parent (or the world for roots).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A node in the scene graph arena.
///
/// Nodes only own placement; geometry lives in the optional mesh and is
/// built by whatever renderer consumes the frame.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub id: NodeId,
    /// Name for finding nodes and for debugging.
    pub tag: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub local: Transform,
    /// World matrix, refreshed by `extensions::transform::propagate`.
    pub world: Mat4,
    /// Hidden nodes hide their whole subtree.
    pub visible: bool,
    /// Re-oriented every tick to face the camera.
    pub billboard: bool,
    pub mesh: Option<MeshComponent>,
}

impl SceneNode {
    /// Create a detached node; `Scene::spawn` assigns the real id.
    pub fn new() -> Self {
        Self {
            id: NodeId(0),
            tag: String::new(),
            parent: None,
            children: Vec::new(),
            local: Transform::IDENTITY,
            world: Mat4::IDENTITY,
            visible: true,
            billboard: false,
            mesh: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.local.translation = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.local.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.local.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn as_billboard(mut self) -> Self {
        self.billboard = true;
        self
    }

    /// World-space position from the cached world matrix.
    pub fn world_position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }

    /// Largest world scale factor (used to scale pick spheres).
    pub fn world_max_scale(&self) -> f32 {
        let (scale, _, _) = self.world.to_scale_rotation_translation();
        scale.max_element()
    }
}

impl Default for SceneNode {
    fn default() -> Self {
        Self::new()
    }
}
