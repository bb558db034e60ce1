use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::components::mesh::{MeshComponent, MeshShape};

/// Per-instance render data written to SharedArrayBuffer for the TypeScript renderer.
/// Must match the TypeScript protocol: 24 floats = 96 bytes stride.
///
/// Line loops and label text are too large for a fixed stride; the renderer
/// fetches them once by `node` and caches the geometry.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct RenderInstance {
    /// Column-major world matrix.
    pub world: [f32; 16],
    pub color: [f32; 4],
    /// `MeshShape::code()`.
    pub shape: f32,
    /// Sphere: radius. Ring: inner radius. Label: width.
    pub param_a: f32,
    /// Ring: outer radius. Label: height. Line loop: point count.
    pub param_b: f32,
    /// Self-lit contribution (1.0 for the sun).
    pub emissive: f32,
}

impl Default for RenderInstance {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY.to_cols_array(),
            color: [1.0; 4],
            shape: 0.0,
            param_a: 0.0,
            param_b: 0.0,
            emissive: 0.0,
        }
    }
}

impl RenderInstance {
    pub const FLOATS: usize = 24;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_mesh(world: Mat4, mesh: &MeshComponent) -> Self {
        let (param_a, param_b) = match &mesh.shape {
            MeshShape::Sphere { radius } => (*radius, 0.0),
            MeshShape::Ring { inner, outer } => (*inner, *outer),
            MeshShape::LineLoop { points } => (0.0, points.len() as f32),
            MeshShape::Label { width, height, .. } => (*width, *height),
        };
        Self {
            world: world.to_cols_array(),
            color: [mesh.color.r, mesh.color.g, mesh.color.b, 1.0],
            shape: mesh.shape.code(),
            param_a,
            param_b,
            emissive: mesh.emissive,
        }
    }
}

/// Instances for one frame plus the node each came from.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    /// Parallel to `instances`: source node index, for geometry lookups.
    pub nodes: Vec<u32>,
    capacity: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    /// A buffer that accepts at most `capacity` instances per frame.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.nodes.clear();
    }

    /// Returns false once the buffer is full.
    pub fn push(&mut self, node: u32, instance: RenderInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        self.nodes.push(node);
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
