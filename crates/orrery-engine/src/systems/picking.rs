use glam::Vec2;

use crate::api::types::NodeId;
use crate::core::registry::{BodyRegistry, PickedTarget};
use crate::core::scene::Scene;
use crate::renderer::camera::Camera3D;

/// Nearest pickable node under a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    /// Distance from the camera along the ray.
    pub distance: f32,
}

/// Cast a ray through `ndc` and return the nearest hit among `candidates`.
///
/// Only sphere meshes are pickable; their radius is scaled by the node's
/// largest world scale. Hidden nodes (or nodes under a hidden ancestor) are
/// skipped. On equal distance the earlier candidate wins. Reads world
/// matrices, so call it after `propagate`.
pub fn pick(scene: &Scene, camera: &Camera3D, ndc: Vec2, candidates: &[NodeId]) -> Option<Hit> {
    let ray = camera.ray_from_ndc(ndc);
    let mut best: Option<Hit> = None;

    for &id in candidates {
        let Some(node) = scene.get(id) else {
            continue;
        };
        let Some(radius) = node.mesh.as_ref().and_then(|m| m.pick_radius()) else {
            continue;
        };
        if !scene.is_effectively_visible(id) {
            continue;
        }
        let radius = radius * node.world_max_scale();
        if let Some(distance) = ray.intersect_sphere(node.world_position(), radius) {
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(Hit { node: id, distance });
            }
        }
    }
    best
}

/// Pick among the registry's interactive nodes and resolve the hit to its
/// metadata. An empty registry reports no target.
pub fn hover(scene: &Scene, camera: &Camera3D, registry: &BodyRegistry, ndc: Vec2) -> Option<PickedTarget> {
    let hit = pick(scene, camera, ndc, registry.interactive_nodes())?;
    registry.hover_target(hit.node).map(|target| PickedTarget {
        node: hit.node,
        target: target.clone(),
    })
}
