// extensions/transform.rs
//
// Hierarchical composition over the scene arena.
//
// Usage:
//   scene.spawn_child(planet_pivot, moon_pivot)?;
//   propagate(&mut scene);                          // world = parent world x local
//   orient_billboards(&mut scene, camera.position()); // labels face the camera

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::api::types::NodeId;
use crate::core::scene::Scene;

/// Recompute every node's world matrix from the roots down.
pub fn propagate(scene: &mut Scene) {
    let mut stack: Vec<(NodeId, Mat4)> = scene.roots().map(|r| (r, Mat4::IDENTITY)).collect();

    while let Some((id, parent_world)) = stack.pop() {
        let Some(node) = scene.get_mut(id) else { continue };
        let world = parent_world * node.local.matrix();
        node.world = world;
        stack.extend(node.children.iter().map(|&child| (child, world)));
    }
}

/// Rotation whose +Z axis points along `dir`, keeping `up` as close to +Y as possible.
pub fn look_rotation(dir: Vec3, up: Vec3) -> Quat {
    let z = dir.normalize_or_zero();
    if z == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let x = up.cross(z);
    if x.length_squared() < 1e-12 {
        // Looking straight up or down: any roll will do.
        return Quat::from_rotation_arc(Vec3::Z, z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

/// Point every billboard node's +Z axis at `camera_position`.
///
/// Must run after `propagate`, since it reads the parent's world matrix.
/// Only the billboard's own world matrix is refreshed; billboards are leaves.
pub fn orient_billboards(scene: &mut Scene, camera_position: Vec3) {
    for index in 0..scene.len() {
        let id = NodeId(index as u32);
        let (is_billboard, parent) = match scene.get(id) {
            Some(node) => (node.billboard, node.parent),
            None => continue,
        };
        if !is_billboard {
            continue;
        }

        let parent_world = parent
            .and_then(|p| scene.get(p))
            .map(|p| p.world)
            .unwrap_or(Mat4::IDENTITY);
        let (_, parent_rotation, _) = parent_world.to_scale_rotation_translation();

        let Some(node) = scene.get_mut(id) else { continue };
        let world_pos = parent_world.transform_point3(node.local.translation);
        let facing = look_rotation(camera_position - world_pos, Vec3::Y);
        node.local.rotation = (parent_rotation.inverse() * facing).normalize();
        node.world = parent_world * node.local.matrix();
    }
}
