use crate::core::scene::Scene;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Rebuild the render buffer from every visible node that carries a mesh.
/// Reads world matrices, so call it after `propagate`.
///
/// Returns how many instances did not fit.
pub fn build_render_buffer(scene: &Scene, buffer: &mut RenderBuffer) -> usize {
    buffer.clear();
    let mut dropped = 0;

    for node in scene.iter() {
        let Some(mesh) = &node.mesh else {
            continue;
        };
        if !scene.is_effectively_visible(node.id) {
            continue;
        }
        if !buffer.push(node.id.0, RenderInstance::from_mesh(node.world, mesh)) {
            dropped += 1;
        }
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{MeshColor, MeshComponent};
    use crate::components::node::SceneNode;
    use crate::extensions::transform::propagate;
    use glam::Vec3;

    #[test]
    fn only_visible_meshes_are_emitted() {
        let mut scene = Scene::new();
        let pivot = scene.spawn(SceneNode::new().with_position(Vec3::new(62.0, 0.0, 0.0)));
        let mesh = scene
            .spawn_child(pivot, SceneNode::new().with_mesh(MeshComponent::sphere(6.0, MeshColor::WHITE)))
            .unwrap();
        let hidden = scene.spawn(SceneNode::new().with_visible(false));
        scene
            .spawn_child(hidden, SceneNode::new().with_mesh(MeshComponent::sphere(1.0, MeshColor::WHITE)))
            .unwrap();
        propagate(&mut scene);

        let mut buffer = RenderBuffer::new();
        assert_eq!(build_render_buffer(&scene, &mut buffer), 0);
        assert_eq!(buffer.instance_count(), 1);
        assert_eq!(buffer.nodes, vec![mesh.0]);
        assert_eq!(buffer.instances[0].world[12], 62.0);
    }

    #[test]
    fn overflow_is_counted() {
        let mut scene = Scene::new();
        for _ in 0..5 {
            scene.spawn(SceneNode::new().with_mesh(MeshComponent::sphere(0.2, MeshColor::default())));
        }
        let mut buffer = RenderBuffer::with_capacity(3);
        assert_eq!(build_render_buffer(&scene, &mut buffer), 2);
        assert_eq!(buffer.instance_count(), 3);
    }
}
