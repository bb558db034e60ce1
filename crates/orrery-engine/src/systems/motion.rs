use crate::api::options::TickSnapshot;
use crate::core::registry::BodyRegistry;
use crate::core::scene::Scene;

/// Advance every registered body by one tick.
///
/// Top-level bodies step their phase by `global_speed × angular_speed`,
/// move their pivot to the new orbit position and spin their mesh by the
/// same angle. Belt members follow their circle. Spinners rotate by their
/// own rate, which for fixed spinners ignores the global speed.
///
/// A body whose node no longer resolves is skipped for this tick.
pub fn advance(registry: &mut BodyRegistry, scene: &mut Scene, snapshot: &TickSnapshot) {
    let speed = snapshot.global_speed;

    for body in registry.bodies_mut() {
        if scene.get(body.pivot).is_none() {
            log::debug!("motion: skipping {} (pivot {:?} missing)", body.name, body.pivot);
            continue;
        }
        let position = body.advance(speed);
        scene.set_position(body.pivot, position);
        if !scene.rotate_local_y(body.mesh, body.step(speed) as f32) {
            log::debug!("motion: {} has no mesh node {:?}", body.name, body.mesh);
        }
    }

    for member in registry.belt_mut() {
        if scene.get(member.node).is_none() {
            log::debug!("motion: skipping belt member {:?}", member.node);
            continue;
        }
        let position = member.advance(speed);
        scene.set_position(member.node, position);
    }

    for spinner in registry.spinners() {
        if !scene.rotate_local_y(spinner.node, spinner.angle(speed)) {
            log::debug!("motion: spinner node {:?} missing", spinner.node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::NodeId;
    use crate::components::node::SceneNode;
    use crate::components::orbital::{AsteroidBeltMember, BodyKind, OrbitalBody, Spinner};
    use crate::core::orbit::EllipticalOrbit;
    use glam::{Quat, Vec3};

    struct Fixture {
        scene: Scene,
        registry: BodyRegistry,
        pivot: NodeId,
        mesh: NodeId,
        moon_pivot: NodeId,
    }

    fn earth_with_moon() -> Fixture {
        let mut scene = Scene::new();
        let mut registry = BodyRegistry::new();
        let pivot = scene.spawn(SceneNode::new().with_tag("earth"));
        let mesh = scene.spawn_child(pivot, SceneNode::new()).unwrap();
        let moon_pivot = scene.spawn_child(pivot, SceneNode::new()).unwrap();
        scene
            .spawn_child(moon_pivot, SceneNode::new().with_position(Vec3::new(10.0, 0.0, 0.0)))
            .unwrap();

        let orbit = EllipticalOrbit::new(62.0, 50.0, 0.0).unwrap();
        let body = OrbitalBody::new("Earth", BodyKind::Planet, orbit, 0.01, pivot, mesh).unwrap();
        registry.add_body(body);
        registry.add_spinner(Spinner::fixed(moon_pivot, 0.02));
        Fixture { scene, registry, pivot, mesh, moon_pivot }
    }

    #[test]
    fn one_tick_at_speed_five() {
        let mut f = earth_with_moon();
        advance(&mut f.registry, &mut f.scene, &TickSnapshot { global_speed: 5.0 });

        let body = &f.registry.bodies()[0];
        assert!((body.phase - 0.05).abs() < 1e-12);
        let p = f.scene.get(f.pivot).unwrap().local.translation;
        assert!((p - Vec3::new(61.92, 0.0, 2.50)).length() < 0.01, "{p}");

        let spin = f.scene.get(f.mesh).unwrap().local.rotation;
        assert!(spin.abs_diff_eq(Quat::from_rotation_y(0.05), 1e-5));
    }

    #[test]
    fn speed_zero_freezes_bodies_but_not_the_moon() {
        let mut f = earth_with_moon();
        let frozen = TickSnapshot { global_speed: 0.0 };
        let before = f.scene.get(f.pivot).unwrap().local;
        for _ in 0..10 {
            advance(&mut f.registry, &mut f.scene, &frozen);
        }
        assert_eq!(f.registry.bodies()[0].phase, 0.0);
        let after = f.scene.get(f.pivot).unwrap().local;
        assert_eq!(before.translation, after.translation);
        assert!(f.scene.get(f.mesh).unwrap().local.rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));

        let moon = f.scene.get(f.moon_pivot).unwrap().local.rotation;
        assert!(moon.abs_diff_eq(Quat::from_rotation_y(0.2), 1e-4));
    }

    #[test]
    fn belt_member_moves_on_its_circle() {
        let mut scene = Scene::new();
        let mut registry = BodyRegistry::new();
        let node = scene.spawn(SceneNode::new());
        registry.add_belt_member(AsteroidBeltMember::new(node, 90.0, 0.0, 0.001).unwrap());
        advance(&mut registry, &mut scene, &TickSnapshot { global_speed: 1.0 });
        let p = scene.get(node).unwrap().local.translation;
        assert!((p.x - 89.99995).abs() < 1e-4);
        assert!((p.z - 0.09).abs() < 1e-4);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn missing_nodes_are_skipped() {
        let mut scene = Scene::new();
        let mut registry = BodyRegistry::new();
        let orbit = EllipticalOrbit::new(10.0, 5.0, 0.0).unwrap();
        let ghost = OrbitalBody::new("ghost", BodyKind::Planet, orbit, 0.01, NodeId(40), NodeId(41)).unwrap();
        registry.add_body(ghost);
        registry.add_belt_member(AsteroidBeltMember::new(NodeId(42), 1.0, 0.0, 0.1).unwrap());
        registry.add_spinner(Spinner::scaled(NodeId(43), 0.004));
        scene.spawn(SceneNode::new());

        advance(&mut registry, &mut scene, &TickSnapshot { global_speed: 5.0 });
        assert_eq!(registry.bodies()[0].phase, 0.0);
        assert_eq!(registry.belt()[0].phase, 0.0);
    }
}
