use crate::components::orbital::OrbitalBody;
use crate::core::registry::BodyRegistry;
use crate::core::scene::Scene;

/// Push each tailed body's current position into its trail and move the
/// marker nodes onto the stored positions, newest first.
///
/// Markers are top-level nodes, so a tail lags behind its body instead of
/// following it rigidly. Bodies without a tail are left alone, and so are
/// bodies whose pivot no longer resolves, since the integrator skipped them.
pub fn update_trails(registry: &mut BodyRegistry, scene: &mut Scene) {
    for body in registry.bodies_mut() {
        if body.tail.is_none() {
            continue;
        }
        if scene.get(body.pivot).is_none() {
            log::debug!("trail: skipping {} (pivot {:?} missing)", body.name, body.pivot);
            continue;
        }
        body.record_trail();
        let Some(tail) = body.tail.as_ref() else {
            continue;
        };
        for (marker, position) in tail.markers.iter().zip(tail.buffer.iter()) {
            if !scene.set_position(*marker, position) {
                log::debug!("trail: {} lost marker {:?}", body.name, marker);
            }
        }
    }
}

/// Show or hide every marker of every tail owned by bodies matching `filter`.
pub fn set_tails_visible(
    registry: &BodyRegistry,
    scene: &mut Scene,
    visible: bool,
    filter: impl Fn(&OrbitalBody) -> bool,
) {
    for body in registry.bodies().iter().filter(|b| filter(b)) {
        if let Some(tail) = &body.tail {
            for marker in &tail.markers {
                scene.set_visible(*marker, visible);
            }
        }
    }
}
