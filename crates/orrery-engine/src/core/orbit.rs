//! Orbit geometry: pure math, no scene dependencies.
//!
//! Uses f64 throughout so that phase angles can grow for hours without
//! losing precision; positions are narrowed to f32 only when they leave
//! this module as `Vec3`.
//!
//! Conventions: the orbital plane is XZ with Y up. A phase angle `θ` maps to
//! the planar point `(a·cos θ, b·sin θ)`.
//!
//! Two inclination treatments coexist and are both intentional in output:
//! - moving bodies use `tilted_position`, which mixes the planar x into the
//!   vertical axis: `(x·cos i, x·sin i, z)`;
//! - static path overlays are sampled flat (`path_points`) and then rotated
//!   as a whole about X by `path_rotation` (a true plane rotation).
//! At the inclinations in use the two differ by less than a line width.

use glam::{Quat, Vec2, Vec3};

use crate::api::error::{OrreryError, OrreryResult};

/// Default sample count for orbit path overlays.
pub const PATH_SEGMENTS: usize = 100;

/// An ellipse centred on its parent, optionally inclined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalOrbit {
    semi_major: f64,
    semi_minor: f64,
    /// Inclination in radians.
    inclination: f64,
}

impl EllipticalOrbit {
    /// Build from explicit axes. Requires `semi_major >= semi_minor > 0`.
    pub fn new(semi_major: f64, semi_minor: f64, inclination: f64) -> OrreryResult<Self> {
        if !semi_major.is_finite() || !semi_minor.is_finite() {
            return Err(OrreryError::NonFinite("ellipse axis"));
        }
        if !inclination.is_finite() {
            return Err(OrreryError::NonFinite("inclination"));
        }
        if semi_minor <= 0.0 || semi_major < semi_minor {
            return Err(OrreryError::InvalidAxes { semi_major, semi_minor });
        }
        Ok(Self { semi_major, semi_minor, inclination })
    }

    /// Build from semi-major axis and eccentricity: `b = a·sqrt(1 - e²)`.
    /// Eccentricity must lie in `[0, 1)`.
    pub fn from_eccentricity(semi_major: f64, eccentricity: f64, inclination: f64) -> OrreryResult<Self> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrreryError::InvalidEccentricity(eccentricity));
        }
        let semi_minor = semi_major * (1.0 - eccentricity * eccentricity).sqrt();
        Self::new(semi_major, semi_minor, inclination)
    }

    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Untilted position in the orbital plane, returned as (x, z).
    pub fn planar_position(&self, phase: f64) -> (f64, f64) {
        (self.semi_major * phase.cos(), self.semi_minor * phase.sin())
    }

    /// Position used for moving bodies: planar x is split between X and Y
    /// by the inclination, z is kept as is.
    pub fn tilted_position(&self, phase: f64) -> Vec3 {
        let (x, z) = self.planar_position(phase);
        Vec3::new(
            (x * self.inclination.cos()) as f32,
            (x * self.inclination.sin()) as f32,
            z as f32,
        )
    }

    /// Closed, flat polyline of `segments + 1` points sampling θ over [0, 2π].
    /// The first and last points coincide.
    pub fn path_points(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let phase = (i as f64 / segments as f64) * std::f64::consts::TAU;
                let (x, z) = self.planar_position(phase);
                Vec3::new(x as f32, 0.0, z as f32)
            })
            .collect()
    }

    /// Whole-object rotation applied to the path overlay.
    pub fn path_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.inclination as f32)
    }
}

/// Circular orbit in the XZ plane (asteroid belt members).
pub fn circular_position(radius: f64, phase: f64) -> Vec3 {
    Vec3::new((radius * phase.cos()) as f32, 0.0, (radius * phase.sin()) as f32)
}

/// Normalised ellipse residual `(x/a)² + (z/b)²`; 1.0 on the curve.
pub fn ellipse_residual(orbit: &EllipticalOrbit, point: Vec2) -> f64 {
    let x = point.x as f64 / orbit.semi_major;
    let z = point.y as f64 / orbit.semi_minor;
    x * x + z * z
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn earth() -> EllipticalOrbit {
        EllipticalOrbit::new(62.0, 50.0, 0.0).unwrap()
    }

    #[test]
    fn planar_points_lie_on_the_ellipse() {
        let orbit = EllipticalOrbit::new(138.0, 110.0, 2.49f64.to_radians()).unwrap();
        for i in 0..64 {
            let phase = i as f64 * 0.37 - 5.0;
            let (x, z) = orbit.planar_position(phase);
            let r = ellipse_residual(&orbit, Vec2::new(x as f32, z as f32));
            assert!((r - 1.0).abs() < 1e-5, "phase {phase}: residual {r}");
        }
    }

    #[test]
    fn position_is_periodic() {
        let orbit = EllipticalOrbit::new(216.0, 175.0, 17.16f64.to_radians()).unwrap();
        for phase in [0.0, 0.3, 1.7, PI, 5.9, 123.4] {
            let a = orbit.tilted_position(phase);
            let b = orbit.tilted_position(phase + TAU);
            assert!((a - b).length() < 1e-3, "phase {phase}: {a} vs {b}");
        }
    }

    #[test]
    fn earth_after_one_tick_at_speed_five() {
        // 0.01 angular speed × 5 global speed
        let p = earth().tilted_position(0.05);
        assert!((p.x - 61.9225).abs() < 1e-3, "x = {}", p.x);
        assert!(p.y.abs() < 1e-6);
        assert!((p.z - 2.4990).abs() < 1e-3, "z = {}", p.z);
    }

    #[test]
    fn inclination_mixes_x_into_vertical() {
        let i = 10f64.to_radians();
        let orbit = EllipticalOrbit::new(70.0, 50.0, i).unwrap();
        let p = orbit.tilted_position(0.0);
        assert!((p.x as f64 - 70.0 * i.cos()).abs() < 1e-4);
        assert!((p.y as f64 - 70.0 * i.sin()).abs() < 1e-4);
        assert!(p.z.abs() < 1e-6);

        // A quarter turn leaves only the untilted z component.
        let q = orbit.tilted_position(PI / 2.0);
        assert!(q.y.abs() < 1e-4);
        assert!((q.z - 50.0).abs() < 1e-4);
    }

    #[test]
    fn path_is_closed_with_segments_plus_one_points() {
        let orbit = EllipticalOrbit::new(28.0, 22.0, 7f64.to_radians()).unwrap();
        let points = orbit.path_points(PATH_SEGMENTS);
        assert_eq!(points.len(), PATH_SEGMENTS + 1);
        let first = points[0];
        let last = points[PATH_SEGMENTS];
        assert!((first - last).length() < 1e-4);
        assert!(points.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn path_rotation_is_a_true_plane_rotation() {
        let i = 17.16f64.to_radians();
        let orbit = EllipticalOrbit::new(216.0, 175.0, i).unwrap();
        // Rotating about X leaves the x axis fixed and tilts z into y.
        let rotated = orbit.path_rotation() * Vec3::new(216.0, 0.0, 0.0);
        assert!((rotated - Vec3::new(216.0, 0.0, 0.0)).length() < 1e-3);
        let rotated = orbit.path_rotation() * Vec3::new(0.0, 0.0, 175.0);
        assert!((rotated.y as f64 + 175.0 * i.sin()).abs() < 1e-3);
    }

    #[test]
    fn semi_minor_from_eccentricity() {
        let orbit = EllipticalOrbit::from_eccentricity(70.0, 0.7, 0.0).unwrap();
        let expected = 70.0 * (1.0f64 - 0.49).sqrt();
        assert!((orbit.semi_minor() - expected).abs() < 1e-12);
        assert!(orbit.semi_major() >= orbit.semi_minor());
    }

    #[test]
    fn rejects_non_elliptical_eccentricity() {
        for e in [1.0, 1.5, -0.1, f64::NAN] {
            let result = EllipticalOrbit::from_eccentricity(100.0, e, 0.0);
            assert!(
                matches!(result, Err(OrreryError::InvalidEccentricity(_))),
                "e = {e} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_axes() {
        assert!(matches!(
            EllipticalOrbit::new(10.0, 20.0, 0.0),
            Err(OrreryError::InvalidAxes { .. })
        ));
        assert!(EllipticalOrbit::new(10.0, 0.0, 0.0).is_err());
        assert!(EllipticalOrbit::new(f64::INFINITY, 1.0, 0.0).is_err());
        assert!(EllipticalOrbit::new(10.0, 5.0, f64::NAN).is_err());
    }

    #[test]
    fn circular_position_scenario() {
        let p = circular_position(90.0, 0.001);
        assert!((p.x - 89.99995).abs() < 1e-4, "x = {}", p.x);
        assert_eq!(p.y, 0.0);
        assert!((p.z - 0.09).abs() < 1e-4, "z = {}", p.z);
    }
}
