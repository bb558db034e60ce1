use glam::Vec3;

use crate::api::error::{OrreryError, OrreryResult};
use crate::api::types::NodeId;
use crate::components::trail::Tail;
use crate::core::orbit::{circular_position, EllipticalOrbit};

/// What a body is. Drives visibility toggles and hover formatting only;
/// motion is the same for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    NearEarth,
    Hazardous,
}

/// A top-level body moving on an elliptical, inclined orbit.
///
/// `pivot` receives the orbit position; `mesh` (a child of the pivot, or the
/// pivot itself) receives the self-rotation. Children of the pivot such as
/// rings, labels and moons follow the position without spinning with the
/// body.
#[derive(Debug, Clone)]
pub struct OrbitalBody {
    pub name: String,
    pub kind: BodyKind,
    pub orbit: EllipticalOrbit,
    /// Current phase angle in radians. Never wrapped.
    pub phase: f64,
    /// Radians per tick at global speed 1.
    pub angular_speed: f64,
    pub pivot: NodeId,
    pub mesh: NodeId,
    /// Static orbit overlay, if one was generated.
    pub path: Option<NodeId>,
    pub tail: Option<Tail>,
    /// Last computed position in parent space.
    pub position: Vec3,
}

impl OrbitalBody {
    pub fn new(
        name: impl Into<String>,
        kind: BodyKind,
        orbit: EllipticalOrbit,
        angular_speed: f64,
        pivot: NodeId,
        mesh: NodeId,
    ) -> OrreryResult<Self> {
        if !angular_speed.is_finite() {
            return Err(OrreryError::NonFinite("angular speed"));
        }
        Ok(Self {
            name: name.into(),
            kind,
            orbit,
            phase: 0.0,
            angular_speed,
            pivot,
            mesh,
            path: None,
            tail: None,
            position: orbit.tilted_position(0.0),
        })
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self.position = self.orbit.tilted_position(phase);
        self
    }

    pub fn with_path(mut self, path: NodeId) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_tail(mut self, tail: Tail) -> Self {
        self.tail = Some(tail);
        self
    }

    /// Per-tick phase increment for the given global speed.
    pub fn step(&self, global_speed: f64) -> f64 {
        global_speed * self.angular_speed
    }

    /// Advance the phase by one tick and return the new position.
    pub fn advance(&mut self, global_speed: f64) -> Vec3 {
        self.phase += self.step(global_speed);
        self.position = self.orbit.tilted_position(self.phase);
        self.position
    }

    /// Push the current position into the tail, if there is one.
    pub fn record_trail(&mut self) {
        if let Some(tail) = self.tail.as_mut() {
            tail.buffer.update(self.position);
        }
    }
}

/// A degenerate body on a flat circular orbit.
#[derive(Debug, Clone, Copy)]
pub struct AsteroidBeltMember {
    pub node: NodeId,
    pub radius: f64,
    pub phase: f64,
    pub angular_speed: f64,
}

impl AsteroidBeltMember {
    pub fn new(node: NodeId, radius: f64, phase: f64, angular_speed: f64) -> OrreryResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(OrreryError::InvalidRadius(radius));
        }
        if !phase.is_finite() || !angular_speed.is_finite() {
            return Err(OrreryError::NonFinite("belt member phase or speed"));
        }
        Ok(Self { node, radius, phase, angular_speed })
    }

    pub fn position(&self) -> Vec3 {
        circular_position(self.radius, self.phase)
    }

    pub fn advance(&mut self, global_speed: f64) -> Vec3 {
        self.phase += global_speed * self.angular_speed;
        self.position()
    }
}

/// How a spinner's per-tick angle is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinRate {
    /// Radians per tick regardless of simulation speed.
    Fixed(f32),
    /// Radians per tick at global speed 1.
    Scaled(f32),
}

/// A node that only rotates about its local Y axis (the sun, a moon pivot).
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    pub node: NodeId,
    pub rate: SpinRate,
}

impl Spinner {
    pub fn fixed(node: NodeId, radians_per_tick: f32) -> Self {
        Self { node, rate: SpinRate::Fixed(radians_per_tick) }
    }

    pub fn scaled(node: NodeId, radians_per_tick: f32) -> Self {
        Self { node, rate: SpinRate::Scaled(radians_per_tick) }
    }

    pub fn angle(&self, global_speed: f64) -> f32 {
        match self.rate {
            SpinRate::Fixed(rate) => rate,
            SpinRate::Scaled(rate) => (global_speed as f32) * rate,
        }
    }
}
