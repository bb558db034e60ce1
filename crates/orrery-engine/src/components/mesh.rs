use glam::Vec3;

/// RGB color for mesh rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self { r: 0.5, g: 0.5, b: 0.5 }
    }
}

/// Geometry the renderer should build for a node.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshShape {
    Sphere { radius: f32 },
    /// Flat annulus in the node's local XY plane.
    Ring { inner: f32, outer: f32 },
    /// Closed polyline in local space (first and last points coincide).
    LineLoop { points: Vec<Vec3> },
    /// Camera-facing text quad of `width` x `height` world units.
    Label { text: String, width: f32, height: f32 },
}

impl MeshShape {
    /// Numeric shape code used by the wire format.
    pub fn code(&self) -> f32 {
        match self {
            MeshShape::Sphere { .. } => 0.0,
            MeshShape::Ring { .. } => 1.0,
            MeshShape::LineLoop { .. } => 2.0,
            MeshShape::Label { .. } => 3.0,
        }
    }
}

/// Renderable geometry attached to a scene node.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: MeshColor,
    /// Unlit glow (default: 0.0). The sun uses a basic, self-lit material.
    pub emissive: f32,
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: MeshColor) -> Self {
        Self { shape, color, emissive: 0.0 }
    }

    pub fn sphere(radius: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Sphere { radius }, color)
    }

    pub fn ring(inner: f32, outer: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Ring { inner, outer }, color)
    }

    pub fn line_loop(points: Vec<Vec3>, color: MeshColor) -> Self {
        Self::new(MeshShape::LineLoop { points }, color)
    }

    pub fn label(text: impl Into<String>, width: f32, height: f32) -> Self {
        Self::new(
            MeshShape::Label { text: text.into(), width, height },
            MeshColor::WHITE,
        )
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    /// Radius for ray picking, if the shape is pickable.
    pub fn pick_radius(&self) -> Option<f32> {
        match self.shape {
            MeshShape::Sphere { radius } => Some(radius),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_unpack() {
        let red = MeshColor::from_hex(0xff0000);
        assert_eq!(red, MeshColor::new(1.0, 0.0, 0.0));
        let orange = MeshColor::from_hex(0xff9900);
        assert!((orange.g - 0.6).abs() < 1e-6);
    }

    #[test]
    fn only_spheres_are_pickable() {
        assert_eq!(MeshComponent::sphere(3.0, MeshColor::WHITE).pick_radius(), Some(3.0));
        assert_eq!(MeshComponent::ring(1.0, 2.0, MeshColor::WHITE).pick_radius(), None);
        assert_eq!(MeshComponent::label("Eros", 20.0, 10.0).pick_radius(), None);
    }
}
