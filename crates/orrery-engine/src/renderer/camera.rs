use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Half-line in world space. `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize_or_zero() }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first intersection with a sphere, if any.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        if radius <= 0.0 || self.direction == Vec3::ZERO {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    /// xyz position, w unused.
    pub position: [f32; 4],
}

/// Perspective orbit camera around a target point.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Rotation around the Y axis (radians). 0 looks down -Z.
    pub azimuth: f32,
    /// Angle above the XZ plane (radians), clamped short of the poles.
    pub elevation: f32,
    /// Distance from target point.
    pub distance: f32,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::looking_from(Self::HOME, Vec3::ZERO, 800.0, 600.0)
    }
}

impl Camera3D {
    /// Starting position of the solar system view.
    pub const HOME: Vec3 = Vec3::new(-50.0, 90.0, 150.0);

    const ORBIT_SENSITIVITY: f32 = 0.008;
    const ZOOM_SPEED: f32 = 0.1;
    const MIN_DISTANCE: f32 = 5.0;
    const MAX_DISTANCE: f32 = 900.0;
    const MAX_ELEVATION: f32 = 1.55;

    /// Camera at `position` looking at `target`.
    pub fn looking_from(position: Vec3, target: Vec3, screen_width: f32, screen_height: f32) -> Self {
        let offset = position - target;
        let distance = offset.length().max(Self::MIN_DISTANCE);
        let elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
        let azimuth = offset.x.atan2(offset.z);
        Self {
            azimuth,
            elevation: elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION),
            distance: distance.min(Self::MAX_DISTANCE),
            target,
            fov_y: 75f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            screen_width,
            screen_height,
        }
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        let (sin_e, cos_e) = self.elevation.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + Vec3::new(cos_e * sin_a, sin_e, cos_e * cos_a) * self.distance
    }

    pub fn aspect(&self) -> f32 {
        if self.screen_height > 0.0 {
            self.screen_width / self.screen_height
        } else {
            1.0
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// OpenGL-style clip space (z in [-1, 1]), as WebGL expects.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            position: self.position().extend(1.0).to_array(),
        }
    }

    /// Orbit camera by pointer delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * Self::ORBIT_SENSITIVITY;
        self.elevation += dy * Self::ORBIT_SENSITIVITY;
        self.elevation = self.elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
    }

    /// Zoom camera (positive = zoom in).
    pub fn zoom(&mut self, steps: f32) {
        self.distance *= 1.0 - steps * Self::ZOOM_SPEED;
        self.distance = self.distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Back to the starting view, keeping the screen size.
    pub fn reset(&mut self) {
        *self = Self::looking_from(Self::HOME, Vec3::ZERO, self.screen_width, self.screen_height);
    }

    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width.max(1.0);
        self.screen_height = height.max(1.0);
    }

    /// Pixel coordinates (origin top-left) to normalized device coordinates
    /// (x right, y up, both in [-1, 1]).
    pub fn ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x / self.screen_width * 2.0 - 1.0,
            1.0 - screen.y / self.screen_height * 2.0,
        )
    }

    /// World point to NDC. `None` when the point is behind the camera.
    pub fn project(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }

    /// Ray from the eye through an NDC point.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let origin = self.position();
        Ray::new(origin, far - origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looking_from_recovers_position() {
        let cam = Camera3D::looking_from(Vec3::new(-50.0, 90.0, 150.0), Vec3::ZERO, 800.0, 600.0);
        let p = cam.position();
        assert!((p - Vec3::new(-50.0, 90.0, 150.0)).length() < 1e-3, "{p}");
        assert_eq!(cam.near, 0.1);
        assert_eq!(cam.far, 1000.0);
    }

    #[test]
    fn ndc_corners() {
        let cam = Camera3D::default();
        assert_eq!(cam.ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(cam.ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
        assert_eq!(cam.ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = Camera3D::default();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let to_target = (cam.target - cam.position()).normalize();
        assert!(ray.direction.dot(to_target) > 0.9999);
    }

    #[test]
    fn ray_through_projected_point_passes_near_it() {
        let cam = Camera3D::default();
        let point = Vec3::new(62.0, 0.0, 0.0);
        let ndc = cam.project(point).unwrap();
        let ray = cam.ray_from_ndc(ndc);
        let t = (point - ray.origin).dot(ray.direction);
        let closest = ray.at(t);
        assert!((closest - point).length() < 0.05, "miss by {}", (closest - point).length());
    }

    #[test]
    fn point_behind_camera_does_not_project() {
        let cam = Camera3D::default();
        let behind = cam.position() * 2.0;
        assert!(cam.project(behind).is_none());
    }

    #[test]
    fn sphere_intersection() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
        // Sphere behind the origin.
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 20.0), 2.0).is_none());
        // Origin inside reports the exit.
        let inside = Ray::new(Vec3::ZERO, Vec3::X);
        assert!((inside.intersect_sphere(Vec3::ZERO, 3.0).unwrap() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn orbit_clamps_elevation() {
        let mut cam = Camera3D::default();
        cam.orbit(0.0, 10000.0);
        assert!(cam.elevation <= Camera3D::MAX_ELEVATION);
        cam.orbit(0.0, -20000.0);
        assert!(cam.elevation >= -Camera3D::MAX_ELEVATION);
    }

    #[test]
    fn zoom_clamps_and_reset_restores() {
        let mut cam = Camera3D::default();
        cam.zoom(100.0);
        assert!(cam.distance >= Camera3D::MIN_DISTANCE);
        cam.zoom(-100.0);
        assert!(cam.distance <= Camera3D::MAX_DISTANCE);
        cam.set_screen_size(1024.0, 768.0);
        cam.reset();
        assert!((cam.position() - Camera3D::HOME).length() < 1e-3);
        assert_eq!(cam.screen_width, 1024.0);
    }
}
