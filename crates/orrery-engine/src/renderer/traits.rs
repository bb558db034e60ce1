//! Renderer trait for native GPU backends.
//!
//! In the browser all drawing happens in TypeScript (WebGL via three.js),
//! which reads the shared buffer directly. This trait is the same contract
//! for Rust-side renderers and for headless frame capture in tests.

use glam::{Mat4, Vec3};

use super::instance::RenderInstance;
use crate::systems::lighting::PointLight;

/// Timing information from a draw call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawTiming {
    /// Time spent submitting draw calls (microseconds)
    pub draw_us: u32,
}

/// Renderer trait for GPU backends.
///
/// ```ignore
/// struct WgpuRenderer { /* device, queue, pipelines */ }
///
/// impl Renderer for WgpuRenderer {
///     fn backend(&self) -> &'static str { "wgpu" }
///     fn draw(&mut self, frame: &FrameData) -> DrawTiming { /* encode passes */ }
///     fn resize(&mut self, width: u32, height: u32) { /* reconfigure surface */ }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "webgl", "wgpu", "headless")
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData) -> DrawTiming;

    /// Handle canvas or window resize.
    fn resize(&mut self, width: u32, height: u32);
}

/// Everything a backend needs for one frame.
pub struct FrameData<'a> {
    pub instances: &'a [RenderInstance],
    /// Source node index per instance, for cached geometry lookups.
    pub nodes: &'a [u32],
    pub lights: &'a [PointLight],
    pub ambient: [f32; 3],
    pub view_projection: Mat4,
    pub camera_position: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Headless {
        frames: usize,
        last_instances: usize,
        size: (u32, u32),
    }

    impl Renderer for Headless {
        fn backend(&self) -> &'static str {
            "headless"
        }

        fn draw(&mut self, frame: &FrameData) -> DrawTiming {
            self.frames += 1;
            self.last_instances = frame.instances.len();
            DrawTiming::default()
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }
    }

    #[test]
    fn renderer_receives_frame_data() {
        let mut r = Headless { frames: 0, last_instances: 0, size: (0, 0) };
        let instances = [RenderInstance::default(); 3];
        let frame = FrameData {
            instances: &instances,
            nodes: &[0, 1, 2],
            lights: &[],
            ambient: [0.5; 3],
            view_projection: Mat4::IDENTITY,
            camera_position: Vec3::ZERO,
        };
        r.draw(&frame);
        r.resize(640, 480);
        assert_eq!(r.backend(), "headless");
        assert_eq!((r.frames, r.last_instances, r.size), (1, 3, (640, 480)));
    }
}
