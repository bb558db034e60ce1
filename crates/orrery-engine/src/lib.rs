pub mod api;
pub mod bridge;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::error::{OrreryError, OrreryResult};
pub use api::game::{EngineContext, Game, GameConfig, EVENT_HOVER};
pub use api::options::{DisplayOptions, TickSnapshot};
pub use api::types::{GameEvent, NodeId};
pub use bridge::protocol::{ProtocolLayout, LIGHT_FLOATS};
pub use components::mesh::{MeshColor, MeshComponent, MeshShape};
pub use components::node::{SceneNode, Transform};
pub use components::orbital::{AsteroidBeltMember, BodyKind, OrbitalBody, SpinRate, Spinner};
pub use components::trail::{Tail, TrailBuffer};
pub use core::orbit::{circular_position, EllipticalOrbit, PATH_SEGMENTS};
pub use core::registry::{BodyRegistry, HoverTarget, PickedTarget};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use extensions::{look_rotation, orient_billboards, propagate};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{Camera3D, CameraUniform, Ray};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use renderer::{DrawTiming, FrameData, Renderer};
pub use systems::lighting::{LightState, PointLight};
pub use systems::picking::{pick, Hit};
