use glam::Vec2;

use crate::api::error::OrreryResult;
use crate::api::types::GameEvent;
use crate::core::registry::PickedTarget;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::systems::lighting::LightState;

/// Event kind emitted when the hovered body changes. `a` = node index or -1.
pub const EVENT_HOVER: f32 = 1.0;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Most ticks run for a single frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Maximum number of render instances (default: 12288).
    pub max_instances: usize,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            max_instances: 12288,
            max_lights: 4,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene. An error here aborts startup.
    fn init(&mut self, ctx: &mut EngineContext) -> OrreryResult<()>;

    /// One fixed tick: consume input, move bodies, update trails.
    /// World transforms are refreshed by the runner afterwards.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// What is under the pointer, at NDC coordinates. Read-only and called
    /// between ticks, so repeated calls without a tick agree.
    fn pointer_query(&self, _ctx: &EngineContext, _ndc: Vec2) -> Option<PickedTarget> {
        None
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub lights: LightState,
    pub events: Vec<GameEvent>,
    /// Index of the tick being run (0 during init).
    pub tick: u64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera3D::default(),
            lights: LightState::new(),
            events: Vec::new(),
            tick: 0,
        }
    }

    /// Size the arenas from the game's configuration.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_instances),
            lights: LightState::with_capacity(config.max_lights),
            events: Vec::with_capacity(config.max_events),
            ..Self::new()
        }
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
