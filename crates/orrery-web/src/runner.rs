use glam::Vec2;
use orrery_engine::systems::render::build_render_buffer;
use orrery_engine::{
    orient_billboards, propagate, DrawTiming, EngineContext, FixedTimestep, FrameData, Game,
    GameConfig, GameEvent, InputEvent, InputQueue, OrreryResult, PickedTarget, ProtocolLayout,
    RenderBuffer, Renderer, EVENT_HOVER,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    /// Result of the last pointer query.
    hover: Option<PickedTarget>,
    /// Events raised between ticks (hover changes), flushed on the next tick.
    pending_events: Vec<GameEvent>,
    /// View-projection (16) + eye position (4), for SharedArrayBuffer reads.
    camera_buffer: [f32; 20],
    overflow_reported: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::with_max_steps(config.fixed_dt, config.max_steps_per_frame);
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            game,
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            render_buffer,
            timestep,
            layout,
            config,
            initialized: false,
            hover: None,
            pending_events: Vec::new(),
            camera_buffer: [0.0; 20],
            overflow_reported: false,
        }
    }

    /// Initialize the game. Call once after construction.
    ///
    /// Builds the scene, settles world transforms and fills the first frame so
    /// the renderer and pointer queries have something to read before the
    /// first tick.
    pub fn init(&mut self) -> OrreryResult<()> {
        self.game.init(&mut self.ctx)?;
        self.settle();
        self.rebuild_frame();
        self.initialized = true;
        log::info!(
            "runner: {} nodes, {} instances, {} lights",
            self.ctx.scene.len(),
            self.render_buffer.instance_count(),
            self.ctx.lights.count()
        );
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            self.ctx.camera.set_screen_size(width, height);
        }
        self.input.push(event);
    }

    /// Queue the move for the game and answer the hover query right away
    /// against the settled scene.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.push_input(InputEvent::PointerMove { x, y });
        if !self.initialized {
            return;
        }
        let ndc = self.ctx.camera.ndc(Vec2::new(x, y));
        let picked = self.game.pointer_query(&self.ctx, ndc);
        let before = self.hover.as_ref().map(|p| p.node);
        let after = picked.as_ref().map(|p| p.node);
        if before != after {
            let a = after.map_or(-1.0, |n| n.0 as f32);
            self.pending_events.push(GameEvent { kind: EVENT_HOVER, a, b: 0.0, c: 0.0 });
        }
        self.hover = picked;
    }

    /// Run one frame: fixed ticks of update, propagate and billboarding,
    /// then a single render buffer rebuild.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.ctx.events.append(&mut self.pending_events);

        // Input stays queued until a tick consumes it, and only the first
        // step of a frame sees it: later steps get an empty queue.
        let steps = self.timestep.accumulate(dt);
        if steps > 0 {
            let input = std::mem::take(&mut self.input);
            let idle = InputQueue::new();
            for step in 0..steps {
                self.ctx.tick += 1;
                let queue = if step == 0 { &input } else { &idle };
                self.game.update(&mut self.ctx, queue);
                self.settle();
            }
        }

        self.rebuild_frame();
    }

    fn settle(&mut self) {
        propagate(&mut self.ctx.scene);
        let eye = self.ctx.camera.position();
        orient_billboards(&mut self.ctx.scene, eye);
    }

    fn rebuild_frame(&mut self) {
        let dropped = build_render_buffer(&self.ctx.scene, &mut self.render_buffer);
        if dropped > 0 && !self.overflow_reported {
            log::warn!(
                "runner: {dropped} instances over the {} limit were not drawn",
                self.config.max_instances
            );
            self.overflow_reported = true;
        }
        self.ctx.events.truncate(self.config.max_events);

        let view_projection = self.ctx.camera.view_projection().to_cols_array();
        let eye = self.ctx.camera.position();
        self.camera_buffer[..16].copy_from_slice(&view_projection);
        self.camera_buffer[16..].copy_from_slice(&[eye.x, eye.y, eye.z, 1.0]);
    }

    /// Hand the current frame to a Rust-side renderer.
    pub fn draw(&self, renderer: &mut impl Renderer) -> DrawTiming {
        let frame = FrameData {
            instances: &self.render_buffer.instances,
            nodes: &self.render_buffer.nodes,
            lights: self.ctx.lights.as_slice(),
            ambient: self.ctx.lights.ambient(),
            view_projection: self.ctx.camera.view_projection(),
            camera_position: self.ctx.camera.position(),
        };
        renderer.draw(&frame)
    }

    // ---- State accessors ----

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn hover(&self) -> Option<&PickedTarget> {
        self.hover.as_ref()
    }

    /// Node index under the pointer, or -1.
    pub fn hover_node(&self) -> f32 {
        self.hover.as_ref().map_or(-1.0, |p| p.node.0 as f32)
    }

    pub fn tick_count(&self) -> u64 {
        self.timestep.ticks()
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_nodes_ptr(&self) -> *const u32 {
        self.render_buffer.nodes.as_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera_buffer.as_ptr()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.layout.max_lights) as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ctx.lights.ambient()
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};
    use orrery_engine::systems::picking;
    use orrery_engine::{
        BodyKind, BodyRegistry, EllipticalOrbit, HoverTarget, MeshColor, MeshComponent,
        OrbitalBody, SceneNode,
    };

    /// One planet on an orbit plus a billboard label.
    struct TinyGame {
        registry: BodyRegistry,
        updates: u32,
        label: Option<orrery_engine::NodeId>,
        wheel: f32,
    }

    impl TinyGame {
        fn new() -> Self {
            Self { registry: BodyRegistry::new(), updates: 0, label: None, wheel: 0.0 }
        }
    }

    impl Game for TinyGame {
        fn init(&mut self, ctx: &mut EngineContext) -> OrreryResult<()> {
            let sun = ctx.scene.spawn(
                SceneNode::new().with_mesh(MeshComponent::sphere(15.0, MeshColor::WHITE)),
            );
            self.registry.register_hover(sun, HoverTarget::new("Sun"));

            let pivot = ctx.scene.spawn(SceneNode::new());
            let mesh = ctx
                .scene
                .spawn_child(pivot, SceneNode::new().with_mesh(MeshComponent::sphere(6.0, MeshColor::WHITE)))?;
            let label = ctx.scene.spawn_child(
                pivot,
                SceneNode::new()
                    .with_position(Vec3::new(0.0, 10.0, 0.0))
                    .with_mesh(MeshComponent::label("Earth", 20.0, 10.0))
                    .as_billboard(),
            )?;
            self.label = Some(label);
            let orbit = EllipticalOrbit::new(62.0, 50.0, 0.0)?;
            self.registry
                .add_body(OrbitalBody::new("Earth", BodyKind::Planet, orbit, 0.01, pivot, mesh)?);
            Ok(())
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            for event in input.iter() {
                if let InputEvent::Wheel { delta } = event {
                    self.wheel += delta;
                }
            }
            let snapshot = orrery_engine::TickSnapshot { global_speed: 5.0 };
            orrery_engine::systems::motion::advance(&mut self.registry, &mut ctx.scene, &snapshot);
        }

        fn pointer_query(&self, ctx: &EngineContext, ndc: Vec2) -> Option<PickedTarget> {
            picking::hover(&ctx.scene, &ctx.camera, &self.registry, ndc)
        }
    }

    fn runner() -> GameRunner<TinyGame> {
        let mut runner = GameRunner::new(TinyGame::new());
        runner.init().unwrap();
        runner
    }

    #[test]
    fn init_builds_first_frame() {
        let r = runner();
        assert_eq!(r.instance_count(), 3);
        assert_eq!(r.game_events_len(), 0);
    }

    #[test]
    fn tick_runs_fixed_steps_and_drains_input() {
        let mut r = runner();
        r.push_input(InputEvent::Wheel { delta: 1.0 });
        r.tick(0.005);
        assert_eq!(r.game().updates, 0);
        r.tick(1.0 / 60.0);
        assert_eq!(r.game().updates, 1);
        assert_eq!(r.game().wheel, 1.0);
        r.tick(1.0 / 60.0);
        assert_eq!(r.game().wheel, 1.0, "input consumed once");
        assert_eq!(r.tick_count(), 2);
    }

    #[test]
    fn multi_step_frame_delivers_input_once() {
        let mut r = runner();
        r.push_input(InputEvent::Wheel { delta: 1.0 });
        r.tick(3.0 / 60.0);
        assert_eq!(r.game().updates, 3);
        assert_eq!(r.game().wheel, 1.0);
        assert_eq!(r.tick_count(), 3);
    }

    #[test]
    fn label_faces_the_camera_after_a_tick() {
        let mut r = runner();
        r.tick(1.0 / 60.0);
        let label = r.ctx().scene.get(r.game().label.unwrap()).unwrap();
        let (_, rotation, position): (Vec3, Quat, Vec3) = label.world.to_scale_rotation_translation();
        let facing = rotation * Vec3::Z;
        let to_camera = (r.ctx().camera.position() - position).normalize();
        assert!(facing.dot(to_camera) > 0.999);
    }

    #[test]
    fn hover_over_the_sun_is_stable_and_emits_once() {
        let mut r = runner();
        let center = Vec2::new(r.ctx().camera.screen_width / 2.0, r.ctx().camera.screen_height / 2.0);
        r.pointer_move(center.x, center.y);
        let first = r.hover().cloned();
        r.pointer_move(center.x, center.y);
        assert_eq!(first, r.hover().cloned());
        assert_eq!(first.map(|p| p.target.name), Some("Sun".to_string()));

        r.tick(0.0);
        assert_eq!(r.game_events_len(), 1);
        assert_eq!(r.ctx().events[0].kind, EVENT_HOVER);

        r.pointer_move(0.0, 0.0);
        assert_eq!(r.hover_node(), -1.0);
    }

    #[test]
    fn resize_updates_camera_immediately() {
        let mut r = runner();
        r.push_input(InputEvent::Resize { width: 1280.0, height: 720.0 });
        assert_eq!(r.ctx().camera.screen_width, 1280.0);
    }
}
