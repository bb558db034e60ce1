//! Solar System: sun, nine planets, the Moon, two asteroid fields and
//! near-Earth / hazardous objects with comet tails.
//!
//! Orbit camera on drag and wheel. Display options arrive as custom events
//! from the options panel; hover info covers everything that can be named.

use std::f64::consts::TAU;

use glam::{Quat, Vec2, Vec3};
use orrery_engine::systems::{motion, picking, trail};
use orrery_engine::*;

use crate::bodies::{self, SmallBodyDef};
use crate::catalog::{self, Catalog};

// ── Custom event kinds from the options panel ───────────────────────

/// `a` = new speed.
pub const CUSTOM_SET_SPEED: u32 = 1;
/// `a` != 0 turns the option on.
pub const CUSTOM_REAL_VIEW: u32 = 2;
pub const CUSTOM_SHOW_PATH: u32 = 3;
pub const CUSTOM_SHOW_NEOS: u32 = 4;
pub const CUSTOM_SHOW_PHOS: u32 = 5;
pub const CUSTOM_RESET_CAMERA: u32 = 6;

// ── Game event kinds to the UI ──────────────────────────────────────

/// Display options changed; the UI re-reads `get_options_json`.
pub const EVENT_OPTIONS: f32 = 2.0;

const DEFAULT_SEED: u64 = 0x5EED_0F_0E5E;

pub struct SolarSystem {
    options: DisplayOptions,
    registry: BodyRegistry,
    rng: Rng,

    paths: Vec<NodeId>,
    neo_pivots: Vec<NodeId>,
    pho_pivots: Vec<NodeId>,

    // Drag state
    dragging: bool,
    last_pointer: Vec2,
}

impl SolarSystem {
    /// `query` is the page's query string; only `ms` is read.
    pub fn new(query: &str) -> Self {
        Self::with_seed(query, DEFAULT_SEED)
    }

    pub fn with_seed(query: &str, seed: u64) -> Self {
        Self {
            options: DisplayOptions::with_query(query),
            registry: BodyRegistry::new(),
            rng: Rng::new(seed),
            paths: Vec::new(),
            neo_pivots: Vec::new(),
            pho_pivots: Vec::new(),
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    // ── Scene construction ──────────────────────────────────────────

    fn build_sun(&mut self, ctx: &mut EngineContext, catalog: &Catalog) -> OrreryResult<()> {
        let sun = ctx.scene.spawn(
            SceneNode::new().with_tag("Sun").with_mesh(
                MeshComponent::sphere(bodies::SUN_RADIUS, MeshColor::from_hex(bodies::SUN_COLOR))
                    .with_emissive(1.0),
            ),
        );
        self.registry.add_spinner(Spinner::scaled(sun, bodies::SUN_SPIN));
        self.registry.register_hover(sun, catalog.target("Sun")?);
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            [1.0, 1.0, 1.0],
            bodies::SUN_LIGHT_INTENSITY,
            bodies::SUN_LIGHT_RANGE,
        ));
        Ok(())
    }

    fn build_planets(&mut self, ctx: &mut EngineContext, catalog: &Catalog) -> OrreryResult<()> {
        for def in &bodies::PLANETS {
            let orbit = EllipticalOrbit::new(def.semi_major, def.semi_minor, def.inclination_deg.to_radians())?;

            let pivot = ctx.scene.spawn(SceneNode::new().with_tag(def.name));
            let mesh = ctx.scene.spawn_child(
                pivot,
                SceneNode::new()
                    .with_tag(def.name)
                    .with_mesh(MeshComponent::sphere(def.radius, MeshColor::from_hex(def.color))),
            )?;

            if let Some(ring) = def.ring {
                ctx.scene.spawn_child(
                    pivot,
                    SceneNode::new()
                        .with_tag(format!("{} ring", def.name))
                        .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2))
                        .with_mesh(MeshComponent::ring(ring.inner, ring.outer, MeshColor::from_hex(ring.color))),
                )?;
            }

            if def.has_moon {
                self.build_moon(ctx, pivot, catalog)?;
            }

            let path = ctx.scene.spawn(
                SceneNode::new()
                    .with_tag(format!("{} path", def.name))
                    .with_rotation(orbit.path_rotation())
                    .with_visible(self.options.show_path)
                    .with_mesh(MeshComponent::line_loop(
                        orbit.path_points(PATH_SEGMENTS),
                        MeshColor::from_hex(bodies::PATH_COLOR),
                    )),
            );
            self.paths.push(path);

            let body = OrbitalBody::new(def.name, BodyKind::Planet, orbit, def.speed, pivot, mesh)?.with_path(path);
            ctx.scene.set_position(pivot, body.position);
            self.registry.add_body(body);
            self.registry.register_hover(mesh, catalog.target(def.name)?);
        }
        Ok(())
    }

    /// The Moon sits at a fixed offset from a pivot that spins at a fixed
    /// rate under the planet's pivot.
    fn build_moon(&mut self, ctx: &mut EngineContext, planet_pivot: NodeId, catalog: &Catalog) -> OrreryResult<()> {
        let moon_pivot = ctx
            .scene
            .spawn_child(planet_pivot, SceneNode::new().with_tag("Moon pivot"))?;
        let moon = ctx.scene.spawn_child(
            moon_pivot,
            SceneNode::new()
                .with_tag("Moon")
                .with_position(Vec3::new(bodies::MOON_OFFSET, 0.0, 0.0))
                .with_mesh(MeshComponent::sphere(bodies::MOON_RADIUS, MeshColor::from_hex(bodies::MOON_COLOR))),
        )?;
        self.registry.add_spinner(Spinner::fixed(moon_pivot, bodies::MOON_SPIN));
        self.registry.register_hover(moon, catalog.target("Moon")?);
        Ok(())
    }

    fn build_belts(&mut self, ctx: &mut EngineContext) -> OrreryResult<()> {
        let color = MeshColor::from_hex(bodies::ASTEROID_COLOR);
        let (slow, fast) = bodies::ASTEROID_SPEED;
        for belt in &bodies::BELTS {
            for _ in 0..belt.count {
                let radius = self.rng.range(belt.inner, belt.outer);
                let phase = self.rng.range(0.0, TAU);
                let speed = self.rng.range(slow, fast);
                let node = ctx.scene.spawn(
                    SceneNode::new()
                        .with_position(circular_position(radius, phase))
                        .with_mesh(MeshComponent::sphere(bodies::ASTEROID_RADIUS, color)),
                );
                self.registry.add_belt_member(AsteroidBeltMember::new(node, radius, phase, speed)?);
            }
        }
        Ok(())
    }

    /// NEOs or PHOs: tilted mesh, billboard name label and a tail of
    /// top-level markers. No orbit path.
    fn build_small_bodies(
        &mut self,
        ctx: &mut EngineContext,
        defs: &[SmallBodyDef],
        kind: BodyKind,
        tail_color: u32,
        visible: bool,
    ) -> OrreryResult<Vec<NodeId>> {
        let class = if kind == BodyKind::Hazardous { "PHO" } else { "NEO" };
        let (base, spread) = bodies::SMALL_BODY_SPEED;
        let mut pivots = Vec::with_capacity(defs.len());

        for def in defs {
            let inclination = def.inclination_deg.to_radians();
            let orbit = EllipticalOrbit::from_eccentricity(def.semi_major, def.eccentricity, inclination)?;
            let speed = base + self.rng.next_f64() * spread;

            let pivot = ctx.scene.spawn(SceneNode::new().with_tag(def.name).with_visible(visible));
            let mesh = ctx.scene.spawn_child(
                pivot,
                SceneNode::new()
                    .with_tag(def.name)
                    .with_rotation(Quat::from_rotation_z(inclination as f32))
                    .with_mesh(MeshComponent::sphere(def.diameter, MeshColor::from_hex(bodies::SMALL_BODY_COLOR))),
            )?;
            let (width, height) = bodies::LABEL_SIZE;
            ctx.scene.spawn_child(
                pivot,
                SceneNode::new()
                    .with_tag(format!("{} label", def.name))
                    .with_position(Vec3::new(0.0, bodies::LABEL_HEIGHT, 0.0))
                    .with_mesh(MeshComponent::label(def.name, width, height))
                    .as_billboard(),
            )?;

            let body = OrbitalBody::new(def.name, kind, orbit, speed, pivot, mesh)?;
            let spawn = body.position;
            ctx.scene.set_position(pivot, spawn);

            let marker_mesh = MeshComponent::sphere(bodies::TAIL_MARKER_RADIUS, MeshColor::from_hex(tail_color));
            let markers = (0..bodies::TAIL_LENGTH)
                .map(|_| {
                    ctx.scene.spawn(
                        SceneNode::new()
                            .with_position(spawn)
                            .with_visible(visible)
                            .with_mesh(marker_mesh.clone()),
                    )
                })
                .collect();
            let tail = Tail::new(TrailBuffer::new(bodies::TAIL_LENGTH, spawn)?, markers);

            self.registry.add_body(body.with_tail(tail));
            self.registry.register_hover(mesh, catalog::small_body_target(class, def));
            pivots.push(pivot);
        }
        Ok(pivots)
    }

    // ── Per-tick helpers ────────────────────────────────────────────

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let mut options_changed = false;
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { .. } => self.dragging = true,
                InputEvent::PointerUp { .. } => self.dragging = false,
                InputEvent::PointerMove { x, y } if self.dragging => {
                    let delta = Vec2::new(x, y) - self.last_pointer;
                    ctx.camera.orbit(delta.x, delta.y);
                }
                InputEvent::PointerMove { .. } => {}
                InputEvent::Wheel { delta } if delta != 0.0 => {
                    ctx.camera.zoom(-delta.signum());
                }
                InputEvent::Wheel { .. } => {}
                InputEvent::Resize { width, height } => {
                    ctx.camera.set_screen_size(width, height);
                }
                InputEvent::Custom { kind, a, .. } => {
                    options_changed |= self.apply_custom(ctx, kind, a);
                }
            }
            if let Some(pos) = event.pointer() {
                self.last_pointer = pos;
            }
        }
        if options_changed {
            ctx.emit_event(GameEvent { kind: EVENT_OPTIONS, a: self.options.speed as f32, b: 0.0, c: 0.0 });
        }
    }

    /// Returns true when a display option changed.
    fn apply_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32) -> bool {
        let on = a != 0.0;
        match kind {
            CUSTOM_SET_SPEED => self.options.set_speed(a as f64),
            CUSTOM_REAL_VIEW => self.options.set_real_view(on),
            CUSTOM_SHOW_PATH => self.options.show_path = on,
            CUSTOM_SHOW_NEOS => self.options.show_neos = on,
            CUSTOM_SHOW_PHOS => self.options.show_phos = on,
            CUSTOM_RESET_CAMERA => {
                ctx.camera.reset();
                return false;
            }
            other => {
                log::debug!("solar-system: ignoring custom event {other}");
                return false;
            }
        }
        true
    }

    /// Push the display toggles into node visibility and lighting.
    fn apply_options(&self, ctx: &mut EngineContext) {
        for &path in &self.paths {
            ctx.scene.set_visible(path, self.options.show_path);
        }
        for &pivot in &self.neo_pivots {
            ctx.scene.set_visible(pivot, self.options.show_neos);
        }
        for &pivot in &self.pho_pivots {
            ctx.scene.set_visible(pivot, self.options.show_phos);
        }
        trail::set_tails_visible(&self.registry, &mut ctx.scene, self.options.show_neos, |b| {
            b.kind == BodyKind::NearEarth
        });
        trail::set_tails_visible(&self.registry, &mut ctx.scene, self.options.show_phos, |b| {
            b.kind == BodyKind::Hazardous
        });
        ctx.lights.set_ambient_level(self.options.ambient_intensity());
    }
}

impl Game for SolarSystem {
    fn init(&mut self, ctx: &mut EngineContext) -> OrreryResult<()> {
        let catalog = Catalog::embedded()?;
        if catalog.is_empty() {
            log::warn!("solar-system: embedded catalog is empty");
        }
        log::debug!("solar-system: {} catalog entries", catalog.len());

        self.build_sun(ctx, &catalog)?;
        self.build_planets(ctx, &catalog)?;
        self.build_belts(ctx)?;
        self.neo_pivots =
            self.build_small_bodies(ctx, &bodies::NEOS, BodyKind::NearEarth, bodies::NEO_TAIL_COLOR, self.options.show_neos)?;
        self.pho_pivots =
            self.build_small_bodies(ctx, &bodies::PHOS, BodyKind::Hazardous, bodies::PHO_TAIL_COLOR, self.options.show_phos)?;
        self.apply_options(ctx);

        log::info!(
            "solar-system: {} bodies, {} asteroids, {} pickable, {} nodes (max speed {})",
            self.registry.bodies().len(),
            self.registry.belt().len(),
            self.registry.interactive_nodes().len(),
            ctx.scene.len(),
            self.options.max_speed
        );
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        // One snapshot per tick; option changes land on the next one.
        let snapshot = self.options.snapshot();
        motion::advance(&mut self.registry, &mut ctx.scene, &snapshot);
        trail::update_trails(&mut self.registry, &mut ctx.scene);

        self.apply_options(ctx);
    }

    fn pointer_query(&self, ctx: &EngineContext, ndc: Vec2) -> Option<PickedTarget> {
        picking::hover(&ctx.scene, &ctx.camera, &self.registry, ndc)
    }
}
