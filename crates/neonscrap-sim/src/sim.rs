//! The simulation context: owns the world and every piece of per-frame
//! state, and advances it one `FrameInput` at a time.

use neonscrap_geom::Vec2;
use neonscrap_lighting::{DarknessMask, DaySample, LightingCompositor};
use neonscrap_tiles::{Rgba, TileKind};
use neonscrap_world::{TILE_SIZE, TileGrid, cell_of, generate_world};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::actor::{Actor, ActorForm};
use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::config::SimConfig;
use crate::input::{FrameInput, Triggers};
use crate::interaction::MiningProgress;
use crate::map_view::{MapRaster, render_fullmap, render_minimap};
use crate::output::{FrameOutput, SaveSnapshot, SimEvent};
use crate::particles::{Particle, ParticleSystem, Projectile, ProjectileSystem};
use crate::physics::{StepReport, step_actor};
use crate::vehicle::{TransitionDirection, VehicleTransition};

const JUMP_DUST: Rgba = Rgba::hex(0x64748b);
const DUST: Rgba = Rgba::hex(0x94a3b8);
const BLOOD: Rgba = Rgba::hex(0xef4444);
const ENTER_BURST: Rgba = Rgba::hex(0x0ea5e9);
const RESET_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct Simulation {
    pub(crate) config: SimConfig,
    base_seed: u64,
    world_seed: u64,
    pub(crate) grid: TileGrid,
    spawn: Vec2,
    pub(crate) actor: Actor,
    pub(crate) camera: Camera,
    clock: FrameClock,
    pub(crate) mining: MiningProgress,
    pub(crate) transition: Option<VehicleTransition>,
    pub(crate) particles: ParticleSystem,
    pub(crate) projectiles: ProjectileSystem,
    pub(crate) rng: StdRng,
    lighting: LightingCompositor,
    last_fog_cell: Option<(i32, i32)>,
    last_triggers: Option<Triggers>,
    pub(crate) primary_latched: bool,
    secondary_was_down: bool,
    exit_was_down: bool,
    pub(crate) last_shot_ms: f64,
    cursor_cell: Option<(i32, i32)>,
}

impl Simulation {
    /// Generate a world from `config.world` and place the actor at
    /// `load_position` when it is usable, else at spawn.
    pub fn new(config: SimConfig, seed: u64, load_position: Option<Vec2>) -> Self {
        let world = generate_world(&config.world, seed);
        let spawn = world.layout.spawn;
        let start = validated_position(&world.grid, load_position).unwrap_or(spawn);
        Self::from_parts(config, seed, world.grid, spawn, start)
    }

    /// Wrap an already built grid instead of generating one.
    pub fn with_grid(config: SimConfig, grid: TileGrid, spawn: Vec2, seed: u64) -> Self {
        Self::from_parts(config, seed, grid, spawn, spawn)
    }

    fn from_parts(config: SimConfig, seed: u64, grid: TileGrid, spawn: Vec2, start: Vec2) -> Self {
        let actor = Actor::new(start, config.physics.size_for(ActorForm::Biped));
        let clock = FrameClock::new(config.physics.frame_ms, config.physics.max_dt);
        let lighting = LightingCompositor::new(config.lighting.clone());
        Self {
            config,
            base_seed: seed,
            world_seed: seed,
            grid,
            spawn,
            actor,
            camera: Camera::default(),
            clock,
            mining: MiningProgress::default(),
            transition: None,
            particles: ParticleSystem::new(),
            projectiles: ProjectileSystem::new(),
            rng: StdRng::seed_from_u64(seed),
            lighting,
            last_fog_cell: None,
            last_triggers: None,
            primary_latched: false,
            secondary_was_down: false,
            exit_was_down: false,
            last_shot_ms: f64::NEG_INFINITY,
            cursor_cell: None,
        }
    }

    pub fn step(&mut self, input: &FrameInput<'_>) -> FrameOutput {
        let mut events = Vec::new();
        let dt = self.clock.tick(input.timestamp_ms);
        let day = self
            .lighting
            .sample_day(input.timestamp_ms, input.flags.forced_day_progress);

        let controls = input.controls;
        let secondary_pressed = controls.secondary && !self.secondary_was_down;
        let exit_pressed = controls.exit_vehicle && !self.exit_was_down;
        self.secondary_was_down = controls.secondary;
        self.exit_was_down = controls.exit_vehicle;
        if !controls.primary {
            self.primary_latched = false;
        }

        if input.flags.paused {
            self.compose_lighting(input.viewport, &day);
            return FrameOutput {
                events,
                day,
                dt,
                moving: false,
            };
        }

        self.handle_triggers(input, &mut events);
        self.sync_vehicle_flag(input.flags.vehicle_active);

        let mut moving = false;
        if self.transition.is_none() {
            let report = step_actor(
                &mut self.actor,
                &self.grid,
                &controls.move_intent(),
                input.flags.god_mode,
                &self.config.physics,
                dt,
            );
            moving = report.moving;
            self.apply_step_report(&report, &mut events);
            if self.in_vehicle() && controls.primary && !input.flags.map_open {
                self.fire_weapon(input, &mut events);
            }
        }

        self.projectiles
            .update(&self.grid, dt, &mut self.particles, &mut self.rng);
        self.update_fog();

        let cursor_world = self.camera.screen_to_world(input.cursor_screen);
        self.cursor_cell = Some((cell_of(cursor_world.x), cell_of(cursor_world.y)));
        if self.transition.is_none() {
            if exit_pressed && self.in_vehicle() {
                log::debug!("leaving vehicle at {:?}", self.actor.pos);
                self.transition = Some(VehicleTransition::start(TransitionDirection::Exit));
                self.mining.reset();
            } else {
                self.interact(input, cursor_world, secondary_pressed, &mut events);
            }
        } else {
            self.mining.reset();
        }

        self.advance_transition(dt, &mut events);

        let (ww, wh) = self.grid.pixel_size();
        self.camera.follow(
            self.actor.center(),
            input.viewport,
            Vec2::new(ww, wh),
            &self.config.camera,
        );
        self.particles.update(dt);
        self.compose_lighting(input.viewport, &day);

        FrameOutput {
            events,
            day,
            dt,
            moving,
        }
    }

    fn handle_triggers(&mut self, input: &FrameInput<'_>, events: &mut Vec<SimEvent>) {
        let current = input.triggers;
        let Some(prev) = self.last_triggers.replace(current) else {
            self.snap_camera(input.viewport);
            return;
        };
        if current.reset != prev.reset {
            self.reset_world(current.reset, input.load_position, input.viewport);
        }
        if current.respawn != prev.respawn {
            log::debug!("respawn at {:?}", self.spawn);
            self.actor.place_at(self.spawn);
            self.snap_camera(input.viewport);
        }
        if current.save != prev.save {
            events.push(SimEvent::SaveSnapshotReady(SaveSnapshot {
                x: self.actor.pos.x,
                y: self.actor.pos.y,
            }));
        }
    }

    fn reset_world(&mut self, counter: u64, load: Option<Vec2>, viewport: Vec2) {
        self.world_seed = self.base_seed ^ counter.wrapping_mul(RESET_SEED_MIX);
        let world = generate_world(&self.config.world, self.world_seed);
        self.grid = world.grid;
        self.spawn = world.layout.spawn;
        let start = validated_position(&self.grid, load).unwrap_or(self.spawn);
        self.actor.place_at(start);
        self.mining.reset();
        self.transition = None;
        self.particles.clear();
        self.projectiles.clear();
        self.last_fog_cell = None;
        self.snap_camera(viewport);
        log::info!("world reset #{} (seed {})", counter, self.world_seed);
    }

    fn snap_camera(&mut self, viewport: Vec2) {
        let (ww, wh) = self.grid.pixel_size();
        self.camera
            .snap_to(self.actor.center(), viewport, Vec2::new(ww, wh));
    }

    /// Follow the host's vehicle flag, switching the body box in place.
    fn sync_vehicle_flag(&mut self, active: bool) {
        let form = if active {
            ActorForm::Vehicle
        } else {
            ActorForm::Biped
        };
        let size = self.config.physics.size_for(form);
        if self.actor.set_form(form, size) {
            log::debug!("actor form now {:?}", form);
        }
    }

    fn apply_step_report(&mut self, report: &StepReport, events: &mut Vec<SimEvent>) {
        let feet = self.actor.feet();
        if report.jumped && self.in_vehicle() {
            self.particles.burst_default(&mut self.rng, feet, JUMP_DUST, 10);
        }
        if report.fall_damage > 0 {
            events.push(SimEvent::Damage {
                amount: report.fall_damage,
            });
            self.particles.burst_default(&mut self.rng, feet, BLOOD, 10);
        }
        if report.vehicle_thud {
            self.particles.burst_default(&mut self.rng, feet, DUST, 5);
            self.camera.shake.y = self.config.physics.vehicle_landing_shake;
        }
        if report.fell_out {
            events.push(SimEvent::Damage {
                amount: self.config.physics.fallout_damage,
            });
        }
    }

    fn update_fog(&mut self) {
        let c = self.actor.center();
        let cell = (cell_of(c.x), cell_of(c.y));
        if self.last_fog_cell != Some(cell) {
            self.last_fog_cell = Some(cell);
            self.grid
                .reveal_around(cell.0, cell.1, self.config.map.exploration_radius);
        }
    }

    fn advance_transition(&mut self, dt: f32, events: &mut Vec<SimEvent>) {
        let Some(mut t) = self.transition else {
            return;
        };
        let shake = self.config.vehicle.transition_shake.abs();
        self.camera.shake = Vec2::new(
            self.rng.gen_range(-shake..=shake),
            self.rng.gen_range(-shake..=shake),
        );
        if !t.advance(dt, self.config.vehicle.transition_rate) {
            self.transition = Some(t);
            return;
        }

        self.transition = None;
        self.camera.shake = Vec2::ZERO;
        let burst_color = match t.direction {
            TransitionDirection::Enter => {
                let size = self.config.physics.size_for(ActorForm::Vehicle);
                self.actor.set_form(ActorForm::Vehicle, size);
                events.push(SimEvent::VehicleMode { active: true });
                ENTER_BURST
            }
            TransitionDirection::Exit => {
                // cell holding the feet, which rest 0.01 px above the floor
                let feet = self.actor.feet();
                let (cx, cy) = (cell_of(feet.x), cell_of(feet.y - 0.5));
                self.grid.set(cx, cy, TileKind::MechSuit);
                let size = self.config.physics.size_for(ActorForm::Biped);
                self.actor.set_form(ActorForm::Biped, size);
                events.push(SimEvent::VehicleMode { active: false });
                DUST
            }
        };
        self.actor.vel = Vec2::ZERO;
        let center = self.actor.center();
        let cfg = &self.config.vehicle;
        self.particles
            .burst(&mut self.rng, center, burst_color, cfg.burst_count, cfg.burst_speed);
        log::debug!("vehicle transition {:?} complete", t.direction);
    }

    fn compose_lighting(&mut self, viewport: Vec2, day: &DaySample) {
        let vehicle = self.in_vehicle();
        self.lighting.compose(
            &self.grid,
            self.camera.pos,
            viewport,
            self.actor.center(),
            vehicle,
            day,
        );
    }

    #[inline]
    pub fn in_vehicle(&self) -> bool {
        self.actor.form == ActorForm::Vehicle
    }

    /// Swap in new tunables. World generation settings take effect on the
    /// next reset.
    pub fn set_config(&mut self, config: SimConfig) {
        self.clock
            .set_limits(config.physics.frame_ms, config.physics.max_dt);
        self.lighting.set_config(config.lighting.clone());
        self.config = config;
        log::info!("simulation config updated");
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn world_seed(&self) -> u64 {
        self.world_seed
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    pub fn projectiles(&self) -> &[Projectile] {
        self.projectiles.projectiles()
    }

    pub fn transition(&self) -> Option<&VehicleTransition> {
        self.transition.as_ref()
    }

    pub fn mining(&self) -> &MiningProgress {
        &self.mining
    }

    /// Cell under the cursor as of the last frame.
    pub fn cursor_cell(&self) -> Option<(i32, i32)> {
        self.cursor_cell
    }

    pub fn darkness(&self) -> &DarknessMask {
        self.lighting.mask()
    }

    pub fn darkness_tint(&self) -> Rgba {
        self.lighting.tint()
    }

    fn actor_cell(&self) -> (i32, i32) {
        let c = self.actor.center();
        (cell_of(c.x), cell_of(c.y))
    }

    /// Minimap raster, only with the map upgrade.
    pub fn minimap(&self, map_upgrade: bool) -> Option<MapRaster> {
        map_upgrade.then(|| render_minimap(&self.grid, self.actor_cell(), &self.config.map))
    }

    /// Full map raster, only while it is open and the upgrade is owned.
    pub fn fullmap(&self, map_open: bool, map_upgrade: bool, viewport: Vec2) -> Option<MapRaster> {
        if !(map_open && map_upgrade) {
            return None;
        }
        let vp = (viewport.x.max(0.0) as u32, viewport.y.max(0.0) as u32);
        Some(render_fullmap(
            &self.grid,
            self.actor_cell(),
            vp,
            &self.config.map,
        ))
    }
}

/// A usable load position: finite, non-negative and inside the world.
pub fn validated_position(grid: &TileGrid, pos: Option<Vec2>) -> Option<Vec2> {
    let p = pos?;
    let (ww, wh) = grid.pixel_size();
    let ok = p.is_finite() && p.x >= 0.0 && p.y >= 0.0 && p.x < ww && p.y < wh;
    ok.then_some(p)
}

/// Top-left corner for a body of `size` standing on the bottom of `cell`,
/// centered horizontally.
pub(crate) fn standing_on_cell(cell: (i32, i32), size: Vec2) -> Vec2 {
    Vec2::new(
        cell.0 as f32 * TILE_SIZE + TILE_SIZE / 2.0 - size.x / 2.0,
        (cell.1 + 1) as f32 * TILE_SIZE - size.y,
    )
}
