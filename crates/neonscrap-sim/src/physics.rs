//! Movement integration and axis-separated tile collision.

use neonscrap_world::{TILE_SIZE, TileGrid, cell_of};

use crate::actor::{Actor, ActorForm};
use crate::config::PhysicsConfig;

/// Latest-state movement controls for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub boost: bool,
}

/// What happened during one physics step; the caller turns this into
/// particles, camera shake and damage events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    pub moving: bool,
    pub jumped: bool,
    /// Downward speed at the moment of landing, if the actor landed.
    pub landed_at: Option<f32>,
    pub fall_damage: u32,
    pub vehicle_thud: bool,
    pub fell_out: bool,
}

/// Damage for landing at `impact` speed: nothing at or below the threshold.
pub fn fall_damage(impact: f32, cfg: &PhysicsConfig) -> u32 {
    if impact <= cfg.fall_damage_threshold {
        return 0;
    }
    ((impact - cfg.fall_damage_threshold) * cfg.fall_damage_multiplier).floor() as u32
}

#[inline]
fn blocks_actor(grid: &TileGrid, x: i32, y: i32) -> bool {
    !grid.get(x, y).is_passable()
}

/// Resolve horizontal overlap on the leading edge after moving in x.
pub fn resolve_x(actor: &mut Actor, grid: &TileGrid) {
    let start_x = cell_of(actor.pos.x);
    let end_x = cell_of(actor.pos.x + actor.size.x);
    let start_y = cell_of(actor.pos.y);
    let end_y = cell_of(actor.pos.y + actor.size.y);

    if actor.vel.x > 0.0 {
        if (start_y..=end_y).any(|y| blocks_actor(grid, end_x, y)) {
            actor.pos.x = end_x as f32 * TILE_SIZE - actor.size.x - 0.01;
            actor.vel.x = 0.0;
        }
    } else if actor.vel.x < 0.0 && (start_y..=end_y).any(|y| blocks_actor(grid, start_x, y)) {
        actor.pos.x = (start_x + 1) as f32 * TILE_SIZE;
        actor.vel.x = 0.0;
    }
}

/// Resolve vertical overlap after moving in y. Clears `grounded` first and
/// returns the downward speed if the actor landed this step.
pub fn resolve_y(actor: &mut Actor, grid: &TileGrid) -> Option<f32> {
    let start_x = cell_of(actor.pos.x);
    let end_x = cell_of(actor.pos.x + actor.size.x);
    let start_y = cell_of(actor.pos.y);
    let end_y = cell_of(actor.pos.y + actor.size.y);

    actor.grounded = false;
    if actor.vel.y > 0.0 {
        if (start_x..=end_x).any(|x| blocks_actor(grid, x, end_y)) {
            let impact = actor.vel.y;
            actor.pos.y = end_y as f32 * TILE_SIZE - actor.size.y - 0.01;
            actor.vel.y = 0.0;
            actor.grounded = true;
            return Some(impact);
        }
    } else if actor.vel.y < 0.0 && (start_x..=end_x).any(|x| blocks_actor(grid, x, start_y)) {
        actor.pos.y = (start_y + 1) as f32 * TILE_SIZE;
        actor.vel.y = 0.0;
    }
    None
}

/// One frame of movement. `god` is read fresh each call.
pub fn step_actor(
    actor: &mut Actor,
    grid: &TileGrid,
    intent: &MoveIntent,
    god: bool,
    cfg: &PhysicsConfig,
    dt: f32,
) -> StepReport {
    let vehicle = actor.form == ActorForm::Vehicle;
    let mut report = StepReport::default();

    let speed_mult = if god {
        if intent.boost {
            cfg.god_boost_mult
        } else {
            cfg.god_speed_mult
        }
    } else if vehicle {
        cfg.vehicle_move_speed / cfg.move_speed
    } else {
        1.0
    };
    let speed = cfg.move_speed * speed_mult;
    let (gravity, jump_force) = if vehicle {
        (cfg.vehicle_gravity, cfg.vehicle_jump_force)
    } else {
        (cfg.gravity, cfg.jump_force)
    };

    if intent.left {
        actor.vel.x -= speed * dt;
        actor.facing_right = false;
    }
    if intent.right {
        actor.vel.x += speed * dt;
        actor.facing_right = true;
    }
    actor.vel.x *= cfg.friction;
    report.moving = (intent.left || intent.right) && actor.vel.x.abs() >= 0.1;

    if god {
        if intent.up {
            actor.vel.y -= speed * dt;
        }
        if intent.down {
            actor.vel.y += speed * dt;
        }
        if intent.jump {
            actor.vel.y -= speed * dt;
        }
        actor.vel.y *= cfg.friction;
    } else {
        actor.vel.y += gravity * dt;
        if intent.jump && actor.grounded {
            actor.vel.y = jump_force;
            actor.grounded = false;
            report.jumped = true;
        }
    }

    actor.pos.x += actor.vel.x * dt;
    resolve_x(actor, grid);
    actor.pos.y += actor.vel.y * dt;
    if let Some(impact) = resolve_y(actor, grid) {
        report.landed_at = Some(impact);
        if !god && !vehicle {
            report.fall_damage = fall_damage(impact, cfg);
        } else if vehicle && impact > cfg.vehicle_landing_threshold {
            report.vehicle_thud = true;
        }
    }

    let (world_w, world_h) = grid.pixel_size();
    actor.pos.x = actor.pos.x.clamp(0.0, (world_w - actor.size.x).max(0.0));
    let floor_limit = world_h + cfg.fallout_margin;
    if actor.pos.y > floor_limit {
        if !god {
            report.fell_out = true;
            actor.pos.y = floor_limit;
            actor.vel.y = 0.0;
        } else if actor.vel.y > cfg.god_max_fall_speed {
            actor.vel.y = cfg.god_max_fall_speed;
        }
    }

    report
}
