//! Mining, placing, doors, workbench and vehicle entry, plus the vehicle
//! weapon. All of it runs against the cell under the cursor.

use neonscrap_geom::{Rect, Vec2};
use neonscrap_tiles::{Rgba, TileKind};
use neonscrap_world::{TILE_SIZE, TileGrid, cell_of};
use rand::Rng;

use crate::config::InteractionConfig;
use crate::input::FrameInput;
use crate::output::SimEvent;
use crate::particles::{Projectile, SPARK};
use crate::sim::{Simulation, standing_on_cell};
use crate::vehicle::{TransitionDirection, VehicleTransition};

const CLANK: Rgba = Rgba::hex(0x94a3b8);
const ADVANCED_BURST: Rgba = Rgba::hex(0xa855f7);
const ADVANCED_BURST_LIGHT: Rgba = Rgba::hex(0xd8b4fe);

/// The cell being mined and when work on it started.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MiningProgress {
    target: Option<(i32, i32)>,
    started_ms: f64,
}

impl MiningProgress {
    pub fn reset(&mut self) {
        self.target = None;
        self.started_ms = 0.0;
    }

    pub fn target(&self) -> Option<(i32, i32)> {
        self.target
    }

    /// Milliseconds spent on `cell`; the timer restarts when the target moves.
    pub fn track(&mut self, cell: (i32, i32), now_ms: f64) -> f64 {
        if self.target != Some(cell) {
            self.target = Some(cell);
            self.started_ms = now_ms;
        }
        now_ms - self.started_ms
    }
}

/// Whether `tool` may break `target`. God mode ignores tiers.
pub fn tool_can_break(tool: TileKind, target: TileKind, god: bool) -> bool {
    god || tool.tool_tier() >= target.required_tier()
}

pub fn mining_time_ms(tool: TileKind, god: bool, cfg: &InteractionConfig) -> f64 {
    if god {
        0.0
    } else if tool.tool_tier() >= 2 {
        cfg.tier2_mining_ms
    } else {
        cfg.tier1_mining_ms
    }
}

#[inline]
pub fn cell_rect(x: i32, y: i32) -> Rect {
    Rect::from_pos_size(
        Vec2::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE),
        Vec2::new(TILE_SIZE, TILE_SIZE),
    )
}

/// Validate placing `kind` at `(x, y)` next to an actor occupying `body`.
/// Returns the cells to fill, or `None` when the placement is rejected.
pub fn placement_cells(grid: &TileGrid, kind: TileKind, x: i32, y: i32, body: &Rect) -> Option<Vec<(i32, i32)>> {
    if !kind.is_placeable() || !grid.get(x, y).is_air() || cell_rect(x, y).intersects(body) {
        return None;
    }
    if kind.is_door() {
        if !grid.get(x, y - 1).is_air() || cell_rect(x, y - 1).intersects(body) {
            return None;
        }
        return Some(vec![(x, y), (x, y - 1)]);
    }
    if kind == TileKind::Luminary && grid.get(x, y - 1).is_passable() {
        return None;
    }
    Some(vec![(x, y)])
}

impl Simulation {
    pub(crate) fn interact(
        &mut self,
        input: &FrameInput<'_>,
        cursor_world: Vec2,
        secondary_pressed: bool,
        events: &mut Vec<SimEvent>,
    ) {
        let cell = (cell_of(cursor_world.x), cell_of(cursor_world.y));
        let in_reach = cursor_world.distance(self.actor.center()) < self.config.interaction.reach;
        let gate = in_reach && !input.flags.map_open;

        let wants_primary = input.controls.primary && !self.primary_latched && !self.in_vehicle();
        if gate && wants_primary {
            self.primary_action(input, cell, cursor_world, events);
        } else {
            self.mining.reset();
        }

        if gate && secondary_pressed {
            self.secondary_action(cell, events);
        }
    }

    fn primary_action(
        &mut self,
        input: &FrameInput<'_>,
        cell: (i32, i32),
        at: Vec2,
        events: &mut Vec<SimEvent>,
    ) {
        let target = self.grid.get(cell.0, cell.1);
        match input.held_item {
            Some(tool) if tool.is_tool() && !target.is_air() && self.grid.in_bounds(cell.0, cell.1) => {
                self.mine(input, tool, target, cell, at, events);
            }
            Some(kind) if kind.is_placeable() && target.is_air() => {
                self.mining.reset();
                self.place(input, kind, cell, at, events);
            }
            _ => self.mining.reset(),
        }
    }

    fn mine(
        &mut self,
        input: &FrameInput<'_>,
        tool: TileKind,
        target: TileKind,
        cell: (i32, i32),
        at: Vec2,
        events: &mut Vec<SimEvent>,
    ) {
        let god = input.flags.god_mode;
        if !tool_can_break(tool, target, god) {
            self.particles.burst(&mut self.rng, at, CLANK, 2, 8.0);
            self.mining.reset();
            return;
        }

        let required = mining_time_ms(tool, god, &self.config.interaction);
        let elapsed = self.mining.track(cell, input.timestamp_ms);
        if elapsed < required {
            log::trace!("mining {:?} {:.0}/{:.0} ms", cell, elapsed, required);
            let chance = self.config.interaction.drill_spark_chance.clamp(0.0, 1.0);
            if self.rng.gen_bool(chance) {
                self.particles.burst(&mut self.rng, at, Rgba::WHITE, 1, 2.0);
            }
            return;
        }

        if target.is_door() {
            events.push(SimEvent::InventoryDelta {
                kind: TileKind::DoorClosed,
                amount: 1,
            });
            self.grid.set(cell.0, cell.1, TileKind::Air);
            self.particles.burst_default(&mut self.rng, at, target.color(), 5);
            for dy in [-1, 1] {
                let half = self.grid.get(cell.0, cell.1 + dy);
                if half.is_door() {
                    self.grid.set(cell.0, cell.1 + dy, TileKind::Air);
                    let half_at = Vec2::new(at.x, at.y + dy as f32 * TILE_SIZE);
                    self.particles.burst_default(&mut self.rng, half_at, half.color(), 5);
                }
            }
        } else {
            events.push(SimEvent::InventoryDelta {
                kind: target,
                amount: 1,
            });
            self.grid.set(cell.0, cell.1, TileKind::Air);
            if tool.tool_tier() >= 2 {
                self.particles.burst(&mut self.rng, at, ADVANCED_BURST, 8, 6.0);
                self.particles.burst(&mut self.rng, at, ADVANCED_BURST_LIGHT, 4, 4.0);
            } else {
                self.particles.burst_default(&mut self.rng, at, target.color(), 5);
            }
        }
        self.mining.reset();
    }

    fn place(
        &mut self,
        input: &FrameInput<'_>,
        kind: TileKind,
        cell: (i32, i32),
        at: Vec2,
        events: &mut Vec<SimEvent>,
    ) {
        if input.inventory.count(kind) == 0 {
            return;
        }
        let body = self.actor.bounds();
        let Some(cells) = placement_cells(&self.grid, kind, cell.0, cell.1, &body) else {
            return;
        };
        for &(x, y) in &cells {
            self.grid.set(x, y, kind);
        }
        if kind.is_door() {
            self.primary_latched = true;
        }
        events.push(SimEvent::InventoryDelta { kind, amount: -1 });
        self.particles.burst_default(&mut self.rng, at, kind.color(), 3);
    }

    fn secondary_action(&mut self, cell: (i32, i32), events: &mut Vec<SimEvent>) {
        let (x, y) = cell;
        let kind = self.grid.get(x, y);
        match kind {
            TileKind::Workbench => {
                log::debug!("workbench opened at {:?}", cell);
                events.push(SimEvent::OpenWorkbench);
            }
            TileKind::MechSuit if !self.in_vehicle() => {
                log::debug!("entering vehicle at {:?}", cell);
                self.grid.set(x, y, TileKind::Air);
                let pos = standing_on_cell(cell, self.actor.size);
                self.actor.place_at(pos);
                self.mining.reset();
                self.transition = Some(VehicleTransition::start(TransitionDirection::Enter));
            }
            _ => {
                let Some(toggled) = kind.toggled_door() else {
                    return;
                };
                self.grid.set(x, y, toggled);
                for dy in [-1, 1] {
                    if self.grid.get(x, y + dy) == kind {
                        self.grid.set(x, y + dy, toggled);
                    }
                }
            }
        }
    }

    /// Fire the vehicle gun toward the cursor if the cooldown allows and
    /// there is ammo (god mode needs none and spends none).
    pub(crate) fn fire_weapon(&mut self, input: &FrameInput<'_>, events: &mut Vec<SimEvent>) {
        let cfg = &self.config.interaction;
        if input.timestamp_ms - self.last_shot_ms <= cfg.fire_interval_ms {
            return;
        }
        let god = input.flags.god_mode;
        if !god && input.inventory.count(TileKind::AmmoPack) == 0 {
            return;
        }
        if !god {
            events.push(SimEvent::InventoryDelta {
                kind: TileKind::AmmoPack,
                amount: -1,
            });
        }
        self.last_shot_ms = input.timestamp_ms;

        let a = &self.actor;
        let muzzle = Vec2::new(
            if a.facing_right {
                a.pos.x + a.size.x + cfg.muzzle_offset
            } else {
                a.pos.x - cfg.muzzle_offset
            },
            a.pos.y + a.size.y * cfg.muzzle_height,
        );
        let aim = self.camera.screen_to_world(input.cursor_screen) - muzzle;
        let dir = Vec2::from_angle(aim.y.atan2(aim.x));
        self.projectiles.spawn(Projectile {
            pos: muzzle,
            vel: dir * cfg.projectile_speed,
            life: cfg.projectile_life,
            color: SPARK,
        });
        if !self.actor.grounded {
            self.actor.vel.x -= dir.x * cfg.recoil;
        }
    }
}
