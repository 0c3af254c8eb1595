use neonscrap_geom::Vec2;
use neonscrap_sim::{
    Controls, FrameInput, FrameOutput, HostFlags, SimConfig, SimEvent, Simulation, Triggers,
};
use neonscrap_tiles::{Inventory, TileKind};
use neonscrap_world::{TileGrid, WorldGenConfig};

const FRAME_MS: f64 = 16.67;
const FLOOR_ROW: i32 = 20;

/// Host stand-in: owns inventory and flags, applies events after each frame.
struct Host {
    sim: Simulation,
    inventory: Inventory,
    flags: HostFlags,
    triggers: Triggers,
    now: f64,
    held: Option<TileKind>,
}

impl Host {
    fn on_floor() -> Self {
        let mut grid = TileGrid::new(40, 40);
        for x in 0..40 {
            grid.set(x, FLOOR_ROW, TileKind::Concrete);
        }
        let sim = Simulation::with_grid(test_config(), grid, Vec2::new(200.0, 599.99), 5);
        Self {
            sim,
            inventory: Inventory::starter(),
            flags: HostFlags::default(),
            triggers: Triggers::default(),
            now: 1000.0,
            held: Some(TileKind::Pickaxe),
        }
    }

    /// One frame aiming at the center of `cell`.
    fn frame(&mut self, controls: Controls, cell: Option<(i32, i32)>) -> FrameOutput {
        let cursor = match cell {
            Some((x, y)) => {
                Vec2::new(x as f32 * 32.0 + 16.0, y as f32 * 32.0 + 16.0) - self.sim.camera().pos
            }
            None => Vec2::ZERO,
        };
        let input = FrameInput {
            timestamp_ms: self.now,
            viewport: Vec2::new(640.0, 480.0),
            cursor_screen: cursor,
            controls,
            held_item: self.held,
            inventory: &self.inventory,
            flags: self.flags,
            triggers: self.triggers,
            load_position: None,
        };
        let out = self.sim.step(&input);
        self.now += FRAME_MS;
        for e in &out.events {
            match e {
                SimEvent::InventoryDelta { kind, amount } => {
                    self.inventory.apply(*kind, *amount);
                }
                SimEvent::VehicleMode { active } => self.flags.vehicle_active = *active,
                _ => {}
            }
        }
        out
    }

    fn idle(&mut self) -> FrameOutput {
        self.frame(Controls::default(), None)
    }
}

fn test_config() -> SimConfig {
    SimConfig {
        world: WorldGenConfig::default().with_size(200, 120),
        ..SimConfig::default()
    }
}

fn primary() -> Controls {
    Controls {
        primary: true,
        ..Default::default()
    }
}

fn secondary() -> Controls {
    Controls {
        secondary: true,
        ..Default::default()
    }
}

fn vehicle_events(out: &FrameOutput) -> Vec<bool> {
    out.events
        .iter()
        .filter_map(|e| match e {
            SimEvent::VehicleMode { active } => Some(*active),
            _ => None,
        })
        .collect()
}

#[test]
fn pickaxe_mines_concrete_in_two_seconds() {
    let mut h = Host::on_floor();
    h.idle();
    let target = (6, FLOOR_ROW);
    for i in 0..120 {
        let out = h.frame(primary(), Some(target));
        assert_eq!(out.inventory_delta(TileKind::Concrete), 0, "frame {i}");
    }
    assert_eq!(h.sim.grid().get(6, FLOOR_ROW), TileKind::Concrete);
    let out = h.frame(primary(), Some(target));
    assert_eq!(out.inventory_delta(TileKind::Concrete), 1);
    assert_eq!(h.sim.grid().get(6, FLOOR_ROW), TileKind::Air);
    assert_eq!(h.inventory.count(TileKind::Concrete), 1);
    assert_eq!(h.sim.mining().target(), None);
}

#[test]
fn releasing_primary_restarts_the_timer() {
    let mut h = Host::on_floor();
    h.idle();
    let target = (6, FLOOR_ROW);
    for _ in 0..100 {
        h.frame(primary(), Some(target));
    }
    h.idle();
    assert_eq!(h.sim.mining().target(), None);
    for _ in 0..100 {
        let out = h.frame(primary(), Some(target));
        assert!(out.events.is_empty());
    }
    assert_eq!(h.sim.grid().get(6, FLOOR_ROW), TileKind::Concrete);
}

#[test]
fn switching_target_restarts_the_timer() {
    let mut h = Host::on_floor();
    h.idle();
    for _ in 0..100 {
        h.frame(primary(), Some((6, FLOOR_ROW)));
    }
    for _ in 0..100 {
        let out = h.frame(primary(), Some((7, FLOOR_ROW)));
        assert!(out.events.is_empty());
    }
    assert_eq!(h.sim.grid().get(6, FLOOR_ROW), TileKind::Concrete);
    assert_eq!(h.sim.grid().get(7, FLOOR_ROW), TileKind::Concrete);
}

#[test]
fn sewer_brick_needs_advanced_pickaxe() {
    let mut h = Host::on_floor();
    h.sim.grid_mut().set(6, FLOOR_ROW, TileKind::SewerBrick);
    h.idle();
    for _ in 0..300 {
        let out = h.frame(primary(), Some((6, FLOOR_ROW)));
        assert!(out.events.is_empty());
    }
    assert_eq!(h.sim.grid().get(6, FLOOR_ROW), TileKind::SewerBrick);
    assert!(!h.sim.particles().is_empty());

    h.held = Some(TileKind::AdvancedPickaxe);
    let mut mined_at = None;
    for i in 0..80 {
        let out = h.frame(primary(), Some((6, FLOOR_ROW)));
        if out.inventory_delta(TileKind::SewerBrick) == 1 {
            mined_at = Some(i);
            break;
        }
    }
    assert_eq!(mined_at, Some(60));
}

#[test]
fn god_mode_mines_instantly_but_not_outside_the_world() {
    let mut h = Host::on_floor();
    h.flags.god_mode = true;
    h.sim.grid_mut().set(6, FLOOR_ROW, TileKind::CyberWall);
    h.idle();
    let out = h.frame(primary(), Some((6, FLOOR_ROW)));
    assert_eq!(out.inventory_delta(TileKind::CyberWall), 1);

    h.sim.actor_mut().pos = Vec2::new(10.0, 599.99);
    h.idle();
    let out = h.frame(primary(), Some((-1, FLOOR_ROW - 1)));
    assert!(out.events.is_empty());
}

#[test]
fn out_of_reach_does_nothing() {
    let mut h = Host::on_floor();
    h.idle();
    for _ in 0..200 {
        let out = h.frame(primary(), Some((30, FLOOR_ROW)));
        assert!(out.events.is_empty());
    }
    assert_eq!(h.sim.grid().get(30, FLOOR_ROW), TileKind::Concrete);
}

#[test]
fn placement_spends_inventory() {
    let mut h = Host::on_floor();
    h.inventory.apply(TileKind::Concrete, 2);
    h.held = Some(TileKind::Concrete);
    h.idle();

    let out = h.frame(primary(), Some((9, FLOOR_ROW - 1)));
    assert_eq!(out.inventory_delta(TileKind::Concrete), -1);
    let out = h.frame(primary(), Some((10, FLOOR_ROW - 1)));
    assert_eq!(out.inventory_delta(TileKind::Concrete), -1);
    let out = h.frame(primary(), Some((11, FLOOR_ROW - 1)));
    assert!(out.events.is_empty());

    assert_eq!(h.inventory.count(TileKind::Concrete), 0);
    assert_eq!(h.sim.grid().get(9, FLOOR_ROW - 1), TileKind::Concrete);
    assert_eq!(h.sim.grid().get(10, FLOOR_ROW - 1), TileKind::Concrete);
    assert_eq!(h.sim.grid().get(11, FLOOR_ROW - 1), TileKind::Air);
}

#[test]
fn cannot_place_inside_the_actor() {
    let mut h = Host::on_floor();
    h.inventory.apply(TileKind::Concrete, 5);
    h.held = Some(TileKind::Concrete);
    h.idle();
    // actor spans x 200..224, y ~600..640
    let out = h.frame(primary(), Some((6, FLOOR_ROW - 1)));
    assert!(out.events.is_empty());
    assert_eq!(h.sim.grid().get(6, FLOOR_ROW - 1), TileKind::Air);
}

#[test]
fn door_pair_lifecycle() {
    let mut h = Host::on_floor();
    h.inventory.apply(TileKind::DoorClosed, 3);
    h.held = Some(TileKind::DoorClosed);
    h.idle();

    let (x, y) = (9, FLOOR_ROW - 1);
    let out = h.frame(primary(), Some((x, y)));
    assert_eq!(out.inventory_delta(TileKind::DoorClosed), -1);
    assert_eq!(h.sim.grid().get(x, y), TileKind::DoorClosed);
    assert_eq!(h.sim.grid().get(x, y - 1), TileKind::DoorClosed);

    // still held: latched, nothing more is placed
    for _ in 0..5 {
        let out = h.frame(primary(), Some((10, y)));
        assert!(out.events.is_empty());
    }
    assert_eq!(h.sim.grid().get(10, y), TileKind::Air);

    h.frame(secondary(), Some((x, y - 1)));
    assert_eq!(h.sim.grid().get(x, y), TileKind::DoorOpen);
    assert_eq!(h.sim.grid().get(x, y - 1), TileKind::DoorOpen);
    // holding the button does not toggle again
    h.frame(secondary(), Some((x, y - 1)));
    assert_eq!(h.sim.grid().get(x, y), TileKind::DoorOpen);
    h.idle();
    h.frame(secondary(), Some((x, y)));
    assert_eq!(h.sim.grid().get(x, y), TileKind::DoorClosed);
    assert_eq!(h.sim.grid().get(x, y - 1), TileKind::DoorClosed);

    h.held = Some(TileKind::Pickaxe);
    let mut gained = 0;
    for _ in 0..130 {
        gained += h.frame(primary(), Some((x, y))).inventory_delta(TileKind::DoorClosed);
    }
    assert_eq!(gained, 1);
    assert_eq!(h.sim.grid().get(x, y), TileKind::Air);
    assert_eq!(h.sim.grid().get(x, y - 1), TileKind::Air);
}

#[test]
fn vehicle_enter_takes_twenty_frames_and_notifies_once() {
    let mut h = Host::on_floor();
    let mech = (8, FLOOR_ROW - 1);
    h.sim.grid_mut().set(mech.0, mech.1, TileKind::MechSuit);
    h.idle();

    let mut notices = Vec::new();
    let out = h.frame(secondary(), Some(mech));
    notices.extend(vehicle_events(&out));
    assert!(h.sim.transition().is_some());
    assert_eq!(h.sim.grid().get(mech.0, mech.1), TileKind::Air);
    for i in 2..=19 {
        let out = h.idle();
        assert!(vehicle_events(&out).is_empty(), "frame {i}");
    }
    let out = h.idle();
    notices.extend(vehicle_events(&out));
    assert_eq!(notices, vec![true]);
    assert!(h.sim.transition().is_none());
    assert!(h.sim.in_vehicle());
    assert_eq!(h.sim.actor().size, Vec2::new(70.0, 120.0));
    assert_eq!(h.sim.actor().feet().y, 640.0);

    for _ in 0..30 {
        assert!(vehicle_events(&h.idle()).is_empty());
    }
    assert!(h.flags.vehicle_active);
}

#[test]
fn vehicle_exit_drops_the_suit_at_the_feet() {
    let mut h = Host::on_floor();
    h.flags.vehicle_active = true;
    for _ in 0..10 {
        h.idle();
    }
    assert!(h.sim.actor().grounded);
    let exit = Controls {
        exit_vehicle: true,
        ..Default::default()
    };
    let mut notices = vehicle_events(&h.frame(exit, None));
    for _ in 0..25 {
        notices.extend(vehicle_events(&h.frame(exit, None)));
    }
    assert_eq!(notices, vec![false]);
    assert!(!h.sim.in_vehicle());
    assert_eq!(h.sim.actor().size, Vec2::new(24.0, 40.0));

    let feet = h.sim.actor().feet();
    let cell = ((feet.x / 32.0).floor() as i32, FLOOR_ROW - 1);
    assert_eq!(h.sim.grid().get(cell.0, cell.1), TileKind::MechSuit);
}

#[test]
fn landing_speed_decides_fall_damage() {
    for (start_vy, expected) in [(9.5, None), (14.5, Some(15))] {
        let mut h = Host::on_floor();
        h.sim.actor_mut().pos = Vec2::new(200.0, 595.0);
        h.sim.actor_mut().vel = Vec2::new(0.0, start_vy);
        let out = h.idle();
        let damage = out.events.iter().find_map(|e| match e {
            SimEvent::Damage { amount } => Some(*amount),
            _ => None,
        });
        assert_eq!(damage, expected, "start vy {start_vy}");
        assert!(h.sim.actor().grounded);
    }
}

#[test]
fn falling_out_of_the_world_is_fatal() {
    let mut h = Host::on_floor();
    h.sim.grid_mut().set(6, FLOOR_ROW, TileKind::Air);
    h.sim.grid_mut().set(7, FLOOR_ROW, TileKind::Air);
    h.sim.actor_mut().pos = Vec2::new(200.0, 39.0 * 32.0 + 300.0);
    let out = h.idle();
    assert!(out.events.contains(&SimEvent::Damage { amount: 9999 }));
}

#[test]
fn weapon_respects_cooldown_and_ammo() {
    let mut h = Host::on_floor();
    h.flags.vehicle_active = true;
    h.inventory.apply(TileKind::AmmoPack, 2);
    h.idle();

    let out = h.frame(primary(), Some((20, 15)));
    assert_eq!(out.inventory_delta(TileKind::AmmoPack), -1);
    assert_eq!(h.sim.projectiles().len(), 1);
    // 16.67 ms later: still cooling down
    let out = h.frame(primary(), Some((20, 15)));
    assert_eq!(out.inventory_delta(TileKind::AmmoPack), 0);

    let mut spent = 0;
    for _ in 0..40 {
        spent += h.frame(primary(), Some((20, 15))).inventory_delta(TileKind::AmmoPack);
    }
    assert_eq!(spent, -1);
    assert_eq!(h.inventory.count(TileKind::AmmoPack), 0);
    // vehicle mode never mines
    assert_eq!(h.sim.grid().get(20, FLOOR_ROW), TileKind::Concrete);
}

#[test]
fn workbench_opens_once_per_press() {
    let mut h = Host::on_floor();
    h.sim.grid_mut().set(8, FLOOR_ROW - 1, TileKind::Workbench);
    h.idle();
    let mut opened = 0;
    for _ in 0..5 {
        let out = h.frame(secondary(), Some((8, FLOOR_ROW - 1)));
        opened += out.events.iter().filter(|e| **e == SimEvent::OpenWorkbench).count();
    }
    assert_eq!(opened, 1);
}

#[test]
fn map_open_blocks_interaction() {
    let mut h = Host::on_floor();
    h.flags.map_open = true;
    h.flags.god_mode = true;
    h.idle();
    let out = h.frame(primary(), Some((6, FLOOR_ROW)));
    assert!(out.events.is_empty());
    assert_eq!(h.sim.grid().get(6, FLOOR_ROW), TileKind::Concrete);
}

#[test]
fn paused_frames_freeze_the_world() {
    let mut h = Host::on_floor();
    h.sim.actor_mut().pos = Vec2::new(200.0, 300.0);
    h.flags.paused = true;
    for _ in 0..30 {
        let out = h.idle();
        assert!(!out.moving);
    }
    assert_eq!(h.sim.actor().pos, Vec2::new(200.0, 300.0));
    h.flags.paused = false;
    h.idle();
    assert!(h.sim.actor().pos.y > 300.0);
}

#[test]
fn triggers_fire_on_change_only() {
    let mut h = Host::on_floor();
    h.triggers.save = 7;
    let out = h.idle();
    assert!(out.events.is_empty(), "first frame is the baseline");

    h.triggers.save = 8;
    let out = h.idle();
    let pos = h.sim.actor().pos;
    assert!(out.events.iter().any(|e| matches!(
        e,
        SimEvent::SaveSnapshotReady(s) if (s.x - pos.x).abs() < 1.0
    )));
    assert!(h.idle().events.is_empty());

    h.sim.actor_mut().pos = Vec2::new(800.0, 100.0);
    h.triggers.respawn += 1;
    h.idle();
    assert!((h.sim.actor().pos.x - 200.0).abs() < 1.0);
}

#[test]
fn reset_regenerates_with_a_derived_seed() {
    let mut h = Host::on_floor();
    h.idle();
    let before = h.sim.world_seed();
    h.triggers.reset += 1;
    h.idle();
    assert_ne!(h.sim.world_seed(), before);
    assert_eq!(h.sim.grid().width(), 200);
    assert_eq!(h.sim.grid().height(), 120);
    assert_eq!(h.sim.grid().get(0, 119), TileKind::CyberWall);
    assert_eq!(h.sim.spawn(), Vec2::new(200.0 * 32.0 / 2.0, (40.0 - 15.0) * 32.0));
}

#[test]
fn exploring_reveals_fog() {
    let mut h = Host::on_floor();
    assert!(!h.sim.grid().is_visited(6, 19));
    h.idle();
    assert!(h.sim.grid().is_visited(6, 19));
    assert!(h.sim.minimap(false).is_none());
    let mini = h.sim.minimap(true).map(|m| m.width);
    assert_eq!(mini, Some(200));
    assert!(h.sim.fullmap(true, false, Vec2::new(640.0, 480.0)).is_none());
    assert!(h.sim.fullmap(true, true, Vec2::new(640.0, 480.0)).is_some());
}

#[test]
fn darkness_follows_the_day_cycle() {
    let mut h = Host::on_floor();
    h.flags.forced_day_progress = Some(0.5);
    let noon = h.idle();
    assert!(noon.day.darkness_alpha.abs() < 1e-4);
    h.flags.forced_day_progress = Some(0.0);
    let night = h.idle();
    assert!((night.day.darkness_alpha - 0.6).abs() < 1e-4);
    let mask = h.sim.darkness();
    assert!(mask.cols() > 0);
    // actor light is cut into the mask
    let c = h.sim.actor().center() - h.sim.camera().pos;
    assert!(mask.alpha_at(c.x, c.y) < 0.01);
}
