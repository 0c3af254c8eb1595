use neonscrap_geom::Vec2;
use neonscrap_tiles::{Inventory, TileKind};

use crate::physics::MoveIntent;

/// Logical controls, already merged across keyboard, mouse and gamepad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub boost: bool,
    /// Mine, place or fire. Acted on while held.
    pub primary: bool,
    /// Interact. Acted on once per press.
    pub secondary: bool,
    /// Leave the vehicle. Acted on once per press.
    pub exit_vehicle: bool,
}

impl Controls {
    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            jump: self.jump,
            boost: self.boost,
        }
    }
}

/// State owned by the host and read fresh every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostFlags {
    pub paused: bool,
    pub map_open: bool,
    pub map_upgrade: bool,
    pub god_mode: bool,
    pub vehicle_active: bool,
    pub forced_day_progress: Option<f32>,
}

/// Monotonic counters; a change since the previous frame fires the action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Triggers {
    pub respawn: u64,
    pub reset: u64,
    pub save: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub timestamp_ms: f64,
    pub viewport: Vec2,
    pub cursor_screen: Vec2,
    pub controls: Controls,
    pub held_item: Option<TileKind>,
    pub inventory: &'a Inventory,
    pub flags: HostFlags,
    pub triggers: Triggers,
    /// Where to put the actor after a world reset, if a save was loaded.
    pub load_position: Option<Vec2>,
}

impl<'a> FrameInput<'a> {
    /// A frame with nothing pressed and default flags.
    pub fn idle(timestamp_ms: f64, viewport: Vec2, inventory: &'a Inventory) -> Self {
        Self {
            timestamp_ms,
            viewport,
            cursor_screen: Vec2::ZERO,
            controls: Controls::default(),
            held_item: None,
            inventory,
            flags: HostFlags::default(),
            triggers: Triggers::default(),
            load_position: None,
        }
    }
}
