use neonscrap_geom::Vec2;
use neonscrap_sim::{Controls, FrameInput, HostFlags, SaveSnapshot, SimEvent, Triggers};
use neonscrap_tiles::{Inventory, Recipe, STANDARD_RECIPES, TileKind, WORKBENCH_RECIPES};

pub const INITIAL_HEALTH: u32 = 100;
pub const MAX_POSSIBLE_HEALTH: u32 = 500;
pub const HEALTH_UPGRADE_STEP: u32 = 50;
pub const INITIAL_HOTBAR_SLOTS: usize = 5;
pub const HOTBAR_SLOTS: usize = 9;
pub const FORCED_DAY: f32 = 0.5;
pub const FORCED_NIGHT: f32 = 0.0;

pub const MAP_UPGRADE_COST: &[(TileKind, u32)] =
    &[(TileKind::CircuitScrap, 10), (TileKind::NeonOrePink, 5)];
pub const HEALTH_UPGRADE_COST: &[(TileKind, u32)] =
    &[(TileKind::NeonOrePink, 5), (TileKind::CircuitScrap, 5)];
pub const HOTBAR_EXPANSION_COST: &[(TileKind, u32)] =
    &[(TileKind::CircuitScrap, 20), (TileKind::NeonOreBlue, 10)];

/// Everything the simulation treats as an outside collaborator: inventory,
/// health, hotbar, flags, trigger counters and the snapshot slot.
#[derive(Debug)]
pub struct Host {
    pub inventory: Inventory,
    pub health: u32,
    pub max_health: u32,
    pub hotbar: [Option<TileKind>; HOTBAR_SLOTS],
    /// Leading hotbar slots the player can use.
    pub unlocked_slots: usize,
    pub active_slot: usize,
    pub flags: HostFlags,
    pub triggers: Triggers,
    pub snapshot: Option<SaveSnapshot>,
    pub load_position: Option<Vec2>,
    pub workbench_open: bool,
}

impl Host {
    pub fn new(god_mode: bool) -> Self {
        let mut host = Self {
            inventory: Inventory::starter(),
            health: INITIAL_HEALTH,
            max_health: INITIAL_HEALTH,
            hotbar: [None; HOTBAR_SLOTS],
            unlocked_slots: INITIAL_HOTBAR_SLOTS,
            active_slot: 0,
            flags: HostFlags {
                god_mode,
                ..HostFlags::default()
            },
            triggers: Triggers::default(),
            snapshot: None,
            load_position: None,
            workbench_open: false,
        };
        for (kind, _) in host.inventory.entries() {
            host.offer_to_hotbar(kind);
        }
        host
    }

    pub fn held_item(&self) -> Option<TileKind> {
        self.hotbar[self.active_slot]
    }

    pub fn select_slot(&mut self, slot: usize) {
        if slot < self.unlocked_slots {
            self.active_slot = slot;
        }
    }

    pub fn cycle_slot(&mut self, delta: i32) {
        let n = self.unlocked_slots as i32;
        self.active_slot = (self.active_slot as i32 + delta).rem_euclid(n) as usize;
    }

    pub fn frame_input(
        &self,
        timestamp_ms: f64,
        viewport: Vec2,
        cursor_screen: Vec2,
        controls: Controls,
    ) -> FrameInput<'_> {
        FrameInput {
            timestamp_ms,
            viewport,
            cursor_screen,
            controls,
            held_item: self.held_item(),
            inventory: &self.inventory,
            flags: self.flags,
            triggers: self.triggers,
            load_position: self.load_position,
        }
    }

    pub fn apply_events(&mut self, events: &[SimEvent]) {
        for ev in events {
            match ev {
                SimEvent::InventoryDelta { kind, amount } => {
                    self.inventory.apply(*kind, *amount);
                    if *amount > 0 {
                        self.offer_to_hotbar(*kind);
                    }
                }
                SimEvent::Damage { amount } => self.apply_damage(*amount),
                SimEvent::OpenWorkbench => {
                    log::debug!("workbench opened");
                    self.workbench_open = true;
                }
                SimEvent::VehicleMode { active } => {
                    self.flags.vehicle_active = *active;
                    if *active {
                        self.workbench_open = false;
                    }
                }
                SimEvent::SaveSnapshotReady(s) => {
                    log::info!("snapshot saved at ({:.0}, {:.0})", s.x, s.y);
                    self.snapshot = Some(*s);
                }
            }
        }
    }

    pub fn apply_damage(&mut self, amount: u32) {
        if self.flags.god_mode || amount == 0 {
            return;
        }
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            log::info!("integrity lost, respawning");
            self.health = self.max_health;
            self.flags.vehicle_active = false;
            self.triggers.respawn += 1;
        }
    }

    /// Place newly acquired tools and placeables in the first free
    /// unlocked slot.
    fn offer_to_hotbar(&mut self, kind: TileKind) {
        if !(kind.is_placeable() || kind.is_tool()) || self.hotbar.contains(&Some(kind)) {
            return;
        }
        let unlocked = &mut self.hotbar[..self.unlocked_slots];
        if let Some(slot) = unlocked.iter_mut().find(|s| s.is_none()) {
            *slot = Some(kind);
        }
    }

    pub fn toggle_god_mode(&mut self) {
        self.flags.god_mode = !self.flags.god_mode;
        if self.flags.god_mode {
            self.health = self.max_health;
        }
        log::info!("god mode {}", if self.flags.god_mode { "on" } else { "off" });
    }

    pub fn force_time(&mut self, progress: Option<f32>) {
        self.flags.forced_day_progress = progress;
    }

    pub fn toggle_pause(&mut self) {
        self.flags.paused = !self.flags.paused;
    }

    pub fn can_afford(&self, cost: &[(TileKind, u32)]) -> bool {
        self.flags.god_mode || cost.iter().all(|(k, n)| self.inventory.has(*k, *n))
    }

    /// Deducts `cost` unless in god mode. False when not affordable.
    fn pay(&mut self, cost: &[(TileKind, u32)]) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        if self.flags.god_mode {
            return true;
        }
        for (k, n) in cost {
            self.inventory.apply(*k, -(*n as i32));
        }
        true
    }

    /// Opens the full map when owned, otherwise tries to buy it.
    pub fn map_key(&mut self) {
        if self.flags.map_upgrade {
            self.flags.map_open = !self.flags.map_open;
            return;
        }
        if !self.pay(MAP_UPGRADE_COST) {
            log::debug!("map upgrade not affordable");
            return;
        }
        self.flags.map_upgrade = true;
        log::info!("map upgrade installed");
    }

    /// Raises max and current health by one step, up to the cap.
    pub fn buy_health_upgrade(&mut self) -> bool {
        if self.max_health >= MAX_POSSIBLE_HEALTH {
            log::debug!("health already at maximum");
            return false;
        }
        if !self.pay(HEALTH_UPGRADE_COST) {
            log::debug!("health upgrade not affordable");
            return false;
        }
        self.max_health = (self.max_health + HEALTH_UPGRADE_STEP).min(MAX_POSSIBLE_HEALTH);
        self.health = (self.health + HEALTH_UPGRADE_STEP).min(self.max_health);
        log::info!("integrity raised to {}", self.max_health);
        true
    }

    /// Unlocks one more hotbar slot.
    pub fn expand_hotbar(&mut self) -> bool {
        if self.unlocked_slots >= HOTBAR_SLOTS {
            log::debug!("hotbar already fully unlocked");
            return false;
        }
        if !self.pay(HOTBAR_EXPANSION_COST) {
            log::debug!("hotbar expansion not affordable");
            return false;
        }
        self.unlocked_slots += 1;
        log::info!("hotbar expanded to {} slots", self.unlocked_slots);
        true
    }

    pub fn recipes(&self) -> &'static [Recipe] {
        if self.workbench_open {
            WORKBENCH_RECIPES
        } else {
            STANDARD_RECIPES
        }
    }

    /// Craft the `index`th recipe of the open list. Returns the result kind.
    pub fn craft(&mut self, index: usize) -> Option<TileKind> {
        let recipe = self.recipes().get(index)?;
        let deltas = recipe.craft(&self.inventory, self.flags.god_mode)?;
        for (kind, amount) in &deltas {
            self.inventory.apply(*kind, *amount);
        }
        self.offer_to_hotbar(recipe.result);
        log::info!("crafted {} x{}", recipe.result.name(), recipe.yield_count);
        Some(recipe.result)
    }

    pub fn request_respawn(&mut self) {
        self.triggers.respawn += 1;
    }

    pub fn request_save(&mut self) {
        self.triggers.save += 1;
    }

    pub fn new_world(&mut self) {
        self.load_position = None;
        self.triggers.reset += 1;
    }

    /// Regenerate and drop the actor at the saved position. False when no
    /// snapshot exists.
    pub fn load_snapshot(&mut self) -> bool {
        let Some(s) = self.snapshot else {
            return false;
        };
        self.load_position = Some(Vec2::new(s.x, s.y));
        self.triggers.reset += 1;
        true
    }
}
