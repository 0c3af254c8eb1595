use raylib::prelude::*;

use neonscrap_render_raylib::SceneOptions;
use neonscrap_render_raylib::conv::rgba_to_rl;
use neonscrap_tiles::TileKind;

use super::App;
use super::host::{
    HEALTH_UPGRADE_COST, HOTBAR_EXPANSION_COST, HOTBAR_SLOTS, MAP_UPGRADE_COST,
    MAX_POSSIBLE_HEALTH,
};

const SLOT: i32 = 44;
const SLOT_GAP: i32 = 6;
const PANEL: Color = Color::new(2, 6, 23, 200);
const ACCENT: Color = Color::new(34, 211, 238, 255);
const RECIPE_ROW: i32 = 28;

fn cost_label(cost: &[(TileKind, u32)]) -> String {
    cost.iter()
        .map(|(k, n)| format!("{} {}", n, k.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

impl App {
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let viewport = Self::viewport(rl);
        let flags = self.host.flags;
        let opts = SceneOptions {
            map_upgrade: flags.map_upgrade,
            map_open: flags.map_open,
            paused: flags.paused,
            god_mode: flags.god_mode,
        };
        self.scene.upload(rl, thread, &self.sim, &opts, viewport);
        let show_recipes = self.host.workbench_open
            || rl.is_key_down(KeyboardKey::KEY_LEFT_CONTROL)
            || rl.is_key_down(KeyboardKey::KEY_RIGHT_CONTROL);

        let mut d = rl.begin_drawing(thread);
        self.scene.draw(&mut d, &self.sim, &self.day, viewport, &opts);
        self.draw_status(&mut d);
        self.draw_hotbar(&mut d, viewport.x as i32, viewport.y as i32);
        if show_recipes && !flags.map_open {
            self.draw_recipes(&mut d, viewport.y as i32);
        }
        d.draw_fps(12, viewport.y as i32 - 24);
    }

    fn draw_status(&self, d: &mut RaylibDrawHandle) {
        let host = &self.host;
        let (label, bar) = if host.flags.god_mode {
            ("GOD", Color::GOLD)
        } else if self.sim.in_vehicle() {
            ("MECH ONLINE", Color::new(37, 99, 235, 255))
        } else {
            ("INTEGRITY", Color::new(220, 38, 38, 255))
        };
        let (x, y, w) = (12, 36, 200);
        d.draw_rectangle(x - 4, y - 4, w + 8, 44, PANEL);
        d.draw_text(label, x, y, 12, bar);
        let fill = if host.flags.god_mode {
            w
        } else {
            (w as f32 * host.health as f32 / host.max_health.max(1) as f32) as i32
        };
        d.draw_rectangle(x, y + 16, w, 8, Color::new(30, 41, 59, 255));
        d.draw_rectangle(x, y + 16, fill, 8, bar);
        let ammo = host.inventory.count(TileKind::AmmoPack);
        d.draw_text(
            &format!("{}/{}  AMMO {}", host.health, host.max_health, ammo),
            x,
            y + 28,
            10,
            Color::LIGHTGRAY,
        );
    }

    fn draw_hotbar(&self, d: &mut RaylibDrawHandle, vw: i32, vh: i32) {
        let total = HOTBAR_SLOTS as i32 * (SLOT + SLOT_GAP) - SLOT_GAP;
        let x0 = (vw - total) / 2;
        let y = vh - SLOT - 12;
        for (i, slot) in self.host.hotbar.iter().enumerate() {
            let x = x0 + i as i32 * (SLOT + SLOT_GAP);
            if i >= self.host.unlocked_slots {
                d.draw_rectangle(x, y, SLOT, SLOT, Color::new(2, 6, 23, 90));
                d.draw_rectangle_lines(x, y, SLOT, SLOT, Color::new(51, 65, 85, 120));
                continue;
            }
            d.draw_rectangle(x, y, SLOT, SLOT, PANEL);
            if let Some(kind) = slot {
                d.draw_rectangle(x + 8, y + 8, SLOT - 16, SLOT - 16, rgba_to_rl(kind.color()));
                let n = self.host.inventory.count(*kind);
                d.draw_text(&n.to_string(), x + 3, y + SLOT - 12, 10, Color::RAYWHITE);
            }
            let border = if i == self.host.active_slot {
                ACCENT
            } else {
                Color::new(71, 85, 105, 255)
            };
            d.draw_rectangle_lines(x, y, SLOT, SLOT, border);
            d.draw_text(&(i + 1).to_string(), x + SLOT - 9, y + 2, 10, Color::GRAY);
        }
        if let Some(kind) = self.host.held_item() {
            let name = kind.name();
            let w = measure_text(name, 12);
            d.draw_text(name, (vw - w) / 2, y - 30, 12, Color::RAYWHITE);
            let desc = kind.description();
            let w = measure_text(desc, 10);
            d.draw_text(desc, (vw - w) / 2, y - 15, 10, Color::LIGHTGRAY);
        }
    }

    fn draw_recipes(&self, d: &mut RaylibDrawHandle, vh: i32) {
        let recipes = self.host.recipes();
        let (x, y0) = (12, vh / 3);
        let upgrades = self.upgrade_lines();
        let rows = recipes.len() as i32 * RECIPE_ROW + upgrades.len() as i32 * 14;
        d.draw_rectangle(x - 4, y0 - 24, 340, 36 + rows, PANEL);
        let title = if self.host.workbench_open {
            "WORKBENCH  Ctrl+digit to build, Tab to close"
        } else {
            "CRAFTING  Ctrl+digit to craft"
        };
        d.draw_text(title, x, y0 - 18, 10, ACCENT);
        for (i, r) in recipes.iter().enumerate() {
            let ok = r.can_craft(&self.host.inventory, self.host.flags.god_mode);
            let color = if ok { Color::RAYWHITE } else { Color::GRAY };
            let line = format!("{}. {} x{}", i + 1, r.result.name(), r.yield_count);
            let ry = y0 + i as i32 * RECIPE_ROW;
            d.draw_text(&line, x, ry, 12, color);
            d.draw_text(r.result.description(), x + 14, ry + 13, 10, Color::GRAY);
        }
        let uy = y0 + recipes.len() as i32 * RECIPE_ROW + 6;
        for (i, (line, ok)) in upgrades.iter().enumerate() {
            let color = if *ok { ACCENT } else { Color::GRAY };
            d.draw_text(line, x, uy + i as i32 * 14, 10, color);
        }
    }

    /// Upgrade key hints with costs, paired with whether each is affordable.
    fn upgrade_lines(&self) -> Vec<(String, bool)> {
        let host = &self.host;
        let offers = [
            ("H  +integrity", HEALTH_UPGRADE_COST, host.max_health < MAX_POSSIBLE_HEALTH),
            ("U  +hotbar slot", HOTBAR_EXPANSION_COST, host.unlocked_slots < HOTBAR_SLOTS),
            ("M  map module", MAP_UPGRADE_COST, !host.flags.map_upgrade),
        ];
        offers
            .into_iter()
            .filter(|(_, _, open)| *open)
            .map(|(label, cost, _)| {
                (format!("{label} ({})", cost_label(cost)), host.can_afford(cost))
            })
            .collect()
    }
}
