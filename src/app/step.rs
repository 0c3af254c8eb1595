use raylib::prelude::*;

use neonscrap_geom::Vec2;
use neonscrap_render_raylib::conv::vec2_from_rl;

use super::App;
use super::host::{FORCED_DAY, FORCED_NIGHT};
use super::input::{HostAction, poll_controls, poll_host_actions};

impl App {
    pub fn step(&mut self, rl: &mut RaylibHandle) {
        self.process_config_file_events();
        for action in poll_host_actions(rl) {
            self.apply_host_action(action);
        }

        let controls = poll_controls(rl);
        let viewport = Self::viewport(rl);
        let cursor = vec2_from_rl(rl.get_mouse_position());
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;

        let out = {
            let input = self.host.frame_input(now_ms, viewport, cursor, controls);
            self.sim.step(&input)
        };
        self.day = out.day;
        self.host.apply_events(&out.events);
    }

    pub(crate) fn viewport(rl: &RaylibHandle) -> Vec2 {
        Vec2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32)
    }

    fn apply_host_action(&mut self, action: HostAction) {
        let host = &mut self.host;
        match action {
            HostAction::SelectSlot(i) => host.select_slot(i),
            HostAction::CycleSlot(d) => host.cycle_slot(d),
            HostAction::Craft(i) => {
                if host.craft(i).is_none() {
                    log::debug!("recipe {} unavailable", i + 1);
                }
            }
            HostAction::TogglePause => host.toggle_pause(),
            HostAction::MapKey => host.map_key(),
            HostAction::UpgradeHealth => {
                host.buy_health_upgrade();
            }
            HostAction::ExpandHotbar => {
                host.expand_hotbar();
            }
            HostAction::CloseWorkbench => host.workbench_open = false,
            HostAction::Save => host.request_save(),
            HostAction::Load => {
                if !host.load_snapshot() {
                    log::info!("no snapshot to load");
                }
            }
            HostAction::NewWorld => host.new_world(),
            HostAction::Respawn => host.request_respawn(),
            HostAction::ToggleGod => host.toggle_god_mode(),
            HostAction::ForceDay => host.force_time(Some(FORCED_DAY)),
            HostAction::ForceNight => host.force_time(Some(FORCED_NIGHT)),
            HostAction::ClearForcedTime => host.force_time(None),
        }
    }
}
