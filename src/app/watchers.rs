use neonscrap_sim::load_config_from_path;

use super::App;

impl App {
    /// Apply a changed config file. `[world]` takes effect on the next reset.
    pub fn process_config_file_events(&mut self) {
        let mut changed = false;
        for _ in self.config_event_rx.try_iter() {
            changed = true;
        }
        if !changed {
            return;
        }
        if !self.config_path.exists() {
            log::warn!("config missing: {}", self.config_path.display());
            return;
        }
        match load_config_from_path(&self.config_path) {
            Ok(cfg) => {
                self.sim.set_config(cfg);
                log::info!("config reloaded from {}", self.config_path.display());
            }
            Err(e) => {
                log::warn!(
                    "config reload failed ({}): {}",
                    self.config_path.display(),
                    e
                );
            }
        }
    }
}
