use std::path::PathBuf;
use std::time::Instant;

use neonscrap_lighting::DayCycle;
use neonscrap_render_raylib::SceneRenderer;
use neonscrap_sim::{SimConfig, Simulation};

use super::{App, Host};

impl App {
    pub fn new(
        config: SimConfig,
        seed: u64,
        god_mode: bool,
        config_path: PathBuf,
        watch_config: bool,
    ) -> Self {
        let day = DayCycle::from_config(&config.lighting).sample(0.0, None);
        let started = Instant::now();
        let sim = Simulation::new(config, seed, None);
        log::info!(
            "world {}x{} ready (seed {}), spawn at ({:.0}, {:.0})",
            sim.grid().width(),
            sim.grid().height(),
            seed,
            sim.spawn().x,
            sim.spawn().y
        );

        // File watcher for the simulation config
        let (cfg_tx, cfg_rx) = std::sync::mpsc::channel::<()>();
        if watch_config {
            let tx = cfg_tx.clone();
            let path = config_path.clone();
            std::thread::spawn(move || {
                use notify::{EventKind, RecursiveMode, Watcher};
                if let Ok(mut watcher) =
                    notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                        if let Ok(event) = res {
                            match event.kind {
                                EventKind::Modify(_)
                                | EventKind::Create(_)
                                | EventKind::Remove(_)
                                | EventKind::Any => {
                                    let _ = tx.send(());
                                }
                                _ => {}
                            }
                        }
                    })
                {
                    if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
                        log::warn!("cannot watch {}: {}", path.display(), e);
                        return;
                    }
                    loop {
                        std::thread::sleep(std::time::Duration::from_secs(3600));
                    }
                }
            });
        }

        Self {
            sim,
            host: Host::new(god_mode),
            scene: SceneRenderer::new(),
            day,
            started,
            config_path,
            config_event_rx: cfg_rx,
        }
    }
}
