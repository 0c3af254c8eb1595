use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use neonscrap_lighting::DaySample;
use neonscrap_render_raylib::SceneRenderer;
use neonscrap_sim::Simulation;

use super::Host;

pub struct App {
    pub sim: Simulation,
    pub host: Host,
    pub scene: SceneRenderer,
    pub(crate) day: DaySample,
    pub(crate) started: Instant,
    pub(crate) config_path: PathBuf,
    pub(crate) config_event_rx: Receiver<()>,
}
