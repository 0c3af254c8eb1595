mod app;

use std::path::PathBuf;

use clap::Parser;

use neonscrap_sim::{SimConfig, load_config_from_path};

#[derive(Parser, Debug)]
#[command(name = "neonscrap")]
#[command(about = "Side-view mining and building sandbox")]
struct Args {
    /// World seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Simulation config (TOML)
    #[arg(long, default_value = "config/neonscrap.toml")]
    config: PathBuf,
    #[arg(long, default_value_t = 1280)]
    width: i32,
    #[arg(long, default_value_t = 720)]
    height: i32,
    /// Start with god mode on
    #[arg(long)]
    god: bool,
    /// Reload the config file when it changes
    #[arg(long)]
    watch_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = if args.config.exists() {
        match load_config_from_path(&args.config) {
            Ok(cfg) => {
                log::info!("config loaded from {}", args.config.display());
                cfg
            }
            Err(e) => {
                log::warn!("config {} invalid, using defaults: {}", args.config.display(), e);
                SimConfig::default()
            }
        }
    } else {
        log::info!("no config at {}, using defaults", args.config.display());
        SimConfig::default()
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .resizable()
        .title("Neonscrap")
        .build();
    rl.set_target_fps(60);
    rl.set_exit_key(None);

    let mut app = app::App::new(config, seed, args.god, args.config, args.watch_config);
    while !rl.window_should_close() {
        app.step(&mut rl);
        app.render(&mut rl, &thread);
    }
}
