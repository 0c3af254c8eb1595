//! Frame-stepped sandbox simulation: physics, interaction, vehicle, particles, camera and maps.
#![forbid(unsafe_code)]

pub mod actor;
pub mod camera;
pub mod clock;
pub mod config;
pub mod input;
pub mod interaction;
pub mod map_view;
pub mod output;
pub mod particles;
pub mod physics;
pub mod sim;
pub mod vehicle;

pub use actor::{Actor, ActorForm};
pub use camera::Camera;
pub use config::{SimConfig, from_toml_str, load_config_from_path};
pub use input::{Controls, FrameInput, HostFlags, Triggers};
pub use interaction::MiningProgress;
pub use map_view::MapRaster;
pub use output::{FrameOutput, SaveSnapshot, SimEvent};
pub use particles::{Particle, Projectile};
pub use sim::Simulation;
pub use vehicle::{TransitionDirection, VehicleTransition};
