//! Day/night cycle and the darkness layer with soft light holes.
#![forbid(unsafe_code)]

mod compositor;
mod config;
mod day_cycle;
mod mask;

pub use compositor::{LightingCompositor, fixture_holes};
pub use config::LightingConfig;
pub use day_cycle::{DayCycle, DaySample, daylight_intensity};
pub use mask::{DarknessMask, LightHole, hole_falloff};
