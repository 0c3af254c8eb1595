use std::f32::consts::{FRAC_PI_2, TAU};

use neonscrap_tiles::Rgba;

use crate::config::LightingConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DaySample {
    /// Position in the cycle, [0, 1). 0 is midnight, 0.5 is noon.
    pub progress: f32,
    /// 0 at midnight, 1 at noon.
    pub intensity: f32,
    pub sky: Rgba,
    pub darkness_alpha: f32,
}

#[inline]
pub fn daylight_intensity(progress: f32) -> f32 {
    ((progress * TAU - FRAC_PI_2).sin() + 1.0) / 2.0
}

/// Wall-clock driven cycle; nothing advances between samples.
#[derive(Clone, Debug)]
pub struct DayCycle {
    cycle_ms: f64,
    night_sky: Rgba,
    day_sky: Rgba,
    max_darkness: f32,
}

impl DayCycle {
    pub fn from_config(cfg: &LightingConfig) -> Self {
        Self {
            cycle_ms: cfg.cycle_ms.max(1.0),
            night_sky: cfg.night_sky.into(),
            day_sky: cfg.day_sky.into(),
            max_darkness: cfg.max_darkness,
        }
    }

    /// Cycle position for a timestamp, or the forced override wrapped into [0, 1).
    pub fn progress_at(&self, timestamp_ms: f64, forced: Option<f32>) -> f32 {
        let p = match forced {
            Some(p) if p.is_finite() => p.rem_euclid(1.0),
            _ => (timestamp_ms.rem_euclid(self.cycle_ms) / self.cycle_ms) as f32,
        };
        // f32 rounding can land exactly on 1.0
        if p >= 1.0 { 0.0 } else { p }
    }

    pub fn sample(&self, timestamp_ms: f64, forced: Option<f32>) -> DaySample {
        let progress = self.progress_at(timestamp_ms, forced);
        let intensity = daylight_intensity(progress).clamp(0.0, 1.0);
        DaySample {
            progress,
            intensity,
            sky: self.night_sky.lerp(self.day_sky, intensity),
            darkness_alpha: self.max_darkness * (1.0 - intensity),
        }
    }
}
