use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use neonscrap_geom::Vec2;
use neonscrap_lighting::LightingConfig;
use neonscrap_world::WorldGenConfig;

use crate::actor::ActorForm;

/// Everything tunable about a running simulation, one TOML section per
/// concern. Missing sections and fields take the defaults below.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub world: WorldGenConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
    #[serde(default)]
    pub vehicle: VehicleConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub lighting: LightingConfig,
}

pub fn from_toml_str(s: &str) -> Result<SimConfig, Box<dyn Error>> {
    let cfg: SimConfig = toml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn ensure_finite(section: &str, fields: &[(&str, f64)]) -> Result<(), String> {
    for (name, v) in fields {
        if !v.is_finite() {
            return Err(format!("{section}.{name} must be finite, got {v}"));
        }
    }
    Ok(())
}

impl SimConfig {
    /// Checks values the step would otherwise panic or stall on.
    pub fn validate(&self) -> Result<(), String> {
        self.world.validate().map_err(|e| format!("world.{e}"))?;
        self.lighting.validate()?;

        let p = &self.physics;
        ensure_finite(
            "physics",
            &[
                ("gravity", p.gravity as f64),
                ("friction", p.friction as f64),
                ("move_speed", p.move_speed as f64),
                ("jump_force", p.jump_force as f64),
                ("vehicle_gravity", p.vehicle_gravity as f64),
                ("vehicle_move_speed", p.vehicle_move_speed as f64),
                ("vehicle_jump_force", p.vehicle_jump_force as f64),
                ("god_speed_mult", p.god_speed_mult as f64),
                ("god_boost_mult", p.god_boost_mult as f64),
                ("god_max_fall_speed", p.god_max_fall_speed as f64),
                ("fall_damage_threshold", p.fall_damage_threshold as f64),
                ("fall_damage_multiplier", p.fall_damage_multiplier as f64),
                ("vehicle_landing_threshold", p.vehicle_landing_threshold as f64),
                ("vehicle_landing_shake", p.vehicle_landing_shake as f64),
                ("fallout_margin", p.fallout_margin as f64),
                ("frame_ms", p.frame_ms),
                ("max_dt", p.max_dt as f64),
            ],
        )?;
        if p.frame_ms <= 0.0 {
            return Err(format!("physics.frame_ms must be positive, got {}", p.frame_ms));
        }
        if p.max_dt < 0.0 {
            return Err(format!("physics.max_dt must not be negative, got {}", p.max_dt));
        }
        for (name, [w, h]) in [("biped_size", p.biped_size), ("vehicle_size", p.vehicle_size)] {
            if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
                return Err(format!("physics.{name} must be positive, got [{w}, {h}]"));
            }
        }

        let i = &self.interaction;
        ensure_finite(
            "interaction",
            &[
                ("reach", i.reach as f64),
                ("tier1_mining_ms", i.tier1_mining_ms),
                ("tier2_mining_ms", i.tier2_mining_ms),
                ("fire_interval_ms", i.fire_interval_ms),
                ("projectile_speed", i.projectile_speed as f64),
                ("projectile_life", i.projectile_life as f64),
                ("recoil", i.recoil as f64),
                ("muzzle_offset", i.muzzle_offset as f64),
                ("muzzle_height", i.muzzle_height as f64),
            ],
        )?;
        if !(0.0..=1.0).contains(&i.drill_spark_chance) {
            return Err(format!(
                "interaction.drill_spark_chance must be within [0, 1], got {}",
                i.drill_spark_chance
            ));
        }

        let v = &self.vehicle;
        ensure_finite(
            "vehicle",
            &[
                ("transition_rate", v.transition_rate as f64),
                ("transition_shake", v.transition_shake as f64),
                ("burst_speed", v.burst_speed as f64),
            ],
        )?;
        if v.transition_rate <= 0.0 {
            return Err(format!(
                "vehicle.transition_rate must be positive, got {}",
                v.transition_rate
            ));
        }

        let c = &self.camera;
        ensure_finite(
            "camera",
            &[
                ("smoothing", c.smoothing as f64),
                ("shake_damping", c.shake_damping as f64),
            ],
        )?;
        Ok(())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<SimConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    from_toml_str(&s)
}

#[derive(Clone, Debug, Deserialize)]
pub struct PhysicsConfig {
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    #[serde(default = "default_jump_force")]
    pub jump_force: f32,
    #[serde(default = "default_vehicle_gravity")]
    pub vehicle_gravity: f32,
    #[serde(default = "default_vehicle_move_speed")]
    pub vehicle_move_speed: f32,
    #[serde(default = "default_vehicle_jump_force")]
    pub vehicle_jump_force: f32,
    #[serde(default = "default_god_speed_mult")]
    pub god_speed_mult: f32,
    #[serde(default = "default_god_boost_mult")]
    pub god_boost_mult: f32,
    #[serde(default = "default_god_max_fall")]
    pub god_max_fall_speed: f32,
    #[serde(default = "default_fall_threshold")]
    pub fall_damage_threshold: f32,
    #[serde(default = "default_fall_multiplier")]
    pub fall_damage_multiplier: f32,
    #[serde(default = "default_vehicle_landing_threshold")]
    pub vehicle_landing_threshold: f32,
    #[serde(default = "default_landing_shake")]
    pub vehicle_landing_shake: f32,
    /// Pixels below the world floor before the actor counts as fallen out.
    #[serde(default = "default_fallout_margin")]
    pub fallout_margin: f32,
    #[serde(default = "default_fallout_damage")]
    pub fallout_damage: u32,
    /// Reference frame length; dt = elapsed / frame_ms.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: f64,
    #[serde(default = "default_max_dt")]
    pub max_dt: f32,
    #[serde(default = "default_biped_size")]
    pub biped_size: [f32; 2],
    #[serde(default = "default_vehicle_size")]
    pub vehicle_size: [f32; 2],
}

fn default_gravity() -> f32 {
    0.5
}
fn default_friction() -> f32 {
    0.8
}
fn default_move_speed() -> f32 {
    0.6
}
fn default_jump_force() -> f32 {
    -8.5
}
fn default_vehicle_gravity() -> f32 {
    0.4
}
fn default_vehicle_move_speed() -> f32 {
    1.0
}
fn default_vehicle_jump_force() -> f32 {
    -14.0
}
fn default_god_speed_mult() -> f32 {
    50.0
}
fn default_god_boost_mult() -> f32 {
    250.0
}
fn default_god_max_fall() -> f32 {
    100.0
}
fn default_fall_threshold() -> f32 {
    12.0
}
fn default_fall_multiplier() -> f32 {
    5.0
}
fn default_vehicle_landing_threshold() -> f32 {
    5.0
}
fn default_landing_shake() -> f32 {
    5.0
}
fn default_fallout_margin() -> f32 {
    200.0
}
fn default_fallout_damage() -> u32 {
    9999
}
fn default_frame_ms() -> f64 {
    16.67
}
fn default_max_dt() -> f32 {
    2.0
}
fn default_biped_size() -> [f32; 2] {
    [24.0, 40.0]
}
fn default_vehicle_size() -> [f32; 2] {
    [70.0, 120.0]
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            friction: default_friction(),
            move_speed: default_move_speed(),
            jump_force: default_jump_force(),
            vehicle_gravity: default_vehicle_gravity(),
            vehicle_move_speed: default_vehicle_move_speed(),
            vehicle_jump_force: default_vehicle_jump_force(),
            god_speed_mult: default_god_speed_mult(),
            god_boost_mult: default_god_boost_mult(),
            god_max_fall_speed: default_god_max_fall(),
            fall_damage_threshold: default_fall_threshold(),
            fall_damage_multiplier: default_fall_multiplier(),
            vehicle_landing_threshold: default_vehicle_landing_threshold(),
            vehicle_landing_shake: default_landing_shake(),
            fallout_margin: default_fallout_margin(),
            fallout_damage: default_fallout_damage(),
            frame_ms: default_frame_ms(),
            max_dt: default_max_dt(),
            biped_size: default_biped_size(),
            vehicle_size: default_vehicle_size(),
        }
    }
}

impl PhysicsConfig {
    pub fn size_for(&self, form: ActorForm) -> Vec2 {
        let [w, h] = match form {
            ActorForm::Biped => self.biped_size,
            ActorForm::Vehicle => self.vehicle_size,
        };
        Vec2::new(w, h)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct InteractionConfig {
    /// Max distance from actor center to the cursor, in pixels.
    #[serde(default = "default_reach")]
    pub reach: f32,
    #[serde(default = "default_tier1_ms")]
    pub tier1_mining_ms: f64,
    #[serde(default = "default_tier2_ms")]
    pub tier2_mining_ms: f64,
    #[serde(default = "default_drill_spark_chance")]
    pub drill_spark_chance: f64,
    #[serde(default = "default_fire_interval")]
    pub fire_interval_ms: f64,
    #[serde(default = "default_projectile_speed")]
    pub projectile_speed: f32,
    /// Projectile lifetime in reference frames.
    #[serde(default = "default_projectile_life")]
    pub projectile_life: f32,
    #[serde(default = "default_recoil")]
    pub recoil: f32,
    #[serde(default = "default_muzzle_offset")]
    pub muzzle_offset: f32,
    /// Muzzle height as a fraction of the actor box height.
    #[serde(default = "default_muzzle_height")]
    pub muzzle_height: f32,
}

fn default_reach() -> f32 {
    200.0
}
fn default_tier1_ms() -> f64 {
    2000.0
}
fn default_tier2_ms() -> f64 {
    1000.0
}
fn default_drill_spark_chance() -> f64 {
    0.2
}
fn default_fire_interval() -> f64 {
    150.0
}
fn default_projectile_speed() -> f32 {
    20.0
}
fn default_projectile_life() -> f32 {
    80.0
}
fn default_recoil() -> f32 {
    2.0
}
fn default_muzzle_offset() -> f32 {
    10.0
}
fn default_muzzle_height() -> f32 {
    0.45
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            reach: default_reach(),
            tier1_mining_ms: default_tier1_ms(),
            tier2_mining_ms: default_tier2_ms(),
            drill_spark_chance: default_drill_spark_chance(),
            fire_interval_ms: default_fire_interval(),
            projectile_speed: default_projectile_speed(),
            projectile_life: default_projectile_life(),
            recoil: default_recoil(),
            muzzle_offset: default_muzzle_offset(),
            muzzle_height: default_muzzle_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct VehicleConfig {
    /// Transition progress gained per reference frame.
    #[serde(default = "default_transition_rate")]
    pub transition_rate: f32,
    /// Camera jitter amplitude while transforming.
    #[serde(default = "default_transition_shake")]
    pub transition_shake: f32,
    #[serde(default = "default_burst_count")]
    pub burst_count: u32,
    #[serde(default = "default_burst_speed")]
    pub burst_speed: f32,
}

fn default_transition_rate() -> f32 {
    0.05
}
fn default_transition_shake() -> f32 {
    5.0
}
fn default_burst_count() -> u32 {
    50
}
fn default_burst_speed() -> f32 {
    10.0
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            transition_rate: default_transition_rate(),
            transition_shake: default_transition_shake(),
            burst_count: default_burst_count(),
            burst_speed: default_burst_speed(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,
    #[serde(default = "default_shake_damping")]
    pub shake_damping: f32,
}

fn default_smoothing() -> f32 {
    0.1
}
fn default_shake_damping() -> f32 {
    0.9
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smoothing: default_smoothing(),
            shake_damping: default_shake_damping(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MapConfig {
    /// Fog reveal radius in cells.
    #[serde(default = "default_exploration_radius")]
    pub exploration_radius: i32,
    #[serde(default = "default_minimap_size")]
    pub minimap_size: u32,
    /// Pixels per cell on the minimap.
    #[serde(default = "default_minimap_zoom")]
    pub minimap_zoom: u32,
    #[serde(default = "default_fullmap_zoom")]
    pub fullmap_zoom: u32,
    /// Full map is the viewport shrunk by this many pixels.
    #[serde(default = "default_fullmap_inset")]
    pub fullmap_inset: u32,
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: u32,
}

fn default_exploration_radius() -> i32 {
    25
}
fn default_minimap_size() -> u32 {
    200
}
fn default_minimap_zoom() -> u32 {
    4
}
fn default_fullmap_zoom() -> u32 {
    2
}
fn default_fullmap_inset() -> u32 {
    100
}
fn default_grid_spacing() -> u32 {
    100
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            exploration_radius: default_exploration_radius(),
            minimap_size: default_minimap_size(),
            minimap_zoom: default_minimap_zoom(),
            fullmap_zoom: default_fullmap_zoom(),
            fullmap_inset: default_fullmap_inset(),
            grid_spacing: default_grid_spacing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_file() {
        let cfg = from_toml_str("").unwrap();
        assert_eq!(cfg.physics.gravity, 0.5);
        assert_eq!(cfg.physics.vehicle_jump_force, -14.0);
        assert_eq!(cfg.interaction.reach, 200.0);
        assert_eq!(cfg.vehicle.transition_rate, 0.05);
        assert_eq!(cfg.map.exploration_radius, 25);
        assert_eq!(cfg.lighting.cycle_ms, 900_000.0);
        assert_eq!(cfg.world.width, 10_000);
    }

    #[test]
    fn sections_override_independently() {
        let cfg = from_toml_str(
            r#"
            [physics]
            gravity = 0.25
            [world]
            width = 128
            height = 256
            [lighting]
            actor_radius = 90.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.physics.gravity, 0.25);
        assert_eq!(cfg.physics.friction, 0.8);
        assert_eq!(cfg.world.width, 128);
        assert_eq!(cfg.lighting.actor_radius, 90.0);
        assert_eq!(cfg.lighting.vehicle_radius, 300.0);
    }

    #[test]
    fn form_sizes() {
        let p = PhysicsConfig::default();
        assert_eq!(p.size_for(ActorForm::Biped), Vec2::new(24.0, 40.0));
        assert_eq!(p.size_for(ActorForm::Vehicle), Vec2::new(70.0, 120.0));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(from_toml_str("[physics]\ngravity = \"heavy\"").is_err());
    }

    #[test]
    fn malformed_values_are_an_error() {
        let bad = [
            "[physics]\nmax_dt = -1.0",
            "[physics]\nframe_ms = 0.0",
            "[physics]\ngravity = nan",
            "[physics]\nbiped_size = [0.0, 40.0]",
            "[interaction]\ndrill_spark_chance = 1.5",
            "[interaction]\ndrill_spark_chance = nan",
            "[vehicle]\ntransition_shake = inf",
            "[vehicle]\ntransition_rate = 0.0",
            "[world.sewer]\nrusty_pipe_chance = nan",
            "[world.strata]\nscrap_chance = -0.5",
            "[lighting]\nmax_darkness = 2.0",
        ];
        for text in bad {
            assert!(from_toml_str(text).is_err(), "accepted: {text}");
        }
        assert!(SimConfig::default().validate().is_ok());
        assert!(from_toml_str("[physics]\nmax_dt = 0.0").is_ok());
    }
}
