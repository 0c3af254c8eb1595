use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::{WORLD_HEIGHT, WORLD_WIDTH};

#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub city: City,
    #[serde(default)]
    pub sewer: Sewer,
    #[serde(default)]
    pub strata: Strata,
}

fn default_width() -> usize {
    WORLD_WIDTH
}
fn default_height() -> usize {
    WORLD_HEIGHT
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            terrain: Terrain::default(),
            city: City::default(),
            sewer: Sewer::default(),
            strata: Strata::default(),
        }
    }
}

impl WorldGenConfig {
    /// Same generation rules on a grid of a different size.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Surface baseline row before the terrain wave is applied.
    #[inline]
    pub fn surface_base(&self) -> i32 {
        (self.height / self.terrain.surface_divisor.max(1)) as i32
    }

    /// Rejects chances outside [0, 1] and non-finite wave parameters.
    pub fn validate(&self) -> Result<(), String> {
        let chances = [
            ("city.chance", self.city.chance),
            ("sewer.sludge_fraction", self.sewer.sludge_fraction),
            ("sewer.rusty_pipe_chance", self.sewer.rusty_pipe_chance),
            ("strata.crust_metal_chance", self.strata.crust_metal_chance),
            ("strata.ore_chance", self.strata.ore_chance),
            ("strata.scrap_chance", self.strata.scrap_chance),
        ];
        for (name, p) in chances {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{name} must be within [0, 1], got {p}"));
            }
        }
        let t = &self.terrain;
        let waves = [t.sin_frequency, t.sin_amplitude, t.cos_frequency, t.cos_amplitude];
        if waves.iter().any(|v| !v.is_finite()) {
            return Err("terrain wave parameters must be finite".into());
        }
        for (i, pipe) in self.sewer.pipes.iter().enumerate() {
            let fields = [pipe.base, pipe.amplitude, pipe.frequency, pipe.radius];
            if fields.iter().any(|v| !v.is_finite()) {
                return Err(format!("sewer.pipes[{i}] has a non-finite field"));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Terrain {
    /// Baseline is `height / surface_divisor`.
    #[serde(default = "default_surface_divisor")]
    pub surface_divisor: usize,
    #[serde(default = "default_sin_freq")]
    pub sin_frequency: f64,
    #[serde(default = "default_sin_amp")]
    pub sin_amplitude: f64,
    #[serde(default = "default_cos_freq")]
    pub cos_frequency: f64,
    #[serde(default = "default_cos_amp")]
    pub cos_amplitude: f64,
    /// Spawn sits this many rows above the baseline.
    #[serde(default = "default_spawn_clearance")]
    pub spawn_clearance: i32,
}
fn default_surface_divisor() -> usize {
    3
}
fn default_sin_freq() -> f64 {
    0.1
}
fn default_sin_amp() -> f64 {
    3.0
}
fn default_cos_freq() -> f64 {
    0.05
}
fn default_cos_amp() -> f64 {
    5.0
}
fn default_spawn_clearance() -> i32 {
    15
}
impl Default for Terrain {
    fn default() -> Self {
        Self {
            surface_divisor: default_surface_divisor(),
            sin_frequency: default_sin_freq(),
            sin_amplitude: default_sin_amp(),
            cos_frequency: default_cos_freq(),
            cos_amplitude: default_cos_amp(),
            spawn_clearance: default_spawn_clearance(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct City {
    /// Candidate city sites every `spacing` columns.
    #[serde(default = "default_city_spacing")]
    pub spacing: usize,
    #[serde(default = "default_city_chance")]
    pub chance: f64,
    #[serde(default = "default_min_buildings")]
    pub min_buildings: u32,
    #[serde(default = "default_max_buildings")]
    pub max_buildings: u32,
    #[serde(default = "default_building_width")]
    pub building_width: i32,
    #[serde(default = "default_building_gap")]
    pub gap: i32,
    #[serde(default = "default_jitter")]
    pub jitter: i32,
    #[serde(default = "default_min_height")]
    pub min_height: i32,
    #[serde(default = "default_height_range")]
    pub height_range: i32,
    #[serde(default = "default_floor_spacing")]
    pub floor_spacing: i32,
}
fn default_city_spacing() -> usize {
    800
}
fn default_city_chance() -> f64 {
    0.7
}
fn default_min_buildings() -> u32 {
    3
}
fn default_max_buildings() -> u32 {
    5
}
fn default_building_width() -> i32 {
    30
}
fn default_building_gap() -> i32 {
    10
}
fn default_jitter() -> i32 {
    50
}
fn default_min_height() -> i32 {
    80
}
fn default_height_range() -> i32 {
    100
}
fn default_floor_spacing() -> i32 {
    6
}
impl Default for City {
    fn default() -> Self {
        Self {
            spacing: default_city_spacing(),
            chance: default_city_chance(),
            min_buildings: default_min_buildings(),
            max_buildings: default_max_buildings(),
            building_width: default_building_width(),
            gap: default_building_gap(),
            jitter: default_jitter(),
            min_height: default_min_height(),
            height_range: default_height_range(),
            floor_spacing: default_floor_spacing(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Wave {
    Sin,
    Cos,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Pipe {
    pub base: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub wave: Wave,
    pub radius: f64,
}

impl Pipe {
    #[inline]
    pub fn center(&self, x: i32) -> f64 {
        let phase = x as f64 * self.frequency;
        let w = match self.wave {
            Wave::Sin => phase.sin(),
            Wave::Cos => phase.cos(),
        };
        self.base + w * self.amplitude
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Sewer {
    #[serde(default = "default_sewer_top")]
    pub top: i32,
    #[serde(default = "default_sewer_bottom")]
    pub bottom: i32,
    #[serde(default = "default_pipes")]
    pub pipes: Vec<Pipe>,
    /// Part of a pipe below `center + radius * sludge_fraction` holds sludge.
    #[serde(default = "default_sludge_fraction")]
    pub sludge_fraction: f64,
    #[serde(default = "default_rusty_pipe_chance")]
    pub rusty_pipe_chance: f64,
}
fn default_sewer_top() -> i32 {
    1700
}
fn default_sewer_bottom() -> i32 {
    1900
}
fn default_pipes() -> Vec<Pipe> {
    vec![
        Pipe {
            base: 1750.0,
            amplitude: 15.0,
            frequency: 0.03,
            wave: Wave::Sin,
            radius: 10.0,
        },
        Pipe {
            base: 1800.0,
            amplitude: 20.0,
            frequency: 0.025,
            wave: Wave::Cos,
            radius: 12.0,
        },
        Pipe {
            base: 1850.0,
            amplitude: 12.0,
            frequency: 0.04,
            wave: Wave::Sin,
            radius: 9.0,
        },
    ]
}
fn default_sludge_fraction() -> f64 {
    0.4
}
fn default_rusty_pipe_chance() -> f64 {
    0.02
}
impl Default for Sewer {
    fn default() -> Self {
        Self {
            top: default_sewer_top(),
            bottom: default_sewer_bottom(),
            pipes: default_pipes(),
            sludge_fraction: default_sludge_fraction(),
            rusty_pipe_chance: default_rusty_pipe_chance(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Strata {
    /// Rows below the surface line that form the concrete crust.
    #[serde(default = "default_crust_depth")]
    pub crust_depth: i32,
    #[serde(default = "default_crust_metal_chance")]
    pub crust_metal_chance: f64,
    #[serde(default = "default_ore_chance")]
    pub ore_chance: f64,
    #[serde(default = "default_scrap_chance")]
    pub scrap_chance: f64,
}
fn default_crust_depth() -> i32 {
    10
}
fn default_crust_metal_chance() -> f64 {
    0.1
}
fn default_ore_chance() -> f64 {
    0.04
}
fn default_scrap_chance() -> f64 {
    0.03
}
impl Default for Strata {
    fn default() -> Self {
        Self {
            crust_depth: default_crust_depth(),
            crust_metal_chance: default_crust_metal_chance(),
            ore_chance: default_ore_chance(),
            scrap_chance: default_scrap_chance(),
        }
    }
}

pub fn from_toml_str(s: &str) -> Result<WorldGenConfig, Box<dyn Error>> {
    let cfg: WorldGenConfig = toml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_config_from_path(path: &Path) -> Result<WorldGenConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    from_toml_str(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = from_toml_str("").unwrap();
        assert_eq!(cfg.width, 10_000);
        assert_eq!(cfg.height, 5_000);
        assert_eq!(cfg.surface_base(), 1666);
        assert_eq!(cfg.sewer.pipes.len(), 3);
        assert_eq!(cfg.city.spacing, 800);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = from_toml_str(
            r#"
            width = 256
            [city]
            chance = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.width, 256);
        assert_eq!(cfg.height, 5_000);
        assert_eq!(cfg.city.chance, 1.0);
        assert_eq!(cfg.city.building_width, 30);
    }

    #[test]
    fn chance_outside_unit_range_is_an_error() {
        assert!(from_toml_str("[sewer]\nrusty_pipe_chance = 1.5").is_err());
        assert!(from_toml_str("[strata]\nore_chance = -0.1").is_err());
        assert!(from_toml_str("[city]\nchance = nan").is_err());
        assert!(from_toml_str("[terrain]\nsin_amplitude = inf").is_err());
    }

    #[test]
    fn pipe_waves() {
        let p = &default_pipes()[1];
        assert!((p.center(0) - 1820.0).abs() < 1e-9);
    }
}
