use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct LightingConfig {
    /// Full day length in milliseconds.
    #[serde(default = "default_cycle_ms")]
    pub cycle_ms: f64,
    /// Darkness alpha at full night.
    #[serde(default = "default_max_darkness")]
    pub max_darkness: f32,
    #[serde(default = "default_night_sky")]
    pub night_sky: [u8; 3],
    #[serde(default = "default_day_sky")]
    pub day_sky: [u8; 3],
    #[serde(default = "default_darkness_tint")]
    pub darkness_tint: [u8; 3],
    #[serde(default = "default_actor_inner")]
    pub actor_inner_radius: f32,
    #[serde(default = "default_actor_radius")]
    pub actor_radius: f32,
    #[serde(default = "default_vehicle_radius")]
    pub vehicle_radius: f32,
    #[serde(default = "default_fixture_inner")]
    pub fixture_inner_radius: f32,
    #[serde(default = "default_fixture_radius")]
    pub fixture_radius: f32,
    #[serde(default = "default_fixture_strength")]
    pub fixture_strength: f32,
    /// Fixtures this many tiles outside the view still light it.
    #[serde(default = "default_search_margin")]
    pub search_margin_tiles: i32,
    /// Screen pixels per darkness texel.
    #[serde(default = "default_mask_downscale")]
    pub mask_downscale: u32,
}

fn default_cycle_ms() -> f64 {
    900_000.0
}
fn default_max_darkness() -> f32 {
    0.6
}
fn default_night_sky() -> [u8; 3] {
    [15, 23, 42]
}
fn default_day_sky() -> [u8; 3] {
    [51, 92, 129]
}
fn default_darkness_tint() -> [u8; 3] {
    [0, 0, 5]
}
fn default_actor_inner() -> f32 {
    20.0
}
fn default_actor_radius() -> f32 {
    150.0
}
fn default_vehicle_radius() -> f32 {
    300.0
}
fn default_fixture_inner() -> f32 {
    10.0
}
fn default_fixture_radius() -> f32 {
    150.0
}
fn default_fixture_strength() -> f32 {
    0.9
}
fn default_search_margin() -> i32 {
    15
}
fn default_mask_downscale() -> u32 {
    4
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            cycle_ms: default_cycle_ms(),
            max_darkness: default_max_darkness(),
            night_sky: default_night_sky(),
            day_sky: default_day_sky(),
            darkness_tint: default_darkness_tint(),
            actor_inner_radius: default_actor_inner(),
            actor_radius: default_actor_radius(),
            vehicle_radius: default_vehicle_radius(),
            fixture_inner_radius: default_fixture_inner(),
            fixture_radius: default_fixture_radius(),
            fixture_strength: default_fixture_strength(),
            search_margin_tiles: default_search_margin(),
            mask_downscale: default_mask_downscale(),
        }
    }
}

impl LightingConfig {
    /// Rejects values the cycle and mask math cannot use.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.cycle_ms.is_finite() && self.cycle_ms > 0.0) {
            return Err(format!("lighting.cycle_ms must be positive, got {}", self.cycle_ms));
        }
        if !(0.0..=1.0).contains(&self.max_darkness) {
            return Err(format!(
                "lighting.max_darkness must be within [0, 1], got {}",
                self.max_darkness
            ));
        }
        if !(0.0..=1.0).contains(&self.fixture_strength) {
            return Err(format!(
                "lighting.fixture_strength must be within [0, 1], got {}",
                self.fixture_strength
            ));
        }
        let radii = [
            ("actor_inner_radius", self.actor_inner_radius),
            ("actor_radius", self.actor_radius),
            ("vehicle_radius", self.vehicle_radius),
            ("fixture_inner_radius", self.fixture_inner_radius),
            ("fixture_radius", self.fixture_radius),
        ];
        for (name, r) in radii {
            if !(r.is_finite() && r >= 0.0) {
                return Err(format!("lighting.{name} must be a non-negative number, got {r}"));
            }
        }
        if self.mask_downscale == 0 {
            return Err("lighting.mask_downscale must be at least 1".into());
        }
        Ok(())
    }
}
