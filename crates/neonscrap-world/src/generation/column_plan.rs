use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::worldgen::WorldGenConfig;

/// Skyscraper covering a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildingSpan {
    pub origin: i32,
    /// First row occupied by the building (may be negative: clipped).
    pub top: i32,
    /// Column is a left or right outer wall of some building.
    pub wall: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnPlan {
    pub ground: i32,
    pub building: Option<BuildingSpan>,
}

/// Surface row for a column.
pub fn ground_level(cfg: &WorldGenConfig, x: i32) -> i32 {
    let t = &cfg.terrain;
    let xf = x as f64;
    let wave = (xf * t.sin_frequency).sin() * t.sin_amplitude
        + (xf * t.cos_frequency).cos() * t.cos_amplitude;
    cfg.surface_base() + wave.floor() as i32
}

/// Building height derived from its origin column only.
pub fn building_height(cfg: &WorldGenConfig, origin: i32) -> i32 {
    let h = (origin as f64).sin() * 10_000.0;
    let frac = h - h.floor();
    cfg.city.min_height + (frac * cfg.city.height_range as f64).floor() as i32
}

/// City sites and building origins, in placement order.
pub fn plan_building_origins(cfg: &WorldGenConfig, seed: u64) -> Vec<i32> {
    let city = &cfg.city;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut origins = Vec::new();
    let chance = city.chance.clamp(0.0, 1.0);
    let max_buildings = city.max_buildings.max(city.min_buildings);
    for site in (0..cfg.width).step_by(city.spacing.max(1)) {
        if !rng.gen_bool(chance) {
            continue;
        }
        let count = rng.gen_range(city.min_buildings..=max_buildings);
        for b in 0..count as i32 {
            let jitter = if city.jitter > 0 {
                rng.gen_range(0..city.jitter)
            } else {
                0
            };
            origins.push(site as i32 + b * (city.building_width + city.gap) + jitter);
        }
    }
    origins
}

/// Per-column plan. When buildings overlap, the earliest placed one owns
/// the column; wall flags consider every origin.
pub fn build_column_plans(cfg: &WorldGenConfig, origins: &[i32]) -> Vec<ColumnPlan> {
    let width = cfg.width;
    let bw = cfg.city.building_width;
    let mut owner: Vec<Option<i32>> = vec![None; width];
    let mut is_origin = vec![false; width];
    for &origin in origins.iter().rev() {
        let x0 = origin.max(0);
        let x1 = (origin + bw).min(width as i32);
        for x in x0..x1 {
            owner[x as usize] = Some(origin);
        }
        if origin >= 0 && (origin as usize) < width {
            is_origin[origin as usize] = true;
        }
    }
    let origin_at = |x: i32| x >= 0 && (x as usize) < width && is_origin[x as usize];

    (0..width as i32)
        .map(|x| {
            let ground = ground_level(cfg, x);
            let building = owner[x as usize].map(|origin| BuildingSpan {
                origin,
                top: ground - building_height(cfg, origin),
                wall: origin_at(x) || origin_at(x - bw + 1),
            });
            ColumnPlan { ground, building }
        })
        .collect()
}
