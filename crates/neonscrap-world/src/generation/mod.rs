//! Procedural world generation: skyline, crust, deep strata and sewers.

mod column_plan;
mod layers;

use std::time::Instant;

use neonscrap_geom::Vec2;
use neonscrap_tiles::TileKind;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

pub use column_plan::{
    BuildingSpan, ColumnPlan, build_column_plans, building_height, ground_level,
    plan_building_origins,
};
pub use layers::{deep_tile, sewer_tile};

use crate::TILE_SIZE;
use crate::grid::TileGrid;
use crate::worldgen::WorldGenConfig;

/// Column plans and building origins of a generated world.
#[derive(Clone, Debug)]
pub struct WorldLayout {
    pub columns: Vec<ColumnPlan>,
    pub building_origins: Vec<i32>,
    pub spawn: Vec2,
}

pub struct GeneratedWorld {
    pub grid: TileGrid,
    pub layout: WorldLayout,
}

/// Default actor position: horizontally centered, a fixed number of rows
/// above the surface baseline.
pub fn spawn_point(cfg: &WorldGenConfig) -> Vec2 {
    let row = cfg.surface_base() - cfg.terrain.spawn_clearance;
    Vec2::new(
        cfg.width as f32 * TILE_SIZE / 2.0,
        row as f32 * TILE_SIZE,
    )
}

/// Per-row generator seed so rows can be filled in any order.
#[inline]
fn row_seed(seed: u64, y: usize) -> u64 {
    let mut z = seed ^ (y as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Builds a fresh grid. Same config and seed give an identical grid.
pub fn generate_world(cfg: &WorldGenConfig, seed: u64) -> GeneratedWorld {
    let t0 = Instant::now();
    let origins = plan_building_origins(cfg, seed);
    let columns = build_column_plans(cfg, &origins);

    let width = cfg.width;
    let height = cfg.height;
    let mut grid = TileGrid::new(width, height);
    if width > 0 && height > 0 {
        let (fg, bg) = grid.layers_mut();
        fg.par_chunks_mut(width)
            .zip(bg.par_chunks_mut(width))
            .enumerate()
            .for_each(|(y, (fg_row, bg_row))| {
                let mut rng = StdRng::seed_from_u64(row_seed(seed, y));
                fill_row(cfg, &columns, y as i32, fg_row, bg_row, &mut rng);
            });
    }

    log::info!(
        "generated {}x{} world (seed {}, {} buildings) in {:?}",
        width,
        height,
        seed,
        origins.len(),
        t0.elapsed()
    );

    GeneratedWorld {
        grid,
        layout: WorldLayout {
            columns,
            building_origins: origins,
            spawn: spawn_point(cfg),
        },
    }
}

fn fill_row(
    cfg: &WorldGenConfig,
    columns: &[ColumnPlan],
    y: i32,
    fg_row: &mut [TileKind],
    bg_row: &mut [TileKind],
    rng: &mut StdRng,
) {
    let last_row = cfg.height as i32 - 1;
    if y == last_row {
        fg_row.fill(TileKind::BOUNDARY);
        return;
    }
    let in_sewer = y >= cfg.sewer.top && y <= cfg.sewer.bottom;
    for (x, plan) in columns.iter().enumerate() {
        let xi = x as i32;
        if y < plan.ground {
            match plan.building {
                Some(b) if y >= b.top => {
                    let floor_band = (plan.ground - y) % cfg.city.floor_spacing.max(1) == 0;
                    if b.wall || floor_band {
                        fg_row[x] = TileKind::SkyscraperFrame;
                    } else {
                        bg_row[x] = TileKind::BgWindow;
                    }
                }
                _ => {}
            }
            continue;
        }
        fg_row[x] = if in_sewer {
            sewer_tile(&cfg.sewer, xi, y, rng)
        } else {
            deep_tile(&cfg.strata, y - plan.ground, rng)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_above_baseline() {
        let cfg = WorldGenConfig::default();
        let s = spawn_point(&cfg);
        assert_eq!(s.x, 10_000.0 * 32.0 / 2.0);
        assert_eq!(s.y, (1666 - 15) as f32 * 32.0);
    }

    #[test]
    fn row_seeds_differ() {
        assert_ne!(row_seed(1, 0), row_seed(1, 1));
        assert_ne!(row_seed(1, 0), row_seed(2, 0));
    }
}
