//! Tile grid, fog-of-war bitmap and procedural world generation.
#![forbid(unsafe_code)]

pub mod fog;
pub mod generation;
pub mod grid;
pub mod worldgen;

pub use fog::FogMap;
pub use generation::{ColumnPlan, GeneratedWorld, WorldLayout, generate_world, spawn_point};
pub use grid::TileGrid;
pub use worldgen::{WorldGenConfig, load_config_from_path};

pub const WORLD_WIDTH: usize = 10_000;
pub const WORLD_HEIGHT: usize = 5_000;

/// Edge length of one tile in world pixels.
pub const TILE_SIZE: f32 = 32.0;

/// Cell coordinate containing a world-space pixel coordinate.
#[inline]
pub fn cell_of(px: f32) -> i32 {
    (px / TILE_SIZE).floor() as i32
}
