use neonscrap_tiles::TileKind;
use rand::Rng;

use crate::worldgen::{Sewer, Strata};

/// Tile for a cell inside the sewer band. The first pipe whose bore holds
/// `y` decides; sludge pools in the lower part of the bore.
pub fn sewer_tile<R: Rng>(sewer: &Sewer, x: i32, y: i32, rng: &mut R) -> TileKind {
    let yf = y as f64;
    for pipe in &sewer.pipes {
        let center = pipe.center(x);
        if (yf - center).abs() < pipe.radius {
            return if yf > center + pipe.radius * sewer.sludge_fraction {
                TileKind::Sludge
            } else {
                TileKind::Air
            };
        }
    }
    if rng.gen_bool(sewer.rusty_pipe_chance.clamp(0.0, 1.0)) {
        TileKind::PipeRusty
    } else {
        TileKind::SewerBrick
    }
}

/// Tile at `depth` rows below the surface line (0 = surface).
pub fn deep_tile<R: Rng>(strata: &Strata, depth: i32, rng: &mut R) -> TileKind {
    if depth == 0 {
        return TileKind::Concrete;
    }
    if depth < strata.crust_depth {
        return if rng.gen_bool(strata.crust_metal_chance.clamp(0.0, 1.0)) {
            TileKind::RustedMetal
        } else {
            TileKind::Concrete
        };
    }
    if rng.gen_bool(strata.ore_chance.clamp(0.0, 1.0)) {
        if rng.gen_bool(0.5) {
            TileKind::NeonOreBlue
        } else {
            TileKind::NeonOrePink
        }
    } else if rng.gen_bool(strata.scrap_chance.clamp(0.0, 1.0)) {
        TileKind::CircuitScrap
    } else {
        TileKind::RustedMetal
    }
}
