use neonscrap_geom::Vec2;
use neonscrap_tiles::Rgba;
use neonscrap_world::{TILE_SIZE, TileGrid, cell_of};

use crate::config::LightingConfig;
use crate::day_cycle::{DayCycle, DaySample};
use crate::mask::{DarknessMask, LightHole};

/// Holes for every light-emitting tile in the view expanded by the search
/// margin. Centers are in screen space relative to `camera`.
pub fn fixture_holes(
    grid: &TileGrid,
    camera: Vec2,
    viewport: Vec2,
    cfg: &LightingConfig,
    out: &mut Vec<LightHole>,
) {
    let m = cfg.search_margin_tiles.max(0);
    let x0 = (cell_of(camera.x) - m).max(0);
    let y0 = (cell_of(camera.y) - m).max(0);
    let x1 = (cell_of(camera.x + viewport.x) + m).min(grid.width() as i32 - 1);
    let y1 = (cell_of(camera.y + viewport.y) + m).min(grid.height() as i32 - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            if grid.get(x, y).emits_light() {
                let center = Vec2::new(
                    x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
                    y as f32 * TILE_SIZE + TILE_SIZE / 2.0,
                ) - camera;
                out.push(LightHole {
                    center,
                    inner: cfg.fixture_inner_radius,
                    radius: cfg.fixture_radius,
                    strength: cfg.fixture_strength,
                });
            }
        }
    }
}

/// Owns the darkness layer and rebuilds it once per frame.
pub struct LightingCompositor {
    cfg: LightingConfig,
    cycle: DayCycle,
    mask: DarknessMask,
    holes: Vec<LightHole>,
}

impl LightingCompositor {
    pub fn new(cfg: LightingConfig) -> Self {
        let cycle = DayCycle::from_config(&cfg);
        let mask = DarknessMask::new(0, 0, cfg.mask_downscale);
        Self {
            cfg,
            cycle,
            mask,
            holes: Vec::new(),
        }
    }

    pub fn config(&self) -> &LightingConfig {
        &self.cfg
    }

    pub fn set_config(&mut self, cfg: LightingConfig) {
        if cfg.mask_downscale != self.cfg.mask_downscale {
            log::debug!(
                "darkness texel {} -> {}",
                self.cfg.mask_downscale,
                cfg.mask_downscale
            );
        }
        self.cycle = DayCycle::from_config(&cfg);
        self.cfg = cfg;
    }

    pub fn sample_day(&self, timestamp_ms: f64, forced: Option<f32>) -> DaySample {
        self.cycle.sample(timestamp_ms, forced)
    }

    pub fn mask(&self) -> &DarknessMask {
        &self.mask
    }

    pub fn tint(&self) -> Rgba {
        self.cfg.darkness_tint.into()
    }

    /// Fill the layer with the sample's darkness, then erase the actor's
    /// light and every fixture's light from it.
    pub fn compose(
        &mut self,
        grid: &TileGrid,
        camera: Vec2,
        viewport: Vec2,
        actor_center: Vec2,
        vehicle: bool,
        day: &DaySample,
    ) {
        let vw = viewport.x.max(0.0) as u32;
        let vh = viewport.y.max(0.0) as u32;
        self.mask.resize(vw, vh, self.cfg.mask_downscale);
        self.mask.fill(day.darkness_alpha);
        if day.darkness_alpha <= 0.0 {
            return;
        }

        self.holes.clear();
        self.holes.push(LightHole {
            center: actor_center - camera,
            inner: self.cfg.actor_inner_radius,
            radius: if vehicle {
                self.cfg.vehicle_radius
            } else {
                self.cfg.actor_radius
            },
            strength: 1.0,
        });
        fixture_holes(grid, camera, viewport, &self.cfg, &mut self.holes);
        for hole in &self.holes {
            self.mask.cut(hole);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neonscrap_tiles::TileKind;

    #[test]
    fn finds_fixtures_within_margin() {
        let mut g = TileGrid::new(100, 100);
        g.set(5, 5, TileKind::Luminary);
        g.set(40, 5, TileKind::Luminary);
        g.set(90, 90, TileKind::Luminary);
        let cfg = LightingConfig::default();
        let mut holes = Vec::new();
        // view covers tiles 0..=20
        fixture_holes(&g, Vec2::ZERO, Vec2::new(640.0, 640.0), &cfg, &mut holes);
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].center, Vec2::new(176.0, 176.0));

        holes.clear();
        // view spans tiles 20..=30; the margin reaches tiles 5 and 40
        fixture_holes(&g, Vec2::new(640.0, 0.0), Vec2::new(320.0, 320.0), &cfg, &mut holes);
        assert_eq!(holes.len(), 2);
    }

    #[test]
    fn daytime_leaves_mask_clear() {
        let g = TileGrid::new(10, 10);
        let mut comp = LightingCompositor::new(LightingConfig::default());
        let day = comp.sample_day(0.0, Some(0.5));
        comp.compose(&g, Vec2::ZERO, Vec2::new(320.0, 320.0), Vec2::new(160.0, 160.0), false, &day);
        assert!(comp.mask().alpha_at(5.0, 5.0) < 1e-6);
    }

    #[test]
    fn night_darkens_except_near_actor() {
        let g = TileGrid::new(100, 100);
        let mut comp = LightingCompositor::new(LightingConfig::default());
        let day = comp.sample_day(0.0, Some(0.0));
        let view = Vec2::new(800.0, 600.0);
        comp.compose(&g, Vec2::ZERO, view, Vec2::new(400.0, 300.0), false, &day);
        assert_eq!(comp.mask().alpha_at(401.0, 301.0), 0.0);
        assert!((comp.mask().alpha_at(2.0, 2.0) - 0.6).abs() < 1e-5);

        // Vehicle light reaches further
        comp.compose(&g, Vec2::ZERO, view, Vec2::new(400.0, 300.0), true, &day);
        assert!(comp.mask().alpha_at(630.0, 300.0) < 0.6 - 1e-3);
    }
}
