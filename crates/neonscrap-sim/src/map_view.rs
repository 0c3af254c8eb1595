//! CPU rasters for the minimap and the full map. Both only show cells the
//! fog bitmap has marked visited.

use neonscrap_tiles::Rgba;
use neonscrap_world::TileGrid;

use crate::config::MapConfig;

pub const MINIMAP_BACKGROUND: Rgba = Rgba::hex(0x0f172a);
pub const FULLMAP_BACKGROUND: Rgba = Rgba::hex(0x020617);
pub const MARKER: Rgba = Rgba::hex(0xef4444);
const GRID_LINE: Rgba = Rgba::new(34, 211, 238, 26);
const MARKER_SIZE: i32 = 4;
const MARKER_RADIUS: i32 = 4;

/// Row-major RGBA pixels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapRaster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgba>,
}

impl MapRaster {
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Clipped solid rectangle.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        for py in y0..y1 {
            let row = py as usize * self.width as usize;
            for px in x0..x1 {
                self.pixels[row + px as usize] = color;
            }
        }
    }

    fn fill_disc(&mut self, cx: i32, cy: i32, r: i32, color: Rgba) {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
                    self.pixels[y as usize * self.width as usize + x as usize] = color;
                }
            }
        }
    }

    fn blend_column(&mut self, x: u32, color: Rgba) {
        if x >= self.width {
            return;
        }
        for y in 0..self.height {
            let i = y as usize * self.width as usize + x as usize;
            self.pixels[i] = self.pixels[i].blend_over(color);
        }
    }

    fn blend_row(&mut self, y: u32, color: Rgba) {
        if y >= self.height {
            return;
        }
        let row = y as usize * self.width as usize;
        for p in &mut self.pixels[row..row + self.width as usize] {
            *p = p.blend_over(color);
        }
    }
}

/// Square map of the explored area around `center` (a cell).
pub fn render_minimap(grid: &TileGrid, center: (i32, i32), cfg: &MapConfig) -> MapRaster {
    let size = cfg.minimap_size;
    let zoom = cfg.minimap_zoom.max(1) as i32;
    let mut raster = MapRaster::new(size, size, MINIMAP_BACKGROUND);
    let cells = size as i32 / zoom;
    let x0 = center.0 - cells / 2;
    let y0 = center.1 - cells / 2;
    for j in 0..cells {
        for i in 0..cells {
            let (x, y) = (x0 + i, y0 + j);
            if !grid.is_visited(x, y) {
                continue;
            }
            let kind = grid.get(x, y);
            if !kind.is_air() {
                raster.fill_rect(i * zoom, j * zoom, zoom, zoom, kind.map_color());
            }
        }
    }
    let mid = size as i32 / 2;
    raster.fill_rect(
        mid - MARKER_SIZE / 2,
        mid - MARKER_SIZE / 2,
        MARKER_SIZE,
        MARKER_SIZE,
        MARKER,
    );
    raster
}

/// Viewport-sized overview; unexplored cells inside the world are black.
pub fn render_fullmap(
    grid: &TileGrid,
    center: (i32, i32),
    viewport: (u32, u32),
    cfg: &MapConfig,
) -> MapRaster {
    let w = viewport.0.saturating_sub(cfg.fullmap_inset);
    let h = viewport.1.saturating_sub(cfg.fullmap_inset);
    let zoom = cfg.fullmap_zoom.max(1) as i32;
    let mut raster = MapRaster::new(w, h, FULLMAP_BACKGROUND);
    let cols = (w as i32 + zoom - 1) / zoom;
    let rows = (h as i32 + zoom - 1) / zoom;
    let x0 = center.0 - cols / 2;
    let y0 = center.1 - rows / 2;
    for j in 0..rows {
        for i in 0..cols {
            let (x, y) = (x0 + i, y0 + j);
            if !grid.in_bounds(x, y) {
                continue;
            }
            let color = if !grid.is_visited(x, y) {
                Rgba::BLACK
            } else {
                let kind = grid.get(x, y);
                if kind.is_air() {
                    continue;
                }
                kind.map_color()
            };
            raster.fill_rect(i * zoom, j * zoom, zoom, zoom, color);
        }
    }

    let spacing = cfg.grid_spacing.max(1);
    for x in (0..w).step_by(spacing as usize) {
        raster.blend_column(x, GRID_LINE);
    }
    for y in (0..h).step_by(spacing as usize) {
        raster.blend_row(y, GRID_LINE);
    }
    raster.fill_disc((cols / 2) * zoom, (rows / 2) * zoom, MARKER_RADIUS, MARKER);
    raster
}

#[cfg(test)]
mod tests {
    use super::*;
    use neonscrap_tiles::TileKind;

    fn explored_grid() -> TileGrid {
        let mut g = TileGrid::new(100, 100);
        for x in 0..100 {
            g.set(x, 60, TileKind::Concrete);
        }
        g.reveal_around(50, 50, 25);
        g
    }

    #[test]
    fn minimap_shows_only_revealed_cells() {
        let g = explored_grid();
        let cfg = MapConfig::default();
        let m = render_minimap(&g, (50, 50), &cfg);
        assert_eq!((m.width, m.height), (200, 200));
        // cell (50, 60) sits 10 cells below center: pixel row 100 + 40
        assert_eq!(m.get(101, 141), Some(TileKind::Concrete.map_color()));
        // air stays background
        assert_eq!(m.get(10, 10), Some(MINIMAP_BACKGROUND));
        assert_eq!(m.get(100, 100), Some(MARKER));
    }

    #[test]
    fn minimap_hides_unrevealed() {
        let mut g = TileGrid::new(100, 100);
        for x in 0..100 {
            g.set(x, 60, TileKind::Concrete);
        }
        let m = render_minimap(&g, (50, 50), &MapConfig::default());
        assert_eq!(m.get(101, 141), Some(MINIMAP_BACKGROUND));
    }

    #[test]
    fn fullmap_marks_unexplored_black() {
        let g = explored_grid();
        let cfg = MapConfig::default();
        let m = render_fullmap(&g, (50, 50), (400, 300), &cfg);
        assert_eq!((m.width, m.height), (300, 200));
        // cols = 150, rows = 100; x0 = -25, y0 = 0
        // cell (0, 0) is in the world and unexplored: pixel (50, 0) row 1
        assert_eq!(m.get(51, 1), Some(Rgba::BLACK));
        // left of x = 0 is outside the world
        assert_eq!(m.get(11, 1), Some(FULLMAP_BACKGROUND));
        // cell (50, 60) explored concrete
        assert_eq!(m.get(151, 121), Some(TileKind::Concrete.map_color()));
        assert_eq!(m.get(150, 100), Some(MARKER));
    }

    #[test]
    fn fullmap_too_small_viewport_is_empty() {
        let g = explored_grid();
        let m = render_fullmap(&g, (50, 50), (80, 80), &MapConfig::default());
        assert_eq!((m.width, m.height), (0, 0));
        assert!(m.pixels.is_empty());
    }
}
