use neonscrap_tiles::TileKind;

use crate::TILE_SIZE;
use crate::fog::FogMap;

/// Dense row-major tile storage: foreground, background and fog layers of
/// identical dimensions. Reads outside the grid yield [`TileKind::BOUNDARY`];
/// writes outside it are dropped.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: usize,
    height: usize,
    fg: Vec<TileKind>,
    bg: Vec<TileKind>,
    fog: FogMap,
}

impl TileGrid {
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width * height;
        Self {
            width,
            height,
            fg: vec![TileKind::Air; cells],
            bg: vec![TileKind::Air; cells],
            fog: FogMap::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// World size in pixels.
    #[inline]
    pub fn pixel_size(&self) -> (f32, f32) {
        (self.width as f32 * TILE_SIZE, self.height as f32 * TILE_SIZE)
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> TileKind {
        self.idx(x, y).map(|i| self.fg[i]).unwrap_or(TileKind::BOUNDARY)
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, kind: TileKind) {
        if let Some(i) = self.idx(x, y) {
            self.fg[i] = kind;
        }
    }

    #[inline]
    pub fn get_bg(&self, x: i32, y: i32) -> TileKind {
        self.idx(x, y).map(|i| self.bg[i]).unwrap_or(TileKind::BOUNDARY)
    }

    #[inline]
    pub fn set_bg(&mut self, x: i32, y: i32, kind: TileKind) {
        if let Some(i) = self.idx(x, y) {
            self.bg[i] = kind;
        }
    }

    /// Foreground tile under a world-space pixel position.
    #[inline]
    pub fn tile_at_px(&self, px: f32, py: f32) -> TileKind {
        self.get(crate::cell_of(px), crate::cell_of(py))
    }

    #[inline]
    pub fn fog(&self) -> &FogMap {
        &self.fog
    }

    #[inline]
    pub fn is_visited(&self, x: i32, y: i32) -> bool {
        self.fog.is_visited(x, y)
    }

    pub fn reveal_around(&mut self, cx: i32, cy: i32, radius: i32) -> usize {
        self.fog.reveal_disc(cx, cy, radius)
    }

    /// Mutable foreground/background slices for bulk fills during generation.
    pub(crate) fn layers_mut(&mut self) -> (&mut [TileKind], &mut [TileKind]) {
        (&mut self.fg, &mut self.bg)
    }

    /// Number of foreground cells holding `kind`.
    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.fg.iter().filter(|k| **k == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_boundary() {
        let g = TileGrid::new(4, 4);
        assert_eq!(g.get(-1, 0), TileKind::CyberWall);
        assert_eq!(g.get(0, 4), TileKind::CyberWall);
        assert_eq!(g.get_bg(4, 0), TileKind::CyberWall);
        assert_eq!(g.get(0, 0), TileKind::Air);
    }

    #[test]
    fn out_of_bounds_writes_ignored() {
        let mut g = TileGrid::new(4, 4);
        g.set(-1, 2, TileKind::Concrete);
        g.set(4, 2, TileKind::Concrete);
        g.set_bg(2, -3, TileKind::BgWindow);
        assert_eq!(g.count_kind(TileKind::Concrete), 0);
        g.set(3, 3, TileKind::Concrete);
        assert_eq!(g.get(3, 3), TileKind::Concrete);
    }

    #[test]
    fn pixel_lookup_floors_negative() {
        let mut g = TileGrid::new(4, 4);
        g.set(0, 0, TileKind::Ladder);
        assert_eq!(g.tile_at_px(31.9, 0.0), TileKind::Ladder);
        assert_eq!(g.tile_at_px(-0.5, 0.0), TileKind::CyberWall);
    }
}
