/// Per-cell "visited" flags packed into 64-bit words. Bits only ever go from
/// unset to set until [`FogMap::clear`].
#[derive(Clone, Debug)]
pub struct FogMap {
    width: usize,
    height: usize,
    words: Vec<u64>,
}

impl FogMap {
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width * height;
        Self {
            width,
            height,
            words: vec![0; cells.div_ceil(64)],
        }
    }

    #[inline]
    fn bit(&self, x: i32, y: i32) -> Option<(usize, u64)> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        let i = y as usize * self.width + x as usize;
        Some((i / 64, 1u64 << (i % 64)))
    }

    /// Out-of-bounds cells read as unvisited.
    #[inline]
    pub fn is_visited(&self, x: i32, y: i32) -> bool {
        self.bit(x, y)
            .map(|(w, m)| self.words[w] & m != 0)
            .unwrap_or(false)
    }

    /// Returns true if the cell was newly marked.
    #[inline]
    pub fn mark(&mut self, x: i32, y: i32) -> bool {
        match self.bit(x, y) {
            Some((w, m)) => {
                let was = self.words[w] & m != 0;
                self.words[w] |= m;
                !was
            }
            None => false,
        }
    }

    /// Marks every in-bounds cell with `dx² + dy² <= radius²`. Returns how
    /// many cells were newly revealed.
    pub fn reveal_disc(&mut self, cx: i32, cy: i32, radius: i32) -> usize {
        let r2 = radius as i64 * radius as i64;
        let x0 = (cx - radius).max(0);
        let x1 = (cx + radius).min(self.width as i32 - 1);
        let y0 = (cy - radius).max(0);
        let y1 = (cy + radius).min(self.height as i32 - 1);
        let mut newly = 0;
        for y in y0..=y1 {
            let dy = (y - cy) as i64;
            for x in x0..=x1 {
                let dx = (x - cx) as i64;
                if dx * dx + dy * dy <= r2 && self.mark(x, y) {
                    newly += 1;
                }
            }
        }
        newly
    }

    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    pub fn count_visited(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
