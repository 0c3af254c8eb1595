use neonscrap_geom::Vec2;
use neonscrap_tiles::Rgba;
use rayon::prelude::*;

/// Soft circular hole: fully strong inside `inner`, fading linearly to
/// nothing at `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightHole {
    /// Screen-space center in pixels.
    pub center: Vec2,
    pub inner: f32,
    pub radius: f32,
    pub strength: f32,
}

#[inline]
pub fn hole_falloff(d: f32, inner: f32, radius: f32) -> f32 {
    if d <= inner {
        1.0
    } else if d >= radius || radius <= inner {
        0.0
    } else {
        (radius - d) / (radius - inner)
    }
}

/// Off-screen darkness layer covering the viewport at reduced resolution.
/// Holes erase alpha from this layer only; the world underneath is drawn
/// separately and never touched.
#[derive(Clone, Debug)]
pub struct DarknessMask {
    cols: usize,
    rows: usize,
    texel: u32,
    alpha: Vec<f32>,
}

impl DarknessMask {
    pub fn new(viewport_w: u32, viewport_h: u32, texel: u32) -> Self {
        let texel = texel.max(1);
        let cols = viewport_w.div_ceil(texel) as usize;
        let rows = viewport_h.div_ceil(texel) as usize;
        Self {
            cols,
            rows,
            texel,
            alpha: vec![0.0; cols * rows],
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn texel(&self) -> u32 {
        self.texel
    }

    /// Reallocates only when the viewport or texel size changed.
    pub fn resize(&mut self, viewport_w: u32, viewport_h: u32, texel: u32) {
        let texel = texel.max(1);
        let cols = viewport_w.div_ceil(texel) as usize;
        let rows = viewport_h.div_ceil(texel) as usize;
        if cols != self.cols || rows != self.rows || texel != self.texel {
            *self = Self::new(viewport_w, viewport_h, texel);
        }
    }

    pub fn fill(&mut self, alpha: f32) {
        self.alpha.fill(alpha.clamp(0.0, 1.0));
    }

    /// Alpha of the texel holding screen pixel `(px, py)`; 0 outside.
    pub fn alpha_at(&self, px: f32, py: f32) -> f32 {
        if px < 0.0 || py < 0.0 {
            return 0.0;
        }
        let c = (px / self.texel as f32) as usize;
        let r = (py / self.texel as f32) as usize;
        if c >= self.cols || r >= self.rows {
            return 0.0;
        }
        self.alpha[r * self.cols + c]
    }

    /// Destination-out erase: `a *= 1 - strength * falloff(d)`, sampled at
    /// texel centers.
    pub fn cut(&mut self, hole: &LightHole) {
        if self.cols == 0 || hole.radius <= 0.0 {
            return;
        }
        let t = self.texel as f32;
        let c0 = ((hole.center.x - hole.radius) / t).floor().max(0.0) as usize;
        let r0 = ((hole.center.y - hole.radius) / t).floor().max(0.0) as usize;
        let c1 = (((hole.center.x + hole.radius) / t).ceil().max(0.0) as usize).min(self.cols);
        let r1 = (((hole.center.y + hole.radius) / t).ceil().max(0.0) as usize).min(self.rows);
        if c0 >= c1 || r0 >= r1 {
            return;
        }
        let strength = hole.strength.clamp(0.0, 1.0);
        let cols = self.cols;
        self.alpha[r0 * cols..r1 * cols]
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(i, row)| {
                let cy = ((r0 + i) as f32 + 0.5) * t;
                let dy = cy - hole.center.y;
                for (c, a) in row.iter_mut().enumerate().take(c1).skip(c0) {
                    let cx = (c as f32 + 0.5) * t;
                    let dx = cx - hole.center.x;
                    let d = (dx * dx + dy * dy).sqrt();
                    let g = hole_falloff(d, hole.inner, hole.radius);
                    if g > 0.0 {
                        *a *= 1.0 - strength * g;
                    }
                }
            });
    }

    /// Row-major RGBA8 pixels tinted with `tint`, alpha from the mask.
    pub fn write_rgba8(&self, tint: Rgba, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.alpha.len() * 4);
        for a in &self.alpha {
            out.extend_from_slice(&[
                tint.r,
                tint.g,
                tint.b,
                (a.clamp(0.0, 1.0) * 255.0).round() as u8,
            ]);
        }
    }
}
