use serde::{Deserialize, Serialize};

/// 8-bit RGBA color. Kept renderer-agnostic; the raylib crate converts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// `0xRRGGBB`, fully opaque.
    #[inline]
    pub const fn hex(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Per-channel linear interpolation, rounded.
    pub fn lerp(self, to: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba::new(
            ch(self.r, to.r),
            ch(self.g, to.g),
            ch(self.b, to.b),
            ch(self.a, to.a),
        )
    }

    /// Source-over blend of `src` onto this (opaque) color.
    pub fn blend_over(self, src: Rgba) -> Rgba {
        let t = src.a as f32 / 255.0;
        self.lerp(src.with_alpha(self.a), t)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(c: [u8; 3]) -> Self {
        Rgba::rgb(c[0], c[1], c[2])
    }
}
