//! Raylib drawing for the sandbox: conversions, raster uploads and the frame scene.
// Unsafe is required for raw texture updates in this crate.

use raylib::prelude::*;

mod scene;

pub use scene::{SceneOptions, SceneRenderer};

pub mod conv {
    use neonscrap_geom::{Rect, Vec2};
    use neonscrap_tiles::Rgba;

    pub fn vec2_to_rl(v: Vec2) -> raylib::prelude::Vector2 {
        raylib::prelude::Vector2::new(v.x, v.y)
    }

    pub fn vec2_from_rl(v: raylib::prelude::Vector2) -> Vec2 {
        Vec2 { x: v.x, y: v.y }
    }

    pub fn rgba_to_rl(c: Rgba) -> raylib::prelude::Color {
        raylib::prelude::Color::new(c.r, c.g, c.b, c.a)
    }

    pub fn rect_to_rl(r: Rect) -> raylib::prelude::Rectangle {
        raylib::prelude::Rectangle::new(r.min.x, r.min.y, r.width(), r.height())
    }
}

/// Flatten colors into tightly packed RGBA8 bytes.
pub fn rgba_bytes(pixels: &[neonscrap_tiles::Rgba], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(pixels.len() * 4);
    for p in pixels {
        out.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
}

/// A GPU texture fed from a CPU raster every frame.
pub struct RasterTexture {
    pub tex: raylib::core::texture::Texture2D,
    pub width: i32,
    pub height: i32,
}

/// Upload `rgba` (width * height * 4 bytes) into `slot`, recreating the
/// texture when the size changed. Empty rasters clear the slot.
pub fn update_raster_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    slot: &mut Option<RasterTexture>,
    width: i32,
    height: i32,
    filter: raylib::consts::TextureFilter,
    rgba: &[u8],
) {
    if width <= 0 || height <= 0 || rgba.len() < (width * height * 4) as usize {
        *slot = None;
        return;
    }
    let reuse = matches!(slot, Some(rt) if rt.width == width && rt.height == height);
    if !reuse {
        let img = raylib::core::texture::Image::gen_image_color(width, height, Color::BLANK);
        match rl.load_texture_from_image(thread, &img) {
            Ok(tex) => {
                tex.set_texture_filter(thread, filter);
                tex.set_texture_wrap(thread, raylib::consts::TextureWrap::TEXTURE_WRAP_CLAMP);
                *slot = Some(RasterTexture { tex, width, height });
            }
            Err(e) => {
                log::warn!("failed to create {}x{} texture: {}", width, height, e);
                *slot = None;
                return;
            }
        }
    }
    if let Some(rt) = slot {
        unsafe {
            raylib::ffi::UpdateTexture(*rt.tex.as_ref(), rgba.as_ptr() as *const _);
        }
    }
}
