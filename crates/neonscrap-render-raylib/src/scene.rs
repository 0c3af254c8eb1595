use raylib::prelude::*;

use neonscrap_geom::Vec2;
use neonscrap_lighting::DaySample;
use neonscrap_sim::{ActorForm, Simulation, TransitionDirection};
use neonscrap_tiles::{Rgba, TileKind};
use neonscrap_world::{TILE_SIZE, cell_of};

use crate::conv::rgba_to_rl;
use crate::{RasterTexture, rgba_bytes, update_raster_texture};

const MINIMAP_MARGIN: i32 = 16;
const MAP_BORDER: Color = Color::new(34, 211, 238, 160);
const CURSOR_OUTLINE: Color = Color::new(255, 255, 255, 110);
const MINING_OUTLINE: Color = Color::new(250, 204, 21, 220);
const BIPED_BODY: Rgba = Rgba::hex(0x22d3ee);
const VEHICLE_BODY: Rgba = Rgba::hex(0x475569);
const VEHICLE_TRIM: Rgba = Rgba::hex(0x0ea5e9);
const VISOR: Rgba = Rgba::hex(0xf472b6);

/// Host state the scene needs besides the simulation itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneOptions {
    pub map_upgrade: bool,
    pub map_open: bool,
    pub paused: bool,
    pub god_mode: bool,
}

/// Owns the textures for the darkness layer and the two maps.
#[derive(Default)]
pub struct SceneRenderer {
    darkness: Option<RasterTexture>,
    minimap: Option<RasterTexture>,
    fullmap: Option<RasterTexture>,
    scratch: Vec<u8>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh every CPU-built layer. Must run outside the draw pass.
    pub fn upload(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        sim: &Simulation,
        opts: &SceneOptions,
        viewport: Vec2,
    ) {
        let mask = sim.darkness();
        mask.write_rgba8(sim.darkness_tint(), &mut self.scratch);
        update_raster_texture(
            rl,
            thread,
            &mut self.darkness,
            mask.cols() as i32,
            mask.rows() as i32,
            raylib::consts::TextureFilter::TEXTURE_FILTER_BILINEAR,
            &self.scratch,
        );

        match sim.minimap(opts.map_upgrade) {
            Some(raster) => {
                rgba_bytes(&raster.pixels, &mut self.scratch);
                update_raster_texture(
                    rl,
                    thread,
                    &mut self.minimap,
                    raster.width as i32,
                    raster.height as i32,
                    raylib::consts::TextureFilter::TEXTURE_FILTER_POINT,
                    &self.scratch,
                );
            }
            None => self.minimap = None,
        }

        match sim.fullmap(opts.map_open, opts.map_upgrade, viewport) {
            Some(raster) => {
                rgba_bytes(&raster.pixels, &mut self.scratch);
                update_raster_texture(
                    rl,
                    thread,
                    &mut self.fullmap,
                    raster.width as i32,
                    raster.height as i32,
                    raylib::consts::TextureFilter::TEXTURE_FILTER_POINT,
                    &self.scratch,
                );
            }
            None => self.fullmap = None,
        }
    }

    /// Sky, tiles, actor, projectiles, particles, darkness, then maps.
    pub fn draw<D: RaylibDraw>(
        &self,
        d: &mut D,
        sim: &Simulation,
        day: &DaySample,
        viewport: Vec2,
        opts: &SceneOptions,
    ) {
        d.clear_background(rgba_to_rl(day.sky));
        let cam = sim.camera().pos;

        draw_tiles(d, sim, cam, viewport);
        draw_actor(d, sim, cam);
        for p in sim.projectiles() {
            let s = p.pos - cam;
            d.draw_rectangle(s.x as i32 - 3, s.y as i32 - 1, 6, 3, rgba_to_rl(p.color));
        }
        for p in sim.particles() {
            let s = p.pos - cam;
            let a = (p.life.clamp(0.0, 1.0) * 255.0) as u8;
            d.draw_rectangle(s.x as i32 - 2, s.y as i32 - 2, 4, 4, rgba_to_rl(p.color.with_alpha(a)));
        }
        if !opts.map_open {
            draw_cursor(d, sim, cam);
        }

        if let Some(rt) = &self.darkness {
            let texel = sim.darkness().texel() as f32;
            d.draw_texture_pro(
                &rt.tex,
                Rectangle::new(0.0, 0.0, rt.width as f32, rt.height as f32),
                Rectangle::new(0.0, 0.0, rt.width as f32 * texel, rt.height as f32 * texel),
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }

        if let Some(rt) = &self.minimap {
            let x = viewport.x as i32 - rt.width - MINIMAP_MARGIN;
            let y = MINIMAP_MARGIN;
            d.draw_texture(&rt.tex, x, y, Color::WHITE);
            d.draw_rectangle_lines(x - 1, y - 1, rt.width + 2, rt.height + 2, MAP_BORDER);
        }
        if let Some(rt) = &self.fullmap {
            let x = (viewport.x as i32 - rt.width) / 2;
            let y = (viewport.y as i32 - rt.height) / 2;
            d.draw_rectangle(0, 0, viewport.x as i32, viewport.y as i32, Color::new(0, 0, 0, 150));
            d.draw_texture(&rt.tex, x, y, Color::WHITE);
            d.draw_rectangle_lines(x - 2, y - 2, rt.width + 4, rt.height + 4, MAP_BORDER);
        }

        if opts.god_mode {
            d.draw_text("GOD MODE", 12, 12, 18, Color::GOLD);
        }
        if opts.paused {
            let w = measure_text("PAUSED", 40);
            d.draw_text(
                "PAUSED",
                (viewport.x as i32 - w) / 2,
                viewport.y as i32 / 2 - 20,
                40,
                Color::RAYWHITE,
            );
        }
    }
}

fn draw_tiles<D: RaylibDraw>(d: &mut D, sim: &Simulation, cam: Vec2, viewport: Vec2) {
    let grid = sim.grid();
    let x0 = cell_of(cam.x).max(0);
    let y0 = cell_of(cam.y).max(0);
    let x1 = cell_of(cam.x + viewport.x).min(grid.width() as i32 - 1);
    let y1 = cell_of(cam.y + viewport.y).min(grid.height() as i32 - 1);
    let ts = TILE_SIZE as i32;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let sx = (x as f32 * TILE_SIZE - cam.x).round() as i32;
            let sy = (y as f32 * TILE_SIZE - cam.y).round() as i32;
            let bg = grid.get_bg(x, y);
            if !bg.is_air() {
                d.draw_rectangle(sx, sy, ts, ts, rgba_to_rl(bg.color()));
            }
            let fg = grid.get(x, y);
            match fg {
                TileKind::Air => {}
                TileKind::DoorOpen => {
                    d.draw_rectangle(sx, sy, ts / 4, ts, rgba_to_rl(fg.color()));
                }
                TileKind::Luminary => {
                    d.draw_rectangle(sx + ts / 4, sy, ts / 2, ts / 3, rgba_to_rl(fg.color()));
                    d.draw_circle(
                        sx + ts / 2,
                        sy + ts / 3,
                        ts as f32 / 3.0,
                        rgba_to_rl(fg.color().with_alpha(60)),
                    );
                }
                TileKind::MechSuit => {
                    d.draw_rectangle(sx + 4, sy + 2, ts - 8, ts - 2, rgba_to_rl(fg.color()));
                    d.draw_rectangle(sx + 8, sy + 6, ts - 16, 5, rgba_to_rl(VEHICLE_TRIM));
                }
                _ => {
                    d.draw_rectangle(sx, sy, ts, ts, rgba_to_rl(fg.color()));
                    d.draw_rectangle_lines(sx, sy, ts, ts, Color::new(0, 0, 0, 40));
                }
            }
        }
    }
}

fn draw_actor<D: RaylibDraw>(d: &mut D, sim: &Simulation, cam: Vec2) {
    let a = sim.actor();
    let s = a.pos - cam;
    let (x, y, w, h) = (s.x as i32, s.y as i32, a.size.x as i32, a.size.y as i32);
    match a.form {
        ActorForm::Biped => {
            d.draw_rectangle(x, y, w, h, rgba_to_rl(BIPED_BODY));
            let vx = if a.facing_right { x + w / 2 } else { x + 2 };
            d.draw_rectangle(vx, y + 6, w / 2 - 2, 6, rgba_to_rl(VISOR));
        }
        ActorForm::Vehicle => {
            d.draw_rectangle(x, y, w, h, rgba_to_rl(VEHICLE_BODY));
            d.draw_rectangle(x + 6, y + 10, w - 12, 14, rgba_to_rl(VEHICLE_TRIM));
            let gun_x = if a.facing_right { x + w } else { x - 10 };
            d.draw_rectangle(gun_x, y + (h as f32 * 0.45) as i32 - 3, 10, 6, Color::DARKGRAY);
        }
    }

    if let Some(t) = sim.transition() {
        let grow = match t.direction {
            TransitionDirection::Enter => t.progress,
            TransitionDirection::Exit => 1.0 - t.progress,
        };
        let [vw, vh] = sim.config().physics.vehicle_size;
        let feet = a.feet() - cam;
        let bw = (a.size.x + (vw - a.size.x) * grow) as i32;
        let bh = (a.size.y + (vh - a.size.y) * grow) as i32;
        d.draw_rectangle_lines(
            feet.x as i32 - bw / 2,
            feet.y as i32 - bh,
            bw,
            bh,
            rgba_to_rl(VEHICLE_TRIM),
        );
    }
}

fn draw_cursor<D: RaylibDraw>(d: &mut D, sim: &Simulation, cam: Vec2) {
    let ts = TILE_SIZE as i32;
    if let Some((x, y)) = sim.mining().target() {
        let sx = (x as f32 * TILE_SIZE - cam.x) as i32;
        let sy = (y as f32 * TILE_SIZE - cam.y) as i32;
        d.draw_rectangle_lines(sx, sy, ts, ts, MINING_OUTLINE);
        return;
    }
    if let Some((x, y)) = sim.cursor_cell() {
        let sx = (x as f32 * TILE_SIZE - cam.x) as i32;
        let sy = (y as f32 * TILE_SIZE - cam.y) as i32;
        d.draw_rectangle_lines(sx, sy, ts, ts, CURSOR_OUTLINE);
    }
}
