use neonscrap_geom::Vec2;

use crate::config::CameraConfig;

/// Viewport origin in world pixels plus a decaying shake velocity.
#[derive(Clone, Debug, Default)]
pub struct Camera {
    pub pos: Vec2,
    pub shake: Vec2,
}

impl Camera {
    /// Jump straight to the framing for `focus`.
    pub fn snap_to(&mut self, focus: Vec2, viewport: Vec2, world: Vec2) {
        self.pos = focus - viewport / 2.0;
        self.shake = Vec2::ZERO;
        self.clamp(viewport, world);
    }

    /// Ease toward `focus`, apply and damp shake, clamp to the world.
    pub fn follow(&mut self, focus: Vec2, viewport: Vec2, world: Vec2, cfg: &CameraConfig) {
        let target = focus - viewport / 2.0;
        self.pos += (target - self.pos) * cfg.smoothing;
        self.pos += self.shake;
        self.shake = self.shake * cfg.shake_damping;
        self.clamp(viewport, world);
    }

    fn clamp(&mut self, viewport: Vec2, world: Vec2) {
        self.pos.x = self.pos.x.clamp(0.0, (world.x - viewport.x).max(0.0));
        self.pos.y = self.pos.y.clamp(0.0, (world.y - viewport.y).max(0.0));
    }

    #[inline]
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        p + self.pos
    }
}
