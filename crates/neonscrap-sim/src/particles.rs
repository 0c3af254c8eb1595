//! Short-lived visual particles and vehicle projectiles. Both live in
//! unordered vectors; dead entries are swap-removed.

use neonscrap_geom::Vec2;
use neonscrap_tiles::Rgba;
use neonscrap_world::TileGrid;
use rand::Rng;

/// Life lost per reference frame.
const PARTICLE_DECAY: f32 = 0.05;
const DEFAULT_BURST_SPEED: f32 = 4.0;

pub const SPARK: Rgba = Rgba::hex(0xfacc15);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 when spawned, removed at 0.
    pub life: f32,
    pub color: Rgba,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// `count` particles at `at` with velocities uniform in a square of
    /// half-width `speed / 2`.
    pub fn burst<R: Rng>(&mut self, rng: &mut R, at: Vec2, color: Rgba, count: u32, speed: f32) {
        let half = speed.abs() / 2.0;
        self.particles.reserve(count as usize);
        for _ in 0..count {
            let vel = if half > 0.0 {
                Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half))
            } else {
                Vec2::ZERO
            };
            self.particles.push(Particle {
                pos: at,
                vel,
                life: 1.0,
                color,
            });
        }
    }

    pub fn burst_default<R: Rng>(&mut self, rng: &mut R, at: Vec2, color: Rgba, count: u32) {
        self.burst(rng, at, color, count, DEFAULT_BURST_SPEED);
    }

    pub fn update(&mut self, dt: f32) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.pos += p.vel * dt;
            p.life -= PARTICLE_DECAY * dt;
            if p.life <= 0.0 {
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining life in reference frames.
    pub life: f32,
    pub color: Rgba,
}

#[derive(Clone, Debug, Default)]
pub struct ProjectileSystem {
    projectiles: Vec<Projectile>,
}

impl ProjectileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    pub fn spawn(&mut self, p: Projectile) {
        self.projectiles.push(p);
    }

    /// Advance every projectile. Ones entering a tile that stops
    /// projectiles burst into sparks; expired ones vanish quietly.
    pub fn update<R: Rng>(
        &mut self,
        grid: &TileGrid,
        dt: f32,
        sparks: &mut ParticleSystem,
        rng: &mut R,
    ) {
        let mut i = 0;
        while i < self.projectiles.len() {
            let p = &mut self.projectiles[i];
            p.life -= dt;
            p.pos += p.vel * dt;
            let hit = !grid.tile_at_px(p.pos.x, p.pos.y).is_projectile_transparent();
            if hit {
                let at = p.pos;
                sparks.burst_default(rng, at, SPARK, 3);
            }
            if hit || p.life <= 0.0 {
                self.projectiles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}
