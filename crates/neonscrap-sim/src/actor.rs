use neonscrap_geom::{Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorForm {
    Biped,
    Vehicle,
}

/// The player-controlled body. `pos` is the top-left corner in world pixels.
#[derive(Clone, Debug)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub grounded: bool,
    pub facing_right: bool,
    pub form: ActorForm,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
            facing_right: true,
            form: ActorForm::Biped,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Bottom-center point.
    #[inline]
    pub fn feet(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y)
    }

    /// Teleport and come to rest.
    pub fn place_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.grounded = false;
    }

    /// Switch body box keeping the feet point fixed. Returns false when
    /// nothing changed.
    pub fn set_form(&mut self, form: ActorForm, size: Vec2) -> bool {
        if self.form == form && self.size == size {
            return false;
        }
        let feet = self.feet();
        self.form = form;
        self.size = size;
        self.pos = Vec2::new(feet.x - size.x / 2.0, feet.y - size.y);
        true
    }
}
