use serde::{Deserialize, Serialize};

/// Content category of a grid cell. Ordinals are stable and contiguous; the
/// lookup tables in [`crate::catalog`] are indexed by them.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TileKind {
    #[default]
    Air = 0,
    Concrete = 1,
    RustedMetal = 2,
    NeonOreBlue = 3,
    NeonOrePink = 4,
    CircuitScrap = 5,
    CyberWall = 6,
    GlassPane = 7,
    ReactorCore = 8,
    Ladder = 9,
    SewerBrick = 10,
    Sludge = 11,
    PipeRusty = 12,
    SkyscraperFrame = 13,
    BgWindow = 14,
    Workbench = 15,
    MechSuit = 16,
    AmmoPack = 17,
    DoorClosed = 18,
    DoorOpen = 19,
    Luminary = 20,
    Pickaxe = 21,
    AdvancedPickaxe = 22,
}

impl TileKind {
    pub const COUNT: usize = 23;

    /// Indestructible kind returned for every out-of-bounds read.
    pub const BOUNDARY: TileKind = TileKind::CyberWall;

    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Air,
        TileKind::Concrete,
        TileKind::RustedMetal,
        TileKind::NeonOreBlue,
        TileKind::NeonOrePink,
        TileKind::CircuitScrap,
        TileKind::CyberWall,
        TileKind::GlassPane,
        TileKind::ReactorCore,
        TileKind::Ladder,
        TileKind::SewerBrick,
        TileKind::Sludge,
        TileKind::PipeRusty,
        TileKind::SkyscraperFrame,
        TileKind::BgWindow,
        TileKind::Workbench,
        TileKind::MechSuit,
        TileKind::AmmoPack,
        TileKind::DoorClosed,
        TileKind::DoorOpen,
        TileKind::Luminary,
        TileKind::Pickaxe,
        TileKind::AdvancedPickaxe,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_u8(v: u8) -> Option<TileKind> {
        Self::ALL.get(v as usize).copied()
    }

    #[inline]
    pub fn is_air(self) -> bool {
        matches!(self, TileKind::Air)
    }

    /// Actors move through these.
    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(
            self,
            TileKind::Air | TileKind::MechSuit | TileKind::DoorOpen | TileKind::Luminary
        )
    }

    /// Projectiles fly through these; everything else stops them.
    #[inline]
    pub fn is_projectile_transparent(self) -> bool {
        matches!(self, TileKind::Air | TileKind::DoorOpen | TileKind::Luminary)
    }

    #[inline]
    pub fn emits_light(self) -> bool {
        matches!(self, TileKind::Luminary)
    }

    #[inline]
    pub fn is_tool(self) -> bool {
        matches!(self, TileKind::Pickaxe | TileKind::AdvancedPickaxe)
    }

    #[inline]
    pub fn is_door(self) -> bool {
        matches!(self, TileKind::DoorClosed | TileKind::DoorOpen)
    }

    /// Tools and air never go into the grid from a placement.
    #[inline]
    pub fn is_placeable(self) -> bool {
        !self.is_air() && !self.is_tool()
    }

    /// The other state of a door; `None` for non-doors.
    #[inline]
    pub fn toggled_door(self) -> Option<TileKind> {
        match self {
            TileKind::DoorClosed => Some(TileKind::DoorOpen),
            TileKind::DoorOpen => Some(TileKind::DoorClosed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_contiguous() {
        for (i, k) in TileKind::ALL.iter().enumerate() {
            assert_eq!(k.index(), i);
            assert_eq!(TileKind::from_u8(i as u8), Some(*k));
        }
        assert_eq!(TileKind::from_u8(TileKind::COUNT as u8), None);
    }

    #[test]
    fn boundary_is_solid() {
        assert!(!TileKind::BOUNDARY.is_passable());
        assert!(!TileKind::BOUNDARY.is_projectile_transparent());
    }

    #[test]
    fn vehicle_placeholder_blocks_projectiles_but_not_actors() {
        assert!(TileKind::MechSuit.is_passable());
        assert!(!TileKind::MechSuit.is_projectile_transparent());
    }

    #[test]
    fn door_toggle_round_trips() {
        assert_eq!(TileKind::DoorClosed.toggled_door(), Some(TileKind::DoorOpen));
        assert_eq!(TileKind::DoorOpen.toggled_door(), Some(TileKind::DoorClosed));
        assert_eq!(TileKind::Concrete.toggled_door(), None);
    }

    #[test]
    fn tools_are_not_placeable() {
        assert!(!TileKind::Pickaxe.is_placeable());
        assert!(!TileKind::AdvancedPickaxe.is_placeable());
        assert!(!TileKind::Air.is_placeable());
        assert!(TileKind::Luminary.is_placeable());
    }
}
