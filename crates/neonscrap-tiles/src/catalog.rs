//! Static per-kind tables, indexed by `TileKind as usize`.

use crate::color::Rgba;
use crate::kind::TileKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub color: Rgba,
    pub map_color: Rgba,
    /// Minimum tool tier that can break the tile.
    pub required_tier: u8,
    /// Tier this kind provides when held as a tool; 0 for non-tools.
    pub tool_tier: u8,
}

const fn info(
    name: &'static str,
    description: &'static str,
    color: Rgba,
    map_color: Rgba,
    required_tier: u8,
    tool_tier: u8,
) -> TileInfo {
    TileInfo {
        name,
        description,
        color,
        map_color,
        required_tier,
        tool_tier,
    }
}

pub const TILE_INFO: [TileInfo; TileKind::COUNT] = [
    info("Vacuum", "Empty space.", Rgba::TRANSPARENT, Rgba::hex(0x000000), 1, 0),
    info(
        "Concrete Slab",
        "Poured urban bedrock. The city was built on it.",
        Rgba::hex(0x334155),
        Rgba::hex(0x475569),
        1,
        0,
    ),
    info(
        "Rusted Metal",
        "Oxidized scrap plating. Basic building material.",
        Rgba::hex(0x78350f),
        Rgba::hex(0x451a03),
        1,
        0,
    ),
    info(
        "Cyan Neon",
        "Crystallized cold plasma. Glows faintly.",
        Rgba::hex(0x0ea5e9),
        Rgba::hex(0x0ea5e9),
        1,
        0,
    ),
    info(
        "Magenta Neon",
        "Unstable plasma crystal. Used in advanced tech.",
        Rgba::hex(0xd946ef),
        Rgba::hex(0xd946ef),
        1,
        0,
    ),
    info(
        "Circuit Scrap",
        "Salvaged boards and wiring.",
        Rgba::hex(0x22c55e),
        Rgba::hex(0x22c55e),
        1,
        0,
    ),
    info(
        "Reinforced Wall",
        "Military-grade alloy. Nothing cuts through it.",
        Rgba::hex(0x1e293b),
        Rgba::hex(0x0f172a),
        99,
        0,
    ),
    info(
        "Polyglass",
        "Transparent polymer pane.",
        Rgba::new(148, 163, 184, 77),
        Rgba::hex(0x94a3b8),
        1,
        0,
    ),
    info(
        "Reactor Core",
        "Compact fusion cell. Handle with care.",
        Rgba::hex(0xef4444),
        Rgba::hex(0xef4444),
        1,
        0,
    ),
    info(
        "Mag Ladder",
        "Magnetic rungs for climbing.",
        Rgba::hex(0xfbbf24),
        Rgba::hex(0xfbbf24),
        1,
        0,
    ),
    info(
        "Sewer Brick",
        "Ancient, slime-hardened masonry. Needs a stronger drill.",
        Rgba::hex(0x3f6212),
        Rgba::hex(0x1a2e05),
        2,
        0,
    ),
    info(
        "Toxic Sludge",
        "Corrosive muck from the undercity.",
        Rgba::hex(0x84cc16),
        Rgba::hex(0x65a30d),
        2,
        0,
    ),
    info(
        "Rusty Pipe",
        "Corroded drainage pipe.",
        Rgba::hex(0xa16207),
        Rgba::hex(0x854d0e),
        2,
        0,
    ),
    info(
        "Steel Beam",
        "Structural frame of the old towers.",
        Rgba::hex(0x020617),
        Rgba::hex(0x020617),
        1,
        0,
    ),
    info(
        "Background: Windows",
        "Dark office windows.",
        Rgba::hex(0x1e293b),
        Rgba::hex(0x1e293b),
        1,
        0,
    ),
    info(
        "Heavy Workbench",
        "Fabrication station for heavy equipment.",
        Rgba::hex(0xf97316),
        Rgba::hex(0xf97316),
        1,
        0,
    ),
    info(
        "M.E.C.H. Unit",
        "Parked combat exosuit. Climb in to pilot it.",
        Rgba::hex(0x475569),
        Rgba::hex(0x64748b),
        1,
        0,
    ),
    info(
        "Energy Cell (Ammo)",
        "Ammunition for the exosuit cannon.",
        Rgba::hex(0xfacc15),
        Rgba::hex(0xfacc15),
        1,
        0,
    ),
    info(
        "Reinforced Door (Closed)",
        "Two tiles tall. Right-click to open.",
        Rgba::hex(0x64748b),
        Rgba::hex(0x94a3b8),
        1,
        0,
    ),
    info(
        "Reinforced Door (Open)",
        "Two tiles tall. Right-click to close.",
        Rgba::new(100, 116, 139, 51),
        Rgba::hex(0x1e293b),
        1,
        0,
    ),
    info(
        "Industrial Luminary",
        "Ceiling lamp. Must hang from a solid tile.",
        Rgba::hex(0xfef08a),
        Rgba::hex(0xfef08a),
        1,
        0,
    ),
    info(
        "Laser Pickaxe (Tier 1)",
        "Standard mining laser.",
        Rgba::hex(0x22d3ee),
        Rgba::hex(0x22d3ee),
        1,
        1,
    ),
    info(
        "Plasma Pickaxe (Tier 2)",
        "Cuts sewer masonry and mines twice as fast.",
        Rgba::hex(0xa855f7),
        Rgba::hex(0xa855f7),
        1,
        2,
    ),
];

impl TileKind {
    #[inline]
    pub fn info(self) -> &'static TileInfo {
        &TILE_INFO[self.index()]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// One-line flavor text for tooltips.
    #[inline]
    pub fn description(self) -> &'static str {
        self.info().description
    }

    #[inline]
    pub fn color(self) -> Rgba {
        self.info().color
    }

    #[inline]
    pub fn map_color(self) -> Rgba {
        self.info().map_color
    }

    #[inline]
    pub fn required_tier(self) -> u8 {
        self.info().required_tier
    }

    #[inline]
    pub fn tool_tier(self) -> u8 {
        self.info().tool_tier
    }
}
