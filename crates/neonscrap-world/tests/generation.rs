use neonscrap_tiles::TileKind;
use neonscrap_world::generation::ground_level;
use neonscrap_world::{WorldGenConfig, generate_world};

fn small_cfg(width: usize, height: usize) -> WorldGenConfig {
    WorldGenConfig::default().with_size(width, height)
}

#[test]
fn same_seed_same_world() {
    let cfg = small_cfg(900, 400);
    let a = generate_world(&cfg, 42);
    let b = generate_world(&cfg, 42);
    for y in 0..400 {
        for x in 0..900 {
            assert_eq!(a.grid.get(x, y), b.grid.get(x, y));
            assert_eq!(a.grid.get_bg(x, y), b.grid.get_bg(x, y));
        }
    }
    assert_eq!(a.layout.building_origins, b.layout.building_origins);
}

#[test]
fn different_seeds_differ_somewhere() {
    let cfg = small_cfg(300, 300);
    let a = generate_world(&cfg, 1);
    let b = generate_world(&cfg, 2);
    let differs = (0..300).any(|y| (0..300).any(|x| a.grid.get(x, y) != b.grid.get(x, y)));
    assert!(differs);
}

#[test]
fn last_row_is_boundary() {
    let cfg = small_cfg(128, 256);
    let w = generate_world(&cfg, 9);
    for x in 0..128 {
        assert_eq!(w.grid.get(x, 255), TileKind::CyberWall);
    }
}

#[test]
fn surface_line_is_concrete_and_sky_is_open() {
    let mut cfg = small_cfg(256, 300);
    cfg.city.chance = 0.0;
    let w = generate_world(&cfg, 5);
    for x in 0..256 {
        let g = ground_level(&cfg, x);
        assert_eq!(w.grid.get(x, g), TileKind::Concrete, "x={x}");
        assert_eq!(w.grid.get(x, g - 1), TileKind::Air, "x={x}");
        for d in 1..10 {
            let t = w.grid.get(x, g + d);
            assert!(matches!(t, TileKind::Concrete | TileKind::RustedMetal));
        }
    }
}

#[test]
fn deep_rock_uses_strata_kinds() {
    let mut cfg = small_cfg(200, 600);
    cfg.city.chance = 0.0;
    let w = generate_world(&cfg, 11);
    for y in 240..599 {
        for x in 0..200 {
            let t = w.grid.get(x, y);
            assert!(
                matches!(
                    t,
                    TileKind::RustedMetal
                        | TileKind::NeonOreBlue
                        | TileKind::NeonOrePink
                        | TileKind::CircuitScrap
                ),
                "({x},{y}) = {t:?}"
            );
        }
    }
}

#[test]
fn skyscrapers_have_frame_walls() {
    let mut cfg = small_cfg(800, 600);
    cfg.city.chance = 1.0;
    let w = generate_world(&cfg, 3);
    let origins = &w.layout.building_origins;
    assert!((3..=5).contains(&origins.len()));
    let first = origins[0];
    let ground = ground_level(&cfg, first);
    let plan = w.layout.columns[first as usize];
    let top = plan.building.map(|b| b.top).unwrap();
    assert!(ground - top >= 80);
    for y in top.max(0)..ground {
        assert_eq!(w.grid.get(first, y), TileKind::SkyscraperFrame);
    }
    // Interior cells are either floor bands or background windows
    let inner = first + 15;
    let owner = w.layout.columns[inner as usize].building.unwrap();
    let g = ground_level(&cfg, inner);
    for y in owner.top.max(0)..g {
        let fg = w.grid.get(inner, y);
        let bg = w.grid.get_bg(inner, y);
        assert!(
            fg == TileKind::SkyscraperFrame || bg == TileKind::BgWindow,
            "({inner},{y})"
        );
    }
}

#[test]
fn sewer_band_only_holds_sewer_tiles() {
    let cfg = small_cfg(64, 2000);
    let w = generate_world(&cfg, 17);
    let mut sludge = 0;
    for y in 1700..=1900 {
        for x in 0..64 {
            let t = w.grid.get(x, y);
            assert!(matches!(
                t,
                TileKind::SewerBrick | TileKind::PipeRusty | TileKind::Sludge | TileKind::Air
            ));
            if t == TileKind::Sludge {
                sludge += 1;
            }
        }
    }
    assert!(sludge > 0);
    assert_eq!(w.grid.get(10, 1750), TileKind::Air);
}

#[test]
fn short_world_skips_sewer() {
    let cfg = small_cfg(64, 500);
    let w = generate_world(&cfg, 1);
    assert_eq!(w.grid.count_kind(TileKind::SewerBrick), 0);
    assert_eq!(w.grid.count_kind(TileKind::Sludge), 0);
}
