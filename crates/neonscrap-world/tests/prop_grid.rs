use neonscrap_tiles::TileKind;
use neonscrap_world::TileGrid;
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = TileKind> {
    (0u8..TileKind::COUNT as u8).prop_map(|v| TileKind::from_u8(v).unwrap())
}

proptest! {
    // Any read outside the grid yields the boundary kind
    #[test]
    fn oob_reads_are_boundary(w in 1usize..40, h in 1usize..40, x in -100i32..100, y in -100i32..100) {
        let g = TileGrid::new(w, h);
        let inside = x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h;
        let expect = if inside { TileKind::Air } else { TileKind::CyberWall };
        prop_assert_eq!(g.get(x, y), expect);
        prop_assert_eq!(g.get_bg(x, y), expect);
    }

    // Writes outside the grid never change any in-bounds cell
    #[test]
    fn oob_writes_are_noops(w in 1usize..24, h in 1usize..24, x in -50i32..50, y in -50i32..50, k in arb_kind()) {
        let mut g = TileGrid::new(w, h);
        prop_assume!(!g.in_bounds(x, y));
        g.set(x, y, k);
        g.set_bg(x, y, k);
        for cy in 0..h as i32 {
            for cx in 0..w as i32 {
                prop_assert_eq!(g.get(cx, cy), TileKind::Air);
                prop_assert_eq!(g.get_bg(cx, cy), TileKind::Air);
            }
        }
    }

    #[test]
    fn write_then_read(w in 1usize..24, h in 1usize..24, x in 0i32..24, y in 0i32..24, k in arb_kind()) {
        let mut g = TileGrid::new(w, h);
        prop_assume!(g.in_bounds(x, y));
        g.set(x, y, k);
        prop_assert_eq!(g.get(x, y), k);
        prop_assert_eq!(g.get_bg(x, y), TileKind::Air);
    }

    // Revealing never clears previously visited cells
    #[test]
    fn fog_is_monotonic(centers in proptest::collection::vec((0i32..64, 0i32..64, 0i32..30), 1..8)) {
        let mut g = TileGrid::new(64, 64);
        let mut prev = 0;
        for (cx, cy, r) in centers {
            g.reveal_around(cx, cy, r);
            let now = g.fog().count_visited();
            prop_assert!(now >= prev);
            prop_assert!(g.is_visited(cx, cy));
            prev = now;
        }
    }
}
