use neonscrap_geom::Vec2;
use neonscrap_sim::actor::Actor;
use neonscrap_sim::config::PhysicsConfig;
use neonscrap_sim::physics::{MoveIntent, step_actor};
use neonscrap_tiles::TileKind;
use neonscrap_world::TileGrid;
use proptest::prelude::*;

const FLOOR_TOP: f32 = 20.0 * 32.0;

fn floor_grid() -> TileGrid {
    let mut g = TileGrid::new(40, 40);
    for x in 0..40 {
        g.set(x, 20, TileKind::Concrete);
    }
    g
}

fn intent_strategy() -> impl Strategy<Value = MoveIntent> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| MoveIntent {
        left,
        right,
        jump,
        ..Default::default()
    })
}

proptest! {
    #[test]
    fn walking_and_jumping_never_sinks_into_the_floor(
        x in 0.0f32..1200.0,
        intents in prop::collection::vec(intent_strategy(), 1..120),
    ) {
        let g = floor_grid();
        let cfg = PhysicsConfig::default();
        let mut a = Actor::new(Vec2::new(x, FLOOR_TOP - 40.01), Vec2::new(24.0, 40.0));
        for intent in &intents {
            let report = step_actor(&mut a, &g, intent, false, &cfg, 1.0);
            prop_assert!(a.pos.y + a.size.y <= FLOOR_TOP);
            prop_assert!(a.pos.x >= 0.0 && a.pos.x <= 40.0 * 32.0 - a.size.x);
            prop_assert_eq!(report.fall_damage, 0);
            prop_assert!(!report.fell_out);
        }
    }

    #[test]
    fn grounded_only_after_a_downward_hit(
        y in 100.0f32..590.0,
        vy in -5.0f32..20.0,
    ) {
        let g = floor_grid();
        let cfg = PhysicsConfig::default();
        let mut a = Actor::new(Vec2::new(300.0, y), Vec2::new(24.0, 40.0));
        a.vel.y = vy;
        let report = step_actor(&mut a, &g, &MoveIntent::default(), false, &cfg, 1.0);
        prop_assert_eq!(a.grounded, report.landed_at.is_some());
        if a.grounded {
            prop_assert!((a.pos.y + a.size.y - (FLOOR_TOP - 0.01)).abs() < 1e-3);
        }
    }
}
