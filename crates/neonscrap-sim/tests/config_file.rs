use neonscrap_sim::from_toml_str;

const SHIPPED: &str = include_str!("../../../config/neonscrap.toml");

#[test]
fn shipped_config_parses_to_the_defaults() {
    let cfg = from_toml_str(SHIPPED).expect("shipped config parses");
    assert_eq!(cfg.world.width, 10_000);
    assert_eq!(cfg.world.height, 5_000);
    assert_eq!(cfg.world.sewer.pipes.len(), 3);
    assert_eq!(cfg.physics.gravity, 0.5);
    assert_eq!(cfg.physics.vehicle_size, [70.0, 120.0]);
    assert_eq!(cfg.physics.fallout_damage, 9999);
    assert_eq!(cfg.interaction.reach, 200.0);
    assert_eq!(cfg.interaction.fire_interval_ms, 150.0);
    assert_eq!(cfg.vehicle.transition_rate, 0.05);
    assert_eq!(cfg.map.exploration_radius, 25);
    assert_eq!(cfg.lighting.cycle_ms, 900_000.0);
    assert_eq!(cfg.lighting.mask_downscale, 4);
}

#[test]
fn broken_config_is_an_error() {
    assert!(from_toml_str("[physics]\ngravity = \"heavy\"").is_err());
}

#[test]
fn shipped_config_with_bad_values_is_rejected() {
    let negative_cap = SHIPPED.replace("max_dt = 2.0", "max_dt = -1.0");
    assert!(from_toml_str(&negative_cap).is_err());
    let nan_chance = SHIPPED.replace("drill_spark_chance = 0.2", "drill_spark_chance = nan");
    assert!(from_toml_str(&nan_chance).is_err());
}
