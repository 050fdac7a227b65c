//! Field factory tests: layout bounds and reproducibility.

use solarfield_core::config::SimConfig;
use solarfield_core::field;
use solarfield_core::rng::RngBank;

#[test]
fn node_count_stays_in_the_configured_range() {
    let cfg = SimConfig::default();

    for seed in 0..100u64 {
        let nodes = field::spawn_nodes(&cfg, &RngBank::new(seed));
        let count = nodes.len() as u64;
        assert!(
            (cfg.field.min_nodes..=cfg.field.max_nodes).contains(&count),
            "Seed {seed} spawned {count} nodes"
        );
    }
}

#[test]
fn nodes_land_inside_the_placement_rectangle() {
    let cfg = SimConfig::default();

    for seed in 0..50u64 {
        for node in field::spawn_nodes(&cfg, &RngBank::new(seed)) {
            assert!(
                node.x >= cfg.field.x_min && node.x <= cfg.field.x_max,
                "Seed {seed} node {} at x={}",
                node.id,
                node.x
            );
            assert!(
                node.y >= cfg.field.y_min && node.y <= cfg.field.y_max,
                "Seed {seed} node {} at y={}",
                node.id,
                node.y
            );
        }
    }
}

#[test]
fn ids_are_four_digit_and_cloud_rolls_in_band() {
    let cfg = SimConfig::default();

    for seed in 0..50u64 {
        for node in field::spawn_nodes(&cfg, &RngBank::new(seed)) {
            assert!((1000..=9999).contains(&node.id));
            assert!((0.0..=100.0).contains(&node.cloud_pct));
        }
    }
}

#[test]
fn batteries_start_in_the_initial_charge_band() {
    let cfg = SimConfig::default();

    for seed in 0..50u64 {
        for node in field::spawn_nodes(&cfg, &RngBank::new(seed)) {
            let pct = node.battery.percent();
            assert!(
                (35.0..=85.0).contains(&pct),
                "Seed {seed} node {} started at {pct:.1}%",
                node.id
            );
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_layout() {
    let cfg = SimConfig::default();
    let a = field::spawn_nodes(&cfg, &RngBank::new(1234));
    let b = field::spawn_nodes(&cfg, &RngBank::new(1234));

    assert_eq!(a.len(), b.len());
    for (left, right) in a.iter().zip(b.iter()) {
        assert_eq!(left.id, right.id);
        assert_eq!(left.x, right.x);
        assert_eq!(left.y, right.y);
        assert_eq!(left.cloud_pct, right.cloud_pct);
        assert_eq!(left.battery.energy_wh(), right.battery.energy_wh());
    }
}
