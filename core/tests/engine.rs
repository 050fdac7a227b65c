//! Engine stepping tests: the no-weather no-op and the full pass.

use solarfield_core::config::SimConfig;
use solarfield_core::engine::SimEngine;
use solarfield_core::field;
use solarfield_core::rng::RngBank;
use solarfield_core::weather::WeatherReading;

fn mild_day() -> WeatherReading {
    WeatherReading::new(26.0, 55.0, 40.0, 6, 19).unwrap()
}

#[test]
fn missing_weather_leaves_every_node_untouched() {
    let cfg = SimConfig::default();
    let engine = SimEngine::new(cfg.clone());
    let mut nodes = field::spawn_nodes(&cfg, &RngBank::new(42));

    let before: Vec<(f64, _)> = nodes
        .iter()
        .map(|n| (n.battery.energy_wh(), n.state()))
        .collect();

    let applied = engine.step(&mut nodes, None, 12);

    assert!(!applied, "A weatherless tick must report as skipped");
    for (node, (energy, state)) in nodes.iter().zip(&before) {
        assert_eq!(node.battery.energy_wh(), *energy);
        assert_eq!(node.state(), *state);
        assert!(node.data().is_none(), "No-op tick must not produce readings");
    }
}

#[test]
fn step_applies_the_reading_to_every_node() {
    let cfg = SimConfig::default();
    let engine = SimEngine::new(cfg.clone());
    let mut nodes = field::spawn_nodes(&cfg, &RngBank::new(7));
    let weather = mild_day();

    let applied = engine.step(&mut nodes, Some(&weather), 12);

    assert!(applied);
    for node in &nodes {
        let data = node.data().expect("every node gets a reading");
        assert_eq!(data.battery_pct, node.battery.percent());
    }
}

#[test]
fn skipped_ticks_do_not_disturb_the_trajectory() {
    // A None tick between two real ticks must hold state steady and
    // consume nothing from any stream.
    let cfg = SimConfig::default();
    let engine = SimEngine::new(cfg.clone());
    let weather = mild_day();

    let mut straight = field::spawn_nodes(&cfg, &RngBank::new(99));
    engine.step(&mut straight, Some(&weather), 10);

    let mut interrupted = field::spawn_nodes(&cfg, &RngBank::new(99));
    engine.step(&mut interrupted, None, 10);
    engine.step(&mut interrupted, Some(&weather), 10);

    for (a, b) in straight.iter().zip(interrupted.iter()) {
        assert_eq!(a.battery.energy_wh(), b.battery.energy_wh());
        assert_eq!(a.data(), b.data());
    }
}
