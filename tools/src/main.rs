//! field-runner: headless driver for the solar sensor-field simulation.
//!
//! Owns everything the core refuses to: the tick cadence, the weather
//! source, and the current-hour supply. The weather feed here is
//! synthetic, with a configurable dropout rate so the hold-state path
//! gets exercised; a production deployment would swap in a real
//! collector behind the same `Option<WeatherReading>` seam.
//!
//! Usage:
//!   field-runner --seed 12345 --ticks 5000
//!   field-runner --config field.json --start-hour 9 --dropout 0.05
//!   field-runner --wall-clock --realtime

use anyhow::Result;
use chrono::Timelike;
use solarfield_core::{
    clock::SimClock,
    config::SimConfig,
    engine::SimEngine,
    field,
    node::{Node, NodeSnapshot},
    rng::{NodeRng, RngBank},
    types::HourOfDay,
    weather::WeatherReading,
};
use std::env;

/// What `--json` emits: the full display surface plus run counters.
#[derive(serde::Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    ticks_skipped: u64,
    final_hour: HourOfDay,
    nodes: Vec<NodeSnapshot>,
}

/// Stream index for the synthetic feed, far above any node stream.
const FEED_STREAM: u64 = 1 << 32;

/// Synthetic observation source. Cloud cover random-walks; temperature
/// and humidity follow a flat diurnal arc.
struct WeatherFeed {
    rng: NodeRng,
    dropout: f64,
    cloud_pct: f64,
}

impl WeatherFeed {
    fn new(seed: u64, dropout: f64) -> Self {
        Self {
            rng: NodeRng::derive(seed, FEED_STREAM),
            dropout,
            cloud_pct: 30.0,
        }
    }

    /// One observation, or None to model a failed fetch.
    fn next(&mut self, hour: HourOfDay) -> Option<WeatherReading> {
        if self.rng.next_f64() < self.dropout {
            return None;
        }

        self.cloud_pct = (self.cloud_pct + self.rng.uniform(-8.0, 8.0)).clamp(0.0, 100.0);
        let arc = diurnal(hour);
        let temperature_c = 22.0 + 6.0 * arc + self.rng.uniform(-1.0, 1.0);
        let humidity_pct = (55.0 - 10.0 * arc + self.rng.uniform(-5.0, 5.0)).clamp(5.0, 100.0);

        WeatherReading::new(temperature_c, humidity_pct, self.cloud_pct, 6, 19).ok()
    }
}

/// +1 mid-afternoon, -1 in the small hours.
fn diurnal(hour: HourOfDay) -> f64 {
    ((hour as f64 - 14.0) * std::f64::consts::PI / 12.0).cos()
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ticks = parse_arg(&args, "--ticks", 720u64);
    let start_hour = parse_arg(&args, "--start-hour", 8u32);
    let dropout = parse_arg(&args, "--dropout", 0.02f64);
    let wall_clock = args.iter().any(|a| a == "--wall-clock");
    let realtime = args.iter().any(|a| a == "--realtime");
    let json_out = args.iter().any(|a| a == "--json");
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str());

    let config = match config_path {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    println!("solarfield — field-runner");
    println!("  seed:       {seed}");
    println!("  ticks:      {ticks}");
    println!("  tick_secs:  {}", config.tick_seconds);
    println!("  start_hour: {start_hour}");
    println!("  dropout:    {dropout}");
    println!();

    let bank = RngBank::new(seed);
    let mut nodes = field::spawn_nodes(&config, &bank);
    println!("Nodes: {}", nodes.len());

    let engine = SimEngine::new(config.clone());
    let mut clock = SimClock::new(start_hour, config.tick_seconds);
    let mut feed = WeatherFeed::new(seed, dropout);
    let mut skipped = 0u64;

    for _ in 0..ticks {
        let tick = clock.advance();
        let hour = if wall_clock {
            chrono::Local::now().hour()
        } else {
            clock.hour_of_day()
        };

        let reading = feed.next(hour);
        if !engine.step(&mut nodes, reading.as_ref(), hour) {
            skipped += 1;
            log::warn!("tick {tick}: weather unavailable, field holds state");
        }

        if realtime {
            std::thread::sleep(std::time::Duration::from_secs_f64(config.tick_seconds));
        }
    }

    if json_out {
        let summary = RunSummary {
            seed,
            ticks,
            ticks_skipped: skipped,
            final_hour: clock.hour_of_day(),
            nodes: nodes.iter().map(Node::snapshot).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&nodes, ticks, skipped, &clock);
    }

    Ok(())
}

fn print_summary(nodes: &[Node], ticks: u64, skipped: u64, clock: &SimClock) {
    println!();
    println!("=== RUN SUMMARY ===");
    println!("  ticks run:     {ticks}");
    println!("  ticks skipped: {skipped}");
    println!("  sim hour:      {:02}:00", clock.hour_of_day());
    println!("  nodes:         {}", nodes.len());
    println!();
    println!("  id     pos              state     battery   temp     hum      solar");

    for node in nodes {
        let snap = node.snapshot();
        match snap.data {
            Some(d) => println!(
                "  {:<5}  ({:>5.1},{:>5.1})   {:<8}  {:>5.1}%   {:>5.1}C   {:>5.1}%   {:>6.1}W",
                snap.id,
                snap.x,
                snap.y,
                node.state().label(),
                d.battery_pct,
                d.temperature_c,
                d.humidity_pct,
                d.solar_w
            ),
            None => println!(
                "  {:<5}  ({:>5.1},{:>5.1})   {:<8}  {:>5.1}%   (no readings yet)",
                snap.id,
                snap.x,
                snap.y,
                node.state().label(),
                snap.battery_pct
            ),
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
