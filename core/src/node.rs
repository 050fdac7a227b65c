//! A single sensor node: identity, position, battery, derived readings,
//! and the per-tick update rule.
//!
//! RULE: all randomness in the update comes from the node's own stream,
//! and the draws happen in a fixed order (temperature, humidity,
//! microcontroller current, sensor current, then, in daylight only,
//! panel output and efficiency). Reordering the draws changes every
//! trajectory for a given seed.

use crate::battery::Battery;
use crate::config::{SimConfig, StateThresholds};
use crate::rng::NodeRng;
use crate::types::{HourOfDay, NodeId};
use crate::weather::WeatherReading;
use serde::{Deserialize, Serialize};

/// Coarse health classification derived solely from battery percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeState {
    Normal,
    Warning,
    Critical,
}

impl NodeState {
    /// Band a battery percent. Boundary values fall into the better
    /// band: exactly `critical_pct` is WARNING, exactly `warning_pct`
    /// is NORMAL.
    pub fn classify(percent: f64, thresholds: &StateThresholds) -> Self {
        if percent < thresholds.critical_pct {
            NodeState::Critical
        } else if percent < thresholds.warning_pct {
            NodeState::Warning
        } else {
            NodeState::Normal
        }
    }

    /// Marker color token for the map layer.
    pub fn color(&self) -> &'static str {
        match self {
            NodeState::Critical => "red",
            NodeState::Warning => "yellow",
            NodeState::Normal => "green",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NodeState::Critical => "CRITICAL",
            NodeState::Warning => "WARNING",
            NodeState::Normal => "NORMAL",
        }
    }
}

/// Latest derived readings. Replaced wholesale every update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorData {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub solar_w: f64,
    pub battery_pct: f64,
}

/// Everything the display layer may read, in one serializable view.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub state: NodeState,
    pub color: &'static str,
    pub battery_pct: f64,
    pub data: Option<SensorData>,
}

pub struct Node {
    pub id: NodeId,
    /// Position in the coordinate space of the backing map image.
    pub x: f64,
    pub y: f64,
    pub battery: Battery,
    /// Static per-node cloud roll, set at spawn. Never read by the
    /// update rule, which uses the weather reading's cloud field
    /// instead; kept for forward compatibility.
    pub cloud_pct: f64,
    state: NodeState,
    data: Option<SensorData>,
    rng: NodeRng,
}

impl Node {
    /// Nodes normally come from `field::spawn_nodes`, which derives the
    /// battery and stream from the field's master seed.
    pub fn new(
        id: NodeId,
        x: f64,
        y: f64,
        cloud_pct: f64,
        battery: Battery,
        rng: NodeRng,
    ) -> Self {
        Self {
            id,
            x,
            y,
            battery,
            cloud_pct,
            state: NodeState::Normal,
            data: None,
            rng,
        }
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Empty until the first update.
    pub fn data(&self) -> Option<&SensorData> {
        self.data.as_ref()
    }

    /// Side-effect-free; idempotent between updates.
    pub fn color(&self) -> &'static str {
        self.state.color()
    }

    /// Apply one weather sample for one tick.
    ///
    /// In order: derive jittered temperature and humidity; drain the
    /// electronics load for `tick_seconds`; add solar recharge if
    /// `hour` is within [sunrise, sunset]; reclassify on the resulting
    /// battery percent; replace `data` wholesale. `hour` is supplied by
    /// the caller (production runners default it to the local clock).
    pub fn update(&mut self, weather: &WeatherReading, hour: HourOfDay, cfg: &SimConfig) {
        let temperature_c = weather.temperature_c
            + self
                .rng
                .uniform(-cfg.jitter.temperature_c, cfg.jitter.temperature_c);
        let humidity_pct = weather.humidity_pct
            + self
                .rng
                .uniform(-cfg.jitter.humidity_pct, cfg.jitter.humidity_pct);

        // Electronics load over the tick, watts → watt-hours.
        let esp_w = cfg.power.supply_voltage_v
            * self
                .rng
                .uniform(cfg.power.esp_current_min_a, cfg.power.esp_current_max_a);
        let sensor_w = cfg.power.sensor_bus_voltage_v
            * self.rng.uniform(
                cfg.power.sensor_current_min_a,
                cfg.power.sensor_current_max_a,
            );
        self.battery
            .consume((esp_w + sensor_w) * cfg.tick_seconds / 3600.0);

        // Outside [sunrise, sunset] the panel is dark and no solar
        // draws are consumed from the stream.
        let solar_w = if hour < weather.sunrise_hour || hour > weather.sunset_hour {
            0.0
        } else {
            self.rng
                .uniform(cfg.solar.base_output_min_w, cfg.solar.base_output_max_w)
                * (1.0 - weather.cloud_pct / 100.0)
                * self
                    .rng
                    .uniform(cfg.solar.efficiency_min, cfg.solar.efficiency_max)
        };
        self.battery.charge(solar_w * cfg.tick_seconds / 3600.0);

        let battery_pct = self.battery.percent();
        let next = NodeState::classify(battery_pct, &cfg.thresholds);
        if next != self.state {
            log::debug!(
                "node {}: {} -> {} at {:.1}%",
                self.id,
                self.state.label(),
                next.label(),
                battery_pct
            );
        }
        self.state = next;

        self.data = Some(SensorData {
            temperature_c,
            humidity_pct,
            solar_w,
            battery_pct,
        });
    }

    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot {
            id: self.id,
            x: self.x,
            y: self.y,
            state: self.state,
            color: self.state.color(),
            battery_pct: self.battery.percent(),
            data: self.data,
        }
    }
}
