//! Simulation configuration.
//!
//! Every numeric policy knob is an explicit, injectable field rather
//! than a module-level constant, so two runs with the same config and
//! seed agree exactly and tests can pin any band to a point value.
//!
//! `Default` is the production model; `load` reads a JSON file where
//! any omitted section falls back to those defaults.

use serde::{Deserialize, Serialize};

/// Battery sizing and initial-charge policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// Capacity in watt-hour-like units.
    pub capacity_wh: f64,
    /// Initial charge is drawn uniformly from this fraction band of capacity.
    pub initial_charge_min_frac: f64,
    pub initial_charge_max_frac: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_wh:             1000.0,
            initial_charge_min_frac: 0.35,
            initial_charge_max_frac: 0.85,
        }
    }
}

/// Per-tick electronics load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    /// Microcontroller supply voltage (V).
    pub supply_voltage_v: f64,
    /// Sensor bus voltage (V).
    pub sensor_bus_voltage_v: f64,
    /// Microcontroller current-draw band (A).
    pub esp_current_min_a: f64,
    pub esp_current_max_a: f64,
    /// Sensor current-draw band (A).
    pub sensor_current_min_a: f64,
    pub sensor_current_max_a: f64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            supply_voltage_v:     3.3,
            sensor_bus_voltage_v: 5.0,
            esp_current_min_a:    0.15,
            esp_current_max_a:    0.35,
            sensor_current_min_a: 0.002,
            sensor_current_max_a: 0.005,
        }
    }
}

/// Solar recharge model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarConfig {
    /// Instantaneous panel-output band before attenuation (W).
    pub base_output_min_w: f64,
    pub base_output_max_w: f64,
    /// Residual efficiency band (dust, angle, shading).
    pub efficiency_min: f64,
    pub efficiency_max: f64,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            base_output_min_w: 250.0,
            base_output_max_w: 700.0,
            efficiency_min:    0.05,
            efficiency_max:    0.18,
        }
    }
}

/// Per-node sensor variance around the shared weather sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterConfig {
    /// Temperature jitter half-width (± °C).
    pub temperature_c: f64,
    /// Humidity jitter half-width (± %).
    pub humidity_pct: f64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            temperature_c: 2.0,
            humidity_pct:  6.0,
        }
    }
}

/// Battery-percent bands for the operational state.
/// Boundary values fall into the better band: a node at exactly
/// `critical_pct` is WARNING, at exactly `warning_pct` is NORMAL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateThresholds {
    /// Below this percent the node is CRITICAL.
    pub critical_pct: f64,
    /// Below this percent (and at or above critical) the node is WARNING.
    pub warning_pct: f64,
}

impl Default for StateThresholds {
    fn default() -> Self {
        Self {
            critical_pct: 20.0,
            warning_pct:  50.0,
        }
    }
}

/// Field layout: how many nodes, and where in map-pixel space they may land.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub min_nodes: u64,
    pub max_nodes: u64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            min_nodes: 6,
            max_nodes: 10,
            x_min: 50.0,
            x_max: 700.0,
            y_min: 50.0,
            y_max: 500.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Simulated seconds covered by one tick.
    pub tick_seconds: f64,
    pub battery:    BatteryConfig,
    pub power:      PowerConfig,
    pub solar:      SolarConfig,
    pub jitter:     JitterConfig,
    pub thresholds: StateThresholds,
    pub field:      FieldConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 5.0,
            battery:    BatteryConfig::default(),
            power:      PowerConfig::default(),
            solar:      SolarConfig::default(),
            jitter:     JitterConfig::default(),
            thresholds: StateThresholds::default(),
            field:      FieldConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load from a JSON file. Omitted sections keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Ok(serde_json::from_str(&content)?)
    }
}
