//! Bounded energy reservoir.

use crate::config::BatteryConfig;
use crate::rng::NodeRng;
use serde::{Deserialize, Serialize};

/// Invariant: `0 ≤ energy_wh ≤ capacity_wh` at all times. Both
/// mutations clamp rather than reject; an out-of-range delta is not an
/// error. Negative amounts are unsupported input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    capacity_wh: f64,
    energy_wh: f64,
}

impl Battery {
    /// Fresh battery with a uniform initial charge in the configured
    /// fraction band of capacity.
    pub fn spawn(cfg: &BatteryConfig, rng: &mut NodeRng) -> Self {
        let energy_wh = rng.uniform(
            cfg.initial_charge_min_frac * cfg.capacity_wh,
            cfg.initial_charge_max_frac * cfg.capacity_wh,
        );
        Self {
            capacity_wh: cfg.capacity_wh,
            energy_wh,
        }
    }

    /// Battery at an exact charge level, clamped into bounds. Used by
    /// tests and tooling that need a known starting point.
    pub fn with_energy(capacity_wh: f64, energy_wh: f64) -> Self {
        Self {
            capacity_wh,
            energy_wh: energy_wh.clamp(0.0, capacity_wh),
        }
    }

    pub fn consume(&mut self, amount_wh: f64) {
        self.energy_wh = (self.energy_wh - amount_wh).max(0.0);
    }

    pub fn charge(&mut self, amount_wh: f64) {
        self.energy_wh = (self.energy_wh + amount_wh).min(self.capacity_wh);
    }

    /// `100 · energy / capacity`, in [0, 100].
    pub fn percent(&self) -> f64 {
        self.energy_wh / self.capacity_wh * 100.0
    }

    pub fn energy_wh(&self) -> f64 {
        self.energy_wh
    }

    pub fn capacity_wh(&self) -> f64 {
        self.capacity_wh
    }
}
