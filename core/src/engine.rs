//! The stepping operation: apply one weather sample to every node.
//!
//! RULES:
//!   - One tick is one synchronous pass over the node collection.
//!   - Node updates are independent; order is not observable.
//!   - A tick with no weather reading is a no-op, never an error.
//!   - Scheduling repeated ticks, and the cadence between them, belongs
//!     to the caller. The engine never reads the wall clock.

use crate::config::SimConfig;
use crate::node::Node;
use crate::types::HourOfDay;
use crate::weather::WeatherReading;

/// Stateless apart from the injected configuration.
#[derive(Debug, Clone)]
pub struct SimEngine {
    config: SimConfig,
}

impl SimEngine {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Advance every node one tick.
    ///
    /// A missing weather reading (failed acquisition upstream) makes
    /// the whole tick a no-op: no node is mutated and no error is
    /// raised; the field simply holds state for a tick it could not
    /// observe. Returns whether the tick was applied, so callers can
    /// count skipped ticks.
    pub fn step(
        &self,
        nodes: &mut [Node],
        weather: Option<&WeatherReading>,
        hour: HourOfDay,
    ) -> bool {
        let Some(reading) = weather else {
            log::debug!("tick skipped: no weather reading");
            return false;
        };

        for node in nodes.iter_mut() {
            node.update(reading, hour, &self.config);
        }

        log::debug!("tick applied to {} nodes at hour {hour}", nodes.len());
        true
    }
}
