//! Per-node energy/state simulation for a field of solar-powered
//! environmental sensor nodes.
//!
//! One externally supplied weather sample per tick drives each node's
//! power consumption, solar recharge, derived sensor readings, and
//! operational-state classification. Weather acquisition, map
//! rendering, and the loop that schedules repeated ticks all live
//! outside this crate; the core exposes a single-step engine, a node
//! factory, and a strict weather-input contract.

pub mod battery;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod node;
pub mod rng;
pub mod types;
pub mod weather;

pub use battery::Battery;
pub use clock::SimClock;
pub use config::SimConfig;
pub use engine::SimEngine;
pub use error::{SimError, SimResult};
pub use node::{Node, NodeSnapshot, NodeState, SensorData};
pub use rng::{NodeRng, RngBank};
pub use weather::WeatherReading;
