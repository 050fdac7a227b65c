//! Shared primitive types used across the entire simulation.

/// A simulation tick. One tick = one invocation of the step operation,
/// covering `tick_seconds` of simulated elapsed time.
pub type Tick = u64;

/// Display identifier for a node. Four digits in practice; uniqueness
/// across a field is not guaranteed and not required.
pub type NodeId = u32;

/// Hour of day, 0–23.
pub type HourOfDay = u32;
