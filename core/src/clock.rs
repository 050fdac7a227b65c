//! Caller-side clock: tick counter plus simulated hour-of-day.
//!
//! The core never reads the wall clock. The day/night cutover takes the
//! current hour as an explicit input; a runner either derives it from
//! this clock (each tick covers `tick_seconds` of simulated time) or
//! supplies the real local hour itself.

use crate::types::{HourOfDay, Tick};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimClock {
    pub current_tick: Tick,
    tick_seconds: f64,
    start_second_of_day: u64,
}

impl SimClock {
    /// Clock starting at `start_hour`:00, advancing `tick_seconds` of
    /// simulated time per tick.
    pub fn new(start_hour: HourOfDay, tick_seconds: f64) -> Self {
        Self {
            current_tick: 0,
            tick_seconds,
            start_second_of_day: start_hour as u64 * 3600,
        }
    }

    /// Advance one tick. Returns the new tick number.
    pub fn advance(&mut self) -> Tick {
        self.current_tick += 1;
        self.current_tick
    }

    /// Simulated hour-of-day at the current tick, wrapping at midnight.
    pub fn hour_of_day(&self) -> HourOfDay {
        let elapsed = (self.current_tick as f64 * self.tick_seconds) as u64;
        (((self.start_second_of_day + elapsed) / 3600) % 24) as HourOfDay
    }
}
