//! World clock for simulation-day tracking
//!
//! Requirement rules gate skills on a real-valued day number, so the clock
//! exposes fractional days (tick / ticks_per_day) rather than whole days.

use crate::core::types::SimDay;
use serde::{Deserialize, Serialize};

/// WorldClock tracks simulation time with fractional-day granularity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldClock {
    tick: u64,
    ticks_per_day: u64,
}

impl WorldClock {
    pub fn new(ticks_per_day: u64) -> Self {
        Self {
            tick: 0,
            ticks_per_day,
        }
    }

    /// Create a clock already positioned at the given day
    pub fn at_day(day: SimDay, ticks_per_day: u64) -> Self {
        Self {
            tick: (day * ticks_per_day as f64) as u64,
            ticks_per_day,
        }
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }

    pub fn advance_by(&mut self, ticks: u64) {
        self.tick += ticks;
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Current simulation day as a real number (fractional days allowed)
    pub fn current_day(&self) -> SimDay {
        self.tick as f64 / self.ticks_per_day as f64
    }

    pub fn ticks_per_day(&self) -> u64 {
        self.ticks_per_day
    }
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::new(1000)
    }
}
