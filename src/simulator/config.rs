//! Simulation configuration.

use crate::core::constants::{SIM_DEFAULT_SAMPLE_EVERY, SIM_DEFAULT_TICKS, STARTING_COOKIES};
use serde::Serialize;

/// How the simulated player spends cookies after each tick. Every strategy
/// makes at most one purchase attempt per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Never buys anything
    Idle,
    /// Buys the most expensive affordable item
    Greedy,
    /// Buys the cheapest affordable item
    Cheapest,
    /// Tries a random item, affordable or not
    Random,
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimConfig {
    /// Number of ticks to simulate
    pub ticks: u64,

    /// Cookie balance at tick 0
    pub starting_cookies: u64,

    /// Purchase strategy
    pub strategy: Strategy,

    /// Manual clicks applied before every tick
    pub clicks_per_tick: u64,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Record a history sample every N ticks (0 = only the final tick)
    pub sample_every: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: SIM_DEFAULT_TICKS,
            starting_cookies: STARTING_COOKIES,
            strategy: Strategy::Greedy,
            clicks_per_tick: 0,
            seed: None,
            sample_every: SIM_DEFAULT_SAMPLE_EVERY,
        }
    }
}

impl SimConfig {
    /// Quick config for a short deterministic run
    pub fn quick(strategy: Strategy, ticks: u64) -> Self {
        Self {
            ticks,
            strategy,
            seed: Some(0),
            ..Default::default()
        }
    }
}
