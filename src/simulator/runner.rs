//! Simulation runner.
//!
//! Uses the real [`GameState`] operations, so simulated balances follow the
//! same rules as the interactive game. Statistics are tracked externally
//! from the tick and purchase results.

use super::config::{SimConfig, Strategy};
use super::report::{HistorySample, SimReport};
use crate::core::catalog::{self, ITEMS};
use crate::core::{GameError, GameState, PurchaseOutcome};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Run the simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, GameError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut state = GameState::with_catalog(&ITEMS, config.starting_cookies);
    let mut stats = SimStats::default();

    for tick in 1..=config.ticks {
        // Clicks saturate near u64::MAX, so count what actually landed
        let before_clicks = state.cookies();
        for _ in 0..config.clicks_per_tick {
            state.increment_by_one();
        }
        stats.cookies_clicked = stats
            .cookies_clicked
            .saturating_add(state.cookies() - before_clicks);

        // Very large balances can outgrow u64; end the run there
        let result = match state.advance_tick() {
            Ok(result) => result,
            Err(GameError::Overflow) => {
                log::warn!("Cookie count overflowed at tick {}", tick);
                stats.overflowed_at_tick = Some(tick);
                break;
            }
            Err(e) => return Err(e),
        };
        stats.cookies_produced = stats.cookies_produced.saturating_add(result.rate);

        spend(&mut state, config.strategy, &mut rng, tick, &mut stats)?;

        let sample_due = config.sample_every > 0 && tick % config.sample_every == 0;
        if sample_due || tick == config.ticks {
            stats.history.push(HistorySample {
                tick,
                cookies: state.cookies(),
                rate: saturated_rate(&state)?,
            });
        }
    }

    log::debug!(
        "Simulated {} ticks with {:?}: {} cookies, {} purchases",
        config.ticks,
        config.strategy,
        state.cookies(),
        stats.purchases
    );

    SimReport::build(config, &state, stats)
}

/// Current rate, pinned to `u64::MAX` once it no longer fits.
pub(super) fn saturated_rate(state: &GameState) -> Result<u64, GameError> {
    match state.current_rate() {
        Err(GameError::Overflow) => Ok(u64::MAX),
        other => other,
    }
}

/// Tracks statistics during a simulation run.
#[derive(Debug, Default)]
pub(super) struct SimStats {
    pub cookies_clicked: u64,
    pub cookies_produced: u64,
    pub cookies_spent: u64,
    pub purchases: u64,
    pub warnings: u64,
    pub overflowed_at_tick: Option<u64>,
    /// Tick of the first purchase of each item id
    pub first_bought: HashMap<&'static str, u64>,
    pub history: Vec<HistorySample>,
}

impl SimStats {
    fn record(&mut self, tick: u64, outcome: PurchaseOutcome) {
        match outcome {
            PurchaseOutcome::Purchased { item, .. } => {
                self.purchases += 1;
                self.cookies_spent = self.cookies_spent.saturating_add(item.cost);
                self.first_bought.entry(item.id).or_insert(tick);
            }
            PurchaseOutcome::InsufficientFunds { .. } => {
                self.warnings += 1;
            }
        }
    }
}

fn spend(
    state: &mut GameState,
    strategy: Strategy,
    rng: &mut impl Rng,
    tick: u64,
    stats: &mut SimStats,
) -> Result<(), GameError> {
    match strategy {
        Strategy::Idle => {}
        Strategy::Greedy => {
            if let Some(entry) = catalog::most_expensive_affordable(state.catalog(), state.cookies())
            {
                stats.record(tick, state.purchase(entry.id)?);
            }
        }
        Strategy::Cheapest => {
            if let Some(entry) = catalog::cheapest_affordable(state.catalog(), state.cookies()) {
                stats.record(tick, state.purchase(entry.id)?);
            }
        }
        Strategy::Random => {
            let items = state.catalog();
            if !items.is_empty() {
                let entry = &items[rng.gen_range(0..items.len())];
                stats.record(tick, state.purchase(entry.id)?);
            }
        }
    }
    Ok(())
}
