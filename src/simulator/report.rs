//! Simulation report generation.

use super::config::{SimConfig, Strategy};
use super::runner::{saturated_rate, SimStats};
use crate::core::{GameError, GameState};
use serde::Serialize;

/// Cookie balance and rate at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistorySample {
    pub tick: u64,
    pub cookies: u64,
    pub rate: u64,
}

/// Final holdings for one catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedSummary {
    pub id: String,
    pub name: String,
    pub count: u64,
    pub first_bought_tick: Option<u64>,
}

/// Results of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub strategy: Strategy,
    pub ticks: u64,
    pub starting_cookies: u64,
    pub clicks_per_tick: u64,
    pub seed: Option<u64>,

    pub final_cookies: u64,
    pub final_rate: u64,

    // Cookie flow: final = starting + clicked + produced - spent
    pub cookies_clicked: u64,
    pub cookies_produced: u64,
    pub cookies_spent: u64,

    pub purchases: u64,
    /// Purchases rejected for lack of cookies
    pub warnings: u64,
    /// Set when the run ended early because the cookie count overflowed
    pub overflowed_at_tick: Option<u64>,

    pub owned: Vec<OwnedSummary>,
    pub history: Vec<HistorySample>,
}

impl SimReport {
    pub(super) fn build(
        config: &SimConfig,
        state: &GameState,
        stats: SimStats,
    ) -> Result<Self, GameError> {
        let owned = state
            .owned_quantities()
            .map(|(entry, count)| OwnedSummary {
                id: entry.id.to_string(),
                name: entry.name.to_string(),
                count,
                first_bought_tick: stats.first_bought.get(entry.id).copied(),
            })
            .collect();

        Ok(Self {
            strategy: config.strategy,
            ticks: config.ticks,
            starting_cookies: config.starting_cookies,
            clicks_per_tick: config.clicks_per_tick,
            seed: config.seed,
            final_cookies: state.cookies(),
            final_rate: saturated_rate(state)?,
            cookies_clicked: stats.cookies_clicked,
            cookies_produced: stats.cookies_produced,
            cookies_spent: stats.cookies_spent,
            purchases: stats.purchases,
            warnings: stats.warnings,
            overflowed_at_tick: stats.overflowed_at_tick,
            owned,
            history: stats.history,
        })
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Strategy: {:?}, {} ticks, {} clicks/tick\n\n",
            self.strategy, self.ticks, self.clicks_per_tick
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Starting Cookies:    {}\n", self.starting_cookies));
        report.push_str(&format!("  Final Cookies:       {}\n", self.final_cookies));
        report.push_str(&format!("  Final Rate:          {}/tick\n", self.final_rate));
        report.push_str(&format!("  Clicked:             {}\n", self.cookies_clicked));
        report.push_str(&format!("  Produced:            {}\n", self.cookies_produced));
        report.push_str(&format!("  Spent:               {}\n", self.cookies_spent));
        report.push_str(&format!("  Purchases:           {}\n", self.purchases));
        report.push_str(&format!("  Rejected Purchases:  {}\n", self.warnings));
        if let Some(tick) = self.overflowed_at_tick {
            report.push_str(&format!("  Overflowed at tick:  {} (run ended early)\n", tick));
        }
        report.push('\n');

        report.push_str("── ITEMS ────────────────────────────────────────────────────────\n");
        for item in &self.owned {
            let first = item
                .first_bought_tick
                .map(|tick| format!("first at tick {}", tick))
                .unwrap_or_else(|| "never bought".to_string());
            report.push_str(&format!(
                "  {:<10} {:>8}   ({})\n",
                item.name, item.count, first
            ));
        }

        if !self.history.is_empty() {
            report.push_str("\n── HISTORY ──────────────────────────────────────────────────────\n");
            report.push_str("  Tick        Cookies        Rate\n");
            for sample in &self.history {
                report.push_str(&format!(
                    "  {:<10} {:>8} {:>11}\n",
                    sample.tick, sample.cookies, sample.rate
                ));
            }
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
