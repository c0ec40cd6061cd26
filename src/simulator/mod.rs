//! Headless balance simulator.
//!
//! Drives a [`GameState`](crate::core::GameState) through the same click,
//! tick and purchase operations the terminal game uses, without a terminal
//! or timer, and summarizes how the economy developed.

mod config;
mod report;
mod runner;

pub use config::{SimConfig, Strategy};
pub use report::{HistorySample, OwnedSummary, SimReport};
pub use runner::run_simulation;
