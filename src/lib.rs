//! Cookie Clicker - terminal incremental game library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod core;
pub mod input;
pub mod simulator;
pub mod utils;

pub use crate::core::{
    CatalogEntry, GameError, GameState, PurchaseOutcome, SharedGameState, TickResult, TickTimer,
    ITEMS,
};
