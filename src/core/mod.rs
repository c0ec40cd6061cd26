//! Core game state and logic.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod shared;
pub mod tick;

pub use catalog::{CatalogEntry, ITEMS};
pub use constants::*;
pub use error::GameError;
pub use game_state::{GameState, PurchaseOutcome, TickResult};
pub use shared::SharedGameState;
pub use tick::TickTimer;
