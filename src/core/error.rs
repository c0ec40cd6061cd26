//! Error types for the game core.
//!
//! Only programming errors are represented here. Running out of cookies is
//! not an error: it is reported as
//! [`PurchaseOutcome::InsufficientFunds`](super::game_state::PurchaseOutcome).

/// Errors raised by [`GameState`](super::game_state::GameState) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A purchase named an item that is not in the catalog.
    #[error("item not found in catalog: {0}")]
    ItemNotFound(String),

    /// The owned-quantity map holds an id the catalog does not know.
    #[error("owned item has no catalog entry: {0}")]
    UnknownOwnedItem(String),

    /// Cookie arithmetic overflowed `u64`.
    #[error("cookie count overflow")]
    Overflow,

    /// Another thread panicked while holding the shared state lock.
    #[error("game state lock poisoned")]
    StatePoisoned,
}
