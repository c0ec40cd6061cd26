//! Thread-safe handle to a [`GameState`].
//!
//! The terminal game drives its state from a single loop and never needs
//! this. Callers that click, tick or buy from several threads share one
//! `SharedGameState`; each operation runs entirely under the lock, so a
//! purchase's affordability check and deduction cannot interleave with
//! another purchase.

use super::error::GameError;
use super::game_state::{GameState, PurchaseOutcome, TickResult};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
pub struct SharedGameState {
    inner: Arc<Mutex<GameState>>,
}

impl SharedGameState {
    pub fn new(state: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn increment_by_one(&self) -> Result<u64, GameError> {
        Ok(self.lock()?.increment_by_one())
    }

    pub fn advance_tick(&self) -> Result<TickResult, GameError> {
        self.lock()?.advance_tick()
    }

    pub fn purchase(&self, item_id: &str) -> Result<PurchaseOutcome, GameError> {
        self.lock()?.purchase(item_id)
    }

    pub fn current_rate(&self) -> Result<u64, GameError> {
        self.lock()?.current_rate()
    }

    /// Runs `f` against a consistent view of the state.
    pub fn read<R>(&self, f: impl FnOnce(&GameState) -> R) -> Result<R, GameError> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Result<GameState, GameError> {
        self.read(GameState::clone)
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameState>, GameError> {
        self.inner.lock().map_err(|_| GameError::StatePoisoned)
    }
}
