use super::catalog::{self, CatalogEntry, ITEMS};
use super::constants::{GAME_TITLE, STARTING_COOKIES};
use super::error::GameError;
use serde::Serialize;
use std::collections::HashMap;

/// What a single tick did to the cookie count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickResult {
    /// Cookies produced this tick (the rate in effect)
    pub rate: u64,
    /// Cookie count after the tick
    pub cookies: u64,
}

/// Result of a purchase attempt that did not hit a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Cost was deducted and one unit added.
    Purchased {
        item: CatalogEntry,
        /// Units owned after the purchase
        owned: u64,
        /// Cookies left after paying
        cookies: u64,
    },
    /// Not enough cookies. Nothing changed; the player should be warned.
    InsufficientFunds { item: CatalogEntry, cookies: u64 },
}

impl PurchaseOutcome {
    pub fn is_purchased(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased { .. })
    }

    pub fn item(&self) -> &CatalogEntry {
        match self {
            PurchaseOutcome::Purchased { item, .. } => item,
            PurchaseOutcome::InsufficientFunds { item, .. } => item,
        }
    }
}

/// The whole mutable state of a session: the cookie balance and how many of
/// each catalog item the player owns.
///
/// `owned` always holds exactly one entry per catalog item. Every constructor
/// enforces this, and only [`GameState::purchase`] changes a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    cookies: u64,
    owned: HashMap<&'static str, u64>,
    catalog: &'static [CatalogEntry],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// New session over the reference catalog with the starting balance.
    pub fn new() -> Self {
        Self::with_catalog(&ITEMS, STARTING_COOKIES)
    }

    /// New session over any static catalog, nothing owned.
    pub fn with_catalog(catalog: &'static [CatalogEntry], cookies: u64) -> Self {
        Self {
            cookies,
            owned: catalog.iter().map(|entry| (entry.id, 0)).collect(),
            catalog,
        }
    }

    /// Rebuilds a state from explicit values. Catalog items missing from
    /// `owned` start at zero; ids the catalog does not know are rejected.
    pub fn from_parts<I, S>(
        catalog: &'static [CatalogEntry],
        cookies: u64,
        owned: I,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut state = Self::with_catalog(catalog, cookies);
        for (id, count) in owned {
            let id = id.as_ref();
            let entry = catalog::find(catalog, id)
                .ok_or_else(|| GameError::UnknownOwnedItem(id.to_string()))?;
            state.owned.insert(entry.id, count);
        }
        Ok(state)
    }

    pub fn cookies(&self) -> u64 {
        self.cookies
    }

    pub fn catalog(&self) -> &'static [CatalogEntry] {
        self.catalog
    }

    /// Units owned of `item_id`, or `None` for ids outside the catalog.
    pub fn owned(&self, item_id: &str) -> Option<u64> {
        self.owned.get(item_id).copied()
    }

    /// Owned quantities in catalog order.
    pub fn owned_quantities(&self) -> impl Iterator<Item = (&'static CatalogEntry, u64)> + '_ {
        self.catalog
            .iter()
            .map(|entry| (entry, self.owned.get(entry.id).copied().unwrap_or(0)))
    }

    /// Manual click. Saturates instead of failing.
    pub fn increment_by_one(&mut self) -> u64 {
        self.cookies = self.cookies.saturating_add(1);
        self.cookies
    }

    /// Cookies per tick: sum of owned units times their yield.
    ///
    /// An empty catalog yields 0.
    pub fn current_rate(&self) -> Result<u64, GameError> {
        if let Some(id) = self
            .owned
            .keys()
            .find(|id| catalog::find(self.catalog, id).is_none())
        {
            return Err(GameError::UnknownOwnedItem(id.to_string()));
        }

        self.owned_quantities()
            .try_fold(0u64, |acc, (entry, count)| {
                count
                    .checked_mul(entry.value)
                    .and_then(|yielded| acc.checked_add(yielded))
            })
            .ok_or(GameError::Overflow)
    }

    /// Applies one tick of production.
    pub fn advance_tick(&mut self) -> Result<TickResult, GameError> {
        let rate = self.current_rate()?;
        let cookies = self.cookies.checked_add(rate).ok_or(GameError::Overflow)?;
        self.cookies = cookies;
        Ok(TickResult { rate, cookies })
    }

    /// Whether the balance covers one unit of `item_id`.
    pub fn can_afford(&self, item_id: &str) -> Result<bool, GameError> {
        let entry = self.entry(item_id)?;
        Ok(self.cookies >= entry.cost)
    }

    /// Buys one unit of `item_id`.
    ///
    /// An unaffordable purchase is not an error: it returns
    /// [`PurchaseOutcome::InsufficientFunds`] and leaves the state untouched.
    /// On success the balance and the quantity change together; nothing is
    /// written until both new values are known.
    pub fn purchase(&mut self, item_id: &str) -> Result<PurchaseOutcome, GameError> {
        let item = *self.entry(item_id)?;
        if self.cookies < item.cost {
            return Ok(PurchaseOutcome::InsufficientFunds {
                item,
                cookies: self.cookies,
            });
        }

        let cookies = self.cookies - item.cost;
        let owned = self
            .owned
            .get(item.id)
            .copied()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(GameError::Overflow)?;

        self.cookies = cookies;
        self.owned.insert(item.id, owned);

        Ok(PurchaseOutcome::Purchased {
            item,
            owned,
            cookies,
        })
    }

    /// Window title reflecting the current balance.
    pub fn title(&self) -> String {
        format!("{} cookies - {}", self.cookies, GAME_TITLE)
    }

    fn entry(&self, item_id: &str) -> Result<&'static CatalogEntry, GameError> {
        catalog::find(self.catalog, item_id)
            .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))
    }
}
