//! Integration test: game state store
//!
//! Tests the click, tick and purchase operations together with the derived
//! rate, including the reference scenarios and randomized operation
//! sequences.

use clicker::core::catalog::{find, ITEMS};
use clicker::{GameError, GameState, PurchaseOutcome, TickResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Rate recomputed independently from the catalog
fn expected_rate(state: &GameState) -> u64 {
    ITEMS
        .iter()
        .map(|entry| state.owned(entry.id).unwrap() * entry.value)
        .sum()
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_ten_cursors_then_one_tick() {
    let mut state = GameState::new();
    assert_eq!(state.cookies(), 100);

    for _ in 0..10 {
        let outcome = state.purchase("cursor").unwrap();
        assert!(outcome.is_purchased());
    }

    assert_eq!(state.cookies(), 0);
    assert_eq!(state.owned("cursor"), Some(10));
    assert_eq!(state.owned("grandma"), Some(0));
    assert_eq!(state.owned("farm"), Some(0));
    assert_eq!(state.current_rate(), Ok(10));

    let tick = state.advance_tick().unwrap();
    assert_eq!(tick, TickResult { rate: 10, cookies: 10 });
    assert_eq!(state.cookies(), 10);
}

#[test]
fn test_unaffordable_grandma_warns_and_changes_nothing() {
    let mut state = GameState::from_parts(&ITEMS, 5, Vec::<(&str, u64)>::new()).unwrap();

    let outcome = state.purchase("grandma").unwrap();
    match outcome {
        PurchaseOutcome::InsufficientFunds { item, cookies } => {
            assert_eq!(item.id, "grandma");
            assert_eq!(item.cost, 100);
            assert_eq!(cookies, 5);
        }
        other => panic!("expected a warning, got {:?}", other),
    }
    assert_eq!(state.cookies(), 5);
    assert_eq!(state.owned("grandma"), Some(0));
}

// =============================================================================
// Operation Properties
// =============================================================================

#[test]
fn test_n_increments_add_n() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..20 {
        let start: u64 = rng.gen_range(0..1_000_000);
        let n: u64 = rng.gen_range(0..500);
        let mut state = GameState::with_catalog(&ITEMS, start);
        for _ in 0..n {
            state.increment_by_one();
        }
        assert_eq!(state.cookies(), start + n);
    }
}

#[test]
fn test_tick_with_nothing_owned_is_noop() {
    let mut state = GameState::new();
    let before = state.clone();
    let tick = state.advance_tick().unwrap();
    assert_eq!(tick.rate, 0);
    assert_eq!(state, before);
}

#[test]
fn test_tick_adds_current_rate() {
    let mut state =
        GameState::from_parts(&ITEMS, 3, [("cursor", 4), ("grandma", 2), ("farm", 1)]).unwrap();
    let rate = state.current_rate().unwrap();
    assert_eq!(rate, 4 + 20 + 100);

    let tick = state.advance_tick().unwrap();
    assert_eq!(tick.rate, rate);
    assert_eq!(state.cookies(), 3 + rate);
}

#[test]
fn test_purchase_at_exact_cost() {
    let mut state = GameState::with_catalog(&ITEMS, 1000);
    let outcome = state.purchase("farm").unwrap();
    assert_eq!(
        outcome,
        PurchaseOutcome::Purchased {
            item: *find(&ITEMS, "farm").unwrap(),
            owned: 1,
            cookies: 0,
        }
    );
    assert_eq!(state.current_rate(), Ok(100));
}

#[test]
fn test_purchase_one_short_is_rejected() {
    let mut state = GameState::with_catalog(&ITEMS, 999);
    let outcome = state.purchase("farm").unwrap();
    assert!(!outcome.is_purchased());
    assert_eq!(state.cookies(), 999);
    assert_eq!(state.owned("farm"), Some(0));
}

#[test]
fn test_unknown_item_is_an_error() {
    let mut state = GameState::new();
    let before = state.clone();
    assert_eq!(
        state.purchase("factory"),
        Err(GameError::ItemNotFound("factory".to_string()))
    );
    assert_eq!(state, before);
}

#[test]
fn test_random_operation_sequences_keep_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..50 {
        let mut state = GameState::new();

        for _ in 0..300 {
            let before = state.clone();
            match rng.gen_range(0..3) {
                0 => {
                    state.increment_by_one();
                    assert_eq!(state.cookies(), before.cookies() + 1);
                }
                1 => {
                    let rate = before.current_rate().unwrap();
                    assert_eq!(rate, expected_rate(&before));
                    state.advance_tick().unwrap();
                    assert_eq!(state.cookies(), before.cookies() + rate);
                }
                _ => {
                    let entry = &ITEMS[rng.gen_range(0..ITEMS.len())];
                    let outcome = state.purchase(entry.id).unwrap();
                    if before.cookies() >= entry.cost {
                        assert!(outcome.is_purchased());
                        assert_eq!(state.cookies(), before.cookies() - entry.cost);
                        assert_eq!(
                            state.owned(entry.id),
                            before.owned(entry.id).map(|n| n + 1)
                        );
                    } else {
                        assert!(!outcome.is_purchased());
                        assert_eq!(state, before);
                    }
                }
            }

            // One entry per catalog item, and the rate always matches
            assert_eq!(state.owned_quantities().count(), ITEMS.len());
            assert_eq!(state.current_rate(), Ok(expected_rate(&state)));
        }
    }
}

#[test]
fn test_owned_quantities_follow_catalog_order() {
    let state = GameState::from_parts(&ITEMS, 0, [("farm", 3), ("cursor", 1)]).unwrap();
    let listed: Vec<(&str, u64)> = state
        .owned_quantities()
        .map(|(entry, count)| (entry.id, count))
        .collect();
    assert_eq!(listed, vec![("cursor", 1), ("grandma", 0), ("farm", 3)]);
}

#[test]
fn test_empty_catalog_never_produces() {
    let mut state = GameState::with_catalog(&[], 12);
    assert_eq!(state.current_rate(), Ok(0));
    for _ in 0..5 {
        state.advance_tick().unwrap();
    }
    assert_eq!(state.cookies(), 12);
    assert_eq!(state.owned_quantities().count(), 0);
}
