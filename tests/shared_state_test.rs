//! Integration test: state shared between threads
//!
//! Concurrent purchases must never spend cookies that are not there, and
//! every click and tick must land exactly once.

use clicker::core::catalog::ITEMS;
use clicker::{GameState, SharedGameState};
use std::thread;

#[test]
fn test_concurrent_purchases_never_overspend() {
    // Enough for exactly 25 cursors
    let shared = SharedGameState::new(GameState::with_catalog(&ITEMS, 250));

    let bought: u64 = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                scope.spawn(move || {
                    let mut bought: u64 = 0;
                    for _ in 0..10 {
                        if shared.purchase("cursor").unwrap().is_purchased() {
                            bought += 1;
                        }
                    }
                    bought
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    let state = shared.snapshot().unwrap();
    assert_eq!(bought, 25);
    assert_eq!(state.cookies(), 0);
    assert_eq!(state.owned("cursor"), Some(25));
}

#[test]
fn test_concurrent_clicks_and_ticks_all_apply() {
    let start = GameState::from_parts(&ITEMS, 0, [("grandma", 1)]).unwrap();
    let shared = SharedGameState::new(start);

    thread::scope(|scope| {
        for _ in 0..4 {
            let shared = shared.clone();
            scope.spawn(move || {
                for _ in 0..100 {
                    shared.increment_by_one().unwrap();
                }
            });
        }
        let ticker = shared.clone();
        scope.spawn(move || {
            for _ in 0..10 {
                ticker.advance_tick().unwrap();
            }
        });
    });

    // 400 clicks plus 10 ticks at 10 cookies per tick
    assert_eq!(shared.read(|s| s.cookies()).unwrap(), 400 + 100);
}

#[test]
fn test_mixed_buyers_balance_adds_up() {
    let shared = SharedGameState::new(GameState::with_catalog(&ITEMS, 5_000));

    thread::scope(|scope| {
        for item in ["cursor", "grandma", "farm"] {
            let shared = shared.clone();
            scope.spawn(move || {
                for _ in 0..20 {
                    shared.purchase(item).unwrap();
                }
            });
        }
    });

    let state = shared.snapshot().unwrap();
    let spent: u64 = state
        .owned_quantities()
        .map(|(entry, count)| entry.cost * count)
        .sum();
    assert_eq!(state.cookies() + spent, 5_000);
    assert_eq!(shared.current_rate().unwrap(), state.current_rate().unwrap());
}
