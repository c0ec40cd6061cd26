//! Input handling for the game screen.
//!
//! Keys and mouse clicks are mapped onto the three store operations. The
//! screen struct carries the little UI state the mapping needs (focus, shop
//! selection, the warning overlay and where the last frame drew things).

use crate::core::catalog::CatalogEntry;
use crate::core::{GameError, GameState, PurchaseOutcome};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Which panel Enter acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Cookie,
    Shop,
}

/// Modal shown over the game. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverlay {
    None,
    /// Purchase rejected; any key or click dismisses it.
    InsufficientFunds { item: CatalogEntry, cookies: u64 },
}

/// Screen areas recorded by the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTargets {
    pub cookie: Rect,
    /// One rect per catalog row, in catalog order
    pub shop_rows: Vec<Rect>,
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

pub struct GameScreen {
    pub focus: Focus,
    pub selected: usize,
    pub overlay: GameOverlay,
    pub targets: ClickTargets,
    /// Last purchase message for the footer
    pub status: Option<String>,
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GameScreen {
    pub fn new() -> Self {
        Self {
            focus: Focus::Cookie,
            selected: 0,
            overlay: GameOverlay::None,
            targets: ClickTargets::default(),
            status: None,
        }
    }
}

/// Main dispatcher for key events.
pub fn handle_key(
    key: KeyEvent,
    state: &mut GameState,
    screen: &mut GameScreen,
) -> Result<InputResult, GameError> {
    if key.kind != KeyEventKind::Press {
        return Ok(InputResult::Continue);
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(InputResult::Quit);
    }

    // Warning overlay blocks everything else
    if screen.overlay != GameOverlay::None {
        screen.overlay = GameOverlay::None;
        return Ok(InputResult::Continue);
    }

    let items = state.catalog().len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            return Ok(InputResult::Quit);
        }
        KeyCode::Char(' ') => {
            state.increment_by_one();
        }
        KeyCode::Tab => {
            screen.focus = match screen.focus {
                Focus::Cookie => Focus::Shop,
                Focus::Shop => Focus::Cookie,
            };
        }
        KeyCode::Up | KeyCode::Char('k') => {
            screen.focus = Focus::Shop;
            screen.selected = screen.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            screen.focus = Focus::Shop;
            if screen.selected + 1 < items {
                screen.selected += 1;
            }
        }
        KeyCode::Enter => match screen.focus {
            Focus::Cookie => {
                state.increment_by_one();
            }
            Focus::Shop => {
                let index = screen.selected;
                buy(state, screen, index)?;
            }
        },
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < items {
                screen.selected = index;
                buy(state, screen, index)?;
            }
        }
        _ => {}
    }
    Ok(InputResult::Continue)
}

/// Mouse events: left click on the cookie or a shop row, wheel moves the
/// shop selection.
pub fn handle_mouse(
    mouse: MouseEvent,
    state: &mut GameState,
    screen: &mut GameScreen,
) -> Result<InputResult, GameError> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if screen.overlay != GameOverlay::None {
                screen.overlay = GameOverlay::None;
                return Ok(InputResult::Continue);
            }
            if contains(screen.targets.cookie, mouse.column, mouse.row) {
                screen.focus = Focus::Cookie;
                state.increment_by_one();
            } else if let Some(index) = screen
                .targets
                .shop_rows
                .iter()
                .position(|row| contains(*row, mouse.column, mouse.row))
            {
                screen.focus = Focus::Shop;
                screen.selected = index;
                buy(state, screen, index)?;
            }
        }
        MouseEventKind::ScrollUp => {
            screen.selected = screen.selected.saturating_sub(1);
        }
        MouseEventKind::ScrollDown => {
            if screen.selected + 1 < state.catalog().len() {
                screen.selected += 1;
            }
        }
        _ => {}
    }
    Ok(InputResult::Continue)
}

fn buy(state: &mut GameState, screen: &mut GameScreen, index: usize) -> Result<(), GameError> {
    let Some(entry) = state.catalog().get(index) else {
        return Ok(());
    };

    match state.purchase(entry.id)? {
        PurchaseOutcome::Purchased {
            item,
            owned,
            cookies,
        } => {
            log::info!(
                "Bought {} ({} owned, {} cookies left)",
                item.name,
                owned,
                cookies
            );
            screen.status = Some(format!("Bought a {} ({} owned)", item.name, owned));
        }
        PurchaseOutcome::InsufficientFunds { item, cookies } => {
            log::warn!(
                "Cannot afford {} (costs {}, have {})",
                item.name,
                item.cost,
                cookies
            );
            screen.overlay = GameOverlay::InsufficientFunds { item, cookies };
        }
    }
    Ok(())
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
