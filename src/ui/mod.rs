mod cookie_panel;
mod shop_panel;
mod warning_dialog;

use clicker::core::GameState;
use clicker::input::{Focus, GameOverlay, GameScreen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function. Records click targets into `screen`.
pub fn draw_game(
    frame: &mut Frame,
    game_state: &GameState,
    rate: u64,
    screen: &mut GameScreen,
    tick_progress: f64,
) {
    let size = frame.size();

    // Main content above a full-width footer
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Cookie + shop
            Constraint::Length(3), // Footer
        ])
        .split(size);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Cookie
            Constraint::Percentage(50), // Shop
        ])
        .split(v_chunks[0]);

    screen.targets.cookie = cookie_panel::draw_cookie_panel(
        frame,
        chunks[0],
        game_state.cookies(),
        rate,
        screen.focus == Focus::Cookie,
        tick_progress,
    );

    let selected = (screen.focus == Focus::Shop).then_some(screen.selected);
    screen.targets.shop_rows =
        shop_panel::draw_shop_panel(frame, chunks[1], game_state, selected);

    draw_footer(
        frame,
        v_chunks[1],
        game_state.catalog().len(),
        screen.status.as_deref(),
    );

    if let GameOverlay::InsufficientFunds { item, cookies } = &screen.overlay {
        warning_dialog::draw_insufficient_funds(frame, item, *cookies);
    }
}

/// Draws the key hints and the last purchase message.
fn draw_footer(frame: &mut Frame, area: Rect, item_count: usize, status: Option<&str>) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(Color::Gray);

    let mut spans = vec![
        Span::styled("[Space]", key),
        Span::styled(" Click  ", hint),
        Span::styled(format!("[1-{}]", item_count), key),
        Span::styled(" Buy  ", hint),
        Span::styled("[↑↓/Enter]", key),
        Span::styled(" Shop  ", hint),
        Span::styled("[Tab]", key),
        Span::styled(" Focus  ", hint),
        Span::styled("[Q]", key),
        Span::styled(" Quit", hint),
    ];
    if let Some(status) = status {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            status.to_string(),
            Style::default().fg(Color::LightGreen),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
