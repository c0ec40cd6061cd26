use clicker::core::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ROW_HEIGHT: u16 = 4;

/// Draws the item list. Returns one rect per catalog row for mouse clicks;
/// rows that did not fit get an empty rect.
pub fn draw_shop_panel(
    frame: &mut Frame,
    area: Rect,
    game_state: &GameState,
    selected: Option<usize>,
) -> Vec<Rect> {
    let block = Block::default()
        .title(Span::styled(
            " Items: ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let count = game_state.catalog().len();
    let mut constraints = vec![Constraint::Length(ROW_HEIGHT); count];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut targets = Vec::with_capacity(count);
    for (index, (entry, owned)) in game_state.owned_quantities().enumerate() {
        let row = rows[index];
        if row.height == 0 {
            targets.push(Rect::default());
            continue;
        }

        let is_selected = selected == Some(index);
        let affordable = game_state.cookies() >= entry.cost;
        let name_style = match (is_selected, affordable) {
            (true, _) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(Color::DarkGray),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" [{}] {} ", index + 1, entry.name), name_style),
                Span::styled(
                    format!("  {}", owned),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!(
                    "     Cost: {} cookies. Produces {} cookies/second.",
                    entry.cost, entry.value
                ),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "     ─────────────────────────────",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), row);
        targets.push(row);
    }
    targets
}
