use clicker::core::constants::INSUFFICIENT_FUNDS_MESSAGE;
use clicker::core::CatalogEntry;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the insufficient-funds warning as a centered overlay.
pub fn draw_insufficient_funds(frame: &mut Frame, item: &CatalogEntry, cookies: u64) {
    let size = frame.size();

    let dialog_width = 44.min(size.width.saturating_sub(4));
    let dialog_height = 9.min(size.height.saturating_sub(2));

    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let title = Line::from(Span::styled(
        " Warning ",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            INSUFFICIENT_FUNDS_MESSAGE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} costs {} cookies.", item.name, item.cost)),
        Line::from(format!("You have {}.", cookies)),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, dialog_area);
}
