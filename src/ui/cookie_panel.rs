use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

const COOKIE_ART: [&str; 9] = [
    r#"     .-""""""-.     "#,
    r#"   .'  o    o  '.   "#,
    r#"  /   o   o     \  "#,
    r#" :  o        o   : "#,
    r#" |     o   o     | "#,
    r#" :   o    o    o : "#,
    r#"  \  o     o    /  "#,
    r#"   '.   o    o.'   "#,
    r#"     '-......-'     "#,
];

/// Draws the cookie counter, the clickable cookie and the tick gauge.
/// Returns the area that counts as the cookie for mouse clicks.
pub fn draw_cookie_panel(
    frame: &mut Frame,
    area: Rect,
    cookies: u64,
    rate: u64,
    focused: bool,
    tick_progress: f64,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Counter
            Constraint::Min(0),    // Cookie
            Constraint::Length(3), // Next tick
        ])
        .split(area);

    draw_counter(frame, chunks[0], cookies, rate);
    draw_cookie(frame, chunks[1], focused);
    draw_tick_gauge(frame, chunks[2], tick_progress);

    chunks[1]
}

fn draw_counter(frame: &mut Frame, area: Rect, cookies: u64, rate: u64) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} cookies", cookies),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{}", rate),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" cookies per second"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_cookie(frame: &mut Frame, area: Rect, focused: bool) {
    let border_color = if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let art_height = COOKIE_ART.len() as u16;
    let inner_height = area.height.saturating_sub(2);
    let padding = inner_height.saturating_sub(art_height) / 2;

    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.extend(COOKIE_ART.iter().map(|row| {
        Line::from(Span::styled(
            *row,
            Style::default().fg(Color::Rgb(210, 150, 80)),
        ))
    }));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Click me! ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_tick_gauge(frame: &mut Frame, area: Rect, tick_progress: f64) {
    let gauge = Gauge::default()
        .block(Block::default().title(" Next tick ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(tick_progress.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, area);
}
