// crates/pilk-dashboard/src/components/header.rs

use pilk_client::TradingApi;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::dashboard::DashboardState;

pub fn draw_header<A: TradingApi>(f: &mut Frame, area: Rect, app: &App<A>) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    // Left: title
    let title = Paragraph::new(Line::from(vec![Span::styled(
        "PILK TRADER",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, header_chunks[0]);

    // Center: balance and equity
    let stats = match app.dashboard.state() {
        DashboardState::Ready(snapshot) => Line::from(vec![
            Span::raw("BAL: "),
            Span::styled(
                format!("${:.2}", snapshot.balance),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   EQ: "),
            Span::styled(
                format!("${:.2}", snapshot.equity),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
        ]),
        DashboardState::Loading => Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Gray),
        )),
    };
    let stats_paragraph = Paragraph::new(stats).block(Block::default().borders(Borders::ALL));
    f.render_widget(stats_paragraph, header_chunks[1]);

    // Right: refresh status
    let mut refresh = match app.dashboard.last_refresh() {
        Some(at) => vec![Span::styled(
            format!("Updated {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        )],
        None => vec![Span::styled("Waiting for server", Style::default().fg(Color::Yellow))],
    };
    if app.dashboard.pending_actions() > 0 {
        refresh.push(Span::styled(" [sending]", Style::default().fg(Color::Yellow)));
    }
    let right_paragraph = Paragraph::new(Line::from(refresh))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[2]);
}
