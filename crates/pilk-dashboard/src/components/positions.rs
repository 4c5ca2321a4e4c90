// crates/pilk-dashboard/src/components/positions.rs

use pilk_client::TradingApi;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, Panel};
use crate::components::{panel_border, tone_color};
use crate::dashboard::DashboardState;

pub fn draw_positions<A: TradingApi>(f: &mut Frame, area: Rect, app: &App<A>) {
    let block = Block::default()
        .title(" Positions ")
        .borders(Borders::ALL)
        .border_style(panel_border(&app.current_panel, Panel::Positions));

    let empty_text = match app.dashboard.state() {
        DashboardState::Loading => Some("Loading..."),
        DashboardState::Ready(snapshot) if !snapshot.has_positions() => Some("NO ACTIVE POSITIONS"),
        DashboardState::Ready(_) => None,
    };
    if let Some(text) = empty_text {
        let inner = block.inner(area);
        f.render_widget(block, area);
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, inner);
        return;
    }

    let header = Row::new(vec!["Symbol", "Side", "Size", "Entry", "Liq", "Margin", "PnL", "ROE", "To Liq"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let views = app.position_views();
    let selected = app.selected_position.min(views.len().saturating_sub(1));

    let rows: Vec<Row> = views.iter().enumerate().map(|(i, view)| {
        let style = if i == selected && app.current_panel == Panel::Positions {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let pnl_style = style.fg(tone_color(view.pnl_tone)).add_modifier(Modifier::BOLD);
        let liq_distance_style = if view.near_liquidation {
            style.fg(Color::Red).add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
        } else {
            style
        };

        Row::new(vec![
            Cell::from(view.display_symbol.clone()).style(style.add_modifier(Modifier::BOLD)),
            Cell::from(view.side_label).style(style.fg(tone_color(view.side_tone))),
            Cell::from(view.size.clone()).style(style),
            Cell::from(view.entry.clone()).style(style),
            Cell::from(view.liq.clone()).style(style.fg(Color::Red)),
            Cell::from(view.margin.clone()).style(style),
            Cell::from(view.pnl_text.clone()).style(pnl_style),
            Cell::from(view.roe_text.clone()).style(style.fg(tone_color(view.pnl_tone))),
            Cell::from(view.liq_distance_text.clone()).style(liq_distance_style),
        ])
    }).collect();

    let widths = [
        Constraint::Length(12),  // Symbol
        Constraint::Length(6),   // Side
        Constraint::Length(10),  // Size
        Constraint::Length(10),  // Entry
        Constraint::Length(10),  // Liq
        Constraint::Length(8),   // Margin
        Constraint::Length(10),  // PnL
        Constraint::Length(9),   // ROE
        Constraint::Min(7),      // To Liq
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block);

    f.render_widget(table, area);
}
