// crates/pilk-dashboard/src/components/orders.rs

use pilk_client::TradingApi;
use pilk_core::OrderView;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::components::tone_color;

pub fn draw_orders<A: TradingApi>(f: &mut Frame, area: Rect, app: &App<A>) {
    let header = Row::new(vec!["Sym", "Side", "Limit", "Margin", "Lev"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let views: Vec<OrderView> = app
        .dashboard
        .snapshot()
        .map(|snapshot| snapshot.orders.iter().map(OrderView::from_order).collect())
        .unwrap_or_default();

    let rows: Vec<Row> = views.into_iter().map(|order| {
        Row::new(vec![
            Cell::from(order.display_symbol),
            Cell::from(order.side_label).style(Style::default().fg(tone_color(order.side_tone))),
            Cell::from(order.price),
            Cell::from(order.margin),
            Cell::from(order.leverage),
        ])
    }).collect();

    let widths = [
        Constraint::Length(10),  // Symbol
        Constraint::Length(6),   // Side
        Constraint::Length(10),  // Limit
        Constraint::Length(8),   // Margin
        Constraint::Min(4),      // Leverage
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default()
            .title(" Pending Orders ")
            .borders(Borders::ALL));

    f.render_widget(table, area);
}
