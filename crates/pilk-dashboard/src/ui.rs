// crates/pilk-dashboard/src/ui.rs

use pilk_client::TradingApi;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::components::{
    header::draw_header,
    help::draw_help,
    orders::draw_orders,
    positions::draw_positions,
    status_bar::draw_status_bar,
    trade_form::draw_trade_form,
};

pub fn draw<A: TradingApi>(f: &mut Frame, app: &App<A>) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);
    draw_main_content(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    if app.show_help {
        draw_help(f, centered_rect(60, 70, f.size()));
    }
}

fn draw_main_content<A: TradingApi>(f: &mut Frame, area: Rect, app: &App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),  // Positions
            Constraint::Percentage(35),  // Form + orders
        ])
        .split(area);

    draw_positions(f, chunks[0], app);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(4),
        ])
        .split(chunks[1]);

    draw_trade_form(f, right_chunks[0], app);
    draw_orders(f, right_chunks[1], app);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
