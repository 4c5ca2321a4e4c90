// crates/pilk-dashboard/src/components/status_bar.rs

use pilk_client::TradingApi;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};

pub fn draw_status_bar<A: TradingApi>(f: &mut Frame, area: Rect, app: &App<A>) {
    let (msg, style) = match app.input_mode {
        InputMode::Normal => match app.dashboard.notice() {
            Some(notice) => {
                let color = if notice.is_error() { Color::Red } else { Color::Green };
                let line = Line::from(vec![
                    Span::styled(notice.at.format("%H:%M:%S ").to_string(), Style::default().fg(Color::Gray)),
                    Span::styled(notice.message.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::styled("  [x] dismiss", Style::default().fg(Color::Gray)),
                ]);
                (line, Style::default().fg(color))
            }
            None => (shortcuts(), Style::default()),
        },
        InputMode::Editing => {
            let line = Line::from(vec![
                Span::styled("Editing ", Style::default().fg(Color::Yellow)),
                Span::styled(app.form.focus().label(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" [Tab] Next [Enter] Done"),
            ]);
            (line, Style::default().fg(Color::Yellow))
        }
        InputMode::LimitPrice(side) => {
            let line = Line::from(vec![
                Span::raw(format!("Limit {} {} @ ", side.label(), app.form.symbol())),
                Span::styled(&app.input_buffer, Style::default().fg(Color::Yellow)),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
                Span::raw(" [Enter] Place [Esc] Cancel"),
            ]);
            (line, Style::default().fg(Color::Yellow))
        }
        InputMode::ConfirmReset => {
            let line = Line::from(Span::styled(
                "Reset the game and wipe the account? [y] Yes / any other key cancels",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
            (line, Style::default().fg(Color::Red))
        }
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn shortcuts() -> Line<'static> {
    Line::from(vec![
        Span::styled("[b]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw("Long "),
        Span::styled("[s]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw("Short "),
        Span::styled("[c]", Style::default().fg(Color::Cyan)),
        Span::raw("Close "),
        Span::styled("[r]", Style::default().fg(Color::Blue)),
        Span::raw("Refresh "),
        Span::styled("[R]", Style::default().fg(Color::Magenta)),
        Span::raw("Reset "),
        Span::styled("[?]", Style::default().fg(Color::Gray)),
        Span::raw("Help "),
        Span::styled("[q]", Style::default().fg(Color::Gray)),
        Span::raw("uit"),
    ])
}
