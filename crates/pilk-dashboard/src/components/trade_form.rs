// crates/pilk-dashboard/src/components/trade_form.rs

use pilk_client::TradingApi;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode, Panel};
use crate::components::panel_border;
use crate::trade_form::FormField;

const FIELDS: [FormField; 3] = [FormField::Symbol, FormField::Margin, FormField::Leverage];

pub fn draw_trade_form<A: TradingApi>(f: &mut Frame, area: Rect, app: &App<A>) {
    let block = Block::default()
        .title(" Trade ")
        .borders(Borders::ALL)
        .border_style(panel_border(&app.current_panel, Panel::TradeForm));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Symbol
            Constraint::Length(1),  // Margin
            Constraint::Length(1),  // Leverage
            Constraint::Length(1),  // Spacer
            Constraint::Length(1),  // Buttons
            Constraint::Min(1),     // Hint
        ])
        .split(inner);

    let editing = matches!(app.input_mode, InputMode::Editing);

    for (i, field) in FIELDS.iter().enumerate() {
        let focused = editing && app.form.focus() == *field;
        let value_style = if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![
            Span::styled(format!("{:<8}", field.label()), Style::default().fg(Color::Gray)),
            Span::styled(app.form.text(*field).to_string(), value_style),
        ];
        if focused {
            spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), chunks[i]);
    }

    let buttons = Line::from(vec![
        Span::styled("[b] BUY (LONG)", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled("[s] SELL (SHORT)", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), chunks[4]);

    let hint = if editing {
        "[Tab] Next field | [Enter] Done"
    } else {
        "[e] Edit | [B/S] Limit order"
    };
    let hint_widget = Paragraph::new(hint)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hint_widget, chunks[5]);
}
