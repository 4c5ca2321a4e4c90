// crates/pilk-dashboard/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const SHORTCUTS: &[(&str, Color, &str)] = &[
    ("b", Color::Green, "Open long with the form values"),
    ("s", Color::Red, "Open short with the form values"),
    ("B / S", Color::Yellow, "Limit long / short (asks for a price)"),
    ("c / Del", Color::Cyan, "Close selected position"),
    ("↑/k ↓/j", Color::White, "Move selection"),
    ("e / Enter", Color::Blue, "Edit symbol, margin, leverage"),
    ("Tab", Color::Blue, "Switch panel"),
    ("r", Color::Blue, "Refresh now"),
    ("R", Color::Magenta, "Reset game (asks first)"),
    ("x", Color::Gray, "Dismiss message"),
    ("F1 / ?", Color::Gray, "Toggle help"),
    ("q / Esc", Color::Red, "Quit"),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items: Vec<ListItem> = SHORTCUTS
        .iter()
        .map(|(keys, color, text)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", keys),
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - "),
                Span::raw(*text),
            ]))
        })
        .collect();

    let help_list = List::new(help_items)
        .block(Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(help_list, area);

    let footer = Paragraph::new("Press F1, ? or Esc to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(2),
        width: area.width,
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
