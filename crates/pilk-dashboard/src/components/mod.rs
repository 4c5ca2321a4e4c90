// crates/pilk-dashboard/src/components/mod.rs

use pilk_core::Tone;
use ratatui::style::{Color, Style};

use crate::app::Panel;

pub mod header;
pub mod positions;
pub mod trade_form;
pub mod orders;
pub mod status_bar;
pub mod help;

/// Profit is green, loss is red.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Profit => Color::Green,
        Tone::Loss => Color::Red,
    }
}

/// Yellow border on the focused panel.
pub fn panel_border(current: &Panel, panel: Panel) -> Style {
    Style::default().fg(if *current == panel {
        Color::Yellow
    } else {
        Color::White
    })
}
