//! Display fields derived from raw position records.
//!
//! Everything here is a pure function of one record. Nothing is
//! computed that the server is the authority for (liquidation price,
//! PnL); we only format what it sent and derive ratios from it.

use crate::side::PositionSide;
use crate::snapshot::{PendingOrder, Position};

/// Shown when a record carries neither a feed symbol nor a usable key.
pub const SYMBOL_PLACEHOLDER: &str = "???";

/// Quote suffix the exchange appends to perpetual feed symbols.
const QUOTE_SUFFIX: &str = ":USDT";

/// Liquidation distance (percent of mark) under which a position is flagged.
pub const LIQ_DANGER_PCT: f64 = 10.0;

/// Colour class of a displayed value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Profit,
    Loss,
}

impl Tone {
    /// Non-negative is profit, negative is loss.
    pub fn of_value(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Profit
        } else {
            Tone::Loss
        }
    }

    /// Longs are drawn like profit, shorts like loss.
    pub fn of_side(side: PositionSide) -> Self {
        match side {
            PositionSide::Long => Tone::Profit,
            PositionSide::Short => Tone::Loss,
        }
    }
}

/// Ready-to-draw fields for one position card / table row.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionView {
    /// Map key, used when acting on the position (close).
    pub key: String,
    pub display_symbol: String,

    pub side: PositionSide,
    pub side_label: &'static str,
    pub side_tone: Tone,

    pub size: String,
    pub entry: String,
    pub liq: String,
    pub margin: String,

    /// Reported PnL, `0.0` when absent.
    pub pnl: f64,
    pub pnl_text: String,
    pub pnl_tone: Tone,

    /// Return on margin, empty when margin is unknown or zero.
    pub roe_text: String,

    pub liq_distance_pct: Option<f64>,
    pub liq_distance_text: String,
    pub near_liquidation: bool,
}

impl PositionView {
    pub fn from_position(key: &str, pos: &Position) -> Self {
        // Missing pnl renders as zero, same as a flat position.
        let pnl = normalize_zero(pos.pnl.unwrap_or(0.0));

        let roe_text = match pos.margin {
            Some(margin) if margin > 0.0 => format!("{}%", format_signed(pnl / margin * 100.0)),
            _ => String::new(),
        };

        let liq_distance_pct = liquidation_distance_pct(pos);

        Self {
            key: key.to_string(),
            display_symbol: display_symbol(pos.feed_symbol.as_deref(), key),
            side: pos.side,
            side_label: pos.side.label(),
            side_tone: Tone::of_side(pos.side),
            size: format_opt(pos.size, 4),
            entry: format_opt(pos.entry_price, 2),
            liq: format_opt(pos.liq_price, 2),
            margin: format_opt(pos.margin, 2),
            pnl,
            pnl_text: format_signed(pnl),
            pnl_tone: Tone::of_value(pnl),
            roe_text,
            liq_distance_pct,
            liq_distance_text: liq_distance_pct
                .map(|pct| format!("{:.1}%", pct))
                .unwrap_or_default(),
            near_liquidation: liq_distance_pct.is_some_and(|pct| pct < LIQ_DANGER_PCT),
        }
    }
}

/// Ready-to-draw fields for one pending limit order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub display_symbol: String,
    pub side_label: &'static str,
    pub side_tone: Tone,
    pub price: String,
    pub margin: String,
    pub leverage: String,
}

impl OrderView {
    pub fn from_order(order: &PendingOrder) -> Self {
        Self {
            display_symbol: display_symbol(order.feed_symbol.as_deref(), &order.symbol),
            side_label: order.side.label(),
            side_tone: Tone::of_side(order.side),
            price: format_opt(order.limit_price, 2),
            margin: format_opt(order.margin, 2),
            leverage: order
                .leverage
                .map(|lev| format!("{}x", lev))
                .unwrap_or_default(),
        }
    }
}

/// Feed symbol (or the map key when absent) without the `:USDT` suffix.
pub fn display_symbol(feed_symbol: Option<&str>, key: &str) -> String {
    let raw = feed_symbol.unwrap_or(key);
    let trimmed = raw.strip_suffix(QUOTE_SUFFIX).unwrap_or(raw);
    if trimmed.is_empty() {
        SYMBOL_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Two decimals, `+` in front of non-negative values.
pub fn format_signed(value: f64) -> String {
    format!("{:+.2}", normalize_zero(value))
}

/// Distance from the implied mark price to the liquidation price, in
/// percent of mark.
///
/// The mark is backed out of the server's PnL:
/// long `pnl = (mark - entry) * size`, short `pnl = (entry - mark) * size`.
/// Returns `None` unless every input is present and `size > 0`.
pub fn liquidation_distance_pct(pos: &Position) -> Option<f64> {
    let size = pos.size.filter(|size| *size > 0.0)?;
    let entry = pos.entry_price?;
    let liq = pos.liq_price?;
    let pnl = pos.pnl?;

    let mark = match pos.side {
        PositionSide::Long => entry + pnl / size,
        PositionSide::Short => entry - pnl / size,
    };
    if mark <= 0.0 || !mark.is_finite() {
        return None;
    }

    Some((mark - liq).abs() / mark * 100.0)
}

fn format_opt(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_default()
}

// -0.0 compares equal to 0.0 but would print as "-0.00".
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
