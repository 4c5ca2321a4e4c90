//! Trade entry form: symbol, margin, leverage.
//!
//! Holds only what the user typed. No validation happens here: empty,
//! zero and negative values are sent as they are and the server decides.

use pilk_core::{LimitOrderRequest, PositionSide, TradeIntent};

pub const DEFAULT_SYMBOL: &str = "BTC";
pub const DEFAULT_MARGIN: f64 = 100.0;
pub const DEFAULT_LEVERAGE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Symbol,
    Margin,
    Leverage,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Symbol => FormField::Margin,
            FormField::Margin => FormField::Leverage,
            FormField::Leverage => FormField::Symbol,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Symbol => FormField::Leverage,
            FormField::Margin => FormField::Symbol,
            FormField::Leverage => FormField::Margin,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Symbol => "SYMBOL",
            FormField::Margin => "MARGIN",
            FormField::Leverage => "LEV (x)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TradeForm {
    symbol: String,
    margin: String,
    leverage: String,
    focus: FormField,
}

impl Default for TradeForm {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, DEFAULT_MARGIN, DEFAULT_LEVERAGE)
    }
}

impl TradeForm {
    pub fn new(symbol: &str, margin: f64, leverage: i64) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            margin: margin.to_string(),
            leverage: leverage.to_string(),
            focus: FormField::Symbol,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Raw text of a field, as typed.
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Symbol => &self.symbol,
            FormField::Margin => &self.margin,
            FormField::Leverage => &self.leverage,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Margin as a number; text that does not parse counts as `0`.
    pub fn margin(&self) -> f64 {
        self.margin.trim().parse().unwrap_or(0.0)
    }

    /// Leverage as an integer; text that does not parse counts as `0`.
    pub fn leverage(&self) -> i64 {
        self.leverage.trim().parse().unwrap_or(0)
    }

    pub fn set_symbol(&mut self, symbol: &str) {
        self.symbol = symbol.to_uppercase();
    }

    /// Type into the focused field. Numeric fields only take characters
    /// a number input would accept.
    pub fn enter_char(&mut self, c: char) {
        match self.focus {
            FormField::Symbol => {
                self.symbol.push(c);
                self.symbol = self.symbol.to_uppercase();
            }
            FormField::Margin => {
                if c.is_ascii_digit() || c == '.' || c == '-' {
                    self.margin.push(c);
                }
            }
            FormField::Leverage => {
                if c.is_ascii_digit() || c == '-' {
                    self.leverage.push(c);
                }
            }
        }
    }

    pub fn delete_char(&mut self) {
        match self.focus {
            FormField::Symbol => {
                self.symbol.pop();
            }
            FormField::Margin => {
                self.margin.pop();
            }
            FormField::Leverage => {
                self.leverage.pop();
            }
        }
    }

    pub fn clear_field(&mut self) {
        match self.focus {
            FormField::Symbol => self.symbol.clear(),
            FormField::Margin => self.margin.clear(),
            FormField::Leverage => self.leverage.clear(),
        }
    }

    pub fn open_long(&self) -> TradeIntent {
        self.intent(PositionSide::Long)
    }

    pub fn open_short(&self) -> TradeIntent {
        self.intent(PositionSide::Short)
    }

    pub fn intent(&self, side: PositionSide) -> TradeIntent {
        TradeIntent::open(self.symbol.clone(), side, self.margin(), self.leverage())
    }

    pub fn limit_order(&self, side: PositionSide, price: f64) -> LimitOrderRequest {
        LimitOrderRequest {
            symbol: self.symbol.clone(),
            side,
            price,
            margin: self.margin(),
            leverage: self.leverage(),
            tp: None,
            sl: None,
        }
    }
}
