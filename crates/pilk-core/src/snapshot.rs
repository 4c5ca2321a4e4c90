//! Account state as returned by `GET /state`.
//!
//! A snapshot is always replaced wholesale by the next applied fetch;
//! nothing in here is ever patched in place.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::side::PositionSide;

/// Full account state from one state fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub balance: f64,
    pub equity: f64,

    /// Open positions keyed by the user symbol (e.g. `"BTC/USDT"`).
    /// Keeps the order the server sent them in.
    #[serde(default)]
    pub positions: IndexMap<String, Position>,

    /// Resting limit orders.
    #[serde(default)]
    pub orders: Vec<PendingOrder>,
}

impl AccountSnapshot {
    /// Position key at `index` in display order.
    pub fn position_key(&self, index: usize) -> Option<&str> {
        self.positions.get_index(index).map(|(key, _)| key.as_str())
    }

    pub fn has_positions(&self) -> bool {
        !self.positions.is_empty()
    }
}

/// One open position.
///
/// Every numeric field is optional on the wire; display code decides
/// how absence is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Rarely present; the map key in [`AccountSnapshot::positions`] wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(rename = "type")]
    pub side: PositionSide,

    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub entry_price: Option<f64>,
    #[serde(default)]
    pub liq_price: Option<f64>,
    #[serde(default)]
    pub margin: Option<f64>,
    #[serde(default)]
    pub leverage: Option<f64>,

    /// Server-side unrealized PnL. Absent means "not reported", not zero.
    #[serde(default)]
    pub pnl: Option<f64>,

    /// Exchange feed symbol (e.g. `"BTC/USDT:USDT"`); falls back to the map key.
    #[serde(default)]
    pub feed_symbol: Option<String>,

    #[serde(default)]
    pub tp: Option<f64>,
    #[serde(default)]
    pub sl: Option<f64>,
}

impl Position {
    /// A bare position of the given side with nothing else reported.
    pub fn new(side: PositionSide) -> Self {
        Self {
            symbol: None,
            side,
            size: None,
            entry_price: None,
            liq_price: None,
            margin: None,
            leverage: None,
            pnl: None,
            feed_symbol: None,
            tp: None,
            sl: None,
        }
    }
}

/// A limit order waiting for its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub symbol: String,
    pub side: PositionSide,

    #[serde(default)]
    pub limit_price: Option<f64>,
    #[serde(default)]
    pub margin: Option<f64>,
    #[serde(default)]
    pub leverage: Option<f64>,
    #[serde(default)]
    pub feed_symbol: Option<String>,
    #[serde(default)]
    pub tp: Option<f64>,
    #[serde(default)]
    pub sl: Option<f64>,

    /// ISO-8601 placement time, kept as the server's string.
    #[serde(default)]
    pub timestamp: Option<String>,
}
