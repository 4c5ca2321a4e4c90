//! Request and response bodies for the mutating endpoints.
//!
//! - `TradeIntent`       => `POST /trade`
//! - `LimitOrderRequest` => `POST /order`
//! - `ServerAck`         <= every POST

use serde::{Deserialize, Serialize};

use crate::side::{PositionSide, TradeAction};

/// One immediate trade the user asked for.
///
/// Built per key press and dropped once the request is sent. Values are
/// passed through as typed; the server does all validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeIntent {
    pub symbol: String,
    pub action: TradeAction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leverage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sl: Option<f64>,
}

impl TradeIntent {
    /// Open a new position.
    pub fn open(symbol: impl Into<String>, side: PositionSide, margin: f64, leverage: i64) -> Self {
        Self {
            symbol: symbol.into(),
            action: side.into(),
            margin: Some(margin),
            leverage: Some(leverage),
            tp: None,
            sl: None,
        }
    }

    /// Close the position held under `symbol`. Only the symbol is sent.
    pub fn close(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            action: TradeAction::Close,
            margin: None,
            leverage: None,
            tp: None,
            sl: None,
        }
    }
}

/// A resting limit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrderRequest {
    pub symbol: String,
    pub side: PositionSide,
    pub price: f64,
    pub margin: f64,
    pub leverage: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sl: Option<f64>,
}

/// Acknowledgement body of a successful POST.
///
/// `status` is `"ok"` for trades and orders, `"reset"` for a reset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServerAck {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub balance: Option<f64>,
}
