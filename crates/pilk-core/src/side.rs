//! Position side (Long / Short) and trade action (Long / Short / Close).

use serde::{Deserialize, Serialize};

/// Direction of a position or a limit order.
///
/// On the wire this is the lowercase string `"long"` / `"short"`, carried
/// in the `type` field of a position and the `side` field of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    /// Wire representation (`"long"` / `"short"`).
    pub fn as_str(self) -> &'static str {
        match self {
            PositionSide::Long => "long",
            PositionSide::Short => "short",
        }
    }

    /// Upper-case label used on screen.
    pub fn label(self) -> &'static str {
        match self {
            PositionSide::Long => "LONG",
            PositionSide::Short => "SHORT",
        }
    }
}

/// What a `/trade` request asks the server to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Long,
    Short,
    Close,
}

impl TradeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeAction::Long => "long",
            TradeAction::Short => "short",
            TradeAction::Close => "close",
        }
    }

    /// The side this action opens, `None` for a close.
    pub fn opening_side(self) -> Option<PositionSide> {
        match self {
            TradeAction::Long => Some(PositionSide::Long),
            TradeAction::Short => Some(PositionSide::Short),
            TradeAction::Close => None,
        }
    }
}

impl From<PositionSide> for TradeAction {
    fn from(side: PositionSide) -> Self {
        match side {
            PositionSide::Long => TradeAction::Long,
            PositionSide::Short => TradeAction::Short,
        }
    }
}
