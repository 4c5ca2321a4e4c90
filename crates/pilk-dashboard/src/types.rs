//! Shared types for the dashboard.
//!
//! This module defines:
//! - `SyncEvent`: outcomes posted by network tasks to the UI loop
//! - `Action`: the mutating calls a user can trigger
//! - `Notice`: the one-line message shown in the status bar
//! - channel aliases between tasks and the dashboard

use chrono::{DateTime, Local};
use pilk_client::ApiError;
use pilk_core::{AccountSnapshot, PositionSide, ServerAck};
use tokio::sync::mpsc;

/// Result of one unit of network work, applied on the UI loop.
#[derive(Debug)]
pub enum SyncEvent {
    /// A state fetch finished. `seq` was taken when it was issued.
    Fetched {
        seq: u64,
        result: Result<AccountSnapshot, ApiError>,
    },

    /// A mutating call finished.
    ActionSettled {
        action: Action,
        result: Result<ServerAck, ApiError>,
    },
}

pub type EventTx = mpsc::UnboundedSender<SyncEvent>;
pub type EventRx = mpsc::UnboundedReceiver<SyncEvent>;

/// A mutating request, kept around to describe its outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Open { symbol: String, side: PositionSide },
    Close { symbol: String },
    LimitOrder { symbol: String, side: PositionSide, price: f64 },
    Reset,
}

impl Action {
    /// Prefix of the failure message ("Trade Failed: ...").
    pub fn label(&self) -> &'static str {
        match self {
            Action::Open { .. } => "Trade",
            Action::Close { .. } => "Close",
            Action::LimitOrder { .. } => "Order",
            Action::Reset => "Reset",
        }
    }

    pub fn success_message(&self, ack: &ServerAck) -> String {
        match self {
            Action::Open { symbol, side } => format!("{} {} opened", side.label(), symbol),
            Action::Close { symbol } => format!("{} closed", symbol),
            Action::LimitOrder { symbol, side, price } => {
                format!("Limit {} {} @ {:.2} placed", side.label(), symbol, price)
            }
            Action::Reset => match ack.balance {
                Some(balance) => format!("Game reset, balance {:.2}", balance),
                None => "Game reset".to_string(),
            },
        }
    }

    pub fn failure_message(&self, err: &ApiError) -> String {
        format!("{} Failed: {}", self.label(), err.user_message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Latest user-facing message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Local>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            at: Local::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            at: Local::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
