//! pilk-dashboard
//!
//! Terminal dashboard for the PILK trader game.
//!
//! - `dashboard`:  the orchestrator (polling, snapshot, actions)
//! - `poller`:     the timer loop and one-off fetch tasks
//! - `trade_form`: symbol / margin / leverage entry
//! - `app`, `ui`, `components`: key handling and rendering

pub mod config;
pub mod types;
pub mod dashboard;
pub mod poller;
pub mod trade_form;
pub mod app;
pub mod ui;
pub mod components;

pub use dashboard::{Dashboard, DashboardState};
pub use trade_form::TradeForm;
