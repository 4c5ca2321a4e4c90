//! The seam between the dashboard and the game server.

use std::future::Future;

use pilk_core::{AccountSnapshot, LimitOrderRequest, ServerAck, TradeIntent};

use crate::error::ApiError;

/// The four calls the dashboard makes.
///
/// [`ApiClient`](crate::ApiClient) is the HTTP implementation; tests
/// substitute scripted ones. Futures are `Send` so calls can run on
/// spawned tasks.
pub trait TradingApi: Send + Sync + 'static {
    /// `GET /state`.
    fn fetch_state(&self) -> impl Future<Output = Result<AccountSnapshot, ApiError>> + Send;

    /// `POST /trade`.
    fn execute_trade(
        &self,
        intent: &TradeIntent,
    ) -> impl Future<Output = Result<ServerAck, ApiError>> + Send;

    /// `POST /order`.
    fn place_limit_order(
        &self,
        order: &LimitOrderRequest,
    ) -> impl Future<Output = Result<ServerAck, ApiError>> + Send;

    /// `POST /reset`. Safe to repeat.
    fn reset_game(&self) -> impl Future<Output = Result<ServerAck, ApiError>> + Send;
}
