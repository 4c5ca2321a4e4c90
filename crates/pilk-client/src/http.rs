//! HTTP implementation of [`TradingApi`].

use pilk_core::{AccountSnapshot, LimitOrderRequest, ServerAck, TradeIntent};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::TradingApi;
use crate::error::ApiError;

/// Default base URL of the game API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// JSON-over-HTTP client for the game API.
///
/// One request per call: no retries, and no timeout beyond what the
/// transport does on its own.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let err = ApiError::from_error_response(status.as_u16(), &body);
            debug!(status = status.as_u16(), error = %err, "request refused");
            return Err(err);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TradingApi for ApiClient {
    async fn fetch_state(&self) -> Result<AccountSnapshot, ApiError> {
        self.send(self.http.get(self.url("state"))).await
    }

    async fn execute_trade(&self, intent: &TradeIntent) -> Result<ServerAck, ApiError> {
        debug!(symbol = %intent.symbol, action = intent.action.as_str(), "POST /trade");
        self.send(self.http.post(self.url("trade")).json(intent)).await
    }

    async fn place_limit_order(&self, order: &LimitOrderRequest) -> Result<ServerAck, ApiError> {
        debug!(symbol = %order.symbol, side = order.side.as_str(), price = order.price, "POST /order");
        self.send(self.http.post(self.url("order")).json(order)).await
    }

    async fn reset_game(&self) -> Result<ServerAck, ApiError> {
        self.send(self.http.post(self.url("reset"))).await
    }
}
