//! pilk-client
//!
//! Typed access to the game API (`/api/state`, `/api/trade`,
//! `/api/order`, `/api/reset`).
//!
//! Layout:
//! - `api`:   the `TradingApi` trait the dashboard is written against
//! - `http`:  `ApiClient`, the reqwest implementation
//! - `error`: `ApiError` (transport / rejected / decode)

pub mod api;
pub mod error;
pub mod http;

pub use api::TradingApi;
pub use error::ApiError;
pub use http::{ApiClient, DEFAULT_BASE_URL};
