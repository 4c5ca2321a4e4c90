//! Configuration for the dashboard.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. a TOML file (`--config`)
//! 3. environment: `PILK_API_URL`, `PILK_POLL_SECS`
//! 4. command-line flags (applied by `main`)

use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use pilk_client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::trade_form::{TradeForm, DEFAULT_LEVERAGE, DEFAULT_MARGIN, DEFAULT_SYMBOL};

pub const DEFAULT_POLL_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the game API, including the `/api` prefix.
    pub api_url: String,

    /// Seconds between scheduled state fetches.
    pub poll_interval_secs: u64,

    /// Initial trade form values.
    pub default_symbol: String,
    pub default_margin: f64,
    pub default_leverage: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            poll_interval_secs: DEFAULT_POLL_SECS,
            default_symbol: DEFAULT_SYMBOL.to_string(),
            default_margin: DEFAULT_MARGIN,
            default_leverage: DEFAULT_LEVERAGE,
        }
    }
}

impl DashboardConfig {
    /// Defaults, overlaid with the file at `path` (if any), then the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = env::var("PILK_API_URL") {
            self.api_url = url;
        }
        self.poll_interval_secs = read_env_or_default("PILK_POLL_SECS", self.poll_interval_secs)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            bail!("poll_interval_secs must be at least 1");
        }
        if self.api_url.trim().is_empty() {
            bail!("api_url must not be empty");
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn trade_form(&self) -> TradeForm {
        TradeForm::new(&self.default_symbol, self.default_margin, self.default_leverage)
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {}: {:?}", key, val)),
        Err(_) => Ok(default),
    }
}
