//! Settings structures.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{require_env, ConfigError};

/// Signal-engine policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySettings {
    /// Fraction of cash that may be spent per buy pass
    pub allocation_limit: Decimal,
    /// Regulatory pattern-day-trader cash floor
    pub pdt_cash_floor: Decimal,
    /// Buy below this RSI (strict)
    pub rsi_buy_below: f64,
    /// Sell above this RSI (strict)
    pub rsi_sell_above: f64,
    /// Take profit at this unrealized P&L fraction (inclusive)
    pub take_profit_plpc: Decimal,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            allocation_limit: dec!(0.02),
            pdt_cash_floor: dec!(25000),
            rsi_buy_below: 35.0,
            rsi_sell_above: 65.0,
            take_profit_plpc: dec!(0.05),
        }
    }
}

/// Watchlist selection policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistSettings {
    /// Candidates above this price are dropped
    pub max_stock_price: Decimal,
    /// Hard cap on watchlist length
    pub max_len: usize,
}

impl Default for WatchlistSettings {
    fn default() -> Self {
        Self {
            max_stock_price: dec!(5000),
            max_len: 30,
        }
    }
}

/// Position-sizing price bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingSettings {
    /// Fraction of portfolio value targeted per buy
    pub target_spend_fraction: Decimal,
    /// Below this ask price, size by target spend
    pub full_size_below: Decimal,
    /// At or above `full_size_below` and below this, buy a single share;
    /// at or above this, the symbol is out of tradable range
    pub max_tradable_price: Decimal,
}

impl Default for SizingSettings {
    fn default() -> Self {
        Self {
            target_spend_fraction: dec!(0.05),
            full_size_below: dec!(500),
            max_tradable_price: dec!(10000),
        }
    }
}

/// Indicator-provider request quota.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimitSettings {
    /// Calls allowed per window
    pub calls: u32,
    /// Window length in seconds
    pub period_secs: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self { calls: 5, period_secs: 61 }
    }
}

/// API credentials, loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub alpaca_key: String,
    pub alpaca_secret: String,
    pub alpaca_paper: bool,
    pub polygon_key: String,
    pub fmp_key: String,
    pub firestore_project: String,
    pub firestore_token: Option<String>,
}

impl Credentials {
    /// Load every credential; any missing variable is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            alpaca_key: require_env("ALPACA_API_KEY")?,
            alpaca_secret: require_env("ALPACA_API_SECRET")?,
            alpaca_paper: std::env::var("ALPACA_PAPER")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(true),
            polygon_key: require_env("POLYGON_API_KEY")?,
            fmp_key: require_env("FMP_API_KEY")?,
            firestore_project: require_env("FIRESTORE_PROJECT_ID")?,
            firestore_token: std::env::var("FIRESTORE_TOKEN").ok(),
        })
    }
}
