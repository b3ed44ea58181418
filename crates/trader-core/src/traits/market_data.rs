//! Market-data provider traits.

use crate::error::ProviderError;
use crate::types::{Macd, ScreenerEntry};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Technical-indicator provider.
///
/// Implementations are expected to honor the provider's request quota by
/// waiting, not by failing: a throttled lookup must not abort the pass
/// that issued it.
#[async_trait]
pub trait IndicatorProvider: Send + Sync {
    /// Latest RSI reading for a symbol.
    async fn rsi(&self, symbol: &str) -> Result<f64, ProviderError>;

    /// Latest MACD reading for a symbol.
    async fn macd(&self, symbol: &str) -> Result<Macd, ProviderError>;
}

/// Latest-quote provider.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Current ask price for a symbol.
    async fn latest_ask(&self, symbol: &str) -> Result<Decimal, ProviderError>;
}

/// Daily candidate screen, externally ranked.
#[async_trait]
pub trait Screener: Send + Sync {
    /// The day's most-active tickers in provider order.
    async fn most_active(&self) -> Result<Vec<ScreenerEntry>, ProviderError>;
}
