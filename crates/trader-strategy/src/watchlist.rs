//! Daily watchlist construction.

use rust_decimal::Decimal;
use std::sync::Arc;
use trader_config::WatchlistSettings;
use trader_core::error::ProviderError;
use trader_core::traits::Screener;
use trader_core::types::ScreenerEntry;
use tracing::info;

/// Selects and bounds the day's candidate tickers.
pub struct WatchlistBuilder {
    screener: Arc<dyn Screener>,
    settings: WatchlistSettings,
}

impl WatchlistBuilder {
    pub fn new(screener: Arc<dyn Screener>, settings: WatchlistSettings) -> Self {
        Self { screener, settings }
    }

    /// Build the watchlist: most-active candidates with a positive price at
    /// or below the cap, truncated to the configured length. Provider order
    /// is preserved; no local re-ranking. An empty list is a valid result.
    pub async fn build(&self) -> Result<Vec<ScreenerEntry>, ProviderError> {
        let candidates = self.screener.most_active().await?;

        let watchlist: Vec<ScreenerEntry> = candidates
            .into_iter()
            .filter(|entry| {
                entry.price > Decimal::ZERO && entry.price <= self.settings.max_stock_price
            })
            .take(self.settings.max_len)
            .collect();

        info!("Watchlist built with {} tickers", watchlist.len());
        Ok(watchlist)
    }
}
