//! Position sizing.

use rust_decimal::Decimal;
use std::sync::Arc;
use trader_config::SizingSettings;
use trader_core::error::ProviderError;
use trader_core::traits::QuoteProvider;

/// Result of a sizing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// A tradable quantity, with the ask price used to compute it so the
    /// buy pass can account for spend without refetching the quote.
    Shares { qty: Decimal, ask: Decimal },
    /// Ask price at or above the tradable ceiling, or not positive.
    /// Reported explicitly so the caller can log and skip.
    OutOfRange { ask: Decimal },
}

/// Converts a buy decision into an order quantity. Sells need no sizing;
/// the sell pass liquidates the position's full available quantity.
pub struct PositionSizer {
    quotes: Arc<dyn QuoteProvider>,
    settings: SizingSettings,
}

impl PositionSizer {
    pub fn new(quotes: Arc<dyn QuoteProvider>, settings: SizingSettings) -> Self {
        Self { quotes, settings }
    }

    /// Size a buy from the current ask price.
    ///
    /// Below the full-size band: target 5% of portfolio value, truncated
    /// to whole shares. In the high band a single share is bought so an
    /// expensive symbol still opens a minimal position. Quote failures
    /// propagate; there is no fallback here.
    pub async fn buy_quantity(
        &self,
        symbol: &str,
        portfolio_value: Decimal,
    ) -> Result<Sizing, ProviderError> {
        let ask = self.quotes.latest_ask(symbol).await?;

        if ask > Decimal::ZERO && ask < self.settings.full_size_below {
            let target_spend = portfolio_value * self.settings.target_spend_fraction;
            let qty = (target_spend / ask).floor();
            return Ok(Sizing::Shares { qty, ask });
        }

        if ask >= self.settings.full_size_below && ask < self.settings.max_tradable_price {
            return Ok(Sizing::Shares { qty: Decimal::ONE, ask });
        }

        Ok(Sizing::OutOfRange { ask })
    }
}
