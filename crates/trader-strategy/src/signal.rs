//! Buy/sell signal evaluation.

use rust_decimal::Decimal;
use std::sync::Arc;
use trader_config::StrategySettings;
use trader_core::error::TraderResult;
use trader_core::traits::{Broker, IndicatorProvider};
use trader_core::types::{Account, Position};
use tracing::debug;

/// Outcome of a buy evaluation for one watchlist ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyDecision {
    /// Bullish MACD crossover with oversold RSI
    Buy,
    /// Conditions not met; move to the next ticker
    Hold,
    /// Below the PDT floor or daily allocation exhausted; ends the pass
    NoFunds,
}

/// Outcome of a sell evaluation for one open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Sell,
    Hold,
}

/// Decides buy/sell/hold from indicator readings and a fresh account
/// snapshot.
pub struct SignalEngine {
    broker: Arc<dyn Broker>,
    indicators: Arc<dyn IndicatorProvider>,
    settings: StrategySettings,
}

impl SignalEngine {
    pub fn new(
        broker: Arc<dyn Broker>,
        indicators: Arc<dyn IndicatorProvider>,
        settings: StrategySettings,
    ) -> Self {
        Self { broker, indicators, settings }
    }

    /// Cash floor and daily allocation check. Uses the account snapshot
    /// taken for this decision, never a cached one.
    fn can_buy(&self, account: &Account, spent_already: Decimal) -> bool {
        let above_floor = account.cash >= self.settings.pdt_cash_floor;
        let within_allocation = spent_already < account.cash * self.settings.allocation_limit;
        above_floor && within_allocation
    }

    /// Evaluate one watchlist ticker.
    ///
    /// Returns the decision together with the cash available at decision
    /// time, which the buy pass feeds into position sizing. Account state
    /// is re-fetched on every call so concurrent settlement is reflected.
    /// No indicator call is made unless the account is eligible.
    pub async fn buy_signal(
        &self,
        symbol: &str,
        spent_already: Decimal,
    ) -> TraderResult<(BuyDecision, Decimal)> {
        let account = self.broker.get_account().await?;
        let cash = account.cash;

        if !self.can_buy(&account, spent_already) {
            return Ok((BuyDecision::NoFunds, cash));
        }

        let macd = self.indicators.macd(symbol).await?;
        if macd.is_bullish() {
            let rsi = self.indicators.rsi(symbol).await?;
            debug!("{symbol}: macd bullish, rsi {rsi}");
            if rsi < self.settings.rsi_buy_below {
                return Ok((BuyDecision::Buy, cash));
            }
        }
        Ok((BuyDecision::Hold, cash))
    }

    /// Evaluate one open position for liquidation.
    ///
    /// Two independent exit strategies, either alone is sufficient: a
    /// bearish MACD crossover with overbought RSI, or the take-profit
    /// threshold on unrealized P&L. The take-profit boundary is inclusive;
    /// the RSI boundary is not.
    pub async fn sell_signal(&self, position: &Position) -> TraderResult<ExitDecision> {
        let macd = self.indicators.macd(&position.symbol).await?;
        if macd.is_bearish() {
            let rsi = self.indicators.rsi(&position.symbol).await?;
            if rsi > self.settings.rsi_sell_above {
                return Ok(ExitDecision::Sell);
            }
        }

        if position.unrealized_plpc >= self.settings.take_profit_plpc {
            return Ok(ExitDecision::Sell);
        }

        Ok(ExitDecision::Hold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{account, bearish_macd, bullish_macd, position, MockBroker, MockIndicators};
    use rust_decimal_macros::dec;
    use trader_core::types::Macd;

    fn engine(broker: MockBroker, indicators: MockIndicators) -> SignalEngine {
        SignalEngine::new(
            Arc::new(broker),
            Arc::new(indicators),
            StrategySettings::default(),
        )
    }

    #[tokio::test]
    async fn test_buy_on_bullish_macd_and_oversold_rsi() {
        let mut broker = MockBroker::new();
        broker
            .expect_get_account()
            .returning(|| Ok(account(dec!(30000))));
        let mut indicators = MockIndicators::new();
        indicators.expect_macd().returning(|_| Ok(bullish_macd()));
        indicators.expect_rsi().returning(|_| Ok(30.0));

        let (decision, cash) = engine(broker, indicators)
            .buy_signal("AAA", Decimal::ZERO)
            .await
            .unwrap();
        assert_eq!(decision, BuyDecision::Buy);
        assert_eq!(cash, dec!(30000));
    }

    #[tokio::test]
    async fn test_rsi_boundary_is_exclusive() {
        let mut broker = MockBroker::new();
        broker
            .expect_get_account()
            .returning(|| Ok(account(dec!(30000))));
        let mut indicators = MockIndicators::new();
        indicators.expect_macd().returning(|_| Ok(bullish_macd()));
        indicators.expect_rsi().returning(|_| Ok(35.0));

        let (decision, _) = engine(broker, indicators)
            .buy_signal("AAA", Decimal::ZERO)
            .await
            .unwrap();
        assert_eq!(decision, BuyDecision::Hold);
    }

    #[tokio::test]
    async fn test_macd_needs_both_conditions() {
        // Positive histogram alone must not trigger the RSI lookup.
        let mut broker = MockBroker::new();
        broker
            .expect_get_account()
            .returning(|| Ok(account(dec!(30000))));
        let mut indicators = MockIndicators::new();
        indicators
            .expect_macd()
            .returning(|_| Ok(Macd { value: 1.0, signal: 2.0, histogram: 0.5 }));
        indicators.expect_rsi().times(0);

        let (decision, _) = engine(broker, indicators)
            .buy_signal("AAA", Decimal::ZERO)
            .await
            .unwrap();
        assert_eq!(decision, BuyDecision::Hold);
    }

    #[tokio::test]
    async fn test_no_funds_below_pdt_floor_makes_no_indicator_calls() {
        let mut broker = MockBroker::new();
        broker
            .expect_get_account()
            .returning(|| Ok(account(dec!(20000))));
        let mut indicators = MockIndicators::new();
        indicators.expect_macd().times(0);
        indicators.expect_rsi().times(0);

        let (decision, cash) = engine(broker, indicators)
            .buy_signal("AAA", Decimal::ZERO)
            .await
            .unwrap();
        assert_eq!(decision, BuyDecision::NoFunds);
        assert_eq!(cash, dec!(20000));
    }

    #[tokio::test]
    async fn test_no_funds_when_allocation_spent() {
        // 30000 * 0.02 = 600 daily allocation; 600 already spent.
        let mut broker = MockBroker::new();
        broker
            .expect_get_account()
            .returning(|| Ok(account(dec!(30000))));
        let mut indicators = MockIndicators::new();
        indicators.expect_macd().times(0);

        let (decision, _) = engine(broker, indicators)
            .buy_signal("AAA", dec!(600))
            .await
            .unwrap();
        assert_eq!(decision, BuyDecision::NoFunds);
    }

    #[tokio::test]
    async fn test_sell_on_bearish_macd_and_overbought_rsi() {
        let broker = MockBroker::new();
        let mut indicators = MockIndicators::new();
        indicators.expect_macd().returning(|_| Ok(bearish_macd()));
        indicators.expect_rsi().returning(|_| Ok(70.0));

        let decision = engine(broker, indicators)
            .sell_signal(&position("AAA", dec!(10), Decimal::ZERO))
            .await
            .unwrap();
        assert_eq!(decision, ExitDecision::Sell);
    }

    #[tokio::test]
    async fn test_take_profit_boundary_is_inclusive() {
        // Exactly 5% unrealized gain sells even with a neutral MACD.
        let broker = MockBroker::new();
        let mut indicators = MockIndicators::new();
        indicators.expect_macd().returning(|_| Ok(bullish_macd()));

        let decision = engine(broker, indicators)
            .sell_signal(&position("AAA", dec!(10), dec!(0.05)))
            .await
            .unwrap();
        assert_eq!(decision, ExitDecision::Sell);
    }

    #[tokio::test]
    async fn test_hold_when_neither_exit_applies() {
        let broker = MockBroker::new();
        let mut indicators = MockIndicators::new();
        indicators.expect_macd().returning(|_| Ok(bearish_macd()));
        indicators.expect_rsi().returning(|_| Ok(65.0));

        let decision = engine(broker, indicators)
            .sell_signal(&position("AAA", dec!(10), dec!(0.049)))
            .await
            .unwrap();
        assert_eq!(decision, ExitDecision::Hold);
    }
}
