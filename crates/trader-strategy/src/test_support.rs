//! Mock gateways and fixture builders shared across the strategy tests.

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trader_core::error::ProviderError;
use trader_core::traits::{Broker, IndicatorProvider, QuoteProvider, Screener};
use trader_core::types::{
    Account, Macd, Order, OrderFilter, OrderRequest, OrderStatus, Position, ScreenerEntry,
};
use uuid::Uuid;

mock! {
    pub Broker {}

    #[async_trait]
    impl Broker for Broker {
        async fn get_account(&self) -> Result<Account, ProviderError>;
        async fn submit_order(&self, request: OrderRequest) -> Result<Order, ProviderError>;
        async fn get_position(&self, symbol: &str) -> Result<Option<Position>, ProviderError>;
        async fn get_positions(&self) -> Result<Vec<Position>, ProviderError>;
        async fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, ProviderError>;
        fn name(&self) -> &str;
    }
}

mock! {
    pub Indicators {}

    #[async_trait]
    impl IndicatorProvider for Indicators {
        async fn rsi(&self, symbol: &str) -> Result<f64, ProviderError>;
        async fn macd(&self, symbol: &str) -> Result<Macd, ProviderError>;
    }
}

mock! {
    pub Quotes {}

    #[async_trait]
    impl QuoteProvider for Quotes {
        async fn latest_ask(&self, symbol: &str) -> Result<Decimal, ProviderError>;
    }
}

mock! {
    pub Screen {}

    #[async_trait]
    impl Screener for Screen {
        async fn most_active(&self) -> Result<Vec<ScreenerEntry>, ProviderError>;
    }
}

pub fn account(cash: Decimal) -> Account {
    Account {
        cash,
        equity: cash,
        buying_power: cash * dec!(2),
        pattern_day_trader: false,
    }
}

pub fn position(symbol: &str, qty: Decimal, unrealized_plpc: Decimal) -> Position {
    Position {
        symbol: symbol.to_string(),
        qty,
        qty_available: qty,
        avg_entry_price: dec!(100),
        current_price: dec!(100),
        market_value: qty * dec!(100),
        unrealized_pl: Decimal::ZERO,
        unrealized_plpc,
    }
}

pub fn entry(symbol: &str, price: Decimal) -> ScreenerEntry {
    ScreenerEntry { symbol: symbol.to_string(), price }
}

pub fn filled_order(request: &OrderRequest, fill_price: Decimal) -> Order {
    Order {
        id: Uuid::new_v4(),
        client_order_id: Uuid::new_v4().to_string(),
        symbol: request.symbol.clone(),
        side: request.side,
        status: OrderStatus::Filled,
        qty: request.qty,
        filled_qty: request.qty,
        filled_avg_price: Some(fill_price),
        created_at: Utc::now(),
        filled_at: Some(Utc::now()),
    }
}

pub fn pending_order(request: &OrderRequest) -> Order {
    Order {
        id: Uuid::new_v4(),
        client_order_id: Uuid::new_v4().to_string(),
        symbol: request.symbol.clone(),
        side: request.side,
        status: OrderStatus::Pending,
        qty: request.qty,
        filled_qty: Decimal::ZERO,
        filled_avg_price: None,
        created_at: Utc::now(),
        filled_at: None,
    }
}

pub fn bullish_macd() -> Macd {
    Macd { value: 2.0, signal: 1.0, histogram: 1.0 }
}

pub fn bearish_macd() -> Macd {
    Macd { value: -2.0, signal: -1.0, histogram: -1.0 }
}
