//! Persistence record schemas.
//!
//! Fixed field sets per record kind, converted from the live broker types
//! before anything reaches the snapshot store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Account, Order, Side};

/// Which collection a batch of order records belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderCategory {
    /// End-of-day order history
    EndOfDay,
    /// Orders placed by a buy pass
    BuyExecution,
    /// Orders placed by a sell pass
    SellExecution,
}

/// End-of-day account snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub date: String,
    pub cash: Decimal,
    pub equity: Decimal,
    pub buying_power: Decimal,
    pub pattern_day_trader: bool,
}

impl AccountSnapshot {
    pub fn from_account(account: &Account, as_of: DateTime<Utc>) -> Self {
        Self {
            date: as_of.date_naive().to_string(),
            cash: account.cash,
            equity: account.equity,
            buying_power: account.buying_power,
            pattern_day_trader: account.pattern_day_trader,
        }
    }
}

/// One persisted order execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub client_order_id: String,
    pub symbol: String,
    pub side: Side,
    pub qty: Decimal,
    pub filled_qty: Decimal,
    pub filled_avg_price: Option<Decimal>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub filled_at: Option<DateTime<Utc>>,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id.to_string(),
            client_order_id: order.client_order_id.clone(),
            symbol: order.symbol.clone(),
            side: order.side,
            qty: order.qty,
            filled_qty: order.filled_qty,
            filled_avg_price: order.filled_avg_price,
            status: format!("{:?}", order.status).to_lowercase(),
            created_at: order.created_at,
            filled_at: order.filled_at,
        }
    }
}
