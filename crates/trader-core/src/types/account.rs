//! Account and position snapshots.
//!
//! Both are owned by the brokerage; the runner only reads a point-in-time
//! snapshot and acts on it. Nothing here is cached between decision points.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Brokerage account snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Cash available for new positions
    pub cash: Decimal,
    /// Total account equity
    pub equity: Decimal,
    /// Buying power (may exceed cash on margin accounts)
    pub buying_power: Decimal,
    /// Whether the account is flagged as a pattern day trader
    pub pattern_day_trader: bool,
}

/// An open position held at the brokerage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Symbol
    pub symbol: String,
    /// Total shares held
    pub qty: Decimal,
    /// Shares not tied up in open orders, available to liquidate
    pub qty_available: Decimal,
    /// Average entry price
    pub avg_entry_price: Decimal,
    /// Current market price
    pub current_price: Decimal,
    /// Market value (qty * current_price)
    pub market_value: Decimal,
    /// Unrealized profit/loss in dollars
    pub unrealized_pl: Decimal,
    /// Unrealized P&L as a fraction of cost basis (0.05 = +5%)
    pub unrealized_plpc: Decimal,
}

