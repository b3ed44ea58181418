//! Order types and structures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Time in force. The runner only places day orders; they are canceled
/// if unfilled after the closing auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    #[default]
    Day,
    #[serde(rename = "gtc")]
    GTC,
}

/// Order status as reported by the brokerage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Accepted by the broker but not yet filled
    Pending,
    /// Partially filled
    PartiallyFilled,
    /// Completely filled
    Filled,
    /// Canceled, expired, or rejected
    Canceled,
}

/// A market order intent. Constructed once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Symbol to trade
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Quantity in whole shares
    pub qty: Decimal,
    /// Time in force
    pub time_in_force: TimeInForce,
}

impl OrderRequest {
    /// Create a day market order request.
    pub fn market(symbol: impl Into<String>, side: Side, qty: Decimal) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            side,
            qty,
            time_in_force: TimeInForce::Day,
        }
    }
}

/// An order as returned by the brokerage. `filled_avg_price` stays `None`
/// until the venue confirms a fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Broker-assigned order ID
    pub id: Uuid,
    /// Client-provided order ID
    pub client_order_id: String,
    /// Symbol traded
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Current status
    pub status: OrderStatus,
    /// Original quantity
    pub qty: Decimal,
    /// Quantity filled so far
    pub filled_qty: Decimal,
    /// Average fill price, if any fill has settled
    pub filled_avg_price: Option<Decimal>,
    /// When the order was created
    pub created_at: DateTime<Utc>,
    /// When the order was filled
    pub filled_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Total settled value of the order, if a fill price is known.
    pub fn filled_value(&self) -> Option<Decimal> {
        self.filled_avg_price.map(|price| price * self.filled_qty)
    }
}

/// Query filter for the broker's order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Only closed (terminal) orders when true, otherwise open orders
    pub closed: bool,
    /// Only orders created after this instant
    pub after: DateTime<Utc>,
    /// Maximum number of orders returned
    pub limit: usize,
}

impl OrderFilter {
    /// Closed orders created since the start of the given day, capped at
    /// the broker's page limit.
    pub fn closed_since_start_of_day(now: DateTime<Utc>, limit: usize) -> Self {
        let after = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or(now);
        Self { closed: true, after, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_request_market() {
        let request = OrderRequest::market("aapl", Side::Buy, dec!(15));
        assert_eq!(request.symbol, "AAPL");
        assert_eq!(request.side, Side::Buy);
        assert_eq!(request.qty, dec!(15));
        assert_eq!(request.time_in_force, TimeInForce::Day);
    }

    #[test]
    fn test_filled_value() {
        let order = Order {
            id: Uuid::new_v4(),
            client_order_id: "c1".to_string(),
            symbol: "AAPL".to_string(),
            side: Side::Buy,
            status: OrderStatus::Filled,
            qty: dec!(10),
            filled_qty: dec!(10),
            filled_avg_price: Some(dec!(150.00)),
            created_at: Utc::now(),
            filled_at: Some(Utc::now()),
        };
        assert_eq!(order.filled_value(), Some(dec!(1500.00)));
    }

    #[test]
    fn test_order_filter_start_of_day() {
        let now = DateTime::parse_from_rfc3339("2024-06-03T15:42:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let filter = OrderFilter::closed_since_start_of_day(now, 500);
        assert!(filter.closed);
        assert_eq!(filter.limit, 500);
        assert_eq!(filter.after.to_rfc3339(), "2024-06-03T00:00:00+00:00");
    }
}
