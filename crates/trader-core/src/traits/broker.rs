//! Broker trait definition.

use crate::error::ProviderError;
use crate::types::{Account, Order, OrderFilter, OrderRequest, Position};
use async_trait::async_trait;

/// Trait for the brokerage integration.
///
/// The broker owns the account and position state; the runner reads fresh
/// snapshots before every decision and never caches them.
#[async_trait]
pub trait Broker: Send + Sync {
    /// Get a fresh account snapshot.
    async fn get_account(&self) -> Result<Account, ProviderError>;

    /// Submit a new order.
    ///
    /// # Returns
    /// The created order; `filled_avg_price` is `None` when the venue has
    /// not confirmed a fill yet.
    async fn submit_order(&self, request: OrderRequest) -> Result<Order, ProviderError>;

    /// Get the open position for a symbol, if one exists.
    async fn get_position(&self, symbol: &str) -> Result<Option<Position>, ProviderError>;

    /// Get all open positions.
    async fn get_positions(&self) -> Result<Vec<Position>, ProviderError>;

    /// Query the order history.
    async fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, ProviderError>;

    /// Get the broker name.
    fn name(&self) -> &str;
}
