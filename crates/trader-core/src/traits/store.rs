//! Snapshot store trait definition.

use crate::error::PersistenceError;
use crate::types::{AccountSnapshot, OrderCategory, OrderRecord};
use async_trait::async_trait;

/// Best-effort persistence for finalized account and order records.
///
/// Callers must catch and log every error at this boundary; a failed write
/// never blocks or rolls back a completed trading pass.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist an end-of-day account snapshot.
    async fn push_portfolio(&self, snapshot: &AccountSnapshot) -> Result<(), PersistenceError>;

    /// Persist a batch of order records under the given category.
    async fn push_orders(
        &self,
        records: &[OrderRecord],
        category: OrderCategory,
    ) -> Result<(), PersistenceError>;
}
