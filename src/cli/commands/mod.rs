//! Command implementations.

pub mod buy;
pub mod push;
pub mod sell;

use anyhow::Result;
use std::sync::Arc;
use trader_broker::{AlpacaBroker, AlpacaConfig};
use trader_config::{
    Credentials, RateLimitSettings, SizingSettings, StrategySettings, WatchlistSettings,
};
use trader_core::traits::{Broker, QuoteProvider, SnapshotStore};
use trader_core::types::{AccountSnapshot, Order, OrderCategory, OrderRecord};
use trader_data::{FmpScreener, PolygonIndicators};
use trader_persist::FirestoreStore;
use trader_strategy::{Orchestrator, PositionSizer, SignalEngine, WatchlistBuilder};
use tracing::{info, warn};

/// Decode an opaque scheduler token. Unknown tokens are a logged no-op,
/// never an error: a misconfigured schedule must not look like a failed
/// pass to the scheduler's retry policy.
pub async fn trigger(message: &str) -> Result<()> {
    info!("Scheduler message: {message}");
    match message {
        "buy" => buy::run().await,
        "sell" => sell::run().await,
        "push" => push::run().await,
        other => {
            info!("Ignoring unknown trigger token: {other}");
            Ok(())
        }
    }
}

/// Per-invocation gateway set.
///
/// Constructed fresh for every trigger; nothing survives across
/// invocations, so there is no stale-connection or cross-run state to
/// reason about.
pub struct Runtime {
    pub orchestrator: Orchestrator,
    pub store: Arc<dyn SnapshotStore>,
}

impl Runtime {
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;

        let alpaca = Arc::new(AlpacaBroker::new(AlpacaConfig::from_credentials(&credentials))?);
        let broker: Arc<dyn Broker> = alpaca.clone();
        let quotes: Arc<dyn QuoteProvider> = alpaca;
        let indicators = Arc::new(PolygonIndicators::new(
            credentials.polygon_key.clone(),
            RateLimitSettings::default(),
        ));
        let screener = Arc::new(FmpScreener::new(credentials.fmp_key.clone()));
        let store = Arc::new(FirestoreStore::new(
            credentials.firestore_project.clone(),
            credentials.firestore_token.clone(),
        ));

        let signals = SignalEngine::new(broker.clone(), indicators, StrategySettings::default());
        let sizer = PositionSizer::new(quotes, SizingSettings::default());
        let watchlist = WatchlistBuilder::new(screener, WatchlistSettings::default());

        Ok(Self {
            orchestrator: Orchestrator::new(broker, signals, sizer, watchlist),
            store,
        })
    }

    pub async fn push_orders_best_effort(&self, orders: &[Order], category: OrderCategory) {
        push_orders_best_effort(self.store.as_ref(), orders, category).await;
    }
}

/// Push order records, swallowing persistence failures. A failed write
/// must never fail or retry a completed trading pass.
pub async fn push_orders_best_effort(
    store: &dyn SnapshotStore,
    orders: &[Order],
    category: OrderCategory,
) {
    if orders.is_empty() {
        info!("No new order data today");
        return;
    }
    let records: Vec<OrderRecord> = orders.iter().map(OrderRecord::from).collect();
    if let Err(err) = store.push_orders(&records, category).await {
        warn!("Failed to persist order records: {err}");
    }
}

/// Push the end-of-day portfolio snapshot, swallowing persistence failures.
pub async fn push_portfolio_best_effort(store: &dyn SnapshotStore, snapshot: &AccountSnapshot) {
    if let Err(err) = store.push_portfolio(snapshot).await {
        warn!("Failed to persist portfolio snapshot: {err}");
    }
}
