//! End-of-day snapshot push.

use anyhow::Result;
use chrono::Utc;
use trader_core::types::{AccountSnapshot, OrderCategory};

use super::{push_portfolio_best_effort, Runtime};

pub async fn run() -> Result<()> {
    let runtime = Runtime::from_env()?;

    let now = Utc::now();
    let (account, orders) = runtime.orchestrator.collect_snapshot(now).await?;

    let snapshot = AccountSnapshot::from_account(&account, now);
    push_portfolio_best_effort(runtime.store.as_ref(), &snapshot).await;
    runtime
        .push_orders_best_effort(&orders, OrderCategory::EndOfDay)
        .await;
    Ok(())
}
