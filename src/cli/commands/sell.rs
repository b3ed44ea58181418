//! Liquidation pass.

use anyhow::Result;
use trader_core::types::OrderCategory;

use super::Runtime;

pub async fn run() -> Result<()> {
    let runtime = Runtime::from_env()?;

    let orders = runtime.orchestrator.run_sell_pass().await?;
    runtime
        .push_orders_best_effort(&orders, OrderCategory::SellExecution)
        .await;
    Ok(())
}
