//! Daily buy pass.

use anyhow::Result;
use trader_core::types::OrderCategory;
use trader_strategy::BuyOutcome;
use tracing::info;

use super::Runtime;

pub async fn run() -> Result<()> {
    let runtime = Runtime::from_env()?;

    match runtime.orchestrator.run_buy_pass().await? {
        BuyOutcome::Executed(orders) => {
            runtime
                .push_orders_best_effort(&orders, OrderCategory::BuyExecution)
                .await;
        }
        BuyOutcome::NothingBought => {
            info!("Nothing bought, no executions to persist");
        }
    }
    Ok(())
}
