//! Pass orchestration.
//!
//! One invocation runs exactly one pass to completion. Tickers are
//! processed strictly in watchlist/position order with no parallel
//! dispatch: the spend counter and the evolving cash balance form a
//! read-then-act chain that a concurrent sibling order would invalidate.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use trader_core::error::{TraderError, TraderResult};
use trader_core::traits::Broker;
use trader_core::types::{Account, Order, OrderFilter, OrderRequest, Side};
use tracing::{info, warn};

use crate::signal::{BuyDecision, ExitDecision, SignalEngine};
use crate::sizing::{PositionSizer, Sizing};
use crate::watchlist::WatchlistBuilder;

const EOD_ORDER_LIMIT: usize = 500;

/// Result of a buy pass.
#[derive(Debug)]
pub enum BuyOutcome {
    /// At least one order was placed; carries the accumulated orders.
    Executed(Vec<Order>),
    /// The pass completed without spending. Reportable, never an error.
    NothingBought,
}

/// Drives the daily buy and sell passes and end-of-day collection.
pub struct Orchestrator {
    broker: Arc<dyn Broker>,
    signals: SignalEngine,
    sizer: PositionSizer,
    watchlist: WatchlistBuilder,
}

impl Orchestrator {
    pub fn new(
        broker: Arc<dyn Broker>,
        signals: SignalEngine,
        sizer: PositionSizer,
        watchlist: WatchlistBuilder,
    ) -> Self {
        Self { broker, signals, sizer, watchlist }
    }

    /// Run the daily buy pass over the watchlist.
    ///
    /// `NoFunds` is a hard stop: remaining tickers are not evaluated. A
    /// ticker that cannot be sized is skipped, not fatal. Spend accounting
    /// prefers the confirmed fill value and falls back to the sizing quote
    /// times quantity while the fill is pending.
    pub async fn run_buy_pass(&self) -> TraderResult<BuyOutcome> {
        info!("Buy pass started");
        let watchlist = self.watchlist.build().await.map_err(TraderError::from)?;

        let mut spent_already = Decimal::ZERO;
        let mut orders = Vec::new();

        for entry in &watchlist {
            let (decision, portfolio_value) =
                self.signals.buy_signal(&entry.symbol, spent_already).await?;

            match decision {
                BuyDecision::Hold => continue,
                BuyDecision::NoFunds => {
                    info!("Daily allocation exhausted, finished buying for the day");
                    break;
                }
                BuyDecision::Buy => {
                    let sizing = self
                        .sizer
                        .buy_quantity(&entry.symbol, portfolio_value)
                        .await
                        .map_err(TraderError::from)?;

                    match sizing {
                        Sizing::Shares { qty, ask } if qty > Decimal::ZERO => {
                            info!("Buying {} shares of {}", qty, entry.symbol);
                            let request = OrderRequest::market(&entry.symbol, Side::Buy, qty);
                            let order = self.broker.submit_order(request).await?;
                            spent_already += order.filled_value().unwrap_or(ask * qty);
                            orders.push(order);
                        }
                        Sizing::Shares { qty, .. } => {
                            warn!("{}: sized to {} shares, skipping", entry.symbol, qty);
                        }
                        Sizing::OutOfRange { ask } => {
                            warn!("{}: ask {} outside tradable range, skipping", entry.symbol, ask);
                        }
                    }
                }
            }
        }

        if spent_already > Decimal::ZERO {
            info!("Buy pass complete, spent {}", spent_already);
            Ok(BuyOutcome::Executed(orders))
        } else if spent_already == Decimal::ZERO {
            info!("No stocks to buy today");
            Ok(BuyOutcome::NothingBought)
        } else {
            Err(TraderError::AccountingInvariant { spent: spent_already })
        }
    }

    /// Run the sell pass over all open positions.
    ///
    /// The position snapshot is taken once at pass start; every position is
    /// evaluated with no early termination, since selling frees capital
    /// rather than consuming it.
    pub async fn run_sell_pass(&self) -> TraderResult<Vec<Order>> {
        info!("Sell pass started");
        let positions = self.broker.get_positions().await?;

        let mut orders = Vec::new();
        for position in &positions {
            if position.qty_available <= Decimal::ZERO {
                warn!("{}: all shares tied up in open orders, skipping", position.symbol);
                continue;
            }
            if self.signals.sell_signal(position).await? == ExitDecision::Sell {
                let request =
                    OrderRequest::market(&position.symbol, Side::Sell, position.qty_available);
                let order = self.broker.submit_order(request).await?;
                info!("Liquidated {} ({} shares)", position.symbol, position.qty_available);
                orders.push(order);
            }
        }

        info!("Sell pass complete, {} positions liquidated", orders.len());
        Ok(orders)
    }

    /// Fetch the end-of-day account snapshot and the day's closed orders.
    pub async fn collect_snapshot(
        &self,
        now: DateTime<Utc>,
    ) -> TraderResult<(Account, Vec<Order>)> {
        let account = self.broker.get_account().await?;
        let filter = OrderFilter::closed_since_start_of_day(now, EOD_ORDER_LIMIT);
        let orders = self.broker.get_orders(&filter).await?;
        Ok((account, orders))
    }
}
