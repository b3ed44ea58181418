//! Strategy core.
//!
//! The signal engine decides buy/sell/hold from indicator readings and a
//! fresh account snapshot, the position sizer turns decisions into order
//! quantities, the watchlist builder bounds the day's candidates, and the
//! orchestrator drives one sequential pass over them.

mod orchestrator;
mod signal;
mod sizing;
mod watchlist;

pub use orchestrator::{BuyOutcome, Orchestrator};
pub use signal::{BuyDecision, ExitDecision, SignalEngine};
pub use sizing::{PositionSizer, Sizing};
pub use watchlist::WatchlistBuilder;

#[cfg(test)]
pub(crate) mod test_support;
