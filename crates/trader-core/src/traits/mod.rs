//! Gateway traits.

mod broker;
mod market_data;
mod store;

pub use broker::Broker;
pub use market_data::{IndicatorProvider, QuoteProvider, Screener};
pub use store::SnapshotStore;
