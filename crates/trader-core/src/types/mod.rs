//! Shared data types.

mod account;
mod market;
mod order;
mod records;

pub use account::{Account, Position};
pub use market::{Macd, ScreenerEntry};
pub use order::{Order, OrderFilter, OrderRequest, OrderStatus, Side, TimeInForce};
pub use records::{AccountSnapshot, OrderCategory, OrderRecord};
