//! Brokerage integration.

mod alpaca;

pub use alpaca::{AlpacaBroker, AlpacaConfig};
