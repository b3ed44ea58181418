//! Market-data types from the external providers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One MACD reading. A single point-in-time read, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    /// MACD line value
    pub value: f64,
    /// Signal line value
    pub signal: f64,
    /// Histogram (value - signal)
    pub histogram: f64,
}

impl Macd {
    /// Bullish crossover: MACD line above signal with positive histogram.
    /// Strict inequalities; a zero histogram does not qualify.
    pub fn is_bullish(&self) -> bool {
        self.value > self.signal && self.histogram > 0.0
    }

    /// Bearish crossover: MACD line below signal with negative histogram.
    pub fn is_bearish(&self) -> bool {
        self.value < self.signal && self.histogram < 0.0
    }
}

/// One candidate ticker from the most-actives screen, externally ranked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerEntry {
    /// Symbol
    pub symbol: String,
    /// Last traded price reported by the screener
    pub price: Decimal,
}
