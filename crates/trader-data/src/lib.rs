//! Market-data gateways.
//!
//! The Polygon client serves RSI/MACD lookups behind a request-quota
//! limiter; the FMP client serves the daily most-actives screen.

mod fmp;
mod polygon;
mod rate_limit;

pub use fmp::FmpScreener;
pub use polygon::PolygonIndicators;
pub use rate_limit::RateLimiter;
