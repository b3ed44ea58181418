//! Error types for the strategy runner.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level runner error.
#[derive(Error, Debug)]
pub enum TraderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The daily spend counter left its valid range. Unreachable through the
    /// normal buy pass; raised only to surface a logic defect.
    #[error("Spend accounting invariant violated: spent {spent}")]
    AccountingInvariant { spent: Decimal },
}

/// Transport and protocol failures from the external gateways
/// (brokerage, indicator provider, quote feed, screener).
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Order rejected: {0}")]
    OrderRejected(String),
}

/// Failures at the snapshot-store boundary. Always caught and logged
/// there; a failed write must never roll back a completed trade.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Encode error: {0}")]
    Encode(String),
}

/// Result type alias for runner operations.
pub type TraderResult<T> = Result<T, TraderError>;
