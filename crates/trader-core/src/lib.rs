//! Core types and traits for the strategy runner.
//!
//! This crate provides the foundational building blocks including:
//! - Account, position, and order types
//! - Persistence record schemas
//! - Gateway traits for the broker, market-data providers, and the
//!   snapshot store

pub mod types;
pub mod traits;
pub mod error;

pub use error::{PersistenceError, ProviderError, TraderError, TraderResult};
pub use types::*;
pub use traits::*;
