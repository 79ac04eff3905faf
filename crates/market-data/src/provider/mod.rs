//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Binance public data API provider
//!
//! The refresh orchestrator only talks to the trait, so tests can swap in an
//! in-memory provider.

mod traits;

pub mod binance;

// Re-exports
pub use traits::MarketDataProvider;
