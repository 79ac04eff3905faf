//! Coinfolio Core - holdings registry, valuation engine and refresh orchestration.
//!
//! Everything in this crate except [`refresh`] is pure: it turns prices and
//! statistics into per-asset P&L, returns and portfolio totals. The refresh
//! orchestrator is the only component that talks to a market data provider.

pub mod assets;
pub mod errors;
pub mod portfolio;
pub mod refresh;
pub mod utils;

// Re-export common types from asset and portfolio modules
pub use assets::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
