//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `types` - Type aliases for common identifiers (Symbol)
//! - `ticker` - Current prices and 24-hour statistics (PriceSnapshot, DailyStats)
//! - `candle` - Historical OHLCV candles (HistoricalCandle)

mod candle;
mod ticker;
mod types;

pub use candle::HistoricalCandle;
pub use ticker::{DailyStats, DailyStatsMap, PriceSnapshot};
pub use types::Symbol;
