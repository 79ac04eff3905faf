//! Coinfolio Market Data Crate
//!
//! This crate fetches the raw market data the portfolio engine consumes from
//! an exchange's public REST API.
//!
//! # Overview
//!
//! Three kinds of data are fetched each refresh cycle:
//! - Current prices for every configured symbol (one batched call)
//! - 24-hour rolling statistics for every configured symbol (one batched call)
//! - A short window of historical candles, one call per symbol
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |  RefreshService  | --> |  MarketDataProvider  |  (trait)
//! +------------------+     +----------------------+
//!                                     |
//!                                     v
//!                          +----------------------+
//!                          |   BinanceProvider    |  (public data API)
//!                          +----------------------+
//!                                     |
//!                                     v
//!                 +-------------------------------------------+
//!                 | PriceSnapshot / DailyStats / Candles      |
//!                 +-------------------------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PriceSnapshot`] - Symbol to current price mapping
//! - [`DailyStats`] - 24-hour statistics for one symbol
//! - [`HistoricalCandle`] - One OHLCV candle
//! - [`MarketDataError`] - Errors raised while talking to a provider

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{MarketDataError, RetryClass};

pub use models::{DailyStats, DailyStatsMap, HistoricalCandle, PriceSnapshot, Symbol};

pub use provider::binance::{BinanceProvider, DEFAULT_BASE_URL};
pub use provider::MarketDataProvider;
