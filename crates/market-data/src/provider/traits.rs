//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{DailyStatsMap, HistoricalCandle, PriceSnapshot, Symbol};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use coinfolio_market_data::provider::MarketDataProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement fetch methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "BINANCE". Used for logging and errors.
    fn id(&self) -> &'static str;

    /// Fetch the current price of every symbol in one batched call.
    ///
    /// Symbols the provider does not return are simply absent from the map.
    async fn get_prices(&self, symbols: &[Symbol]) -> Result<PriceSnapshot, MarketDataError>;

    /// Fetch 24-hour statistics for every symbol in one batched call.
    ///
    /// Symbols the provider does not return are simply absent from the map.
    async fn get_daily_stats(&self, symbols: &[Symbol]) -> Result<DailyStatsMap, MarketDataError>;

    /// Fetch the most recent `limit` candles of `interval` width for one symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The trading pair, e.g. "SUIUSDT"
    /// * `interval` - Candle width in the provider's notation, e.g. "1d"
    /// * `limit` - Number of candles to return
    ///
    /// # Returns
    ///
    /// Candles ordered oldest first. A short or empty window is not an error.
    async fn get_historical_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: u16,
    ) -> Result<Vec<HistoricalCandle>, MarketDataError>;
}
