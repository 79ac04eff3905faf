//! Binance public data API response models.
//!
//! Binance sends every price and quantity as a decimal string, which keeps
//! full precision. The strings are parsed straight into `Decimal`.

use serde::Deserialize;

/// Item of the /api/v3/ticker/price response
#[derive(Debug, Deserialize)]
pub struct TickerPriceResponse {
    pub symbol: String,
    pub price: String,
}

/// Item of the /api/v3/ticker/24hr response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24hrResponse {
    pub symbol: String,
    pub price_change: String,
    pub price_change_percent: String,
    pub high_price: String,
    pub low_price: String,
    pub volume: String,
    pub open_price: String,
    pub prev_close_price: String,
    // Note: weightedAvgPrice, lastPrice, bid/ask, quoteVolume, counts exist but are not used
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub code: i64,
    pub msg: String,
}

/// Kline rows are positional arrays:
/// `[openTime, open, high, low, close, volume, closeTime, quoteVolume, trades, ...]`
pub type KlineRow = Vec<serde_json::Value>;

/// Number of leading kline positions that are consumed.
pub const KLINE_FIELDS: usize = 7;

/// Binance error code for an unknown trading pair.
pub const INVALID_SYMBOL_CODE: i64 = -1121;
