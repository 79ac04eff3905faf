//! Binance market data provider implementation.
//!
//! This module provides spot market data from the Binance public data API:
//! - Current prices via /api/v3/ticker/price
//! - 24-hour rolling statistics via /api/v3/ticker/24hr
//! - Historical candles via /api/v3/klines
//!
//! The data-api.binance.vision host serves market data only and needs no API key.
//! API documentation: https://developers.binance.com/docs/binance-spot-api-docs/rest-api

mod models;

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{DailyStats, DailyStatsMap, HistoricalCandle, PriceSnapshot, Symbol};
use crate::provider::MarketDataProvider;

use models::{
    ErrorResponse, KlineRow, Ticker24hrResponse, TickerPriceResponse, INVALID_SYMBOL_CODE,
    KLINE_FIELDS,
};

/// Public market data host, no restrictions and no API key.
pub const DEFAULT_BASE_URL: &str = "https://data-api.binance.vision";
const PROVIDER_ID: &str = "BINANCE";

const TICKER_PRICE_ENDPOINT: &str = "/api/v3/ticker/price";
const TICKER_24HR_ENDPOINT: &str = "/api/v3/ticker/24hr";
const KLINES_ENDPOINT: &str = "/api/v3/klines";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// BinanceProvider
// ============================================================================

/// Binance spot market data provider.
pub struct BinanceProvider {
    client: Client,
    base_url: String,
}

impl BinanceProvider {
    /// Create a new provider talking to `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_client(client, base_url)
    }

    /// Create a provider that reuses an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to the Binance API and return the raw body.
    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<String, MarketDataError> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("Binance request: {} with {} params", endpoint, params.len());

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();

        // 418 is sent to clients that kept going after a 429
        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::IM_A_TEAPOT {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_body(status, &body));
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for BinanceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_prices(&self, symbols: &[Symbol]) -> Result<PriceSnapshot, MarketDataError> {
        let param = symbols_param(symbols)?;
        let text = self
            .fetch(TICKER_PRICE_ENDPOINT, &[("symbols", param.as_str())])
            .await?;
        let prices = parse_price_tickers(&text)?;

        debug!("Binance: fetched {} prices", prices.len());
        Ok(prices)
    }

    async fn get_daily_stats(&self, symbols: &[Symbol]) -> Result<DailyStatsMap, MarketDataError> {
        let param = symbols_param(symbols)?;
        let text = self
            .fetch(TICKER_24HR_ENDPOINT, &[("symbols", param.as_str())])
            .await?;
        let stats = parse_daily_stats(&text)?;

        debug!("Binance: fetched 24hr stats for {} symbols", stats.len());
        Ok(stats)
    }

    async fn get_historical_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: u16,
    ) -> Result<Vec<HistoricalCandle>, MarketDataError> {
        let limit = limit.to_string();
        let params = [("symbol", symbol), ("interval", interval), ("limit", limit.as_str())];
        let text = self.fetch(KLINES_ENDPOINT, &params).await?;
        let candles = parse_klines(&text)?;

        debug!(
            "Binance: fetched {} {} candles for {}",
            candles.len(),
            interval,
            symbol
        );
        Ok(candles)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Encode a symbol list the way the batched ticker endpoints expect: `["A","B"]`.
fn symbols_param(symbols: &[Symbol]) -> Result<String, MarketDataError> {
    serde_json::to_string(symbols).map_err(|e| MarketDataError::InvalidResponse {
        provider: PROVIDER_ID.to_string(),
        message: format!("Failed to encode symbols: {}", e),
    })
}

/// Timeouts and connection failures keep their own variants; anything else
/// reqwest reports before a response arrives is a provider error.
fn map_request_error(e: reqwest::Error) -> MarketDataError {
    if e.is_timeout() {
        MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        }
    } else if e.is_connect() {
        MarketDataError::Network(e)
    } else {
        MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Request failed: {}", e),
        }
    }
}

fn map_error_body(status: StatusCode, body: &str) -> MarketDataError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error) if error.code == INVALID_SYMBOL_CODE => {
            MarketDataError::SymbolNotFound(error.msg)
        }
        Ok(error) => MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("HTTP {} - {} ({})", status, error.msg, error.code),
        },
        Err(_) => MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("HTTP {} - {}", status, body),
        },
    }
}

fn invalid(message: String) -> MarketDataError {
    MarketDataError::InvalidResponse {
        provider: PROVIDER_ID.to_string(),
        message,
    }
}

fn parse_decimal(field: &str, value: &str) -> Result<Decimal, MarketDataError> {
    Decimal::from_str(value.trim())
        .map_err(|e| invalid(format!("{} is not a number ({:?}): {}", field, value, e)))
}

/// Parse a price ticker payload.
///
/// An entry whose price does not parse is left out of the snapshot, which
/// drops that symbol for the cycle rather than failing the whole batch.
fn parse_price_tickers(text: &str) -> Result<PriceSnapshot, MarketDataError> {
    let items: Vec<TickerPriceResponse> = serde_json::from_str(text)
        .map_err(|e| invalid(format!("Failed to parse price response: {}", e)))?;

    let mut prices = PriceSnapshot::with_capacity(items.len());
    for item in items {
        match parse_decimal("price", &item.price) {
            Ok(price) => {
                prices.insert(item.symbol, price);
            }
            Err(e) => warn!("Skipping price for {}: {}", item.symbol, e),
        }
    }
    Ok(prices)
}

/// Parse a 24hr ticker payload. Entries with unparseable fields are skipped.
fn parse_daily_stats(text: &str) -> Result<DailyStatsMap, MarketDataError> {
    let items: Vec<Ticker24hrResponse> = serde_json::from_str(text)
        .map_err(|e| invalid(format!("Failed to parse 24hr response: {}", e)))?;

    let mut stats = DailyStatsMap::with_capacity(items.len());
    for item in items {
        match to_daily_stats(&item) {
            Ok(entry) => {
                stats.insert(item.symbol, entry);
            }
            Err(e) => warn!("Skipping 24hr stats for {}: {}", item.symbol, e),
        }
    }
    Ok(stats)
}

fn to_daily_stats(item: &Ticker24hrResponse) -> Result<DailyStats, MarketDataError> {
    Ok(DailyStats {
        price_change: parse_decimal("priceChange", &item.price_change)?,
        price_change_percent: parse_decimal("priceChangePercent", &item.price_change_percent)?,
        high_price: parse_decimal("highPrice", &item.high_price)?,
        low_price: parse_decimal("lowPrice", &item.low_price)?,
        volume: parse_decimal("volume", &item.volume)?,
        open_price: parse_decimal("openPrice", &item.open_price)?,
        prev_close_price: parse_decimal("prevClosePrice", &item.prev_close_price)?,
    })
}

/// Parse a klines payload. A malformed row fails the whole window so the
/// weekly baseline is never computed from a partial series.
fn parse_klines(text: &str) -> Result<Vec<HistoricalCandle>, MarketDataError> {
    let rows: Vec<KlineRow> = serde_json::from_str(text)
        .map_err(|e| invalid(format!("Failed to parse klines response: {}", e)))?;

    let mut candles = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_kline_row(index, row))
        .collect::<Result<Vec<_>, _>>()?;

    // Binance already sends oldest first; keep it guaranteed.
    candles.sort_by_key(|c| c.open_time);
    Ok(candles)
}

fn parse_kline_row(index: usize, row: &KlineRow) -> Result<HistoricalCandle, MarketDataError> {
    if row.len() < KLINE_FIELDS {
        return Err(invalid(format!(
            "Kline row {} has {} fields, expected at least {}",
            index,
            row.len(),
            KLINE_FIELDS
        )));
    }

    let time = |pos: usize, name: &str| {
        row[pos]
            .as_i64()
            .ok_or_else(|| invalid(format!("Kline row {} {} is not an integer", index, name)))
    };
    let number = |pos: usize, name: &str| match row[pos].as_str() {
        Some(s) => parse_decimal(name, s),
        None => Err(invalid(format!("Kline row {} {} is not a string", index, name))),
    };

    Ok(HistoricalCandle {
        open_time: time(0, "openTime")?,
        open: number(1, "open")?,
        high: number(2, "high")?,
        low: number(3, "low")?,
        close: number(4, "close")?,
        volume: number(5, "volume")?,
        close_time: time(6, "closeTime")?,
    })
}

// ============================================================================
// Tests
// ============================================================================
