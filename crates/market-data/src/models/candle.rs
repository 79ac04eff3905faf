use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One historical OHLCV candle.
///
/// Candle windows are always ordered oldest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalCandle {
    /// Candle open time (Unix milliseconds)
    pub open_time: i64,

    /// Opening price
    pub open: Decimal,

    /// Highest price during the candle
    pub high: Decimal,

    /// Lowest price during the candle
    pub low: Decimal,

    /// Closing price
    pub close: Decimal,

    /// Base asset volume
    pub volume: Decimal,

    /// Candle close time (Unix milliseconds)
    pub close_time: i64,
}

impl HistoricalCandle {
    /// Create a candle from its OHLCV values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        open_time: i64,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
        close_time: i64,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
            close_time,
        }
    }

    /// Open time as a UTC timestamp, if it is in range.
    pub fn opened_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.open_time)
    }
}
