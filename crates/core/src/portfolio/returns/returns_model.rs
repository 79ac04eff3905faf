use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 24-hour move of one symbol, lifted from its daily statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReturn {
    pub price_change: Decimal,
    pub price_change_percent: Decimal,
    pub daily_high: Decimal,
    pub daily_low: Decimal,
}

/// Move over the candle window.
///
/// `weekly_high`/`weekly_low` are only present when the window had enough
/// candles to compute a change; they are left out of the JSON otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReturn {
    pub weekly_change: Decimal,
    pub weekly_change_percent: Decimal,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weekly_high: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weekly_low: Option<Decimal>,
}

impl WeeklyReturn {
    /// The value used when there is no usable candle window.
    pub fn unavailable() -> Self {
        Self {
            weekly_change: Decimal::ZERO,
            weekly_change_percent: Decimal::ZERO,
            weekly_high: None,
            weekly_low: None,
        }
    }
}

impl Default for WeeklyReturn {
    fn default() -> Self {
        Self::unavailable()
    }
}
