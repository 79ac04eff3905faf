use coinfolio_market_data::{DailyStats, HistoricalCandle};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::assets::AssetConfig;
use crate::portfolio::returns::{DailyReturn, WeeklyReturn};
use crate::portfolio::valuation::AssetValuation;

/// Everything known about one holding in one refresh cycle.
///
/// Config and valuation fields are flattened so the JSON reads as a single
/// record: `{symbol, name, purchasePrice, ..., currentValue, pnl, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(flatten)]
    pub config: AssetConfig,
    pub current_price: Decimal,
    #[serde(flatten)]
    pub valuation: AssetValuation,
    pub daily_return: DailyReturn,
    pub weekly_return: WeeklyReturn,
    #[serde(rename = "stats24hr")]
    pub stats_24h: DailyStats,
    /// Candles the weekly return was computed from; empty when the fetch failed
    pub historical_data: Vec<HistoricalCandle>,
}

impl AssetRecord {
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }
}

/// Totals over the records resolved in one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_current_value: Decimal,
    pub total_investment: Decimal,
    #[serde(rename = "totalPnL")]
    pub total_pnl: Decimal,
    #[serde(rename = "totalPnLPercentage")]
    pub total_pnl_percentage: Decimal,
    pub asset_count: usize,
}
