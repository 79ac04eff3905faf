use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Symbol;

/// Current price per symbol, rebuilt from scratch every cycle.
pub type PriceSnapshot = HashMap<Symbol, Decimal>;

/// 24-hour statistics per symbol, rebuilt from scratch every cycle.
pub type DailyStatsMap = HashMap<Symbol, DailyStats>;

/// Rolling 24-hour statistics for one symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    /// Absolute price change over the window
    pub price_change: Decimal,

    /// Price change over the window, in percent
    pub price_change_percent: Decimal,

    /// Highest traded price in the window
    pub high_price: Decimal,

    /// Lowest traded price in the window
    pub low_price: Decimal,

    /// Base asset volume traded in the window
    pub volume: Decimal,

    /// First traded price in the window
    pub open_price: Decimal,

    /// Close of the previous window
    pub prev_close_price: Decimal,
}
