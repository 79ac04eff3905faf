use coinfolio_market_data::{DailyStats, HistoricalCandle};

use crate::errors::CalculatorError;
use crate::portfolio::returns::{DailyReturn, WeeklyReturn};
use crate::portfolio::valuation::percentage_change;

/// Minimum number of candles needed for a weekly change.
pub const MIN_WEEKLY_CANDLES: usize = 2;

/// Reshapes 24-hour statistics into a daily return. No arithmetic.
pub fn calculate_daily_return(stats: &DailyStats) -> DailyReturn {
    DailyReturn {
        price_change: stats.price_change,
        price_change_percent: stats.price_change_percent,
        daily_high: stats.high_price,
        daily_low: stats.low_price,
    }
}

/// Computes the change over a candle window ordered oldest first.
///
/// The baseline is the open of the first candle and the endpoint is the
/// close of the last one. High and low span every candle in the window.
/// Windows shorter than [`MIN_WEEKLY_CANDLES`] yield
/// [`WeeklyReturn::unavailable`].
pub fn calculate_weekly_return(
    candles: &[HistoricalCandle],
) -> Result<WeeklyReturn, CalculatorError> {
    let (first, last) = match (candles.first(), candles.last()) {
        (Some(first), Some(last)) if candles.len() >= MIN_WEEKLY_CANDLES => (first, last),
        _ => return Ok(WeeklyReturn::unavailable()),
    };

    let baseline = first.open;
    let weekly_change = last.close - baseline;
    let weekly_change_percent =
        percentage_change(weekly_change, baseline, "weekly change percent")?;

    let weekly_high = candles.iter().map(|c| c.high).max();
    let weekly_low = candles.iter().map(|c| c.low).min();

    Ok(WeeklyReturn {
        weekly_change,
        weekly_change_percent,
        weekly_high,
        weekly_low,
    })
}
