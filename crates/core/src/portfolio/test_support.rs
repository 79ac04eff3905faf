//! Record builders shared by the portfolio unit tests.

use chrono::Utc;
use coinfolio_market_data::DailyStats;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::AssetConfig;
use crate::portfolio::returns::{calculate_daily_return, WeeklyReturn};
use crate::portfolio::snapshot::PortfolioSnapshot;
use crate::portfolio::summary::{calculate_portfolio_summary, AssetRecord};
use crate::portfolio::valuation::calculate_asset_pnl;

pub(crate) fn daily_stats(price_change_percent: Decimal) -> DailyStats {
    DailyStats {
        price_change: Decimal::ZERO,
        price_change_percent,
        high_price: dec!(1),
        low_price: dec!(1),
        volume: dec!(1000),
        open_price: dec!(1),
        prev_close_price: dec!(1),
    }
}

/// A fully computed record for one holding.
pub(crate) fn record(
    symbol: &str,
    purchase_price: Decimal,
    quantity: Decimal,
    current_price: Decimal,
    declared_percentage: Decimal,
    daily_change_percent: Decimal,
) -> AssetRecord {
    let config = AssetConfig::new(
        symbol,
        symbol,
        purchase_price,
        quantity,
        purchase_price * quantity,
        declared_percentage,
    );
    let stats = daily_stats(daily_change_percent);
    AssetRecord {
        valuation: calculate_asset_pnl(current_price, purchase_price, quantity).unwrap(),
        daily_return: calculate_daily_return(&stats),
        weekly_return: WeeklyReturn::unavailable(),
        current_price,
        stats_24h: stats,
        historical_data: Vec::new(),
        config,
    }
}

/// A single-unit record whose current and purchase values are given directly.
pub(crate) fn record_with_values(
    symbol: &str,
    current_value: Decimal,
    purchase_value: Decimal,
) -> AssetRecord {
    record(
        symbol,
        purchase_value,
        Decimal::ONE,
        current_value,
        dec!(25),
        Decimal::ZERO,
    )
}

/// A snapshot over `records` with a computed summary.
pub(crate) fn snapshot_of(sequence: u64, records: Vec<AssetRecord>) -> PortfolioSnapshot {
    let summary = calculate_portfolio_summary(&records).unwrap();
    PortfolioSnapshot {
        sequence,
        assets: records
            .into_iter()
            .map(|record| (record.config.symbol.clone(), record))
            .collect(),
        summary,
        dropped_symbols: Vec::new(),
        updated_at: Utc::now(),
    }
}
