use rust_decimal::Decimal;

use crate::portfolio::analytics::diversification::volatility;
use crate::portfolio::analytics::{AssetPerformance, PerformanceRanking};
use crate::portfolio::snapshot::PortfolioSnapshot;
use crate::utils::format::display_ticker;

/// Ranks holdings by P&L percentage, best first.
///
/// Ties keep symbol order. `average_volatility` is zero for an empty snapshot.
pub fn rank_performance(snapshot: &PortfolioSnapshot) -> PerformanceRanking {
    let mut assets: Vec<AssetPerformance> = snapshot
        .assets
        .values()
        .map(|record| AssetPerformance {
            symbol: record.config.symbol.clone(),
            ticker: display_ticker(record.symbol()).to_string(),
            pnl: record.valuation.pnl,
            pnl_percentage: record.valuation.pnl_percentage,
            volatility: volatility(record),
        })
        .collect();

    assets.sort_by(|a, b| b.pnl_percentage.cmp(&a.pnl_percentage));

    let total_volatility: Decimal = assets.iter().map(|a| a.volatility).sum();
    let average_volatility = total_volatility
        .checked_div(Decimal::from(assets.len()))
        .unwrap_or(Decimal::ZERO);

    PerformanceRanking {
        best: assets.first().cloned(),
        worst: assets.last().cloned(),
        average_volatility,
        assets,
    }
}
