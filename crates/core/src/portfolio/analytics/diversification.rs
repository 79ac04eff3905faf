use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::portfolio::analytics::{AssetRisk, DiversificationMetrics, RiskLevel};
use crate::portfolio::summary::AssetRecord;
use crate::utils::format::display_ticker;

pub const HIGH_RISK_THRESHOLD: Decimal = dec!(40);
pub const MEDIUM_RISK_THRESHOLD: Decimal = dec!(25);
pub const WELL_DIVERSIFIED_THRESHOLD: Decimal = dec!(60);

const HUNDRED: Decimal = dec!(100);

/// Risk bucket for a single allocation percentage.
pub fn calculate_risk_level(percentage: Decimal) -> RiskLevel {
    if percentage > HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if percentage > MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub(crate) fn volatility(record: &AssetRecord) -> Decimal {
    record.daily_return.price_change_percent.abs()
}

/// Computes concentration metrics over the declared allocations.
///
/// An empty input yields a zero index, zero concentration and no
/// effective asset count.
pub fn calculate_diversification<'a>(
    records: impl IntoIterator<Item = &'a AssetRecord>,
) -> DiversificationMetrics {
    let mut hhi = Decimal::ZERO;
    let mut max_weight = Decimal::ZERO;
    let mut assets = Vec::new();

    for record in records {
        let percentage = record.config.percentage;
        let weight = percentage / HUNDRED;
        hhi += weight * weight;
        max_weight = max_weight.max(weight);

        assets.push(AssetRisk {
            symbol: record.config.symbol.clone(),
            ticker: display_ticker(&record.config.symbol).to_string(),
            name: record.config.name.clone(),
            percentage,
            risk: calculate_risk_level(percentage),
            volatility: volatility(record),
        });
    }

    if assets.is_empty() {
        return DiversificationMetrics {
            diversification_index: Decimal::ZERO,
            concentration: Decimal::ZERO,
            effective_assets: None,
            risk_level: RiskLevel::Low,
            well_diversified: false,
            asset_count: 0,
            assets,
        };
    }

    let diversification_index = (Decimal::ONE - hhi) * HUNDRED;
    let concentration = max_weight * HUNDRED;

    DiversificationMetrics {
        diversification_index,
        concentration,
        effective_assets: Decimal::ONE.checked_div(hhi),
        risk_level: calculate_risk_level(concentration),
        well_diversified: diversification_index > WELL_DIVERSIFIED_THRESHOLD,
        asset_count: assets.len(),
        assets,
    }
}
