use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::portfolio::analytics::diversification::volatility;
use crate::portfolio::analytics::{
    Alert, AlertKind, AlertSeverity, PortfolioAlerts, Priority, Recommendation,
    RecommendationKind,
};
use crate::portfolio::snapshot::PortfolioSnapshot;
use crate::portfolio::summary::AssetRecord;
use crate::utils::format::{display_ticker, format_percentage};

pub const CRITICAL_CONCENTRATION: Decimal = dec!(30);
pub const WARNING_CONCENTRATION: Decimal = dec!(25);
pub const STRONG_GAIN: Decimal = dec!(10);
pub const SIGNIFICANT_LOSS: Decimal = dec!(-5);
pub const HIGH_VOLATILITY: Decimal = dec!(10);
pub const PORTFOLIO_GAIN: Decimal = dec!(5);
pub const MIN_DIVERSIFIED_ASSETS: usize = 3;

pub const REBALANCE_THRESHOLD: Decimal = dec!(30);
pub const TAKE_PROFIT_THRESHOLD: Decimal = dec!(15);
pub const TARGET_ASSET_COUNT: usize = 5;

fn asset_alert(
    kind: AlertKind,
    severity: AlertSeverity,
    symbol: &str,
    title: String,
    description: String,
    value: Decimal,
) -> Alert {
    Alert {
        kind,
        severity,
        title,
        description,
        value,
        symbol: Some(symbol.to_string()),
    }
}

/// Builds the per-asset and portfolio-wide alerts for a snapshot.
pub fn generate_alerts(snapshot: &PortfolioSnapshot) -> PortfolioAlerts {
    let mut alerts = PortfolioAlerts::default();

    for record in snapshot.assets.values() {
        let symbol = record.symbol();
        let ticker = display_ticker(symbol);
        let percentage = record.config.percentage;
        let pnl_percentage = record.valuation.pnl_percentage;
        let volatility = volatility(record);

        if percentage > CRITICAL_CONCENTRATION {
            alerts.push(asset_alert(
                AlertKind::Concentration,
                AlertSeverity::Critical,
                symbol,
                format!("High concentration in {}", ticker),
                format!("{} is {}% of the portfolio", ticker, percentage),
                percentage,
            ));
        } else if percentage > WARNING_CONCENTRATION {
            alerts.push(asset_alert(
                AlertKind::Concentration,
                AlertSeverity::Warning,
                symbol,
                format!("Elevated concentration in {}", ticker),
                format!("{} is {}% of the portfolio", ticker, percentage),
                percentage,
            ));
        }

        if pnl_percentage > STRONG_GAIN {
            alerts.push(asset_alert(
                AlertKind::Performance,
                AlertSeverity::Success,
                symbol,
                format!("{} is performing well", ticker),
                format!("{} return since purchase", format_percentage(pnl_percentage, 2)),
                pnl_percentage,
            ));
        } else if pnl_percentage < SIGNIFICANT_LOSS {
            alerts.push(asset_alert(
                AlertKind::Loss,
                AlertSeverity::Warning,
                symbol,
                format!("{} is down significantly", ticker),
                format!("{} return since purchase", format_percentage(pnl_percentage, 2)),
                pnl_percentage,
            ));
        }

        if volatility > HIGH_VOLATILITY {
            alerts.push(asset_alert(
                AlertKind::Volatility,
                AlertSeverity::Warning,
                symbol,
                format!("High volatility in {}", ticker),
                format!(
                    "{} price move in the last 24h",
                    format_percentage(record.daily_return.price_change_percent, 2)
                ),
                volatility,
            ));
        }
    }

    let summary = &snapshot.summary;
    if summary.total_pnl_percentage > PORTFOLIO_GAIN {
        alerts.push(Alert {
            kind: AlertKind::Performance,
            severity: AlertSeverity::Success,
            title: "Portfolio is up".to_string(),
            description: format!(
                "{} total return",
                format_percentage(summary.total_pnl_percentage, 2)
            ),
            value: summary.total_pnl_percentage,
            symbol: None,
        });
    }

    let count = Decimal::from(summary.asset_count);
    if summary.asset_count < MIN_DIVERSIFIED_ASSETS {
        alerts.push(Alert {
            kind: AlertKind::Diversification,
            severity: AlertSeverity::Warning,
            title: "Portfolio is poorly diversified".to_string(),
            description: format!("Only {} assets held", summary.asset_count),
            value: count,
            symbol: None,
        });
    } else {
        alerts.push(Alert {
            kind: AlertKind::Diversification,
            severity: AlertSeverity::Info,
            title: "Adequate diversification".to_string(),
            description: format!("{} assets held", summary.asset_count),
            value: count,
            symbol: None,
        });
    }

    alerts
}

/// Suggests rebalancing, profit-taking and diversification actions.
///
/// Recommendations are ordered by priority, high first.
pub fn generate_recommendations(snapshot: &PortfolioSnapshot) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let largest = snapshot
        .assets
        .values()
        // first of equal allocations wins, in symbol order
        .fold(None, |best: Option<&AssetRecord>, record| match best {
            Some(b) if record.config.percentage <= b.config.percentage => Some(b),
            _ => Some(record),
        });
    if let Some(record) = largest.filter(|r| r.config.percentage > REBALANCE_THRESHOLD) {
        let ticker = display_ticker(record.symbol());
        recommendations.push(Recommendation {
            kind: RecommendationKind::Rebalance,
            priority: Priority::High,
            title: format!("Rebalance {}", ticker),
            description: format!(
                "{} makes up {}% of the portfolio",
                ticker, record.config.percentage
            ),
            action: format!("Reduce {} below {}%", ticker, REBALANCE_THRESHOLD),
            symbol: Some(record.config.symbol.clone()),
        });
    }

    for record in snapshot.assets.values() {
        let pnl_percentage = record.valuation.pnl_percentage;
        if pnl_percentage > TAKE_PROFIT_THRESHOLD {
            let ticker = display_ticker(record.symbol());
            recommendations.push(Recommendation {
                kind: RecommendationKind::TakeProfit,
                priority: Priority::Medium,
                title: format!("Take profit on {}", ticker),
                description: format!(
                    "{} is up {} since purchase",
                    ticker,
                    format_percentage(pnl_percentage, 2)
                ),
                action: format!("Consider selling part of {}", ticker),
                symbol: Some(record.config.symbol.clone()),
            });
        }
    }

    let asset_count = snapshot.assets.len();
    if asset_count < TARGET_ASSET_COUNT {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Diversify,
            priority: Priority::Medium,
            title: "Add more assets".to_string(),
            description: format!(
                "{} assets held, at least {} recommended",
                asset_count, TARGET_ASSET_COUNT
            ),
            action: "Spread the allocation over more holdings".to_string(),
            symbol: None,
        });
    }

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}
