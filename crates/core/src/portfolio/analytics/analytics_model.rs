use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Risk view of one holding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRisk {
    pub symbol: String,
    pub ticker: String,
    pub name: String,
    /// Declared allocation, in percent
    pub percentage: Decimal,
    pub risk: RiskLevel,
    /// Absolute 24h price change, in percent
    pub volatility: Decimal,
}

/// Concentration metrics based on the Herfindahl-Hirschman index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationMetrics {
    /// `(1 - hhi) * 100`
    pub diversification_index: Decimal,
    /// Largest single weight, in percent
    pub concentration: Decimal,
    /// `1 / hhi`, absent when there are no weights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_assets: Option<Decimal>,
    pub risk_level: RiskLevel,
    pub well_diversified: bool,
    pub asset_count: usize,
    pub assets: Vec<AssetRisk>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Concentration,
    Performance,
    Loss,
    Volatility,
    Diversification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    /// The measured value that triggered the alert
    pub value: Decimal,
    /// Holding the alert is about; `None` for portfolio-wide alerts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Alerts grouped by severity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioAlerts {
    pub critical: Vec<Alert>,
    pub warning: Vec<Alert>,
    pub info: Vec<Alert>,
    pub success: Vec<Alert>,
}

impl PortfolioAlerts {
    pub fn push(&mut self, alert: Alert) {
        match alert.severity {
            AlertSeverity::Critical => self.critical.push(alert),
            AlertSeverity::Warning => self.warning.push(alert),
            AlertSeverity::Info => self.info.push(alert),
            AlertSeverity::Success => self.success.push(alert),
        }
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.warning.len() + self.info.len() + self.success.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationKind {
    Rebalance,
    TakeProfit,
    Diversify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPerformance {
    pub symbol: String,
    pub ticker: String,
    pub pnl: Decimal,
    pub pnl_percentage: Decimal,
    pub volatility: Decimal,
}

/// Holdings ordered by P&L percentage, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRanking {
    pub best: Option<AssetPerformance>,
    pub worst: Option<AssetPerformance>,
    pub average_volatility: Decimal,
    pub assets: Vec<AssetPerformance>,
}
