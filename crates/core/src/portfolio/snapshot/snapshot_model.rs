use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::portfolio::summary::{AssetRecord, PortfolioSummary};

/// The result of one successful refresh cycle.
///
/// Records and summary are always from the same cycle; a snapshot is
/// replaced as a whole, never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Cycle sequence number, strictly increasing
    pub sequence: u64,
    /// Resolved holdings keyed by symbol
    pub assets: BTreeMap<String, AssetRecord>,
    pub summary: PortfolioSummary,
    /// Configured symbols missing from the price or stats response
    pub dropped_symbols: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioSnapshot {
    pub fn asset(&self, symbol: &str) -> Option<&AssetRecord> {
        self.assets.get(symbol)
    }

    /// True when some configured holdings could not be resolved.
    pub fn is_partial(&self) -> bool {
        !self.dropped_symbols.is_empty()
    }
}

/// What display clients read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioState {
    /// Last successfully published snapshot
    pub snapshot: Option<Arc<PortfolioSnapshot>>,
    /// When `snapshot` was produced
    pub last_update: Option<DateTime<Utc>>,
    /// Message of the most recent failed cycle, cleared by the next success
    pub last_error: Option<String>,
    /// Sequence of the most recent completed cycle, successful or not
    pub sequence: u64,
    /// True until the first cycle completes
    pub loading: bool,
}

impl PortfolioState {
    pub fn initial() -> Self {
        Self {
            snapshot: None,
            last_update: None,
            last_error: None,
            sequence: 0,
            loading: true,
        }
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::initial()
    }
}
