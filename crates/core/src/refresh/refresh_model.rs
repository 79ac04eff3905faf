use serde::Serialize;

pub const DEFAULT_KLINE_INTERVAL: &str = "1d";
pub const DEFAULT_KLINE_LIMIT: u16 = 7;

/// Candle window used for the weekly return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOptions {
    pub kline_interval: String,
    pub kline_limit: u16,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            kline_interval: DEFAULT_KLINE_INTERVAL.to_string(),
            kline_limit: DEFAULT_KLINE_LIMIT,
        }
    }
}

/// Result of a refresh request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RefreshOutcome {
    /// A new snapshot is live.
    Published {
        sequence: u64,
        #[serde(rename = "assetCount")]
        asset_count: usize,
        /// Holdings missing from this cycle's market data
        dropped: Vec<String>,
    },
    /// Another cycle was in flight; nothing was fetched.
    Skipped,
    /// The cycle finished after a newer one had already completed.
    Superseded { sequence: u64 },
}

impl RefreshOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, RefreshOutcome::Published { .. })
    }
}
