//! Portfolio module - valuation, returns, aggregation, snapshots and analytics.

pub mod analytics;
pub mod returns;
pub mod snapshot;
pub mod summary;
pub mod valuation;

pub use returns::{DailyReturn, WeeklyReturn};
pub use snapshot::{PortfolioSnapshot, PortfolioState, SnapshotStore};
pub use summary::{AssetRecord, PortfolioSummary};
pub use valuation::AssetValuation;

#[cfg(test)]
pub(crate) mod test_support;
