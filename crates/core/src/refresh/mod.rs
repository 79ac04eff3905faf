//! Refresh orchestration: one cycle fetches market data for every configured
//! holding, computes records and totals, and publishes them as one snapshot.

mod refresh_errors;
mod refresh_model;
mod refresh_service;

#[cfg(test)]
mod refresh_service_tests;

pub use refresh_errors::RefreshError;
pub use refresh_model::{
    RefreshOptions, RefreshOutcome, DEFAULT_KLINE_INTERVAL, DEFAULT_KLINE_LIMIT,
};
pub use refresh_service::{build_snapshot, CandleResults, RefreshService};
