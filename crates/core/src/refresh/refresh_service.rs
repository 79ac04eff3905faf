use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use coinfolio_market_data::{
    DailyStatsMap, HistoricalCandle, MarketDataError, MarketDataProvider, PriceSnapshot,
    RetryClass,
};
use futures::future::join_all;
use log::{debug, error, warn};
use tokio::sync::Mutex;

use super::{RefreshError, RefreshOptions, RefreshOutcome};
use crate::assets::AssetRegistry;
use crate::portfolio::returns::{calculate_daily_return, calculate_weekly_return, WeeklyReturn};
use crate::portfolio::snapshot::{PortfolioSnapshot, SnapshotStore};
use crate::portfolio::summary::{calculate_portfolio_summary, AssetRecord};
use crate::portfolio::valuation::calculate_asset_pnl;

/// Per-symbol outcome of the candle fetches of one cycle.
pub type CandleResults = HashMap<String, Result<Vec<HistoricalCandle>, MarketDataError>>;

/// Runs refresh cycles against a market data provider and publishes the
/// results to a [`SnapshotStore`].
///
/// Cycles never overlap. [`refresh`](Self::refresh) waits for an in-flight
/// cycle and then runs its own; [`try_refresh`](Self::try_refresh) returns
/// [`RefreshOutcome::Skipped`] instead.
pub struct RefreshService {
    registry: Arc<AssetRegistry>,
    provider: Arc<dyn MarketDataProvider>,
    store: Arc<SnapshotStore>,
    options: RefreshOptions,
    cycle_lock: Mutex<()>,
}

impl RefreshService {
    pub fn new(
        registry: Arc<AssetRegistry>,
        provider: Arc<dyn MarketDataProvider>,
        store: Arc<SnapshotStore>,
        options: RefreshOptions,
    ) -> Self {
        Self {
            registry,
            provider,
            store,
            options,
            cycle_lock: Mutex::new(()),
        }
    }

    pub fn registry(&self) -> &Arc<AssetRegistry> {
        &self.registry
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// True while a cycle holds the lock.
    pub fn is_running(&self) -> bool {
        self.cycle_lock.try_lock().is_err()
    }

    /// Runs a cycle, queueing behind one that is already running.
    pub async fn refresh(&self) -> Result<RefreshOutcome, RefreshError> {
        let _guard = self.cycle_lock.lock().await;
        self.run_cycle().await
    }

    /// Runs a cycle unless one is already running.
    pub async fn try_refresh(&self) -> Result<RefreshOutcome, RefreshError> {
        let Ok(_guard) = self.cycle_lock.try_lock() else {
            debug!("Refresh cycle already in flight, skipping");
            return Ok(RefreshOutcome::Skipped);
        };
        self.run_cycle().await
    }

    async fn run_cycle(&self) -> Result<RefreshOutcome, RefreshError> {
        let sequence = self.store.next_sequence();
        debug!(
            "Starting refresh cycle #{} for {} holdings via {}",
            sequence,
            self.registry.len(),
            self.provider.id()
        );

        let snapshot = match self.fetch_snapshot(sequence).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                match err.retry_class() {
                    RetryClass::Never => error!("Refresh cycle #{} failed: {}", sequence, err),
                    RetryClass::NextCycle => warn!(
                        "Refresh cycle #{} failed, retrying next cycle: {}",
                        sequence, err
                    ),
                }
                self.store.record_error(sequence, err.to_string());
                return Err(err);
            }
        };

        let asset_count = snapshot.summary.asset_count;
        let dropped = snapshot.dropped_symbols.clone();
        let outcome = if self.store.publish(snapshot) {
            RefreshOutcome::Published {
                sequence,
                asset_count,
                dropped,
            }
        } else {
            RefreshOutcome::Superseded { sequence }
        };
        debug!("Refresh cycle #{} finished: {:?}", sequence, outcome);
        Ok(outcome)
    }

    async fn fetch_snapshot(&self, sequence: u64) -> Result<PortfolioSnapshot, RefreshError> {
        let symbols = self.registry.symbols();

        let (prices, stats) = tokio::try_join!(
            self.provider.get_prices(&symbols),
            self.provider.get_daily_stats(&symbols)
        )?;

        let resolvable: Vec<&String> = symbols
            .iter()
            .filter(|s| prices.contains_key(*s) && stats.contains_key(*s))
            .collect();

        let provider = &self.provider;
        let options = &self.options;
        let candles: CandleResults = join_all(resolvable.into_iter().map(|symbol| async move {
            let result = provider
                .get_historical_candles(symbol, &options.kline_interval, options.kline_limit)
                .await;
            (symbol.clone(), result)
        }))
        .await
        .into_iter()
        .collect();

        build_snapshot(sequence, &self.registry, &prices, &stats, candles, Utc::now())
    }
}

/// Computes a snapshot from one cycle's fetched data.
///
/// Holdings missing from `prices` or `stats` are listed in
/// `dropped_symbols`. A missing or failed candle window falls back to a zero
/// weekly return with no historical data. Fails only when no holding could
/// be valued.
pub fn build_snapshot(
    sequence: u64,
    registry: &AssetRegistry,
    prices: &PriceSnapshot,
    stats: &DailyStatsMap,
    mut candles: CandleResults,
    updated_at: DateTime<Utc>,
) -> Result<PortfolioSnapshot, RefreshError> {
    let mut assets = BTreeMap::new();
    let mut dropped_symbols = Vec::new();

    for config in registry.iter() {
        let symbol = &config.symbol;
        let (Some(&current_price), Some(day)) = (prices.get(symbol), stats.get(symbol)) else {
            warn!("Dropping {}: missing from price or 24h stats response", symbol);
            dropped_symbols.push(symbol.clone());
            continue;
        };

        let valuation =
            match calculate_asset_pnl(current_price, config.purchase_price, config.quantity) {
                Ok(valuation) => valuation,
                Err(e) => {
                    warn!("Dropping {}: {}", symbol, e);
                    dropped_symbols.push(symbol.clone());
                    continue;
                }
            };

        let (weekly_return, historical_data) = match candles.remove(symbol) {
            Some(Ok(window)) => match calculate_weekly_return(&window) {
                Ok(weekly) => (weekly, window),
                Err(e) => {
                    warn!("Weekly return unavailable for {}: {}", symbol, e);
                    (WeeklyReturn::unavailable(), Vec::new())
                }
            },
            Some(Err(e)) => {
                warn!("Candle fetch failed for {}: {}", symbol, e);
                (WeeklyReturn::unavailable(), Vec::new())
            }
            None => {
                warn!("No candles fetched for {}", symbol);
                (WeeklyReturn::unavailable(), Vec::new())
            }
        };

        assets.insert(
            symbol.clone(),
            AssetRecord {
                config: config.clone(),
                current_price,
                valuation,
                daily_return: calculate_daily_return(day),
                weekly_return,
                stats_24h: day.clone(),
                historical_data,
            },
        );
    }

    let summary = calculate_portfolio_summary(assets.values())?;

    Ok(PortfolioSnapshot {
        sequence,
        assets,
        summary,
        dropped_symbols,
        updated_at,
    })
}
