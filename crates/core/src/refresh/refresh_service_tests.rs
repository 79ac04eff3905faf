//! Tests for the refresh orchestrator, run against an in-memory provider.

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::Utc;
    use coinfolio_market_data::{
        DailyStats, DailyStatsMap, HistoricalCandle, MarketDataError, MarketDataProvider,
        PriceSnapshot, Symbol,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::assets::{AssetRegistry, RENDER_SYMBOL, RVN_SYMBOL, SUI_SYMBOL, THETA_SYMBOL};
    use crate::portfolio::returns::WeeklyReturn;
    use crate::portfolio::snapshot::SnapshotStore;
    use crate::refresh::{
        build_snapshot, RefreshError, RefreshOptions, RefreshOutcome, RefreshService,
    };

    const ALL: [&str; 4] = [RENDER_SYMBOL, SUI_SYMBOL, THETA_SYMBOL, RVN_SYMBOL];

    fn stats(change_percent: Decimal) -> DailyStats {
        DailyStats {
            price_change: dec!(0.1),
            price_change_percent: change_percent,
            high_price: dec!(5),
            low_price: dec!(1),
            volume: dec!(1000000),
            open_price: dec!(2),
            prev_close_price: dec!(2),
        }
    }

    fn week(open: Decimal, close: Decimal) -> Vec<HistoricalCandle> {
        let day = 86_400_000;
        vec![
            HistoricalCandle::new(0, open, open + dec!(1), open, open, dec!(10), day - 1),
            HistoricalCandle::new(day, open, close + dec!(1), close, close, dec!(10), 2 * day - 1),
        ]
    }

    #[derive(Default)]
    struct MockProvider {
        prices: PriceSnapshot,
        stats: DailyStatsMap,
        candles: HashMap<String, Vec<HistoricalCandle>>,
        fail_prices: bool,
        fail_stats: bool,
        fail_candles: HashSet<String>,
        delay: Option<Duration>,
        price_calls: AtomicUsize,
    }

    impl MockProvider {
        /// All four holdings priced at their purchase price, each with a week of candles.
        fn complete() -> Self {
            let registry = AssetRegistry::default_portfolio();
            let mut provider = MockProvider::default();
            for config in registry.iter() {
                let symbol = config.symbol.clone();
                provider.prices.insert(symbol.clone(), config.purchase_price);
                provider.stats.insert(symbol.clone(), stats(dec!(2.5)));
                provider.candles.insert(symbol, week(dec!(1), dec!(1.1)));
            }
            provider
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    #[async_trait]
    impl MarketDataProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn get_prices(&self, symbols: &[Symbol]) -> Result<PriceSnapshot, MarketDataError> {
            self.price_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_prices {
                return Err(MarketDataError::Timeout {
                    provider: "MOCK".to_string(),
                });
            }
            Ok(symbols
                .iter()
                .filter_map(|s| self.prices.get(s).map(|p| (s.clone(), *p)))
                .collect())
        }

        async fn get_daily_stats(
            &self,
            symbols: &[Symbol],
        ) -> Result<DailyStatsMap, MarketDataError> {
            if self.fail_stats {
                return Err(MarketDataError::ProviderError {
                    provider: "MOCK".to_string(),
                    message: "HTTP 503".to_string(),
                });
            }
            Ok(symbols
                .iter()
                .filter_map(|s| self.stats.get(s).map(|d| (s.clone(), d.clone())))
                .collect())
        }

        async fn get_historical_candles(
            &self,
            symbol: &str,
            _interval: &str,
            _limit: u16,
        ) -> Result<Vec<HistoricalCandle>, MarketDataError> {
            if self.fail_candles.contains(symbol) {
                return Err(MarketDataError::ProviderError {
                    provider: "MOCK".to_string(),
                    message: "HTTP 500".to_string(),
                });
            }
            Ok(self.candles.get(symbol).cloned().unwrap_or_default())
        }
    }

    fn service(provider: MockProvider) -> (Arc<RefreshService>, Arc<SnapshotStore>) {
        let store = Arc::new(SnapshotStore::new());
        let service = RefreshService::new(
            Arc::new(AssetRegistry::default_portfolio()),
            Arc::new(provider),
            store.clone(),
            RefreshOptions::default(),
        );
        (Arc::new(service), store)
    }

    #[tokio::test]
    async fn test_full_cycle_publishes_all_holdings() {
        let (service, store) = service(MockProvider::complete());

        let outcome = service.refresh().await.unwrap();
        assert_eq!(
            outcome,
            RefreshOutcome::Published {
                sequence: 1,
                asset_count: 4,
                dropped: vec![],
            }
        );

        let state = store.current();
        assert!(!state.loading);
        assert!(state.last_error.is_none());
        let snapshot = state.snapshot.as_ref().unwrap();
        assert_eq!(snapshot.assets.len(), 4);
        assert!(!snapshot.is_partial());

        // priced at purchase: zero pnl everywhere
        assert_eq!(snapshot.summary.total_pnl, Decimal::ZERO);
        for symbol in ALL {
            let record = snapshot.asset(symbol).unwrap();
            assert_eq!(record.valuation.pnl, Decimal::ZERO);
            assert_eq!(record.daily_return.price_change_percent, dec!(2.5));
            assert_eq!(record.weekly_return.weekly_change, dec!(0.1));
            assert_eq!(record.weekly_return.weekly_change_percent, dec!(10));
            assert_eq!(record.historical_data.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_price_failure_keeps_previous_snapshot() {
        let (service, store) = service(MockProvider::complete());
        service.refresh().await.unwrap();
        let before = store.snapshot().unwrap();

        let mut failing = MockProvider::complete();
        failing.fail_prices = true;
        let failing_service = RefreshService::new(
            service.registry().clone(),
            Arc::new(failing),
            store.clone(),
            RefreshOptions::default(),
        );

        let err = failing_service.refresh().await.unwrap_err();
        assert!(matches!(
            err,
            RefreshError::MarketData(MarketDataError::Timeout { .. })
        ));

        let state = store.current();
        assert_eq!(state.snapshot.as_deref(), Some(&*before));
        assert_eq!(state.sequence, 2);
        assert!(state.last_error.as_deref().unwrap().contains("Timeout"));
    }

    #[tokio::test]
    async fn test_stats_failure_keeps_previous_snapshot() {
        let (service, store) = service(MockProvider::complete());
        service.refresh().await.unwrap();
        let before = store.snapshot().unwrap();

        let mut failing = MockProvider::complete();
        failing.fail_stats = true;
        let failing_service = RefreshService::new(
            service.registry().clone(),
            Arc::new(failing),
            store.clone(),
            RefreshOptions::default(),
        );

        let err = failing_service.refresh().await.unwrap_err();
        assert!(matches!(
            err,
            RefreshError::MarketData(MarketDataError::ProviderError { .. })
        ));

        let state = store.current();
        assert_eq!(state.snapshot.as_deref(), Some(&*before));
        assert_eq!(state.sequence, 2);
        assert!(state.last_error.as_deref().unwrap().contains("HTTP 503"));
    }

    #[tokio::test]
    async fn test_first_cycle_failure_leaves_no_snapshot() {
        let mut provider = MockProvider::complete();
        provider.fail_prices = true;
        let (service, store) = service(provider);

        assert!(service.refresh().await.is_err());

        let state = store.current();
        assert!(state.snapshot.is_none());
        assert!(state.last_error.is_some());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_symbol_missing_from_stats_is_dropped() {
        let mut provider = MockProvider::complete();
        provider.stats.remove(RVN_SYMBOL);
        let (service, store) = service(provider);

        let outcome = service.refresh().await.unwrap();
        assert_eq!(
            outcome,
            RefreshOutcome::Published {
                sequence: 1,
                asset_count: 3,
                dropped: vec![RVN_SYMBOL.to_string()],
            }
        );

        let snapshot = store.snapshot().unwrap();
        assert!(snapshot.asset(RVN_SYMBOL).is_none());
        assert_eq!(snapshot.summary.asset_count, 3);
        assert!(snapshot.is_partial());
    }

    #[tokio::test]
    async fn test_candle_failure_falls_back_to_zero_weekly_return() {
        let mut provider = MockProvider::complete();
        provider.fail_candles.insert(SUI_SYMBOL.to_string());
        let (service, store) = service(provider);

        service.refresh().await.unwrap();

        let snapshot = store.snapshot().unwrap();
        let sui = snapshot.asset(SUI_SYMBOL).unwrap();
        assert_eq!(sui.weekly_return, WeeklyReturn::unavailable());
        assert!(sui.historical_data.is_empty());
        assert_eq!(snapshot.summary.asset_count, 4);
    }

    #[tokio::test]
    async fn test_every_symbol_dropped_fails_the_cycle() {
        let mut provider = MockProvider::complete();
        provider.prices.clear();
        let (service, store) = service(provider);

        let err = service.refresh().await.unwrap_err();
        assert!(matches!(err, RefreshError::Calculation(_)));
        assert!(store.snapshot().is_none());
        assert!(store.current().last_error.is_some());
    }

    #[tokio::test]
    async fn test_try_refresh_skips_while_cycle_in_flight() {
        let provider = MockProvider::complete().with_delay(Duration::from_millis(200));
        let (service, store) = service(provider);

        let running = {
            let service = service.clone();
            tokio::spawn(async move { service.refresh().await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;

        let skipped = service.try_refresh().await.unwrap();
        assert_eq!(skipped, RefreshOutcome::Skipped);

        let outcome = running.await.unwrap().unwrap();
        assert!(outcome.is_published());
        assert_eq!(store.current().sequence, 1);
    }

    #[tokio::test]
    async fn test_manual_refresh_queues_behind_running_cycle() {
        let provider = MockProvider::complete().with_delay(Duration::from_millis(20));
        let (service, store) = service(provider);

        let (first, second) = tokio::join!(service.refresh(), service.refresh());
        assert!(first.unwrap().is_published());
        assert!(second.unwrap().is_published());
        assert_eq!(store.current().sequence, 2);
    }

    #[tokio::test]
    async fn test_late_result_is_superseded() {
        let provider = MockProvider::complete().with_delay(Duration::from_millis(100));
        let (service, store) = service(provider);

        let running = {
            let service = service.clone();
            tokio::spawn(async move { service.refresh().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        // a newer cycle completes first
        let newer = store.next_sequence();
        assert!(store.record_error(newer, "newer cycle failed"));

        let outcome = running.await.unwrap().unwrap();
        assert_eq!(outcome, RefreshOutcome::Superseded { sequence: 1 });
        let state = store.current();
        assert!(state.snapshot.is_none());
        assert_eq!(state.sequence, newer);
    }

    #[test]
    fn test_build_snapshot_without_candles() {
        let registry = AssetRegistry::default_portfolio();
        let provider = MockProvider::complete();

        let snapshot = build_snapshot(
            7,
            &registry,
            &provider.prices,
            &provider.stats,
            HashMap::new(),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(snapshot.sequence, 7);
        assert_eq!(snapshot.assets.len(), 4);
        assert!(snapshot
            .assets
            .values()
            .all(|r| r.weekly_return == WeeklyReturn::unavailable()));
    }

    #[test]
    fn test_build_snapshot_reconciles_summary() {
        let registry = AssetRegistry::default_portfolio();
        let mut provider = MockProvider::complete();
        provider.prices.insert(SUI_SYMBOL.to_string(), dec!(3.66));
        provider.prices.insert(RVN_SYMBOL.to_string(), dec!(0.015));

        let snapshot = build_snapshot(
            1,
            &registry,
            &provider.prices,
            &provider.stats,
            HashMap::new(),
            Utc::now(),
        )
        .unwrap();

        let current: Decimal = snapshot.assets.values().map(|r| r.valuation.current_value).sum();
        let purchase: Decimal = snapshot.assets.values().map(|r| r.valuation.purchase_value).sum();
        assert_eq!(snapshot.summary.total_current_value, current);
        assert_eq!(snapshot.summary.total_investment, purchase);
        assert_eq!(snapshot.summary.total_pnl, current - purchase);

        let sui = snapshot.asset(SUI_SYMBOL).unwrap();
        assert_eq!(sui.valuation.pnl_percentage, dec!(20));
    }

    #[tokio::test]
    async fn test_each_cycle_fetches_prices_once() {
        let provider = Arc::new(MockProvider::complete());
        let store = Arc::new(SnapshotStore::new());
        let service = RefreshService::new(
            Arc::new(AssetRegistry::default_portfolio()),
            provider.clone(),
            store,
            RefreshOptions::default(),
        );

        service.refresh().await.unwrap();
        service.try_refresh().await.unwrap();
        assert_eq!(provider.price_calls.load(Ordering::SeqCst), 2);
    }
}
