use std::sync::Arc;

use crate::{config::Config, events::EventBus};
use coinfolio_core::{
    assets::AssetRegistry,
    portfolio::SnapshotStore,
    refresh::RefreshService,
};
use coinfolio_market_data::{BinanceProvider, MarketDataProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const EVENT_BUS_CAPACITY: usize = 64;

pub struct AppState {
    pub registry: Arc<AssetRegistry>,
    pub store: Arc<SnapshotStore>,
    pub refresh_service: Arc<RefreshService>,
    pub event_bus: EventBus,
}

pub fn init_tracing() {
    let log_format = std::env::var("CF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn MarketDataProvider> =
        Arc::new(BinanceProvider::new(config.binance_base_url.clone()));
    tracing::info!("Market data provider: {}", config.binance_base_url);
    build_state_with_provider(config, provider)
}

/// Wires the engine around `provider`.
pub fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let registry = Arc::new(AssetRegistry::default_portfolio());
    tracing::info!(
        "Tracking {} holdings: {}",
        registry.len(),
        registry.symbols().join(", ")
    );

    let store = Arc::new(SnapshotStore::new());
    let refresh_service = Arc::new(RefreshService::new(
        registry.clone(),
        provider,
        store.clone(),
        config.refresh_options(),
    ));

    Ok(Arc::new(AppState {
        registry,
        store,
        refresh_service,
        event_bus: EventBus::new(EVENT_BUS_CAPACITY),
    }))
}
