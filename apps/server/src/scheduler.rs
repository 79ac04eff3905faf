//! Background scheduler for periodic portfolio refresh.

use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::api::portfolio::{perform_refresh, RefreshTrigger};
use crate::main_lib::AppState;

/// Starts the refresh loop. The first tick fires immediately.
pub fn start_refresh_scheduler(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!("Portfolio refresh scheduler started ({:?} interval)", period);

        let mut refresh_interval = interval(period);
        refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            refresh_interval.tick().await;
            run_scheduled_refresh(&state).await;
        }
    });
}

async fn run_scheduled_refresh(state: &Arc<AppState>) {
    // Failures are logged and surfaced as events inside perform_refresh
    if let Ok(outcome) = perform_refresh(state, RefreshTrigger::Scheduled).await {
        debug!("Scheduled refresh: {:?}", outcome);
    }
}
