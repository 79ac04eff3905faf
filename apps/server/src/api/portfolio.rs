use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    events::{
        ServerEvent, PORTFOLIO_UPDATE_COMPLETE, PORTFOLIO_UPDATE_ERROR, PORTFOLIO_UPDATE_START,
    },
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use coinfolio_core::{
    assets::QUOTE_ASSET_SUFFIX,
    portfolio::analytics::{
        calculate_diversification, generate_alerts, generate_recommendations, rank_performance,
        DiversificationMetrics, PerformanceRanking, PortfolioAlerts, Recommendation,
    },
    refresh::{RefreshError, RefreshOutcome},
    AssetRecord, PortfolioSnapshot, PortfolioState, PortfolioSummary,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// How a refresh was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// Timer tick; skipped while another cycle runs.
    Scheduled,
    /// Client request; waits for a running cycle and then runs its own.
    Manual,
}

/// Runs one refresh cycle and broadcasts its progress to SSE clients.
pub async fn perform_refresh(
    state: &AppState,
    trigger: RefreshTrigger,
) -> Result<RefreshOutcome, RefreshError> {
    if trigger == RefreshTrigger::Scheduled && state.refresh_service.is_running() {
        debug!("Scheduled refresh skipped: cycle in flight");
        return Ok(RefreshOutcome::Skipped);
    }

    state
        .event_bus
        .publish(ServerEvent::new(PORTFOLIO_UPDATE_START));

    let result = match trigger {
        RefreshTrigger::Scheduled => state.refresh_service.try_refresh().await,
        RefreshTrigger::Manual => state.refresh_service.refresh().await,
    };

    match &result {
        Ok(RefreshOutcome::Published { sequence, .. }) => {
            let snapshot = state.store.snapshot();
            match completion_payload(snapshot.as_deref(), *sequence) {
                Some(payload) => state.event_bus.publish(ServerEvent::with_payload(
                    PORTFOLIO_UPDATE_COMPLETE,
                    payload,
                )),
                None => debug!(
                    "Snapshot #{} replaced before its completion event was sent",
                    sequence
                ),
            }
        }
        Ok(outcome) => debug!("Refresh produced no new snapshot: {:?}", outcome),
        Err(err) => {
            warn!("Portfolio refresh failed: {}", err);
            state.event_bus.publish(ServerEvent::with_payload(
                PORTFOLIO_UPDATE_ERROR,
                json!({ "message": err.to_string() }),
            ));
        }
    }
    result
}

/// Payload of the completion event for cycle `sequence`, or `None` when the
/// published snapshot already belongs to a later cycle.
fn completion_payload(snapshot: Option<&PortfolioSnapshot>, sequence: u64) -> Option<Value> {
    snapshot
        .filter(|snapshot| snapshot.sequence == sequence)
        .map(|snapshot| json!({ "sequence": snapshot.sequence, "summary": snapshot.summary }))
}

fn published_snapshot(state: &AppState) -> ApiResult<Arc<PortfolioSnapshot>> {
    state
        .store
        .snapshot()
        .ok_or_else(|| ApiError::NotFound("No portfolio snapshot published yet".to_string()))
}

async fn get_portfolio(State(state): State<Arc<AppState>>) -> Json<PortfolioState> {
    Json(PortfolioState::clone(&state.store.current()))
}

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioSummary>> {
    let snapshot = published_snapshot(&state)?;
    Ok(Json(snapshot.summary.clone()))
}

async fn get_asset(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AssetRecord>> {
    let snapshot = published_snapshot(&state)?;
    let mut symbol = symbol.to_uppercase();
    if !symbol.ends_with(QUOTE_ASSET_SUFFIX) {
        symbol.push_str(QUOTE_ASSET_SUFFIX);
    }
    snapshot
        .asset(&symbol)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Asset {} not in the current snapshot", symbol)))
}

async fn get_diversification(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DiversificationMetrics>> {
    let snapshot = published_snapshot(&state)?;
    Ok(Json(calculate_diversification(snapshot.assets.values())))
}

#[derive(Serialize)]
struct AlertsResponse {
    alerts: PortfolioAlerts,
    recommendations: Vec<Recommendation>,
}

async fn get_alerts(State(state): State<Arc<AppState>>) -> ApiResult<Json<AlertsResponse>> {
    let snapshot = published_snapshot(&state)?;
    Ok(Json(AlertsResponse {
        alerts: generate_alerts(&snapshot),
        recommendations: generate_recommendations(&snapshot),
    }))
}

async fn get_performance(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PerformanceRanking>> {
    let snapshot = published_snapshot(&state)?;
    Ok(Json(rank_performance(&snapshot)))
}

async fn refresh_portfolio(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RefreshOutcome>> {
    let outcome = perform_refresh(&state, RefreshTrigger::Manual).await?;
    Ok(Json(outcome))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(get_portfolio))
        .route("/portfolio/summary", get(get_summary))
        .route("/portfolio/assets/{symbol}", get(get_asset))
        .route("/portfolio/diversification", get(get_diversification))
        .route("/portfolio/alerts", get(get_alerts))
        .route("/portfolio/performance", get(get_performance))
        .route("/portfolio/refresh", post(refresh_portfolio))
}
