use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{extract::State, routing::get, Json, Router};
use coinfolio_core::assets::AssetConfig;

async fn list_holdings(State(state): State<Arc<AppState>>) -> Json<Vec<AssetConfig>> {
    Json(state.registry.iter().cloned().collect())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/registry", get(list_holdings))
}
