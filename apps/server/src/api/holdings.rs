//! Holdings CRUD endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;

use foliopulse_core::holdings::{Holding, HoldingUpdate, NewHolding};

use crate::error::ApiResult;
use crate::main_lib::AppState;

/// Advisory threshold: weights this far from 100 get a nudge, never an error.
const WEIGHT_WARNING_TOLERANCE_PCT: f64 = 1.0;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HoldingsResponse {
    holdings: Vec<Holding>,
    total_weight_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight_warning: Option<String>,
}

fn weight_warning(total_weight_pct: f64, holding_count: usize) -> Option<String> {
    if holding_count > 0 && (total_weight_pct - 100.0).abs() > WEIGHT_WARNING_TOLERANCE_PCT {
        Some(format!(
            "Total weight is {:.1}%; consider adjusting to 100%",
            total_weight_pct
        ))
    } else {
        None
    }
}

async fn list_holdings(State(state): State<Arc<AppState>>) -> ApiResult<Json<HoldingsResponse>> {
    let store = state.holdings.read().unwrap();
    let total_weight_pct = store.total_weight_pct();
    Ok(Json(HoldingsResponse {
        weight_warning: weight_warning(total_weight_pct, store.len()),
        holdings: store.holdings().to_vec(),
        total_weight_pct,
    }))
}

async fn add_holding(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewHolding>,
) -> ApiResult<(StatusCode, Json<Holding>)> {
    let mut store = state.holdings.write().unwrap();
    let holding = store.add(body)?;
    Ok((StatusCode::CREATED, Json(holding)))
}

async fn update_holding(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Json(body): Json<HoldingUpdate>,
) -> ApiResult<Json<Holding>> {
    let mut store = state.holdings.write().unwrap();
    let holding = store.update(&symbol, body)?;
    Ok(Json(holding))
}

async fn delete_holding(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<StatusCode> {
    let mut store = state.holdings.write().unwrap();
    store.remove(&symbol)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/holdings", get(list_holdings).post(add_holding))
        .route(
            "/holdings/{symbol}",
            put(update_holding).delete(delete_holding),
        )
}
