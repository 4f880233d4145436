//! Portfolio dashboard endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use foliopulse_core::returns::HoldingReturn;

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Highlight {
    symbol: String,
    return_pct: f64,
}

impl From<&HoldingReturn> for Highlight {
    fn from(row: &HoldingReturn) -> Self {
        Self {
            symbol: row.symbol.clone(),
            return_pct: row.return_pct,
        }
    }
}

/// The dashboard payload: per-holding rows plus the headline metrics a
/// UI renders as tiles (total return, advancing count, total weight,
/// best and worst performer).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioResponse {
    as_of: DateTime<Utc>,
    total_return_pct: f64,
    holding_count: usize,
    advancing_count: usize,
    total_weight_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    best: Option<Highlight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    worst: Option<Highlight>,
    rows: Vec<HoldingReturn>,
}

async fn get_portfolio(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioResponse>> {
    // Snapshot under the read lock, then release it before the fetches run.
    let (snapshot, total_weight_pct) = {
        let store = state.holdings.read().unwrap();
        (store.holdings().to_vec(), store.total_weight_pct())
    };

    let returns = state.returns_service.portfolio_returns(&snapshot).await;

    Ok(Json(PortfolioResponse {
        as_of: returns.as_of,
        total_return_pct: returns.total_return_pct,
        holding_count: returns.rows.len(),
        advancing_count: returns.advancing_count(),
        total_weight_pct,
        best: returns.best().map(Highlight::from),
        worst: returns.worst().map(Highlight::from),
        rows: returns.rows,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(get_portfolio))
}
