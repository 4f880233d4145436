//! Portfolio Q&A endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct AskRequest {
    question: String,
}

#[derive(Serialize)]
struct AskResponse {
    answer: String,
}

async fn ask(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> ApiResult<Json<AskResponse>> {
    let assistant = state
        .assistant_service
        .as_ref()
        .ok_or(ApiError::AssistantUnavailable)?;

    // The assistant answers over the same figures the dashboard shows;
    // the cache makes re-running the aggregation here cheap.
    let snapshot = {
        let store = state.holdings.read().unwrap();
        store.holdings().to_vec()
    };
    let returns = state.returns_service.portfolio_returns(&snapshot).await;

    let answer = assistant.ask(&returns, &body.question).await?;
    Ok(Json(AskResponse { answer }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/assistant", post(ask))
}
