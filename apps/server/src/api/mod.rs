//! HTTP API surface.

mod assistant;
mod health;
mod holdings;
mod portfolio;

use std::sync::Arc;

use axum::Router;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(health::router())
        .merge(holdings::router())
        .merge(portfolio::router())
        .merge(assistant::router());

    Router::new().nest("/api", api).with_state(state)
}
