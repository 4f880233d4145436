//! Application state wiring and tracing setup.

use std::sync::{Arc, RwLock};

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use foliopulse_ai::{AssistantService, GeminiProvider};
use foliopulse_core::holdings::HoldingsStore;
use foliopulse_core::returns::{ReturnCache, ReturnsService};
use foliopulse_market_data::QuotePageProvider;

use crate::config::Config;
use crate::seed;

/// Shared state behind every handler.
///
/// The holdings store is session state: it lives exactly as long as the
/// process and is owned here, never by the core services. Handlers take
/// the lock briefly to mutate or snapshot; aggregation always runs on a
/// snapshot taken under the read lock.
pub struct AppState {
    pub holdings: RwLock<HoldingsStore>,
    pub returns_service: ReturnsService,
    /// Present only when an API key is configured.
    pub assistant_service: Option<AssistantService>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let provider = Arc::new(QuotePageProvider::new());
    let cache = ReturnCache::new(provider, config.quote_ttl);
    let returns_service = ReturnsService::new(cache);

    let assistant_service = config.gemini_api_key.clone().map(|api_key| {
        AssistantService::new(Arc::new(GeminiProvider::new(
            api_key,
            config.gemini_model.clone(),
        )))
    });
    if assistant_service.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; the assistant endpoint is disabled");
    }

    let mut store = HoldingsStore::new();
    if config.seed_demo_portfolio {
        seed::seed_demo_portfolio(&mut store);
    }

    Arc::new(AppState {
        holdings: RwLock::new(store),
        returns_service,
        assistant_service,
    })
}
