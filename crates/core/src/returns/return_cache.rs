//! Time-bounded memoization of daily-return fetches.
//!
//! Quote pages are slow and rate-sensitive; within one staleness window a
//! figure fetched once is reused across repeated aggregation runs. Provider
//! failures degrade to a neutral `0.0` so one bad source never blocks the
//! rest of the portfolio; the fallback is not cached, so the next lookup
//! retries instead of serving a false zero for a whole window.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, warn};
use tokio::sync::Mutex;

use foliopulse_market_data::DailyReturnProvider;

/// Staleness window for cached daily returns, measured from the last
/// successful fetch.
pub const DEFAULT_QUOTE_TTL: Duration = Duration::from_secs(300);

/// How a daily-return figure was obtained.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuoteOutcome {
    /// Fetched from the provider on this lookup.
    Fetched,
    /// Served from a non-stale cache entry.
    Cached,
    /// The provider failed; the figure is the `0.0` fallback.
    Failed,
}

/// Result of one cache lookup.
#[derive(Clone, Copy, Debug)]
pub struct QuoteLookup {
    /// Today's percentage return, or `0.0` when the fetch failed.
    pub return_pct: f64,
    pub outcome: QuoteOutcome,
}

impl QuoteLookup {
    /// Whether the figure is a real quote rather than the failure fallback.
    ///
    /// This is the explicit flag that keeps a genuine 0.0% day
    /// distinguishable from a failed fetch.
    pub fn is_quote(&self) -> bool {
        self.outcome != QuoteOutcome::Failed
    }
}

struct CacheEntry {
    return_pct: f64,
    fetched_at: Instant,
}

/// Memoizes provider results per source URL for a bounded time window.
///
/// The entry map lock is held across the provider call, so lookups are
/// serialized and concurrent misses for the same page coalesce into a
/// single in-flight fetch.
pub struct ReturnCache {
    provider: Arc<dyn DailyReturnProvider>,
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ReturnCache {
    /// Creates a cache over `provider` with the given staleness window.
    pub fn new(provider: Arc<dyn DailyReturnProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Looks up today's return for `source_url`, fetching on a miss.
    ///
    /// Never fails: provider errors are logged as warnings and degraded to
    /// a `0.0` figure with [`QuoteOutcome::Failed`].
    pub async fn daily_return(&self, source_url: &str, symbol: &str) -> QuoteLookup {
        let mut entries = self.entries.lock().await;

        if let Some(entry) = entries.get(source_url) {
            if entry.fetched_at.elapsed() <= self.ttl {
                debug!("Serving cached daily return for {}", symbol);
                return QuoteLookup {
                    return_pct: entry.return_pct,
                    outcome: QuoteOutcome::Cached,
                };
            }
        }

        match self.provider.daily_return(source_url, symbol).await {
            Ok(return_pct) => {
                entries.insert(
                    source_url.to_string(),
                    CacheEntry {
                        return_pct,
                        fetched_at: Instant::now(),
                    },
                );
                QuoteLookup {
                    return_pct,
                    outcome: QuoteOutcome::Fetched,
                }
            }
            Err(err) => {
                warn!("Error fetching {}: {}", symbol, err);
                QuoteLookup {
                    return_pct: 0.0,
                    outcome: QuoteOutcome::Failed,
                }
            }
        }
    }
}
