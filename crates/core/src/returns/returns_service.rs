//! Weighted portfolio return aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::return_cache::ReturnCache;
use crate::holdings::Holding;

/// Per-holding result row for one aggregation run.
///
/// Rows are ephemeral: they exist for one aggregation + render cycle and
/// are never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingReturn {
    pub symbol: String,
    /// Today's percentage return; `0.0` when the fetch failed (see `fetched`).
    pub return_pct: f64,
    /// The holding's raw weight, not normalized.
    pub weight_pct: f64,
    /// `return_pct` times the weight normalized across this run.
    pub contribution_pct: f64,
    /// False when the quote fetch failed and the `0.0` fallback was used.
    pub fetched: bool,
}

/// Result of one aggregation run over a holdings snapshot.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReturns {
    pub as_of: DateTime<Utc>,
    /// Rows in the snapshot's order (descending weight).
    pub rows: Vec<HoldingReturn>,
    /// Sum of all row contributions; the portfolio's weighted return today.
    pub total_return_pct: f64,
}

impl PortfolioReturns {
    /// Number of holdings trading up today.
    pub fn advancing_count(&self) -> usize {
        self.rows.iter().filter(|r| r.return_pct > 0.0).count()
    }

    /// Best row by return; ties keep the earliest row in snapshot order.
    pub fn best(&self) -> Option<&HoldingReturn> {
        self.rows.iter().reduce(|best, row| {
            if row.return_pct > best.return_pct {
                row
            } else {
                best
            }
        })
    }

    /// Worst row by return; ties keep the earliest row in snapshot order.
    pub fn worst(&self) -> Option<&HoldingReturn> {
        self.rows.iter().reduce(|worst, row| {
            if row.return_pct < worst.return_pct {
                row
            } else {
                worst
            }
        })
    }
}

/// Computes the weighted portfolio return over a holdings snapshot.
///
/// Holdings are iterated sequentially in the snapshot's order, one quote
/// lookup per holding; a failed lookup contributes `0.0` and never aborts
/// the run. Callers snapshot the store under its lock before a run so an
/// in-flight aggregation never iterates a mutating collection.
pub struct ReturnsService {
    cache: ReturnCache,
}

impl ReturnsService {
    /// Creates a service over the given quote cache.
    pub fn new(cache: ReturnCache) -> Self {
        Self { cache }
    }

    /// Runs one aggregation over `holdings`.
    ///
    /// An empty snapshot is a valid, non-error state and yields no rows and
    /// a `0.0` total. The sum of row contributions equals the returned
    /// total exactly - there is a single accumulation path and no rounding
    /// before presentation.
    pub async fn portfolio_returns(&self, holdings: &[Holding]) -> PortfolioReturns {
        let total_weight: f64 = holdings.iter().map(|h| h.weight_pct).sum();

        let mut rows = Vec::with_capacity(holdings.len());
        let mut total_return_pct = 0.0;
        for holding in holdings {
            let lookup = self
                .cache
                .daily_return(&holding.source_url, &holding.symbol)
                .await;
            let normalized_weight = if total_weight > 0.0 {
                holding.weight_pct / total_weight
            } else {
                0.0
            };
            let contribution_pct = lookup.return_pct * normalized_weight;
            total_return_pct += contribution_pct;

            rows.push(HoldingReturn {
                symbol: holding.symbol.clone(),
                return_pct: lookup.return_pct,
                weight_pct: holding.weight_pct,
                contribution_pct,
                fetched: lookup.is_quote(),
            });
        }

        PortfolioReturns {
            as_of: Utc::now(),
            rows,
            total_return_pct,
        }
    }
}
