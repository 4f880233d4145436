//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;

/// Trait for daily-return quote sources.
///
/// Implement this trait to add support for a new quote source. The caller
/// supplies the per-holding source URL; the provider returns today's
/// percentage return as a signed decimal (`-1.42` for a 1.42% loss).
#[async_trait]
pub trait DailyReturnProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "QUOTE_PAGE". Used for logging.
    fn id(&self) -> &'static str;

    /// Fetch today's percentage return for one instrument.
    ///
    /// # Arguments
    ///
    /// * `source_url` - The quote page to fetch for this instrument
    /// * `symbol` - The instrument symbol, used for error context only
    ///
    /// # Returns
    ///
    /// The signed percentage return on success, or a [`MarketDataError`]
    /// on failure. Providers never substitute a fallback value; degrading
    /// a failure to a neutral figure is the caller's policy decision.
    async fn daily_return(&self, source_url: &str, symbol: &str) -> Result<f64, MarketDataError>;
}
