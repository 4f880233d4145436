//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching a daily return.
///
/// Every variant carries the symbol the fetch was issued for, so a warning
/// logged at the aggregation layer identifies the affected holding without
/// extra bookkeeping.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request did not complete within the provider's timeout.
    #[error("Timeout fetching {symbol}")]
    Timeout {
        /// The symbol the fetch was issued for
        symbol: String,
    },

    /// The quote page answered with a non-2xx status.
    #[error("HTTP {status} fetching {symbol}")]
    Http {
        /// The symbol the fetch was issued for
        symbol: String,
        /// The HTTP status code returned by the page
        status: u16,
    },

    /// The page loaded but its text contained no decimal percentage figure.
    /// Either the page layout changed or the URL points somewhere unexpected.
    #[error("No percentage figure found in page for {symbol}")]
    NoPercentFigure {
        /// The symbol the fetch was issued for
        symbol: String,
    },

    /// A transport-level error occurred (DNS, TLS, connection reset, ...).
    #[error("Network error fetching {symbol}: {source}")]
    Network {
        /// The symbol the fetch was issued for
        symbol: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },
}
