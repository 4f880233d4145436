//! Returns module - the quote cache and the portfolio aggregation service.

mod return_cache;
mod returns_service;

#[cfg(test)]
mod returns_service_tests;

// Re-export the public interface
pub use return_cache::{QuoteLookup, QuoteOutcome, ReturnCache, DEFAULT_QUOTE_TTL};
pub use returns_service::{HoldingReturn, PortfolioReturns, ReturnsService};
