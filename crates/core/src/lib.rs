//! Foliopulse Core - holdings, return cache, and portfolio aggregation.
//!
//! This crate contains the portfolio return aggregation engine: an in-memory
//! holdings collection, a time-bounded cache over a quote provider, and the
//! service that combines per-holding daily returns into a weighted portfolio
//! return. It has no presentation concerns and no persistence; a host owns
//! the [`HoldingsStore`] for the lifetime of its session and passes snapshots
//! to the [`ReturnsService`].

pub mod errors;
pub mod holdings;
pub mod returns;

// Re-export common types
pub use holdings::{Holding, HoldingUpdate, HoldingsStore, NewHolding};
pub use returns::{HoldingReturn, PortfolioReturns, ReturnCache, ReturnsService};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
