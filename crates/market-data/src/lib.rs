//! Foliopulse Market Data Crate
//!
//! This crate provides quote fetching for the Foliopulse application: given
//! the URL of a public quote page for an instrument, it extracts today's
//! percentage return as a signed decimal.
//!
//! # Overview
//!
//! Quote pages are free-form HTML; the only contract a provider honors is
//! "return today's percentage move, or fail". Everything fragile about a
//! specific page's markup is isolated behind the [`DailyReturnProvider`]
//! trait so callers depend on the contract, not the page.
//!
//! # Core Types
//!
//! - [`DailyReturnProvider`] - trait implemented by quote sources
//! - [`QuotePageProvider`] - reference provider scraping a quote page
//! - [`MarketDataError`] - failure taxonomy for fetch operations

pub mod errors;
pub mod provider;

pub use errors::MarketDataError;
pub use provider::{DailyReturnProvider, QuotePageProvider};
