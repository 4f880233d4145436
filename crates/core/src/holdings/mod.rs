//! Holdings module - domain models and the in-memory store.

mod holdings_model;
mod holdings_store;


// Re-export the public interface
pub use holdings_model::{Holding, HoldingUpdate, NewHolding};
pub use holdings_store::HoldingsStore;
