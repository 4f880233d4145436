use log::debug;

use super::holdings_model::{Holding, HoldingUpdate, NewHolding};
use crate::errors::{Error, Result, ValidationError};

/// In-memory, weight-ordered collection of holdings.
///
/// The store is always kept sorted by descending weight after any mutation;
/// ties preserve relative insertion order (stable sort). Insertion order
/// itself carries no meaning. Symbols are unique under case-insensitive
/// comparison.
///
/// The store is exclusively owned by the hosting session and holds no
/// history: holdings live only as long as the host process unless the
/// integrator adds persistence.
#[derive(Debug, Clone, Default)]
pub struct HoldingsStore {
    holdings: Vec<Holding>,
}

impl HoldingsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holding and re-sorts the store.
    ///
    /// Fails without mutating the store when the symbol or source URL is
    /// empty, the weight is outside `(0, 100]`, or the (case-normalized)
    /// symbol already exists.
    pub fn add(&mut self, new_holding: NewHolding) -> Result<Holding> {
        let symbol = normalize_symbol(&new_holding.symbol);
        if symbol.is_empty() {
            return Err(ValidationError::EmptyField { field: "symbol" }.into());
        }
        let source_url = new_holding.source_url.trim().to_string();
        if source_url.is_empty() {
            return Err(ValidationError::EmptyField { field: "sourceUrl" }.into());
        }
        validate_weight(new_holding.weight_pct)?;
        if self.holdings.iter().any(|h| h.symbol == symbol) {
            return Err(ValidationError::DuplicateSymbol(symbol).into());
        }

        debug!("Adding holding {} at {:.2}%", symbol, new_holding.weight_pct);
        let holding = Holding {
            symbol,
            source_url,
            weight_pct: new_holding.weight_pct,
        };
        self.holdings.push(holding.clone());
        self.sort_by_weight();
        Ok(holding)
    }

    /// Updates a holding's source URL and/or weight in place, then re-sorts.
    ///
    /// Validation happens before any field is touched, so a rejected update
    /// leaves the holding exactly as it was.
    pub fn update(&mut self, symbol: &str, update: HoldingUpdate) -> Result<Holding> {
        let symbol = normalize_symbol(symbol);
        if let Some(weight_pct) = update.weight_pct {
            validate_weight(weight_pct)?;
        }
        let source_url = match update.source_url {
            Some(url) => {
                let url = url.trim().to_string();
                if url.is_empty() {
                    return Err(ValidationError::EmptyField { field: "sourceUrl" }.into());
                }
                Some(url)
            }
            None => None,
        };

        let holding = self
            .holdings
            .iter_mut()
            .find(|h| h.symbol == symbol)
            .ok_or(Error::HoldingNotFound(symbol))?;
        if let Some(url) = source_url {
            holding.source_url = url;
        }
        if let Some(weight_pct) = update.weight_pct {
            holding.weight_pct = weight_pct;
        }
        let updated = holding.clone();
        self.sort_by_weight();
        Ok(updated)
    }

    /// Removes a holding, returning it.
    ///
    /// Removal keeps the relative order of the remaining holdings, so no
    /// re-sort is needed.
    pub fn remove(&mut self, symbol: &str) -> Result<Holding> {
        let symbol = normalize_symbol(symbol);
        let index = self
            .holdings
            .iter()
            .position(|h| h.symbol == symbol)
            .ok_or(Error::HoldingNotFound(symbol))?;
        Ok(self.holdings.remove(index))
    }

    /// Looks up a holding by (case-insensitive) symbol.
    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        let symbol = normalize_symbol(symbol);
        self.holdings.iter().find(|h| h.symbol == symbol)
    }

    /// The holdings in display order (descending weight).
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Sum of all nominal weights.
    ///
    /// May legitimately be far from 100; callers may surface an advisory
    /// warning but the store never enforces a target.
    pub fn total_weight_pct(&self) -> f64 {
        self.holdings.iter().map(|h| h.weight_pct).sum()
    }

    fn sort_by_weight(&mut self) {
        // Stable sort: equal weights keep their relative insertion order.
        self.holdings
            .sort_by(|a, b| b.weight_pct.total_cmp(&a.weight_pct));
    }
}

fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

fn validate_weight(weight_pct: f64) -> Result<()> {
    if !weight_pct.is_finite() || weight_pct <= 0.0 || weight_pct > 100.0 {
        return Err(ValidationError::InvalidWeight(weight_pct).into());
    }
    Ok(())
}
