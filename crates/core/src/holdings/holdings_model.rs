use serde::{Deserialize, Serialize};

/// One portfolio constituent.
///
/// The symbol doubles as the collection key and is stored case-normalized
/// (trimmed, uppercase). `weight_pct` is the nominal allocation percentage;
/// weights are not required to sum to 100 across the portfolio - they are
/// normalized at aggregation time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    /// The quote page today's return is scraped from.
    pub source_url: String,
    pub weight_pct: f64,
}

/// Input for creating a holding.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub symbol: String,
    pub source_url: String,
    pub weight_pct: f64,
}

/// Partial update for a holding; `None` fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub source_url: Option<String>,
    pub weight_pct: Option<f64>,
}
