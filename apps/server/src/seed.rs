//! Built-in demo portfolio.
//!
//! A small midcap set with known-good screener.in pages, so a fresh
//! instance has something to render without manual setup.

use foliopulse_core::holdings::{HoldingsStore, NewHolding};

const DEMO_HOLDINGS: &[(&str, &str, f64)] = &[
    ("DIXON", "https://www.screener.in/company/DIXON/consolidated/", 10.08),
    ("COFORGE", "https://www.screener.in/company/COFORGE/consolidated/", 9.79),
    ("TRENT", "https://www.screener.in/company/TRENT/consolidated/", 9.14),
    ("PAYTM", "https://www.screener.in/company/PAYTM/consolidated/", 8.68),
    ("POLYCAB", "https://www.screener.in/company/POLYCAB/consolidated/", 6.22),
    ("KEI", "https://www.screener.in/company/KEI/", 4.11),
    ("MAXHEALTH", "https://www.screener.in/company/MAXHEALTH/consolidated/", 3.21),
    ("KPITTECH", "https://www.screener.in/company/KPITTECH/consolidated/", 1.03),
];

pub fn seed_demo_portfolio(store: &mut HoldingsStore) {
    for (symbol, source_url, weight_pct) in DEMO_HOLDINGS {
        let result = store.add(NewHolding {
            symbol: (*symbol).to_string(),
            source_url: (*source_url).to_string(),
            weight_pct: *weight_pct,
        });
        if let Err(err) = result {
            tracing::warn!("Skipping demo holding {}: {}", symbol, err);
        }
    }
    tracing::info!("Seeded demo portfolio with {} holdings", store.len());
}
