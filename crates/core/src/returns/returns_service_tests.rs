//! Tests for the portfolio aggregation contract.

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::holdings::{Holding, HoldingsStore, NewHolding};
    use crate::returns::{ReturnCache, ReturnsService, DEFAULT_QUOTE_TTL};
    use foliopulse_market_data::{DailyReturnProvider, MarketDataError};

    // =========================================================================
    // Mock provider, keyed by symbol through deterministic test URLs
    // =========================================================================

    #[derive(Default)]
    struct MockProvider {
        returns: Mutex<HashMap<String, f64>>,
        failing: Mutex<HashSet<String>>,
    }

    impl MockProvider {
        fn with_return(self, symbol: &str, return_pct: f64) -> Self {
            self.returns
                .lock()
                .unwrap()
                .insert(source_url(symbol), return_pct);
            self
        }

        fn with_failure(self, symbol: &str) -> Self {
            self.failing.lock().unwrap().insert(source_url(symbol));
            self
        }
    }

    #[async_trait]
    impl DailyReturnProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn daily_return(
            &self,
            source_url: &str,
            symbol: &str,
        ) -> Result<f64, MarketDataError> {
            if self.failing.lock().unwrap().contains(source_url) {
                return Err(MarketDataError::NoPercentFigure {
                    symbol: symbol.to_string(),
                });
            }
            Ok(*self.returns.lock().unwrap().get(source_url).unwrap_or(&0.0))
        }
    }

    fn source_url(symbol: &str) -> String {
        format!("https://quotes.test/{}", symbol)
    }

    fn holding(symbol: &str, weight_pct: f64) -> Holding {
        Holding {
            symbol: symbol.to_string(),
            source_url: source_url(symbol),
            weight_pct,
        }
    }

    fn service(provider: MockProvider) -> ReturnsService {
        ReturnsService::new(ReturnCache::new(Arc::new(provider), DEFAULT_QUOTE_TTL))
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    #[tokio::test]
    async fn test_weighted_return_for_two_holdings() {
        let provider = MockProvider::default()
            .with_return("A", 2.0)
            .with_return("B", -1.0);
        let snapshot = [holding("A", 60.0), holding("B", 40.0)];

        let returns = service(provider).portfolio_returns(&snapshot).await;

        assert_eq!(returns.rows.len(), 2);
        assert!((returns.rows[0].contribution_pct - 1.2).abs() < 1e-9);
        assert!((returns.rows[1].contribution_pct - (-0.4)).abs() < 1e-9);
        assert!((returns.total_return_pct - 0.8).abs() < 1e-9);
        assert_eq!(returns.best().unwrap().symbol, "A");
        assert_eq!(returns.worst().unwrap().symbol, "B");
        assert_eq!(returns.advancing_count(), 1);
    }

    #[tokio::test]
    async fn test_contributions_sum_to_total() {
        let provider = MockProvider::default()
            .with_return("A", 1.37)
            .with_return("B", -2.91)
            .with_return("C", 0.08)
            .with_return("D", 4.5);
        let snapshot = [
            holding("A", 10.08),
            holding("B", 9.79),
            holding("C", 3.2),
            holding("D", 0.86),
        ];

        let returns = service(provider).portfolio_returns(&snapshot).await;

        let summed: f64 = returns.rows.iter().map(|r| r.contribution_pct).sum();
        assert!((summed - returns.total_return_pct).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_uniform_return_survives_normalization() {
        // Same return everywhere means the total equals that return no
        // matter how lopsided the raw weights are.
        let provider = MockProvider::default()
            .with_return("A", 1.75)
            .with_return("B", 1.75)
            .with_return("C", 1.75);
        let snapshot = [holding("A", 72.0), holding("B", 12.5), holding("C", 1.2)];

        let returns = service(provider).portfolio_returns(&snapshot).await;

        assert!((returns.total_return_pct - 1.75).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_empty_snapshot_is_valid() {
        let returns = service(MockProvider::default()).portfolio_returns(&[]).await;

        assert!(returns.rows.is_empty());
        assert_eq!(returns.total_return_pct, 0.0);
        assert!(returns.best().is_none());
        assert!(returns.worst().is_none());
        assert_eq!(returns.advancing_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_fetch_degrades_one_row_only() {
        let provider = MockProvider::default()
            .with_failure("A")
            .with_return("B", 3.0);
        let snapshot = [holding("A", 50.0), holding("B", 50.0)];

        let returns = service(provider).portfolio_returns(&snapshot).await;

        let row_a = &returns.rows[0];
        assert_eq!(row_a.symbol, "A");
        assert_eq!(row_a.return_pct, 0.0);
        assert_eq!(row_a.contribution_pct, 0.0);
        assert!(!row_a.fetched);

        let row_b = &returns.rows[1];
        assert!(row_b.fetched);
        assert!((returns.total_return_pct - 1.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_rows_follow_store_snapshot_order() {
        let provider = MockProvider::default()
            .with_return("KEI", 0.5)
            .with_return("DIXON", -0.5)
            .with_return("TRENT", 1.0);

        let mut store = HoldingsStore::new();
        for (symbol, weight_pct) in [("KEI", 4.11), ("DIXON", 10.08), ("TRENT", 9.14)] {
            store
                .add(NewHolding {
                    symbol: symbol.to_string(),
                    source_url: source_url(symbol),
                    weight_pct,
                })
                .unwrap();
        }

        let snapshot = store.holdings().to_vec();
        let returns = service(provider).portfolio_returns(&snapshot).await;

        let symbols: Vec<&str> = returns.rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["DIXON", "TRENT", "KEI"]);
    }

    #[tokio::test]
    async fn test_best_and_worst_ties_keep_first_row() {
        let provider = MockProvider::default()
            .with_return("A", 1.0)
            .with_return("B", 1.0)
            .with_return("C", 1.0);
        let snapshot = [holding("A", 30.0), holding("B", 20.0), holding("C", 10.0)];

        let returns = service(provider).portfolio_returns(&snapshot).await;

        assert_eq!(returns.best().unwrap().symbol, "A");
        assert_eq!(returns.worst().unwrap().symbol, "A");
    }

    #[tokio::test]
    async fn test_raw_weights_are_reported_unnormalized() {
        let provider = MockProvider::default().with_return("A", 2.0);
        let snapshot = [holding("A", 12.5)];

        let returns = service(provider).portfolio_returns(&snapshot).await;

        assert_eq!(returns.rows[0].weight_pct, 12.5);
        // Single holding normalizes to weight 1.0.
        assert!((returns.rows[0].contribution_pct - 2.0).abs() < 1e-9);
    }
}
