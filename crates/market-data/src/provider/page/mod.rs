//! Quote page provider implementation.
//!
//! Fetches a public quote page over HTTP and extracts today's percentage
//! return from the rendered text. Works against screener-style company
//! pages where the day's move is the first figure printed as `-1.42%`.
//!
//! # Extraction Contract
//!
//! The page body is reduced to its visible text, then the first decimal
//! number immediately followed by a `%` character wins. The regex matches
//! the trailing `%` and excludes it via a capture group (the `regex` crate
//! has no lookahead).

use async_trait::async_trait;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::provider::DailyReturnProvider;

const PROVIDER_ID: &str = "QUOTE_PAGE";

/// Default HTTP request timeout; a page slower than this is treated as failed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Quote pages serve a stripped-down body to unknown clients; present a
/// desktop browser instead.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

lazy_static! {
    /// First decimal number immediately followed by '%', sign optional.
    static ref PERCENT_FIGURE_REGEX: Regex =
        Regex::new(r"([+-]?[0-9]+\.[0-9]+)%").expect("Invalid regex pattern");
}

/// Reference provider scraping a quote page for the day's percentage move.
///
/// # Example
///
/// ```ignore
/// let provider = QuotePageProvider::new();
/// let pct = provider
///     .daily_return("https://www.screener.in/company/DIXON/consolidated/", "DIXON")
///     .await?;
/// ```
pub struct QuotePageProvider {
    client: Client,
}

impl QuotePageProvider {
    /// Create a new quote page provider with the default timeout.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    fn classify(symbol: &str, error: reqwest::Error) -> MarketDataError {
        if error.is_timeout() {
            MarketDataError::Timeout {
                symbol: symbol.to_string(),
            }
        } else {
            MarketDataError::Network {
                symbol: symbol.to_string(),
                source: error,
            }
        }
    }
}

impl Default for QuotePageProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DailyReturnProvider for QuotePageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn daily_return(&self, source_url: &str, symbol: &str) -> Result<f64, MarketDataError> {
        debug!("Fetching quote page for {} from {}", symbol, source_url);

        let response = self
            .client
            .get(source_url)
            .send()
            .await
            .map_err(|e| Self::classify(symbol, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Http {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Self::classify(symbol, e))?;

        first_percent_figure(&page_text(&body)).ok_or_else(|| MarketDataError::NoPercentFigure {
            symbol: symbol.to_string(),
        })
    }
}

/// Reduce an HTML document to its visible text.
fn page_text(body: &str) -> String {
    let document = Html::parse_document(body);
    document.root_element().text().collect::<Vec<_>>().join(" ")
}

/// Extract the first `<decimal>%` figure from free-form text.
fn first_percent_figure(text: &str) -> Option<f64> {
    PERCENT_FIGURE_REGEX
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|figure| figure.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_first_percent_figure() {
        let text = "DIXON Ltd. 14,520.00 -1.42% 52,310 Cr. 3.95% away from high";
        assert_eq!(first_percent_figure(text), Some(-1.42));
    }

    #[test]
    fn test_extracts_positive_signed_figure() {
        assert_eq!(first_percent_figure("up +2.05% today"), Some(2.05));
    }

    #[test]
    fn test_unsigned_figure_parses() {
        assert_eq!(first_percent_figure("moved 0.80% higher"), Some(0.8));
    }

    #[test]
    fn test_integer_percent_does_not_match() {
        // The page prints day moves with decimals; a bare "5%" is some other
        // figure (promotions, ratios) and must not be picked up.
        assert_eq!(first_percent_figure("save 5% on fees"), None);
    }

    #[test]
    fn test_no_figure_is_none() {
        assert_eq!(first_percent_figure("no numbers here"), None);
    }

    #[test]
    fn test_html_is_reduced_to_text_before_matching() {
        let body = r#"<html><body>
            <span class="change down">-0.73%</span>
            <span>1.20%</span>
        </body></html>"#;
        assert_eq!(first_percent_figure(&page_text(body)), Some(-0.73));
    }

    #[test]
    fn test_figure_inside_markup_attributes_is_ignored() {
        let body = r#"<html><body><div data-x="9.99%">flat 0.00% day</div></body></html>"#;
        assert_eq!(first_percent_figure(&page_text(body)), Some(0.0));
    }
}
