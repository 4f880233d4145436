//! Portfolio Q&A service.
//!
//! Formats one aggregation run into the prompt's data table and relays the
//! user's question to the configured completion provider.

use std::sync::Arc;

use log::debug;

use foliopulse_core::returns::PortfolioReturns;

use crate::error::AssistantError;
use crate::providers::TextCompletionProvider;

/// Answers free-form questions about one aggregation run.
pub struct AssistantService {
    provider: Arc<dyn TextCompletionProvider>,
}

impl AssistantService {
    /// Creates a service over the given completion provider.
    pub fn new(provider: Arc<dyn TextCompletionProvider>) -> Self {
        Self { provider }
    }

    /// Answers `question` against the figures in `returns`.
    ///
    /// The question is embedded verbatim below the data table; an empty
    /// question is rejected before any provider call.
    pub async fn ask(
        &self,
        returns: &PortfolioReturns,
        question: &str,
    ) -> Result<String, AssistantError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::EmptyQuestion);
        }

        let prompt = build_prompt(returns, question);
        debug!("Relaying portfolio question to {}", self.provider.id());
        self.provider.complete(&prompt).await
    }
}

/// One line per holding: `SYMBOL: Return +X.XX%, Weight Y.Y%, Contribution +Z.ZZZ%`.
fn performance_table(returns: &PortfolioReturns) -> String {
    returns
        .rows
        .iter()
        .map(|row| {
            format!(
                "{}: Return {:+.2}%, Weight {:.1}%, Contribution {:+.3}%",
                row.symbol, row.return_pct, row.weight_pct, row.contribution_pct
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_prompt(returns: &PortfolioReturns, question: &str) -> String {
    format!(
        "You are a financial assistant.\n\
         Below is today's portfolio performance data:\n\
         {}\n\n\
         Based on this data, answer the following question clearly and concisely:\n\
         {}",
        performance_table(returns),
        question
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use foliopulse_core::returns::{HoldingReturn, PortfolioReturns};

    use super::*;

    /// Fake provider that records the prompt it was given.
    #[derive(Default)]
    struct RecordingProvider {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextCompletionProvider for RecordingProvider {
        fn id(&self) -> &'static str {
            "RECORDING"
        }

        async fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("the answer".to_string())
        }
    }

    fn sample_returns() -> PortfolioReturns {
        PortfolioReturns {
            as_of: Utc::now(),
            rows: vec![
                HoldingReturn {
                    symbol: "DIXON".to_string(),
                    return_pct: 2.0,
                    weight_pct: 60.0,
                    contribution_pct: 1.2,
                    fetched: true,
                },
                HoldingReturn {
                    symbol: "KEI".to_string(),
                    return_pct: -1.0,
                    weight_pct: 40.0,
                    contribution_pct: -0.4,
                    fetched: true,
                },
            ],
            total_return_pct: 0.8,
        }
    }

    #[tokio::test]
    async fn test_prompt_embeds_table_and_question() {
        let provider = Arc::new(RecordingProvider::default());
        let service = AssistantService::new(provider.clone());

        let answer = service
            .ask(&sample_returns(), "Which stock performed best today?")
            .await
            .unwrap();
        assert_eq!(answer, "the answer");

        let prompts = provider.prompts.lock().unwrap();
        let prompt = &prompts[0];
        assert!(prompt.contains("DIXON: Return +2.00%, Weight 60.0%, Contribution +1.200%"));
        assert!(prompt.contains("KEI: Return -1.00%, Weight 40.0%, Contribution -0.400%"));
        assert!(prompt.contains("Which stock performed best today?"));
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected_before_the_provider() {
        let provider = Arc::new(RecordingProvider::default());
        let service = AssistantService::new(provider.clone());

        let result = service.ask(&sample_returns(), "   ").await;
        assert!(matches!(result, Err(AssistantError::EmptyQuestion)));
        assert!(provider.prompts.lock().unwrap().is_empty());
    }
}
