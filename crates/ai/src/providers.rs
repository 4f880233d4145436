//! Text-completion provider adapters.
//!
//! This module provides an abstraction layer over LLM backends. The service
//! layer depends only on [`TextCompletionProvider`], which enables:
//!
//! - Swapping providers without changing service code
//! - Testing with fake providers (no network access)
//!
//! The reference implementation talks to the Gemini `generateContent` REST
//! endpoint with a plain JSON client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

/// Default model for portfolio Q&A.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const PROVIDER_ID: &str = "GEMINI";

/// Completions are slower than quote fetches; allow a generous timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for text-completion backends.
///
/// The contract is deliberately minimal: one prompt in, one text answer
/// out. Streaming, tool calling, and conversation history are out of scope
/// for portfolio Q&A.
#[async_trait]
pub trait TextCompletionProvider: Send + Sync {
    /// Unique identifier for this provider, used for logging and errors.
    fn id(&self) -> &'static str;

    /// Complete `prompt`, returning the answer text.
    async fn complete(&self, prompt: &str) -> Result<String, AssistantError>;
}

// ============================================================================
// Gemini wire types
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// ============================================================================
// Gemini provider
// ============================================================================

/// Text-completion provider backed by the Gemini REST API.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Create a provider for `model` authenticated with `api_key`.
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            model,
        }
    }

    /// Join the text parts of the first candidate, if any.
    fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
        let candidate = response.candidates.into_iter().next()?;
        let parts = candidate.content?.parts;
        let text = parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl TextCompletionProvider for GeminiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
        let url = format!(
            "{}/models/{}:generateContent",
            GEMINI_BASE_URL, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AssistantError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}: {}", status.as_u16(), message),
            });
        }

        let decoded: GenerateContentResponse = response.json().await?;
        Self::first_candidate_text(decoded).ok_or(AssistantError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_candidate_text() {
        let payload = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "DIXON performed "}, {"text": "best today."}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(
            GeminiProvider::first_candidate_text(response).as_deref(),
            Some("DIXON performed best today.")
        );
    }

    #[test]
    fn test_missing_candidates_is_empty() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(GeminiProvider::first_candidate_text(response), None);
    }

    #[test]
    fn test_blank_candidate_text_is_empty() {
        let payload = r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(GeminiProvider::first_candidate_text(response), None);
    }
}
