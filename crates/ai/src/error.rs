//! Error types for the assistant crate.

use thiserror::Error;

/// Errors surfaced by the assistant.
///
/// These are user-visible operation outcomes: a failed completion call is
/// reported to the caller, never retried silently and never allowed to
/// affect portfolio state.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// The question was empty after trimming; no provider call was made.
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// The provider answered with a non-2xx status or a malformed payload.
    #[error("Completion provider error: {provider} - {message}")]
    Provider {
        /// The provider that returned the error
        provider: String,
        /// The error detail from the provider
        message: String,
    },

    /// The provider answered 2xx but the payload carried no text.
    #[error("Completion response contained no text")]
    EmptyResponse,

    /// A network error occurred while calling the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
