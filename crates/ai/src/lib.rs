//! Foliopulse AI - question answering over computed portfolio figures.
//!
//! The assistant takes the output of one aggregation run, renders it into a
//! compact text table, and relays it together with the user's question to a
//! text-completion provider. The provider is an opaque collaborator behind
//! [`TextCompletionProvider`]: it accepts a prompt string and returns text
//! or a failure, nothing more. Assistant failures never touch aggregation
//! state.

pub mod error;
pub mod providers;
pub mod service;

pub use error::AssistantError;
pub use providers::{GeminiProvider, TextCompletionProvider, DEFAULT_GEMINI_MODEL};
pub use service::AssistantService;
