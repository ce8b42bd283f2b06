// src/services/relay.rs
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use super::completion::{CompletionProvider, CompletionRequest, Turn};

pub const CLARYBOT_PERSONA: &str =
    "You are ClaryBot, a helpful career guidance assistant for students.";
pub const MAX_OUTPUT_TOKENS: u32 = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("message is missing or blank")]
    InvalidInput,
    #[error("completion provider failed")]
    ProviderFailure,
}

/// Bridges a single user message to the completion provider.
///
/// Holds no per-request state; clones share the provider handle.
#[derive(Clone)]
pub struct RelayService {
    provider: Arc<dyn CompletionProvider>,
    persona: String,
}

impl RelayService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self::with_persona(provider, CLARYBOT_PERSONA)
    }

    pub fn with_persona(provider: Arc<dyn CompletionProvider>, persona: impl Into<String>) -> Self {
        Self {
            provider,
            persona: persona.into(),
        }
    }

    /// Build the two-turn prompt sent for `text`. The user turn is verbatim.
    pub fn build_request(&self, text: &str) -> CompletionRequest {
        CompletionRequest {
            turns: vec![Turn::system(self.persona.as_str()), Turn::user(text)],
            max_tokens: MAX_OUTPUT_TOKENS,
        }
    }

    pub async fn submit_message(&self, text: Option<&str>) -> Result<String, RelayError> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(RelayError::InvalidInput),
        };

        debug!(chars = text.chars().count(), "forwarding message to provider");

        match self.provider.complete(self.build_request(text)).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                error!(error = %err, "completion provider call failed");
                Err(RelayError::ProviderFailure)
            }
        }
    }
}
