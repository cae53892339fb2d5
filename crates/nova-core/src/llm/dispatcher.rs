//! Assistant response dispatcher.
//!
//! Produces an assistant reply for a user message by attempting the
//! configured providers one at a time in priority order. Every attempt is
//! reduced to a [`ProviderAttempt`]; the first success wins. When nothing
//! is configured, or every attempt failed, the local pattern responder
//! answers instead, so a reply is always produced.

use std::time::Duration;

use nova_types::llm::{CompletionRequest, LlmError, Message};

use super::box_provider::BoxLlmProvider;
use super::patterns;

/// Persona instruction sent with every provider request.
pub const PERSONA: &str = "You are Nova, a helpful and friendly AI assistant. You help users with productivity, planning, creative tasks, and answering questions. Be concise but informative. Use formatting like bullet points and numbered lists when appropriate.";

/// Most recent turns forwarded to a provider.
pub const HISTORY_WINDOW: usize = 10;

pub const MAX_OUTPUT_TOKENS: u32 = 1000;

pub const TEMPERATURE: f64 = 0.7;

/// Default bound on a single provider attempt.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(20);

/// Outcome of one provider attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderAttempt {
    Success { provider: String, text: String },
    Failed { provider: String, reason: String },
}

/// Where a reply came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    Provider(String),
    Local,
}

/// A generated assistant reply. `text` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub text: String,
    pub source: ReplySource,
}

/// Routes a message through the provider chain with local fallback.
///
/// Holds no mutable state; one instance is shared by every request.
#[derive(Debug)]
pub struct AssistantDispatcher {
    providers: Vec<BoxLlmProvider>,
    attempt_timeout: Duration,
}

impl AssistantDispatcher {
    /// `providers` must already be in priority order.
    pub fn new(providers: Vec<BoxLlmProvider>, attempt_timeout: Duration) -> Self {
        Self {
            providers,
            attempt_timeout,
        }
    }

    /// A dispatcher with no providers; every reply comes from the local responder.
    pub fn local_only() -> Self {
        Self::new(Vec::new(), DEFAULT_ATTEMPT_TIMEOUT)
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Build the request sent to every provider for this message.
    pub fn build_request(message: &str, history: &[Message]) -> CompletionRequest {
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        let mut messages: Vec<Message> = history[start..].to_vec();
        messages.push(Message::user(message));

        CompletionRequest {
            messages,
            system: Some(PERSONA.to_string()),
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: Some(TEMPERATURE),
        }
    }

    /// Produce a reply for `message` given the preceding conversation.
    ///
    /// Never fails. Provider errors are logged and absorbed.
    pub async fn respond(&self, message: &str, history: &[Message]) -> AssistantReply {
        if !self.providers.is_empty() {
            let request = Self::build_request(message, history);
            for provider in &self.providers {
                match self.attempt(provider, &request).await {
                    ProviderAttempt::Success { provider, text } => {
                        tracing::debug!(provider = %provider, "Provider produced reply");
                        return AssistantReply {
                            text,
                            source: ReplySource::Provider(provider),
                        };
                    }
                    ProviderAttempt::Failed { provider, reason } => {
                        tracing::warn!(
                            provider = %provider,
                            error = %reason,
                            "Provider failed, trying next in chain"
                        );
                    }
                }
            }
            tracing::info!("All providers failed, answering locally");
        }

        AssistantReply {
            text: patterns::local_reply(message).to_string(),
            source: ReplySource::Local,
        }
    }

    async fn attempt(&self, provider: &BoxLlmProvider, request: &CompletionRequest) -> ProviderAttempt {
        let name = provider.name().to_string();
        let result = match tokio::time::timeout(self.attempt_timeout, provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.attempt_timeout.as_secs())),
        };

        match result {
            Ok(response) if !response.content.trim().is_empty() => ProviderAttempt::Success {
                provider: name,
                text: response.content,
            },
            Ok(_) => ProviderAttempt::Failed {
                provider: name,
                reason: LlmError::EmptyResponse.to_string(),
            },
            Err(err) => ProviderAttempt::Failed {
                provider: name,
                reason: err.to_string(),
            },
        }
    }
}
