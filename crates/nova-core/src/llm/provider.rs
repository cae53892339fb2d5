//! LlmProvider trait definition.

use nova_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends (Groq, Gemini).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in nova-infra.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name used in logs (e.g., "groq").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
