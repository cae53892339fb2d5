//! Groq provider over its OpenAI-compatible chat completions endpoint.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use secrecy::{ExposeSecret, SecretString};

use nova_core::llm::provider::LlmProvider;
use nova_types::llm::{CompletionRequest, CompletionResponse, LlmError, MessageRole};

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq chat completions.
///
/// Does NOT derive Debug: the async-openai client holds the API key.
pub struct GroqProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GroqProvider {
    pub fn new(api_key: &SecretString, model: &str) -> Self {
        Self::with_base_url(api_key, model, GROQ_BASE_URL)
    }

    pub fn with_base_url(api_key: &SecretString, model: &str, base_url: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
            model: model.to_string(),
        }
    }

    fn build_request(&self, request: &CompletionRequest) -> CreateChatCompletionRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);

        if let Some(ref system) = request.system {
            messages.push(system_message(system));
        }

        for msg in &request.messages {
            let mapped = match msg.role {
                MessageRole::System => system_message(&msg.content),
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                        content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                            msg.content.clone(),
                        )),
                        refusal: None,
                        name: None,
                        audio: None,
                        tool_calls: None,
                        function_call: None,
                    })
                }
            };
            messages.push(mapped);
        }

        CreateChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_completion_tokens: Some(request.max_tokens),
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        }
    }
}

fn system_message(content: &str) -> ChatCompletionRequestMessage {
    ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
        content: ChatCompletionRequestSystemMessageContent::Text(content.to_string()),
        name: None,
    })
}

impl LlmProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let response = self
            .client
            .chat()
            .create(self.build_request(request))
            .await
            .map_err(map_openai_error)?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or(LlmError::EmptyResponse)?;

        Ok(CompletionResponse {
            content,
            model: response.model,
        })
    }
}

fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "invalid_api_key"
                || error_type == "authentication_error"
                || api_err.message.contains("Invalid API Key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited {
                    retry_after_ms: None,
                }
            } else if code == "server_error" || error_type == "overloaded_error" {
                LlmError::Overloaded(api_err.message.clone())
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited {
                retry_after_ms: None,
            },
            Some(503) => LlmError::Overloaded(err.to_string()),
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_types::llm::Message;

    fn provider() -> GroqProvider {
        GroqProvider::new(&SecretString::from("gsk-test".to_string()), "llama-test")
    }

    #[test]
    fn test_build_request_puts_system_first() {
        let request = CompletionRequest {
            messages: vec![Message::user("Hi"), Message::assistant("Hello!"), Message::user("Plan my day")],
            system: Some("Be Nova".into()),
            max_tokens: 1000,
            temperature: Some(0.7),
        };

        let req = provider().build_request(&request);
        assert_eq!(req.model, "llama-test");
        assert_eq!(req.messages.len(), 4);
        assert!(matches!(req.messages[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(req.messages[2], ChatCompletionRequestMessage::Assistant(_)));
        assert_eq!(req.max_completion_tokens, Some(1000));
        assert_eq!(req.temperature, Some(0.7));
    }

    #[test]
    fn test_build_request_without_system() {
        let request = CompletionRequest {
            messages: vec![Message::user("Hi")],
            system: None,
            max_tokens: 10,
            temperature: None,
        };
        let req = provider().build_request(&request);
        assert_eq!(req.messages.len(), 1);
        assert!(req.temperature.is_none());
    }

    #[test]
    fn test_map_auth_error() {
        use async_openai::error::{ApiError, OpenAIError};
        let err = map_openai_error(OpenAIError::ApiError(ApiError {
            message: "Invalid API Key".into(),
            r#type: Some("invalid_request_error".into()),
            param: None,
            code: Some("invalid_api_key".into()),
        }));
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[test]
    fn test_map_rate_limit() {
        use async_openai::error::{ApiError, OpenAIError};
        let err = map_openai_error(OpenAIError::ApiError(ApiError {
            message: "slow down".into(),
            r#type: None,
            param: None,
            code: Some("rate_limit_exceeded".into()),
        }));
        assert!(matches!(err, LlmError::RateLimited { .. }));
    }
}
