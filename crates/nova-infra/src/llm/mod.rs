//! LLM provider implementations.
//!
//! Concrete [`LlmProvider`](nova_core::llm::provider::LlmProvider)s for Groq
//! and Gemini, plus [`build_dispatcher`] which assembles whichever of them
//! are configured into an [`AssistantDispatcher`] in priority order.

pub mod gemini;
pub mod groq;

use std::time::Duration;

use secrecy::SecretString;

use nova_core::llm::box_provider::BoxLlmProvider;
use nova_core::llm::dispatcher::{AssistantDispatcher, DEFAULT_ATTEMPT_TIMEOUT};
use nova_types::llm::{LlmError, ProviderKind};

use self::gemini::GeminiProvider;
use self::groq::GroqProvider;

/// Keys and models for the remote providers. A missing key disables that
/// provider.
pub struct ProviderSettings {
    pub groq_api_key: Option<SecretString>,
    pub groq_model: String,
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            groq_model: ProviderKind::Groq.default_model().to_string(),
            gemini_api_key: None,
            gemini_model: ProviderKind::Gemini.default_model().to_string(),
            timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }
}

impl ProviderSettings {
    fn api_key(&self, kind: ProviderKind) -> Option<&SecretString> {
        match kind {
            ProviderKind::Groq => self.groq_api_key.as_ref(),
            ProviderKind::Gemini => self.gemini_api_key.as_ref(),
        }
    }

    fn model(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::Groq => &self.groq_model,
            ProviderKind::Gemini => &self.gemini_model,
        }
    }

    /// Providers that have a key, lowest priority number first.
    pub fn configured(&self) -> Vec<ProviderKind> {
        let mut kinds: Vec<ProviderKind> = [ProviderKind::Groq, ProviderKind::Gemini]
            .into_iter()
            .filter(|k| self.api_key(*k).is_some())
            .collect();
        kinds.sort_by_key(|k| k.priority());
        kinds
    }
}

/// Construct a single provider from settings.
pub fn create_provider(
    kind: ProviderKind,
    settings: &ProviderSettings,
) -> Result<BoxLlmProvider, LlmError> {
    let key = settings
        .api_key(kind)
        .ok_or(LlmError::AuthenticationFailed)?;
    let model = settings.model(kind);

    match kind {
        ProviderKind::Groq => Ok(BoxLlmProvider::new(GroqProvider::new(key, model))),
        ProviderKind::Gemini => {
            let provider = GeminiProvider::new(key.clone(), model, settings.timeout)?;
            Ok(BoxLlmProvider::new(provider))
        }
    }
}

/// Build the dispatcher chain. Providers that fail to construct are skipped
/// with a warning; with none left every reply comes from the local
/// responder.
pub fn build_dispatcher(settings: &ProviderSettings) -> AssistantDispatcher {
    let providers: Vec<BoxLlmProvider> = settings
        .configured()
        .into_iter()
        .filter_map(|kind| match create_provider(kind, settings) {
            Ok(provider) => {
                tracing::info!(provider = %kind, model = settings.model(kind), "LLM provider enabled");
                Some(provider)
            }
            Err(e) => {
                tracing::warn!(provider = %kind, error = %e, "Skipping LLM provider");
                None
            }
        })
        .collect();

    if providers.is_empty() {
        tracing::info!("No LLM provider configured, using local responses only");
    }

    AssistantDispatcher::new(providers, settings.timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Option<SecretString> {
        Some(SecretString::from(s.to_string()))
    }

    #[test]
    fn test_no_keys_means_local_only() {
        let dispatcher = build_dispatcher(&ProviderSettings::default());
        assert!(dispatcher.provider_names().is_empty());
    }

    #[test]
    fn test_groq_precedes_gemini() {
        let settings = ProviderSettings {
            groq_api_key: key("g"),
            gemini_api_key: key("m"),
            ..Default::default()
        };
        let dispatcher = build_dispatcher(&settings);
        assert_eq!(dispatcher.provider_names(), vec!["groq", "gemini"]);
    }

    #[test]
    fn test_only_gemini() {
        let settings = ProviderSettings {
            gemini_api_key: key("m"),
            ..Default::default()
        };
        assert_eq!(settings.configured(), vec![ProviderKind::Gemini]);
        assert_eq!(build_dispatcher(&settings).provider_names(), vec!["gemini"]);
    }

    #[test]
    fn test_create_without_key_fails() {
        let settings = ProviderSettings::default();
        assert!(matches!(
            create_provider(ProviderKind::Groq, &settings),
            Err(LlmError::AuthenticationFailed)
        ));
    }
}
