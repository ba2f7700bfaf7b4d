//! Provider trait and configuration-driven factory

use crate::error::Result;
use crate::huggingface::HuggingFaceProvider;
use crate::ollama::OllamaProvider;
use crate::openai::OpenAiProvider;
use crate::settings::{AiSettings, OllamaSettings};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Abstraction over a text-generation backend
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Provider name, e.g. `ollama`
    fn name(&self) -> &'static str;

    /// Turn a prompt (plus optional context preamble) into generated text
    async fn generate(&self, prompt: &str, context: Option<&str>) -> Result<String>;

    /// Whether the backend is currently reachable
    ///
    /// Never errors; any failure reports `false`.
    async fn is_available(&self) -> bool;
}

/// Build a provider from settings
///
/// Selection is a pure function of the configuration. Unknown discriminants
/// fall back to an Ollama provider with default settings.
pub fn build_provider(settings: &AiSettings) -> Arc<dyn InferenceProvider> {
    match settings.provider.as_str() {
        "ollama" => Arc::new(OllamaProvider::new(settings.ollama.clone())),
        "huggingface" => Arc::new(HuggingFaceProvider::new(
            settings.huggingface.api_key.clone(),
            settings.huggingface.model.clone(),
        )),
        "openai" => Arc::new(OpenAiProvider::new(
            settings.openai.api_key.clone(),
            settings.openai.model.clone(),
        )),
        other => {
            warn!(provider = other, "unknown provider, falling back to ollama defaults");
            Arc::new(OllamaProvider::new(OllamaSettings::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_selects_by_discriminant() {
        let mut settings = AiSettings::default();
        assert_eq!(build_provider(&settings).name(), "ollama");

        settings.provider = "huggingface".to_string();
        assert_eq!(build_provider(&settings).name(), "huggingface");

        settings.provider = "openai".to_string();
        assert_eq!(build_provider(&settings).name(), "openai");
    }

    #[test]
    fn test_factory_falls_back_on_unknown_discriminant() {
        let settings = AiSettings {
            provider: "bard".to_string(),
            ..AiSettings::default()
        };

        assert_eq!(build_provider(&settings).name(), "ollama");
    }
}
