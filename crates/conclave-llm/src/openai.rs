//! OpenAI - hosted inference provider (stub)
//!
//! Same contract as the HuggingFace stub: availability reflects the API key,
//! generation is not implemented yet.

use crate::error::{Error, Result};
use crate::provider::InferenceProvider;
use async_trait::async_trait;

/// Default OpenAI model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI chat completion provider
pub struct OpenAiProvider {
    api_key: String,
    #[allow(dead_code)] // Held for the real generation implementation
    model: String,
}

impl OpenAiProvider {
    /// Create a provider; `model` falls back to [`DEFAULT_MODEL`]
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl InferenceProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate(&self, _prompt: &str, _context: Option<&str>) -> Result<String> {
        Err(Error::NotImplemented("OpenAI".to_string()))
    }

    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_availability_tracks_api_key() {
        assert!(!OpenAiProvider::new("", None).is_available().await);
        assert!(OpenAiProvider::new("sk-test", None).is_available().await);
    }

    #[tokio::test]
    async fn test_generate_is_not_implemented() {
        let provider = OpenAiProvider::new("sk-test", Some("gpt-4".to_string()));

        let err = provider.generate("prompt", Some("context")).await.unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
    }
}
