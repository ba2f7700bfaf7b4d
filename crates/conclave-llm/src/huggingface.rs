//! HuggingFace - hosted inference provider (stub)
//!
//! Generation is not wired up yet; availability only reflects whether an
//! API key is configured.

use crate::error::{Error, Result};
use crate::provider::InferenceProvider;
use async_trait::async_trait;

/// Default HuggingFace model
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// HuggingFace Inference API provider
pub struct HuggingFaceProvider {
    api_key: String,
    #[allow(dead_code)] // Held for the real generation implementation
    model: String,
}

impl HuggingFaceProvider {
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
impl InferenceProvider for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    async fn generate(&self, _prompt: &str, _context: Option<&str>) -> Result<String> {
        Err(Error::NotImplemented("HuggingFace".to_string()))
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
        assert!(!HuggingFaceProvider::new("", None).is_available().await);
        assert!(HuggingFaceProvider::new("hf_key", None).is_available().await);
    }

    #[tokio::test]
    async fn test_generate_is_not_implemented() {
        let provider = HuggingFaceProvider::new("hf_key", None);

        let err = provider.generate("prompt", None).await.unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
        assert!(err.to_string().contains("not yet implemented"));
    }
}
