//! Provider settings
//!
//! Settings are plain serde structs with field-level defaults so a partial
//! or empty configuration file always deserializes to something usable.

use serde::{Deserialize, Serialize};

/// Default provider discriminant
pub(crate) const DEFAULT_PROVIDER: &str = "ollama";

/// Inference backend selection plus per-provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSettings {
    /// Provider discriminant: `ollama`, `huggingface` or `openai`
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Local Ollama daemon settings
    #[serde(default)]
    pub ollama: OllamaSettings,
    /// HuggingFace hosted settings
    #[serde(default)]
    pub huggingface: HostedSettings,
    /// OpenAI hosted settings
    #[serde(default)]
    pub openai: HostedSettings,
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            ollama: OllamaSettings::default(),
            huggingface: HostedSettings::default(),
            openai: HostedSettings::default(),
        }
    }
}

/// Settings for the local Ollama daemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaSettings {
    /// Daemon base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model to generate with
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_base_url() -> String {
    crate::ollama::DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    crate::ollama::DEFAULT_MODEL.to_string()
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

/// Settings for a hosted, API-key-gated provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostedSettings {
    /// API key; the provider reports unavailable when empty
    #[serde(default)]
    pub api_key: String,
    /// Model override; each provider has its own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AiSettings::default();

        assert_eq!(settings.provider, "ollama");
        assert_eq!(settings.ollama.base_url, "http://localhost:11434");
        assert_eq!(settings.ollama.model, "llama2");
        assert!(settings.huggingface.api_key.is_empty());
        assert!(settings.openai.api_key.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: AiSettings = serde_json::from_value(serde_json::json!({
            "provider": "openai",
            "openai": { "api_key": "sk-test" }
        }))
        .unwrap();

        assert_eq!(settings.provider, "openai");
        assert_eq!(settings.openai.api_key, "sk-test");
        assert_eq!(settings.ollama.model, "llama2");
    }
}
