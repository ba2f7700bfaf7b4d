//! Ollama - local daemon provider
//!
//! Ollama runs models locally behind a loopback HTTP endpoint. Availability
//! is probed against `/api/tags`; generation goes through `/api/generate`
//! with streaming disabled.

use crate::error::{Error, Result};
use crate::provider::InferenceProvider;
use crate::settings::OllamaSettings;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Ollama API URL
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default Ollama model
pub(crate) const DEFAULT_MODEL: &str = "llama2";

/// Availability probe timeout
const AVAILABILITY_TIMEOUT: Duration = Duration::from_secs(2);

/// Generation timeout (local inference is slow)
const GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    /// Generated text; missing field degrades to an empty string
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct OllamaErrorBody {
    error: String,
}

/// Local Ollama daemon provider
pub struct OllamaProvider {
    client: Client,
    settings: OllamaSettings,
}

impl OllamaProvider {
    /// Create a provider; trailing slashes on the base URL are trimmed
    #[must_use]
    pub fn new(mut settings: OllamaSettings) -> Self {
        settings.base_url = settings.base_url.trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            settings,
        }
    }

    /// Create with default settings
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(OllamaSettings::default())
    }

    async fn send_generate(&self, request: OllamaGenerateRequest) -> Result<OllamaGenerateResponse> {
        let url = format!("{}/api/generate", self.settings.base_url);

        let response = self
            .client
            .post(&url)
            .timeout(GENERATION_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(GENERATION_TIMEOUT.as_millis() as u64)
                } else if e.is_connect() {
                    Error::Network(format!(
                        "failed to connect to Ollama at {}. Is Ollama running?",
                        self.settings.base_url
                    ))
                } else {
                    Error::Network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<OllamaErrorBody>(&body) {
                return Err(Error::Api(error.error));
            }
            return Err(Error::Api(format!("HTTP {}: {}", status, body)));
        }

        serde_json::from_str(&body).map_err(|e| Error::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl InferenceProvider for OllamaProvider {
    fn name(&self) -> &'static str {
        "ollama"
    }

    async fn generate(&self, prompt: &str, context: Option<&str>) -> Result<String> {
        let full_prompt = match context {
            Some(context) => format!("{}\n\n{}", context, prompt),
            None => prompt.to_string(),
        };

        debug!(model = %self.settings.model, "sending generate request to Ollama");

        let request = OllamaGenerateRequest {
            model: self.settings.model.clone(),
            prompt: full_prompt,
            stream: false,
        };

        Ok(self.send_generate(request).await?.response)
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.settings.base_url);
        match self
            .client
            .get(&url)
            .timeout(AVAILABILITY_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
