//! Manager configuration surface

use conclave_llm::AiSettings;
use serde::{Deserialize, Serialize};

/// Agent ids enabled by default
///
/// Only `codeReview` has an implementation today; the rest are declared
/// ahead of time and skipped at registration.
pub const DEFAULT_ENABLED_AGENTS: &[&str] =
    &["codeReview", "testGenerator", "security", "documentation"];

/// Full configuration the manager is built from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Which agents to register
    #[serde(default)]
    pub agents: AgentSettings,
    /// Inference backend selection
    #[serde(default)]
    pub ai: AiSettings,
}

/// Agent enablement settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Ids of agents to register at initialization
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
}

fn default_enabled() -> Vec<String> {
    DEFAULT_ENABLED_AGENTS
        .iter()
        .map(|id| (*id).to_string())
        .collect()
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enabled_list() {
        let settings = Settings::default();

        assert_eq!(
            settings.agents.enabled,
            vec!["codeReview", "testGenerator", "security", "documentation"]
        );
        assert_eq!(settings.ai.provider, "ollama");
    }

    #[test]
    fn test_partial_config_keeps_field_defaults() {
        let settings: Settings = serde_json::from_value(serde_json::json!({
            "agents": { "enabled": ["codeReview"] }
        }))
        .unwrap();

        assert_eq!(settings.agents.enabled, vec!["codeReview"]);
        assert_eq!(settings.ai.provider, "ollama");
    }
}
