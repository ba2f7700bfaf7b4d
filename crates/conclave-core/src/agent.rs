//! The agent contract
//!
//! Every agent is a capability-scoped unit that turns a request plus context
//! into a structured response, optionally calling an inference backend.
//! `process` is infallible at the type level: every failure mode is folded
//! into a response whose `success` flag is false.

use crate::capability::AgentCapability;
use crate::context::AgentContext;
use crate::error::{Error, Result};
use crate::memory::AgentMemory;
use crate::response::AgentResponse;
use async_trait::async_trait;
use chrono::Utc;
use conclave_llm::InferenceProvider;
use std::sync::RwLock;

/// A capability-scoped unit of work backed by an inference provider
#[async_trait]
pub trait Agent: Send + Sync {
    /// Unique agent id within a registry
    fn id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    /// What the agent does
    fn description(&self) -> &str;

    /// Capabilities attached at construction time
    fn capabilities(&self) -> &[AgentCapability];

    /// The agent's own bounded memory
    fn memory(&self) -> &RwLock<AgentMemory>;

    /// Handle one request; the sole required async operation
    async fn process(&self, context: &AgentContext, request: Option<&str>) -> AgentResponse;

    /// Whether any capability claims the request
    ///
    /// An agent with zero capabilities never matches and is only reachable
    /// by direct addressing or as a routing fallback.
    fn can_handle(&self, request: &str, context: &AgentContext) -> bool {
        self.capabilities()
            .iter()
            .any(|capability| capability.matches(request, context))
    }

    /// Record feedback in memory under a timestamp-derived key
    ///
    /// Key collisions are last-write-wins; two feedback events within the
    /// same millisecond are not defended against.
    fn learn(&self, feedback: serde_json::Value) {
        let key = format!("feedback_{}", Utc::now().timestamp_millis());
        if let Ok(mut memory) = self.memory().write() {
            memory.store(key, feedback);
        }
    }
}

/// Invoke an inference provider, wrapping any failure as an agent-level error
///
/// The resulting error carries the provider's message behind a stable
/// `AI call failed:` prefix, so agents can surface it verbatim in a failed
/// response.
pub async fn call_provider(
    provider: &dyn InferenceProvider,
    prompt: &str,
    context: Option<&str>,
) -> Result<String> {
    provider
        .generate(prompt, context)
        .await
        .map_err(|e| Error::Generation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct NullAgent {
        capabilities: Vec<AgentCapability>,
        memory: RwLock<AgentMemory>,
    }

    impl NullAgent {
        fn new(capabilities: Vec<AgentCapability>) -> Self {
            Self {
                capabilities,
                memory: RwLock::new(AgentMemory::new()),
            }
        }
    }

    #[async_trait]
    impl Agent for NullAgent {
        fn id(&self) -> &str {
            "null"
        }
        fn name(&self) -> &str {
            "Null Agent"
        }
        fn description(&self) -> &str {
            "does nothing"
        }
        fn capabilities(&self) -> &[AgentCapability] {
            &self.capabilities
        }
        fn memory(&self) -> &RwLock<AgentMemory> {
            &self.memory
        }
        async fn process(&self, _context: &AgentContext, _request: Option<&str>) -> AgentResponse {
            AgentResponse::ok("noop", Vec::new())
        }
    }

    #[test]
    fn test_can_handle_ors_capabilities() {
        let agent = NullAgent::new(vec![
            AgentCapability::keywords("a", "", &["alpha"]),
            AgentCapability::keywords("b", "", &["beta"]),
        ]);
        let context = AgentContext::new("/work");

        assert!(agent.can_handle("run the alpha pass", &context));
        assert!(agent.can_handle("run the beta pass", &context));
        assert!(!agent.can_handle("run the gamma pass", &context));
    }

    #[test]
    fn test_zero_capabilities_never_match() {
        let agent = NullAgent::new(Vec::new());
        let context = AgentContext::new("/work");

        assert!(!agent.can_handle("review everything", &context));
    }

    #[test]
    fn test_learn_stores_feedback() {
        let agent = NullAgent::new(Vec::new());
        agent.learn(json!({"helpful": true}));

        let memory = agent.memory().read().unwrap();
        assert_eq!(memory.len(), 1);
        let (key, value) = memory.get_all().into_iter().next().unwrap();
        assert!(key.starts_with("feedback_"));
        assert_eq!(value, json!({"helpful": true}));
    }
}
