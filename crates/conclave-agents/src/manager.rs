//! Agent Manager
//!
//! Owns the agent registry, routes or broadcasts requests, runs multi-agent
//! fan-out, and keeps a bounded conversation history. All registry and
//! history mutation happens on the caller's task between suspension points;
//! in-flight agent calls hold their own `Arc`s, so a concurrent
//! `update_config` only swaps the manager's lookup tables and never
//! invalidates an agent an in-flight call captured.

use crate::code_review::{CodeReviewAgent, CODE_REVIEW_AGENT_ID};
use crate::settings::Settings;
use conclave_core::{Agent, AgentContext, AgentMessage, AgentResponse};
use conclave_llm::{build_provider, InferenceProvider};
use futures::future::join_all;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::{debug, info};

/// Conversation history keeps the most recent this-many messages
pub const HISTORY_CAPACITY: usize = 100;

/// Registry, router and conversation log for a set of agents
pub struct AgentManager {
    agents: HashMap<String, Arc<dyn Agent>>,
    /// Active agent ids in registration order; routing iterates this
    active: Vec<String>,
    history: VecDeque<AgentMessage>,
    provider: Arc<dyn InferenceProvider>,
    settings: Settings,
}

impl AgentManager {
    /// Build a manager and register every implemented, enabled agent
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let provider = build_provider(&settings.ai);
        let mut manager = Self {
            agents: HashMap::new(),
            active: Vec::new(),
            history: VecDeque::new(),
            provider,
            settings,
        };
        manager.initialize_agents();
        manager
    }

    fn initialize_agents(&mut self) {
        for id in self.settings.agents.enabled.clone() {
            match id.as_str() {
                CODE_REVIEW_AGENT_ID => {
                    self.register(Arc::new(CodeReviewAgent::new(Arc::clone(&self.provider))));
                }
                // Declared in the default enabled list but not implemented yet.
                other => debug!(agent = other, "enabled agent has no implementation, skipping"),
            }
        }
    }

    /// Insert an agent, overwriting any existing entry with the same id
    pub fn register(&mut self, agent: Arc<dyn Agent>) {
        let id = agent.id().to_string();
        info!(agent = %id, "registering agent");
        self.agents.insert(id.clone(), agent);
        if !self.active.contains(&id) {
            self.active.push(id);
        }
    }

    /// Remove an agent; no-op when absent
    pub fn unregister(&mut self, agent_id: &str) {
        self.agents.remove(agent_id);
        self.active.retain(|id| id != agent_id);
    }

    /// Look up an agent by id
    #[must_use]
    pub fn agent(&self, agent_id: &str) -> Option<Arc<dyn Agent>> {
        self.agents.get(agent_id).cloned()
    }

    /// Every registered agent
    #[must_use]
    pub fn agents(&self) -> Vec<Arc<dyn Agent>> {
        self.agents.values().cloned().collect()
    }

    /// Agents currently eligible for routing, in registration order
    #[must_use]
    pub fn active_agents(&self) -> Vec<Arc<dyn Agent>> {
        self.active
            .iter()
            .filter_map(|id| self.agents.get(id).cloned())
            .collect()
    }

    /// Route a request to every capable agent, or a single default
    ///
    /// Capable agents are all invoked concurrently: every `process` future
    /// is created before any is awaited, so their provider round-trips
    /// interleave. A failing agent reports through its own response's
    /// `success` flag and never suppresses its siblings' results. With no
    /// capable agent and a non-empty active set, exactly one default agent
    /// runs: `codeReview` when registered, else the first active agent.
    pub async fn route_request(
        &mut self,
        request: &str,
        context: &AgentContext,
    ) -> Vec<AgentResponse> {
        let capable: Vec<Arc<dyn Agent>> = self
            .active_agents()
            .into_iter()
            .filter(|agent| agent.can_handle(request, context))
            .collect();

        let responses = if capable.is_empty() {
            let active = self.active_agents();
            let default = active
                .iter()
                .find(|agent| agent.id() == CODE_REVIEW_AGENT_ID)
                .or_else(|| active.first());
            match default {
                Some(agent) => {
                    debug!(agent = agent.id(), "no capable agent, using default");
                    vec![agent.process(context, Some(request)).await]
                }
                None => Vec::new(),
            }
        } else {
            debug!(agents = capable.len(), "dispatching to capable agents");
            let futures: Vec<_> = capable
                .iter()
                .map(|agent| agent.process(context, Some(request)))
                .collect();
            join_all(futures).await
        };

        self.add_to_history(AgentMessage::user(request));
        for response in &responses {
            // Responses are recorded under the manager's own id rather than
            // the responding agent's; downstream consumers rely on this.
            self.add_to_history(AgentMessage::agent(&response.message, "manager"));
        }

        responses
    }

    /// Direct-address one agent; unknown ids yield a synthetic failure
    ///
    /// Does not touch the conversation history.
    pub async fn request_agent(
        &self,
        agent_id: &str,
        context: &AgentContext,
        request: Option<&str>,
    ) -> AgentResponse {
        match self.agent(agent_id) {
            Some(agent) => agent.process(context, request).await,
            None => AgentResponse::failed(format!("Agent {} not found", agent_id)),
        }
    }

    /// Let one agent consult another through the manager
    ///
    /// The consulted agent sees a context copy whose codebase context is
    /// prefixed with a bracketed note naming the requester and the question;
    /// the caller's context is untouched. Consultations are agent-to-agent
    /// and are not recorded in the history.
    pub async fn consult_agent(
        &self,
        requesting_agent_id: &str,
        consulted_agent_id: &str,
        context: &AgentContext,
        question: &str,
    ) -> AgentResponse {
        let Some(consulted) = self.agent(consulted_agent_id) else {
            return AgentResponse::failed(format!(
                "Consulted agent {} not found",
                consulted_agent_id
            ));
        };

        let mut consultation = context.clone();
        consultation.codebase_context = Some(format!(
            "[Consultation from {}]: {}\n\n{}",
            requesting_agent_id,
            question,
            context.codebase_context.as_deref().unwrap_or_default()
        ));

        consulted.process(&consultation, Some(question)).await
    }

    /// Swap configuration and provider, then rebuild the registry
    ///
    /// In-flight calls against previously registered agents keep their own
    /// references and run to completion.
    pub fn update_config(&mut self, settings: Settings) {
        info!(provider = %settings.ai.provider, "reloading configuration");
        self.provider = build_provider(&settings.ai);
        self.settings = settings;
        self.agents.clear();
        self.active.clear();
        self.initialize_agents();
    }

    /// Append a message, dropping the oldest once over capacity
    pub fn add_to_history(&mut self, message: AgentMessage) {
        self.history.push_back(message);
        if self.history.len() > HISTORY_CAPACITY {
            self.history.pop_front();
        }
    }

    /// Snapshot of the conversation history, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<AgentMessage> {
        self.history.iter().cloned().collect()
    }

    /// Empty the conversation history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The manager's current shared provider
    #[must_use]
    pub fn provider(&self) -> Arc<dyn InferenceProvider> {
        Arc::clone(&self.provider)
    }
}
