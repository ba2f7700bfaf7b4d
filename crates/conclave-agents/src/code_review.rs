//! Code Review Agent
//!
//! Builds a review prompt from the selected code, asks the inference
//! provider for pipe-delimited `TYPE|MESSAGE|LINE` findings, and parses the
//! free-text reply into structured suggestions. Malformed reply lines are
//! dropped, never errors; a reply with no parseable lines degrades to a
//! single info suggestion carrying the whole reply.

use async_trait::async_trait;
use chrono::Utc;
use conclave_core::{
    call_provider, Agent, AgentCapability, AgentContext, AgentMemory, AgentResponse,
    AgentSuggestion, SuggestionKind,
};
use conclave_llm::InferenceProvider;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Registry id of the code review agent
pub const CODE_REVIEW_AGENT_ID: &str = "codeReview";

/// Agent that reviews code for quality, bugs, and best practices
pub struct CodeReviewAgent {
    capabilities: Vec<AgentCapability>,
    memory: RwLock<AgentMemory>,
    provider: Arc<dyn InferenceProvider>,
}

impl CodeReviewAgent {
    /// Create a code review agent backed by `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        let capabilities = vec![
            AgentCapability::keywords(
                "code_review",
                "Reviews code for quality, bugs, and best practices",
                &["review", "check", "analyze", "inspect", "quality"],
            ),
            AgentCapability::keywords(
                "bug_detection",
                "Detects potential bugs and issues",
                &["bug", "error", "issue", "problem", "fix"],
            ),
        ];

        Self {
            capabilities,
            memory: RwLock::new(AgentMemory::new()),
            provider,
        }
    }

    fn build_review_prompt(code: &str, custom_request: Option<&str>) -> String {
        let focus = match custom_request {
            Some(request) => format!("Specific focus: {}\n", request),
            None => String::new(),
        };

        format!(
            "You are an expert code reviewer. Review the following code and provide specific, actionable feedback.\n\
             \n\
             Code to review:\n\
             ```\n\
             {}\n\
             ```\n\
             \n\
             {}\n\
             Provide feedback in the following format:\n\
             - For each issue, specify: TYPE (info/warning/error/suggestion), MESSAGE, and optionally LINE number\n\
             - Be specific and actionable\n\
             - Focus on: code quality, best practices, potential bugs, performance, security, and maintainability\n\
             \n\
             Format your response as:\n\
             TYPE|MESSAGE|LINE (optional)\n\
             TYPE|MESSAGE|LINE (optional)\n\
             ...",
            code, focus
        )
    }

    /// Workspace, current file and codebase context, one line each, in that
    /// fixed order
    fn build_context(context: &AgentContext) -> String {
        let mut out = format!("Workspace: {}", context.workspace_path);
        if let Some(file) = &context.current_file {
            out.push_str(&format!("\nCurrent File: {}", file));
        }
        if let Some(codebase) = &context.codebase_context {
            out.push_str(&format!("\nCodebase Context: {}", codebase));
        }
        out
    }

    /// Map a reply's TYPE part to a suggestion kind
    ///
    /// Substring checks run in priority order: error before warning before
    /// suggestion, anything else is info.
    fn parse_suggestion_kind(raw: &str) -> SuggestionKind {
        let lower = raw.to_lowercase();
        if lower.contains("error") || lower.contains("critical") {
            SuggestionKind::Error
        } else if lower.contains("warning") || lower.contains("caution") {
            SuggestionKind::Warning
        } else if lower.contains("suggestion") || lower.contains("improve") {
            SuggestionKind::Suggestion
        } else {
            SuggestionKind::Info
        }
    }

    /// Parse the raw model reply into suggestions
    fn parse_reply(reply: &str) -> Vec<AgentSuggestion> {
        let mut suggestions = Vec::new();

        for line in reply.lines().filter(|line| !line.trim().is_empty()) {
            let parts: Vec<&str> = line.split('|').map(str::trim).collect();
            if parts.len() < 2 {
                continue;
            }

            let kind = Self::parse_suggestion_kind(parts[0]);
            // The model reports 1-based lines; 0 or non-numeric means no location.
            let line_number = parts
                .get(2)
                .and_then(|part| part.parse::<u32>().ok())
                .filter(|n| *n > 0)
                .map(|n| n - 1);
            let priority = match kind {
                SuggestionKind::Error => 1,
                SuggestionKind::Warning => 2,
                _ => 3,
            };

            let mut suggestion =
                AgentSuggestion::new(kind, parts[1].to_string()).with_priority(priority);
            if let Some(line_number) = line_number {
                suggestion = suggestion.with_line(line_number);
            }
            suggestions.push(suggestion);
        }

        if suggestions.is_empty() && !reply.trim().is_empty() {
            suggestions.push(
                AgentSuggestion::new(SuggestionKind::Info, reply.to_string()).with_priority(3),
            );
        }

        suggestions
    }
}

#[async_trait]
impl Agent for CodeReviewAgent {
    fn id(&self) -> &str {
        CODE_REVIEW_AGENT_ID
    }

    fn name(&self) -> &str {
        "Code Review Agent"
    }

    fn description(&self) -> &str {
        "Reviews code for quality, best practices, and potential issues"
    }

    fn capabilities(&self) -> &[AgentCapability] {
        &self.capabilities
    }

    fn memory(&self) -> &RwLock<AgentMemory> {
        &self.memory
    }

    async fn process(&self, context: &AgentContext, request: Option<&str>) -> AgentResponse {
        let code = match context.selected_text.as_deref().filter(|s| !s.is_empty()) {
            Some(code) => code,
            None => {
                return AgentResponse::failed(
                    "No code provided for review. Please select code or open a file.",
                )
            }
        };

        let prompt = Self::build_review_prompt(code, request);
        let provider_context = Self::build_context(context);

        let reply = match call_provider(self.provider.as_ref(), &prompt, Some(&provider_context))
            .await
        {
            Ok(reply) => reply,
            Err(e) => return AgentResponse::failed(format!("Code review failed: {}", e)),
        };

        let suggestions = Self::parse_reply(&reply);
        debug!(suggestions = suggestions.len(), "code review reply parsed");

        let mut metadata = HashMap::new();
        metadata.insert(
            "reviewed_lines".to_string(),
            json!(code.split('\n').count()),
        );
        metadata.insert("timestamp".to_string(), json!(Utc::now().to_rfc3339()));

        AgentResponse::ok(
            format!(
                "Code review completed. Found {} suggestion(s).",
                suggestions.len()
            ),
            suggestions,
        )
        .with_metadata(metadata)
    }
}
