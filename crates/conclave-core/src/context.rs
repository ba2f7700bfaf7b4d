//! Per-call agent context
//!
//! A context is immutable for the duration of one agent call. Callers that
//! need a variant (the manager's consultation flow) clone it and adjust the
//! copy; the original is never touched.

use crate::message::AgentMessage;
use serde::{Deserialize, Serialize};

/// The bundle of workspace/file/selection data supplied to an agent per call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentContext {
    /// Absolute path of the workspace root
    pub workspace_path: String,
    /// Path of the file currently in focus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_file: Option<String>,
    /// Text selected by the user (the code under review)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    /// Free-form codebase context supplied by the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codebase_context: Option<String>,
    /// Prior conversation, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_conversations: Vec<AgentMessage>,
}

impl AgentContext {
    /// Create a context rooted at `workspace_path`
    #[must_use]
    pub fn new(workspace_path: impl Into<String>) -> Self {
        Self {
            workspace_path: workspace_path.into(),
            current_file: None,
            selected_text: None,
            codebase_context: None,
            previous_conversations: Vec::new(),
        }
    }

    /// Set the file currently in focus
    #[must_use]
    pub fn with_current_file(mut self, file: impl Into<String>) -> Self {
        self.current_file = Some(file.into());
        self
    }

    /// Set the selected text
    #[must_use]
    pub fn with_selected_text(mut self, text: impl Into<String>) -> Self {
        self.selected_text = Some(text.into());
        self
    }

    /// Set the codebase context
    #[must_use]
    pub fn with_codebase_context(mut self, context: impl Into<String>) -> Self {
        self.codebase_context = Some(context.into());
        self
    }

    /// Attach prior conversation messages
    #[must_use]
    pub fn with_previous_conversations(mut self, messages: Vec<AgentMessage>) -> Self {
        self.previous_conversations = messages;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let context = AgentContext::new("/work/project")
            .with_current_file("src/main.rs")
            .with_selected_text("fn main() {}")
            .with_codebase_context("binary crate");

        assert_eq!(context.workspace_path, "/work/project");
        assert_eq!(context.current_file.as_deref(), Some("src/main.rs"));
        assert_eq!(context.selected_text.as_deref(), Some("fn main() {}"));
        assert_eq!(context.codebase_context.as_deref(), Some("binary crate"));
        assert!(context.previous_conversations.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = AgentContext::new("/work").with_codebase_context("original");
        let mut copy = original.clone();
        copy.codebase_context = Some("modified".to_string());

        assert_eq!(original.codebase_context.as_deref(), Some("original"));
    }
}
