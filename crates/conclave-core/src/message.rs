//! Conversation message types
//!
//! Messages are append-only and keep their insertion order, which is also
//! chronological order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a conversation message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// End-user request
    User,
    /// Assistant reply
    Assistant,
    /// System instruction
    System,
    /// Response produced by an agent
    Agent,
}

impl MessageRole {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Agent => "agent",
        }
    }
}

/// One entry in a conversation history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMessage {
    /// Role of the sender
    pub role: MessageRole,
    /// Message content
    pub content: String,
    /// When the message was recorded
    pub timestamp: DateTime<Utc>,
    /// Id of the agent that produced the message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
}

impl AgentMessage {
    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            agent_id: None,
        }
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            agent_id: None,
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
            timestamp: Utc::now(),
            agent_id: None,
        }
    }

    /// Create an agent message attributed to `agent_id`
    #[must_use]
    pub fn agent(content: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Agent,
            content: content.into(),
            timestamp: Utc::now(),
            agent_id: Some(agent_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let user = AgentMessage::user("review this");
        assert_eq!(user.role, MessageRole::User);
        assert!(user.agent_id.is_none());

        let agent = AgentMessage::agent("done", "codeReview");
        assert_eq!(agent.role, MessageRole::Agent);
        assert_eq!(agent.agent_id, Some("codeReview".to_string()));
    }

    #[test]
    fn test_message_role_as_str() {
        assert_eq!(MessageRole::User.as_str(), "user");
        assert_eq!(MessageRole::Assistant.as_str(), "assistant");
        assert_eq!(MessageRole::System.as_str(), "system");
        assert_eq!(MessageRole::Agent.as_str(), "agent");
    }
}
