//! Agent response and suggestion types
//!
//! A response is produced once per agent invocation and never mutated after
//! construction. Suggestions keep parse order; consumers that want a
//! severity sort do it themselves.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Severity class of a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Informational note
    Info,
    /// Something that should probably change
    Warning,
    /// A defect
    Error,
    /// An optional improvement
    Suggestion,
}

impl SuggestionKind {
    /// Returns the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Suggestion => "suggestion",
        }
    }
}

/// A position inside a document (0-based line and character)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// 0-based line
    pub line: u32,
    /// 0-based character offset
    pub character: u32,
}

/// A start/end span inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRange {
    /// Start of the span
    pub start: Position,
    /// End of the span (exclusive)
    pub end: Position,
}

/// One structured finding produced by an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSuggestion {
    /// Severity class
    pub kind: SuggestionKind,
    /// Human-readable finding
    pub message: String,
    /// 0-based line the finding points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Optional span the finding covers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SuggestionRange>,
    /// Replacement or example code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Lower values are more severe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

impl AgentSuggestion {
    /// Create a suggestion with only a kind and message
    #[must_use]
    pub fn new(kind: SuggestionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
            range: None,
            code: None,
            priority: None,
        }
    }

    /// Set the 0-based line
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the priority (lower = more severe)
    #[must_use]
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// The outcome of one agent invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Whether the agent completed its work
    pub success: bool,
    /// Human-readable summary or failure description
    pub message: String,
    /// Structured findings, in the order they were derived
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<AgentSuggestion>,
    /// Free-form metadata about the invocation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl AgentResponse {
    /// Create a successful response
    #[must_use]
    pub fn ok(message: impl Into<String>, suggestions: Vec<AgentSuggestion>) -> Self {
        Self {
            success: true,
            message: message.into(),
            suggestions,
            metadata: None,
        }
    }

    /// Create a failed response with no suggestions
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            suggestions: Vec::new(),
            metadata: None,
        }
    }

    /// Attach metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_constructors() {
        let ok = AgentResponse::ok(
            "done",
            vec![AgentSuggestion::new(SuggestionKind::Info, "fine")],
        );
        assert!(ok.success);
        assert_eq!(ok.suggestions.len(), 1);
        assert!(ok.metadata.is_none());

        let failed = AgentResponse::failed("no input");
        assert!(!failed.success);
        assert!(failed.suggestions.is_empty());
    }

    #[test]
    fn test_suggestion_builder() {
        let suggestion = AgentSuggestion::new(SuggestionKind::Error, "null deref")
            .with_line(11)
            .with_priority(1);

        assert_eq!(suggestion.kind, SuggestionKind::Error);
        assert_eq!(suggestion.line, Some(11));
        assert_eq!(suggestion.priority, Some(1));
        assert!(suggestion.range.is_none());
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(SuggestionKind::Info.as_str(), "info");
        assert_eq!(SuggestionKind::Warning.as_str(), "warning");
        assert_eq!(SuggestionKind::Error.as_str(), "error");
        assert_eq!(SuggestionKind::Suggestion.as_str(), "suggestion");
    }
}
