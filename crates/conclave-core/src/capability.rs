//! Agent capabilities
//!
//! A capability is a named, pure predicate over `(request, context)` that an
//! agent attaches at construction time. An agent claims a request when any
//! of its capabilities matches.

use crate::context::AgentContext;
use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a capability applies to a request
pub type CapabilityPredicate = Arc<dyn Fn(&str, &AgentContext) -> bool + Send + Sync>;

/// A named predicate declaring what kinds of requests an agent handles
#[derive(Clone)]
pub struct AgentCapability {
    /// Capability name, e.g. `code_review`
    pub name: String,
    /// What the capability covers
    pub description: String,
    predicate: CapabilityPredicate,
}

impl AgentCapability {
    /// Create a capability from an arbitrary predicate
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        predicate: impl Fn(&str, &AgentContext) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Create a capability matching case-insensitive keyword substrings
    pub fn keywords(
        name: impl Into<String>,
        description: impl Into<String>,
        keywords: &[&str],
    ) -> Self {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        Self::new(name, description, move |request, _context| {
            let request = request.to_lowercase();
            keywords.iter().any(|keyword| request.contains(keyword))
        })
    }

    /// Evaluate the predicate
    #[must_use]
    pub fn matches(&self, request: &str, context: &AgentContext) -> bool {
        (self.predicate)(request, context)
    }
}

impl fmt::Debug for AgentCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentCapability")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AgentContext {
        AgentContext::new("/work")
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let capability = AgentCapability::keywords("code_review", "reviews code", &["review"]);

        assert!(capability.matches("Please REVIEW this function", &context()));
        assert!(capability.matches("code review needed", &context()));
        assert!(!capability.matches("generate tests", &context()));
    }

    #[test]
    fn test_custom_predicate_sees_context() {
        let capability = AgentCapability::new("has_selection", "selection present", |_, ctx| {
            ctx.selected_text.is_some()
        });

        assert!(!capability.matches("anything", &context()));
        assert!(capability.matches("anything", &context().with_selected_text("let x = 1;")));
    }
}
