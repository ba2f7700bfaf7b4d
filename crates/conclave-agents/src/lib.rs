//! Conclave Agents - Built-in Agents and the Agent Manager
//!
//! This crate provides:
//! - Manager: registry, routing, multi-agent fan-out, consultation, and the
//!   bounded conversation history
//! - CodeReview: the code review agent (prompt construction + free-text
//!   reply parsing)
//! - Settings: the configuration surface the manager is built from

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod code_review;
pub mod manager;
pub mod settings;

pub use code_review::{CodeReviewAgent, CODE_REVIEW_AGENT_ID};
pub use manager::{AgentManager, HISTORY_CAPACITY};
pub use settings::{AgentSettings, Settings, DEFAULT_ENABLED_AGENTS};
