//! Conclave Core - Agent Contract and Data Model
//!
//! This crate provides the building blocks shared by every Conclave agent:
//! - Agent: the async trait all agents implement
//! - Capability: named predicates declaring what an agent handles
//! - Memory: bounded per-agent key/value storage for learning data
//! - Context/Response: the data passed into and out of every agent call
//! - Workspace: the collaborator interface for file and path access

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod agent;
pub mod capability;
pub mod context;
pub mod error;
pub mod memory;
pub mod message;
pub mod response;
pub mod workspace;

pub use agent::{call_provider, Agent};
pub use capability::{AgentCapability, CapabilityPredicate};
pub use context::AgentContext;
pub use error::{Error, Result};
pub use memory::{AgentMemory, DEFAULT_MEMORY_CAPACITY};
pub use message::{AgentMessage, MessageRole};
pub use response::{AgentResponse, AgentSuggestion, Position, SuggestionKind, SuggestionRange};
pub use workspace::{FsWorkspace, Workspace};
