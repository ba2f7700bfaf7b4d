//! Conclave LLM - Inference Provider Abstraction
//!
//! This crate provides the text-generation backends Conclave agents call
//! into:
//! - Provider: the `InferenceProvider` trait and configuration-driven factory
//! - Ollama: local daemon over loopback HTTP (the default)
//! - HuggingFace / OpenAI: hosted providers, currently availability-only stubs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod huggingface;
pub mod ollama;
pub mod openai;
pub mod provider;
pub mod settings;

pub use error::{Error, Result};
pub use huggingface::HuggingFaceProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use provider::{build_provider, InferenceProvider};
pub use settings::{AiSettings, HostedSettings, OllamaSettings};
