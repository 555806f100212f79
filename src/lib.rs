//! WriteWise - tone-aware text rewriting over an opaque generation backend
//!
//! The core is [`orchestration::RewriteOrchestrator`], which turns a rewrite
//! request into a result through three sequential generation calls
//! (classify, rewrite, title). The [`social`] module is a deterministic
//! platform-templating path with no remote dependency, and [`api`] exposes
//! framework-agnostic handler semantics for whatever transport hosts this.

pub mod api;
pub mod config;
pub mod generation;
pub mod orchestration;
pub mod social;

pub use config::Config;
pub use generation::{ChatMessage, GenerationClient, GenerationError, GenerationRequest};
pub use orchestration::{
    OrchestratorConfig, RewriteError, RewriteOrchestrator, RewriteRequest, RewriteResult,
};
pub use social::Platform;
