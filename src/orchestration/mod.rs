// Rewrite orchestration - classify input, compose the instruction prompt,
// generate the rewrite and a title.

pub mod orchestrator;
pub mod prompt;
pub mod types;

pub use orchestrator::{OrchestratorConfig, RewriteError, RewriteOrchestrator};
pub use types::*;
