//! Framework-agnostic handler semantics for the inbound API
//!
//! The hosting transport (routing, serialization) is an external
//! collaborator; this module fixes the wire payloads, the handler
//! behavior, and the status-code mapping it must follow.

use crate::orchestration::{RewriteError, RewriteOrchestrator, RewriteRequest, RewriteResult};
use crate::social::{self, SocialPost};
use serde::{Deserialize, Serialize};

/// A caller-visible failure with the HTTP status the transport should use
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: 400,
            message: message.into(),
        }
    }
}

impl From<RewriteError> for ApiError {
    fn from(err: RewriteError) -> Self {
        let status = match err {
            RewriteError::InvalidInput | RewriteError::InvalidTone { .. } => 400,
            RewriteError::GenerationFailed(_) => 500,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// `POST /social-rewrite` body
#[derive(Debug, Clone, Deserialize)]
pub struct SocialRewritePayload {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub platform: String,
}

/// `GET /` body
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeBody {
    pub message: String,
}

/// `POST /rewrite`: the full orchestration path. Either a complete result
/// or an error - never a partial response.
pub async fn rewrite(
    orchestrator: &RewriteOrchestrator,
    payload: &RewriteRequest,
) -> Result<RewriteResult, ApiError> {
    Ok(orchestrator.rewrite(payload).await?)
}

/// `POST /social-rewrite`: deterministic templating, no remote calls
pub fn social_rewrite(payload: &SocialRewritePayload) -> Result<SocialPost, ApiError> {
    if payload.text.is_empty() || payload.platform.is_empty() {
        return Err(ApiError::bad_request("Both text and platform are required."));
    }
    Ok(social::render(&payload.platform, &payload.text))
}

/// `GET /`: static welcome payload
pub fn welcome() -> WelcomeBody {
    WelcomeBody {
        message: "Welcome to WriteWise API. Use the /rewrite endpoint to rewrite text."
            .to_string(),
    }
}
