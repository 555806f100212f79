// Rewrite orchestrator - drives the classify -> rewrite -> title sequence
// against the generation client.

use super::prompt;
use super::types::{ResponseLevel, RewriteRequest, RewriteResult, Tone};
use crate::generation::{ChatMessage, GenerationClient, GenerationRequest};
use std::sync::Arc;

/// Substituted when classification fails; classification never blocks a rewrite
pub const UNKNOWN_INPUT_TYPE: &str = "unknown";

/// Substituted when title generation fails
pub const DEFAULT_TITLE: &str = "Untitled";

/// Per-step generation settings. Classification is deterministic and short,
/// the rewrite is creative and long, the title sits in between.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub model: String,
    pub classify_max_tokens: u32,
    pub classify_temperature: f32,
    pub rewrite_max_tokens: u32,
    pub rewrite_temperature: f32,
    pub title_max_tokens: u32,
    pub title_temperature: f32,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            classify_max_tokens: 10,
            classify_temperature: 0.0,
            rewrite_max_tokens: 1024,
            rewrite_temperature: 0.7,
            title_max_tokens: 16,
            title_temperature: 0.5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("Text cannot be empty")]
    InvalidInput,

    #[error("Invalid tone. Allowed: {allowed}")]
    InvalidTone { tone: String, allowed: String },

    #[error("Rewrite failed: {0}")]
    GenerationFailed(String),
}

/// Turns a [`RewriteRequest`] into a [`RewriteResult`] through up to three
/// sequential generation calls. Classification and title generation are
/// best-effort and fall back to defaults; the rewrite itself is the
/// essential deliverable and its failure aborts the request.
pub struct RewriteOrchestrator {
    config: OrchestratorConfig,
    client: Arc<dyn GenerationClient>,
}

impl RewriteOrchestrator {
    /// Create an orchestrator with default per-step settings
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self::with_config(client, OrchestratorConfig::default())
    }

    /// Create an orchestrator with custom per-step settings
    pub fn with_config(client: Arc<dyn GenerationClient>, config: OrchestratorConfig) -> Self {
        Self { config, client }
    }

    /// Process one rewrite request end to end
    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResult, RewriteError> {
        // Entry contract: both checks run before any remote call
        if request.text.is_empty() {
            return Err(RewriteError::InvalidInput);
        }
        let tone = Tone::parse(&request.tone).ok_or_else(|| RewriteError::InvalidTone {
            tone: request.tone.clone(),
            allowed: Tone::allowed_labels(),
        })?;

        let input_type = self.classify(&request.text).await;

        let response_level = ResponseLevel::parse(&request.response_level);
        let rewrite_prompt = prompt::compose_rewrite_prompt(
            tone,
            request.as_story,
            &input_type,
            response_level,
            &request.text,
        );
        tracing::debug!(prompt = %rewrite_prompt, "composed rewrite prompt");

        let rewritten = self
            .client
            .generate(GenerationRequest {
                model: self.config.model.clone(),
                messages: vec![
                    ChatMessage::system(prompt::REWRITE_SYSTEM),
                    ChatMessage::user(rewrite_prompt),
                ],
                max_tokens: self.config.rewrite_max_tokens,
                temperature: self.config.rewrite_temperature,
            })
            .await
            .map_err(|e| RewriteError::GenerationFailed(e.to_string()))?
            .trim()
            .to_string();

        let title = self.title(&rewritten).await;

        Ok(RewriteResult {
            rewritten_text: rewritten,
            title,
            input_type,
        })
    }

    /// Best-effort input classification; any failure degrades to "unknown"
    async fn classify(&self, text: &str) -> String {
        let request = GenerationRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt::classification_prompt(text))],
            max_tokens: self.config.classify_max_tokens,
            temperature: self.config.classify_temperature,
        };

        match self.client.generate(request).await {
            Ok(label) => label.trim().to_lowercase(),
            Err(e) => {
                tracing::warn!("classification failed, defaulting input type: {e}");
                UNKNOWN_INPUT_TYPE.to_string()
            }
        }
    }

    /// Best-effort title over the rewritten text; any failure degrades to "Untitled"
    async fn title(&self, rewritten: &str) -> String {
        let request = GenerationRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt::title_prompt(rewritten))],
            max_tokens: self.config.title_max_tokens,
            temperature: self.config.title_temperature,
        };

        match self.client.generate(request).await {
            Ok(title) => title.trim().to_string(),
            Err(e) => {
                tracing::warn!("title generation failed, using default: {e}");
                DEFAULT_TITLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted client: pops one pre-queued outcome per call and records
    /// every request it sees.
    struct StubClient {
        script: Mutex<VecDeque<Result<String, GenerationError>>>,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl StubClient {
        fn new(script: Vec<Result<String, GenerationError>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<GenerationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationClient for StubClient {
        async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
            self.requests.lock().unwrap().push(request);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerationError::EmptyResponse))
        }
    }

    fn request(text: &str, tone: &str) -> RewriteRequest {
        RewriteRequest {
            text: text.to_string(),
            tone: tone.to_string(),
            as_story: false,
            response_level: "elaborate".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_any_call() {
        let client = StubClient::new(vec![]);
        let orchestrator = RewriteOrchestrator::new(client.clone());

        let err = orchestrator
            .rewrite(&request("", "Professional"))
            .await
            .unwrap_err();

        assert!(matches!(err, RewriteError::InvalidInput));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_tone_is_rejected_before_any_call() {
        let client = StubClient::new(vec![]);
        let orchestrator = RewriteOrchestrator::new(client.clone());

        let err = orchestrator
            .rewrite(&request("some text", "Sarcastic"))
            .await
            .unwrap_err();

        match err {
            RewriteError::InvalidTone { tone, allowed } => {
                assert_eq!(tone, "Sarcastic");
                assert!(allowed.contains("Professional"));
                assert!(allowed.contains("Social media summary"));
            }
            other => panic!("expected InvalidTone, got {other:?}"),
        }
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn happy_path_runs_three_calls_in_order() {
        let client = StubClient::new(vec![
            Ok("Email\n".to_string()),
            Ok("  the rewritten text  ".to_string()),
            Ok(" A Fitting Title ".to_string()),
        ]);
        let orchestrator = RewriteOrchestrator::new(client.clone());

        let result = orchestrator
            .rewrite(&request("please rewrite me", "Professional"))
            .await
            .unwrap();

        assert_eq!(result.input_type, "email");
        assert_eq!(result.rewritten_text, "the rewritten text");
        assert_eq!(result.title, "A Fitting Title");

        let calls = client.calls();
        assert_eq!(calls.len(), 3);
        // Classification is deterministic and short
        assert_eq!(calls[0].temperature, 0.0);
        assert_eq!(calls[0].max_tokens, 10);
        assert!(calls[0].messages[0].content.starts_with("Classify the following text"));
        // Rewrite carries the system turn and the larger bound
        assert_eq!(calls[1].temperature, 0.7);
        assert_eq!(calls[1].max_tokens, 1024);
        assert_eq!(calls[1].messages[0].content, prompt::REWRITE_SYSTEM);
        // Title is derived from the rewritten text, not the input
        assert!(calls[2].messages[0].content.contains("the rewritten text"));
        assert_eq!(calls[2].max_tokens, 16);
    }

    #[tokio::test]
    async fn classification_failure_degrades_to_unknown() {
        let client = StubClient::new(vec![
            Err(GenerationError::Http("connection refused".to_string())),
            Ok("rewritten".to_string()),
            Ok("Title".to_string()),
        ]);
        let orchestrator = RewriteOrchestrator::new(client);

        let result = orchestrator
            .rewrite(&request("some text", "Friendly"))
            .await
            .unwrap();

        assert_eq!(result.input_type, "unknown");
        assert_eq!(result.rewritten_text, "rewritten");
    }

    #[tokio::test]
    async fn title_failure_degrades_to_untitled() {
        let client = StubClient::new(vec![
            Ok("article".to_string()),
            Ok("rewritten".to_string()),
            Err(GenerationError::Api("500 - boom".to_string())),
        ]);
        let orchestrator = RewriteOrchestrator::new(client);

        let result = orchestrator
            .rewrite(&request("some text", "Casual"))
            .await
            .unwrap();

        assert_eq!(result.title, "Untitled");
        assert_eq!(result.input_type, "article");
    }

    #[tokio::test]
    async fn rewrite_failure_aborts_without_title_call() {
        let client = StubClient::new(vec![
            Ok("email".to_string()),
            Err(GenerationError::Api("503 - overloaded".to_string())),
        ]);
        let orchestrator = RewriteOrchestrator::new(client.clone());

        let err = orchestrator
            .rewrite(&request("some text", "Corporate"))
            .await
            .unwrap_err();

        match err {
            RewriteError::GenerationFailed(message) => assert!(message.contains("503")),
            other => panic!("expected GenerationFailed, got {other:?}"),
        }
        // No title call after the rewrite fails
        assert_eq!(client.calls().len(), 2);
    }

    #[tokio::test]
    async fn story_classification_forces_story_framing() {
        // Pins the intentional coupling: the caller never set as_story,
        // but a "story" classification still adds the framing clause.
        let client = StubClient::new(vec![
            Ok("story".to_string()),
            Ok("rewritten".to_string()),
            Ok("Title".to_string()),
        ]);
        let orchestrator = RewriteOrchestrator::new(client.clone());

        orchestrator
            .rewrite(&request("once upon a time", "Professional"))
            .await
            .unwrap();

        let calls = client.calls();
        assert!(calls[1].messages[1].content.contains("Present it as a story."));
    }

    #[tokio::test]
    async fn custom_model_is_used_for_every_step() {
        let client = StubClient::new(vec![
            Ok("other".to_string()),
            Ok("rewritten".to_string()),
            Ok("Title".to_string()),
        ]);
        let config = OrchestratorConfig {
            model: "gpt-4o-mini".to_string(),
            ..OrchestratorConfig::default()
        };
        let orchestrator = RewriteOrchestrator::with_config(client.clone(), config);

        orchestrator
            .rewrite(&request("some text", "Gen Z tone"))
            .await
            .unwrap();

        for call in client.calls() {
            assert_eq!(call.model, "gpt-4o-mini");
        }
    }
}
