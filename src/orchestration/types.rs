// Core types for the rewrite pipeline

use serde::{Deserialize, Serialize};

/// Style directive selecting the rewrite's voice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Friendly,
    Casual,
    Corporate,
    KidsTone,
    GenZTone,
    /// Replaces the base rewrite instruction with a summary instruction
    SocialMediaSummary,
}

impl Tone {
    pub const ALL: [Tone; 7] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Casual,
        Tone::Corporate,
        Tone::KidsTone,
        Tone::GenZTone,
        Tone::SocialMediaSummary,
    ];

    /// Wire label as accepted from callers
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Casual => "Casual",
            Tone::Corporate => "Corporate",
            Tone::KidsTone => "Kids tone",
            Tone::GenZTone => "Gen Z tone",
            Tone::SocialMediaSummary => "Social media summary",
        }
    }

    /// Parse a wire label; `None` for anything outside the allowed set
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tone| tone.as_str() == label)
    }

    /// Comma-separated allowed labels, for error messages
    pub fn allowed_labels() -> String {
        Self::ALL
            .iter()
            .map(Tone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Verbosity directive controlling rewrite length and depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseLevel {
    Brief,
    Elaborate,
    Comprehensive,
}

impl ResponseLevel {
    /// Parse is lenient: an unrecognized level yields `None` and the
    /// prompt simply gets no detail clause.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "brief" => Some(ResponseLevel::Brief),
            "elaborate" => Some(ResponseLevel::Elaborate),
            "comprehensive" => Some(ResponseLevel::Comprehensive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResponseLevel::Brief => "brief",
            ResponseLevel::Elaborate => "elaborate",
            ResponseLevel::Comprehensive => "comprehensive",
        }
    }
}

/// One incoming rewrite request; immutable for the call's duration
#[derive(Debug, Clone, Deserialize)]
pub struct RewriteRequest {
    pub text: String,
    pub tone: String,
    #[serde(default)]
    pub as_story: bool,
    #[serde(default = "default_response_level")]
    pub response_level: String,
}

fn default_response_level() -> String {
    "elaborate".to_string()
}

/// Completed rewrite, returned to the caller and not stored
#[derive(Debug, Clone, Serialize)]
pub struct RewriteResult {
    pub rewritten_text: String,
    pub title: String,
    pub input_type: String,
}
