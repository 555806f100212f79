// Prompt templates and composition. Everything here is a pure function of
// its inputs so the same request always yields the same prompt.

use super::types::{ResponseLevel, Tone};

/// System turn for the rewrite call
pub const REWRITE_SYSTEM: &str =
    "You are a professional writer who rewrites text in different tones and formats.";

/// Prompt asking the model to label the input text
pub fn classification_prompt(text: &str) -> String {
    format!(
        "Classify the following text as one of: email, story, article, resume, message, or other. Only return the type.\nText: {text}"
    )
}

/// Prompt asking for a short title over the rewritten text
pub fn title_prompt(rewritten: &str) -> String {
    format!("Write a short, relevant title for the following text:\n{rewritten}")
}

/// Layer the instruction modifiers in their fixed order: base instruction,
/// story framing, detail clause.
///
/// Story framing triggers on the explicit flag OR on a "story"
/// classification - a caller who did not ask for story framing can still
/// get it when classification says the input is one.
pub fn compose_instructions(
    tone: Tone,
    as_story: bool,
    input_type: &str,
    response_level: Option<ResponseLevel>,
) -> String {
    let mut instructions = match tone {
        Tone::SocialMediaSummary => {
            "Summarize the following text for social media in a catchy, engaging way.".to_string()
        }
        _ => format!("Rewrite the following text in a {} tone.", tone.as_str()),
    };

    if as_story || input_type == "story" {
        instructions.push_str(" Present it as a story.");
    }

    match response_level {
        Some(ResponseLevel::Brief) => {
            instructions.push_str(" Keep the response brief and concise.");
        }
        Some(ResponseLevel::Elaborate) => {
            instructions.push_str(" Provide an elaborate and detailed rewrite.");
        }
        Some(ResponseLevel::Comprehensive) => {
            instructions.push_str(" Make the rewrite comprehensive, covering all important aspects in depth.");
        }
        None => {}
    }

    instructions
}

/// Full user-turn payload: instructions plus the literal text on the next line
pub fn compose_rewrite_prompt(
    tone: Tone,
    as_story: bool,
    input_type: &str,
    response_level: Option<ResponseLevel>,
    text: &str,
) -> String {
    let instructions = compose_instructions(tone, as_story, input_type, response_level);
    format!("{instructions}\nText: {text}")
}
