// Social platform templating - deterministic reframing plus share links.
// No generation calls on this path.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use std::collections::BTreeMap;

/// Character budget for the Twitter/X reframing
const TWITTER_CHAR_LIMIT: usize = 240;

/// Everything but unreserved characters and '/' gets escaped
const QUOTE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Platforms with a known reframing and share-link template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Facebook,
    LinkedIn,
    TwitterX,
    WhatsApp,
}

impl Platform {
    /// Parse a platform label; `None` means passthrough behavior
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Instagram" => Some(Platform::Instagram),
            "Facebook" => Some(Platform::Facebook),
            "LinkedIn" => Some(Platform::LinkedIn),
            "Twitter/X" => Some(Platform::TwitterX),
            "WhatsApp" => Some(Platform::WhatsApp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::LinkedIn => "LinkedIn",
            Platform::TwitterX => "Twitter/X",
            Platform::WhatsApp => "WhatsApp",
        }
    }
}

/// A platform-reframed text plus the links to post it
#[derive(Debug, Clone, Serialize)]
pub struct SocialPost {
    pub platform_text: String,
    pub posting_links: BTreeMap<String, String>,
}

/// Reframe `text` for `platform_label` and build the matching share links.
/// Unrecognized platforms pass the text through unchanged and link to "#".
pub fn render(platform_label: &str, text: &str) -> SocialPost {
    let platform = Platform::parse(platform_label);
    let platform_text = reframe(platform, text);
    let posting_links = posting_links(platform, platform_label, &platform_text);
    SocialPost {
        platform_text,
        posting_links,
    }
}

/// Apply the platform-specific reframing
pub fn reframe(platform: Option<Platform>, text: &str) -> String {
    match platform {
        Some(Platform::Instagram) => {
            format!("{text}\n\n#Inspiration #Motivation #Life #Story 👍😎")
        }
        Some(Platform::Facebook) => format!("{text}\n\nShare your thoughts below! 📝"),
        Some(Platform::LinkedIn) => {
            format!("{text}\n\nLet's connect and discuss! #ProfessionalGrowth")
        }
        Some(Platform::TwitterX) => {
            // Character-based truncation, safe on multibyte input
            let head: String = text.chars().take(TWITTER_CHAR_LIMIT).collect();
            format!("{head}... #AI #Rewrite #Productivity")
        }
        Some(Platform::WhatsApp) => format!("{text}\n\nSent via WriteWise 💾"),
        None => text.to_string(),
    }
}

/// Map a platform (or the literal label for unknown ones) to a posting URL
/// with the reframed text percent-encoded into the share template.
pub fn posting_links(
    platform: Option<Platform>,
    label: &str,
    platform_text: &str,
) -> BTreeMap<String, String> {
    let encoded = encode(platform_text);
    let mut links = BTreeMap::new();
    match platform {
        Some(Platform::Instagram) => {
            // Instagram has no web share intent; link to the site itself
            links.insert(
                "Instagram".to_string(),
                "https://www.instagram.com/".to_string(),
            );
        }
        Some(Platform::Facebook) => {
            links.insert(
                "Facebook".to_string(),
                format!("https://www.facebook.com/sharer/sharer.php?u=&quote={encoded}"),
            );
        }
        Some(Platform::LinkedIn) => {
            links.insert(
                "LinkedIn".to_string(),
                format!("https://www.linkedin.com/sharing/share-offsite/?url=&summary={encoded}"),
            );
        }
        Some(Platform::TwitterX) => {
            links.insert(
                "Twitter/X".to_string(),
                format!("https://twitter.com/intent/tweet?text={encoded}"),
            );
        }
        Some(Platform::WhatsApp) => {
            links.insert(
                "WhatsApp".to_string(),
                format!("https://api.whatsapp.com/send?text={encoded}"),
            );
        }
        None => {
            links.insert(label.to_string(), "#".to_string());
        }
    }
    links
}

fn encode(text: &str) -> String {
    utf8_percent_encode(text, QUOTE_SET).to_string()
}
