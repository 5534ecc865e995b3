// crates/strategies/src/claude_url.rs

use crate::traits::Strategy;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static CLAUDE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Claude discussion:\s*(https://claude\.ai/chat/[a-f0-9-]+)").unwrap()
});

/// Blank lines placed on each side of the prepended URL.
const URL_SPACING: &str = "\n\n\n\n\n";

/// Finds the `Claude discussion: <url>` reference in the file on disk and
/// prepends the URL to the processed content.
///
/// The reference normally sits outside the marker block, so the search runs
/// against the full file rather than the content handed in.
#[derive(Default)]
pub struct ClaudeUrl;

impl ClaudeUrl {
    pub fn new() -> Self {
        Self
    }

    /// Returns the first chat URL referenced in `text`.
    pub fn find_url(text: &str) -> Option<&str> {
        CLAUDE_URL_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }
}

impl Strategy for ClaudeUrl {
    fn name(&self) -> String {
        "claude_url".to_string()
    }

    fn process(&self, content: &str, path: &Path) -> Result<String> {
        let full_content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::error!("Error processing {} with claude_url strategy: {}", path.display(), err);
                return Ok(content.to_string());
            }
        };

        let Some(url) = Self::find_url(&full_content) else {
            log::debug!("No Claude URL found in {}", path.display());
            return Ok(content.to_string());
        };
        log::info!("Found Claude URL in {}: {}", path.display(), url);

        if content.trim().is_empty() {
            return Ok(url.to_string());
        }
        Ok(format!("{URL_SPACING}{url}{URL_SPACING}{content}"))
    }
}
