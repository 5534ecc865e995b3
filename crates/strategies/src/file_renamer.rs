// crates/strategies/src/file_renamer.rs

use crate::sanitize::sanitize_filename;
use crate::traits::{Configurable, Strategy};
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Title directive; the title runs to the end of its line.
static THREAD_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)CLAUDE_THREAD_TITLE:[ \t]*(.+?)[ \t]*$").unwrap());

/// A whole title line, including its terminator.
static THREAD_TITLE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*CLAUDE_THREAD_TITLE:.*(?:\n|$)").unwrap());

static EXCESS_NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Template placeholder that never counts as a real title.
pub const TITLE_PLACEHOLDER: &str = "{title}";

const RENAMED_EXTENSION: &str = "md";

/// Renames a file after the `CLAUDE_THREAD_TITLE:` it carries and strips the
/// title lines from its content.
pub struct FileRenamer {
    allow_overwrite: bool,
}

impl FileRenamer {
    pub fn new() -> Self {
        Self { allow_overwrite: true }
    }

    pub fn with_allow_overwrite(allow_overwrite: bool) -> Self {
        Self { allow_overwrite }
    }

    pub fn allow_overwrite(&self) -> bool {
        self.allow_overwrite
    }

    /// First title in `content` that is not the `{title}` placeholder.
    pub fn find_title(content: &str) -> Option<String> {
        THREAD_TITLE_RE
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .find(|title| {
                if *title == TITLE_PLACEHOLDER {
                    log::debug!("Skipping placeholder title '{}'", TITLE_PLACEHOLDER);
                    false
                } else {
                    !title.is_empty()
                }
            })
            .map(str::to_string)
    }

    /// Where the file should live according to its title, or `None` when it
    /// carries no usable title.
    fn target_path(&self, path: &Path) -> Option<PathBuf> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::error!("Error reading {}: {}", path.display(), err);
                return None;
            }
        };

        let Some(title) = Self::find_title(&content) else {
            log::debug!("No usable CLAUDE_THREAD_TITLE found in {}", path.display());
            return None;
        };

        let clean_title = sanitize_filename(&title);
        if clean_title.is_empty() {
            log::warn!("Title '{}' resulted in empty filename after sanitization", title);
            return None;
        }

        let file_name = format!("{}.{}", clean_title, RENAMED_EXTENSION);
        Some(match path.parent() {
            Some(parent) => parent.join(file_name),
            None => PathBuf::from(file_name),
        })
    }
}

impl Default for FileRenamer {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for FileRenamer {
    fn name(&self) -> String {
        "file_renamer".to_string()
    }

    fn is_renaming_strategy(&self) -> bool {
        true
    }

    fn mutates_content(&self) -> bool {
        true
    }

    /// Removes title lines. Blank runs left behind are collapsed only when a
    /// line was actually removed, so already-clean content is left alone.
    fn process(&self, content: &str, _path: &Path) -> Result<String> {
        if !THREAD_TITLE_LINE_RE.is_match(content) {
            return Ok(content.to_string());
        }
        let stripped = THREAD_TITLE_LINE_RE.replace_all(content, "");
        Ok(EXCESS_NEWLINES_RE.replace_all(&stripped, "\n\n").into_owned())
    }

    fn planned_rename(&self, path: &Path) -> Option<PathBuf> {
        let target = self.target_path(path)?;
        if target == path {
            return None;
        }
        if target.exists() && !self.allow_overwrite {
            return None;
        }
        Some(target)
    }

    fn rename_file(&self, path: &Path) -> Option<PathBuf> {
        let target = self.target_path(path)?;

        if target == path {
            log::debug!("File {} already has the correct name", path.display());
            return Some(path.to_path_buf());
        }

        if target.exists() {
            if !self.allow_overwrite {
                log::warn!(
                    "Cannot rename {} to {}: target file already exists",
                    path.display(),
                    target.display()
                );
                return None;
            }
            if let Err(err) = fs::remove_file(&target) {
                log::error!("Failed to remove existing {}: {}", target.display(), err);
                return None;
            }
            log::info!("Removed existing {} before rename", target.display());
        }

        match fs::rename(path, &target) {
            Ok(()) => {
                log::info!("Renamed {} to {}", path.display(), target.display());
                Some(target)
            }
            Err(err) => {
                log::error!("Failed to rename {} to {}: {}", path.display(), target.display(), err);
                None
            }
        }
    }

    fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
        Some(self)
    }
}

impl Configurable for FileRenamer {
    fn set_allow_overwrite(&mut self, allow: bool) {
        self.allow_overwrite = allow;
    }
}
