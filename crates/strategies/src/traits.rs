// crates/strategies/src/traits.rs

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A named transformation applied to a file during processing.
///
/// Content strategies rewrite text through [`Strategy::process`]. Renaming
/// strategies change where the file lives through [`Strategy::rename_file`];
/// they may also rewrite content, in which case they report
/// [`Strategy::mutates_content`] as true.
pub trait Strategy {
    /// Stable, unique name. Configured variants encode their configuration.
    fn name(&self) -> String;

    fn is_renaming_strategy(&self) -> bool {
        false
    }

    /// Whether [`Strategy::process`] can change content.
    fn mutates_content(&self) -> bool {
        !self.is_renaming_strategy()
    }

    /// Rewrites `content` for the file at `path`.
    fn process(&self, content: &str, _path: &Path) -> Result<String> {
        Ok(content.to_string())
    }

    /// The path `rename_file` would move the file to, without touching the
    /// filesystem. `None` when no rename would happen.
    fn planned_rename(&self, _path: &Path) -> Option<PathBuf> {
        None
    }

    /// Renames the file and returns its new path. Returning the input path
    /// means no rename was needed; `None` means no rename happened.
    fn rename_file(&self, _path: &Path) -> Option<PathBuf> {
        None
    }

    /// Exposes pre-run configuration for strategies that accept it.
    fn as_configurable(&mut self) -> Option<&mut dyn Configurable> {
        None
    }
}

/// Configuration hook applied once, before any file is processed.
pub trait Configurable {
    fn set_allow_overwrite(&mut self, allow: bool);
}
