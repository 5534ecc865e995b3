// crates/process_files/src/processor.rs

use anyhow::{Context, Result};
use extract_marked_content::{extract_marked_content, has_markers};
use std::fs;
use std::path::{Path, PathBuf};
use strategies::Strategy;

/// Trait that abstracts file processing.
pub trait FileProcessor {
    /// Reports whether processing would change the file. Never touches the
    /// filesystem and never fails; errors count as "no changes".
    fn needs_processing(&self, file_path: &Path) -> bool;

    /// Processes the file, returning true if it was renamed or rewritten.
    fn process_file(&self, file_path: &Path) -> Result<bool>;
}

/// Runs marker extraction and an ordered list of strategies over each file.
pub struct StrategyPipeline {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyPipeline {
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    /// Pipeline that only extracts marked content.
    pub fn markers_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn strategy_names(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Applies the overwrite policy to every strategy that accepts it. Call
    /// once, before the first file.
    pub fn configure_overwrite(&mut self, allow: bool) {
        for strategy in &mut self.strategies {
            let name = strategy.name();
            match strategy.as_configurable() {
                Some(config) => {
                    config.set_allow_overwrite(allow);
                    log::debug!("Set allow_overwrite={} on {}", allow, name);
                }
                None => log::debug!("Strategy {} takes no configuration", name),
            }
        }
    }

    fn check_needs_processing(&self, file_path: &Path) -> Result<bool> {
        let content = read_text(file_path)?;

        if has_markers(&content) {
            return Ok(true);
        }

        for strategy in &self.strategies {
            if strategy.is_renaming_strategy() {
                if let Some(new_path) = strategy.planned_rename(file_path) {
                    if new_path != file_path {
                        log::debug!("{} would rename {}", strategy.name(), file_path.display());
                        return Ok(true);
                    }
                }
            }
            if strategy.mutates_content() && strategy.process(&content, file_path)? != content {
                log::debug!("{} would modify {}", strategy.name(), file_path.display());
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl FileProcessor for StrategyPipeline {
    fn needs_processing(&self, file_path: &Path) -> bool {
        match self.check_needs_processing(file_path) {
            Ok(needed) => needed,
            Err(err) => {
                log::error!("Error reading {}: {:#}", file_path.display(), err);
                false
            }
        }
    }

    fn process_file(&self, file_path: &Path) -> Result<bool> {
        let original_content = read_text(file_path)?;
        let mut changed = false;

        // Renames first, so later steps see the final path.
        let mut current_path: PathBuf = file_path.to_path_buf();
        for strategy in self.strategies.iter().filter(|s| s.is_renaming_strategy()) {
            if let Some(new_path) = strategy.rename_file(&current_path) {
                if new_path != current_path {
                    current_path = new_path;
                    changed = true;
                }
            }
        }

        let mut processed_content = extract_marked_content(&original_content);

        for strategy in self.strategies.iter().filter(|s| s.mutates_content()) {
            log::debug!("Applying strategy {} to {}", strategy.name(), current_path.display());
            processed_content = strategy
                .process(&processed_content, &current_path)
                .with_context(|| format!("strategy {} failed", strategy.name()))?;
        }

        if processed_content != original_content {
            fs::write(&current_path, &processed_content)
                .with_context(|| format!("Failed to write {}", current_path.display()))?;
            changed = true;
        }

        Ok(changed)
    }
}

/// Public API function to process a file using a provided `FileProcessor` implementation.
pub fn process_file_with_processor<P: AsRef<Path>>(
    processor: &dyn FileProcessor,
    file_path: P,
) -> Result<bool> {
    processor.process_file(file_path.as_ref())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
