// crates/strategies/src/newline_padding.rs

use crate::traits::Strategy;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_NEWLINE_COUNT: usize = 20;

/// Ensures content starts with at least `count` newline characters.
pub struct NewlinePadding {
    count: usize,
}

impl NewlinePadding {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for NewlinePadding {
    fn default() -> Self {
        Self::new(DEFAULT_NEWLINE_COUNT)
    }
}

impl Strategy for NewlinePadding {
    fn name(&self) -> String {
        format!("newline_padding_{}", self.count)
    }

    fn process(&self, content: &str, _path: &Path) -> Result<String> {
        let leading = content.bytes().take_while(|&b| b == b'\n').count();
        if leading >= self.count {
            return Ok(content.to_string());
        }
        let mut padded = "\n".repeat(self.count - leading);
        padded.push_str(content);
        Ok(padded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(strategy: &NewlinePadding, content: &str) -> String {
        strategy.process(content, Path::new("x.md")).unwrap()
    }

    #[test]
    fn test_name_includes_count() {
        assert_eq!(NewlinePadding::default().name(), "newline_padding_20");
        assert_eq!(NewlinePadding::new(3).name(), "newline_padding_3");
    }

    #[test]
    fn test_empty_content_becomes_exact_padding() {
        assert_eq!(pad(&NewlinePadding::new(4), ""), "\n\n\n\n");
    }

    #[test]
    fn test_inserts_only_the_deficit() {
        assert_eq!(pad(&NewlinePadding::new(3), "\nbody\n"), "\n\n\nbody\n");
    }

    #[test]
    fn test_enough_padding_is_unchanged() {
        let content = "\n\n\n\n\nbody";
        assert_eq!(pad(&NewlinePadding::new(3), content), content);
    }

    #[test]
    fn test_only_leading_run_counts() {
        // Carriage returns break the run.
        assert_eq!(pad(&NewlinePadding::new(2), "\r\n\nbody"), "\n\n\r\n\nbody");
    }

    #[test]
    fn test_padding_is_idempotent() {
        let strategy = NewlinePadding::default();
        let long = "\n".repeat(25);
        for content in ["", "text", "\n\ntext", long.as_str()] {
            let once = pad(&strategy, content);
            let twice = pad(&strategy, &once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_is_a_content_strategy() {
        let strategy = NewlinePadding::default();
        assert!(!strategy.is_renaming_strategy());
        assert!(strategy.mutates_content());
    }
}
