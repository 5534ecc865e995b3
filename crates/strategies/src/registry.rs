// crates/strategies/src/registry.rs

use crate::claude_url::ClaudeUrl;
use crate::file_renamer::FileRenamer;
use crate::newline_padding::NewlinePadding;
use crate::traits::Strategy;
use std::collections::BTreeMap;

pub const NEWLINE_PADDING: &str = "newline_padding";
pub const CLAUDE_URL: &str = "claude_url";
pub const FILE_RENAMER: &str = "file_renamer";

/// Strategies applied when the user names none.
pub const DEFAULT_STRATEGIES: &[&str] = &[FILE_RENAMER, CLAUDE_URL];

/// Catalog of strategies keyed by registration name.
pub struct StrategyRegistry {
    strategies: BTreeMap<String, Box<dyn Strategy>>,
}

/// The ordered strategies chosen for a run, plus any names that did not
/// resolve.
pub struct Selection {
    pub strategies: Vec<Box<dyn Strategy>>,
    pub unknown: Vec<String>,
}

impl Selection {
    pub fn names(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl StrategyRegistry {
    /// Creates a registry holding the built-in strategies.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_strategy(NEWLINE_PADDING, Box::new(NewlinePadding::default()));
        registry.register_strategy(CLAUDE_URL, Box::new(ClaudeUrl::new()));
        registry.register_strategy(FILE_RENAMER, Box::new(FileRenamer::new()));
        registry
    }

    pub fn empty() -> Self {
        Self {
            strategies: BTreeMap::new(),
        }
    }

    /// Registers `strategy` under `name`, replacing any previous entry.
    pub fn register_strategy(&mut self, name: impl Into<String>, strategy: Box<dyn Strategy>) {
        self.strategies.insert(name.into(), strategy);
    }

    pub fn get_strategy(&self, name: &str) -> Option<&dyn Strategy> {
        self.strategies.get(name).map(|s| &**s)
    }

    /// Registered names, sorted.
    pub fn list_strategies(&self) -> Vec<String> {
        self.strategies.keys().cloned().collect()
    }

    /// Builds the ordered strategy list for a run, consuming the registry.
    ///
    /// With no explicit names the defaults apply (`claude_url` dropped when
    /// disabled). Explicit names resolve in order, repeats collapse to their
    /// first position, and unknown names are reported back. `claude_url` is
    /// then put in front unless it was disabled or already named.
    pub fn resolve(mut self, selected: &[String], disable_claude_url: bool) -> Selection {
        let mut names: Vec<String> = Vec::new();
        let mut unknown: Vec<String> = Vec::new();

        if selected.is_empty() {
            names.extend(
                DEFAULT_STRATEGIES
                    .iter()
                    .filter(|name| !(disable_claude_url && **name == CLAUDE_URL))
                    .map(|name| name.to_string()),
            );
        } else {
            for name in selected {
                if names.contains(name) || unknown.contains(name) {
                    continue;
                }
                if self.strategies.contains_key(name) {
                    names.push(name.clone());
                } else {
                    unknown.push(name.clone());
                }
            }
            let named_claude_url = selected.iter().any(|n| n == CLAUDE_URL);
            if !disable_claude_url && !named_claude_url {
                names.insert(0, CLAUDE_URL.to_string());
            }
        }

        if !unknown.is_empty() {
            log::debug!(
                "Unresolved strategy names: {} (available: {})",
                unknown.join(", "),
                self.list_strategies().join(", ")
            );
        }

        let strategies = names
            .iter()
            .filter_map(|name| self.strategies.remove(name))
            .collect();

        Selection { strategies, unknown }
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
