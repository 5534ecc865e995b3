// crates/warmwalrus/src/config.rs

use anyhow::{Context, Result};
use clap::ArgMatches;
use parse_age::parse_age;

/// Excludes used when `--exclude` is not given.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git"];

/// Runtime configuration for `cleanmarkers`, composed from the CLI.
#[derive(Clone, Debug)]
pub struct CleanMarkersConfig {
    pub paths: Vec<String>,
    pub extension: String,
    pub dry_run: bool,
    pub excludes: Vec<String>,
    pub age_spec: Option<String>,
    pub max_age: Option<f64>, // seconds; None == no age filtering
    pub strategies: Vec<String>,
    pub disable_claude_url: bool,
    pub allow_overwrite: bool,
    pub verbose: u8,
}

impl CleanMarkersConfig {
    /// Builds the config from the `cleanmarkers` subcommand matches. A bad
    /// `--age` value is reported here, before any file is looked at.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let strings = |id: &str| -> Vec<String> {
            matches
                .get_many::<String>(id)
                .unwrap_or_default()
                .cloned()
                .collect()
        };

        let mut excludes = strings("exclude");
        if excludes.is_empty() {
            excludes = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
        }

        let age_spec = matches.get_one::<String>("age").cloned();
        let max_age = match &age_spec {
            Some(spec) => Some(parse_age(spec).with_context(|| format!("Invalid --age value '{}'", spec))?),
            None => None,
        };

        Ok(Self {
            paths: strings("paths"),
            extension: matches
                .get_one::<String>("ext")
                .cloned()
                .unwrap_or_else(|| "md".to_string()),
            dry_run: matches.get_flag("dry_run"),
            excludes,
            age_spec,
            max_age,
            strategies: strings("strategies"),
            disable_claude_url: matches.get_flag("no_claude_url"),
            allow_overwrite: !matches.get_flag("no_overwrite"),
            verbose: matches.get_count("verbose"),
        })
    }
}
