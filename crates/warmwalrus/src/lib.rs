// crates/warmwalrus/src/lib.rs

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use find_candidate_files::find_candidate_files;
use process_files::{FileProcessor, StrategyPipeline};
use strategies::StrategyRegistry;

pub mod config;
pub mod logging;

pub use config::CleanMarkersConfig;
pub use logging::LogConfig;

/// Command-line definition shared by the binary and the config tests.
pub fn build_cli() -> Command {
    Command::new("warmwalrus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clean marker delimiters from files")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase main app verbosity (can be used multiple times)"),
        )
        .subcommand(Command::new("version").about("Show version information"))
        .subcommand(cleanmarkers_command())
}

fn cleanmarkers_command() -> Command {
    Command::new("cleanmarkers")
        .about("Clean marker delimiters from files")
        .arg(
            Arg::new("paths")
                .required(true)
                .num_args(1..)
                .value_name("PATH")
                .help("One or more directory or file paths to process"),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .num_args(1)
                .default_value("md")
                .help("File extension to process"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Show what would be done without making changes"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .num_args(1)
                .action(ArgAction::Append)
                .help("Exclude directories containing this substring (default: .git)"),
        )
        .arg(
            Arg::new("age")
                .long("age")
                .num_args(1)
                .help("Only process files modified within this time (e.g., 10m, 1d, 2.3w)"),
        )
        .arg(
            Arg::new("strategies")
                .long("strategies")
                .num_args(1)
                .action(ArgAction::Append)
                .help("Strategy to apply: newline_padding, claude_url, file_renamer (repeatable)"),
        )
        .arg(
            Arg::new("no_claude_url")
                .long("no-claude-url")
                .action(ArgAction::SetTrue)
                .help("Do not add the claude_url strategy by default"),
        )
        .arg(
            Arg::new("allow_overwrite")
                .long("allow-overwrite")
                .action(ArgAction::SetTrue)
                .overrides_with("no_overwrite")
                .help("Let file_renamer replace an existing file (default)"),
        )
        .arg(
            Arg::new("no_overwrite")
                .long("no-overwrite")
                .action(ArgAction::SetTrue)
                .overrides_with("allow_overwrite")
                .help("Never let file_renamer replace an existing file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase subcommand verbosity (can be used multiple times)"),
        )
}

/// Discovers candidates, resolves strategies and runs the pipeline over
/// every file. Returns how many files were (or would be) processed.
pub fn run_cleanmarkers(config: &CleanMarkersConfig) -> Result<usize> {
    log::info!("Starting cleanmarkers command");
    log::debug!("Configuration: {:?}", config);
    if let (Some(spec), Some(seconds)) = (&config.age_spec, config.max_age) {
        log::info!("Age filter: {} ({} seconds)", spec, seconds);
    }

    log::info!("Searching for .{} files in: {:?}", config.extension, config.paths);
    let files = find_candidate_files(&config.paths, &config.extension, &config.excludes, config.max_age);
    if files.is_empty() {
        if config.verbose > 0 {
            eprintln!("No files found to process");
        }
        log::info!("No files found to process");
        return Ok(0);
    }
    log::info!("Found {} files to process", files.len());

    let selection = StrategyRegistry::new().resolve(&config.strategies, config.disable_claude_url);
    if !selection.unknown.is_empty() {
        log::warn!("Unknown strategies ignored: {}", selection.unknown.join(", "));
    }
    log::info!("Using strategies: {}", selection.names().join(", "));

    let mut pipeline = StrategyPipeline::new(selection.strategies);
    pipeline.configure_overwrite(config.allow_overwrite);

    let count = process_candidates(&pipeline, &files, config.dry_run, config.verbose)?;
    if config.dry_run {
        log::info!("Dry run complete: {} files would be processed", count);
    } else {
        log::info!("Processing complete: {} files processed", count);
    }
    Ok(count)
}

/// The per-file loop. The first failing file stops the run; its error
/// carries the offending path.
pub fn process_candidates(
    processor: &dyn FileProcessor,
    files: &[PathBuf],
    dry_run: bool,
    verbose: u8,
) -> Result<usize> {
    let mut processed = 0;

    for file in files {
        if dry_run {
            if processor.needs_processing(file) {
                println!("Would process: {}", file.display());
                processed += 1;
            } else if verbose > 0 {
                println!("Would skip (no markers): {}", file.display());
            }
            continue;
        }

        match processor.process_file(file) {
            Ok(true) => {
                if verbose > 0 {
                    println!("Processed: {}", file.display());
                }
                processed += 1;
            }
            Ok(false) => {
                if verbose > 0 {
                    println!("Skipped (no changes): {}", file.display());
                }
            }
            Err(err) => {
                log::error!("Error processing {}: {:#}", file.display(), err);
                return Err(err.context(format!("Error processing {}", file.display())));
            }
        }
    }

    Ok(processed)
}
