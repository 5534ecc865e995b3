// crates/warmwalrus/src/logging.rs

use anyhow::{anyhow, Result};
use log::LevelFilter;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Log target of the command-line driver itself.
const MAIN_TARGET: &str = "warmwalrus";

/// Two independent thresholds: `main` for the driver (`warmwalrus -v`) and
/// `sub` for the pipeline crates (`cleanmarkers -v`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub main: LevelFilter,
    pub sub: LevelFilter,
}

impl LogConfig {
    pub fn from_verbosity(main_verbose: u8, sub_verbose: u8) -> Self {
        Self {
            main: Self::main_level(main_verbose),
            sub: Self::sub_level(sub_verbose),
        }
    }

    /// 0 = warnings and errors, 1 = info, 2+ = debug.
    pub fn main_level(count: u8) -> LevelFilter {
        match count {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// 0 = errors only, 1 = warnings, 2 = info, 3+ = debug.
    pub fn sub_level(count: u8) -> LevelFilter {
        match count {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// `EnvFilter` directives. Pipeline crates log at whichever threshold is
    /// more verbose, so warnings such as a missing path still surface with
    /// no flags given.
    pub fn directives(&self) -> String {
        let pipeline = self.sub.max(self.main);
        format!(
            "{},{}={}",
            pipeline.as_str().to_lowercase(),
            MAIN_TARGET,
            self.main.as_str().to_lowercase()
        )
    }

    /// Installs the global subscriber; `log` records from every crate are
    /// forwarded to it. `RUST_LOG` overrides both thresholds.
    pub fn init(&self) -> Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .try_init()
            .map_err(|err| anyhow!("Failed to initialise logging: {}", err))
    }
}
