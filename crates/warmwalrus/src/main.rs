// crates/warmwalrus/src/main.rs

use anyhow::Result;
use std::process;

use warmwalrus::{build_cli, run_cleanmarkers, CleanMarkersConfig, LogConfig};

fn main() -> Result<()> {
    let mut cli = build_cli();
    let matches = cli.get_matches_mut();
    let main_verbose = matches.get_count("verbose");

    let Some((command, sub_matches)) = matches.subcommand() else {
        cli.print_help()?;
        println!();
        process::exit(1);
    };

    let sub_verbose = if command == "cleanmarkers" {
        sub_matches.get_count("verbose")
    } else {
        0
    };
    LogConfig::from_verbosity(main_verbose, sub_verbose).init()?;

    match command {
        "version" => {
            println!("warmwalrus {}", env!("CARGO_PKG_VERSION"));
            log::info!("Version command executed");
        }
        "cleanmarkers" => {
            let config = CleanMarkersConfig::from_matches(sub_matches)?;
            if let Err(err) = run_cleanmarkers(&config) {
                eprintln!("{:#}", err);
                process::exit(1);
            }
        }
        other => unreachable!("unhandled subcommand {}", other),
    }

    Ok(())
}
