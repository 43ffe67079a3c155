use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{handle_check, handle_config};
use py_license_check::config::Overrides;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let overrides = Overrides {
        confidence_threshold: cli.confidence_threshold,
        ignore: cli.ignore,
        exclude_restricted: false,
        lock_file: cli.lock,
        site_packages: cli.site_packages,
    };

    match cli.command {
        Commands::Check { packages, exclude_restricted } => {
            handle_check(packages, exclude_restricted, overrides)
        }
        Commands::Config { show, validate } => {
            handle_config(show, validate, cli.quiet, overrides)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
