use clap::{Parser, Subcommand};
use std::path::PathBuf;

const PACKAGE_HELP: &str = "

Packages are names from uv.lock. Every package they depend on, directly or
transitively, is checked as well, using the license files of the
distributions installed in the project's virtualenv.";

#[derive(Parser)]
#[command(name = "py-license-check")]
#[command(about = "License compliance checks for uv projects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Minimum confidence (0.0 to 1.0) for a license text match [default: 0.9]
    #[arg(long, global = true, value_name = "THRESHOLD")]
    pub confidence_threshold: Option<f64>,

    /// Glob pattern of package names to ignore; their dependencies are still checked
    #[arg(long, global = true, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Path to uv.lock (default: nearest one above the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub lock: Option<PathBuf>,

    /// Path to site-packages (default: the project's .venv)
    #[arg(long, global = true, value_name = "PATH")]
    pub site_packages: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Checks whether licenses for a package are not Forbidden.
    #[command(long_about = format!("Checks whether licenses for a package are not Forbidden.{}", PACKAGE_HELP))]
    Check {
        /// Packages to check
        #[arg(required = true, value_name = "PACKAGE")]
        packages: Vec<String>,

        /// Exclude restricted licenses (e.g. GPL) too
        #[arg(long)]
        exclude_restricted: bool,
    },
    /// Show or validate configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration
        #[arg(long)]
        validate: bool,
    },
}
