//! Binary entry point for prompt-setup.
//!
//! Loads a setup file and exercises the configuration surface from the
//! command line.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use prompt_setup::cli::{cmd_check, cmd_preview, cmd_view};
use prompt_setup::observability;
use prompt_setup::{PreviewFormat, SetupConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Environment variable naming a configuration file.
const CONFIG_PATH_ENV: &str = "SETUP_CONFIG_PATH";

/// Prompt setup - inspect pre-conversation prompt variable surfaces.
#[derive(Parser)]
#[command(name = "prompt-setup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Render the prompt template against the draft.
    Preview {
        /// Setup file (TOML).
        setup: PathBuf,

        /// Variable assignment, KEY=VALUE (repeatable).
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Output format: plain, markdown, html, or json.
        #[arg(short, long, default_value = "plain")]
        format: PreviewFormat,
    },

    /// Report required variables that are still empty (exit code 1 if any).
    Check {
        /// Setup file (TOML).
        setup: PathBuf,

        /// Variable assignment, KEY=VALUE (repeatable).
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// Print the presentation model as JSON.
    View {
        /// Setup file (TOML).
        setup: PathBuf,

        /// Variable assignment, KEY=VALUE (repeatable).
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Open saved inputs for editing before rendering the view.
        #[arg(long)]
        edit: bool,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_settings(Some(&config.logging), cli.verbose) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(command: Commands, config: &SetupConfig) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Preview { setup, set, format } => {
            let output = cmd_preview(&setup, config, &set, format)
                .with_context(|| format!("preview of {}", setup.display()))?;
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        },
        Commands::Check { setup, set } => {
            let report = cmd_check(&setup, config, &set)
                .with_context(|| format!("check of {}", setup.display()))?;
            println!("{report}");
            Ok(if report.is_ready() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        },
        Commands::View { setup, set, edit } => {
            let output = cmd_view(&setup, config, &set, edit)
                .with_context(|| format!("view of {}", setup.display()))?;
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Loads configuration.
fn load_config(path: Option<&Path>) -> anyhow::Result<SetupConfig> {
    if let Some(config_path) = path {
        return SetupConfig::load_from_file(config_path)
            .with_context(|| format!("reading {}", config_path.display()));
    }

    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        if !config_path.trim().is_empty() {
            let config_path = PathBuf::from(config_path);
            return SetupConfig::load_from_file(&config_path)
                .with_context(|| format!("reading {}", config_path.display()));
        }
    }

    Ok(SetupConfig::load_default())
}
