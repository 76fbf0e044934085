//! clusterctl - Instrument Cluster Emulator host tool
//!
//! Lists the panel's input table, dumps and validates engine configuration,
//! and plays scripted scenarios through the real poll engine on a simulated
//! board.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod board;
mod commands;
mod completion;
mod error;
mod loader;
mod output;
mod scenario;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "clusterctl")]
#[command(about = "Instrument Cluster Emulator host tool - inspect the panel and replay scenarios")]
#[command(version)]
#[command(long_about = "
clusterctl drives the instrument cluster poll engine on the host.
It prints the input table, checks engine configuration files, and replays
scripted button/knob scenarios, printing the exact serial report lines the
firmware would send.

Use --json for machine-readable output. Logs go to stderr.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the panel's input descriptor table
    Inputs,

    /// Print the default engine configuration or validate a file
    Config {
        /// Configuration file to validate (.json, .yaml or .yml)
        #[arg(long, value_name = "FILE")]
        check: Option<PathBuf>,
    },

    /// Replay a scripted scenario and print the report lines
    Simulate {
        /// Scenario file (.json, .yaml or .yml)
        scenario: PathBuf,

        /// Engine configuration file
        #[arg(short, long, value_name = "FILE", env = "CLUSTERCTL_CONFIG")]
        config: Option<PathBuf>,

        /// Prefix each line with the simulated time in milliseconds
        #[arg(short, long)]
        timestamps: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("clusterctl={log_level},cluster_engine={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Inputs => commands::inputs::execute(cli.json),
        Commands::Config { check } => commands::config::execute(check.as_deref(), cli.json),
        Commands::Simulate {
            scenario,
            config,
            timestamps,
        } => commands::simulate::execute(scenario, config.as_deref(), *timestamps, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
