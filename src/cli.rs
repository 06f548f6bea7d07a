use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Daystep timestamp fixture generator.
#[derive(Parser)]
#[command(
    name = "daystep",
    version,
    about = "Generate and verify a day-stepped epoch/RFC3339 timestamp fixture"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to an optional TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; generates the fixture when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write the fixture file.
    Generate(GenerateArgs),
    /// Check an existing fixture file.
    Verify(VerifyArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args, Default)]
pub struct GenerateArgs {
    /// Override the output path from config (default `time.txt`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `verify` subcommand.
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Fixture to check; defaults to the configured output path.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
